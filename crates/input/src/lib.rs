//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] during play
//! and into [`MenuKey`] on every other screen. Holds no state: each key event
//! maps to at most one command.

pub mod map;

pub use falliant_types as types;

pub use map::{handle_key_event, is_press, is_quit_request, menu_key, should_quit, MenuKey};
