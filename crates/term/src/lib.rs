//! Terminal front end.
//!
//! A small, game-oriented rendering layer: screens are drawn into a plain
//! framebuffer which the [`TerminalRenderer`] diffs and flushes through
//! crossterm. No widget toolkit is involved.
//!
//! - [`fb`]: styled character framebuffer
//! - [`game_view`]: board, current piece, sidebar and overlays
//! - [`screens`]: intro, menu, level select, initials entry, high-score table
//! - [`renderer`]: raw-mode terminal session and diff encoding

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod screens;

pub use falliant_core as core;
pub use falliant_scores as scores;
pub use falliant_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{kind_color, GameView, Viewport, MIN_HEIGHT, MIN_WIDTH};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use screens::{Screen, ScreenRenderer, MENU_OPTIONS};
