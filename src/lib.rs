//! Falliant (workspace facade crate).
//!
//! The implementation lives in dedicated crates under `crates/`; this package
//! re-exports them as `falliant::{core,input,scores,term,types}` and adds the
//! screen flow ([`app`]) and runtime configuration ([`config`]) used by the
//! `falliant` binary.

pub use falliant_core as core;
pub use falliant_input as input;
pub use falliant_scores as scores;
pub use falliant_term as term;
pub use falliant_types as types;

pub mod app;
pub mod config;
