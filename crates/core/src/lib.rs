//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the board, the shape catalog, the piece engine and the
//! scoring rules. It has no dependencies on terminals or files, making it:
//!
//! - **Deterministic**: a seed (or an explicit [`SequenceSource`]) fixes every draw
//! - **Testable**: each rule is exercised by unit tests next to the code
//! - **Portable**: the terminal front end only reads [`GameSnapshot`]s
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid with collision checks and row clearing
//! - [`shapes`]: the seven pieces and their rotation masks
//! - [`piece`]: a positioned piece and the cells it covers
//! - [`game_state`]: spawning, movement, rotation kicks, hold, gravity
//! - [`rng`]: piece sources (seeded uniform draws, fixed sequences)
//! - [`scoring`]: line-clear points, leveling, fall delay
//! - [`snapshot`]: read-only frame data for renderers
//!
//! # Game Rules
//!
//! - **Uniform draws**: each new piece is an independent pick of the seven kinds
//! - **Simple kicks**: a blocked rotation retries one column left, one right, then two right
//! - **Instant lock**: a piece locks as soon as a downward move is blocked
//! - **Hold**: store one piece, once per spawned piece
//! - **Scoring**: 40/100/300/1200 times the level for 1-4 rows
//!
//! # Example
//!
//! ```
//! use falliant_core::{GameState, SequenceSource};
//! use falliant_core::types::{GameAction, PieceKind};
//!
//! let mut game = GameState::with_source(1, SequenceSource::repeat(PieceKind::O));
//!
//! game.apply_action(GameAction::MoveLeft);
//! game.apply_action(GameAction::HardDrop);
//!
//! assert_eq!(game.board().filled_count(), 4);
//! assert_eq!(game.score(), 0);
//! ```
//!
//! # Timing
//!
//! Gravity is frame based. Call [`GameState::tick`] once per frame; the piece
//! drops one row every `fall_delay` frames (20 at level 1, two fewer per level,
//! never below 1).

pub mod board;
pub mod game_state;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod shapes;
pub mod snapshot;

pub use falliant_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, ColorGrid};
pub use game_state::{GameState, MoveOutcome, RunSummary};
pub use piece::{Piece, PieceCells};
pub use rng::{PieceSource, SequenceSource, SimpleRng, UniformSource};
pub use scoring::{fall_delay_for_level, level_for_lines, line_clear_points};
pub use shapes::Mask;
pub use snapshot::GameSnapshot;
