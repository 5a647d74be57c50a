//! Shared types and constants for Falliant.
//!
//! Everything here is plain data with no dependencies, so the core engine, the
//! terminal front end and the high-score store can all agree on piece identity,
//! board size and the tuning constants.
//!
//! # Board
//!
//! - **Width**: 10 columns (x = 0..9, left to right)
//! - **Height**: 20 rows (y = 0..19, top to bottom)
//!
//! # Timing
//!
//! Gravity is counted in frames, not milliseconds. The driving loop calls
//! `tick()` once per frame at [`FRAMERATE`]; a piece falls one row every
//! `fall_delay` frames.
//!
//! | Level | Fall delay (frames) |
//! |-------|---------------------|
//! | 1 | 20 |
//! | 2 | 18 |
//! | 5 | 12 |
//! | 10 | 2 |
//! | 11+ | 1 |
//!
//! # Examples
//!
//! ```
//! use falliant_types::{PieceKind, BOARD_WIDTH, BOARD_HEIGHT};
//!
//! assert_eq!(PieceKind::T.color_id(), 3);
//! assert_eq!(PieceKind::from_color_id(3), Some(PieceKind::T));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Target frames per second for the driving loop
pub const FRAMERATE: u32 = 60;

/// Frames between automatic one-row drops at level 1
pub const BASE_FALL_DELAY: u32 = 20;

/// Frames removed from the fall delay per level above 1
pub const FALL_DELAY_STEP: u32 = 2;

/// Fastest possible gravity: one row per frame
pub const MIN_FALL_DELAY: u32 = 1;

/// Cleared lines needed per level
pub const LINES_PER_LEVEL: u32 = 10;

/// Highest starting level offered by the level select screen
pub const MAX_START_LEVEL: u32 = 10;

/// Upper bound on hard drop steps, guards against a malformed board
pub const HARD_DROP_LIMIT: usize = 2 * BOARD_HEIGHT as usize;

/// Frames after a new piece appears during which hard drop is ignored
/// (0.3 s at [`FRAMERATE`])
pub const HARD_DROP_COOLDOWN_FRAMES: u32 = 18;

/// Points per simultaneous line clear, multiplied by the level.
///
/// Index is the number of rows cleared in one lock.
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// Number of entries kept in the high-score table
pub const HIGH_SCORE_CAPACITY: usize = 10;

/// Length of the initials stored with a high score
pub const INITIALS_LEN: usize = 3;

/// The seven piece kinds, in catalog order.
///
/// Catalog order fixes the color identity: I=1, O=2, T=3, J=4, L=5, S=6, Z=7.
/// - **I**: cyan bar
/// - **O**: yellow square
/// - **T**: magenta
/// - **J**: blue
/// - **L**: white (kept apart from Z's red)
/// - **S**: green
/// - **Z**: red
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    J,
    L,
    S,
    Z,
}

impl PieceKind {
    /// All kinds in catalog order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::J,
        PieceKind::L,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// Position in the catalog (0..7)
    pub fn index(self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::O => 1,
            PieceKind::T => 2,
            PieceKind::J => 3,
            PieceKind::L => 4,
            PieceKind::S => 5,
            PieceKind::Z => 6,
        }
    }

    /// Kind at a catalog position, wrapping out-of-range indices.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    /// Color identity written into board cells (1..=7, 0 means empty)
    pub fn color_id(self) -> u8 {
        self.index() as u8 + 1
    }

    /// Inverse of [`PieceKind::color_id`]
    ///
    /// ```
    /// use falliant_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_color_id(1), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_color_id(0), None);
    /// assert_eq!(PieceKind::from_color_id(8), None);
    /// ```
    pub fn from_color_id(id: u8) -> Option<Self> {
        match id {
            1..=7 => Some(Self::ALL[(id - 1) as usize]),
            _ => None,
        }
    }
}

/// Translation directions accepted by the engine's move primitive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Down,
}

impl Direction {
    /// Cell offset `(dx, dy)` for one step in this direction
    pub fn delta(self) -> (i8, i8) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
        }
    }
}

/// Player commands accepted by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    SoftDrop,
    HardDrop,
    Rotate,
    Hold,
    Pause,
}

/// Cell on the board (None = empty, Some = filled by that piece kind)
pub type Cell = Option<PieceKind>;
