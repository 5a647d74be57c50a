//! Piece module - a falling piece and the cells it covers

use arrayvec::ArrayVec;

use crate::shapes::{self, Mask};
use crate::types::{PieceKind, BOARD_WIDTH};

/// Absolute cells covered by a piece
pub type PieceCells = ArrayVec<(i8, i8), 4>;

/// A piece: kind, rotation index and board origin.
///
/// `x` is the column and `y` the row of the mask's top-left corner. `y` may be
/// negative while a piece hangs above the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub rotation: u8,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Piece in its first rotation state at the board origin
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            rotation: 0,
            x: 0,
            y: 0,
        }
    }

    /// Piece in its first rotation state, centered horizontally on row 0
    pub fn spawned(kind: PieceKind) -> Self {
        let width = shapes::mask(kind, 0).width();
        Self {
            x: ((BOARD_WIDTH - width) / 2) as i8,
            ..Self::new(kind)
        }
    }

    /// Active rotation mask
    pub fn mask(&self) -> &'static Mask {
        shapes::mask(self.kind, self.rotation)
    }

    pub fn width(&self) -> u8 {
        self.mask().width()
    }

    pub fn height(&self) -> u8 {
        self.mask().height()
    }

    pub fn color_id(&self) -> u8 {
        shapes::color(self.kind)
    }

    /// Absolute board cells covered by the active mask
    pub fn cells(&self) -> PieceCells {
        self.mask()
            .cells()
            .map(|(dx, dy)| (self.x + dx, self.y + dy))
            .collect()
    }

    /// Copy of this piece translated by `(dx, dy)`
    pub fn shifted(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Copy of this piece advanced to the next rotation state (same origin)
    pub fn rotated(&self) -> Self {
        let count = shapes::rotation_count(self.kind);
        Self {
            rotation: (self.rotation + 1) % count,
            ..*self
        }
    }
}
