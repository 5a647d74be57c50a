//! Snapshot module - plain-data view of a game for renderers

use crate::board::ColorGrid;
use crate::piece::Piece;
use crate::types::{PieceKind, BASE_FALL_DELAY, BOARD_HEIGHT, BOARD_WIDTH};

/// Read-only copy of everything a renderer needs for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: ColorGrid,
    pub current: Option<Piece>,
    pub next: PieceKind,
    pub held: Option<PieceKind>,
    pub can_hold: bool,
    pub paused: bool,
    pub game_over: bool,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub fall_delay: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn playable(&self) -> bool {
        !self.game_over && !self.paused
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            current: None,
            next: PieceKind::I,
            held: None,
            can_hold: true,
            paused: false,
            game_over: false,
            score: 0,
            level: 1,
            lines: 0,
            fall_delay: BASE_FALL_DELAY,
        }
    }
}
