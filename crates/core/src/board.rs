//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell is empty or filled with the kind
//! of the piece that was placed there. Uses a flat array for cache locality.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom)

use crate::piece::Piece;
use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Color-id grid exported to renderers (0 = empty, 1..=7 = piece color)
pub type ColorGrid = [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y).is_some_and(|row| row.iter().all(|cell| cell.is_some()))
    }

    /// Check if a row holds no placed cells
    pub fn is_row_empty(&self, y: usize) -> bool {
        self.row(y).is_some_and(|row| row.iter().all(|cell| cell.is_none()))
    }

    /// Cells of row `y`, left to right
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= BOARD_HEIGHT as usize {
            return None;
        }
        let start = y * BOARD_WIDTH as usize;
        Some(&self.cells[start..start + BOARD_WIDTH as usize])
    }

    /// Fill every cell of row `y` with `kind`
    pub fn fill_row(&mut self, y: usize, kind: PieceKind) {
        if y >= BOARD_HEIGHT as usize {
            return;
        }
        let start = y * BOARD_WIDTH as usize;
        self.cells[start..start + BOARD_WIDTH as usize].fill(Some(kind));
    }

    /// Whether `piece` overlaps a wall, the floor, or a placed cell.
    ///
    /// Cells above the top edge (`y < 0`) only count against the side walls.
    pub fn collides(&self, piece: &Piece) -> bool {
        piece.cells().iter().any(|&(x, y)| {
            if x < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 {
                return true;
            }
            y >= 0 && self.is_occupied(x, y)
        })
    }

    /// Write the piece into the grid.
    ///
    /// Cells outside the board (including above the top edge) are dropped.
    pub fn place(&mut self, piece: &Piece) {
        for (x, y) in piece.cells() {
            self.set(x, y, Some(piece.kind));
        }
    }

    /// Remove every full row and compact the rows above it.
    ///
    /// Single bottom-up two-pointer pass: surviving rows are copied down to the
    /// write cursor, then the vacated top rows are zeroed. Returns the number of
    /// rows removed.
    pub fn clear_full_rows(&mut self) -> usize {
        let width = BOARD_WIDTH as usize;
        let mut write_y = BOARD_HEIGHT as usize;
        let mut cleared = 0;

        for read_y in (0..BOARD_HEIGHT as usize).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
                continue;
            }
            write_y -= 1;
            if write_y != read_y {
                let src_start = read_y * width;
                self.cells
                    .copy_within(src_start..src_start + width, write_y * width);
            }
        }

        self.cells[..write_y * width].fill(None);
        cleared
    }

    /// Write the color-id grid used by renderers and snapshots
    pub fn write_color_grid(&self, out: &mut ColorGrid) {
        for (y, row) in out.iter_mut().enumerate() {
            for (x, slot) in row.iter_mut().enumerate() {
                *slot = self.cells[y * BOARD_WIDTH as usize + x].map_or(0, PieceKind::color_id);
            }
        }
    }

    /// Color-id grid (0 = empty)
    pub fn color_grid(&self) -> ColorGrid {
        let mut out = [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        self.write_color_grid(&mut out);
        out
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
