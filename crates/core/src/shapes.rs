//! Shape catalog - rotation masks and colors for every piece kind
//!
//! Each rotation state is a tight bounding-box occupancy mask. The masks are
//! parsed from row strings at compile time (`#` = filled, `.` = empty), so there
//! is no pattern scanning at runtime.
//!
//! Rotation counts: O has 1 state, I/S/Z have 2, T/J/L have 4.

use crate::types::PieceKind;

/// Largest mask edge length (the I piece is 4 long)
pub const MAX_MASK_SIZE: usize = 4;

/// Boolean occupancy matrix for one rotation state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mask {
    width: u8,
    height: u8,
    rows: [[bool; MAX_MASK_SIZE]; MAX_MASK_SIZE],
}

impl Mask {
    /// Build a mask from row strings. Panics at compile time on malformed input.
    const fn parse(rows: &[&str]) -> Mask {
        assert!(!rows.is_empty() && rows.len() <= MAX_MASK_SIZE);
        let width = rows[0].len();
        assert!(width > 0 && width <= MAX_MASK_SIZE);

        let mut out = [[false; MAX_MASK_SIZE]; MAX_MASK_SIZE];
        let mut y = 0;
        while y < rows.len() {
            let bytes = rows[y].as_bytes();
            assert!(bytes.len() == width);
            let mut x = 0;
            while x < width {
                out[y][x] = match bytes[x] {
                    b'#' => true,
                    b'.' => false,
                    _ => panic!("mask rows use '#' and '.'"),
                };
                x += 1;
            }
            y += 1;
        }

        Mask {
            width: width as u8,
            height: rows.len() as u8,
            rows: out,
        }
    }

    /// Bounding box width in cells
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Bounding box height in cells
    pub fn height(&self) -> u8 {
        self.height
    }

    /// Whether the cell at `(x, y)` inside the bounding box is filled
    pub fn is_filled(&self, x: u8, y: u8) -> bool {
        x < self.width && y < self.height && self.rows[y as usize][x as usize]
    }

    /// Offsets `(dx, dy)` of the filled cells, row-major
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        (0..self.height).flat_map(move |y| {
            (0..self.width)
                .filter(move |&x| self.rows[y as usize][x as usize])
                .map(move |x| (x as i8, y as i8))
        })
    }
}

const I_STATES: [Mask; 2] = [
    Mask::parse(&["####"]),
    Mask::parse(&["#", "#", "#", "#"]),
];

const O_STATES: [Mask; 1] = [Mask::parse(&["##", "##"])];

const T_STATES: [Mask; 4] = [
    Mask::parse(&[".#.", "###"]),
    Mask::parse(&["#.", "##", "#."]),
    Mask::parse(&["###", ".#."]),
    Mask::parse(&[".#", "##", ".#"]),
];

const J_STATES: [Mask; 4] = [
    Mask::parse(&["#..", "###"]),
    Mask::parse(&["##", "#.", "#."]),
    Mask::parse(&["###", "..#"]),
    Mask::parse(&[".#", ".#", "##"]),
];

const L_STATES: [Mask; 4] = [
    Mask::parse(&["..#", "###"]),
    Mask::parse(&["#.", "#.", "##"]),
    Mask::parse(&["###", "#.."]),
    Mask::parse(&["##", ".#", ".#"]),
];

const S_STATES: [Mask; 2] = [
    Mask::parse(&[".##", "##."]),
    Mask::parse(&["#.", "##", ".#"]),
];

const Z_STATES: [Mask; 2] = [
    Mask::parse(&["##.", ".##"]),
    Mask::parse(&[".#", "##", "#."]),
];

/// Ordered rotation states for a piece kind
pub fn rotation_states(kind: PieceKind) -> &'static [Mask] {
    match kind {
        PieceKind::I => &I_STATES,
        PieceKind::O => &O_STATES,
        PieceKind::T => &T_STATES,
        PieceKind::J => &J_STATES,
        PieceKind::L => &L_STATES,
        PieceKind::S => &S_STATES,
        PieceKind::Z => &Z_STATES,
    }
}

/// Number of distinct rotation states for a piece kind
pub fn rotation_count(kind: PieceKind) -> u8 {
    rotation_states(kind).len() as u8
}

/// Mask for a rotation index, taken modulo the kind's state count
pub fn mask(kind: PieceKind, rotation: u8) -> &'static Mask {
    let states = rotation_states(kind);
    &states[rotation as usize % states.len()]
}

/// Color identity for a piece kind (1..=7)
pub fn color(kind: PieceKind) -> u8 {
    kind.color_id()
}
