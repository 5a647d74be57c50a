//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{shapes, GameSnapshot, Mask};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Smallest terminal the game is drawn in.
pub const MIN_WIDTH: u16 = 80;
pub const MIN_HEIGHT: u16 = 24;

const SIDEBAR_GAP: u16 = 3;
const SIDEBAR_WIDTH: u16 = 22;

pub(crate) const PLAY_BG: Rgb = Rgb::new(20, 20, 28);
pub(crate) const BORDER: Rgb = Rgb::new(200, 200, 200);
pub(crate) const TITLE: Rgb = Rgb::new(120, 200, 255);

const HELP: [&str; 4] = [
    "\u{2190}\u{2192} move  \u{2191} rotate",
    "\u{2193} soft  SPACE drop",
    "C hold   P pause",
    "Q quit",
];

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Large enough for the board and sidebar
    pub fn fits(&self) -> bool {
        self.width >= MIN_WIDTH && self.height >= MIN_HEIGHT
    }
}

/// Display color of a piece kind.
pub fn kind_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::T => Rgb::new(200, 110, 220),
        PieceKind::J => Rgb::new(80, 120, 230),
        PieceKind::L => Rgb::new(235, 235, 235),
        PieceKind::S => Rgb::new(100, 220, 120),
        PieceKind::Z => Rgb::new(225, 80, 80),
    }
}

/// Renders the board, the current piece, the sidebar and the overlays.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for the usual glyph aspect ratio.
        Self { cell_w: 2 }
    }
}

/// Where the board frame landed in the framebuffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardFrame {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl BoardFrame {
    pub fn center_y(&self) -> u16 {
        self.y + self.h / 2
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    pub fn board_frame(&self, viewport: Viewport) -> BoardFrame {
        let w = BOARD_WIDTH as u16 * self.cell_w + 2;
        let h = BOARD_HEIGHT as u16 + 2;
        let total_w = w + SIDEBAR_GAP + SIDEBAR_WIDTH;
        BoardFrame {
            x: viewport.width.saturating_sub(total_w) / 2,
            y: viewport.height.saturating_sub(h) / 2,
            w,
            h,
        }
    }

    /// Render one game frame into an existing framebuffer.
    ///
    /// Callers reuse the framebuffer across frames; it is only resized when
    /// the viewport changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        if !viewport.fits() {
            draw_too_small(fb, viewport);
            return;
        }

        let frame = self.board_frame(viewport);
        let inner_w = frame.w - 2;
        let inner_h = frame.h - 2;
        let bg = CellStyle::fg(Rgb::new(70, 70, 80)).on(PLAY_BG);

        fb.fill_rect(frame.x + 1, frame.y + 1, inner_w, inner_h, ' ', bg);
        fb.draw_box(frame.x, frame.y, frame.w, frame.h, CellStyle::fg(BORDER));

        for (y, row) in snap.board.iter().enumerate() {
            for (x, &id) in row.iter().enumerate() {
                let cell_x = x as u16;
                let cell_y = y as u16;
                match PieceKind::from_color_id(id) {
                    Some(kind) => self.draw_board_cell(fb, frame, cell_x, cell_y, kind),
                    None => self.fill_cell(fb, frame, cell_x, cell_y, '·', bg.dimmed()),
                }
            }
        }

        if let Some(piece) = snap.current {
            for (x, y) in piece.cells() {
                if x >= 0 && x < BOARD_WIDTH as i8 && y >= 0 && y < BOARD_HEIGHT as i8 {
                    self.draw_board_cell(fb, frame, x as u16, y as u16, piece.kind);
                }
            }
        }

        self.draw_sidebar(fb, snap, frame);

        if snap.paused {
            draw_overlay(fb, frame, &["PAUSED", "Press P to continue"]);
        } else if snap.game_over {
            let final_score = format!("Final Score: {}", snap.score);
            draw_overlay(fb, frame, &["GAME OVER", &final_score, "Press any key"]);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_board_cell(
        &self,
        fb: &mut FrameBuffer,
        frame: BoardFrame,
        x: u16,
        y: u16,
        kind: PieceKind,
    ) {
        let style = CellStyle::fg(kind_color(kind)).on(PLAY_BG).bold();
        self.fill_cell(fb, frame, x, y, '█', style);
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        frame: BoardFrame,
        x: u16,
        y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = frame.x + 1 + x * self.cell_w;
        let py = frame.y + 1 + y;
        fb.fill_rect(px, py, self.cell_w, 1, ch, style);
    }

    fn draw_sidebar(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, frame: BoardFrame) {
        let x = frame.x + frame.w + SIDEBAR_GAP;
        let label = CellStyle::default().bold();
        let value = CellStyle::default();
        let mut y = frame.y;

        fb.put_str(x, y, "FALLIANT", CellStyle::fg(TITLE).bold());
        y += 2;

        for (name, n) in [("SCORE", snap.score), ("LEVEL", snap.level), ("LINES", snap.lines)] {
            fb.put_str(x, y, name, label);
            fb.put_u32(x + 7, y, n, value);
            y += 1;
        }
        y += 1;

        fb.put_str(x, y, "NEXT", label);
        y += 1;
        self.draw_preview(fb, x, y, shapes::mask(snap.next, 0), snap.next, false);
        y += 3;

        let hold_label = if snap.can_hold { label } else { label.dimmed() };
        fb.put_str(x, y, "HOLD", hold_label);
        y += 1;
        match snap.held {
            Some(kind) => self.draw_preview(fb, x, y, shapes::mask(kind, 0), kind, !snap.can_hold),
            None => fb.put_str(x, y, "-", value.dimmed()),
        }
        y += 3;

        let help = CellStyle::fg(Rgb::new(150, 150, 150));
        for line in HELP {
            if y >= frame.y + frame.h {
                break;
            }
            fb.put_str(x, y, line, help);
            y += 1;
        }
    }

    /// Draw a piece mask with its top-left cell at `(x, y)`.
    pub(crate) fn draw_preview(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        mask: &Mask,
        kind: PieceKind,
        dim: bool,
    ) {
        let mut style = CellStyle::fg(kind_color(kind)).bold();
        if dim {
            style = style.dimmed();
        }
        for (dx, dy) in mask.cells() {
            let px = x + dx as u16 * self.cell_w;
            fb.fill_rect(px, y + dy as u16, self.cell_w, 1, '█', style);
        }
    }
}

/// Centered box over the board with one line of text per row.
pub(crate) fn draw_overlay(fb: &mut FrameBuffer, frame: BoardFrame, lines: &[&str]) {
    let text_w = lines.iter().map(|l| l.chars().count() as u16).max().unwrap_or(0);
    let w = (text_w + 4).min(frame.w);
    let h = lines.len() as u16 + 2;
    let x = frame.x + frame.w.saturating_sub(w) / 2;
    let y = frame.center_y().saturating_sub(h / 2);

    let style = CellStyle::fg(Rgb::new(255, 255, 255)).bold();
    fb.fill_rect(x, y, w, h, ' ', style);
    fb.draw_box(x, y, w, h, style);
    for (i, line) in lines.iter().enumerate() {
        let len = line.chars().count() as u16;
        let lx = x + w.saturating_sub(len) / 2;
        fb.put_str(lx, y + 1 + i as u16, line, style);
    }
}

/// Resize notice shown instead of any screen when the viewport is too small.
pub fn draw_too_small(fb: &mut FrameBuffer, viewport: Viewport) {
    let style = CellStyle::fg(Rgb::new(255, 200, 80)).bold();
    let mid = viewport.height / 2;
    fb.put_centered(mid.saturating_sub(1), "Terminal too small", style);
    let need = format!(
        "Need {MIN_WIDTH}x{MIN_HEIGHT}, have {}x{}",
        viewport.width, viewport.height
    );
    fb.put_centered(mid, &need, CellStyle::default());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Piece;

    fn cell_fg(fb: &FrameBuffer, frame: BoardFrame, x: u16, y: u16) -> (char, Rgb) {
        let c = fb.get(frame.x + 1 + x * 2, frame.y + 1 + y).unwrap();
        (c.ch, c.style.fg)
    }

    #[test]
    fn locked_cells_use_kind_colors() {
        let mut snap = GameSnapshot::default();
        snap.board[19][0] = PieceKind::Z.color_id();

        let view = GameView::default();
        let vp = Viewport::new(80, 24);
        let fb = view.render(&snap, vp);
        let frame = view.board_frame(vp);

        assert_eq!(cell_fg(&fb, frame, 0, 19), ('█', kind_color(PieceKind::Z)));
        assert_eq!(cell_fg(&fb, frame, 1, 19).0, '·');
    }

    #[test]
    fn current_piece_is_drawn_and_clipped_above_board() {
        let mut snap = GameSnapshot::default();
        snap.current = Some(Piece {
            kind: PieceKind::I,
            rotation: 1,
            x: 4,
            y: -2,
        });

        let view = GameView::default();
        let vp = Viewport::new(80, 24);
        let fb = view.render(&snap, vp);
        let frame = view.board_frame(vp);

        assert_eq!(cell_fg(&fb, frame, 4, 0), ('█', kind_color(PieceKind::I)));
        assert_eq!(cell_fg(&fb, frame, 4, 1), ('█', kind_color(PieceKind::I)));
        assert_eq!(cell_fg(&fb, frame, 4, 2).0, '·');
    }

    #[test]
    fn sidebar_shows_counters() {
        let snap = GameSnapshot {
            score: 1234,
            level: 3,
            lines: 27,
            ..GameSnapshot::default()
        };
        let fb = GameView::default().render(&snap, Viewport::new(80, 24));
        assert!(fb.contains_text("SCORE  1234"));
        assert!(fb.contains_text("LEVEL  3"));
        assert!(fb.contains_text("LINES  27"));
        assert!(fb.contains_text("NEXT"));
        assert!(fb.contains_text("HOLD"));
    }

    #[test]
    fn overlays_for_pause_and_game_over() {
        let view = GameView::default();
        let vp = Viewport::new(80, 24);

        let paused = GameSnapshot {
            paused: true,
            ..GameSnapshot::default()
        };
        assert!(view.render(&paused, vp).contains_text("PAUSED"));

        let over = GameSnapshot {
            game_over: true,
            score: 4560,
            ..GameSnapshot::default()
        };
        let fb = view.render(&over, vp);
        assert!(fb.contains_text("GAME OVER"));
        assert!(fb.contains_text("Final Score: 4560"));
        assert!(!fb.contains_text("PAUSED"));
    }

    #[test]
    fn small_viewport_shows_notice() {
        let fb = GameView::default().render(&GameSnapshot::default(), Viewport::new(60, 20));
        assert!(fb.contains_text("Terminal too small"));
        assert!(fb.contains_text("60x20"));
        assert!(!fb.contains_text("SCORE"));
    }

    #[test]
    fn hold_preview_dims_when_unavailable() {
        let view = GameView::default();
        let vp = Viewport::new(80, 24);
        let snap = GameSnapshot {
            held: Some(PieceKind::O),
            can_hold: false,
            ..GameSnapshot::default()
        };
        let fb = view.render(&snap, vp);
        let dimmed = fb
            .cells()
            .iter()
            .filter(|c| c.ch == '█' && c.style.fg == kind_color(PieceKind::O))
            .all(|c| c.style.dim);
        assert!(dimmed);
    }
}
