//! Menu screens and the dispatcher that picks what a frame shows.
//!
//! The application describes the current screen as a [`Screen`]; this module
//! turns it into framebuffer cells. Nothing here owns state.

use crate::core::{shapes, GameSnapshot, Mask};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::game_view::{draw_overlay, draw_too_small, BoardFrame, GameView, Viewport, TITLE};
use crate::scores::HighScores;
use crate::types::{PieceKind, INITIALS_LEN};

/// Main menu entries, in display order
pub const MENU_OPTIONS: [&str; 4] = ["Start Game", "Level Select", "High Scores", "Quit"];

const HIGHLIGHT: Rgb = Rgb::new(255, 220, 80);
const NOTICE: Rgb = Rgb::new(255, 120, 100);

const TITLE_ART: [&str; 5] = [
    "    _________    __    __    _______    _   ________",
    "   / ____/   |  / /   / /   /  _/   |  / | / /_  __/",
    "  / /_  / /| | / /   / /    / // /| | /  |/ / / /   ",
    " / __/ / ___ |/ /___/ /____/ // ___ |/ /|  / / /    ",
    "/_/   /_/  |_/_____/_____/___/_/  |_/_/ |_/ /_/     ",
];

const INTRO_CONTROLS: [&str; 2] = [
    "\u{2190}\u{2192}/A D move   \u{2193}/S soft drop   \u{2191}/W rotate",
    "SPACE hard drop   C hold   P pause   Q quit",
];

/// Rows taken by the intro screen, top of the art to the start prompt
const INTRO_HEIGHT: u16 = 20;

/// Everything a single frame can show
#[derive(Debug, Clone, Copy)]
pub enum Screen<'a> {
    Intro,
    Menu {
        selected: usize,
        /// Top score in the table, if any
        best: Option<u32>,
    },
    LevelSelect {
        level: u32,
        max_level: u32,
    },
    Game {
        snapshot: &'a GameSnapshot,
        /// `Some(yes_selected)` while the quit dialog is open
        confirm_quit: Option<bool>,
    },
    EnterInitials {
        initials: [u8; INITIALS_LEN],
        cursor: usize,
        score: u32,
    },
    HighScores {
        table: &'a HighScores,
        selected: usize,
        notice: Option<&'a str>,
    },
}

/// Renders any [`Screen`] into a reusable framebuffer.
#[derive(Default)]
pub struct ScreenRenderer {
    game: GameView,
}

impl ScreenRenderer {
    pub fn new(game: GameView) -> Self {
        Self { game }
    }

    pub fn render_into(&self, screen: &Screen<'_>, viewport: Viewport, fb: &mut FrameBuffer) {
        if let Screen::Game {
            snapshot,
            confirm_quit,
        } = *screen
        {
            self.game.render_into(snapshot, viewport, fb);
            if let (Some(yes), true) = (confirm_quit, viewport.fits()) {
                draw_confirm_quit(fb, self.game.board_frame(viewport), yes);
            }
            return;
        }

        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));
        if !viewport.fits() {
            draw_too_small(fb, viewport);
            return;
        }

        match *screen {
            Screen::Intro => self.draw_intro(fb),
            Screen::Menu { selected, best } => draw_menu(fb, selected, best),
            Screen::LevelSelect { level, max_level } => draw_level_select(fb, level, max_level),
            Screen::EnterInitials {
                initials,
                cursor,
                score,
            } => draw_enter_initials(fb, &initials, cursor, score),
            Screen::HighScores {
                table,
                selected,
                notice,
            } => draw_high_scores(fb, table, selected, notice),
            Screen::Game { .. } => {}
        }
    }

    pub fn render(&self, screen: &Screen<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(screen, viewport, &mut fb);
        fb
    }

    fn draw_intro(&self, fb: &mut FrameBuffer) {
        let top = fb.height().saturating_sub(INTRO_HEIGHT) / 2;

        let art_w = TITLE_ART.iter().map(|l| l.len() as u16).max().unwrap_or(0);
        let art_x = fb.width().saturating_sub(art_w) / 2;
        for (i, line) in TITLE_ART.iter().enumerate() {
            fb.put_str(art_x, top + i as u16, line, title_style());
        }

        let text = CellStyle::default();
        fb.put_centered(top + 6, "A Terminal-based Block Stacking Game", text.bold());
        fb.put_centered(top + 8, "Stack blocks to complete lines and score points!", text);
        fb.put_centered(top + 9, "As you clear more lines, the game gets faster.", text);

        // Every kind in its spawn orientation, side by side.
        let gap = 2u16;
        let masks = PieceKind::ALL.map(|kind| (kind, shapes::mask(kind, 0)));
        let slot = |mask: &Mask| mask.width() as u16 * 2 + gap;
        let row_w = masks.iter().map(|&(_, m)| slot(m)).sum::<u16>() - gap;
        let mut x = fb.width().saturating_sub(row_w) / 2;
        for (kind, mask) in masks {
            self.game.draw_preview(fb, x, top + 11, mask, kind, false);
            x += slot(mask);
        }

        for (i, line) in INTRO_CONTROLS.iter().enumerate() {
            fb.put_centered(top + 15 + i as u16, line, hint_style());
        }
        fb.put_centered(top + INTRO_HEIGHT - 1, "Press any key to start...", option_style(true));
    }
}

fn title_style() -> CellStyle {
    CellStyle::fg(TITLE).bold()
}

fn option_style(selected: bool) -> CellStyle {
    if selected {
        CellStyle::fg(HIGHLIGHT).bold()
    } else {
        CellStyle::default()
    }
}

fn hint_style() -> CellStyle {
    CellStyle::fg(Rgb::new(150, 150, 150))
}

fn draw_menu(fb: &mut FrameBuffer, selected: usize, best: Option<u32>) {
    let mid = fb.height() / 2;
    fb.put_centered(mid - 5, "F A L L I A N T", title_style());

    for (i, option) in MENU_OPTIONS.iter().enumerate() {
        let is_sel = i == selected;
        let text = if is_sel {
            format!("> {option} <")
        } else {
            option.to_string()
        };
        fb.put_centered(mid - 2 + i as u16 * 2, &text, option_style(is_sel));
    }

    if let Some(score) = best {
        fb.put_centered(mid + 5, &format!("High Score: {score}"), CellStyle::fg(HIGHLIGHT));
    }

    fb.put_centered(mid + 7, "\u{2191}\u{2193} choose   ENTER select", hint_style());
}

fn draw_level_select(fb: &mut FrameBuffer, level: u32, max_level: u32) {
    let mid = fb.height() / 2;
    fb.put_centered(mid - 5, "Select Starting Level", title_style());

    let text = format!("\u{25c0}  {level:>2}  \u{25b6}");
    fb.put_centered(mid - 1, &text, option_style(true));

    // One notch per level.
    let bar: String = (1..=max_level)
        .map(|l| if l <= level { '■' } else { '·' })
        .collect();
    fb.put_centered(mid + 1, &bar, CellStyle::fg(HIGHLIGHT));

    fb.put_centered(
        mid + 4,
        "\u{2190}\u{2192} \u{b1}1   \u{2191}\u{2193} \u{b1}5   ENTER/ESC back",
        hint_style(),
    );
}

fn draw_enter_initials(
    fb: &mut FrameBuffer,
    initials: &[u8; INITIALS_LEN],
    cursor: usize,
    score: u32,
) {
    let mid = fb.height() / 2;
    fb.put_centered(mid - 5, "NEW HIGH SCORE!", title_style());
    fb.put_centered(mid - 3, &format!("Score {score}"), CellStyle::default());

    let slot_w = 4u16;
    let total = slot_w * INITIALS_LEN as u16;
    let x0 = fb.width().saturating_sub(total) / 2;
    for (i, &letter) in initials.iter().enumerate() {
        let x = x0 + i as u16 * slot_w + 1;
        let active = i == cursor;
        fb.put_char(x, mid, letter as char, option_style(active));
        if active {
            fb.put_char(x, mid - 1, '\u{25b2}', hint_style());
            fb.put_char(x, mid + 1, '\u{25bc}', hint_style());
        }
    }

    fb.put_centered(
        mid + 4,
        "\u{2191}\u{2193} letter   \u{2190}\u{2192} move   ENTER save   ESC skip",
        hint_style(),
    );
}

fn draw_high_scores(
    fb: &mut FrameBuffer,
    table: &HighScores,
    selected: usize,
    notice: Option<&str>,
) {
    fb.put_centered(2, "HIGH SCORES", title_style());

    let x = fb.width().saturating_sub(66) / 2;
    let header = CellStyle::default().bold();
    let y0 = 4;
    let columns = [
        (0, "RANK"),
        (8, "INITIALS"),
        (20, "SCORE"),
        (30, "LEVEL"),
        (40, "LINES"),
        (50, "DATE"),
    ];
    for (dx, name) in columns {
        fb.put_str(x + dx, y0, name, header);
    }

    if table.is_empty() {
        fb.put_centered(y0 + 3, "No high scores yet", hint_style());
    }

    for (i, entry) in table.entries().iter().enumerate() {
        let y = y0 + 2 + i as u16;
        let style = option_style(i == selected);
        fb.put_u32(x, y, i as u32 + 1, style);
        fb.put_str(x + 8, y, &entry.initials, style);
        fb.put_u32(x + 20, y, entry.score, style);
        fb.put_u32(x + 30, y, entry.level, style);
        fb.put_u32(x + 40, y, entry.lines, style);
        fb.put_str(x + 50, y, &entry.date, style);
    }

    if let Some(text) = notice {
        fb.put_centered(fb.height() - 4, text, CellStyle::fg(NOTICE).bold());
    }
    fb.put_centered(fb.height() - 2, "ESC/ENTER back to menu", hint_style());
}

fn draw_confirm_quit(fb: &mut FrameBuffer, frame: BoardFrame, yes: bool) {
    let choice = if yes { "  No  [Yes] " } else { " [No]  Yes  " };
    draw_overlay(fb, frame, &["Quit game?", choice]);
}
