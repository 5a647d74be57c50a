//! Screen flow: intro, menu, level select, play, quit dialog, initials, high scores.
//!
//! [`App`] owns the engine, the high-score table and every piece of menu
//! state. It is driven by key events and one [`App::update`] per frame, and it
//! describes what to draw as a [`Screen`]. No terminal I/O happens here.
//!
//! Whenever a new piece appears, hard drop is ignored for
//! [`HARD_DROP_COOLDOWN_FRAMES`] frames and the runner is asked to discard
//! queued key events ([`App::take_input_flush`]).

use std::path::{Path, PathBuf};

use crossterm::event::KeyEvent;

use crate::config::Config;
use crate::core::{GameSnapshot, GameState, RunSummary, SimpleRng};
use crate::input::{
    handle_key_event, is_press, is_quit_request, menu_key, should_quit, MenuKey,
};
use crate::scores::{HighScore, HighScores};
use crate::term::{Screen, MENU_OPTIONS};
use crate::types::{GameAction, HARD_DROP_COOLDOWN_FRAMES, INITIALS_LEN, MAX_START_LEVEL};

/// Which screen has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Intro,
    Menu,
    LevelSelect,
    Playing,
    ConfirmQuit,
    EnterInitials,
    HighScores,
}

/// Menu entries, matching [`MENU_OPTIONS`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    Start,
    LevelSelect,
    HighScores,
    Quit,
}

impl MenuOption {
    pub const ALL: [MenuOption; 4] = [
        MenuOption::Start,
        MenuOption::LevelSelect,
        MenuOption::HighScores,
        MenuOption::Quit,
    ];
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct InitialsEntry {
    letters: [u8; INITIALS_LEN],
    cursor: usize,
    run: RunSummary,
}

impl InitialsEntry {
    fn new(run: RunSummary) -> Self {
        Self {
            letters: [b'A'; INITIALS_LEN],
            cursor: 0,
            run,
        }
    }

    fn cycle_letter(&mut self, forward: bool) {
        let slot = &mut self.letters[self.cursor];
        let offset = *slot - b'A';
        let next = if forward { (offset + 1) % 26 } else { (offset + 25) % 26 };
        *slot = b'A' + next;
    }

    fn move_cursor(&mut self, forward: bool) {
        self.cursor = if forward {
            (self.cursor + 1) % INITIALS_LEN
        } else {
            (self.cursor + INITIALS_LEN - 1) % INITIALS_LEN
        };
    }

    fn text(&self) -> String {
        self.letters.iter().map(|&b| b as char).collect()
    }
}

pub struct App {
    phase: Phase,
    running: bool,
    menu_selected: usize,
    start_level: u32,
    game: Option<GameState>,
    /// Last seen [`GameState::piece_id`]
    piece_id: u32,
    drop_cooldown: u32,
    flush_input: bool,
    run_recorded: bool,
    confirm_yes: bool,
    entry: Option<InitialsEntry>,
    scores: HighScores,
    scores_path: PathBuf,
    score_selected: usize,
    notice: Option<String>,
    seeds: SimpleRng,
    snapshot: GameSnapshot,
    log: Vec<String>,
}

impl App {
    /// App with the high-score table loaded from the configured path.
    pub fn new(config: &Config) -> Self {
        let scores = HighScores::load_or_default(&config.scores_path);
        Self::with_scores(
            scores,
            config.scores_path.clone(),
            config.start_level,
            config.resolve_seed(),
        )
    }

    pub fn with_scores(
        scores: HighScores,
        scores_path: PathBuf,
        start_level: u32,
        seed: u32,
    ) -> Self {
        Self {
            phase: Phase::Intro,
            running: true,
            menu_selected: 0,
            start_level: start_level.clamp(1, MAX_START_LEVEL),
            game: None,
            piece_id: 0,
            drop_cooldown: 0,
            flush_input: false,
            run_recorded: false,
            confirm_yes: false,
            entry: None,
            scores,
            scores_path,
            score_selected: 0,
            notice: None,
            seeds: SimpleRng::new(seed),
            snapshot: GameSnapshot::default(),
            log: Vec::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn menu_selected(&self) -> MenuOption {
        MenuOption::ALL[self.menu_selected]
    }

    pub fn start_level(&self) -> u32 {
        self.start_level
    }

    pub fn game(&self) -> Option<&GameState> {
        self.game.as_ref()
    }

    pub fn scores(&self) -> &HighScores {
        &self.scores
    }

    pub fn scores_path(&self) -> &Path {
        &self.scores_path
    }

    pub fn score_selected(&self) -> usize {
        self.score_selected
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn confirm_yes(&self) -> bool {
        self.confirm_yes
    }

    /// Initials being entered and the cursor position
    pub fn initials(&self) -> Option<(String, usize)> {
        self.entry.as_ref().map(|e| (e.text(), e.cursor))
    }

    /// Whether a hard drop would be accepted right now
    pub fn hard_drop_ready(&self) -> bool {
        self.drop_cooldown == 0
    }

    /// True once after a new piece appeared; queued key events should be dropped.
    pub fn take_input_flush(&mut self) -> bool {
        std::mem::take(&mut self.flush_input)
    }

    /// Operational messages collected while the terminal was in raw mode
    pub fn drain_log(&mut self) -> Vec<String> {
        std::mem::take(&mut self.log)
    }

    /// Route one key event to the focused screen.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if !is_press(key) {
            return;
        }
        if should_quit(key) {
            self.running = false;
            return;
        }

        match self.phase {
            Phase::Intro => self.phase = Phase::Menu,
            Phase::Playing => self.handle_play_key(key),
            phase => {
                if let Some(k) = menu_key(key) {
                    match phase {
                        Phase::Menu => self.handle_menu(k),
                        Phase::LevelSelect => self.handle_level_select(k),
                        Phase::ConfirmQuit => self.handle_confirm_quit(k),
                        Phase::EnterInitials => self.handle_initials(k),
                        Phase::HighScores => self.handle_high_scores(k),
                        Phase::Intro | Phase::Playing => {}
                    }
                }
            }
        }
    }

    /// Advance one frame: gravity while playing, then game-over handling.
    pub fn update(&mut self) {
        if self.phase != Phase::Playing {
            return;
        }
        self.drop_cooldown = self.drop_cooldown.saturating_sub(1);
        if let Some(game) = self.game.as_mut() {
            game.tick();
        }
        self.track_spawn();
        self.check_game_over();
    }

    /// Describe the current frame.
    pub fn screen(&mut self) -> Screen<'_> {
        match self.phase {
            Phase::Intro => Screen::Intro,
            Phase::Menu => Screen::Menu {
                selected: self.menu_selected,
                best: self.best_score(),
            },
            Phase::LevelSelect => Screen::LevelSelect {
                level: self.start_level,
                max_level: MAX_START_LEVEL,
            },
            Phase::Playing | Phase::ConfirmQuit => {
                match &self.game {
                    Some(game) => game.snapshot_into(&mut self.snapshot),
                    None => self.snapshot.clear(),
                }
                Screen::Game {
                    snapshot: &self.snapshot,
                    confirm_quit: (self.phase == Phase::ConfirmQuit).then_some(self.confirm_yes),
                }
            }
            Phase::EnterInitials => match &self.entry {
                Some(entry) => Screen::EnterInitials {
                    initials: entry.letters,
                    cursor: entry.cursor,
                    score: entry.run.score,
                },
                None => Screen::Menu {
                    selected: self.menu_selected,
                    best: self.best_score(),
                },
            },
            Phase::HighScores => Screen::HighScores {
                table: &self.scores,
                selected: self.score_selected,
                notice: self.notice.as_deref(),
            },
        }
    }

    fn best_score(&self) -> Option<u32> {
        self.scores.best().map(|e| e.score)
    }

    fn start_game(&mut self) {
        let seed = self.seeds.next_u32();
        let game = GameState::new(self.start_level, seed);
        self.piece_id = game.piece_id();
        self.game = Some(game);
        self.drop_cooldown = 0;
        self.flush_input = false;
        self.run_recorded = false;
        self.phase = Phase::Playing;
    }

    fn handle_play_key(&mut self, key: KeyEvent) {
        let Some(game) = self.game.as_mut() else {
            self.phase = Phase::Menu;
            return;
        };

        if game.game_over() {
            // Any key leaves the game-over overlay.
            self.game = None;
            self.phase = Phase::Menu;
            return;
        }

        if is_quit_request(key) {
            self.confirm_yes = false;
            self.phase = Phase::ConfirmQuit;
            return;
        }

        if let Some(action) = handle_key_event(key) {
            if action == GameAction::HardDrop && self.drop_cooldown > 0 {
                return;
            }
            game.apply_action(action);
        }
        self.track_spawn();
        self.check_game_over();
    }

    fn track_spawn(&mut self) {
        let Some(game) = self.game.as_ref() else {
            return;
        };
        if game.piece_id() != self.piece_id {
            self.piece_id = game.piece_id();
            self.drop_cooldown = HARD_DROP_COOLDOWN_FRAMES;
            self.flush_input = true;
        }
    }

    fn check_game_over(&mut self) {
        if self.run_recorded {
            return;
        }
        let Some(game) = self.game.as_ref() else {
            return;
        };
        if game.game_over() {
            let run = game.summary();
            self.run_recorded = true;
            self.offer_high_score(run);
        }
    }

    /// Open initials entry for a qualifying run; returns whether it did.
    fn offer_high_score(&mut self, run: RunSummary) -> bool {
        if !self.scores.qualifies(run.score) {
            return false;
        }
        self.entry = Some(InitialsEntry::new(run));
        self.phase = Phase::EnterInitials;
        true
    }

    fn handle_menu(&mut self, key: MenuKey) {
        let count = MENU_OPTIONS.len();
        match key {
            MenuKey::Up => self.menu_selected = (self.menu_selected + count - 1) % count,
            MenuKey::Down => self.menu_selected = (self.menu_selected + 1) % count,
            MenuKey::Confirm => match self.menu_selected() {
                MenuOption::Start => self.start_game(),
                MenuOption::LevelSelect => self.phase = Phase::LevelSelect,
                MenuOption::HighScores => {
                    self.score_selected = 0;
                    self.phase = Phase::HighScores;
                }
                MenuOption::Quit => self.running = false,
            },
            _ => {}
        }
    }

    fn handle_level_select(&mut self, key: MenuKey) {
        let level = self.start_level;
        self.start_level = match key {
            MenuKey::Left => level.saturating_sub(1),
            MenuKey::Right => level + 1,
            MenuKey::Up => level.saturating_sub(5),
            MenuKey::Down => level + 5,
            MenuKey::Confirm | MenuKey::Back => {
                self.phase = Phase::Menu;
                level
            }
        }
        .clamp(1, MAX_START_LEVEL);
    }

    fn handle_confirm_quit(&mut self, key: MenuKey) {
        match key {
            MenuKey::Left => self.confirm_yes = false,
            MenuKey::Right => self.confirm_yes = true,
            MenuKey::Back => self.phase = Phase::Playing,
            MenuKey::Confirm if !self.confirm_yes => self.phase = Phase::Playing,
            MenuKey::Confirm => {
                let abandoned = self.game.take();
                self.phase = Phase::Menu;
                if let Some(game) = abandoned {
                    if !self.run_recorded {
                        self.run_recorded = true;
                        self.offer_high_score(game.summary());
                    }
                }
            }
            _ => {}
        }
    }

    fn handle_initials(&mut self, key: MenuKey) {
        let Some(entry) = self.entry.as_mut() else {
            self.phase = Phase::Menu;
            return;
        };

        match key {
            MenuKey::Up => entry.cycle_letter(true),
            MenuKey::Down => entry.cycle_letter(false),
            MenuKey::Left => entry.move_cursor(false),
            MenuKey::Right => entry.move_cursor(true),
            MenuKey::Confirm => self.save_entry(),
            MenuKey::Back => {
                self.entry = None;
                self.game = None;
                self.phase = Phase::Menu;
            }
        }
    }

    fn save_entry(&mut self) {
        let Some(entry) = self.entry.take() else {
            return;
        };
        let run = entry.run;
        let record = HighScore::now(&entry.text(), run.score, run.level, run.lines);

        self.score_selected = self.scores.insert(record).unwrap_or(0);
        self.notice = None;
        if let Err(err) = self.scores.save(&self.scores_path) {
            self.log.push(format!("high scores not saved: {err:#}"));
            self.notice = Some("Could not save high scores".to_string());
        }

        self.game = None;
        self.phase = Phase::HighScores;
    }

    fn handle_high_scores(&mut self, key: MenuKey) {
        match key {
            MenuKey::Up => self.score_selected = self.score_selected.saturating_sub(1),
            MenuKey::Down => {
                let last = self.scores.len().saturating_sub(1);
                self.score_selected = (self.score_selected + 1).min(last);
            }
            MenuKey::Confirm | MenuKey::Back => {
                self.notice = None;
                self.phase = Phase::Menu;
            }
            _ => {}
        }
    }
}
