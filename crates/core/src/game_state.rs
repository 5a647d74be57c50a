//! Game state module - the engine that drives a single run
//!
//! Ties together the board, the shape catalog, the piece source and scoring.
//! Owns exactly one current piece, one queued next piece and an optional held
//! kind. Player commands are applied immediately; gravity advances once per
//! `tick()` call, counted in frames.
//!
//! Player-facing commands (`move_left`, `rotate`, `hard_drop`, ...) are no-ops
//! while paused or after game over. The underlying primitives
//! ([`GameState::move_piece`], [`GameState::spawn_next`]) do not check those
//! flags.

use crate::board::Board;
use crate::piece::Piece;
use crate::rng::{PieceSource, UniformSource};
use crate::scoring::{fall_delay_for_level, level_for_lines, line_clear_points};
use crate::shapes;
use crate::snapshot::GameSnapshot;
use crate::types::{Direction, GameAction, PieceKind, HARD_DROP_LIMIT};

/// Column offsets tried, in order, when a rotation collides.
///
/// All offsets are relative to the column the piece had before rotating.
const KICK_OFFSETS: [i8; 4] = [0, -1, 1, 2];

/// Result of a one-cell move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The piece moved one cell
    Moved,
    /// The move collided and was reverted
    Blocked,
    /// A downward move collided; the piece was locked and the next one spawned
    Locked,
}

impl MoveOutcome {
    pub fn moved(self) -> bool {
        self == MoveOutcome::Moved
    }

    pub fn locked(self) -> bool {
        self == MoveOutcome::Locked
    }
}

/// Final numbers of a run, handed to the high-score table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    pub score: u32,
    pub level: u32,
    pub lines: u32,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<S = UniformSource> {
    board: Board,
    current: Option<Piece>,
    next: Piece,
    held: Option<PieceKind>,
    can_hold: bool,
    score: u32,
    lines_cleared: u32,
    level: u32,
    fall_delay: u32,
    fall_counter: u32,
    game_over: bool,
    paused: bool,
    /// Increments every time a new piece becomes current (spawn or hold swap)
    piece_id: u32,
    source: S,
}

impl GameState<UniformSource> {
    /// Start a run at `starting_level` with uniformly random pieces
    pub fn new(starting_level: u32, seed: u32) -> Self {
        Self::with_source(starting_level, UniformSource::new(seed))
    }
}

impl<S: PieceSource> GameState<S> {
    /// Start a run drawing pieces from `source`.
    ///
    /// Levels below 1 are raised to 1. The first draw becomes the current
    /// piece, the second the queued next piece.
    pub fn with_source(starting_level: u32, mut source: S) -> Self {
        let level = starting_level.max(1);
        let next = Piece::new(source.next_piece());

        let mut state = Self {
            board: Board::new(),
            current: None,
            next,
            held: None,
            can_hold: true,
            score: 0,
            lines_cleared: 0,
            level,
            fall_delay: fall_delay_for_level(level),
            fall_counter: 0,
            game_over: false,
            paused: false,
            piece_id: 0,
            source,
        };
        state.spawn_next();
        state
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current(&self) -> Option<Piece> {
        self.current
    }

    pub fn next(&self) -> Piece {
        self.next
    }

    pub fn held(&self) -> Option<PieceKind> {
        self.held
    }

    pub fn can_hold(&self) -> bool {
        self.can_hold
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn fall_delay(&self) -> u32 {
        self.fall_delay
    }

    pub fn fall_counter(&self) -> u32 {
        self.fall_counter
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Identity of the current piece instance; changes on every spawn and hold swap
    pub fn piece_id(&self) -> u32 {
        self.piece_id
    }

    /// Score, level and lines of the run so far
    pub fn summary(&self) -> RunSummary {
        RunSummary {
            score: self.score,
            level: self.level,
            lines: self.lines_cleared,
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_color_grid(&mut out.board);
        out.current = self.current;
        out.next = self.next.kind;
        out.held = self.held;
        out.can_hold = self.can_hold;
        out.paused = self.paused;
        out.game_over = self.game_over;
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines_cleared;
        out.fall_delay = self.fall_delay;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Promote the queued piece to current and queue a fresh draw.
    ///
    /// The new current piece is centered on row 0. If it collides with the
    /// board the run is over. Does nothing once the run is over.
    pub fn spawn_next(&mut self) {
        if self.game_over {
            return;
        }

        let piece = Piece::spawned(self.next.kind);
        self.next = Piece::new(self.source.next_piece());
        self.current = Some(piece);
        self.can_hold = true;
        self.piece_id = self.piece_id.wrapping_add(1);

        if self.board.collides(&piece) {
            self.game_over = true;
        }
    }

    /// Move the current piece one cell.
    ///
    /// A blocked downward move locks the piece in place: it is written into
    /// the board, full rows are cleared and scored, and the next piece spawns.
    /// Does not check the pause/game-over flags.
    pub fn move_piece(&mut self, direction: Direction) -> MoveOutcome {
        let Some(piece) = self.current else {
            return MoveOutcome::Blocked;
        };

        let (dx, dy) = direction.delta();
        let moved = piece.shifted(dx, dy);
        if !self.board.collides(&moved) {
            self.current = Some(moved);
            return MoveOutcome::Moved;
        }

        if direction == Direction::Down {
            self.lock_current();
            return MoveOutcome::Locked;
        }

        MoveOutcome::Blocked
    }

    /// Commit the current piece, clear rows, update score/level, spawn next.
    ///
    /// Returns the number of rows cleared.
    fn lock_current(&mut self) -> usize {
        let Some(piece) = self.current.take() else {
            return 0;
        };

        self.board.place(&piece);
        let cleared = self.board.clear_full_rows();
        self.award_lines(cleared);
        self.spawn_next();
        cleared
    }

    fn award_lines(&mut self, cleared: usize) {
        if cleared == 0 {
            return;
        }

        // Points use the level in effect before this clear.
        self.score = self
            .score
            .saturating_add(line_clear_points(cleared, self.level));
        self.lines_cleared = self.lines_cleared.saturating_add(cleared as u32);

        let earned = level_for_lines(self.lines_cleared);
        if earned > self.level {
            self.level = earned;
            self.fall_delay = fall_delay_for_level(earned);
        }
    }

    fn rotate_piece(&mut self) -> bool {
        let Some(piece) = self.current else {
            return false;
        };

        if shapes::rotation_count(piece.kind) <= 1 {
            return false;
        }

        let rotated = piece.rotated();
        for dx in KICK_OFFSETS {
            let candidate = rotated.shifted(dx, 0);
            if !self.board.collides(&candidate) {
                self.current = Some(candidate);
                return true;
            }
        }

        // Every kick failed: the piece keeps its old rotation and column.
        false
    }

    fn hard_drop_piece(&mut self) -> bool {
        let Some(mut piece) = self.current else {
            return false;
        };

        let start_y = piece.y;
        for _ in 0..HARD_DROP_LIMIT {
            let below = piece.shifted(0, 1);
            if self.board.collides(&below) {
                break;
            }
            piece = below;
        }

        self.current = Some(piece);
        self.lock_current();
        piece.y > start_y
    }

    fn hold_piece(&mut self) -> bool {
        if !self.can_hold {
            return false;
        }
        let Some(piece) = self.current else {
            return false;
        };

        match self.held.replace(piece.kind) {
            None => self.spawn_next(),
            Some(kind) => {
                let swapped = Piece::spawned(kind);
                self.current = Some(swapped);
                self.piece_id = self.piece_id.wrapping_add(1);
                if self.board.collides(&swapped) {
                    self.game_over = true;
                }
            }
        }

        self.can_hold = false;
        true
    }

    fn accepts_input(&self) -> bool {
        !self.paused && !self.game_over
    }

    pub fn move_left(&mut self) -> MoveOutcome {
        if !self.accepts_input() {
            return MoveOutcome::Blocked;
        }
        self.move_piece(Direction::Left)
    }

    pub fn move_right(&mut self) -> MoveOutcome {
        if !self.accepts_input() {
            return MoveOutcome::Blocked;
        }
        self.move_piece(Direction::Right)
    }

    /// One cell down; locks the piece if it is resting on something
    pub fn soft_drop(&mut self) -> MoveOutcome {
        if !self.accepts_input() {
            return MoveOutcome::Blocked;
        }
        self.move_piece(Direction::Down)
    }

    /// Advance to the next rotation state, kicking left 1, right 1, then
    /// right 2 if the rotated piece collides. Returns false (and leaves the
    /// piece untouched) when no position fits or the piece is an O.
    pub fn rotate(&mut self) -> bool {
        if !self.accepts_input() {
            return false;
        }
        self.rotate_piece()
    }

    /// Drop to the lowest reachable row and lock there.
    ///
    /// Returns whether the piece moved before locking.
    pub fn hard_drop(&mut self) -> bool {
        if !self.accepts_input() {
            return false;
        }
        self.hard_drop_piece()
    }

    /// Stash the current piece (once per spawned piece).
    ///
    /// With an empty hold the next piece spawns; otherwise the held kind comes
    /// back as a fresh piece at the spawn position.
    pub fn hold(&mut self) -> bool {
        if !self.accepts_input() {
            return false;
        }
        self.hold_piece()
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Advance gravity by one frame.
    ///
    /// Returns true when the automatic drop locked the piece.
    pub fn tick(&mut self) -> bool {
        if self.paused || self.game_over || self.current.is_none() {
            return false;
        }

        self.fall_counter += 1;
        if self.fall_counter < self.fall_delay {
            return false;
        }

        self.fall_counter = 0;
        self.move_piece(Direction::Down).locked()
    }

    /// Apply a player command; returns whether anything changed
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left() != MoveOutcome::Blocked,
            GameAction::MoveRight => self.move_right() != MoveOutcome::Blocked,
            GameAction::SoftDrop => self.soft_drop() != MoveOutcome::Blocked,
            GameAction::HardDrop => {
                let accepted = self.accepts_input() && self.current.is_some();
                self.hard_drop();
                accepted
            }
            GameAction::Rotate => self.rotate(),
            GameAction::Hold => self.hold(),
            GameAction::Pause => {
                self.toggle_pause();
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SequenceSource;
    use crate::types::{BASE_FALL_DELAY, BOARD_HEIGHT};

    fn game(kinds: &[PieceKind]) -> GameState<SequenceSource> {
        GameState::with_source(1, SequenceSource::new(kinds.iter().copied()))
    }

    /// Fill the bottom `rows` rows except column 9 and hang a vertical I over the gap.
    fn prepare_well(state: &mut GameState<SequenceSource>, rows: usize) {
        state.board.clear();
        for y in (BOARD_HEIGHT as usize - rows)..BOARD_HEIGHT as usize {
            state.board.fill_row(y, PieceKind::J);
            state.board.set(9, y as i8, None);
        }
        state.current = Some(Piece {
            kind: PieceKind::I,
            rotation: 1,
            x: 9,
            y: 0,
        });
    }

    #[test]
    fn test_new_game_state() {
        let state = game(&[PieceKind::T, PieceKind::S]);

        assert_eq!(state.level(), 1);
        assert_eq!(state.fall_delay(), BASE_FALL_DELAY);
        assert_eq!(state.score(), 0);
        assert_eq!(state.lines_cleared(), 0);
        assert_eq!(state.current(), Some(Piece::spawned(PieceKind::T)));
        assert_eq!(state.next().kind, PieceKind::S);
        assert_eq!(state.held(), None);
        assert!(state.can_hold());
        assert!(!state.paused());
        assert!(!state.game_over());
    }

    #[test]
    fn test_starting_level_sets_fall_delay() {
        let state = GameState::with_source(4, SequenceSource::repeat(PieceKind::T));
        assert_eq!(state.level(), 4);
        assert_eq!(state.fall_delay(), 14);

        let clamped = GameState::with_source(0, SequenceSource::repeat(PieceKind::T));
        assert_eq!(clamped.level(), 1);
    }

    #[test]
    fn test_spawn_next_promotes_queue() {
        let mut state = game(&[PieceKind::I, PieceKind::Z, PieceKind::L]);
        state.can_hold = false;
        state.spawn_next();

        assert_eq!(state.current(), Some(Piece::spawned(PieceKind::Z)));
        assert_eq!(state.next().kind, PieceKind::L);
        assert!(state.can_hold());
    }

    #[test]
    fn test_move_piece_reverts_on_wall() {
        let mut state = game(&[PieceKind::O]);
        for _ in 0..4 {
            assert_eq!(state.move_piece(Direction::Left), MoveOutcome::Moved);
        }
        assert_eq!(state.move_piece(Direction::Left), MoveOutcome::Blocked);
        assert_eq!(state.current().unwrap().x, 0);
    }

    #[test]
    fn test_blocked_down_move_locks() {
        let mut state = game(&[PieceKind::O, PieceKind::T]);
        state.current = Some(Piece {
            y: 18,
            ..Piece::spawned(PieceKind::O)
        });

        assert_eq!(state.move_piece(Direction::Down), MoveOutcome::Locked);
        assert_eq!(state.board().get(4, 19), Some(Some(PieceKind::O)));
        assert_eq!(state.board().get(5, 18), Some(Some(PieceKind::O)));
        assert_eq!(state.current().unwrap().kind, PieceKind::T);
    }

    #[test]
    fn test_rotate_without_collision() {
        let mut state = game(&[PieceKind::T]);
        state.current = Some(Piece {
            y: 5,
            ..Piece::spawned(PieceKind::T)
        });

        assert!(state.rotate());
        let piece = state.current().unwrap();
        assert_eq!(piece.rotation, 1);
        assert_eq!((piece.x, piece.y), (3, 5));
    }

    #[test]
    fn test_rotate_o_piece_is_noop() {
        let mut state = game(&[PieceKind::O]);
        let before = state.current();
        assert!(!state.rotate());
        assert_eq!(state.current(), before);
        assert_eq!(state.current().unwrap().rotation, 0);
    }

    fn kick_fixture(blocked: &[(i8, i8)]) -> GameState<SequenceSource> {
        let mut state = game(&[PieceKind::T]);
        state.current = Some(Piece {
            kind: PieceKind::T,
            rotation: 0,
            x: 3,
            y: 10,
        });
        for &(x, y) in blocked {
            state.board.set(x, y, Some(PieceKind::Z));
        }
        state
    }

    #[test]
    fn test_kick_left_first() {
        let mut state = kick_fixture(&[(3, 12)]);
        assert!(state.rotate());
        let piece = state.current().unwrap();
        assert_eq!((piece.rotation, piece.x), (1, 2));
    }

    #[test]
    fn test_kick_right_one_when_left_fails() {
        let mut state = kick_fixture(&[(3, 12), (2, 12)]);
        assert!(state.rotate());
        let piece = state.current().unwrap();
        assert_eq!((piece.rotation, piece.x), (1, 4));
    }

    #[test]
    fn test_kick_right_two_only() {
        let mut state = kick_fixture(&[(2, 12), (3, 12), (4, 12)]);
        assert!(state.rotate());
        let piece = state.current().unwrap();
        assert_eq!((piece.rotation, piece.x, piece.y), (1, 5, 10));
    }

    #[test]
    fn test_kick_failure_reverts() {
        let mut state = kick_fixture(&[(2, 12), (3, 12), (4, 12), (5, 12)]);
        let before = state.current();
        assert!(!state.rotate());
        assert_eq!(state.current(), before);
    }

    #[test]
    fn test_hard_drop_locks_at_floor() {
        let mut state = game(&[PieceKind::I, PieceKind::O]);
        assert!(state.hard_drop());

        for x in 3..7 {
            assert_eq!(state.board().get(x, 19), Some(Some(PieceKind::I)));
        }
        assert_eq!(state.current().unwrap().kind, PieceKind::O);
    }

    #[test]
    fn test_hard_drop_without_room_still_locks() {
        let mut state = game(&[PieceKind::O, PieceKind::T]);
        state.current = Some(Piece {
            y: 18,
            ..Piece::spawned(PieceKind::O)
        });

        assert!(!state.hard_drop());
        assert_eq!(state.board().filled_count(), 4);
        assert_eq!(state.current().unwrap().kind, PieceKind::T);
    }

    #[test]
    fn test_hold_twice_swaps_once() {
        let mut state = game(&[PieceKind::T, PieceKind::O, PieceKind::I, PieceKind::L]);

        assert!(state.hold());
        assert_eq!(state.held(), Some(PieceKind::T));
        assert_eq!(state.current(), Some(Piece::spawned(PieceKind::O)));
        assert!(!state.can_hold());

        assert!(!state.hold());
        assert_eq!(state.held(), Some(PieceKind::T));
        assert_eq!(state.current().unwrap().kind, PieceKind::O);

        // Held kind survives the next spawn, then swaps back in.
        state.hard_drop();
        assert_eq!(state.current().unwrap().kind, PieceKind::I);
        assert_eq!(state.held(), Some(PieceKind::T));
        assert!(state.can_hold());

        assert!(state.hold());
        assert_eq!(state.current(), Some(Piece::spawned(PieceKind::T)));
        assert_eq!(state.held(), Some(PieceKind::I));
        assert_eq!(state.next().kind, PieceKind::L);
    }

    #[test]
    fn test_hold_swap_resets_rotation_and_position() {
        let mut state = game(&[PieceKind::J, PieceKind::S, PieceKind::Z]);
        state.hold();
        state.hard_drop();

        state.rotate();
        state.move_left();
        state.soft_drop();
        assert!(state.hold());
        assert_eq!(state.current(), Some(Piece::spawned(PieceKind::J)));
    }

    #[test]
    fn test_hold_swap_into_blocked_spawn_ends_game() {
        let mut state = game(&[PieceKind::I, PieceKind::O, PieceKind::T]);
        assert!(state.hold());
        assert_eq!(state.held(), Some(PieceKind::I));

        // The O sits lower down, clear of row 0, and may hold again.
        state.current = Some(Piece {
            y: 10,
            ..Piece::spawned(PieceKind::O)
        });
        state.can_hold = true;
        for x in 3..=6 {
            state.board.set(x, 0, Some(PieceKind::Z));
        }
        assert!(!state.board().collides(&state.current().unwrap()));

        assert!(state.hold());
        assert!(state.game_over());
        assert_eq!(state.current(), Some(Piece::spawned(PieceKind::I)));
        assert_eq!(state.held(), Some(PieceKind::O));

        assert!(!state.hold());
        assert!(!state.tick());
    }

    #[test]
    fn test_piece_id_changes_on_spawn_and_swap() {
        let mut state = game(&[PieceKind::T, PieceKind::O, PieceKind::L]);
        let first = state.piece_id();

        state.move_left();
        state.rotate();
        assert_eq!(state.piece_id(), first);

        assert!(state.hold());
        let after_hold = state.piece_id();
        assert_ne!(after_hold, first);

        state.hard_drop();
        let after_drop = state.piece_id();
        assert_ne!(after_drop, after_hold);

        assert!(state.hold());
        assert_ne!(state.piece_id(), after_drop);
    }

    #[test]
    fn test_score_per_clear_size_at_level_three() {
        for (rows, expected) in [(1, 120), (2, 300), (3, 900), (4, 3600)] {
            let mut state = GameState::with_source(3, SequenceSource::repeat(PieceKind::T));
            prepare_well(&mut state, rows);
            state.hard_drop();

            assert_eq!(state.score(), expected, "{rows} rows");
            assert_eq!(state.lines_cleared(), rows as u32);
            assert_eq!(state.level(), 3);
        }
    }

    #[test]
    fn test_lines_accumulate_across_locks() {
        let mut state = GameState::with_source(3, SequenceSource::repeat(PieceKind::T));
        let mut total = 0;
        for rows in 1..=4 {
            prepare_well(&mut state, rows);
            state.hard_drop();
            total += rows as u32;
            assert_eq!(state.lines_cleared(), total);
        }
        assert_eq!(state.score(), 120 + 300 + 900 + 3600);
        // 10 lines earn level 2, below the starting level of 3.
        assert_eq!(state.level(), 3);
    }

    #[test]
    fn test_level_rises_once_per_ten_lines() {
        let mut state = game(&[PieceKind::T]);
        let mut expected_level = 1;
        for _ in 0..10 {
            prepare_well(&mut state, 4);
            let before_level = state.level();
            let before_delay = state.fall_delay();
            state.hard_drop();

            let crossed = state.lines_cleared() / 10 != (state.lines_cleared() - 4) / 10;
            if crossed {
                expected_level += 1;
                assert_eq!(state.level(), before_level + 1);
                assert_eq!(state.fall_delay(), (before_delay - 2).max(1));
            } else {
                assert_eq!(state.level(), before_level);
                assert_eq!(state.fall_delay(), before_delay);
            }
            assert_eq!(state.level(), expected_level);
        }
        assert_eq!(state.lines_cleared(), 40);
        assert_eq!(state.level(), 5);
        assert_eq!(state.fall_delay(), 12);
    }

    #[test]
    fn test_spawn_into_filled_center_is_game_over() {
        let mut state = game(&[PieceKind::T]);
        for y in 0..2 {
            for x in 3..7 {
                state.board.set(x, y, Some(PieceKind::L));
            }
        }
        state.spawn_next();
        assert!(state.game_over());

        let board = state.board().clone();
        for _ in 0..100 {
            assert!(!state.tick());
        }
        assert_eq!(state.board(), &board);
        assert_eq!(state.move_left(), MoveOutcome::Blocked);
        assert!(!state.hard_drop());
        assert_eq!(state.board(), &board);
    }

    #[test]
    fn test_no_spawn_after_game_over() {
        let mut state = game(&[PieceKind::T, PieceKind::I]);
        state.game_over = true;
        let current = state.current();
        state.spawn_next();
        assert_eq!(state.current(), current);
    }

    #[test]
    fn test_tick_gravity() {
        let mut state = game(&[PieceKind::T]);
        let start_y = state.current().unwrap().y;

        for _ in 0..BASE_FALL_DELAY - 1 {
            assert!(!state.tick());
        }
        assert_eq!(state.current().unwrap().y, start_y);
        assert_eq!(state.fall_counter(), BASE_FALL_DELAY - 1);

        state.tick();
        assert_eq!(state.current().unwrap().y, start_y + 1);
        assert_eq!(state.fall_counter(), 0);
    }

    #[test]
    fn test_tick_locks_resting_piece() {
        let mut state = game(&[PieceKind::O, PieceKind::S]);
        state.current = Some(Piece {
            y: 18,
            ..Piece::spawned(PieceKind::O)
        });
        let mut locked = false;
        for _ in 0..BASE_FALL_DELAY {
            locked |= state.tick();
        }
        assert!(locked);
        assert_eq!(state.current().unwrap().kind, PieceKind::S);
    }

    #[test]
    fn test_pause_blocks_ticks_and_commands() {
        let mut state = game(&[PieceKind::T]);
        state.toggle_pause();
        let before = state.current();

        for _ in 0..100 {
            state.tick();
        }
        assert_eq!(state.fall_counter(), 0);
        assert_eq!(state.move_left(), MoveOutcome::Blocked);
        assert_eq!(state.soft_drop(), MoveOutcome::Blocked);
        assert!(!state.rotate());
        assert!(!state.hard_drop());
        assert!(!state.hold());
        assert_eq!(state.current(), before);

        state.toggle_pause();
        assert_eq!(state.move_left(), MoveOutcome::Moved);
    }

    #[test]
    fn test_apply_action_reports_changes() {
        let mut state = game(&[PieceKind::I]);
        assert!(state.apply_action(GameAction::MoveRight));
        assert!(state.apply_action(GameAction::Rotate));
        assert!(state.apply_action(GameAction::Pause));
        assert!(state.paused());
        assert!(!state.apply_action(GameAction::MoveLeft));
        assert!(state.apply_action(GameAction::Pause));
        assert!(state.apply_action(GameAction::HardDrop));
        assert_eq!(state.board().filled_count(), 4);
    }

    #[test]
    fn test_snapshot_mirrors_state() {
        let mut state = game(&[PieceKind::L, PieceKind::T]);
        state.hold();
        let snap = state.snapshot();

        assert_eq!(snap.current, state.current());
        assert_eq!(snap.next, state.next().kind);
        assert_eq!(snap.held, Some(PieceKind::L));
        assert!(!snap.can_hold);
        assert_eq!(snap.level, 1);
        assert_eq!(snap.fall_delay, BASE_FALL_DELAY);
        assert!(snap.playable());
    }
}
