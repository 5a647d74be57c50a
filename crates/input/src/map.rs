//! Key mapping from terminal events to game actions and menu keys.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Navigation keys shared by every non-game screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuKey {
    Up,
    Down,
    Left,
    Right,
    Confirm,
    Back,
}

/// Whether the event is a press (or repeat) we should act on.
///
/// Terminals with the kitty keyboard protocol also report releases.
pub fn is_press(key: KeyEvent) -> bool {
    key.kind != KeyEventKind::Release
}

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(GameAction::MoveLeft),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(GameAction::MoveRight),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(GameAction::SoftDrop),

        // Rotation
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(GameAction::Rotate),

        // Actions
        KeyCode::Char(' ') => Some(GameAction::HardDrop),
        KeyCode::Char('c') | KeyCode::Char('C') => Some(GameAction::Hold),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(GameAction::Pause),

        _ => None,
    }
}

/// Map keyboard input to menu navigation.
pub fn menu_key(key: KeyEvent) -> Option<MenuKey> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(MenuKey::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(MenuKey::Down),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(MenuKey::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(MenuKey::Right),
        KeyCode::Enter | KeyCode::Char('\n') | KeyCode::Char('\r') => Some(MenuKey::Confirm),
        KeyCode::Esc => Some(MenuKey::Back),
        _ => None,
    }
}

/// `q` during play: ask before abandoning the run.
pub fn is_quit_request(key: KeyEvent) -> bool {
    !key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
}

/// Ctrl-C: leave the program from any screen.
pub fn should_quit(key: KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
}
