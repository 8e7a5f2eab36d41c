//! Input module - keyboard handling for game controls

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::{Direction, GameAction};

/// Map keyboard input to game actions
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        // Directions
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('w') => {
            Some(GameAction::Move(Direction::Up))
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('s') => {
            Some(GameAction::Move(Direction::Down))
        }
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('a') => {
            Some(GameAction::Move(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('d') => {
            Some(GameAction::Move(Direction::Right))
        }

        // Restart
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Restart),

        _ => None,
    }
}

/// Check if key should quit the game
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
