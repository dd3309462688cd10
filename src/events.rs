//! Event handling functions for user input and application state updates.

use std::time::Duration;

use color_eyre::eyre::Result;
use ratatui::crossterm::event::{self, Event, KeyCode};

use crate::{types::GameEvent, App};

/// Handles input events and updates the application state accordingly.
///
/// This function polls for keyboard events with a timeout so the UI never blocks, translates
/// raw key presses into semantic [`GameEvent`]s and feeds them to the session's state machine.
/// The session decides what a given event means on the current screen; this function only does
/// the translation and records an exit request.
pub(crate) fn handle_events(app: &mut App) -> Result<()> {
    if event::poll(Duration::from_millis(100))? {
        if let Event::Key(key) = event::read()? {
            if let Some(game_event) = map_key(key.code) {
                if app.session.apply(game_event, &mut app.rng) {
                    app.exit = true;
                }
            }
        }
    }

    Ok(())
}

/// Translates a key press into a semantic game event.
///
/// This function supports both the arrow keys and the hjkl keys for movement, space and enter
/// for confirmation, escape for the pause toggle, and 'q' to quit. Unmapped keys produce no
/// event at all.
pub(crate) const fn map_key(code: KeyCode) -> Option<GameEvent> {
    match code {
        KeyCode::Up | KeyCode::Char('k') => Some(GameEvent::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(GameEvent::MoveDown),
        KeyCode::Left | KeyCode::Char('h') => Some(GameEvent::MoveLeft),
        KeyCode::Right | KeyCode::Char('l') => Some(GameEvent::MoveRight),
        KeyCode::Enter | KeyCode::Char(' ') => Some(GameEvent::Confirm),
        KeyCode::Esc => Some(GameEvent::PauseToggle),
        KeyCode::Char('q') => Some(GameEvent::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys_map_to_movement() {
        assert_eq!(map_key(KeyCode::Up), Some(GameEvent::MoveUp));
        assert_eq!(map_key(KeyCode::Down), Some(GameEvent::MoveDown));
        assert_eq!(map_key(KeyCode::Left), Some(GameEvent::MoveLeft));
        assert_eq!(map_key(KeyCode::Right), Some(GameEvent::MoveRight));
    }

    #[test]
    fn test_vim_keys_map_to_movement() {
        assert_eq!(map_key(KeyCode::Char('k')), Some(GameEvent::MoveUp));
        assert_eq!(map_key(KeyCode::Char('j')), Some(GameEvent::MoveDown));
        assert_eq!(map_key(KeyCode::Char('h')), Some(GameEvent::MoveLeft));
        assert_eq!(map_key(KeyCode::Char('l')), Some(GameEvent::MoveRight));
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(map_key(KeyCode::Enter), Some(GameEvent::Confirm));
        assert_eq!(map_key(KeyCode::Char(' ')), Some(GameEvent::Confirm));
        assert_eq!(map_key(KeyCode::Esc), Some(GameEvent::PauseToggle));
        assert_eq!(map_key(KeyCode::Char('q')), Some(GameEvent::Quit));
    }

    #[test]
    fn test_unmapped_keys_produce_no_event() {
        assert_eq!(map_key(KeyCode::Char('x')), None);
        assert_eq!(map_key(KeyCode::F(1)), None);
        assert_eq!(map_key(KeyCode::Tab), None);
    }
}
