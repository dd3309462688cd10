//! Type definitions for screens, menu cursors, and semantic input events.

/// Enumeration of available application screens.
///
/// This enumeration holds the current state of the game flow. It determines which screen to
/// render and which transitions an input event may trigger. Menu screens carry their cursor
/// position inside the variant so the selection state cannot outlive the screen it belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Screen {
    /// Title screen with the play/quit choice.
    MainMenu(MainMenuItem),
    /// Difficulty tier selection screen.
    DifficultySelect(DifficultyItem),
    /// The screen on which the maze is played.
    Playing,
    /// Pause overlay frozen on top of the current level.
    ///
    /// This variant keeps the maze and player untouched; leaving it either resumes play or
    /// resets the session back to the main menu.
    Paused(PauseMenuItem),
    /// Interstitial screen after finishing a level with more levels remaining.
    LevelComplete,
    /// Final screen after finishing the last level of a tier.
    GameComplete,
}

/// Main menu navigation options.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum MainMenuItem {
    /// "Play" menu option, leading to difficulty selection.
    Play,
    /// "Quit" menu option, ending the program.
    Quit,
}

/// Difficulty selection cursor positions.
///
/// This enumeration holds the entries of the difficulty screen: the three tiers plus a "Back"
/// entry returning to the main menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum DifficultyItem {
    /// The easy tier entry.
    Easy,
    /// The medium tier entry.
    Medium,
    /// The hard tier entry.
    Hard,
    /// "Back" navigation entry.
    Back,
}

/// Pause menu navigation options.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum PauseMenuItem {
    /// "Resume" entry, returning to play.
    Resume,
    /// "Main Menu" entry, abandoning the run.
    MainMenu,
}

/// Semantic input events fed to the game-flow controller.
///
/// This enumeration is the whole input surface of the core: the event loop translates raw key
/// presses into these values and the session only ever sees them. On menu screens the vertical
/// movement events double as cursor movement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum GameEvent {
    /// Move the player one cell north, or the menu cursor up.
    MoveUp,
    /// Move the player one cell south, or the menu cursor down.
    MoveDown,
    /// Move the player one cell west.
    MoveLeft,
    /// Move the player one cell east.
    MoveRight,
    /// Confirm the highlighted menu entry or continue past an interstitial screen.
    Confirm,
    /// Toggle between playing and paused.
    PauseToggle,
    /// Quit the program from any screen.
    Quit,
}

/// Generic menu type configuration.
///
/// This enumeration holds the specifics particular to each centered menu in the interface: its
/// title and the number of entries to lay out.
pub(crate) enum MenuType {
    /// Main menu configuration.
    MainMenu(u8),
    /// Difficulty selection menu configuration.
    DifficultyMenu(u8),
    /// Pause menu configuration.
    PauseMenu(u8),
}

impl MenuType {
    /// Returns the title of the menu type.
    pub(crate) const fn repr(&self) -> &str {
        match self {
            Self::MainMenu(_) => "Maze Runner",
            Self::DifficultyMenu(_) => "Select Difficulty",
            Self::PauseMenu(_) => "Paused",
        }
    }

    /// Returns the number of entries stored by the menu type variant.
    ///
    /// This function provides the entry count for layout calculations, allowing the UI to size
    /// the menu container.
    pub(crate) const fn value(&self) -> u8 {
        match self {
            Self::MainMenu(value) | Self::DifficultyMenu(value) | Self::PauseMenu(value) => *value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_variants_compare_by_cursor() {
        assert_eq!(
            Screen::MainMenu(MainMenuItem::Play),
            Screen::MainMenu(MainMenuItem::Play)
        );
        assert_ne!(
            Screen::MainMenu(MainMenuItem::Play),
            Screen::MainMenu(MainMenuItem::Quit)
        );
        assert_ne!(Screen::Playing, Screen::LevelComplete);
        assert_ne!(
            Screen::Paused(PauseMenuItem::Resume),
            Screen::Paused(PauseMenuItem::MainMenu)
        );
    }

    #[test]
    fn test_menu_type_repr() {
        assert_eq!(MenuType::MainMenu(2).repr(), "Maze Runner");
        assert_eq!(MenuType::DifficultyMenu(4).repr(), "Select Difficulty");
        assert_eq!(MenuType::PauseMenu(2).repr(), "Paused");
    }

    #[test]
    fn test_menu_type_value() {
        assert_eq!(MenuType::MainMenu(2).value(), 2);
        assert_eq!(MenuType::DifficultyMenu(4).value(), 4);
        assert_eq!(MenuType::PauseMenu(2).value(), 2);
    }

    #[test]
    fn test_game_event_equality() {
        assert_eq!(GameEvent::MoveUp, GameEvent::MoveUp);
        assert_ne!(GameEvent::Confirm, GameEvent::PauseToggle);
    }
}
