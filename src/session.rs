//! Game session state and the game-flow controller.
//!
//! This module contains the explicitly owned session state (current screen, difficulty, level
//! index, and the running level) plus the transition logic that applies semantic input events
//! to it. The whole state machine lives here; the renderer only ever reads the session.

use rand::Rng;

use crate::{
    levels::{self, Difficulty, LevelSpec},
    maze::{Direction, Maze},
    player::{MoveResult, Player},
    types::{DifficultyItem, GameEvent, MainMenuItem, PauseMenuItem, Screen},
};

/// The maze and player of the level currently being played.
///
/// This structure bundles everything a single level owns. It is created wholesale when a level
/// starts and dropped when the level ends, so replaying a level index always produces a fresh
/// maze layout.
pub(crate) struct LevelRun {
    /// Parameters the level was generated from.
    pub(crate) spec: LevelSpec,
    /// The generated maze of this level.
    pub(crate) maze: Maze,
    /// The player, starting at the entry cell.
    pub(crate) player: Player,
}

/// Process-wide game session state.
///
/// This structure holds the current screen, the selected difficulty, the level index within the
/// tier, and the running level if one is active. It is constructed once at startup in the menu
/// state and threaded explicitly through the event loop and the renderer; there are no global
/// singletons.
pub(crate) struct Session {
    /// The screen the game currently shows.
    pub(crate) screen: Screen,
    /// The difficulty tier currently selected.
    pub(crate) difficulty: Difficulty,
    /// Index of the current level within the tier.
    pub(crate) level: usize,
    /// The level currently being played, if any.
    ///
    /// This field is `None` on the menu screens and `Some` from level start until the session
    /// returns to the main menu.
    pub(crate) run: Option<LevelRun>,
}

impl Session {
    /// Creates a session in the main menu with default selections.
    pub(crate) const fn new() -> Self {
        Self {
            screen: Screen::MainMenu(MainMenuItem::Play),
            difficulty: Difficulty::Easy,
            level: 0,
            run: None,
        }
    }

    /// Applies one semantic input event to the session.
    ///
    /// This function is the state machine's single entry point: it dispatches the event based
    /// on the current screen and performs the matching transition, if any. An event either
    /// fully applies or is a no-op. The return value reports whether the program should exit.
    pub(crate) fn apply<R: Rng>(&mut self, event: GameEvent, rng: &mut R) -> bool {
        if matches!(event, GameEvent::Quit) {
            return true;
        }

        match self.screen {
            Screen::MainMenu(item) => return self.main_menu_event(item, event),
            Screen::DifficultySelect(item) => self.difficulty_select_event(item, event, rng),
            Screen::Playing => self.playing_event(event),
            Screen::Paused(item) => self.paused_event(item, event),
            Screen::LevelComplete => {
                if matches!(event, GameEvent::Confirm) {
                    self.start_level(rng);
                }
            }
            Screen::GameComplete => {
                if matches!(event, GameEvent::Confirm) {
                    self.reset();
                }
            }
        }

        false
    }

    /// Handles events on the main menu screen.
    ///
    /// This function moves the cursor between the two entries and confirms the highlighted one;
    /// confirming "Quit" asks the caller to exit.
    fn main_menu_event(&mut self, item: MainMenuItem, event: GameEvent) -> bool {
        match (item, event) {
            (MainMenuItem::Play, GameEvent::MoveDown) => {
                self.screen = Screen::MainMenu(MainMenuItem::Quit);
            }
            (MainMenuItem::Quit, GameEvent::MoveUp) => {
                self.screen = Screen::MainMenu(MainMenuItem::Play);
            }
            (MainMenuItem::Play, GameEvent::Confirm) => {
                self.screen = Screen::DifficultySelect(DifficultyItem::Easy);
            }
            (MainMenuItem::Quit, GameEvent::Confirm) => return true,
            _ => {}
        }

        false
    }

    /// Handles events on the difficulty selection screen.
    ///
    /// This function moves the cursor through the tier entries and starts the chosen tier on
    /// confirmation; the "Back" entry returns to the main menu without touching the session.
    fn difficulty_select_event<R: Rng>(
        &mut self,
        item: DifficultyItem,
        event: GameEvent,
        rng: &mut R,
    ) {
        match (item, event) {
            (DifficultyItem::Easy, GameEvent::MoveDown) => {
                self.screen = Screen::DifficultySelect(DifficultyItem::Medium);
            }
            (DifficultyItem::Medium, GameEvent::MoveDown) => {
                self.screen = Screen::DifficultySelect(DifficultyItem::Hard);
            }
            (DifficultyItem::Hard, GameEvent::MoveDown) => {
                self.screen = Screen::DifficultySelect(DifficultyItem::Back);
            }
            (DifficultyItem::Back, GameEvent::MoveUp) => {
                self.screen = Screen::DifficultySelect(DifficultyItem::Hard);
            }
            (DifficultyItem::Hard, GameEvent::MoveUp) => {
                self.screen = Screen::DifficultySelect(DifficultyItem::Medium);
            }
            (DifficultyItem::Medium, GameEvent::MoveUp) => {
                self.screen = Screen::DifficultySelect(DifficultyItem::Easy);
            }
            (DifficultyItem::Easy, GameEvent::Confirm) => {
                self.start_tier(Difficulty::Easy, rng);
            }
            (DifficultyItem::Medium, GameEvent::Confirm) => {
                self.start_tier(Difficulty::Medium, rng);
            }
            (DifficultyItem::Hard, GameEvent::Confirm) => {
                self.start_tier(Difficulty::Hard, rng);
            }
            (DifficultyItem::Back, GameEvent::Confirm) => {
                self.screen = Screen::MainMenu(MainMenuItem::Play);
            }
            _ => {}
        }
    }

    /// Handles events while a level is being played.
    ///
    /// This function maps the directional events to player movement and the pause toggle to the
    /// pause screen; anything else is ignored.
    fn playing_event(&mut self, event: GameEvent) {
        match event {
            GameEvent::MoveUp => self.move_player(Direction::North),
            GameEvent::MoveDown => self.move_player(Direction::South),
            GameEvent::MoveLeft => self.move_player(Direction::West),
            GameEvent::MoveRight => self.move_player(Direction::East),
            GameEvent::PauseToggle => self.screen = Screen::Paused(PauseMenuItem::Resume),
            _ => {}
        }
    }

    /// Handles events on the pause screen.
    ///
    /// This function leaves the maze and player untouched in every branch except "Main Menu",
    /// which resets the whole session back to its defaults.
    fn paused_event(&mut self, item: PauseMenuItem, event: GameEvent) {
        match (item, event) {
            (_, GameEvent::PauseToggle) | (PauseMenuItem::Resume, GameEvent::Confirm) => {
                self.screen = Screen::Playing;
            }
            (PauseMenuItem::Resume, GameEvent::MoveDown) => {
                self.screen = Screen::Paused(PauseMenuItem::MainMenu);
            }
            (PauseMenuItem::MainMenu, GameEvent::MoveUp) => {
                self.screen = Screen::Paused(PauseMenuItem::Resume);
            }
            (PauseMenuItem::MainMenu, GameEvent::Confirm) => self.reset(),
            _ => {}
        }
    }

    /// Attempts to move the player and runs the win check on success.
    ///
    /// This function is the only place the win condition is evaluated, and a successful check
    /// immediately leaves the playing screen, so the transition fires exactly once per arrival
    /// on the exit cell. Reaching the exit advances the level index; whether more levels remain
    /// in the tier decides between the level-complete and game-complete screens.
    fn move_player(&mut self, direction: Direction) {
        let Some(run) = self.run.as_mut() else {
            return;
        };

        if matches!(run.player.attempt_move(direction, &run.maze), MoveResult::Moved)
            && run.player.at_exit(&run.maze)
        {
            self.level += 1;
            self.screen = if self.level < levels::count(self.difficulty) {
                Screen::LevelComplete
            } else {
                Screen::GameComplete
            };
        }
    }

    /// Selects a tier and starts its first level.
    pub(crate) fn start_tier<R: Rng>(&mut self, difficulty: Difficulty, rng: &mut R) {
        self.difficulty = difficulty;
        self.level = 0;
        self.start_level(rng);
    }

    /// Starts the level at the current index with a freshly generated maze.
    ///
    /// This function always generates anew; a previous grid is never reused, so even replaying
    /// the same level index yields a different layout. An index past the tier's catalog routes
    /// to the game-complete screen instead of a lookup.
    fn start_level<R: Rng>(&mut self, rng: &mut R) {
        match levels::spec(self.difficulty, self.level) {
            Some(spec) => {
                self.run = Some(LevelRun {
                    spec,
                    maze: Maze::generate(spec.rows, spec.cols, rng),
                    player: Player::new(),
                });
                self.screen = Screen::Playing;
            }
            None => {
                self.run = None;
                self.screen = Screen::GameComplete;
            }
        }
    }

    /// Returns the session to the main menu with default selections.
    fn reset(&mut self) {
        self.screen = Screen::MainMenu(MainMenuItem::Play);
        self.difficulty = Difficulty::Easy;
        self.level = 0;
        self.run = None;
    }
}
