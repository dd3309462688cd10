//! Core application state and logic for the maze-runner game.

use color_eyre::eyre::Result;
use rand::{rngs::StdRng, SeedableRng as _};
use ratatui::DefaultTerminal;

use crate::{cli::Cli, events, session::Session, ui};

/// Application state container for the maze-runner game.
///
/// This structure holds the state of the application, which is to say the structure from which
/// Ratatui will render the game and Crossterm events will help writing to. The session carries
/// the whole game state; the app adds the process-level pieces around it.
pub struct App {
    /// Application exit flag.
    ///
    /// This field indicates whether the application should exit. It is set to `true` when the
    /// user wants to quit the game but it starts off `false`.
    pub(crate) exit: bool,
    /// The game session the controller and renderer operate on.
    ///
    /// This field holds the explicitly owned session state: current screen, difficulty, level
    /// index, and the running level.
    pub(crate) session: Session,
    /// Random number generator feeding maze generation.
    ///
    /// This field holds the single generator threaded into every level start. It is seeded from
    /// the command line when a seed was given, otherwise from OS entropy.
    pub(crate) rng: StdRng,
}

impl App {
    /// Creates a new instance of the App structure from the command line options.
    ///
    /// This function seeds the generator and builds a session in the main menu; when a
    /// difficulty was passed on the command line the session skips the menus and starts that
    /// tier's first level right away.
    pub fn new(cli: &Cli) -> Self {
        let mut rng = match cli.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut session = Session::new();
        if let Some(difficulty) = cli.difficulty {
            session.start_tier(difficulty, &mut rng);
        }

        Self {
            exit: false,
            session,
            rng,
        }
    }

    /// Runs the main loop of the application.
    ///
    /// This function draws the current screen and handles user input until the exit condition
    /// is `true`, after which it returns to the call site. Each iteration renders first and
    /// then applies at most one input event, so the renderer always observes the session after
    /// a completed update.
    ///
    /// # Errors
    ///
    /// - [`std::io::Error`]
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        while !self.exit {
            let _ = terminal.try_draw(|frame| {
                ui::draw(self, frame)
                    .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err))
            })?;
            events::handle_events(self)?;
        }

        Ok(())
    }
}
