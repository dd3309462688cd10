//! This crate contains the game logic and interface of maze-runner, a terminal game about
//! escaping procedurally generated mazes.
//!
//! The player starts at the top-left corner of a maze carved by randomized backtracking and has
//! to reach the bottom-right exit, across ten levels spread over three difficulty tiers. The
//! game state lives in an explicitly owned session threaded through the event loop and the
//! renderer; the renderer itself holds no game logic.

mod app;
mod cli;
mod events;
mod levels;
mod maze;
mod player;
mod session;
mod types;
mod ui;

pub use app::App;
pub use cli::Cli;
pub use levels::Difficulty;
