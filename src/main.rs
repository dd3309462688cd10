//! This crate contains the source code for the binary for the game maze-runner.

#![expect(
    unused_crate_dependencies,
    reason = "The dependencies are used in the library crate."
)]

use clap::Parser as _;
use color_eyre::{eyre::Result, install};
use maze_runner::{App, Cli};

fn main() -> Result<()> {
    install()?;

    let cli = Cli::parse();

    let mut terminal = ratatui::init();
    App::new(&cli).run(&mut terminal)?;
    ratatui::restore();

    Ok(())
}
