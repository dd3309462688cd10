//! Command line interface definitions.
//!
//! This module contains the clap-derived argument parser. Both options are conveniences: the
//! game is fully playable from the menus without passing anything.

use clap::Parser;

use crate::levels::Difficulty;

/// Command line options of the maze-runner game.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    /// Difficulty tier to start playing immediately, skipping the menus.
    #[arg(short, long, value_enum)]
    pub difficulty: Option<Difficulty>,

    /// Seed for maze generation; omitted, the mazes differ every run.
    #[arg(short, long)]
    pub seed: Option<u64>,
}

#[cfg(test)]
mod tests {
    use clap::Parser as _;

    use super::*;

    #[test]
    fn test_defaults_to_menu_start() {
        let cli = Cli::try_parse_from(["maze-runner"]).expect("empty invocation parses");

        assert_eq!(cli.difficulty, None);
        assert_eq!(cli.seed, None);
    }

    #[test]
    fn test_difficulty_and_seed_flags() {
        let cli = Cli::try_parse_from(["maze-runner", "--difficulty", "hard", "--seed", "42"])
            .expect("valid flags parse");

        assert_eq!(cli.difficulty, Some(Difficulty::Hard));
        assert_eq!(cli.seed, Some(42));
    }

    #[test]
    fn test_short_flags() {
        let cli = Cli::try_parse_from(["maze-runner", "-d", "medium", "-s", "7"])
            .expect("short flags parse");

        assert_eq!(cli.difficulty, Some(Difficulty::Medium));
        assert_eq!(cli.seed, Some(7));
    }

    #[test]
    fn test_unknown_difficulty_is_rejected() {
        let result = Cli::try_parse_from(["maze-runner", "--difficulty", "nightmare"]);

        assert!(result.is_err(), "only the three tiers are valid values");
    }
}
