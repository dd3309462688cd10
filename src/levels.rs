//! Level catalog module.
//!
//! This module contains the static difficulty tiers and their per-level parameters. The tables
//! are fixed design constants; within each tier the grids grow and the rendering scale shrinks,
//! and the controller derives every level index from the bounds exposed here.

use clap::ValueEnum;

/// The three difficulty tiers of the game.
///
/// This enumeration names the ordered level sequences a player can pick from. It derives
/// [`ValueEnum`] so the command line can select a tier directly by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Difficulty {
    /// Three small mazes for beginners.
    Easy,
    /// Four mid-sized mazes with a moderate challenge.
    Medium,
    /// Three large mazes for maze experts.
    Hard,
}

impl Difficulty {
    /// Returns the display name of the tier.
    pub(crate) const fn label(self) -> &'static str {
        match self {
            Self::Easy => "EASY",
            Self::Medium => "MEDIUM",
            Self::Hard => "HARD",
        }
    }
}

/// Parameters of a single level.
///
/// This structure bundles the grid dimensions with the rendering scale hint. The scale is a
/// presentation concern only: larger grids carry a smaller scale so the whole maze keeps
/// fitting on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct LevelSpec {
    /// Number of grid rows.
    pub(crate) rows: usize,
    /// Number of grid columns.
    pub(crate) cols: usize,
    /// Per-cell rendering scale hint.
    pub(crate) scale: u16,
}

/// Level table for the easy tier.
const EASY_LEVELS: [LevelSpec; 3] = [
    LevelSpec {
        rows: 8,
        cols: 12,
        scale: 50,
    },
    LevelSpec {
        rows: 10,
        cols: 15,
        scale: 45,
    },
    LevelSpec {
        rows: 12,
        cols: 18,
        scale: 40,
    },
];

/// Level table for the medium tier.
const MEDIUM_LEVELS: [LevelSpec; 4] = [
    LevelSpec {
        rows: 15,
        cols: 20,
        scale: 35,
    },
    LevelSpec {
        rows: 17,
        cols: 22,
        scale: 32,
    },
    LevelSpec {
        rows: 18,
        cols: 25,
        scale: 30,
    },
    LevelSpec {
        rows: 20,
        cols: 28,
        scale: 28,
    },
];

/// Level table for the hard tier.
const HARD_LEVELS: [LevelSpec; 3] = [
    LevelSpec {
        rows: 22,
        cols: 30,
        scale: 25,
    },
    LevelSpec {
        rows: 25,
        cols: 35,
        scale: 22,
    },
    LevelSpec {
        rows: 28,
        cols: 40,
        scale: 20,
    },
];

/// Returns the ordered level table of a tier.
const fn specs(difficulty: Difficulty) -> &'static [LevelSpec] {
    match difficulty {
        Difficulty::Easy => &EASY_LEVELS,
        Difficulty::Medium => &MEDIUM_LEVELS,
        Difficulty::Hard => &HARD_LEVELS,
    }
}

/// Returns the number of levels in a tier.
pub(crate) const fn count(difficulty: Difficulty) -> usize {
    specs(difficulty).len()
}

/// Looks up the parameters of a level within a tier.
///
/// This function returns `None` for an index at or past the tier's level count; the controller
/// reads that as "tier complete" and routes to the game-complete screen instead of a lookup.
pub(crate) fn spec(difficulty: Difficulty, index: usize) -> Option<LevelSpec> {
    specs(difficulty).get(index).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_level_counts() {
        assert_eq!(count(Difficulty::Easy), 3);
        assert_eq!(count(Difficulty::Medium), 4);
        assert_eq!(count(Difficulty::Hard), 3);
    }

    #[test]
    fn test_ten_levels_in_total() {
        let total = count(Difficulty::Easy) + count(Difficulty::Medium) + count(Difficulty::Hard);
        assert_eq!(total, 10, "the game ships ten levels across the tiers");
    }

    #[test]
    fn test_first_easy_level_parameters() {
        let first = spec(Difficulty::Easy, 0).expect("easy tier has a first level");

        assert_eq!(first.rows, 8);
        assert_eq!(first.cols, 12);
        assert_eq!(first.scale, 50);
    }

    #[test]
    fn test_out_of_range_index_signals_tier_complete() {
        assert_eq!(spec(Difficulty::Easy, 3), None);
        assert_eq!(spec(Difficulty::Medium, 4), None);
        assert_eq!(spec(Difficulty::Hard, 10), None);
    }

    #[test]
    fn test_grids_grow_and_scale_shrinks_within_each_tier() {
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            let table = specs(difficulty);
            for pair in table.windows(2) {
                let [previous, next] = pair else {
                    panic!("windows(2) yields pairs");
                };
                assert!(
                    next.rows > previous.rows && next.cols > previous.cols,
                    "later levels use larger grids"
                );
                assert!(next.scale < previous.scale, "later levels render smaller cells");
            }
        }
    }

    #[test]
    fn test_difficulty_labels() {
        assert_eq!(Difficulty::Easy.label(), "EASY");
        assert_eq!(Difficulty::Medium.label(), "MEDIUM");
        assert_eq!(Difficulty::Hard.label(), "HARD");
    }
}
