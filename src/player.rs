//! Player position and movement module.
//!
//! This module contains the player's cell coordinates and the wall-validated movement logic.
//! Movement is a pure query against the maze's wall flags; a blocked move is a no-op, never an
//! error.

use crate::maze::{Direction, Maze};

/// Outcome of a movement attempt.
///
/// This enumeration distinguishes a move that changed the player's position from one that was
/// stopped by a wall. Callers use it to decide whether a win check is worth running.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum MoveResult {
    /// The player advanced one cell in the requested direction.
    Moved,
    /// A wall blocked the move and the position is unchanged.
    Blocked,
}

/// The player's position within the current maze.
///
/// This structure holds the cell coordinates of the player. It is created at the entry cell
/// `(0, 0)` whenever a level starts and is only ever mutated through validated movement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Player {
    /// Current column, counted from the left edge.
    pub(crate) col: usize,
    /// Current row, counted from the top edge.
    pub(crate) row: usize,
}

impl Player {
    /// Creates a player standing on the entry cell.
    pub(crate) const fn new() -> Self {
        Self { col: 0, row: 0 }
    }

    /// Attempts to move one cell in a direction.
    ///
    /// This function consults the current cell's wall flag for the requested side: movement is
    /// allowed exactly when that wall is absent. The grid's outer boundary is fully walled by
    /// construction, so the wall flags alone keep the player in bounds and no separate bounds
    /// check is needed.
    pub(crate) fn attempt_move(&mut self, direction: Direction, maze: &Maze) -> MoveResult {
        if maze.has_wall(self.col, self.row, direction) {
            return MoveResult::Blocked;
        }

        let (col, row) = maze
            .neighbor(self.col, self.row, direction)
            .expect("an open wall always faces an in-bounds neighbor");
        self.col = col;
        self.row = row;

        MoveResult::Moved
    }

    /// Returns whether the player stands on the maze's exit cell.
    pub(crate) fn at_exit(&self, maze: &Maze) -> bool {
        (self.col, self.row) == maze.exit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wall_blocks_movement() {
        let maze = Maze::new(3, 3);
        let mut player = Player::new();

        for direction in Direction::ALL {
            assert_eq!(
                player.attempt_move(direction, &maze),
                MoveResult::Blocked,
                "a fully walled cell should block every direction"
            );
        }
        assert_eq!((player.col, player.row), (0, 0), "blocked moves are no-ops");
    }

    #[test]
    fn test_open_wall_allows_movement() {
        let mut maze = Maze::new(3, 3);
        maze.remove_wall_pair(0, 0, Direction::East);
        let mut player = Player::new();

        assert_eq!(player.attempt_move(Direction::East, &maze), MoveResult::Moved);
        assert_eq!(
            (player.col, player.row),
            (1, 0),
            "an eastward move increments the column and keeps the row"
        );
    }

    #[test]
    fn test_movement_can_backtrack() {
        let mut maze = Maze::new(1, 2);
        maze.remove_wall_pair(0, 0, Direction::East);
        let mut player = Player::new();

        assert_eq!(player.attempt_move(Direction::East, &maze), MoveResult::Moved);
        assert_eq!(player.attempt_move(Direction::West, &maze), MoveResult::Moved);
        assert_eq!((player.col, player.row), (0, 0));
    }

    #[test]
    fn test_at_exit_detects_far_corner() {
        let mut maze = Maze::new(2, 2);
        maze.remove_wall_pair(0, 0, Direction::East);
        maze.remove_wall_pair(1, 0, Direction::South);
        let mut player = Player::new();

        assert!(!player.at_exit(&maze));
        let _ = player.attempt_move(Direction::East, &maze);
        assert!(!player.at_exit(&maze));
        let _ = player.attempt_move(Direction::South, &maze);
        assert!(player.at_exit(&maze), "the exit is the far corner cell");
    }

    #[test]
    fn test_at_exit_on_single_cell_grid() {
        let maze = Maze::new(1, 1);
        let player = Player::new();

        assert!(
            player.at_exit(&maze),
            "entry and exit coincide on a 1x1 grid"
        );
    }
}
