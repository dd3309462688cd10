//! Maze grid model and generation module.
//!
//! This module contains the wall-flag grid the game is played on and the randomized
//! iterative-backtracking generator that carves a perfect maze into it.

use rand::{seq::SliceRandom as _, Rng};

/// Cardinal directions over the maze grid.
///
/// This enumeration names the four sides of a cell. It doubles as the direction of player
/// movement and as the index into a cell's wall flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Direction {
    /// The side facing the previous row.
    North,
    /// The side facing the next row.
    South,
    /// The side facing the next column.
    East,
    /// The side facing the previous column.
    West,
}

impl Direction {
    /// All four directions in a fixed order.
    ///
    /// This constant is used to enumerate a cell's sides during generation and traversal. The
    /// order carries no meaning; neighbor selection draws uniformly from the candidate list, so
    /// enumeration order cannot bias the maze layout.
    pub(crate) const ALL: [Self; 4] = [Self::North, Self::South, Self::East, Self::West];

    /// Returns the direction facing back at this one.
    ///
    /// This function maps each side to the side of the adjacent cell that shares the same wall,
    /// which is what keeps wall removal symmetric between neighbors.
    pub(crate) const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
        }
    }
}

/// A single cell of the maze grid.
///
/// This structure holds the four wall flags of a cell (`true` meaning the wall is present) and
/// the visited flag the generator uses while carving. The visited flag carries no meaning once
/// generation has finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Cell {
    /// Wall flags indexed by direction.
    ///
    /// This field stores the walls in the order north, south, east, west. Walls are only ever
    /// removed in matched pairs with the adjacent cell, so the flags on a shared edge always
    /// agree.
    walls: [bool; 4],
    /// Generation-time visited marker.
    ///
    /// This field tracks whether the generator has already carved into this cell.
    visited: bool,
}

impl Cell {
    /// Creates a fully walled, unvisited cell.
    const fn new() -> Self {
        Self {
            walls: [true; 4],
            visited: false,
        }
    }

    /// Returns whether the wall on the given side is present.
    pub(crate) const fn has_wall(&self, direction: Direction) -> bool {
        match direction {
            Direction::North => self.walls[0],
            Direction::South => self.walls[1],
            Direction::East => self.walls[2],
            Direction::West => self.walls[3],
        }
    }

    /// Removes the wall on the given side of this cell only.
    ///
    /// This function is one half of a paired removal; callers go through
    /// [`Maze::remove_wall_pair`] so the shared edge stays consistent.
    fn clear_wall(&mut self, direction: Direction) {
        match direction {
            Direction::North => self.walls[0] = false,
            Direction::South => self.walls[1] = false,
            Direction::East => self.walls[2] = false,
            Direction::West => self.walls[3] = false,
        }
    }
}

/// The maze grid the game is played on.
///
/// This structure owns a fixed `rows x cols` grid of cells stored flat in row-major order and
/// indexed as `row * cols + col`. A maze is created fully walled, mutated only while the
/// generator runs, and queried read-only afterwards; a new level always builds a new maze.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Maze {
    /// Number of rows in the grid.
    rows: usize,
    /// Number of columns in the grid.
    cols: usize,
    /// Flat row-major cell storage.
    ///
    /// This field holds exactly `rows * cols` cells; coordinates are mapped to indices by
    /// [`Maze::index`].
    cells: Vec<Cell>,
}

impl Maze {
    /// Creates a fully walled grid with no passages.
    ///
    /// # Panics
    ///
    /// This function panics when either dimension is zero; level specs are design constants so
    /// that would be a programming error rather than a runtime condition.
    pub(crate) fn new(rows: usize, cols: usize) -> Self {
        assert!(
            rows >= 1 && cols >= 1,
            "maze dimensions must be at least 1x1"
        );

        Self {
            rows,
            cols,
            cells: vec![Cell::new(); rows * cols],
        }
    }

    /// Generates a perfect maze with randomized iterative backtracking.
    ///
    /// This function starts from a fully walled grid, pushes the entry cell `(0, 0)` onto an
    /// explicit stack and then repeatedly peeks at the top cell: if it has unvisited in-bounds
    /// neighbors, one is chosen uniformly at random, the wall pair between the two cells is
    /// removed and the neighbor is pushed; otherwise the top cell is popped. When the stack
    /// empties every cell has been visited exactly once through exactly one carved passage, so
    /// the result is a spanning tree over the grid: any two cells are connected by exactly one
    /// simple path, and in particular the exit at `(cols - 1, rows - 1)` is reachable from the
    /// entry. The outer boundary is never carved, so it stays fully walled.
    ///
    /// Degenerate dimensions still terminate correctly: a single row or column carves into a
    /// straight corridor, and a `1x1` grid keeps all four walls.
    pub(crate) fn generate<R: Rng>(rows: usize, cols: usize, rng: &mut R) -> Self {
        let mut maze = Self::new(rows, cols);

        maze.cell_mut(0, 0).visited = true;
        let mut stack = vec![(0_usize, 0_usize)];

        while let Some(&(col, row)) = stack.last() {
            let candidates = maze.unvisited_neighbors(col, row);

            if let Some(&(direction, next_col, next_row)) = candidates.choose(rng) {
                maze.remove_wall_pair(col, row, direction);
                maze.cell_mut(next_col, next_row).visited = true;
                stack.push((next_col, next_row));
            } else {
                let _ = stack.pop();
            }
        }

        maze
    }

    /// Collects the unvisited in-bounds neighbors of a cell.
    ///
    /// This function returns the candidate list the generator draws from, tagging each neighbor
    /// with the direction that leads to it.
    fn unvisited_neighbors(&self, col: usize, row: usize) -> Vec<(Direction, usize, usize)> {
        let mut candidates = Vec::new();

        for direction in Direction::ALL {
            if let Some((next_col, next_row)) = self.neighbor(col, row, direction) {
                if !self.cell(next_col, next_row).visited {
                    candidates.push((direction, next_col, next_row));
                }
            }
        }

        candidates
    }

    /// Returns the coordinates of the adjacent cell in a direction, if it exists.
    ///
    /// This function performs the bounds checking for grid traversal; stepping off any edge of
    /// the grid yields `None`.
    pub(crate) fn neighbor(
        &self,
        col: usize,
        row: usize,
        direction: Direction,
    ) -> Option<(usize, usize)> {
        match direction {
            Direction::North => row.checked_sub(1).map(|next_row| (col, next_row)),
            Direction::South => (row + 1 < self.rows).then_some((col, row + 1)),
            Direction::East => (col + 1 < self.cols).then_some((col + 1, row)),
            Direction::West => col.checked_sub(1).map(|next_col| (next_col, row)),
        }
    }

    /// Removes the wall between a cell and its neighbor in a direction.
    ///
    /// This function clears the flag on both sides of the shared edge so the grid never holds a
    /// half-removed wall.
    ///
    /// # Panics
    ///
    /// This function panics when there is no neighbor in the given direction; the generator only
    /// calls it with directions taken from the bounds-checked candidate list.
    pub(crate) fn remove_wall_pair(&mut self, col: usize, row: usize, direction: Direction) {
        let (next_col, next_row) = self
            .neighbor(col, row, direction)
            .expect("wall removal requires an in-bounds neighbor");

        self.cell_mut(col, row).clear_wall(direction);
        self.cell_mut(next_col, next_row).clear_wall(direction.opposite());
    }

    /// Maps cell coordinates to the flat storage index.
    const fn index(&self, col: usize, row: usize) -> usize {
        row * self.cols + col
    }

    /// Returns the cell at the given coordinates.
    ///
    /// # Panics
    ///
    /// This function panics on out-of-bounds coordinates, which would indicate a bug in the
    /// caller rather than a recoverable condition.
    pub(crate) fn cell(&self, col: usize, row: usize) -> &Cell {
        self.cells
            .get(self.index(col, row))
            .expect("cell coordinates out of bounds")
    }

    /// Returns the cell at the given coordinates mutably.
    fn cell_mut(&mut self, col: usize, row: usize) -> &mut Cell {
        let index = self.index(col, row);
        self.cells
            .get_mut(index)
            .expect("cell coordinates out of bounds")
    }

    /// Returns whether the cell at the given coordinates has a wall on the given side.
    pub(crate) fn has_wall(&self, col: usize, row: usize, direction: Direction) -> bool {
        self.cell(col, row).has_wall(direction)
    }

    /// Returns the number of rows in the grid.
    pub(crate) const fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns in the grid.
    pub(crate) const fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the coordinates of the exit cell.
    ///
    /// This function names the far corner `(cols - 1, rows - 1)`; reaching it completes the
    /// level. On a `1x1` grid the exit coincides with the entry.
    pub(crate) const fn exit(&self) -> (usize, usize) {
        (self.cols - 1, self.rows - 1)
    }
}
