/*
maze.rs

Copyright 2025 Hervé Quatremain

This file is part of Mazegen.

Mazegen is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Mazegen is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Mazegen. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Generate a random perfect maze.
//!
//! The maze is carved with a recursive backtracker (randomized depth-first search with an
//! explicit stack): starting from a random cell, the algorithm removes the wall toward a random
//! unvisited neighbour and moves to it, and backtracks when the current cell has no unvisited
//! neighbour left.
//! Once every cell has been visited, the passages form a spanning tree of the grid.
//!
//! The left wall of a random cell in the first column and the right wall of a random cell in the
//! last column are then removed to create the entrance and the exit of the maze.

use log::{Level, debug, log_enabled};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::error::Error;
use std::fmt;
use std::time::Instant;

use super::grid::Grid;
use super::position::{Neighbour, Position};
use super::walls::Direction;

/// Order in which the neighbours of a cell are listed.
/// The order selects which maze a given random sequence produces.
const NEIGHBOUR_ORDER: [Direction; 4] = [
    Direction::Left,
    Direction::Down,
    Direction::Up,
    Direction::Right,
];

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum MazeError {
    /// The width or the height is zero, or the grid is too large to be allocated.
    InvalidDimensions { width: usize, height: usize },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MazeError::InvalidDimensions { width, height } => {
                write!(f, "invalid maze dimensions {width}x{height}")
            }
        }
    }
}

impl Error for MazeError {}

/// Generate and return a random maze.
///
/// Each call uses fresh entropy, so two calls return different mazes.
///
/// # Errors
///
/// The function returns [`MazeError::InvalidDimensions`] if the width or the height is zero.
pub fn generate(width: usize, height: usize) -> Result<Grid, MazeError> {
    generate_with_rng(width, height, &mut rand::rng())
}

/// Generate and return the maze for the given seed.
///
/// The same seed and dimensions always produce the same maze.
pub fn generate_seeded(width: usize, height: usize, seed: u64) -> Result<Grid, MazeError> {
    debug!("Seed = {seed}");
    let mut rng: StdRng = StdRng::seed_from_u64(seed);
    generate_with_rng(width, height, &mut rng)
}

/// Generate and return a random maze by using the provided random number generator.
///
/// # Errors
///
/// The dimensions are verified before anything is allocated. See [`generate`].
pub fn generate_with_rng<R: Rng + ?Sized>(
    width: usize,
    height: usize,
    rng: &mut R,
) -> Result<Grid, MazeError> {
    let num_cells: usize = match width.checked_mul(height) {
        Some(n) if n > 0 => n,
        _ => return Err(MazeError::InvalidDimensions { width, height }),
    };
    debug!("Width = {width}  Height = {height}  Number of cells = {num_cells}");

    let start: Instant = Instant::now();
    let mut grid: Grid = Grid::new(width, height);
    let iteration: usize = carve_passages(&mut grid, rng);
    open_edges(&mut grid, rng);
    debug!(
        "Iterations = {}  Duration = {}",
        iteration,
        start.elapsed().as_secs_f32()
    );

    if log_enabled!(Level::Debug) {
        grid.debug();
    }
    Ok(grid)
}

/// Carve the passages with the recursive backtracker and return the number of iterations.
fn carve_passages<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> usize {
    let width: usize = grid.width();
    let num_cells: usize = width * grid.height();

    // The visited status is only needed while carving, so it is not stored in the grid
    let mut visited: Vec<bool> = vec![false; num_cells];
    let mut stack: Vec<Position> = Vec::with_capacity(num_cells);
    let mut iteration: usize = 0;

    let start: Position = Position::new(
        rng.random_range(0..width),
        rng.random_range(0..grid.height()),
    );
    debug!("Starting cell = {start}");
    visited[start.y * width + start.x] = true;
    stack.push(start);

    while let Some(current) = stack.pop() {
        iteration += 1;

        let neighbours: Vec<Neighbour> = unvisited_neighbours(grid, current, &visited);
        if neighbours.is_empty() {
            // Dead end: backtrack
            continue;
        }

        // Come back to this cell later for its other neighbours
        stack.push(current);

        let next: Neighbour = neighbours[rng.random_range(0..neighbours.len())];
        if let Some(walls) = grid.get_mut(current) {
            walls.remove(next.shared_wall);
        }
        if let Some(walls) = grid.get_mut(next.position) {
            walls.remove(next.shared_wall.opposite());
        }
        visited[next.position.y * width + next.position.x] = true;
        stack.push(next.position);
    }
    iteration
}

/// Return the neighbours of the given cell that have not been visited yet.
fn unvisited_neighbours(grid: &Grid, position: Position, visited: &[bool]) -> Vec<Neighbour> {
    NEIGHBOUR_ORDER
        .iter()
        .filter_map(|d| {
            grid.neighbour(position, *d).map(|p| Neighbour {
                position: p,
                shared_wall: *d,
            })
        })
        .filter(|n| !visited[n.position.y * grid.width() + n.position.x])
        .collect()
}

/// Remove the left wall of a random cell in the first column, and the right wall of a random cell
/// in the last column.
///
/// Both rows are selected independently and might be the same.
fn open_edges<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) {
    let entrance: Position = Position::new(0, rng.random_range(0..grid.height()));
    let exit: Position = Position::new(grid.width() - 1, rng.random_range(0..grid.height()));
    debug!("Entrance = {entrance}  Exit = {exit}");

    if let Some(walls) = grid.get_mut(entrance) {
        walls.remove(Direction::Left);
    }
    if let Some(walls) = grid.get_mut(exit) {
        walls.remove(Direction::Right);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::walls::WallBits;
    use std::collections::{HashSet, VecDeque};

    const SIZES: [(usize, usize); 8] = [
        (1, 1),
        (1, 7),
        (7, 1),
        (2, 2),
        (5, 5),
        (10, 3),
        (3, 10),
        (20, 20),
    ];

    /// Number of cells reachable from the bottom-left cell through the passages.
    fn reachable_cells(grid: &Grid) -> usize {
        let mut seen: HashSet<Position> = HashSet::new();
        let mut queue: VecDeque<Position> = VecDeque::new();

        seen.insert(Position::new(0, 0));
        queue.push_back(Position::new(0, 0));
        while let Some(p) = queue.pop_front() {
            for n in grid.open_neighbours(p) {
                if seen.insert(n) {
                    queue.push_back(n);
                }
            }
        }
        seen.len()
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        assert_eq!(
            generate(0, 5),
            Err(MazeError::InvalidDimensions {
                width: 0,
                height: 5
            })
        );
        assert_eq!(
            generate_seeded(5, 0, 1),
            Err(MazeError::InvalidDimensions {
                width: 5,
                height: 0
            })
        );
        assert!(generate(0, 0).is_err());
        assert_eq!(
            generate(0, 5).unwrap_err().to_string(),
            "invalid maze dimensions 0x5"
        );
    }

    #[test]
    fn oversized_grid_is_rejected() {
        assert!(matches!(
            generate_seeded(usize::MAX, 2, 1),
            Err(MazeError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn perfect_maze() {
        for (width, height) in SIZES {
            for seed in 0..10 {
                let grid: Grid = generate_seeded(width, height, seed).unwrap();
                let num_cells: usize = width * height;

                assert_eq!(grid.width(), width);
                assert_eq!(grid.height(), height);
                assert_eq!(
                    grid.passage_count(),
                    num_cells - 1,
                    "{width}x{height} seed {seed}"
                );
                assert_eq!(
                    reachable_cells(&grid),
                    num_cells,
                    "{width}x{height} seed {seed}"
                );
            }
        }
    }

    #[test]
    fn walls_are_removed_in_pairs() {
        for (width, height) in SIZES {
            let grid: Grid = generate_seeded(width, height, 42).unwrap();
            for (p, walls) in grid.iter() {
                for d in Direction::ALL {
                    if let Some(n) = grid.neighbour(p, d) {
                        let other: WallBits = grid.get(n).unwrap();
                        assert_eq!(
                            walls.has_wall(d),
                            other.has_wall(d.opposite()),
                            "{p} {d} -> {n}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn one_entrance_and_one_exit() {
        for (width, height) in SIZES {
            for seed in 0..10 {
                let grid: Grid = generate_seeded(width, height, seed).unwrap();
                assert_eq!(grid.entrances().len(), 1);
                assert_eq!(grid.exits().len(), 1);
                assert_eq!(grid.entrances()[0].x, 0);
                assert_eq!(grid.exits()[0].x, width - 1);

                // The top and bottom edges stay closed
                for x in 0..width {
                    assert!(grid.get_xy(x, 0).unwrap().has_wall(Direction::Down));
                    assert!(grid.get_xy(x, height - 1).unwrap().has_wall(Direction::Up));
                }
            }
        }
    }

    #[test]
    fn same_seed_same_maze() {
        let a: Grid = generate_seeded(12, 9, 2025).unwrap();
        let b: Grid = generate_seeded(12, 9, 2025).unwrap();
        assert_eq!(a, b);

        let mut rng: StdRng = StdRng::seed_from_u64(2025);
        let c: Grid = generate_with_rng(12, 9, &mut rng).unwrap();
        assert_eq!(a, c);
    }

    #[test]
    fn different_seeds_different_mazes() {
        let a: Grid = generate_seeded(10, 10, 11111).unwrap();
        let b: Grid = generate_seeded(10, 10, 22222).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn single_cell() {
        for seed in 0..5 {
            let grid: Grid = generate_seeded(1, 1, seed).unwrap();
            let walls: WallBits = grid.get_xy(0, 0).unwrap();
            assert!(!walls.has_wall(Direction::Left));
            assert!(!walls.has_wall(Direction::Right));
            assert!(walls.has_wall(Direction::Up));
            assert!(walls.has_wall(Direction::Down));
            assert_eq!(grid.passage_count(), 0);
        }
    }

    #[test]
    fn single_row_is_a_corridor() {
        let grid: Grid = generate_seeded(6, 1, 3).unwrap();
        for (p, walls) in grid.iter() {
            assert!(walls.has_wall(Direction::Up));
            assert!(walls.has_wall(Direction::Down));
            if p.x > 0 {
                assert!(!walls.has_wall(Direction::Left));
            }
            if p.x < 5 {
                assert!(!walls.has_wall(Direction::Right));
            }
        }
    }

    #[test]
    fn random_mazes_are_perfect() {
        for _ in 0..5 {
            let grid: Grid = generate(8, 6).unwrap();
            assert_eq!(grid.passage_count(), 47);
            assert_eq!(reachable_cells(&grid), 48);
        }
    }
}
