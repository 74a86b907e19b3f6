/*
grid.rs

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

//! Grid of cells produced by the maze generator.
//!
//! The [`Grid`] object is what the generator hands over to the caller.
//! The caller reads the walls of each cell to build the maze geometry, and scans the first and
//! last columns with [`Grid::entrances`] and [`Grid::exits`] to place the exit markers.

use log::debug;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

use super::position::Position;
use super::walls::{Direction, WallBits};

/// Type of errors when rebuilding a grid from saved data.
#[derive(Debug, PartialEq)]
pub enum GridError {
    /// The width or the height is zero.
    ZeroDimension,

    /// The number of cells does not fit in memory.
    TooLarge,

    /// The number of cells does not match the dimensions.
    CellCount { expected: usize, found: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GridError::ZeroDimension => write!(f, "the grid width and height must not be zero"),
            GridError::TooLarge => write!(f, "the grid is too large"),
            GridError::CellCount { expected, found } => {
                write!(f, "expected {expected} cells, found {found}")
            }
        }
    }
}

impl Error for GridError {}

/// Serialized form of a [`Grid`], validated before it becomes a [`Grid`].
#[derive(Deserialize)]
struct GridData {
    width: usize,
    height: usize,
    cells: Vec<WallBits>,
}

/// Maze grid.
///
/// Cells are stored row by row, starting from the bottom row (`y = 0`).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(try_from = "GridData")]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<WallBits>,
}

impl TryFrom<GridData> for Grid {
    type Error = GridError;

    fn try_from(data: GridData) -> Result<Self, Self::Error> {
        if data.width == 0 || data.height == 0 {
            return Err(GridError::ZeroDimension);
        }
        let expected: usize = data
            .width
            .checked_mul(data.height)
            .ok_or(GridError::TooLarge)?;
        if data.cells.len() != expected {
            return Err(GridError::CellCount {
                expected,
                found: data.cells.len(),
            });
        }
        Ok(Self {
            width: data.width,
            height: data.height,
            cells: data.cells,
        })
    }
}

impl Grid {
    /// Create a [`Grid`] object with all the walls of all the cells present.
    ///
    /// The caller validates the dimensions.
    pub(crate) fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![WallBits::ALL; width * height],
        }
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Index of the cell in the cell vector.
    fn index(&self, x: usize, y: usize) -> Option<usize> {
        if x >= self.width || y >= self.height {
            None
        } else {
            Some(y * self.width + x)
        }
    }

    /// Return the walls of the cell at the given position, or `None` outside the grid.
    pub fn get(&self, position: Position) -> Option<WallBits> {
        self.get_xy(position.x, position.y)
    }

    /// Return the walls of the cell at the given coordinates, or `None` outside the grid.
    pub fn get_xy(&self, x: usize, y: usize) -> Option<WallBits> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// Return a mutable reference to the walls of the given cell.
    pub(crate) fn get_mut(&mut self, position: Position) -> Option<&mut WallBits> {
        self.index(position.x, position.y)
            .map(|i| &mut self.cells[i])
    }

    /// Return the position of the adjacent cell in the given direction, or `None` when the cell
    /// is on the edge of the grid.
    pub fn neighbour(&self, position: Position, direction: Direction) -> Option<Position> {
        self.index(position.x, position.y)?;
        let Position { x, y } = position;
        match direction {
            Direction::Left if x > 0 => Some(Position::new(x - 1, y)),
            Direction::Right if x + 1 < self.width => Some(Position::new(x + 1, y)),
            Direction::Up if y + 1 < self.height => Some(Position::new(x, y + 1)),
            Direction::Down if y > 0 => Some(Position::new(x, y - 1)),
            _ => None,
        }
    }

    /// Return the adjacent cells that can be reached from the given cell without crossing a wall.
    ///
    /// Openings on the edge of the grid are not reported.
    pub fn open_neighbours(&self, position: Position) -> Vec<Position> {
        let walls: WallBits = match self.get(position) {
            Some(w) => w,
            None => return Vec::new(),
        };
        Direction::ALL
            .iter()
            .filter(|d| !walls.has_wall(**d))
            .filter_map(|d| self.neighbour(position, *d))
            .collect()
    }

    /// Number of passages between adjacent cells.
    ///
    /// For a perfect maze, this is the number of cells minus one.
    pub fn passage_count(&self) -> usize {
        self.iter()
            .map(|(p, w)| {
                [Direction::Right, Direction::Up]
                    .iter()
                    .filter(|d| !w.has_wall(**d) && self.neighbour(p, **d).is_some())
                    .count()
            })
            .sum()
    }

    /// Cells in the first column that have their left wall removed.
    pub fn entrances(&self) -> Vec<Position> {
        self.edge_openings(0, Direction::Left)
    }

    /// Cells in the last column that have their right wall removed.
    pub fn exits(&self) -> Vec<Position> {
        self.edge_openings(self.width - 1, Direction::Right)
    }

    fn edge_openings(&self, x: usize, direction: Direction) -> Vec<Position> {
        (0..self.height)
            .map(|y| Position::new(x, y))
            .filter(|p| self.get(*p).is_some_and(|w| !w.has_wall(direction)))
            .collect()
    }

    /// Return a text picture of the maze. The top row is printed first.
    ///
    /// ```text
    /// +---+---+
    ///         |
    /// +   +---+
    /// |
    /// +---+---+
    /// ```
    pub fn to_text(&self) -> String {
        let mut s: String = String::with_capacity((self.width * 4 + 2) * (self.height * 2 + 1));

        for y in (0..self.height).rev() {
            s.push('+');
            for x in 0..self.width {
                s.push_str(if self.has_wall(x, y, Direction::Up) {
                    "---+"
                } else {
                    "   +"
                });
            }
            s.push('\n');

            s.push(if self.has_wall(0, y, Direction::Left) {
                '|'
            } else {
                ' '
            });
            for x in 0..self.width {
                s.push_str("   ");
                s.push(if self.has_wall(x, y, Direction::Right) {
                    '|'
                } else {
                    ' '
                });
            }
            s.truncate(s.trim_end_matches(' ').len());
            s.push('\n');
        }

        s.push('+');
        for x in 0..self.width {
            s.push_str(if self.has_wall(x, 0, Direction::Down) {
                "---+"
            } else {
                "   +"
            });
        }
        s.push('\n');
        s
    }

    fn has_wall(&self, x: usize, y: usize, direction: Direction) -> bool {
        self.get_xy(x, y).is_some_and(|w| w.has_wall(direction))
    }

    /// Print the maze.
    pub fn debug(&self) {
        debug!("Maze {}x{}", self.width, self.height);
        for line in self.to_text().lines() {
            debug!("{line}");
        }
    }

    /// Iterate over the cells of the grid, row by row from the bottom row.
    ///
    /// # Example:
    ///
    /// ```
    /// # let grid = mazegen::generator::maze::generate_seeded(3, 2, 7).unwrap();
    /// for (position, walls) in grid.iter().filter(|(_, w)| w.count() == 3) {
    ///     println!("Dead end at {position}: {walls:?}");
    /// }
    /// ```
    pub fn iter(&self) -> GridIterator<'_> {
        GridIterator {
            grid: self,
            index: 0,
        }
    }
}

/// Iterator for the grid cells.
pub struct GridIterator<'a> {
    grid: &'a Grid,
    index: usize,
}

/// Iterator implementation.
impl Iterator for GridIterator<'_> {
    type Item = (Position, WallBits);

    fn next(&mut self) -> Option<Self::Item> {
        let walls: WallBits = *self.grid.cells.get(self.index)?;
        let position: Position =
            Position::new(self.index % self.grid.width, self.index / self.grid.width);
        self.index += 1;
        Some((position, walls))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Two by two grid with a passage between (0,0) and (1,0), and between (1,0) and (1,1).
    fn small_grid() -> Grid {
        let mut grid: Grid = Grid::new(2, 2);
        let a: Position = Position::new(0, 0);
        let b: Position = Position::new(1, 0);
        let c: Position = Position::new(1, 1);

        grid.get_mut(a).unwrap().remove(Direction::Right);
        grid.get_mut(b).unwrap().remove(Direction::Left);
        grid.get_mut(b).unwrap().remove(Direction::Up);
        grid.get_mut(c).unwrap().remove(Direction::Down);
        grid
    }

    #[test]
    fn new_grid_has_all_walls() {
        let grid: Grid = Grid::new(3, 2);
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.iter().count(), 6);
        assert!(grid.iter().all(|(_, w)| w == WallBits::ALL));
        assert_eq!(grid.passage_count(), 0);
        assert!(grid.entrances().is_empty());
        assert!(grid.exits().is_empty());
    }

    #[test]
    fn out_of_bounds_access() {
        let grid: Grid = Grid::new(3, 2);
        assert_eq!(grid.get_xy(2, 1), Some(WallBits::ALL));
        assert_eq!(grid.get_xy(3, 0), None);
        assert_eq!(grid.get_xy(0, 2), None);
        assert!(grid.open_neighbours(Position::new(5, 5)).is_empty());
        assert_eq!(grid.neighbour(Position::new(3, 0), Direction::Left), None);
    }

    #[test]
    fn neighbours_respect_the_edges() {
        let grid: Grid = Grid::new(3, 2);
        let corner: Position = Position::new(0, 0);
        assert_eq!(grid.neighbour(corner, Direction::Left), None);
        assert_eq!(grid.neighbour(corner, Direction::Down), None);
        assert_eq!(
            grid.neighbour(corner, Direction::Right),
            Some(Position::new(1, 0))
        );
        assert_eq!(
            grid.neighbour(corner, Direction::Up),
            Some(Position::new(0, 1))
        );
        assert_eq!(grid.neighbour(Position::new(2, 1), Direction::Right), None);
        assert_eq!(grid.neighbour(Position::new(2, 1), Direction::Up), None);
    }

    #[test]
    fn iteration_order() {
        let grid: Grid = Grid::new(2, 2);
        let positions: Vec<Position> = grid.iter().map(|(p, _)| p).collect();
        assert_eq!(
            positions,
            vec![
                Position::new(0, 0),
                Position::new(1, 0),
                Position::new(0, 1),
                Position::new(1, 1)
            ]
        );
    }

    #[test]
    fn passages_and_open_neighbours() {
        let grid: Grid = small_grid();
        assert_eq!(grid.passage_count(), 2);
        assert_eq!(
            grid.open_neighbours(Position::new(1, 0)),
            vec![Position::new(0, 0), Position::new(1, 1)]
        );
        assert!(grid.open_neighbours(Position::new(0, 1)).is_empty());
    }

    #[test]
    fn edge_openings() {
        let mut grid: Grid = small_grid();
        grid.get_mut(Position::new(0, 1))
            .unwrap()
            .remove(Direction::Left);
        grid.get_mut(Position::new(1, 0))
            .unwrap()
            .remove(Direction::Right);

        assert_eq!(grid.entrances(), vec![Position::new(0, 1)]);
        assert_eq!(grid.exits(), vec![Position::new(1, 0)]);

        // Edge openings are not passages
        assert_eq!(grid.passage_count(), 2);
        assert_eq!(
            grid.open_neighbours(Position::new(1, 0)),
            vec![Position::new(0, 0), Position::new(1, 1)]
        );
    }

    #[test]
    fn text_picture() {
        let mut grid: Grid = small_grid();
        grid.get_mut(Position::new(0, 1))
            .unwrap()
            .remove(Direction::Left);
        grid.get_mut(Position::new(1, 0))
            .unwrap()
            .remove(Direction::Right);

        let expected: &str = "\
+---+---+
    |   |
+---+   +
|
+---+---+
";
        assert_eq!(grid.to_text(), expected);
    }

    #[test]
    fn serde_validation() {
        let grid: Grid = small_grid();
        let json: String = serde_json::to_string(&grid).unwrap();
        assert_eq!(json, r#"{"width":2,"height":2,"cells":[13,10,15,7]}"#);
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, grid);

        assert!(
            serde_json::from_str::<Grid>(r#"{"width":2,"height":2,"cells":[13,10,15]}"#).is_err()
        );
        assert!(serde_json::from_str::<Grid>(r#"{"width":0,"height":2,"cells":[]}"#).is_err());
        assert!(
            serde_json::from_str::<Grid>(r#"{"width":1,"height":1,"cells":[128]}"#).is_err()
        );

        let mut restored: Grid = back.clone();
        restored.get_mut(Position::new(1, 1)).unwrap().insert(Direction::Down);
        assert_ne!(restored, grid);
    }
}
