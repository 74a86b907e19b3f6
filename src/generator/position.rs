/*
position.rs

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

//! Cell coordinates in the maze grid.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::walls::Direction;

/// Coordinates of a cell.
///
/// `x` is the column, starting from the left. `y` is the row, starting from the bottom.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    /// Create a [`Position`] object.
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Adjacent cell and the wall it shares with the current cell.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Neighbour {
    /// Position of the adjacent cell.
    pub position: Position,

    /// Shared wall, as seen from the current cell.
    pub shared_wall: Direction,
}
