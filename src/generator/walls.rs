/*
walls.rs

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

//! Walls of a maze cell.
//!
//! Each cell stores the walls that are present around it as a bit mask:
//!
//! | Wall    | Bit |
//! |---------|-----|
//! | `LEFT`  | 1   |
//! | `RIGHT` | 2   |
//! | `UP`    | 4   |
//! | `DOWN`  | 8   |
//!
//! Only these four bits can be set in a [`WallBits`] value.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use strum_macros::FromRepr;

/// Mask of the four wall bits.
const WALL_MASK: u8 = 0x0f;

/// Side of a cell.
///
/// The discriminant is the wall bit for that side.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, FromRepr)]
#[repr(u8)]
pub enum Direction {
    /// Toward `x - 1`.
    Left = 1,

    /// Toward `x + 1`.
    Right = 2,

    /// Toward `y + 1`.
    Up = 4,

    /// Toward `y - 1`.
    Down = 8,
}

impl Direction {
    /// The four directions, in wall bit order.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Return the wall on the other side of the shared wall.
    pub fn opposite(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Return the wall bit.
    pub fn bit(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Direction::Left => write!(f, "left"),
            Direction::Right => write!(f, "right"),
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
        }
    }
}

/// Error returned when a raw value holds bits other than the four walls.
#[derive(Debug, PartialEq)]
pub struct WallBitsError(pub u8);

impl fmt::Display for WallBitsError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "invalid wall bits {:#04x} (only {WALL_MASK:#04x} is allowed)",
            self.0
        )
    }
}

impl Error for WallBitsError {}

/// Walls present around a cell.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[serde(try_from = "u8", into = "u8")]
pub struct WallBits(u8);

impl WallBits {
    /// No wall.
    pub const NONE: WallBits = WallBits(0);

    /// The four walls.
    pub const ALL: WallBits = WallBits(WALL_MASK);

    /// Whether the wall is present.
    pub fn has_wall(self, direction: Direction) -> bool {
        self.0 & direction.bit() != 0
    }

    /// Iterate over the walls that are present, in wall bit order.
    pub fn walls(self) -> impl Iterator<Item = Direction> {
        (0u8..4)
            .filter_map(|i| Direction::from_repr(1u8 << i))
            .filter(move |d| self.has_wall(*d))
    }

    /// Number of walls present.
    pub fn count(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Raw bit mask.
    pub fn bits(self) -> u8 {
        self.0
    }

    /// Remove a wall.
    pub(crate) fn remove(&mut self, direction: Direction) {
        self.0 &= !direction.bit();
    }

    /// Add a wall.
    #[cfg(test)]
    pub(crate) fn insert(&mut self, direction: Direction) {
        self.0 |= direction.bit();
    }
}

impl TryFrom<u8> for WallBits {
    type Error = WallBitsError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value & !WALL_MASK != 0 {
            return Err(WallBitsError(value));
        }
        Ok(WallBits(value))
    }
}

impl From<WallBits> for u8 {
    fn from(walls: WallBits) -> u8 {
        walls.0
    }
}
