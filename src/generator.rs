/*
generator.rs

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

//! Generate random mazes.
//!
//! A maze is a [`grid::Grid`] of cells.
//! Each cell stores the walls that surround it as a [`walls::WallBits`] value, and the
//! [`walls::Direction`] enumeration names the four sides of a cell.
//!
//! To get a maze, use one of the functions of the [`maze`] module:
//!
//! * [`maze::generate`] uses fresh entropy for every call.
//! * [`maze::generate_seeded`] always returns the same maze for a given seed.
//! * [`maze::generate_with_rng`] uses the random number generator provided by the caller.
//!
//! The returned grid is a perfect maze: there is exactly one path between any two cells.
//! The left wall of one cell in the first column and the right wall of one cell in the last
//! column are removed. Use [`grid::Grid::entrances`] and [`grid::Grid::exits`] to retrieve
//! these cells.

pub mod grid;
pub mod maze;
pub mod position;
pub mod walls;
