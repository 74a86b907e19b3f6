/*
lib.rs

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

//! Random perfect maze generator.
//!
//! ```
//! use mazegen::generator::maze;
//!
//! let grid = maze::generate_seeded(8, 5, 1234).unwrap();
//! assert_eq!(grid.passage_count(), 8 * 5 - 1);
//! println!("{}", grid.to_text());
//! ```

pub mod cli_options;
pub mod generator;
pub mod saver;
