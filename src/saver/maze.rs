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

//! Save and restore a generated maze.
//!
//! The saved object is a serialization of the [`SavedMaze`] object in JSON format by using
//! [`serde`].
//! The file is the hand-off format for the tools that build the maze geometry: the `grid` member
//! holds the width, the height, and the wall bits of every cell, row by row from the bottom row.
//!
//! ```json
//! {
//!   "grid": { "width": 2, "height": 1, "cells": [12, 12] },
//!   "seed": 42,
//!   "when": { "secs_since_epoch": 1760600000, "nanos_since_epoch": 0 }
//! }
//! ```

use chrono::{DateTime, Local};
use log::debug;
use std::error::Error;
use std::fs::{File, remove_file};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use serde::{Deserialize, Serialize};

use crate::generator::grid::Grid;

/// Generated maze and how it was generated.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SavedMaze {
    /// Maze.
    pub grid: Grid,

    /// Seed used to generate the maze, if any.
    pub seed: Option<u64>,

    /// Generation timestamp.
    pub when: SystemTime,
}

impl SavedMaze {
    /// Create a [`SavedMaze`] object for a maze that has just been generated.
    pub fn new(grid: Grid, seed: Option<u64>) -> Self {
        Self {
            grid,
            seed,
            when: SystemTime::now(),
        }
    }

    /// Return the generation date and time in the local time zone.
    pub fn generated_at(&self) -> String {
        let dt: DateTime<Local> = DateTime::from(self.when);
        format!("{}", dt.format("%c"))
    }
}

/// Object to save and restore a maze.
pub struct SaverMaze {
    /// Path to the save file.
    save_file: PathBuf,
}

impl SaverMaze {
    /// Create a [`SaverMaze`] object.
    ///
    /// The provided path is the JSON file where the maze is saved.
    pub fn new(save_file: &Path) -> Self {
        debug!("Maze file: {save_file:?}");
        Self {
            save_file: save_file.to_path_buf(),
        }
    }

    /// Retrieve the [`SavedMaze`] object from the maze file.
    ///
    /// Return the [`SavedMaze`] object or None if the maze file does not exist.
    pub fn get_maze(&self) -> Result<Option<SavedMaze>, Box<dyn Error>> {
        let file: File;
        match File::open(&self.save_file) {
            Ok(f) => file = f,
            Err(error) => match error.kind() {
                ErrorKind::NotFound => return Ok(None),
                _ => return Err(Box::new(error)),
            },
        }
        let reader: BufReader<File> = BufReader::new(file);
        let maze: SavedMaze = serde_json::from_reader(reader)?;
        Ok(Some(maze))
    }

    /// Save the provided [`SavedMaze`] object.
    pub fn save_maze(&self, maze: &SavedMaze) -> Result<(), Box<dyn Error>> {
        let file: File = File::create(&self.save_file)?;
        let mut writer: BufWriter<File> = BufWriter::new(file);

        serde_json::to_writer_pretty(&mut writer, maze)?;
        writer.flush()?;
        Ok(())
    }

    /// Delete the maze file.
    pub fn delete_save(&self) {
        let _ = remove_file(&self.save_file);
    }
}
