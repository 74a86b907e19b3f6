/*
cli_options.rs

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

//! Process command-line options.
//!
//! # Examples
//!
//! Generate a 6x4 maze:
//!
//! ```text
//! $ mazegen -W 6 -H 4 -s 7
//! # Maze 6x4, seed 7, generated Fri Oct 16 10:12:54 2026
//! +---+---+---+---+---+---+
//! |               |       |
//! +   +---+---+   +   +   +
//! ...
//! ```
//!
//! Generate a maze and save it for the tool that builds the maze geometry:
//!
//! ```text
//! $ mazegen -W 20 -H 20 -o maze.json
//! ```
//!
//! Print a saved maze:
//!
//! ```text
//! $ mazegen -l maze.json
//! ```

use clap::{Parser, ValueEnum};
use log::debug;
use std::env;
use std::error::Error;
use std::path::PathBuf;

use crate::generator::grid::Grid;
use crate::generator::maze::{self, MazeError};
use crate::generator::position::Position;
use crate::saver::maze::{SavedMaze, SaverMaze};

/// Default number of columns.
const DEFAULT_WIDTH: usize = 5;

/// Default number of rows.
const DEFAULT_HEIGHT: usize = 5;

/// Output format.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Text picture of the maze
    Text,

    /// JSON document
    Json,
}

/// Generate random perfect mazes.
#[derive(Parser, Debug)]
#[command(about, long_about = None, version)]
struct Args {
    /// Number of columns
    #[arg(short = 'W', long, default_value_t = DEFAULT_WIDTH)]
    width: usize,

    /// Number of rows
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    height: usize,

    /// Random seed. With several mazes, the seed is incremented for each maze
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of mazes to generate
    #[arg(short, long, default_value_t = 1)]
    count: usize,

    /// Output format
    #[arg(value_enum, short, long, default_value_t = Format::Text)]
    format: Format,

    /// Save the last generated maze in the given JSON file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print a saved maze instead of generating one
    #[arg(short, long, conflicts_with_all = ["seed", "count", "output"])]
    load: Option<PathBuf>,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Parse and process command-line options. Return the process exit code.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    match run(&args) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {e}");
            1
        }
    }
}

/// Generate, print, and save the mazes, or print a saved maze.
fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    //
    // Print a saved maze
    //
    if let Some(path) = &args.load {
        return match SaverMaze::new(path).get_maze()? {
            Some(saved) => print_maze(&saved, args.format),
            None => Err(format!("{}: no such file", path.display()).into()),
        };
    }

    //
    // Generate the mazes
    //
    let mut last: Option<SavedMaze> = None;
    for i in 0..args.count {
        let seed: Option<u64> = args.seed.map(|s| s.wrapping_add(i as u64));
        debug!("Maze {i}");

        let grid: Grid = generate(args.width, args.height, seed)?;
        let saved: SavedMaze = SavedMaze::new(grid, seed);
        print_maze(&saved, args.format)?;
        last = Some(saved);
    }

    if let (Some(path), Some(saved)) = (&args.output, &last) {
        SaverMaze::new(path).save_maze(saved)?;
        debug!("Maze saved in {}", path.display());
    }
    Ok(())
}

/// Generate a maze, with the given seed if any.
fn generate(width: usize, height: usize, seed: Option<u64>) -> Result<Grid, MazeError> {
    match seed {
        Some(s) => maze::generate_seeded(width, height, s),
        None => maze::generate(width, height),
    }
}

/// Print a maze in the requested format.
fn print_maze(saved: &SavedMaze, format: Format) -> Result<(), Box<dyn Error>> {
    match format {
        Format::Json => println!("{}", serde_json::to_string_pretty(saved)?),
        Format::Text => print!("{}", describe(saved)),
    }
    Ok(())
}

/// Return the text description of a maze: a header, the picture, and the openings.
fn describe(saved: &SavedMaze) -> String {
    let grid: &Grid = &saved.grid;
    let mut s: String = format!("# Maze {}x{}", grid.width(), grid.height());
    if let Some(seed) = saved.seed {
        s.push_str(&format!(", seed {seed}"));
    }
    s.push_str(&format!(", generated {}\n", saved.generated_at()));
    s.push_str(&grid.to_text());
    s.push_str(&format!("Entrance: {}\n", positions(&grid.entrances())));
    s.push_str(&format!("Exit: {}\n", positions(&grid.exits())));
    s
}

fn positions(list: &[Position]) -> String {
    list.iter()
        .map(|p| p.to_string())
        .collect::<Vec<String>>()
        .join(" ")
}
