//! CLI for maze generation

use anyhow::Context;
use clap::Parser;
use maze_carver::{Maze, MazeConfig};

/// Perfect maze generator
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Number of cell columns
    #[arg(long, default_value_t = 16)]
    columns: usize,

    /// Number of cell rows
    #[arg(long, default_value_t = 12)]
    rows: usize,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,
}

/// Carve maze, print it
fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = MazeConfig {
        num_columns: args.columns,
        num_rows: args.rows,
        seed: args.seed,
        ..Default::default()
    };
    let maze = Maze::new(&config).context("Could not create maze")?;
    println!("{}", maze.grid());
    Ok(())
}
