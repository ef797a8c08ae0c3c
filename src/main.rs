//! CLI for maze solving

use anyhow::{bail, Context};
use clap::Parser;
use maze_carver::observer::Recorder;
use maze_carver::render::playback;
use maze_carver::{Maze, MazeConfig};

/// Carve a random perfect maze and find the way through it
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

    /// Display the search on the terminal
    #[arg(short, long)]
    playback: bool,

    /// Playback frame length in milliseconds
    #[arg(short, long, default_value_t = 50)]
    frame_length: u64,
}

/// Generate maze, solve it, print output
fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = MazeConfig {
        num_columns: args.columns,
        num_rows: args.rows,
        seed: args.seed,
        ..Default::default()
    };
    let mut maze = Maze::with_observer(&config, Recorder::new())
        .context("Could not create maze")?;
    let solved = maze.solve();

    if args.playback {
        playback(maze.grid(), maze.observer().solver_events(), args.frame_length);
    } else {
        println!("{}", maze.render_solution());
    }

    if !solved {
        bail!("No way from the entrance to the exit");
    }
    let recorder = maze.observer();
    println!(
        "The path is {} cells long, found after examining {} cells.",
        maze.path().len(),
        recorder.steps
    );
    Ok(())
}
