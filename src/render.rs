//! Text output of mazes and solver runs

use std::thread;
use std::time::Duration;

use itertools::Itertools;

use crate::grid::{Grid, Position};
use crate::observer::Event;

const PATH_MARK: &str = "()";

/// Draw the grid as ASCII art, marking the cells of `path`.
///
/// Every cell is two characters wide, with `+` at the corners.
///
/// # Examples
/// ```
/// use maze_carver::{grid::Grid, render::render};
///
/// let grid = Grid::new(2, 1).unwrap();
/// assert_eq!(render(&grid, &[]), "+--+--+\n|  |  |\n+--+--+");
/// ```
pub fn render(grid: &Grid, path: &[Position]) -> String {
    let columns = 0..grid.num_columns();
    let last_row = grid.num_rows() - 1;
    let mut lines = Vec::with_capacity(2 * grid.num_rows() + 1);

    for row in 0..grid.num_rows() {
        lines.push(horizontal(grid, row, |p| grid.cell(p).has_top_wall));

        let mut body: String = columns
            .clone()
            .map(|column| {
                let p = Position::new(column, row);
                let side = if grid.cell(p).has_left_wall { "|" } else { " " };
                let inside = if path.contains(&p) { PATH_MARK } else { "  " };
                format!("{}{}", side, inside)
            })
            .collect();
        let end = Position::new(grid.num_columns() - 1, row);
        body.push(if grid.cell(end).has_right_wall { '|' } else { ' ' });
        lines.push(body);
    }
    lines.push(horizontal(grid, last_row, |p| grid.cell(p).has_bottom_wall));
    lines.iter().join("\n")
}

fn horizontal(grid: &Grid, row: usize, has_wall: impl Fn(Position) -> bool) -> String {
    let edges = (0..grid.num_columns())
        .map(|column| {
            if has_wall(Position::new(column, row)) {
                "--"
            } else {
                "  "
            }
        })
        .join("+");
    format!("+{}+", edges)
}

/// Solver path after each move or retreat in `events`
pub fn path_frames<'a>(events: impl IntoIterator<Item = &'a Event>) -> Vec<Vec<Position>> {
    let mut path: Vec<Position> = Vec::new();
    let mut frames = Vec::new();
    for event in events {
        match *event {
            Event::Moved { from, to } => {
                if path.is_empty() {
                    path.push(from);
                }
                path.push(to);
            }
            Event::Retreated { .. } => {
                path.pop();
            }
            Event::CellDrawn(_) | Event::Entered(_) | Event::Exited(_) => continue,
        }
        frames.push(path.clone());
    }
    frames
}

/// Replay the solver on the terminal
///
/// ## Arguments
/// - `grid`: The carved maze.
/// - `events`: Events recorded while solving.
/// - `step_ms`: Time step for each frame, milliseconds.
pub fn playback<'a>(grid: &Grid, events: impl IntoIterator<Item = &'a Event>, step_ms: u64) {
    fn print_frame(grid: &Grid, path: &[Position]) {
        print!("\x1B[2J\x1B[1;1H");
        println!("{}", render(grid, path));
    }

    let start = [grid.entrance()];
    print_frame(grid, &start);
    for path in path_frames(events) {
        thread::sleep(Duration::from_millis(step_ms));
        print_frame(grid, if path.is_empty() { &start } else { &path });
    }
}
