//! Carve a perfect maze and find the way through it
//!
//! A [Maze] is a rectangular [Grid](grid::Grid) of walled cells. On
//! construction, the top wall of the top left cell (entrance) and the bottom
//! wall of the bottom right cell (exit) are removed, and passages are carved
//! with a randomized depth-first search. The result has exactly one route
//! between any two cells. [Maze::solve] then walks from the entrance to the
//! exit with a backtracking depth-first search.
//!
//! # Examples
//! ## Reproducible maze
//! ```
//! use maze_carver::{Maze, MazeConfig};
//!
//! let config = MazeConfig {
//!     num_columns: 8,
//!     num_rows: 5,
//!     seed: Some(13),
//!     ..Default::default()
//! };
//! let mut maze = Maze::new(&config).unwrap();
//! assert_eq!(maze.grid(), Maze::new(&config).unwrap().grid());
//!
//! assert!(maze.solve());
//! println!("{}", maze.render_solution());
//! ```
//!
//! ## Watching the solver
//! ```
//! use maze_carver::observer::{Event, Recorder};
//! use maze_carver::{Maze, MazeConfig};
//!
//! let config = MazeConfig {
//!     seed: Some(1),
//!     ..Default::default()
//! };
//! let mut maze = Maze::with_observer(&config, Recorder::new()).unwrap();
//! assert!(maze.solve());
//!
//! let moves = maze
//!     .observer()
//!     .solver_events()
//!     .filter(|e| matches!(e, Event::Moved { .. }))
//!     .count();
//! assert!(moves >= maze.path().len() - 1);
//! ```

pub mod draw;
pub mod grid;
pub mod maze_generator;
pub mod observer;
pub mod render;
pub mod solver;

use thiserror::Error;

use draw::{Animator, DrawSink, FrameTiming, Layout, Point};
use grid::{Grid, Position};
use maze_generator::MazeGenerator;
use observer::{NoopObserver, Observer};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MazeError {
    #[error("invalid maze dimensions: {columns} columns x {rows} rows, both must be at least 1")]
    InvalidDimensions { columns: usize, rows: usize },
}

/// Parameters of a new maze
#[derive(PartialEq, Clone, Debug)]
pub struct MazeConfig {
    /// Screen position of the top left corner
    pub origin: Point,
    pub num_rows: usize,
    pub num_columns: usize,
    pub cell_width: f64,
    pub cell_height: f64,
    /// Random seed; a fixed seed reproduces the same maze
    pub seed: Option<u64>,
    /// Animation pauses, only used when drawing
    pub timing: FrameTiming,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            origin: Point::new(0.0, 0.0),
            num_rows: 10,
            num_columns: 10,
            cell_width: 20.0,
            cell_height: 20.0,
            seed: None,
            timing: FrameTiming::default(),
        }
    }
}

impl MazeConfig {
    pub fn layout(&self) -> Layout {
        Layout {
            origin: self.origin,
            cell_width: self.cell_width,
            cell_height: self.cell_height,
        }
    }
}

/// Carved maze and the state of its latest solving
pub struct Maze<O = NoopObserver> {
    grid: Grid,
    observer: O,
    /// Route found by the latest successful [Maze::solve]
    path: Vec<Position>,
}

impl Maze {
    /// Carve a maze without drawing anything.
    ///
    /// Returns error, if either dimension is zero.
    pub fn new(config: &MazeConfig) -> Result<Self, MazeError> {
        Self::with_observer(config, NoopObserver)
    }
}

impl<S: DrawSink> Maze<Animator<S>> {
    /// Carve a maze, painting it on `sink` as it is built
    pub fn with_sink(config: &MazeConfig, sink: S) -> Result<Self, MazeError> {
        Self::with_observer(config, Animator::new(config.layout(), config.timing, sink))
    }
}

impl<O: Observer> Maze<O> {
    /// Carve a maze, reporting every drawing step to `observer`.
    ///
    /// All cells are drawn once while still fully walled, then the maze is
    /// generated.
    pub fn with_observer(config: &MazeConfig, mut observer: O) -> Result<Self, MazeError> {
        let mut grid = Grid::new(config.num_columns, config.num_rows)?;
        for position in grid.positions() {
            observer.cell_drawn(position, grid.cell(position));
        }
        MazeGenerator::new(config.seed).generate(&mut grid, &mut observer);
        Ok(Self {
            grid,
            observer,
            path: Vec::new(),
        })
    }

    /// Search the way from the entrance to the exit.
    ///
    /// Returns `true` if the exit was reached; the route is then available
    /// from [Maze::path]. Cells explored stay marked visited, so solving
    /// again without [Maze::reset_visited] only succeeds on a single cell
    /// maze.
    pub fn solve(&mut self) -> bool {
        match solver::solve(&mut self.grid, &mut self.observer) {
            Some(path) => {
                self.path = path;
                true
            }
            None => {
                self.path.clear();
                false
            }
        }
    }

    /// Clear visitation left by a previous [Maze::solve]
    pub fn reset_visited(&mut self) {
        self.grid.reset_visited();
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Cells from entrance to exit, empty unless solved
    pub fn path(&self) -> &[Position] {
        &self.path
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn into_observer(self) -> O {
        self.observer
    }

    /// ASCII drawing of the maze with the found route
    pub fn render_solution(&self) -> String {
        render::render(&self.grid, &self.path)
    }
}

#[cfg(test)]
mod tests {
    use crate::draw::{DrawSink, FrameTiming, Point, Rect};
    use crate::grid::{Cell, Direction, Position};
    use crate::observer::{Event, Recorder};
    use crate::{Maze, MazeConfig, MazeError};

    fn config(num_columns: usize, num_rows: usize, seed: u64) -> MazeConfig {
        MazeConfig {
            num_columns,
            num_rows,
            seed: Some(seed),
            timing: FrameTiming::INSTANT,
            ..Default::default()
        }
    }

    #[test]
    fn invalid_dimensions_fail() {
        assert_eq!(
            Maze::new(&config(0, 3, 0)).err(),
            Some(MazeError::InvalidDimensions {
                columns: 0,
                rows: 3
            })
        );
        assert!(Maze::new(&config(3, 0, 0)).is_err());
    }

    #[test]
    fn solves_and_reports_path() {
        let mut maze = Maze::new(&config(15, 11, 4)).unwrap();
        assert!(maze.path().is_empty());
        assert!(maze.solve());
        assert_eq!(maze.path().first(), Some(&Position::new(0, 0)));
        assert_eq!(maze.path().last(), Some(&Position::new(14, 10)));
        assert!(maze.render_solution().contains("()"));
    }

    #[test]
    fn second_solve_fails_until_reset() {
        let mut maze = Maze::new(&config(4, 4, 8)).unwrap();
        assert!(maze.solve());
        assert!(!maze.solve());
        assert!(maze.path().is_empty());
        maze.reset_visited();
        assert!(maze.solve());
    }

    #[test]
    fn single_cell_maze() {
        let mut maze = Maze::with_observer(&config(1, 1, 0), Recorder::new()).unwrap();
        let cell = maze.grid().cell(Position::new(0, 0)).clone();
        assert!(!cell.has_top_wall && !cell.has_bottom_wall);
        assert!(cell.has_left_wall && cell.has_right_wall);

        assert!(maze.solve());
        assert_eq!(maze.path(), &[Position::new(0, 0)]);
        assert_eq!(maze.observer().solver_events().count(), 2);
        // Solving again succeeds right away at the start cell.
        assert!(maze.solve());
    }

    #[test]
    fn every_cell_is_drawn_before_carving() {
        let maze = Maze::with_observer(&config(3, 2, 0), Recorder::new()).unwrap();
        let recorder = maze.into_observer();
        let first: Vec<_> = recorder.events.iter().take(6).cloned().collect();
        let p = Position::new;
        assert_eq!(
            first,
            [p(0, 0), p(0, 1), p(1, 0), p(1, 1), p(2, 0), p(2, 1)]
                .into_iter()
                .map(Event::CellDrawn)
                .collect::<Vec<_>>()
        );
        // Entrance and exit, then one dead end report per cell.
        assert_eq!(recorder.events.len(), 6 + 2 + 6);
    }

    #[test]
    fn observer_does_not_change_result() {
        let cfg = config(9, 7, 21);
        let mut plain = Maze::new(&cfg).unwrap();
        let mut watched = Maze::with_observer(&cfg, Recorder::new()).unwrap();
        assert_eq!(plain.grid(), watched.grid());
        assert_eq!(plain.solve(), watched.solve());
        assert_eq!(plain.path(), watched.path());
    }

    #[derive(Default)]
    struct Counter {
        cells: usize,
        forward: usize,
        back: usize,
        markers: usize,
    }

    impl DrawSink for Counter {
        fn draw_cell(&mut self, _cell: &Cell, _rect: Rect) {
            self.cells += 1;
        }

        fn draw_move(&mut self, _from: Rect, _to: Rect, retreating: bool) {
            if retreating {
                self.back += 1;
            } else {
                self.forward += 1;
            }
        }

        fn draw_line(&mut self, _from: Point, _to: Point) {
            self.markers += 1;
        }
    }

    #[test]
    fn sink_sees_cells_and_moves() {
        let mut maze = Maze::with_sink(&config(5, 5, 2), Counter::default()).unwrap();
        assert!(maze.solve());
        let path_len = maze.path().len();
        let counter = maze.into_observer().into_sink();
        assert_eq!(counter.cells, 25 + 2 + 25);
        assert_eq!(counter.forward - counter.back, path_len - 1);
        assert_eq!(counter.markers, 2);
    }

    #[test]
    fn path_follows_open_walls() {
        let mut maze = Maze::new(&config(20, 20, 99)).unwrap();
        assert!(maze.solve());
        let grid = maze.grid();
        for w in maze.path().windows(2) {
            assert!(Direction::ALL
                .into_iter()
                .any(|d| grid.neighbor(w[0], d) == Some(w[1]) && grid.is_open(w[0], d)));
        }
    }
}
