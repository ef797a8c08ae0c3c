//! Maze generation

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::grid::{Direction, Grid, Position};
use crate::observer::Observer;

/// Carves perfect mazes with a randomized depth-first search.
pub struct MazeGenerator<R = StdRng> {
    random: R,
}

impl MazeGenerator<StdRng> {
    /// Generator seeded from `seed`, or from system entropy if none given.
    ///
    /// The same seed always carves the same maze.
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            random: if let Some(state) = seed {
                StdRng::seed_from_u64(state)
            } else {
                StdRng::from_entropy()
            },
        }
    }
}

impl<R: Rng> MazeGenerator<R> {
    pub fn from_rng(random: R) -> Self {
        Self { random }
    }

    /// Turn a fully walled grid into a perfect maze
    ///
    /// Opens the entrance and exit, carves passages starting from the
    /// entrance, and finally clears visitation so the grid is ready to be
    /// solved.
    pub fn generate<O: Observer>(&mut self, grid: &mut Grid, observer: &mut O) {
        open_entrance_and_exit(grid, observer);
        let entrance = grid.entrance();
        self.carve(grid, entrance, observer);
        grid.reset_visited();
        log::debug!("Carved {}x{} maze", grid.num_columns(), grid.num_rows());
    }

    /// Remove walls between unvisited cells reachable from `start`
    ///
    /// From the cell on top of the stack, pick a random unvisited neighbour,
    /// break the walls between the two, and continue from the neighbour.
    /// Cells without unvisited neighbours are dead ends and are popped, so
    /// the search resumes from the previous cell. The result is a spanning
    /// tree over every cell reachable from `start`.
    ///
    /// ## Arguments
    /// - `grid`: Grid to carve; cells already visited are left alone.
    /// - `start`: First cell of the walk.
    /// - `observer`: Told about every dead end cell.
    pub fn carve<O: Observer>(&mut self, grid: &mut Grid, start: Position, observer: &mut O) {
        grid.mark_visited(start);
        let mut stack = vec![start];
        let mut passages = 0;

        while let Some(&current) = stack.last() {
            let candidates: Vec<Position> = Direction::ALL
                .into_iter()
                .filter_map(|d| grid.neighbor(current, d))
                .filter(|&next| !grid.is_visited(next))
                .collect();

            if candidates.is_empty() {
                observer.cell_drawn(current, grid.cell(current));
                stack.pop();
                continue;
            }

            let next = candidates[self.random.gen_range(0..candidates.len())];
            log::trace!("Breaking wall {} -> {}", current, next);
            grid.break_wall_between(current, next);
            grid.mark_visited(next);
            stack.push(next);
            passages += 1;
        }
        log::trace!("Carved {} passages from {}", passages, start);
    }
}

/// Remove the top wall of the entrance and the bottom wall of the exit.
pub fn open_entrance_and_exit<O: Observer>(grid: &mut Grid, observer: &mut O) {
    let entrance = grid.entrance();
    grid.open_boundary(entrance, Direction::Up);
    observer.cell_drawn(entrance, grid.cell(entrance));

    let exit = grid.exit();
    grid.open_boundary(exit, Direction::Down);
    observer.cell_drawn(exit, grid.cell(exit));
}
