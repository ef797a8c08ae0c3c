//! Backtracking search from entrance to exit

use crate::grid::{Direction, Grid, Position};
use crate::observer::Observer;

/// Cell on the current path, with the next direction left to try
struct Frame {
    position: Position,
    next_direction: usize,
}

/// Find the way from the entrance to the exit of a carved grid.
///
/// Returns the cells of the path, entrance and exit included, or `None` if
/// the exit cannot be reached. A grid whose entrance or exit was never
/// opened has no way in or out, and yields `None` without searching.
///
/// Visitation flags must be clear when calling; they are left set for every
/// explored cell. The observer sees [Observer::entered] before the search and
/// [Observer::exited] once the exit cell is reached.
pub fn solve<O: Observer>(grid: &mut Grid, observer: &mut O) -> Option<Vec<Position>> {
    let entrance = grid.entrance();
    let exit = grid.exit();
    if grid.cell(entrance).has_top_wall || grid.cell(exit).has_bottom_wall {
        log::debug!("Entrance or exit is walled, no way through");
        return None;
    }
    observer.entered(entrance);
    let path = solve_from(grid, entrance, observer)?;
    observer.exited(exit);
    Some(path)
}

/// Depth-first search from `start` to the exit cell.
///
/// Directions are tried in the order left, right, up, down. Only moves into
/// unvisited cells through open walls are taken. The first path reaching the
/// exit wins. A branch that fails is reported through
/// [Observer::retreated]; its cells stay visited so they are never entered
/// again.
pub fn solve_from<O: Observer>(
    grid: &mut Grid,
    start: Position,
    observer: &mut O,
) -> Option<Vec<Position>> {
    let goal = grid.exit();
    let mut moves = 0;
    let mut retreats = 0;
    let mut stack: Vec<Frame> = Vec::new();
    let mut entering = Some(start);

    loop {
        if let Some(position) = entering.take() {
            observer.step();
            grid.mark_visited(position);
            stack.push(Frame {
                position,
                next_direction: 0,
            });
            if position == goal {
                log::debug!(
                    "Reached exit after {} moves and {} retreats",
                    moves,
                    retreats
                );
                return Some(stack.iter().map(|f| f.position).collect());
            }
        }

        let frame = stack.last_mut()?;
        let current = frame.position;
        let next = Direction::ALL[frame.next_direction..]
            .iter()
            .enumerate()
            .find_map(|(offset, &d)| {
                grid.neighbor(current, d)
                    .filter(|&n| !grid.cell(current).has_wall(d) && !grid.is_visited(n))
                    .map(|n| (offset, n))
            });

        match next {
            Some((offset, neighbor)) => {
                frame.next_direction += offset + 1;
                log::trace!("Moving {} -> {}", current, neighbor);
                observer.moved(current, neighbor);
                moves += 1;
                entering = Some(neighbor);
            }
            None => {
                stack.pop();
                if let Some(parent) = stack.last() {
                    log::trace!("Dead end at {}, back to {}", current, parent.position);
                    observer.retreated(parent.position, current);
                    retreats += 1;
                } else {
                    log::debug!("Exhausted search after {} moves", moves);
                }
            }
        }
    }
}
