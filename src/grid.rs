//! Rectangular grid of walled cells

use std::fmt;
use std::mem;

use itertools::iproduct;

use crate::MazeError;

/// Location of a cell in the grid, zero-based
#[derive(PartialEq, Eq, Hash, PartialOrd, Ord, Clone, Copy, Debug)]
pub struct Position {
    pub column: usize,
    pub row: usize,
}

impl Position {
    pub const fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.column, self.row)
    }
}

/// Step from one cell to an adjacent one
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Every direction, in the order both algorithms consider them
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    pub fn opposite(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }
}

/// Single square of the maze
///
/// A fresh cell is fully enclosed and unvisited.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Cell {
    pub has_top_wall: bool,
    pub has_bottom_wall: bool,
    pub has_left_wall: bool,
    pub has_right_wall: bool,
    /// Scratch flag of whichever algorithm currently owns the grid
    pub visited: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            has_top_wall: true,
            has_bottom_wall: true,
            has_left_wall: true,
            has_right_wall: true,
            visited: false,
        }
    }
}

impl Cell {
    pub fn has_wall(&self, direction: Direction) -> bool {
        match direction {
            Direction::Left => self.has_left_wall,
            Direction::Right => self.has_right_wall,
            Direction::Up => self.has_top_wall,
            Direction::Down => self.has_bottom_wall,
        }
    }

    fn clear_wall(&mut self, direction: Direction) {
        match direction {
            Direction::Left => self.has_left_wall = false,
            Direction::Right => self.has_right_wall = false,
            Direction::Up => self.has_top_wall = false,
            Direction::Down => self.has_bottom_wall = false,
        }
    }
}

/// Cells addressed by (column, row)
///
/// The extent is fixed at construction. Walls between neighbours are only
/// ever removed in pairs, so both cells always agree on whether a passage
/// exists.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Grid {
    num_columns: usize,
    num_rows: usize,
    /// Row-major storage
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a fully walled grid.
    ///
    /// Returns error, if either dimension is zero or the cells would take
    /// more than `isize::MAX` bytes. A grid within that bound which the
    /// allocator still cannot provide aborts the process.
    pub fn new(num_columns: usize, num_rows: usize) -> Result<Self, MazeError> {
        let len = num_columns
            .checked_mul(num_rows)
            .filter(|&len| len > 0)
            .filter(|&len| {
                len.checked_mul(mem::size_of::<Cell>())
                    .is_some_and(|bytes| bytes <= isize::MAX as usize)
            })
            .ok_or(MazeError::InvalidDimensions {
                columns: num_columns,
                rows: num_rows,
            })?;
        Ok(Self {
            num_columns,
            num_rows,
            cells: vec![Cell::default(); len],
        })
    }

    pub fn num_columns(&self) -> usize {
        self.num_columns
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Start cell, entered through its top wall
    pub fn entrance(&self) -> Position {
        Position::new(0, 0)
    }

    /// Goal cell, left through its bottom wall
    pub fn exit(&self) -> Position {
        Position::new(self.num_columns - 1, self.num_rows - 1)
    }

    /// All positions, column by column
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        iproduct!(0..self.num_columns, 0..self.num_rows)
            .map(|(column, row)| Position::new(column, row))
    }

    #[inline]
    fn index_of(&self, position: Position) -> usize {
        debug_assert!(self.contains(position), "{} out of bounds", position);
        position.row * self.num_columns + position.column
    }

    pub fn contains(&self, position: Position) -> bool {
        position.column < self.num_columns && position.row < self.num_rows
    }

    /// Borrow cell at `position`.
    ///
    /// Panics if the position is outside the grid.
    #[inline]
    pub fn cell(&self, position: Position) -> &Cell {
        &self.cells[self.index_of(position)]
    }

    #[inline]
    fn cell_mut(&mut self, position: Position) -> &mut Cell {
        let index = self.index_of(position);
        &mut self.cells[index]
    }

    /// Adjacent position in `direction`, if it is inside the grid
    pub fn neighbor(&self, position: Position, direction: Direction) -> Option<Position> {
        let Position { column, row } = position;
        let next = match direction {
            Direction::Left => Position::new(column.checked_sub(1)?, row),
            Direction::Right => Position::new(column + 1, row),
            Direction::Up => Position::new(column, row.checked_sub(1)?),
            Direction::Down => Position::new(column, row + 1),
        };
        self.contains(next).then_some(next)
    }

    /// Whether one can walk from `position` to its neighbour in `direction`
    pub fn is_open(&self, position: Position, direction: Direction) -> bool {
        match self.neighbor(position, direction) {
            Some(next) => {
                !self.cell(position).has_wall(direction)
                    && !self.cell(next).has_wall(direction.opposite())
            }
            None => false,
        }
    }

    /// Remove the pair of walls between two adjacent cells.
    ///
    /// Panics if the cells are not adjacent.
    pub fn break_wall_between(&mut self, a: Position, b: Position) {
        let direction = Direction::ALL
            .into_iter()
            .find(|&d| self.neighbor(a, d) == Some(b))
            .unwrap_or_else(|| panic!("cells {} and {} are not adjacent", a, b));
        self.cell_mut(a).clear_wall(direction);
        self.cell_mut(b).clear_wall(direction.opposite());
    }

    /// Remove a wall on the outer edge of the grid.
    ///
    /// Panics if `direction` points to another cell rather than outside.
    pub fn open_boundary(&mut self, position: Position, direction: Direction) {
        assert!(
            self.neighbor(position, direction).is_none(),
            "{:?} of {} is an interior wall",
            direction,
            position
        );
        self.cell_mut(position).clear_wall(direction);
    }

    pub fn mark_visited(&mut self, position: Position) {
        self.cell_mut(position).visited = true;
    }

    pub fn is_visited(&self, position: Position) -> bool {
        self.cell(position).visited
    }

    /// Clear every visitation flag.
    ///
    /// Generation and solving both use the flag; this is the boundary
    /// between the two phases.
    pub fn reset_visited(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.visited = false;
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", crate::render::render(self, &[]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_fully_walled() {
        let grid = Grid::new(3, 2).unwrap();
        assert_eq!(grid.num_columns(), 3);
        assert_eq!(grid.num_rows(), 2);
        assert_eq!(grid.positions().count(), 6);
        for pos in grid.positions() {
            assert_eq!(grid.cell(pos), &Cell::default());
            for d in Direction::ALL {
                assert!(grid.cell(pos).has_wall(d));
                assert!(!grid.is_open(pos, d));
            }
        }
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        assert!(matches!(
            Grid::new(0, 4),
            Err(MazeError::InvalidDimensions {
                columns: 0,
                rows: 4
            })
        ));
        assert!(Grid::new(4, 0).is_err());
        assert!(Grid::new(usize::MAX, 2).is_err());
    }

    #[test]
    fn oversized_grid_is_rejected_before_allocating() {
        assert!(matches!(
            Grid::new(usize::MAX / 2, 1),
            Err(MazeError::InvalidDimensions { rows: 1, .. })
        ));
        assert!(Grid::new(1, isize::MAX as usize).is_err());
    }

    #[test]
    fn positions_are_column_major() {
        let grid = Grid::new(2, 2).unwrap();
        let positions: Vec<_> = grid.positions().collect();
        assert_eq!(
            positions,
            vec![
                Position::new(0, 0),
                Position::new(0, 1),
                Position::new(1, 0),
                Position::new(1, 1)
            ]
        );
    }

    #[test]
    fn neighbors_stay_in_bounds() {
        let grid = Grid::new(3, 2).unwrap();
        let corner = Position::new(0, 0);
        assert_eq!(grid.neighbor(corner, Direction::Left), None);
        assert_eq!(grid.neighbor(corner, Direction::Up), None);
        assert_eq!(
            grid.neighbor(corner, Direction::Right),
            Some(Position::new(1, 0))
        );
        assert_eq!(
            grid.neighbor(corner, Direction::Down),
            Some(Position::new(0, 1))
        );
        let far = Position::new(2, 1);
        assert_eq!(grid.neighbor(far, Direction::Right), None);
        assert_eq!(grid.neighbor(far, Direction::Down), None);
        assert_eq!(grid.exit(), far);
    }

    #[test]
    fn walls_break_in_pairs() {
        let mut grid = Grid::new(2, 2).unwrap();
        let a = Position::new(0, 1);
        let b = Position::new(1, 1);
        grid.break_wall_between(b, a);
        assert!(!grid.cell(a).has_right_wall);
        assert!(!grid.cell(b).has_left_wall);
        assert!(grid.is_open(a, Direction::Right));
        assert!(grid.is_open(b, Direction::Left));

        let c = Position::new(0, 0);
        grid.break_wall_between(c, a);
        assert!(!grid.cell(c).has_bottom_wall);
        assert!(!grid.cell(a).has_top_wall);
        assert!(grid.cell(a).has_bottom_wall);
    }

    #[test]
    #[should_panic(expected = "not adjacent")]
    fn breaking_wall_between_distant_cells_panics() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.break_wall_between(Position::new(0, 0), Position::new(2, 0));
    }

    #[test]
    fn boundary_opening_does_not_count_as_passage() {
        let mut grid = Grid::new(1, 1).unwrap();
        grid.open_boundary(grid.entrance(), Direction::Up);
        assert!(!grid.cell(grid.entrance()).has_top_wall);
        assert!(!grid.is_open(grid.entrance(), Direction::Up));
    }

    #[test]
    fn visitation_resets() {
        let mut grid = Grid::new(2, 3).unwrap();
        grid.mark_visited(Position::new(1, 2));
        assert!(grid.is_visited(Position::new(1, 2)));
        grid.reset_visited();
        assert!(grid.positions().all(|p| !grid.is_visited(p)));
    }
}
