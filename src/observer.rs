//! Hooks for watching the maze being carved and solved
//!
//! The algorithms report what they do through [Observer]; none of the
//! callbacks can influence the result.

use crate::grid::{Cell, Position};

/// Receiver of drawing events
///
/// All methods default to doing nothing.
pub trait Observer {
    /// Cell walls changed, or the cell is shown for the first time
    fn cell_drawn(&mut self, _position: Position, _cell: &Cell) {}

    /// Solver stepped from `from` into `to`
    fn moved(&mut self, _from: Position, _to: Position) {}

    /// Solver gave up on `to` and is back in `from`
    fn retreated(&mut self, _from: Position, _to: Position) {}

    /// Solver is about to examine another cell
    fn step(&mut self) {}

    /// Solver walks in through the open top wall of `position`
    fn entered(&mut self, _position: Position) {}

    /// Solver reached `position` and leaves through its open bottom wall
    fn exited(&mut self, _position: Position) {}
}

/// Observer that ignores everything
#[derive(Default, Clone, Copy, Debug)]
pub struct NoopObserver;

impl Observer for NoopObserver {}

impl<O: Observer + ?Sized> Observer for &mut O {
    fn cell_drawn(&mut self, position: Position, cell: &Cell) {
        (**self).cell_drawn(position, cell)
    }

    fn moved(&mut self, from: Position, to: Position) {
        (**self).moved(from, to)
    }

    fn retreated(&mut self, from: Position, to: Position) {
        (**self).retreated(from, to)
    }

    fn step(&mut self) {
        (**self).step()
    }

    fn entered(&mut self, position: Position) {
        (**self).entered(position)
    }

    fn exited(&mut self, position: Position) {
        (**self).exited(position)
    }
}

/// Something an [Observer] was told
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum Event {
    CellDrawn(Position),
    Moved { from: Position, to: Position },
    Retreated { from: Position, to: Position },
    Entered(Position),
    Exited(Position),
}

/// Observer keeping every event in order, for playback
#[derive(Default, Clone, Debug)]
pub struct Recorder {
    pub events: Vec<Event>,
    /// Number of solver steps seen
    pub steps: usize,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Solver entry, moves, retreats and exit, without cell drawing
    pub fn solver_events(&self) -> impl Iterator<Item = &Event> {
        self.events
            .iter()
            .filter(|e| !matches!(e, Event::CellDrawn(_)))
    }
}

impl Observer for Recorder {
    fn cell_drawn(&mut self, position: Position, _cell: &Cell) {
        self.events.push(Event::CellDrawn(position));
    }

    fn moved(&mut self, from: Position, to: Position) {
        self.events.push(Event::Moved { from, to });
    }

    fn retreated(&mut self, from: Position, to: Position) {
        self.events.push(Event::Retreated { from, to });
    }

    fn step(&mut self) {
        self.steps += 1;
    }

    fn entered(&mut self, position: Position) {
        self.events.push(Event::Entered(position));
    }

    fn exited(&mut self, position: Position) {
        self.events.push(Event::Exited(position));
    }
}
