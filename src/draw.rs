//! Screen geometry for hosts that paint the maze

use std::thread;
use std::time::Duration;

use crate::grid::{Cell, Position};
use crate::observer::Observer;

#[derive(PartialEq, Clone, Copy, Debug, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis aligned rectangle, `(x1, y1)` top left and `(x2, y2)` bottom right
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct Rect {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Rect {
    pub fn center(&self) -> Point {
        Point::new((self.x1 + self.x2) / 2.0, (self.y1 + self.y2) / 2.0)
    }
}

/// Placement of the grid on screen
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct Layout {
    pub origin: Point,
    pub cell_width: f64,
    pub cell_height: f64,
}

impl Layout {
    /// Screen rectangle covered by the cell at `position`
    pub fn rect(&self, position: Position) -> Rect {
        let x1 = self.origin.x + position.column as f64 * self.cell_width;
        let y1 = self.origin.y + position.row as f64 * self.cell_height;
        Rect {
            x1,
            y1,
            x2: x1 + self.cell_width,
            y2: y1 + self.cell_height,
        }
    }
}

/// Pauses between drawn frames
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct FrameTiming {
    /// After a cell is painted
    pub cell: Duration,
    /// After each solver step
    pub step: Duration,
}

impl Default for FrameTiming {
    fn default() -> Self {
        Self {
            cell: Duration::ZERO,
            step: Duration::from_millis(10),
        }
    }
}

impl FrameTiming {
    /// No pauses at all
    pub const INSTANT: FrameTiming = FrameTiming {
        cell: Duration::ZERO,
        step: Duration::ZERO,
    };
}

/// Painting surface
pub trait DrawSink {
    /// Paint the walls of `cell` inside `rect`
    fn draw_cell(&mut self, cell: &Cell, rect: Rect);

    /// Paint a line between the centers of two cells, or erase it when
    /// `retreating`
    fn draw_move(&mut self, from: Rect, to: Rect, retreating: bool);

    /// Paint a marker line, used for the way in and the way out
    fn draw_line(&mut self, from: Point, to: Point);

    /// Push painted content to the screen
    fn refresh(&mut self) {}
}

/// Paints observed events on a [DrawSink], pacing them by [FrameTiming]
pub struct Animator<S> {
    layout: Layout,
    timing: FrameTiming,
    sink: S,
}

impl<S: DrawSink> Animator<S> {
    pub fn new(layout: Layout, timing: FrameTiming, sink: S) -> Self {
        Self {
            layout,
            timing,
            sink,
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    fn animate(&mut self, delay: Duration) {
        self.sink.refresh();
        if !delay.is_zero() {
            thread::sleep(delay);
        }
    }
}

impl<S: DrawSink> Observer for Animator<S> {
    fn cell_drawn(&mut self, position: Position, cell: &Cell) {
        self.sink.draw_cell(cell, self.layout.rect(position));
        self.animate(self.timing.cell);
    }

    fn moved(&mut self, from: Position, to: Position) {
        self.sink
            .draw_move(self.layout.rect(from), self.layout.rect(to), false);
    }

    fn retreated(&mut self, from: Position, to: Position) {
        self.sink
            .draw_move(self.layout.rect(from), self.layout.rect(to), true);
    }

    fn step(&mut self) {
        self.animate(self.timing.step);
    }

    fn entered(&mut self, position: Position) {
        let rect = self.layout.rect(position);
        let center = rect.center();
        self.sink.draw_line(Point::new(center.x, rect.y1), center);
    }

    fn exited(&mut self, position: Position) {
        let rect = self.layout.rect(position);
        let center = rect.center();
        self.sink.draw_line(center, Point::new(center.x, rect.y2));
    }
}
