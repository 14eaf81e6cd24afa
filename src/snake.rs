use std::collections::VecDeque;

use log::trace;

use crate::grid::{Cell, Direction, Grid};

#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    // Head at the front, tail at the back
    body: VecDeque<Cell>,
    heading: Direction,
    pending_heading: Option<Direction>,
    pending_growth: u16,
    last_vacated: Option<Cell>,
    origin: Cell,
}

impl Snake {
    pub fn new(origin: Cell) -> Self {
        Snake {
            body: VecDeque::from([origin]),
            heading: Direction::Right,
            pending_heading: None,
            pending_growth: 0,
            last_vacated: None,
            origin,
        }
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn body(&self) -> &VecDeque<Cell> {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    pub fn pending_heading(&self) -> Option<Direction> {
        self.pending_heading
    }

    /// Tail cell dropped by the most recent `advance`, if any.
    pub fn last_vacated(&self) -> Option<Cell> {
        self.last_vacated
    }

    /// Buffers a turn for the next tick. Turning straight back onto the
    /// neck is ignored.
    pub fn queue_direction(&mut self, requested: Direction) {
        if requested == self.heading.opposite() {
            trace!("Ignoring reversal {:?} while heading {:?}", requested, self.heading);
            return;
        }
        self.pending_heading = Some(requested);
    }

    pub fn advance(&mut self, grid: Grid) {
        if let Some(heading) = self.pending_heading.take() {
            self.heading = heading;
        }

        let new_head = grid.wrap(self.head(), self.heading);
        self.body.push_front(new_head);

        // Remove tail unless growing. `last_vacated` is exactly the cell that
        // became empty: the old head for a one-cell snake, nothing on a
        // growth step where the tail stays put.
        if self.pending_growth > 0 {
            self.pending_growth -= 1;
            self.last_vacated = None;
        } else {
            self.last_vacated = self.body.pop_back();
        }
    }

    pub fn grow(&mut self) {
        self.pending_growth += 1;
    }

    pub fn detect_self_collision(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|&segment| segment == head)
    }

    pub fn reset(&mut self) {
        *self = Snake::new(self.origin);
    }
}
