use std::collections::VecDeque;

use rand::seq::IteratorRandom;
use rand::Rng;

use crate::grid::{Cell, Grid};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Food {
    pub position: Cell,
}

impl Food {
    pub fn new(position: Cell) -> Self {
        Food { position }
    }

    /// Moves the food to a random cell not in `excluded`.
    ///
    /// Random draws are tried first since the board is normally sparse. Once
    /// those run out the free cells are scanned and one is picked uniformly,
    /// so a crowded board still terminates. Returns `false`, leaving the food
    /// where it was, when every cell is excluded.
    pub fn relocate(&mut self, grid: Grid, excluded: &VecDeque<Cell>, rng: &mut impl Rng) -> bool {
        for _ in 0..grid.cell_count() {
            let pos = Cell {
                x: rng.gen_range(0..grid.width),
                y: rng.gen_range(0..grid.height),
            };

            if !excluded.contains(&pos) {
                self.position = pos;
                return true;
            }
        }

        match grid.cells().filter(|cell| !excluded.contains(cell)).choose(rng) {
            Some(pos) => {
                self.position = pos;
                true
            }
            None => false,
        }
    }
}
