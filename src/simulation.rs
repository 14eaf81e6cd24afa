use std::io;
use std::sync::mpsc::Receiver;
use std::thread;
use std::time::{Duration, Instant};

use log::{debug, info, warn};
use rand::Rng;

use crate::food::Food;
use crate::grid::{Cell, Direction, Grid};
use crate::input::{self, Command};
use crate::snake::Snake;

/// What the renderer gets to see after a tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub body: Vec<Cell>,
    pub food: Cell,
    pub last_vacated: Option<Cell>,
}

/// State for one run of the game. Built when the run starts and dropped
/// when it stops.
#[derive(Debug)]
pub struct Simulation<R> {
    grid: Grid,
    snake: Snake,
    food: Food,
    rng: R,
}

impl<R: Rng> Simulation<R> {
    pub fn new(grid: Grid, origin: Cell, mut rng: R) -> Self {
        let snake = Snake::new(origin);
        let mut food = Food::new(origin);
        if !food.relocate(grid, snake.body(), &mut rng) {
            warn!("No free cell for food on a {}x{} grid", grid.width, grid.height);
        }

        Simulation {
            grid,
            snake,
            food,
            rng,
        }
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Food {
        self.food
    }

    /// Advances everything by one step. `turns` are the directions the
    /// player asked for since the previous tick, oldest first. Each is
    /// checked against the current heading, so the last acceptable one wins.
    pub fn tick(&mut self, turns: &[Direction]) -> Snapshot {
        for &direction in turns {
            self.snake.queue_direction(direction);
        }

        self.snake.advance(self.grid);

        if self.snake.head() == self.food.position {
            self.snake.grow();
            if self.food.relocate(self.grid, self.snake.body(), &mut self.rng) {
                debug!(
                    "Food eaten, length {} (+1 owed), food now at {:?}",
                    self.snake.len(),
                    self.food.position
                );
            } else {
                info!("Board filled at length {}, starting over", self.snake.len());
                self.snake.reset();
                self.respawn_food_if_covered();
            }
        }

        if self.snake.detect_self_collision() {
            info!("Snake hit itself at length {}, resetting", self.snake.len());
            self.snake.reset();
            self.respawn_food_if_covered();
        }

        self.snapshot()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            body: self.snake.body().iter().copied().collect(),
            food: self.food.position,
            last_vacated: self.snake.last_vacated(),
        }
    }

    // A reset can drop the snake onto the food
    fn respawn_food_if_covered(&mut self) {
        if self.snake.body().contains(&self.food.position) {
            self.food.relocate(self.grid, self.snake.body(), &mut self.rng);
        }
    }
}

/// Drives `sim` at a fixed rate until a quit command arrives or the input
/// side hangs up. Input is sampled once at the start of every tick and each
/// resulting snapshot is handed to `present`.
pub fn run<R, F>(
    sim: &mut Simulation<R>,
    commands: &Receiver<Command>,
    tick_rate: Duration,
    mut present: F,
) -> io::Result<()>
where
    R: Rng,
    F: FnMut(&Snapshot) -> io::Result<()>,
{
    present(&sim.snapshot())?;

    let mut next_tick = Instant::now() + tick_rate;
    loop {
        let now = Instant::now();
        if next_tick > now {
            thread::sleep(next_tick - now);
            next_tick += tick_rate;
        } else {
            // Fell behind; skip the missed ticks rather than bursting
            next_tick = now + tick_rate;
        }

        let drained = input::drain(commands);
        if drained.quit {
            info!("Stop requested");
            return Ok(());
        }

        let snapshot = sim.tick(&drained.turns);
        present(&snapshot)?;
    }
}
