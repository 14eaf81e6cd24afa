use std::path::PathBuf;
use std::time::Duration;

use anyhow::{ensure, Result};
use clap::{Parser, ValueEnum};
use simplelog::LevelFilter;

use crate::grid::{Cell, Grid};

const MAX_TICKS_PER_SECOND: u32 = 1000;

#[derive(Parser, Debug)]
#[command(name = "snekloop")]
#[command(version, about = "Snake on a wraparound grid, in the terminal")]
pub struct Cli {
    /// Grid width in cells
    #[arg(long, default_value_t = 32)]
    pub width: u16,

    /// Grid height in cells
    #[arg(long, default_value_t = 24)]
    pub height: u16,

    /// Simulation steps per second
    #[arg(long, default_value_t = 20)]
    pub tps: u32,

    /// Starting column of the snake (defaults to the grid center)
    #[arg(long, requires = "start_y")]
    pub start_x: Option<u16>,

    /// Starting row of the snake (defaults to the grid center)
    #[arg(long, requires = "start_x")]
    pub start_y: Option<u16>,

    /// Seed for food placement, for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long, default_value = "snekloop.log")]
    pub log_file: PathBuf,

    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Validated settings for one run.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub grid: Grid,
    pub ticks_per_second: u32,
    pub initial_position: Cell,
    pub seed: Option<u64>,
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
}

impl Config {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_secs(1) / self.ticks_per_second
    }
}

impl TryFrom<Cli> for Config {
    type Error = anyhow::Error;

    fn try_from(cli: Cli) -> Result<Self> {
        ensure!(
            cli.width > 0 && cli.height > 0,
            "grid must be at least 1x1, got {}x{}",
            cli.width,
            cli.height
        );
        let grid = Grid::new(cli.width, cli.height);
        ensure!(
            grid.cell_count() >= 2,
            "grid needs room for both the snake and the food"
        );
        ensure!(
            (1..=MAX_TICKS_PER_SECOND).contains(&cli.tps),
            "ticks per second must be between 1 and {}, got {}",
            MAX_TICKS_PER_SECOND,
            cli.tps
        );

        let initial_position = match (cli.start_x, cli.start_y) {
            (Some(x), Some(y)) => Cell::new(x, y),
            _ => grid.center(),
        };
        ensure!(
            grid.contains(initial_position),
            "start position ({}, {}) is outside the {}x{} grid",
            initial_position.x,
            initial_position.y,
            grid.width,
            grid.height
        );

        Ok(Config {
            grid,
            ticks_per_second: cli.tps,
            initial_position,
            seed: cli.seed,
            log_file: cli.log_file,
            log_level: cli.log_level.into(),
        })
    }
}
