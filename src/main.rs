use std::fs::File;
use std::io::{self, Stdout};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{error, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::prelude::*;
use simplelog::WriteLogger;

use snekloop::config::{Cli, Config};
use snekloop::input;
use snekloop::render;
use snekloop::simulation::{self, Simulation};

fn main() -> Result<()> {
    let config = Config::try_from(Cli::parse())?;

    // Set up logging before anything else
    let log_file = File::create(&config.log_file)
        .with_context(|| format!("Failed to create log file {}", config.log_file.display()))?;
    WriteLogger::init(config.log_level, simplelog::Config::default(), log_file)
        .map_err(|e| anyhow!("Failed to initialize logger: {}", e))?;

    info!(
        "Starting snekloop: {}x{} grid, {} ticks/s, start {:?}, seed {:?}",
        config.grid.width,
        config.grid.height,
        config.ticks_per_second,
        config.initial_position,
        config.seed
    );

    let mut terminal = setup_terminal().context("Failed to set up terminal")?;
    let result = play(&config, &mut terminal);
    if let Err(e) = &result {
        error!("Stopped with error: {:#}", e);
    }

    let restored = restore_terminal(&mut terminal).context("Failed to restore terminal");
    if let Err(e) = &restored {
        error!("{:#}", e);
    }
    info!("Exiting snekloop");
    finish(result, restored)
}

/// The run's own error comes first; a failed teardown is attached to it.
fn finish(result: Result<()>, restored: Result<()>) -> Result<()> {
    match (result, restored) {
        (Err(e), Err(restore)) => Err(e.context(format!("{:#}", restore))),
        (Err(e), Ok(())) | (Ok(()), Err(e)) => Err(e),
        (Ok(()), Ok(())) => Ok(()),
    }
}


fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    terminal.hide_cursor()?;
    terminal.clear()?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()
}

fn play(config: &Config, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut sim = Simulation::new(config.grid, config.initial_position, rng);

    let (tx, rx) = mpsc::channel();
    let stop = Arc::new(AtomicBool::new(false));
    let reader = input::spawn_reader(tx, Arc::clone(&stop));

    let grid = sim.grid();
    let result = simulation::run(&mut sim, &rx, config.tick_rate(), |snapshot| {
        terminal.draw(|f| render::draw(f, grid, snapshot)).map(|_| ())
    })
    .context("Failed to draw frame");

    stop.store(true, Ordering::Relaxed);
    drop(rx);
    let reader_result = reader
        .join()
        .map_err(|_| anyhow!("Input reader panicked"))?
        .context("Failed to read input");

    result.and(reader_result)
}
