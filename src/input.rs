use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{Receiver, Sender, TryRecvError};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::{debug, error};

use crate::grid::Direction;

const POLL_INTERVAL: Duration = Duration::from_millis(10);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Turn(Direction),
    Quit,
}

pub fn command_for_key(key: KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Command::Quit);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Command::Turn(Direction::Up)),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(Command::Turn(Direction::Down))
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(Command::Turn(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(Command::Turn(Direction::Right))
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}

/// Everything that arrived since the previous tick.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Drained {
    /// Turns in the order they were pressed
    pub turns: Vec<Direction>,
    pub quit: bool,
}

/// Empties the queue in one go. A vanished sender counts as quitting.
pub fn drain(commands: &Receiver<Command>) -> Drained {
    let mut drained = Drained::default();
    loop {
        match commands.try_recv() {
            Ok(Command::Turn(direction)) => drained.turns.push(direction),
            Ok(Command::Quit) => drained.quit = true,
            Err(TryRecvError::Empty) => break,
            Err(TryRecvError::Disconnected) => {
                drained.quit = true;
                break;
            }
        }
    }
    drained
}

/// Polls the terminal on its own thread and forwards key presses until
/// `stop` is raised or the simulation hangs up.
pub fn spawn_reader(tx: Sender<Command>, stop: Arc<AtomicBool>) -> JoinHandle<io::Result<()>> {
    thread::spawn(move || {
        let result = read_keys(&tx, &stop);
        if let Err(e) = &result {
            error!("Input reader failed: {}", e);
            // Wake the simulation so it does not run on without input
            let _ = tx.send(Command::Quit);
        }
        result
    })
}

fn read_keys(tx: &Sender<Command>, stop: &AtomicBool) -> io::Result<()> {
    while !stop.load(Ordering::Relaxed) {
        if !event::poll(POLL_INTERVAL)? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        if let Some(command) = command_for_key(key) {
            if tx.send(command).is_err() {
                break;
            }
        }
    }
    debug!("Input reader stopped");
    Ok(())
}
