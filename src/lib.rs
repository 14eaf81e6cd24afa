//! Snake on a toroidal grid.
//!
//! The simulation core (`grid`, `snake`, `food`, `simulation`) has no
//! terminal dependencies. `input` and `render` connect it to crossterm and
//! ratatui.

pub mod config;
pub mod food;
pub mod grid;
pub mod input;
pub mod render;
pub mod simulation;
pub mod snake;
