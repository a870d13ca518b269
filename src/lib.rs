//! Monte Carlo estimate of how often a lone Monopoly player lands on, and
//! finishes turns on, each space of the board.

pub mod error;
pub mod game;
pub mod logging;
pub mod report;
pub mod simulation;

pub use error::{Error, Result};
pub use game::{Game, Stats};
pub use simulation::SimulationConfig;
