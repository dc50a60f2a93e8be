//! Balance simulator for Monte Carlo analysis.
//!
//! Runs many simulated players through the same exploration loop the game
//! uses, to check win rates, level curves and loot rates per location.

mod config;
mod report;
mod runner;

pub use config::{SimConfig, SimPolicy};
pub use report::{RunStats, SimReport};
pub use runner::{player_at_level, run_simulation};
