//! Core constants, errors, and encounter orchestration.

pub mod constants;
pub mod error;
pub mod game_logic;

pub use constants::*;
pub use error::{GameError, GameResult};
pub use game_logic::*;
