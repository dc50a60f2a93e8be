//! Enemies, stat scaling, and the turn-based fight state machine.

pub mod logic;
pub mod scaling;
pub mod types;

pub use logic::*;
pub use scaling::{scale_enemy_stats, scale_stat};
pub use types::*;
