//! Player character: stats, progression, and persistence.

pub mod player;
pub mod progression;
pub mod save;

pub use player::Player;
pub use progression::{experience_needed, LevelUpOutcome};
pub use save::SaveManager;
