//! Text menus for the console binary.

pub mod combat_scene;
pub mod input;
pub mod stats_panel;

pub use combat_scene::{ConsoleFighter, Narrator};
pub use input::Prompt;
