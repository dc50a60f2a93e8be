//! Item system: types, equip/unequip, and loot drops.

pub mod drops;
pub mod equipment;
pub mod types;

pub use drops::*;
pub use equipment::*;
pub use types::*;
