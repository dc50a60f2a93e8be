//! World catalog: the locations a player can explore.
//!
//! Locations are gated by player level and each owns the enemy and loot
//! pools that encounters draw from.

mod data;

pub use data::{Catalog, Location};
