//! Ermanda - turn-based combat and progression engine.
//!
//! This module exposes the game logic for testing and external use.

pub mod build_info;
pub mod character;
pub mod combat;
pub mod core;
pub mod items;
pub mod simulator;
pub mod zones;

pub use crate::character::{experience_needed, LevelUpOutcome, Player, SaveManager};
pub use crate::combat::{
    escape_chance, resolve_turn, run_fight, spawn_enemy, ActionSource, Archetype, CombatEvent,
    Enemy, Fight, FightState, PlayerAction, TurnOutcome,
};
pub use crate::core::{
    award_victory, explore, start_encounter, ExplorationOutcome, ExplorationReport, GameError,
    GameResult, VictoryReward,
};
pub use crate::items::{equip, unequip, Item, SlotKind};
pub use crate::zones::{Catalog, Location};
