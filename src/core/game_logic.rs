//! Encounter setup, victory rewards, and exploration sessions.

use rand::seq::SliceRandom;
use rand::Rng;

use super::constants::EXPLORATION_ROUNDS;
use super::error::{GameError, GameResult};
use crate::character::Player;
use crate::combat::{run_fight, ActionSource, Enemy, Fight, FightState};
use crate::items::{roll_loot, Item};
use crate::zones::Location;

/// Draws one of the location's archetypes uniformly and spawns it.
pub fn start_encounter(location: &Location, rng: &mut impl Rng) -> GameResult<Enemy> {
    let archetype = location
        .enemies()
        .choose(rng)
        .copied()
        .ok_or_else(|| GameError::EmptyPool {
            location: location.name().to_string(),
            pool: "enemy",
        })?;
    let enemy = Enemy::spawn(archetype, rng);
    tracing::debug!(
        location = location.name(),
        enemy = enemy.name(),
        level = enemy.level,
        health = enemy.health,
        attack_power = enemy.attack_power,
        "encounter started"
    );
    Ok(enemy)
}

/// Everything a victory paid out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VictoryReward {
    pub experience_gained: u32,
    pub leveled_up: bool,
    pub levels_gained: u32,
    pub new_level: u32,
    pub loot: Option<Item>,
}

/// Grants the enemy's experience and rolls loot into the inventory.
pub fn award_victory(
    player: &mut Player,
    enemy: &Enemy,
    location: &Location,
    rng: &mut impl Rng,
) -> VictoryReward {
    let experience_gained = enemy.experience_value;
    let progress = player.add_experience(experience_gained as u64);

    let loot = roll_loot(location, rng);
    if let Some(item) = &loot {
        tracing::info!(item = item.name(), location = location.name(), "loot dropped");
        player.add_to_inventory(item.clone());
    }

    VictoryReward {
        experience_gained,
        leveled_up: progress.leveled_up(),
        levels_gained: progress.levels_gained,
        new_level: progress.new_level,
        loot,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplorationOutcome {
    /// Every round was won.
    Completed,
    Defeated,
    Escaped,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplorationReport {
    pub location: String,
    pub rounds_fought: u32,
    pub victories: u32,
    pub experience_gained: u64,
    pub levels_gained: u32,
    pub loot: Vec<Item>,
    pub outcome: ExplorationOutcome,
}

/// Hooks for presenting an exploration session. All methods default to no-ops.
pub trait ExplorationObserver {
    fn encounter_started(&mut self, _round: u32, _enemy: &Enemy) {}
    fn victory(&mut self, _reward: &VictoryReward) {}
}

impl ExplorationObserver for () {}

/// Fights up to ten encounters at `location`.
///
/// Defeat or escape ends the session early and restores the player's health.
pub fn explore(
    player: &mut Player,
    location: &Location,
    source: &mut impl ActionSource,
    rng: &mut impl Rng,
) -> GameResult<ExplorationReport> {
    explore_with_observer(player, location, source, &mut (), rng)
}

pub fn explore_with_observer(
    player: &mut Player,
    location: &Location,
    source: &mut impl ActionSource,
    observer: &mut impl ExplorationObserver,
    rng: &mut impl Rng,
) -> GameResult<ExplorationReport> {
    if !location.is_unlocked_for(player.level) {
        return Err(GameError::LocationLocked {
            location: location.name().to_string(),
            required_level: location.required_level(),
            level: player.level,
        });
    }

    let mut report = ExplorationReport {
        location: location.name().to_string(),
        rounds_fought: 0,
        victories: 0,
        experience_gained: 0,
        levels_gained: 0,
        loot: Vec::new(),
        outcome: ExplorationOutcome::Completed,
    };

    for round in 1..=EXPLORATION_ROUNDS {
        let enemy = start_encounter(location, rng)?;
        observer.encounter_started(round, &enemy);
        report.rounds_fought = round;

        let mut fight = Fight::new(enemy);
        match run_fight(player, &mut fight, source, rng) {
            FightState::Victory => {
                let reward = award_victory(player, fight.enemy(), location, rng);
                report.victories += 1;
                report.experience_gained += reward.experience_gained as u64;
                report.levels_gained += reward.levels_gained;
                report.loot.extend(reward.loot.iter().cloned());
                observer.victory(&reward);
            }
            FightState::Defeat => {
                report.outcome = ExplorationOutcome::Defeated;
                break;
            }
            FightState::Escaped => {
                report.outcome = ExplorationOutcome::Escaped;
                break;
            }
            FightState::InProgress => unreachable!("run_fight returns only terminal states"),
        }
    }

    if report.outcome != ExplorationOutcome::Completed {
        player.reset_health();
    }

    tracing::info!(
        location = location.name(),
        rounds = report.rounds_fought,
        victories = report.victories,
        outcome = ?report.outcome,
        "exploration finished"
    );

    Ok(report)
}
