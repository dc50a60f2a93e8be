//! Runs simulated players through the real exploration loop.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::config::SimConfig;
use super::report::{RunStats, SimReport};
use crate::character::Player;
use crate::core::error::{GameError, GameResult};
use crate::core::game_logic::{explore, ExplorationOutcome};
use crate::items::{equip, Item};
use crate::zones::{Catalog, Location};

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig, catalog: &Catalog) -> GameResult<SimReport> {
    let location = catalog
        .get(&config.location)
        .ok_or_else(|| GameError::UnknownLocation(config.location.clone()))?;

    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(run_idx as u64)),
            None => ChaCha8Rng::from_entropy(),
        };

        let stats = simulate_single_run(config, location, &mut rng)?;

        if config.verbosity >= 2 {
            println!(
                "Run {}/{} - Level {}, Victories {}, Defeats {}, Escapes {}, Items {}",
                run_idx + 1,
                config.num_runs,
                stats.final_level,
                stats.victories,
                stats.defeats,
                stats.escapes,
                stats.items_found
            );
        }
        all_runs.push(stats);
    }

    Ok(SimReport::from_runs(&config.location, all_runs))
}

/// Player levelled to `level` through the normal experience curve.
pub fn player_at_level(level: u32) -> Player {
    let mut player = Player::new();
    while player.level < level {
        let needed = player.experience_to_next_level() - player.experience;
        player.add_experience(needed);
    }
    player
}

fn simulate_single_run(
    config: &SimConfig,
    location: &Location,
    rng: &mut ChaCha8Rng,
) -> GameResult<RunStats> {
    let mut player = player_at_level(config.starting_level);
    let mut policy = config.policy;
    let mut stats = RunStats::default();

    for _ in 0..config.sessions_per_run {
        let report = explore(&mut player, location, &mut policy, rng)?;

        stats.sessions += 1;
        stats.fights += report.rounds_fought as u64;
        stats.victories += report.victories as u64;
        stats.total_experience += report.experience_gained;
        stats.items_found += report.loot.len() as u64;
        match report.outcome {
            ExplorationOutcome::Completed => stats.completed_sessions += 1,
            ExplorationOutcome::Defeated => stats.defeats += 1,
            ExplorationOutcome::Escaped => stats.escapes += 1,
        }

        if config.auto_equip {
            for item in report.loot {
                if is_upgrade(&player, &item) {
                    equip(&mut player, item);
                    stats.upgrades_equipped += 1;
                }
            }
        }
    }

    stats.final_level = player.level;
    Ok(stats)
}

/// True when `item` gives a bigger bonus than whatever is in its slot.
fn is_upgrade(player: &Player, item: &Item) -> bool {
    match player.equipped_item(item.slot_kind()) {
        None => true,
        Some(current) => bonus_of(item) > bonus_of(current),
    }
}

fn bonus_of(item: &Item) -> u32 {
    match item {
        Item::Weapon { attack_bonus, .. } => *attack_bonus,
        Item::Armor { health_bonus, .. } => *health_bonus,
    }
}
