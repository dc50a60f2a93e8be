//! Simulation configuration.

use crate::character::Player;
use crate::combat::{ActionSource, AlwaysAttack, Cautious, Enemy, PlayerAction};

/// How simulated players choose their actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimPolicy {
    AlwaysAttack,
    /// Flee once health falls below this percentage of max.
    Cautious { escape_below_percent: u32 },
}

impl ActionSource for SimPolicy {
    fn next_action(&mut self, player: &Player, enemy: &Enemy) -> PlayerAction {
        match *self {
            SimPolicy::AlwaysAttack => AlwaysAttack.next_action(player, enemy),
            SimPolicy::Cautious {
                escape_below_percent,
            } => Cautious {
                escape_below_percent,
            }
            .next_action(player, enemy),
        }
    }
}

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of simulated players
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Location explored every session
    pub location: String,

    /// Players are levelled to this before the first session
    pub starting_level: u32,

    /// Exploration sessions per run
    pub sessions_per_run: u32,

    pub policy: SimPolicy,

    /// Equip dropped items when they beat what is worn
    pub auto_equip: bool,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per run)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 1000,
            seed: None,
            location: "Ermanda".to_string(),
            starting_level: 1,
            sessions_per_run: 10,
            policy: SimPolicy::AlwaysAttack,
            auto_equip: true,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Quick config for checking one location's difficulty
    pub fn location_balance_test(location: &str, starting_level: u32) -> Self {
        Self {
            num_runs: 200,
            location: location.to_string(),
            starting_level,
            sessions_per_run: 5,
            ..Default::default()
        }
    }
}
