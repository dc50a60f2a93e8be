use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use super::scaling::scale_enemy_stats;
use crate::core::error::GameError;

/// Base stats shared by every enemy of an archetype.
#[derive(Debug, Clone, PartialEq)]
pub struct EnemyTemplate {
    pub name: &'static str,
    pub base_health: u32,
    pub base_attack_power: u32,
    pub base_magic_power: u32,
    pub experience_range: RangeInclusive<u32>,
    pub max_level: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Archetype {
    Wolf,
    Bandit,
    Alpha,
}

impl Archetype {
    pub const ALL: [Archetype; 3] = [Archetype::Wolf, Archetype::Bandit, Archetype::Alpha];

    pub fn template(&self) -> EnemyTemplate {
        match self {
            Archetype::Wolf => EnemyTemplate {
                name: "Wolf",
                base_health: 50,
                base_attack_power: 10,
                base_magic_power: 0,
                experience_range: 10..=30,
                max_level: 10,
            },
            Archetype::Bandit => EnemyTemplate {
                name: "Bandit",
                base_health: 100,
                base_attack_power: 20,
                base_magic_power: 0,
                experience_range: 20..=50,
                max_level: 15,
            },
            Archetype::Alpha => EnemyTemplate {
                name: "Alpha",
                base_health: 200,
                base_attack_power: 30,
                base_magic_power: 20,
                experience_range: 50..=100,
                max_level: 20,
            },
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Archetype::Wolf => "Wolf",
            Archetype::Bandit => "Bandit",
            Archetype::Alpha => "Alpha",
        }
    }

    /// How this archetype's attack reads in the combat log.
    pub fn attack_verb(&self) -> &'static str {
        match self {
            Archetype::Wolf => "bites you",
            Archetype::Bandit => "attacks you with a sword",
            Archetype::Alpha => "strikes you with thunder",
        }
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Archetype {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "wolf" => Ok(Archetype::Wolf),
            "bandit" => Ok(Archetype::Bandit),
            "alpha" => Ok(Archetype::Alpha),
            _ => Err(GameError::InvalidArchetype(s.to_string())),
        }
    }
}

impl TryFrom<String> for Archetype {
    type Error = GameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A scaled enemy, alive for exactly one encounter.
#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    pub archetype: Archetype,
    pub level: u32,
    pub health: u32,
    pub attack_power: u32,
    pub magic_power: u32,
    pub experience_value: u32,
}

impl Enemy {
    /// Rolls level and experience value, then scales the template once.
    pub fn spawn(archetype: Archetype, rng: &mut impl Rng) -> Self {
        let template = archetype.template();
        let experience_value = rng.gen_range(template.experience_range.clone());
        let level = rng.gen_range(1..=template.max_level);
        Self::at_level(archetype, level, experience_value)
    }

    /// Builds an enemy at a fixed level. Levels below 1 are treated as 1.
    pub fn at_level(archetype: Archetype, level: u32, experience_value: u32) -> Self {
        let template = archetype.template();
        let level = level.max(1);
        let (health, attack_power) = scale_enemy_stats(
            template.base_health,
            template.base_attack_power,
            level,
        );
        Self {
            archetype,
            level,
            health,
            attack_power,
            magic_power: template.base_magic_power,
            experience_value,
        }
    }

    pub fn name(&self) -> &'static str {
        self.archetype.name()
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Subtracts `amount`, flooring at 0. Returns the remaining health.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        self.health = self.health.saturating_sub(amount);
        tracing::debug!(
            enemy = self.name(),
            damage = amount,
            health = self.health,
            "enemy took damage"
        );
        self.health
    }

    /// Damage dealt by one of this enemy's attacks.
    pub fn attack_damage(&self) -> u32 {
        match self.archetype {
            Archetype::Alpha => self.attack_power + self.magic_power,
            Archetype::Wolf | Archetype::Bandit => self.attack_power,
        }
    }
}

/// Factory keyed by archetype name, case-insensitive.
pub fn spawn_enemy(identifier: &str, rng: &mut impl Rng) -> Result<Enemy, GameError> {
    let archetype: Archetype = identifier.parse()?;
    Ok(Enemy::spawn(archetype, rng))
}
