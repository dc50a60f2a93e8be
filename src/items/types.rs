use serde::{Deserialize, Serialize};
use std::fmt;

use crate::character::Player;

/// Equipment category. A player holds at most one equipped item per slot kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SlotKind {
    Weapon,
    Armor,
}

impl SlotKind {
    pub fn name(&self) -> &'static str {
        match self {
            SlotKind::Weapon => "Weapon",
            SlotKind::Armor => "Armor",
        }
    }
}

impl fmt::Display for SlotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Item {
    Weapon {
        name: String,
        value: u32,
        attack_bonus: u32,
    },
    Armor {
        name: String,
        value: u32,
        health_bonus: u32,
    },
}

impl Item {
    pub fn weapon(name: impl Into<String>, value: u32, attack_bonus: u32) -> Self {
        Item::Weapon {
            name: name.into(),
            value,
            attack_bonus,
        }
    }

    pub fn armor(name: impl Into<String>, value: u32, health_bonus: u32) -> Self {
        Item::Armor {
            name: name.into(),
            value,
            health_bonus,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Item::Weapon { name, .. } | Item::Armor { name, .. } => name,
        }
    }

    pub fn slot_kind(&self) -> SlotKind {
        match self {
            Item::Weapon { .. } => SlotKind::Weapon,
            Item::Armor { .. } => SlotKind::Armor,
        }
    }

    /// Economic value. Combat never reads it.
    pub fn value(&self) -> u32 {
        match self {
            Item::Weapon { value, .. } | Item::Armor { value, .. } => *value,
        }
    }

    /// Adds this item's bonus to the player.
    ///
    /// Armor raises current health together with the cap so the bonus is
    /// usable immediately.
    pub fn apply_effects(&self, player: &mut Player) {
        match self {
            Item::Weapon { attack_bonus, .. } => {
                player.attack_power += attack_bonus;
            }
            Item::Armor { health_bonus, .. } => {
                player.max_health += health_bonus;
                player.health += health_bonus;
            }
        }
    }

    /// Exact inverse of [`Item::apply_effects`].
    ///
    /// Removing armor takes back the health it granted and clamps to the new
    /// max. As an extension over plain clamping, a living player is never
    /// dropped below 1 HP, so unequipping can't kill.
    pub fn remove_effects(&self, player: &mut Player) {
        match self {
            Item::Weapon { attack_bonus, .. } => {
                player.attack_power = player.attack_power.saturating_sub(*attack_bonus);
            }
            Item::Armor { health_bonus, .. } => {
                player.max_health = player.max_health.saturating_sub(*health_bonus);
                let floor = if player.health > 0 { 1 } else { 0 };
                player.health = player
                    .health
                    .saturating_sub(*health_bonus)
                    .max(floor)
                    .min(player.max_health);
            }
        }
    }

    /// Short stat summary, e.g. "+15 ATK" or "+20 HP".
    pub fn bonus_label(&self) -> String {
        match self {
            Item::Weapon { attack_bonus, .. } => format!("+{} ATK", attack_bonus),
            Item::Armor { health_bonus, .. } => format!("+{} HP", health_bonus),
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] {} (value {})",
            self.name(),
            self.slot_kind(),
            self.bonus_label(),
            self.value()
        )
    }
}
