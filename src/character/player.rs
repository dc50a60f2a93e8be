use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::core::constants::{STARTING_ATTACK_POWER, STARTING_MAGIC_POWER, STARTING_MAX_HEALTH};
use crate::items::{self, Item, SlotKind};

/// The player character.
///
/// Field names are the persisted save format; keep them stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub health: u32,
    pub max_health: u32,
    pub level: u32,
    pub experience: u64,
    pub attack_power: u32,
    pub magic_power: u32,
    pub inventory: Vec<Item>,
    pub equipped: BTreeMap<SlotKind, Item>,
}

impl Player {
    /// A fresh level 1 character.
    pub fn new() -> Self {
        Self {
            health: STARTING_MAX_HEALTH,
            max_health: STARTING_MAX_HEALTH,
            level: 1,
            experience: 0,
            attack_power: STARTING_ATTACK_POWER,
            magic_power: STARTING_MAGIC_POWER,
            inventory: Vec::new(),
            equipped: BTreeMap::new(),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Subtracts `amount`, flooring at 0. Returns the remaining health.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        self.health = self.health.saturating_sub(amount);
        tracing::debug!(damage = amount, health = self.health, "player took damage");
        self.health
    }

    /// Full heal, used when an exploration session ends.
    pub fn reset_health(&mut self) {
        self.health = self.max_health;
    }

    /// Appends an item to the inventory without equipping it.
    pub fn add_to_inventory(&mut self, item: Item) {
        self.inventory.push(item);
    }

    /// Equips a copy of the inventory item at `index`.
    ///
    /// The inventory is append-only, so the item stays listed. Returns the
    /// displaced item, or `None` if the slot was empty or `index` is out of range.
    pub fn equip_from_inventory(&mut self, index: usize) -> Option<Item> {
        let item = self.inventory.get(index)?.clone();
        items::equip(self, item)
    }

    pub fn equipped_item(&self, slot: SlotKind) -> Option<&Item> {
        self.equipped.get(&slot)
    }

    /// Inventory position of the item worn in `slot`: the first listed copy,
    /// since identical drops are indistinguishable.
    pub fn equipped_inventory_index(&self, slot: SlotKind) -> Option<usize> {
        let worn = self.equipped.get(&slot)?;
        self.inventory.iter().position(|item| item == worn)
    }

    /// Checks the invariants a restored save must satisfy.
    pub fn validate(&self) -> Result<(), String> {
        if self.level == 0 {
            return Err("level must be at least 1".to_string());
        }
        if self.health > self.max_health {
            return Err(format!(
                "health {} exceeds max health {}",
                self.health, self.max_health
            ));
        }
        for (slot, item) in &self.equipped {
            if item.slot_kind() != *slot {
                return Err(format!(
                    "{} is equipped in the {} slot",
                    item.name(),
                    slot
                ));
            }
        }
        Ok(())
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}
