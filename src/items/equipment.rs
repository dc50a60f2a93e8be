use super::types::{Item, SlotKind};
use crate::character::Player;

/// Equips `item`, first unequipping whatever occupies the same slot kind.
///
/// Returns the item that was displaced, if any.
pub fn equip(player: &mut Player, item: Item) -> Option<Item> {
    let slot = item.slot_kind();
    let previous = unequip(player, slot);
    item.apply_effects(player);
    tracing::info!(item = item.name(), slot = %slot, "equipped item");
    player.equipped.insert(slot, item);
    previous
}

/// Removes the item in `slot` and reverses its effects.
///
/// An empty slot is a no-op.
pub fn unequip(player: &mut Player, slot: SlotKind) -> Option<Item> {
    let item = player.equipped.remove(&slot)?;
    item.remove_effects(player);
    tracing::info!(item = item.name(), slot = %slot, "unequipped item");
    Some(item)
}
