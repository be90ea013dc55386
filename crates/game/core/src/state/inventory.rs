//! Slotted inventory.
//!
//! Twenty-six slots addressed `a`..`z`. A slot is either empty or holds one
//! [`Item`]; there is no stacking.

use arrayvec::ArrayVec;

use super::item::{Item, ItemKind, MAX_CARRY_EFFECTS};
use crate::config::GameConfig;

/// Index of an inventory slot, always `< GameConfig::INVENTORY_SLOTS`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotIndex(u8);

impl SlotIndex {
    pub fn new(index: usize) -> Option<Self> {
        (index < GameConfig::INVENTORY_SLOTS).then_some(Self(index as u8))
    }

    /// Maps a prompt letter (`a`..`z`) to its slot.
    pub fn from_letter(letter: char) -> Option<Self> {
        if letter.is_ascii_lowercase() {
            Self::new((letter as u8 - b'a') as usize)
        } else {
            None
        }
    }

    pub const fn get(self) -> usize {
        self.0 as usize
    }

    pub const fn letter(self) -> char {
        (b'a' + self.0) as char
    }

    pub fn all() -> impl Iterator<Item = SlotIndex> {
        (0..GameConfig::INVENTORY_SLOTS as u8).map(SlotIndex)
    }
}

/// Part of each carry effect the ability floor swallowed at pickup, in
/// [`carry_effects`](super::item::carry_effects) order.
pub type Absorbed = [i64; MAX_CARRY_EFFECTS];

/// Fixed-capacity slotted inventory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Inventory {
    slots: [Option<Item>; GameConfig::INVENTORY_SLOTS],
    absorbed: [Absorbed; GameConfig::INVENTORY_SLOTS],
}

impl Inventory {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, slot: SlotIndex) -> Option<Item> {
        self.slots[slot.get()]
    }

    pub fn get_mut(&mut self, slot: SlotIndex) -> Option<&mut Item> {
        self.slots[slot.get()].as_mut()
    }

    pub fn kind(&self, slot: SlotIndex) -> Option<ItemKind> {
        self.get(slot).map(|item| item.kind)
    }

    /// Stores an item. The slot starts with nothing absorbed.
    pub fn put(&mut self, slot: SlotIndex, item: Item) {
        self.slots[slot.get()] = Some(item);
        self.absorbed[slot.get()] = Absorbed::default();
    }

    pub fn take(&mut self, slot: SlotIndex) -> Option<Item> {
        self.absorbed[slot.get()] = Absorbed::default();
        self.slots[slot.get()].take()
    }

    pub fn absorbed(&self, slot: SlotIndex) -> Absorbed {
        self.absorbed[slot.get()]
    }

    pub fn set_absorbed(&mut self, slot: SlotIndex, absorbed: Absorbed) {
        self.absorbed[slot.get()] = absorbed;
    }

    /// First empty slot among the first `limit` slots.
    pub fn first_free(&self, limit: usize) -> Option<SlotIndex> {
        self.slots
            .iter()
            .take(limit)
            .position(Option::is_none)
            .and_then(SlotIndex::new)
    }

    /// Occupied slots in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (SlotIndex, Item)> + '_ {
        SlotIndex::all().filter_map(|slot| self.get(slot).map(|item| (slot, item)))
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Occupied slots matching a predicate, in slot order.
    pub fn filter(
        &self,
        mut predicate: impl FnMut(Item) -> bool,
    ) -> ArrayVec<(SlotIndex, Item), { GameConfig::INVENTORY_SLOTS }> {
        self.iter().filter(|(_, item)| predicate(*item)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_map_to_slots() {
        assert_eq!(SlotIndex::from_letter('a').map(SlotIndex::get), Some(0));
        assert_eq!(SlotIndex::from_letter('z').map(SlotIndex::get), Some(25));
        assert_eq!(SlotIndex::from_letter('A'), None);
        assert_eq!(SlotIndex::from_letter('*'), None);
    }

    #[test]
    fn first_free_respects_limit() {
        let mut inventory = Inventory::empty();
        for index in 0..3 {
            let slot = SlotIndex::new(index).unwrap();
            inventory.put(slot, Item::new(ItemKind::Dagger, 0));
        }
        assert_eq!(inventory.first_free(3), None);
        assert_eq!(inventory.first_free(4), SlotIndex::new(3));
    }

    #[test]
    fn absorbed_record_clears_with_the_slot() {
        let mut inventory = Inventory::empty();
        let slot = SlotIndex::new(4).unwrap();
        inventory.put(slot, Item::new(ItemKind::Hammer, 0));
        inventory.set_absorbed(slot, [0, 0, -1]);
        assert_eq!(inventory.absorbed(slot), [0, 0, -1]);

        inventory.take(slot);
        assert_eq!(inventory.absorbed(slot), [0; MAX_CARRY_EFFECTS]);
    }
}
