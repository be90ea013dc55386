//! Authoritative player state representation.
//!
//! [`PlayerState`] is the single owned aggregate the engine mutates: the
//! attribute store, the slotted inventory, equipment references, what the
//! player has identified and turn bookkeeping. There is no ambient global
//! state; every operation receives the aggregate explicitly.
pub mod attributes;
pub mod equipment;
pub mod inventory;
pub mod item;
pub mod knowledge;
pub mod refresh;
pub mod turn;

pub use attributes::{Attr, Attributes};
pub use equipment::{EquipSlot, Equipment};
pub use inventory::{Absorbed, Inventory, SlotIndex};
pub use item::{
    Item, ItemKind, ItemProfile, MAX_CARRY_EFFECTS, Potion, Scroll, UseCategory, carry_effects,
    describe, enchant_linked_attr,
};
pub use knowledge::Knowledge;
pub use refresh::Refresh;
pub use turn::TurnState;

/// Canonical snapshot of one player's state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlayerState {
    pub attrs: Attributes,
    pub inventory: Inventory,
    pub equipment: Equipment,
    pub knowledge: Knowledge,
    pub turn: TurnState,
}

impl PlayerState {
    /// Creates an empty state: zeroed attributes, empty pack, nothing known.
    ///
    /// Use [`ClassTemplate::to_player`](crate::env::ClassTemplate::to_player)
    /// for a playable character.
    pub fn empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn attr(&self, attr: Attr) -> i64 {
        self.attrs.get(attr)
    }

    pub fn level(&self) -> i64 {
        self.attrs.get(Attr::Level)
    }

    /// Item referenced by an equipment category, if any.
    pub fn equipped(&self, which: EquipSlot) -> Option<Item> {
        self.equipment
            .get(which)
            .and_then(|slot| self.inventory.get(slot))
    }

    pub fn is_blind(&self) -> bool {
        self.attrs.is_active(Attr::BlindCount)
    }

    /// Applies the carry effects of the item in `slot`, remembering how much
    /// of each the ability floor absorbed.
    pub fn apply_carry_effects(&mut self, slot: SlotIndex) {
        let Some(item) = self.inventory.get(slot) else {
            return;
        };
        let mut absorbed = Absorbed::default();
        for (lost, (attr, delta)) in absorbed.iter_mut().zip(carry_effects(item)) {
            let before = self.attrs.get(attr);
            self.attrs.adjust(attr, delta);
            *lost = delta - (self.attrs.get(attr) - before);
        }
        self.inventory.set_absorbed(slot, absorbed);
    }

    /// Undoes exactly what [`apply_carry_effects`](Self::apply_carry_effects)
    /// applied for an item that has left the pack.
    pub fn reverse_carry_effects(&mut self, item: Item, absorbed: Absorbed) {
        for (lost, (attr, delta)) in absorbed.into_iter().zip(carry_effects(item)) {
            self.attrs.adjust(attr, lost - delta);
        }
    }

    /// Pickup searches this many slots.
    pub fn pickup_limit(&self) -> usize {
        crate::config::GameConfig::pickup_limit(self.level())
    }

    /// The pack counts as full once this many slots are taken.
    pub fn full_limit(&self) -> usize {
        crate::config::GameConfig::full_limit(self.level())
    }
}
