//! Inventory primitives: pickup, drop, enchantment adjustment.
//!
//! Pickup applies an item's carry effects once; drop and theft reverse
//! exactly what pickup applied. Derived stats are recomputed before any of
//! these return.

use crate::action::InventoryError;
use crate::env::GameEnv;
use crate::state::{Item, ItemKind, Refresh, SlotIndex, describe, enchant_linked_attr};
use crate::stats;

use super::GameEngine;

impl<'a> GameEngine<'a> {
    /// Stores an item in the first free slot within the pickup bound.
    ///
    /// On [`InventoryError::CapacityExceeded`] nothing is stored and the item
    /// remains the caller's to place.
    pub fn take(
        &mut self,
        env: &mut GameEnv<'_>,
        kind: ItemKind,
        arg: i32,
    ) -> Result<(SlotIndex, Refresh), InventoryError> {
        let limit = self.state.pickup_limit();
        let Some(slot) = self.state.inventory.first_free(limit) else {
            env.message(&InventoryError::CapacityExceeded.to_string());
            return Err(InventoryError::CapacityExceeded);
        };

        let item = Item::new(kind, arg);
        self.state.inventory.put(slot, item);
        self.state.apply_carry_effects(slot);

        let mut refresh = Refresh::NONE;
        if item.profile().affects_derived {
            stats::recalc(self.state);
            refresh |= Refresh::STATUS;
        }
        if kind == ItemKind::EyeOfLarn && !self.state.is_blind() {
            env.terminal().sight_fades();
        }

        tracing::debug!(slot = %slot.letter(), ?kind, arg, "picked up");
        env.message(&format!(
            "You pick up: {}) {}",
            slot.letter(),
            describe(item, &self.state.knowledge)
        ));
        Ok((slot, refresh))
    }

    /// Puts the item in `slot` on the player's tile.
    ///
    /// Dropping onto a pit loses the item. Equipment references to the slot
    /// are cleared and carry effects reversed.
    pub fn drop_object(
        &mut self,
        env: &mut GameEnv<'_>,
        slot: SlotIndex,
    ) -> Result<Refresh, InventoryError> {
        let Some(item) = self.state.inventory.get(slot) else {
            let err = InventoryError::NothingToDrop(slot);
            env.message(&err.to_string());
            return Err(err);
        };

        let ground = env.world().ground();
        if ground.is_some_and(|g| g.kind != ItemKind::Pit) {
            let err = InventoryError::GroundOccupied;
            env.message(&err.to_string());
            return Err(err);
        }
        if env.world().on_home_entrance() {
            return Err(InventoryError::HomeEntrance);
        }

        env.message(&format!(
            "You drop: {}) {}",
            slot.letter(),
            describe(item, &self.state.knowledge)
        ));
        if ground.is_none() {
            env.world().set_ground(Some(item));
        } else {
            tracing::debug!(?item, "dropped into a pit");
        }

        self.remove_from_pack(slot);
        self.state.turn.drop_flag = true;
        Ok(Refresh::STATUS)
    }

    /// Changes the enchantment of the item in `slot`.
    ///
    /// Ability rings move their ability with the enchantment. Returns the
    /// refresh tier of the item: status for anything that feeds derived
    /// stats, nothing otherwise.
    pub fn adjust_enchantment(&mut self, slot: SlotIndex, delta: i32) -> Refresh {
        let Some(item) = self.state.inventory.get_mut(slot) else {
            return Refresh::NONE;
        };
        item.arg += delta;
        let kind = item.kind;

        if let Some(attr) = enchant_linked_attr(kind) {
            self.adjust(attr, i64::from(delta));
        }
        stats::recalc(self.state);

        let profile = kind.profile();
        if profile.affects_derived || profile.armor.is_some() || profile.weapon.is_some() {
            Refresh::STATUS
        } else {
            Refresh::NONE
        }
    }

    /// True once every slot within the "considered full" bound is taken.
    pub fn pocket_full(&self) -> bool {
        self.state
            .inventory
            .first_free(self.state.full_limit())
            .is_none()
    }

    /// Empties a slot, clears its equipment references and reverses its
    /// carry effects.
    pub(crate) fn remove_from_pack(&mut self, slot: SlotIndex) -> Option<Item> {
        let absorbed = self.state.inventory.absorbed(slot);
        let item = self.state.inventory.take(slot)?;
        self.state.equipment.release(slot);
        self.state.reverse_carry_effects(item, absorbed);
        stats::recalc(self.state);
        Some(item)
    }
}
