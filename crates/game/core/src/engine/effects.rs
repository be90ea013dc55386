//! Compound operations spanning inventory and attributes: enchanting,
//! curse removal and theft.

use crate::config::GameConfig;
use crate::env::GameEnv;
use crate::state::{Attr, EquipSlot, Item, Refresh, SlotIndex, describe};

use super::GameEngine;

/// Enchanting an item at or above this level risks destroying it.
pub const OVER_ENCHANT: i32 = 10;

/// Curse counters cleared by remove curse.
const CURSES: [Attr; 8] = [
    Attr::BlindCount,
    Attr::Confuse,
    Attr::Aggravate,
    Attr::HasteMonster,
    Attr::Itching,
    Attr::Laughing,
    Attr::Clumsiness,
    Attr::HalfDamage,
];

/// Random probes a thief makes before giving up.
const THEFT_ATTEMPTS: usize = 100;

/// Gold above this is halved by a thief instead of nibbled at.
const GOLD_HOARD: i64 = 32_767;

impl<'a> GameEngine<'a> {
    /// Enchants the worn armor, or the shield when no armor is worn.
    pub fn enchant_armor(&mut self, env: &mut GameEnv<'_>) -> Refresh {
        let target = self
            .state
            .equipment
            .wear
            .or(self.state.equipment.shield);
        match target {
            Some(slot) => self.enchant_slot(env, slot),
            None => {
                env.message("You feel a sense of loss");
                Refresh::NONE
            }
        }
    }

    /// Enchants the wielded item.
    pub fn enchant_weapon(&mut self, env: &mut GameEnv<'_>) -> Refresh {
        match self.state.equipment.get(EquipSlot::Wield) {
            Some(slot) => self.enchant_slot(env, slot),
            None => {
                env.message("You feel a sense of loss");
                Refresh::NONE
            }
        }
    }

    fn enchant_slot(&mut self, env: &mut GameEnv<'_>, slot: SlotIndex) -> Refresh {
        let Some(item) = self.state.inventory.get(slot) else {
            return Refresh::NONE;
        };
        if !item.kind.is_enchantable() {
            return Refresh::NONE;
        }

        if item.arg >= OVER_ENCHANT && env.rng().rnd(10) <= 9 {
            tracing::debug!(slot = %slot.letter(), arg = item.arg, "over-enchanted item destroyed");
            env.message(&format!(
                "Your {} vibrates violently and crumbles into dust!",
                item.profile().name
            ));
            self.remove_from_pack(slot);
            return Refresh::STATUS;
        }

        env.message(&format!(
            "Your {} glows for a moment",
            item.profile().name
        ));
        self.adjust_enchantment(slot, 1) | Refresh::STATUS
    }

    /// Clears every curse counter.
    pub fn remove_curse(&mut self) -> Refresh {
        let mut lifted = false;
        for attr in CURSES {
            if self.state.attrs.is_active(attr) {
                self.state.attrs.set(attr, 0);
                lifted = true;
            }
        }
        if lifted {
            tracing::debug!("curses lifted");
            Refresh::EFFECTS
        } else {
            Refresh::NONE
        }
    }

    /// A thief takes one random item the player is not using.
    ///
    /// Fails while the theft-prevention device is carried, or when a hundred
    /// probes find nothing loose.
    pub fn steal_item(&mut self, env: &mut GameEnv<'_>) -> Option<(SlotIndex, Item)> {
        if self.state.attrs.is_active(Attr::NoTheft) {
            return None;
        }

        for _ in 0..THEFT_ATTEMPTS {
            let index = env.rng().rund(GameConfig::INVENTORY_SLOTS as u32) as usize;
            let Some(slot) = SlotIndex::new(index) else {
                continue;
            };
            if self.state.inventory.get(slot).is_none() || self.state.equipment.is_equipped(slot) {
                continue;
            }
            let item = self.remove_from_pack(slot)?;
            tracing::debug!(slot = %slot.letter(), ?item, "item stolen");
            env.message(&format!(
                "Your {} was stolen!",
                describe(item, &self.state.knowledge)
            ));
            self.flush(env, Refresh::STATUS);
            return Some((slot, item));
        }
        None
    }

    /// A thief takes gold: half of a large hoard, otherwise a random part.
    /// Returns the amount taken.
    pub fn steal_gold(&mut self, env: &mut GameEnv<'_>) -> i64 {
        let gold = self.state.attr(Attr::Gold);
        if gold <= 0 {
            return 0;
        }
        let taken = if gold > GOLD_HOARD {
            gold - gold / 2
        } else {
            env.rng().rnd_i64(1 + gold / 2).min(gold)
        };
        self.state.attrs.set(Attr::Gold, gold - taken);
        tracing::debug!(taken, remaining = gold - taken, "gold stolen");
        self.flush(env, Refresh::STATUS);
        taken
    }
}
