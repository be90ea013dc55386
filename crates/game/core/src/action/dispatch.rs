//! The six pack verbs.
//!
//! Every verb runs the same shape: prompt until the player picks a letter
//! or escapes, validate the letter, check exclusivity, then mutate. Nothing
//! is committed before the final choice, so an escape leaves the state
//! exactly as it was.

use crate::engine::GameEngine;
use crate::env::{Answer, ESCAPE, GameEnv};
use crate::state::{
    Attr, EquipSlot, Item, ItemKind, Potion, Refresh, Scroll, SlotIndex, UseCategory, describe,
};

use super::category::{LIST_ALL, candidates, valid_answers};
use super::error::{ActionError, Conflict, InventoryError};
use super::{Verb, accepts};

/// What the player picked at a verb prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Choice {
    Slot(SlotIndex),
    /// The verb's extra answer (`-` for wield, `.` for drop).
    Extra,
}

impl<'a> GameEngine<'a> {
    /// Runs a verb from prompt to refresh. Failures are reported to the
    /// player before they are returned.
    pub fn perform(&mut self, env: &mut GameEnv<'_>, verb: Verb) -> Result<Refresh, ActionError> {
        let result = self.prompt_choice(env, verb).and_then(|choice| match choice {
            Choice::Extra => self.perform_extra(env, verb),
            Choice::Slot(slot) => self.perform_on(env, verb, slot),
        });

        match result {
            Ok(refresh) => {
                self.flush(env, refresh);
                Ok(refresh)
            }
            Err(err) => {
                tracing::debug!(verb = verb.as_str(), %err, "command refused");
                // inventory primitives report their own failures
                if !err.is_silent() && !matches!(err, ActionError::Inventory(_)) {
                    env.message(&err.to_string());
                }
                Err(err)
            }
        }
    }

    pub fn wield(&mut self, env: &mut GameEnv<'_>) -> Result<Refresh, ActionError> {
        self.perform(env, Verb::Wield)
    }

    pub fn wear(&mut self, env: &mut GameEnv<'_>) -> Result<Refresh, ActionError> {
        self.perform(env, Verb::Wear)
    }

    pub fn read(&mut self, env: &mut GameEnv<'_>) -> Result<Refresh, ActionError> {
        self.perform(env, Verb::Read)
    }

    pub fn quaff(&mut self, env: &mut GameEnv<'_>) -> Result<Refresh, ActionError> {
        self.perform(env, Verb::Quaff)
    }

    pub fn eat(&mut self, env: &mut GameEnv<'_>) -> Result<Refresh, ActionError> {
        self.perform(env, Verb::Eat)
    }

    pub fn drop(&mut self, env: &mut GameEnv<'_>) -> Result<Refresh, ActionError> {
        self.perform(env, Verb::Drop)
    }

    fn prompt_choice(&mut self, env: &mut GameEnv<'_>, verb: Verb) -> Result<Choice, ActionError> {
        loop {
            let answers = valid_answers(&self.state().inventory, verb);
            match env.terminal().prompt(verb.question(), &answers) {
                Answer::Abort | Answer::Key(ESCAPE) => return Err(ActionError::Aborted),
                Answer::Key(LIST_ALL) => {
                    let knowledge = &self.state().knowledge;
                    let listing: Vec<(SlotIndex, String)> = candidates(&self.state().inventory, verb)
                        .into_iter()
                        .map(|(slot, item)| (slot, describe(item, knowledge)))
                        .collect();
                    env.terminal().list_items(&listing);
                }
                Answer::Key(key) if verb.extra() == Some(key) => return Ok(Choice::Extra),
                Answer::Key(key) => {
                    return SlotIndex::from_letter(key)
                        .map(Choice::Slot)
                        .ok_or(ActionError::Aborted);
                }
            }
        }
    }

    fn perform_on(
        &mut self,
        env: &mut GameEnv<'_>,
        verb: Verb,
        slot: SlotIndex,
    ) -> Result<Refresh, ActionError> {
        let Some(item) = self.state().inventory.get(slot) else {
            return Err(ActionError::NoSuchItem(slot));
        };
        if verb == Verb::Drop {
            return Ok(self.drop_object(env, slot)?);
        }
        if !accepts(verb, item.kind) {
            return Err(ActionError::WrongCategory { slot, verb });
        }

        match item.kind.category() {
            UseCategory::Wieldable => self.equip_weapon(slot, item),
            UseCategory::Wearable if item.kind.is_ring() => {
                env.message("Your ring works while you carry it");
                Ok(Refresh::NONE)
            }
            UseCategory::Wearable => self.equip_armor(slot, item),
            UseCategory::Quaffable => Ok(self.consume_potion(env, slot, item)),
            UseCategory::Readable => Ok(self.consume_reading(env, slot, item)),
            UseCategory::Edible => {
                self.state_mut().inventory.take(slot);
                Ok(self.eat_cookie(env))
            }
            UseCategory::DropOnly => Err(ActionError::WrongCategory { slot, verb }),
        }
    }

    fn perform_extra(&mut self, env: &mut GameEnv<'_>, verb: Verb) -> Result<Refresh, ActionError> {
        match verb {
            Verb::Wield => {
                self.state_mut().equipment.clear(EquipSlot::Wield);
                self.recalc();
                env.message("You unwield your weapon");
                Ok(Refresh::STATUS)
            }
            Verb::Drop => self.drop_gold(env),
            _ => Err(ActionError::Aborted),
        }
    }

    fn equip_weapon(&mut self, slot: SlotIndex, item: Item) -> Result<Refresh, ActionError> {
        if item.profile().two_handed && self.state().equipment.shield.is_some() {
            return Err(Conflict::ShieldBlocksTwoHanded.into());
        }
        self.state_mut().equipment.assign(EquipSlot::Wield, slot);
        self.recalc();
        tracing::debug!(slot = %slot.letter(), kind = ?item.kind, "wielded");
        Ok(Refresh::STATUS)
    }

    fn equip_armor(&mut self, slot: SlotIndex, item: Item) -> Result<Refresh, ActionError> {
        let equipment = self.state().equipment;
        let which = if item.kind == ItemKind::Shield {
            if equipment.shield.is_some() {
                return Err(Conflict::AlreadyShielded.into());
            }
            let two_handed = self
                .state()
                .equipped(EquipSlot::Wield)
                .is_some_and(|weapon| weapon.profile().two_handed);
            if two_handed {
                return Err(Conflict::TwoHandedBlocksShield.into());
            }
            EquipSlot::Shield
        } else {
            if equipment.wear.is_some() {
                return Err(Conflict::AlreadyArmored.into());
            }
            EquipSlot::Wear
        };

        self.state_mut().equipment.assign(which, slot);
        self.recalc();
        tracing::debug!(slot = %slot.letter(), kind = ?item.kind, "worn");
        Ok(Refresh::STATUS)
    }

    fn consume_potion(&mut self, env: &mut GameEnv<'_>, slot: SlotIndex, item: Item) -> Refresh {
        self.state_mut().inventory.take(slot);
        let Some(potion) = Potion::from_arg(item.arg) else {
            tracing::warn!(arg = item.arg, "unknown potion");
            env.message("This potion has no taste to it");
            return Refresh::NONE;
        };
        self.state_mut().knowledge.learn_potion(item.arg);
        env.message(&format!("You drink a magic potion of {}", potion.name()));
        self.quaff_potion(env, potion)
    }

    fn consume_reading(&mut self, env: &mut GameEnv<'_>, slot: SlotIndex, item: Item) -> Refresh {
        self.state_mut().inventory.take(slot);
        if item.kind == ItemKind::Book {
            return self.read_book(env);
        }
        let Some(scroll) = Scroll::from_arg(item.arg) else {
            tracing::warn!(arg = item.arg, "unknown scroll");
            return Refresh::NONE;
        };
        self.state_mut().knowledge.learn_scroll(item.arg);
        env.message(&format!("You read a scroll of {}", scroll.name()));
        self.read_scroll(env, scroll)
    }

    fn drop_gold(&mut self, env: &mut GameEnv<'_>) -> Result<Refresh, ActionError> {
        if env.world().ground().is_some() {
            let err = InventoryError::GroundOccupied;
            env.message(&err.to_string());
            return Err(err.into());
        }
        let Some(amount) = env.terminal().prompt_number("How much gold do you drop? ") else {
            return Err(ActionError::Aborted);
        };
        if amount <= 0 {
            return Err(ActionError::Aborted);
        }
        let gold = self.state().attr(Attr::Gold);
        if amount > gold {
            return Err(ActionError::NotEnoughGold);
        }

        let amount_arg = i32::try_from(amount).unwrap_or(i32::MAX);
        self.set(Attr::Gold, gold - i64::from(amount_arg));
        env.world()
            .set_ground(Some(Item::new(ItemKind::GoldPile, amount_arg)));
        self.state_mut().turn.drop_flag = true;
        env.message(&format!("You drop {amount_arg} gold pieces"));
        Ok(Refresh::STATUS)
    }
}
