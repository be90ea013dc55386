//! Use-category checks and prompt answer sets.

use arrayvec::ArrayVec;

use crate::config::GameConfig;
use crate::env::ESCAPE;
use crate::state::{Inventory, Item, ItemKind, SlotIndex, UseCategory};

use super::Verb;

/// Wildcard answer that lists candidates instead of choosing one.
pub const LIST_ALL: char = '*';

/// Upper bound on a prompt's answer set: every letter plus the wildcard,
/// escape and one verb extra.
pub const MAX_ANSWERS: usize = GameConfig::INVENTORY_SLOTS + 3;

/// Whether `verb` can be applied to an item of `kind`. Anything can be
/// dropped.
pub fn accepts(verb: Verb, kind: ItemKind) -> bool {
    let category = kind.category();
    match verb {
        Verb::Wield => category == UseCategory::Wieldable,
        Verb::Wear => category == UseCategory::Wearable,
        Verb::Read => category == UseCategory::Readable,
        Verb::Quaff => category == UseCategory::Quaffable,
        Verb::Eat => category == UseCategory::Edible,
        Verb::Drop => true,
    }
}

/// Carried items the verb applies to, in slot order.
pub fn candidates(
    inventory: &Inventory,
    verb: Verb,
) -> ArrayVec<(SlotIndex, Item), { GameConfig::INVENTORY_SLOTS }> {
    inventory.filter(|item| accepts(verb, item.kind))
}

/// Answers the prompt offers for `verb`.
pub fn valid_answers(inventory: &Inventory, verb: Verb) -> ArrayVec<char, MAX_ANSWERS> {
    let mut answers: ArrayVec<char, MAX_ANSWERS> = candidates(inventory, verb)
        .iter()
        .map(|(slot, _)| slot.letter())
        .collect();
    answers.push(LIST_ALL);
    answers.push(ESCAPE);
    if let Some(extra) = verb.extra() {
        answers.push(extra);
    }
    answers
}
