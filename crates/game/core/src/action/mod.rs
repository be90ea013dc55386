//! Player commands that touch the pack.
//!
//! Each verb prompts for an item, validates the answer against the use
//! category table and the equipment exclusivity rules, then mutates through
//! the inventory primitives. Item-use effects for potions, scrolls, books
//! and cookies live in their own modules.
mod category;
mod dispatch;
mod error;
mod potion;
mod scroll;

pub use category::{LIST_ALL, MAX_ANSWERS, accepts, candidates, valid_answers};
pub use error::{ActionError, Conflict, InventoryError};
pub use scroll::SPELL_CODES;

/// User-facing verbs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Verb {
    Wield,
    Wear,
    Read,
    Quaff,
    Eat,
    Drop,
}

impl Verb {
    pub const ALL: [Verb; 6] = [
        Verb::Wield,
        Verb::Wear,
        Verb::Read,
        Verb::Quaff,
        Verb::Eat,
        Verb::Drop,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Verb::Wield => "wield",
            Verb::Wear => "wear",
            Verb::Read => "read",
            Verb::Quaff => "quaff",
            Verb::Eat => "eat",
            Verb::Drop => "drop",
        }
    }

    /// Verb-specific answer beyond item letters: `-` unwields, `.` drops gold.
    pub const fn extra(&self) -> Option<char> {
        match self {
            Verb::Wield => Some('-'),
            Verb::Drop => Some('.'),
            _ => None,
        }
    }

    pub const fn question(&self) -> &'static str {
        match self {
            Verb::Wield => "What do you want to wield (- for nothing) [* for all] ?",
            Verb::Wear => "What do you want to wear? [* for all] ",
            Verb::Read => "What do you want to read [* for all] ?",
            Verb::Quaff => "What do you want to quaff [* for all] ?",
            Verb::Eat => "What do you want to eat [* for all] ?",
            Verb::Drop => "What do you want to drop [* for all] ?",
        }
    }
}
