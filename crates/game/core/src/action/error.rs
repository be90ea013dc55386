//! Player-command errors.
//!
//! Every variant is narrative: the engine reports it to the player (its
//! `Display` text is the message shown) and leaves state untouched.

use crate::error::{ErrorSeverity, GameError};
use crate::state::SlotIndex;

use super::Verb;

/// Inventory primitive failures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InventoryError {
    /// No free slot within the pickup bound; the item stays where it was.
    #[error("You can't carry anything else")]
    CapacityExceeded,

    #[error("You don't have item {}!", .0.letter())]
    NothingToDrop(SlotIndex),

    /// The tile already holds something other than a pit.
    #[error("There's something here already")]
    GroundOccupied,

    /// Nothing may be left on the home-entrance tile. Not announced.
    #[error("cannot drop items on the home entrance")]
    HomeEntrance,
}

impl InventoryError {
    /// True when the player is not told about the refusal.
    pub const fn is_silent(&self) -> bool {
        matches!(self, Self::HomeEntrance)
    }
}

impl GameError for InventoryError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::CapacityExceeded | Self::GroundOccupied | Self::HomeEntrance => {
                ErrorSeverity::Recoverable
            }
            Self::NothingToDrop(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::CapacityExceeded => "INVENTORY_CAPACITY_EXCEEDED",
            Self::NothingToDrop(_) => "INVENTORY_NOTHING_TO_DROP",
            Self::GroundOccupied => "INVENTORY_GROUND_OCCUPIED",
            Self::HomeEntrance => "INVENTORY_HOME_ENTRANCE",
        }
    }
}

/// Why an equip request was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Conflict {
    #[error("But one arm is busy with your shield!")]
    ShieldBlocksTwoHanded,

    #[error("Your hands are busy with the two handed sword!")]
    TwoHandedBlocksShield,

    #[error("You're already wearing some armor")]
    AlreadyArmored,

    #[error("You are already wearing a shield")]
    AlreadyShielded,
}

/// Failures of the user-facing verbs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionError {
    /// The player escaped out of the prompt.
    #[error("never mind")]
    Aborted,

    #[error("You don't have item {}!", .0.letter())]
    NoSuchItem(SlotIndex),

    #[error("You can't {} item {}!", .verb.as_str(), .slot.letter())]
    WrongCategory { slot: SlotIndex, verb: Verb },

    #[error(transparent)]
    Conflict(#[from] Conflict),

    #[error("You don't have that much!")]
    NotEnoughGold,

    #[error(transparent)]
    Inventory(#[from] InventoryError),
}

impl ActionError {
    /// True when nothing should be printed for this error.
    pub const fn is_silent(&self) -> bool {
        match self {
            Self::Aborted => true,
            Self::Inventory(inner) => inner.is_silent(),
            _ => false,
        }
    }
}

impl GameError for ActionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Aborted => ErrorSeverity::Recoverable,
            Self::NoSuchItem(_) | Self::WrongCategory { .. } | Self::NotEnoughGold => {
                ErrorSeverity::Validation
            }
            Self::Conflict(_) => ErrorSeverity::Validation,
            Self::Inventory(inner) => inner.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Aborted => "ACTION_ABORTED",
            Self::NoSuchItem(_) => "ACTION_NO_SUCH_ITEM",
            Self::WrongCategory { .. } => "ACTION_WRONG_CATEGORY",
            Self::Conflict(_) => "ACTION_CONFLICT",
            Self::NotEnoughGold => "ACTION_NOT_ENOUGH_GOLD",
            Self::Inventory(inner) => inner.error_code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_slot_letter() {
        let slot = SlotIndex::new(2).unwrap();
        assert_eq!(
            InventoryError::NothingToDrop(slot).to_string(),
            "You don't have item c!"
        );
        assert_eq!(
            ActionError::WrongCategory {
                slot,
                verb: Verb::Quaff
            }
            .to_string(),
            "You can't quaff item c!"
        );
    }

    #[test]
    fn conflicts_pass_their_text_through() {
        let err = ActionError::from(Conflict::TwoHandedBlocksShield);
        assert_eq!(
            err.to_string(),
            "Your hands are busy with the two handed sword!"
        );
        assert_eq!(err.severity(), ErrorSeverity::Validation);
    }

    #[test]
    fn home_entrance_is_silent() {
        assert!(ActionError::from(InventoryError::HomeEntrance).is_silent());
        assert!(!ActionError::NotEnoughGold.is_silent());
    }
}
