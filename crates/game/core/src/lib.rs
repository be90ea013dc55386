//! Deterministic player state-and-effect engine for a classic dungeon crawl.
//!
//! `cavern-core` owns the player's attribute store, slotted inventory and
//! equipment references, and exposes the pack verbs (wield, wear, read,
//! quaff, eat, drop), the per-turn scheduler and the cross-cutting effects
//! that touch them. All state mutation flows through [`engine::GameEngine`];
//! the dungeon, the screen and the dice are reached only through the
//! collaborator traits in [`env`].
pub mod action;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
#[cfg(feature = "serde")]
pub mod persist;
pub mod state;
pub mod stats;
pub mod testing;

pub use action::{ActionError, Conflict, InventoryError, SPELL_CODES, Verb};
pub use config::GameConfig;
pub use engine::GameEngine;
pub use env::{
    AbilityScores, Answer, ClassTemplate, ESCAPE, Env, GameEnv, PcgRng, RngOracle, StartingItem,
    Terminal, World, WorldEffect,
};
pub use error::{ErrorSeverity, GameError};
#[cfg(feature = "serde")]
pub use persist::{PersistError, SaveRecord, load_from, save_to};
pub use state::{
    Attr, Attributes, EquipSlot, Equipment, Inventory, Item, ItemKind, Knowledge, PlayerState,
    Potion, Refresh, Scroll, SlotIndex, TurnState, UseCategory, describe,
};
pub use stats::{DerivedStats, recalc};
