//! Derived statistics and the static tables behind them.
//!
//! ```text
//! [ Attribute store + inventory + equipment ]
//!      ↓  recalc (pure, from scratch)
//! [ Derived stats: AC / WC / regen / energy / lance ]
//! ```
//!
//! Nothing in this module rolls dice or talks to collaborators. The engine
//! owns sequencing; these are the tables and formulas it consults.

pub mod derived;
pub mod experience;
pub mod timed;

pub use derived::{DerivedStats, recalc};
pub use experience::{EXPERIENCE_TABLE, GUARDIAN_DURATION, guardian_buffs, threshold};
pub use timed::{Expiry, TIMED_EFFECTS, TimedEffect};
