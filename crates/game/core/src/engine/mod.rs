//! Sequencing of every state mutation.
//!
//! [`GameEngine`] borrows the [`PlayerState`] for the length of one command
//! or one scheduler turn. Its methods are split by concern:
//!
//! - `experience`: level and experience changes, HP/spell maximums
//! - `inventory`: pickup, drop, enchantment adjustment, fullness test
//! - `scheduler`: per-turn regeneration and timed-effect countdown
//! - `effects`: enchanting, curse removal and theft
//!
//! Mutating methods return the display layers they invalidated as a
//! [`Refresh`]; callers union them and hand the result to [`GameEngine::flush`]
//! once, after the whole command has run.

mod effects;
mod experience;
mod inventory;
mod scheduler;

use crate::env::GameEnv;
use crate::state::{Attr, PlayerState, Refresh};
use crate::stats::{self, DerivedStats};

/// Mutating façade over one player's state.
pub struct GameEngine<'a> {
    state: &'a mut PlayerState,
}

impl<'a> GameEngine<'a> {
    pub fn new(state: &'a mut PlayerState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &PlayerState {
        self.state
    }

    /// Recomputes derived stats from current equipment and inventory.
    ///
    /// Safe to call at any time; exposed for equipment changes driven from
    /// outside the engine.
    pub fn recalc(&mut self) -> DerivedStats {
        stats::recalc(self.state)
    }

    /// Forwards accumulated refresh requests to the terminal.
    pub fn flush(&self, env: &mut GameEnv<'_>, refresh: Refresh) {
        if !refresh.is_empty() {
            env.terminal().refresh(refresh);
        }
    }

    pub(crate) fn state_mut(&mut self) -> &mut PlayerState {
        self.state
    }

    /// Applies a delta to any attribute, routing abilities through the floor.
    pub(crate) fn adjust(&mut self, attr: Attr, delta: i64) {
        self.state.attrs.adjust(attr, delta);
    }

    pub(crate) fn add(&mut self, attr: Attr, delta: i64) {
        self.state.attrs.add(attr, delta);
    }

    pub(crate) fn set(&mut self, attr: Attr, value: i64) {
        self.state.attrs.set(attr, value);
    }
}
