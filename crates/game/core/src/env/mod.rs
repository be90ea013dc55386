//! Collaborators the engine talks to but does not own.
//!
//! The engine never renders, never generates dungeon levels and never rolls
//! its own dice. It reaches the outside through three traits: [`World`] for
//! the player's tile, [`Terminal`] for prompts and messages and
//! [`RngOracle`] for randomness. The [`Env`] aggregate bundles them with the
//! [`GameConfig`] so every engine call receives one argument.
mod classes;
mod rng;
mod terminal;
mod world;

pub use classes::{AbilityScores, ClassTemplate, StartingItem};
pub use rng::{PcgRng, RngOracle};
pub use terminal::{Answer, ESCAPE, Terminal};
pub use world::{World, WorldEffect};

use crate::config::GameConfig;

/// Aggregates the mutable collaborators required by the engine.
pub struct Env<'a, W, T, R>
where
    W: World + ?Sized,
    T: Terminal + ?Sized,
    R: RngOracle + ?Sized,
{
    world: &'a mut W,
    terminal: &'a mut T,
    rng: &'a mut R,
    config: &'a GameConfig,
}

pub type GameEnv<'a> = Env<'a, dyn World + 'a, dyn Terminal + 'a, dyn RngOracle + 'a>;

impl<'a, W, T, R> Env<'a, W, T, R>
where
    W: World + ?Sized,
    T: Terminal + ?Sized,
    R: RngOracle + ?Sized,
{
    pub fn new(
        world: &'a mut W,
        terminal: &'a mut T,
        rng: &'a mut R,
        config: &'a GameConfig,
    ) -> Self {
        Self {
            world,
            terminal,
            rng,
            config,
        }
    }

    pub fn world(&mut self) -> &mut W {
        self.world
    }

    pub fn terminal(&mut self) -> &mut T {
        self.terminal
    }

    pub fn rng(&mut self) -> &mut R {
        self.rng
    }

    pub fn config(&self) -> &'a GameConfig {
        self.config
    }

    /// Shorthand for a narrative message.
    pub fn message(&mut self, text: &str) {
        self.terminal.message(text);
    }
}

impl<'a, W, T, R> Env<'a, W, T, R>
where
    W: World + 'a,
    T: Terminal + 'a,
    R: RngOracle + 'a,
{
    /// Converts this environment into the trait-object based [`GameEnv`].
    pub fn into_game_env(self) -> GameEnv<'a> {
        let world: &'a mut dyn World = self.world;
        let terminal: &'a mut dyn Terminal = self.terminal;
        let rng: &'a mut dyn RngOracle = self.rng;
        Env::new(world, terminal, rng, self.config)
    }
}
