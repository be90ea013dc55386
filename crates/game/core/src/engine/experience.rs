//! Experience, level and pool maximums.
//!
//! Gaining and losing experience use deliberately different formulas: a
//! gain followed by an equal loss does not always land on the starting
//! level or HP.

use crate::config::GameConfig;
use crate::env::GameEnv;
use crate::state::{Attr, Refresh};
use crate::stats::{GUARDIAN_DURATION, guardian_buffs, threshold};

use super::GameEngine;

impl<'a> GameEngine<'a> {
    /// Constitution term bounding per-level HP changes.
    fn constitution_step(&self) -> i64 {
        (self.state.attr(Attr::Constitution) - self.state.attr(Attr::HardGame)) >> 1
    }

    /// Levels below this get an extra `CON / 4` HP per level.
    fn low_level_bound(&self) -> i64 {
        7 - self.state.attr(Attr::HardGame)
    }

    /// Adds experience and grants every level it pays for.
    pub fn raise_experience(&mut self, env: &mut GameEnv<'_>, amount: i64) -> Refresh {
        let before = self.state.level();
        self.state.attrs.add(Attr::Experience, amount);

        while self.state.attr(Attr::Experience) >= threshold(self.state.level())
            && self.state.level() < GameConfig::MAX_LEVEL
        {
            let step = self.constitution_step().max(1);
            let level = self.state.attrs.add(Attr::Level, 1);

            let hp = i64::from(env.rng().rnd(3)) + env.rng().rnd_i64(step);
            self.raise_max_hp(hp);
            let spells = i64::from(env.rng().rund(3));
            self.raise_max_spells(spells);
            if level < self.low_level_bound() {
                self.raise_max_hp(self.state.attr(Attr::Constitution) >> 2);
            }

            for &buff in guardian_buffs(level) {
                self.state.attrs.set(buff, GUARDIAN_DURATION);
            }
            if level == GameConfig::MAX_LEVEL {
                env.world().reveal_map();
                self.state.knowledge.learn_everything();
            }
        }

        let after = self.state.level();
        if after != before {
            tracing::debug!(from = before, to = after, "level gained");
            env.message(&format!("Welcome to level {after}"));
        }
        Refresh::STATUS
    }

    /// Removes experience (floored at zero) and takes back levels it no
    /// longer covers.
    pub fn lose_experience(&mut self, env: &mut GameEnv<'_>, amount: i64) -> Refresh {
        let before = self.state.level();
        let experience = (self.state.attr(Attr::Experience) - amount).max(0);
        self.state.attrs.set(Attr::Experience, experience);

        while self.state.level() > 1 && experience < threshold(self.state.level() - 1) {
            let step = self.constitution_step().max(1);
            let level = self.state.attrs.add(Attr::Level, -1);

            let hp = env.rng().rnd_i64(step);
            self.lose_max_hp(hp);
            if level < self.low_level_bound() {
                self.lose_max_hp(self.state.attr(Attr::Constitution) >> 2);
            }
            let spells = i64::from(env.rng().rund(3));
            self.lose_max_spells(spells);
        }

        let after = self.state.level();
        if after != before {
            tracing::debug!(from = before, to = after, "level lost");
            env.message(&format!("You went down to level {after}!"));
        }
        Refresh::STATUS
    }

    /// Gains exactly enough experience for the next level.
    pub fn raise_level(&mut self, env: &mut GameEnv<'_>) -> Refresh {
        let level = self.state.level();
        if level >= GameConfig::MAX_LEVEL {
            return Refresh::NONE;
        }
        let needed = threshold(level) - self.state.attr(Attr::Experience);
        self.raise_experience(env, needed)
    }

    /// Loses exactly enough experience to drop one level.
    pub fn lose_level(&mut self, env: &mut GameEnv<'_>) -> Refresh {
        let level = self.state.level();
        if level <= 1 {
            return Refresh::NONE;
        }
        let excess = self.state.attr(Attr::Experience) - threshold(level - 1) + 1;
        self.lose_experience(env, excess)
    }

    /// Raises maximum HP and current HP together.
    pub fn raise_max_hp(&mut self, amount: i64) {
        self.state.attrs.add(Attr::HpMax, amount);
        self.state.attrs.add(Attr::Hp, amount);
    }

    /// Lowers maximum HP and current HP together, neither below 1.
    pub fn lose_max_hp(&mut self, amount: i64) {
        let attrs = &mut self.state.attrs;
        attrs.set(Attr::Hp, (attrs.get(Attr::Hp) - amount).max(1));
        attrs.set(Attr::HpMax, (attrs.get(Attr::HpMax) - amount).max(1));
    }

    pub fn raise_max_spells(&mut self, amount: i64) {
        self.state.attrs.add(Attr::SpellMax, amount);
        self.state.attrs.add(Attr::Spells, amount);
    }

    /// Lowers maximum and current spell points together, neither below 0.
    pub fn lose_max_spells(&mut self, amount: i64) {
        let attrs = &mut self.state.attrs;
        attrs.set(Attr::Spells, (attrs.get(Attr::Spells) - amount).max(0));
        attrs.set(Attr::SpellMax, (attrs.get(Attr::SpellMax) - amount).max(0));
    }
}
