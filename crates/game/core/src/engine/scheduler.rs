//! Per-turn bookkeeping: clock, regeneration and timed effects.

use crate::env::{GameEnv, WorldEffect};
use crate::state::{Attr, EquipSlot, Refresh};
use crate::stats::{self, Expiry, TIMED_EFFECTS, TimedEffect};

use super::GameEngine;

impl<'a> GameEngine<'a> {
    /// Runs the scheduler once and flushes its refresh requests.
    pub fn end_turn(&mut self, env: &mut GameEnv<'_>) -> Refresh {
        let refresh = self.regen(env);
        self.flush(env, refresh);
        refresh
    }

    /// One scheduler step. Call exactly once per completed player turn.
    ///
    /// While time is stopped only the time-stop counter moves. Otherwise the
    /// clock advances (every other call while hasted), HP and spell points
    /// regenerate, every active timed effect counts down and fires its expiry
    /// on the step that reaches zero, and the itching and clumsiness checks
    /// roll.
    pub fn regen(&mut self, env: &mut GameEnv<'_>) -> Refresh {
        let attrs = &mut self.state.attrs;
        if attrs.is_active(Attr::TimeStop) {
            if attrs.tick_down(Attr::TimeStop) {
                tracing::debug!("time resumes");
                stats::recalc(self.state);
                return Refresh::BOTH;
            }
            return Refresh::NONE;
        }

        let mut refresh = Refresh::NONE;
        if attrs.enforce_ability_floor() {
            refresh |= Refresh::STATUS;
        }

        self.advance_clock();
        refresh |= self.regenerate_hp();
        refresh |= self.regenerate_spells();

        for effect in &TIMED_EFFECTS {
            refresh |= self.tick_effect(env, effect);
        }

        refresh |= self.itch(env);
        refresh |= self.fumble(env);
        refresh
    }

    /// Moves every active timed effect `turns` steps at once.
    ///
    /// A counter that would reach zero or below stops at 1, so the next
    /// ordinary scheduler step runs its expiry. Negative `turns` extends
    /// effects.
    pub fn adjust_time(&mut self, turns: i64) {
        let attrs = &mut self.state.attrs;
        for effect in &TIMED_EFFECTS {
            if !attrs.is_active(effect.attr) {
                continue;
            }
            let remaining = attrs.get(effect.attr) - turns;
            attrs.set(effect.attr, remaining.max(1));
        }
    }

    fn advance_clock(&mut self) {
        let turn = &mut self.state.turn;
        if self.state.attrs.is_active(Attr::HasteSelf) {
            turn.haste_step = !turn.haste_step;
            if turn.haste_step {
                return;
            }
        } else {
            turn.haste_step = false;
        }
        turn.clock += 1;
        self.state.attrs.add(Attr::MovesMade, 1);
    }

    /// The countdown is checked before it is decremented: it heals on the
    /// step where it was already at or below zero, then resets.
    fn regenerate_hp(&mut self) -> Refresh {
        let attrs = &mut self.state.attrs;
        if attrs.get(Attr::Hp) >= attrs.get(Attr::HpMax) {
            return Refresh::NONE;
        }
        let counter = attrs.get(Attr::RegenCounter);
        attrs.set(Attr::RegenCounter, counter - 1);
        if counter > 0 {
            return Refresh::NONE;
        }

        let reset = 22 + 2 * attrs.get(Attr::HardGame) - attrs.get(Attr::Level);
        attrs.set(Attr::RegenCounter, reset);
        let healed = (attrs.get(Attr::Hp) + attrs.get(Attr::Regen)).min(attrs.get(Attr::HpMax));
        attrs.set(Attr::Hp, healed);
        Refresh::STATUS
    }

    fn regenerate_spells(&mut self) -> Refresh {
        let attrs = &mut self.state.attrs;
        if attrs.get(Attr::Spells) >= attrs.get(Attr::SpellMax) {
            return Refresh::NONE;
        }
        let counter = attrs.get(Attr::EnergyCounter);
        attrs.set(Attr::EnergyCounter, counter - 1);
        if counter > 0 {
            return Refresh::NONE;
        }

        let reset = 100
            + 4 * (attrs.get(Attr::HardGame) - attrs.get(Attr::Level) - attrs.get(Attr::Energy));
        attrs.set(Attr::EnergyCounter, reset);
        attrs.add(Attr::Spells, 1);
        Refresh::STATUS
    }

    fn tick_effect(&mut self, env: &mut GameEnv<'_>, effect: &TimedEffect) -> Refresh {
        let attrs = &mut self.state.attrs;
        if !attrs.is_active(effect.attr) {
            return Refresh::NONE;
        }
        let expired = attrs.tick_down(effect.attr);
        if effect.attr == Attr::Awareness && attrs.is_active(Attr::Orb) {
            // the orb of enlightenment holds awareness where it is
            attrs.add(Attr::Awareness, 1);
            return Refresh::NONE;
        }
        if !expired {
            return Refresh::NONE;
        }

        tracing::trace!(effect = effect.attr.name(), "timed effect expired");
        match effect.expiry {
            Expiry::Quiet => {}
            Expiry::Abilities(delta) => {
                for attr in Attr::ABILITIES {
                    self.adjust(attr, delta);
                }
            }
            Expiry::Adjust(attr, delta) => self.adjust(attr, delta),
            Expiry::Message(text) => env.message(text),
            Expiry::SeeInvisible(text) => {
                env.message(text);
                env.world().apply(WorldEffect::SeeInvisible(false));
            }
        }
        if effect.refresh.contains(Refresh::STATUS) {
            stats::recalc(self.state);
        }
        effect.refresh
    }

    /// Itching may strip armor and shield while it is still running.
    fn itch(&mut self, env: &mut GameEnv<'_>) -> Refresh {
        let state = &mut *self.state;
        if !state.attrs.is_active(Attr::Itching) {
            return Refresh::NONE;
        }
        let equipment = &mut state.equipment;
        if equipment.wear.is_none() && equipment.shield.is_none() {
            return Refresh::NONE;
        }
        if env.rng().rnd(100) >= env.config().itch_strip_chance {
            return Refresh::NONE;
        }

        equipment.clear(EquipSlot::Wear);
        equipment.clear(EquipSlot::Shield);
        tracing::debug!("itching stripped armor");
        env.message("The hysteria of itching forces you to remove your armor!");
        stats::recalc(state);
        Refresh::STATUS
    }

    /// Clumsiness may make the player drop the wielded item onto a clear tile.
    fn fumble(&mut self, env: &mut GameEnv<'_>) -> Refresh {
        if !self.state.attrs.is_active(Attr::Clumsiness) {
            return Refresh::NONE;
        }
        let Some(slot) = self.state.equipment.wield else {
            return Refresh::NONE;
        };
        if env.world().ground().is_some() {
            return Refresh::NONE;
        }
        if env.rng().rnd(100) >= env.config().clumsy_drop_chance {
            return Refresh::NONE;
        }

        tracing::debug!(slot = %slot.letter(), "clumsiness forced a drop");
        match self.drop_object(env, slot) {
            Ok(refresh) => refresh,
            Err(err) => {
                tracing::debug!(%err, "forced drop refused");
                Refresh::NONE
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::GameConfig;
    use crate::engine::GameEngine;
    use crate::env::{ClassTemplate, Env, WorldEffect};
    use crate::state::{Attr, EquipSlot, PlayerState, Refresh};
    use crate::testing::{ScriptedTerminal, SequenceRng, TestWorld};

    fn player() -> PlayerState {
        ClassTemplate::adventurer().to_player(&GameConfig::default())
    }

    #[test]
    fn time_stop_freezes_everything_else() {
        let mut state = player();
        state.attrs.set(Attr::TimeStop, 2);
        state.attrs.set(Attr::Confuse, 5);
        let (mut world, mut terminal, mut rng) =
            (TestWorld::new(), ScriptedTerminal::new(), SequenceRng::repeating(0));
        let config = GameConfig::default();
        let mut env = Env::new(&mut world, &mut terminal, &mut rng, &config).into_game_env();

        let mut engine = GameEngine::new(&mut state);
        assert_eq!(engine.regen(&mut env), Refresh::NONE);
        assert_eq!(engine.regen(&mut env), Refresh::BOTH);
        assert_eq!(state.attr(Attr::Confuse), 5);
        assert_eq!(state.turn.clock, 0);
    }

    #[test]
    fn haste_advances_clock_every_other_turn() {
        let mut state = player();
        state.attrs.set(Attr::HasteSelf, 100);
        let (mut world, mut terminal, mut rng) =
            (TestWorld::new(), ScriptedTerminal::new(), SequenceRng::repeating(0));
        let config = GameConfig::default();
        let mut env = Env::new(&mut world, &mut terminal, &mut rng, &config).into_game_env();

        let mut engine = GameEngine::new(&mut state);
        for _ in 0..10 {
            engine.regen(&mut env);
        }
        assert_eq!(state.turn.clock, 5);
    }

    #[test]
    fn hp_regenerates_when_countdown_runs_out() {
        let mut state = player();
        state.attrs.set(Attr::Hp, 4);
        state.attrs.set(Attr::RegenCounter, 1);
        let (mut world, mut terminal, mut rng) =
            (TestWorld::new(), ScriptedTerminal::new(), SequenceRng::repeating(0));
        let config = GameConfig::default();
        let mut env = Env::new(&mut world, &mut terminal, &mut rng, &config).into_game_env();

        let mut engine = GameEngine::new(&mut state);
        engine.regen(&mut env);
        assert_eq!(engine.state().attr(Attr::Hp), 4);
        engine.regen(&mut env);
        assert_eq!(engine.state().attr(Attr::Hp), 5);
        // 22 + 2 * 0 - 1
        assert_eq!(state.attr(Attr::RegenCounter), 21);
    }

    #[test]
    fn spell_points_regenerate_with_energy_formula() {
        let mut state = player();
        state.attrs.set(Attr::Spells, 0);
        state.attrs.set(Attr::EnergyCounter, 0);
        let (mut world, mut terminal, mut rng) =
            (TestWorld::new(), ScriptedTerminal::new(), SequenceRng::repeating(0));
        let config = GameConfig::default();
        let mut env = Env::new(&mut world, &mut terminal, &mut rng, &config).into_game_env();

        GameEngine::new(&mut state).regen(&mut env);
        assert_eq!(state.attr(Attr::Spells), 1);
        assert_eq!(state.attr(Attr::EnergyCounter), 100 + 4 * (0 - 1 - 0));
    }

    #[test]
    fn hero_expiry_reverts_abilities_and_requests_status() {
        let mut state = player();
        for attr in Attr::ABILITIES {
            state.attrs.add(attr, 11);
        }
        state.attrs.set(Attr::Hero, 1);
        let (mut world, mut terminal, mut rng) =
            (TestWorld::new(), ScriptedTerminal::new(), SequenceRng::repeating(0));
        let config = GameConfig::default();
        let mut env = Env::new(&mut world, &mut terminal, &mut rng, &config).into_game_env();

        let refresh = GameEngine::new(&mut state).regen(&mut env);
        assert!(refresh.contains(Refresh::STATUS));
        for attr in Attr::ABILITIES {
            assert_eq!(state.attr(attr), 13);
        }
    }

    #[test]
    fn globe_expiry_removes_defense_and_refreshes_both() {
        let mut state = player();
        state.attrs.set(Attr::MoreDefenses, 10);
        state.attrs.set(Attr::Globe, 1);
        let (mut world, mut terminal, mut rng) =
            (TestWorld::new(), ScriptedTerminal::new(), SequenceRng::repeating(0));
        let config = GameConfig::default();
        let mut env = Env::new(&mut world, &mut terminal, &mut rng, &config).into_game_env();

        let refresh = GameEngine::new(&mut state).regen(&mut env);
        assert_eq!(refresh, Refresh::BOTH);
        assert_eq!(state.attr(Attr::MoreDefenses), 0);
        assert_eq!(state.attr(Attr::ArmorClass), 2);
    }

    #[test]
    fn see_invisible_expiry_tells_the_world() {
        let mut state = player();
        state.attrs.set(Attr::SeeInvisible, 1);
        let (mut world, mut terminal, mut rng) =
            (TestWorld::new(), ScriptedTerminal::new(), SequenceRng::repeating(0));
        let config = GameConfig::default();
        let mut env = Env::new(&mut world, &mut terminal, &mut rng, &config).into_game_env();

        GameEngine::new(&mut state).regen(&mut env);
        assert_eq!(world.effects, vec![WorldEffect::SeeInvisible(false)]);
        assert_eq!(
            terminal.last_message(),
            Some("You feel your vision return to normal")
        );
    }

    #[test]
    fn awareness_holds_while_orb_is_carried() {
        let mut state = player();
        state.attrs.set(Attr::Awareness, 3);
        state.attrs.set(Attr::Orb, 1);
        let (mut world, mut terminal, mut rng) =
            (TestWorld::new(), ScriptedTerminal::new(), SequenceRng::repeating(0));
        let config = GameConfig::default();
        let mut env = Env::new(&mut world, &mut terminal, &mut rng, &config).into_game_env();

        let mut engine = GameEngine::new(&mut state);
        for _ in 0..10 {
            engine.regen(&mut env);
        }
        assert_eq!(state.attr(Attr::Awareness), 3);
    }

    #[test]
    fn adjust_time_clamps_crossing_counters_to_one() {
        let mut state = player();
        state.attrs.set(Attr::Confuse, 5);
        state.attrs.set(Attr::Stealth, 500);
        let mut engine = GameEngine::new(&mut state);
        engine.adjust_time(100);
        assert_eq!(engine.state().attr(Attr::Confuse), 1);
        assert_eq!(engine.state().attr(Attr::Stealth), 400);
    }

    #[test]
    fn itching_strips_armor_only_on_a_low_roll() {
        let mut state = player();
        state.attrs.set(Attr::Itching, 10);
        let (mut world, mut terminal) = (TestWorld::new(), ScriptedTerminal::new());
        let config = GameConfig::default();

        // rnd(100) = 50: no strip
        let mut high = SequenceRng::repeating(49);
        {
            let mut env = Env::new(&mut world, &mut terminal, &mut high, &config).into_game_env();
            GameEngine::new(&mut state).regen(&mut env);
        }
        assert!(state.equipment.get(EquipSlot::Wear).is_some());

        // rnd(100) = 1: strip
        let mut low = SequenceRng::repeating(0);
        let mut env = Env::new(&mut world, &mut terminal, &mut low, &config).into_game_env();
        GameEngine::new(&mut state).regen(&mut env);
        assert_eq!(state.equipment.wear, None);
        assert_eq!(state.attr(Attr::ArmorClass), 0);
    }

    #[test]
    fn clumsiness_chance_comes_from_the_config() {
        let mut state = player();
        state.attrs.set(Attr::Clumsiness, 10);
        let (mut world, mut terminal, mut rng) =
            (TestWorld::new(), ScriptedTerminal::new(), SequenceRng::repeating(0));
        let config = GameConfig {
            clumsy_drop_chance: 0,
            ..GameConfig::default()
        };
        let mut env = Env::new(&mut world, &mut terminal, &mut rng, &config).into_game_env();

        GameEngine::new(&mut state).regen(&mut env);
        assert!(state.equipment.wield.is_some());
        assert_eq!(world.ground, None);
    }

    #[test]
    fn itching_strips_while_running_but_not_on_the_turn_it_wears_off() {
        let config = GameConfig::default();
        for (itching, stripped) in [(2, true), (1, false)] {
            let mut state = player();
            state.attrs.set(Attr::Itching, itching);
            let (mut world, mut terminal, mut rng) =
                (TestWorld::new(), ScriptedTerminal::new(), SequenceRng::repeating(0));
            let mut env = Env::new(&mut world, &mut terminal, &mut rng, &config).into_game_env();

            GameEngine::new(&mut state).regen(&mut env);
            assert_eq!(state.equipment.wear.is_none(), stripped, "itching {itching}");
            assert_eq!(
                terminal.saw_message("You now feel the irritation subside!"),
                !stripped
            );
        }
    }
}
