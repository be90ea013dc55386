//! What each potion does to the player.

use crate::engine::GameEngine;
use crate::env::{GameEnv, WorldEffect};
use crate::state::{Attr, Potion, Refresh};

impl<'a> GameEngine<'a> {
    /// Applies a potion's effect. The potion has already left the pack.
    pub fn quaff_potion(&mut self, env: &mut GameEnv<'_>, potion: Potion) -> Refresh {
        tracing::debug!(potion = potion.name(), "quaffed");
        match potion {
            Potion::Sleep => {
                env.message("You fall asleep. . .");
                let constitution = self.state().attr(Attr::Constitution);
                let turns = env.rng().rnd_i64(11) - (constitution >> 2) + 2;
                let mut refresh = Refresh::NONE;
                for _ in 0..turns.max(0) {
                    env.world().pass_turn();
                    refresh |= self.regen(env);
                }
                env.message("You wake up.");
                refresh
            }
            Potion::Healing => {
                let state = self.state();
                let (hp, max) = (state.attr(Attr::Hp), state.attr(Attr::HpMax));
                if hp == max {
                    self.raise_max_hp(1);
                } else {
                    let heal = env.rng().rnd_i64(20) + 20 + state.level();
                    self.set(Attr::Hp, (hp + heal).min(max));
                }
                env.message("You feel better");
                Refresh::STATUS
            }
            Potion::RaiseLevel => {
                let refresh = self.raise_level(env);
                self.raise_max_hp(1);
                env.message("Suddenly, you feel much more skillful!");
                refresh | Refresh::STATUS
            }
            Potion::IncreaseAbility => {
                let index = env.rng().rund(Attr::ABILITIES.len() as u32) as usize;
                self.adjust(Attr::ABILITIES[index], 1);
                env.message("You feel strange for a moment");
                Refresh::STATUS
            }
            Potion::Wisdom => {
                let gain = env.rng().rnd_i64(2);
                self.adjust(Attr::Wisdom, gain);
                env.message("You feel more self confident!");
                Refresh::STATUS
            }
            Potion::Strength => {
                if self.state().attr(Attr::Strength) < 12 {
                    self.set(Attr::Strength, 12);
                } else {
                    self.adjust(Attr::Strength, 1);
                }
                env.message("Wow!  You feel great!");
                Refresh::STATUS
            }
            Potion::Charisma => {
                self.adjust(Attr::Charisma, 1);
                env.message("Your charm went up by one!");
                Refresh::STATUS
            }
            Potion::Dizziness => {
                self.adjust(Attr::Strength, -1);
                env.message("You become dizzy!");
                Refresh::STATUS
            }
            Potion::Learning => {
                self.adjust(Attr::Intelligence, 1);
                env.message("Your intelligence went up by one!");
                Refresh::STATUS
            }
            Potion::GoldDetection => {
                env.message("You feel the presence of gold!");
                env.world().apply(WorldEffect::DetectGold);
                Refresh::NONE
            }
            Potion::MonsterDetection => {
                env.world().apply(WorldEffect::DetectMonsters);
                Refresh::NONE
            }
            Potion::Forgetfulness => {
                env.message("You stagger for a moment . .");
                env.world().apply(WorldEffect::ForgetMap);
                Refresh::NONE
            }
            Potion::Water => {
                env.message("This potion has no taste to it");
                Refresh::NONE
            }
            Potion::Blindness => {
                env.message("You can't see anything!");
                self.add(Attr::BlindCount, 500);
                Refresh::EFFECTS
            }
            Potion::Confusion => {
                env.message("You feel confused");
                let turns = 20 + env.rng().rnd_i64(9);
                self.add(Attr::Confuse, turns);
                Refresh::EFFECTS
            }
            Potion::Heroism => {
                env.message("WOW!!!  You feel Super-fantastic!!!");
                if !self.state().attrs.is_active(Attr::Hero) {
                    for attr in Attr::ABILITIES {
                        self.adjust(attr, 11);
                    }
                }
                self.add(Attr::Hero, 250);
                Refresh::BOTH
            }
            Potion::Sturdiness => {
                self.adjust(Attr::Constitution, 1);
                env.message("You have a greater intestinal constitude!");
                Refresh::STATUS
            }
            Potion::GiantStrength => {
                env.message("You now have incredibly bulging muscles!!!");
                if !self.state().attrs.is_active(Attr::GiantStr) {
                    self.add(Attr::StrExtra, 21);
                }
                self.add(Attr::GiantStr, 700);
                Refresh::BOTH
            }
            Potion::FireResistance => {
                env.message("You feel a chill run up your spine!");
                self.add(Attr::FireResistance, 1000);
                Refresh::EFFECTS
            }
            Potion::TreasureFinding => {
                env.message("You feel greedy . . .");
                env.world().apply(WorldEffect::DetectTreasure);
                Refresh::NONE
            }
            Potion::InstantHealing => {
                let max = self.state().attr(Attr::HpMax);
                self.set(Attr::Hp, max);
                Refresh::STATUS
            }
            Potion::CureDianthroritis => {
                env.message("You don't seem to be affected");
                Refresh::NONE
            }
            Potion::Poison => {
                env.message("You feel a sickness engulf you");
                let turns = 200 + env.rng().rnd_i64(200);
                self.add(Attr::HalfDamage, turns);
                Refresh::EFFECTS
            }
            Potion::SeeInvisible => {
                env.message("You feel your vision sharpen");
                let turns = env.rng().rnd_i64(1000) + 400;
                self.add(Attr::SeeInvisible, turns);
                env.world().apply(WorldEffect::SeeInvisible(true));
                Refresh::EFFECTS
            }
        }
    }
}
