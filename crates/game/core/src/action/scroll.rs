//! Reading scrolls and books, eating cookies.

use crate::engine::GameEngine;
use crate::env::{GameEnv, WorldEffect};
use crate::state::{Attr, ItemKind, Refresh, Scroll};

/// Three-letter spell codes, indexed by spell number.
pub const SPELL_CODES: [&str; 38] = [
    "pro", "mle", "dex", "sle", "chm", "ssp", "web", "str", "enl", "hel", "cbl", "cre", "pha",
    "inv", "bal", "cld", "ply", "can", "has", "ckl", "vpr", "dry", "lit", "drl", "glo", "flo",
    "fgr", "sca", "hld", "stp", "tel", "mfi", "sph", "gen", "sum", "wtw", "alt", "per",
];

/// Highest spell a book can teach, by dungeon depth.
const BOOK_SPELL_LIMIT: [usize; 15] = [1, 4, 9, 14, 18, 22, 26, 29, 32, 35, 37, 37, 37, 37, 37];

/// Timed effects whose remaining time spell extension doubles.
const EXTENDABLE: [Attr; 11] = [
    Attr::ProtectionTime,
    Attr::DexCount,
    Attr::StrCount,
    Attr::CharmCount,
    Attr::Invisibility,
    Attr::Cancellation,
    Attr::HasteSelf,
    Attr::Globe,
    Attr::ScareMonster,
    Attr::HoldMonster,
    Attr::TimeStop,
];

impl<'a> GameEngine<'a> {
    /// Applies a scroll's effect. The scroll has already left the pack.
    pub fn read_scroll(&mut self, env: &mut GameEnv<'_>, scroll: Scroll) -> Refresh {
        tracing::debug!(scroll = scroll.name(), "read");
        match scroll {
            Scroll::EnchantArmor => self.enchant_armor(env),
            Scroll::EnchantWeapon => self.enchant_weapon(env),
            Scroll::Enlightenment => self.world_effect(env, WorldEffect::Enlighten),
            Scroll::BlankPaper => Refresh::NONE,
            Scroll::CreateMonster => self.world_effect(env, WorldEffect::CreateMonster),
            Scroll::CreateArtifact => self.world_effect(env, WorldEffect::CreateArtifact),
            Scroll::AggravateMonsters => {
                self.add(Attr::Aggravate, 800);
                Refresh::EFFECTS
            }
            Scroll::TimeWarp => {
                let shift = env.rng().rnd_i64(1000) - 850;
                self.state_mut().turn.shift_clock(shift);
                let mobuls = (shift.abs() + 99) / 100;
                if shift >= 0 {
                    env.message(&format!("You went forward in time by {mobuls} mobuls"));
                } else {
                    env.message(&format!("You went backward in time by {mobuls} mobuls"));
                }
                self.adjust_time(shift);
                Refresh::BOTH
            }
            Scroll::Teleportation => self.world_effect(env, WorldEffect::Teleport),
            Scroll::ExpandedAwareness => {
                self.add(Attr::Awareness, 1800);
                Refresh::EFFECTS
            }
            Scroll::HasteMonsters => {
                let turns = env.rng().rnd_i64(55) + 12;
                self.add(Attr::HasteMonster, turns);
                Refresh::EFFECTS
            }
            Scroll::MonsterHealing => self.world_effect(env, WorldEffect::HealMonsters),
            Scroll::SpiritProtection => {
                let turns = 300 + env.rng().rnd_i64(200);
                self.add(Attr::SpiritPro, turns);
                Refresh::EFFECTS
            }
            Scroll::UndeadProtection => {
                let turns = 300 + env.rng().rnd_i64(200);
                self.add(Attr::UndeadPro, turns);
                Refresh::EFFECTS
            }
            Scroll::Stealth => {
                let turns = 250 + env.rng().rnd_i64(250);
                self.add(Attr::Stealth, turns);
                Refresh::EFFECTS
            }
            Scroll::MagicMapping => self.world_effect(env, WorldEffect::MagicMap),
            Scroll::HoldMonsters => {
                self.add(Attr::HoldMonster, 30);
                Refresh::EFFECTS
            }
            Scroll::GemPerfection => {
                for slot in crate::state::SlotIndex::all() {
                    if let Some(item) = self.state_mut().inventory.get_mut(slot) {
                        if item.kind.is_gem() {
                            item.arg = item.arg.saturating_mul(2).min(255);
                        }
                    }
                }
                Refresh::NONE
            }
            Scroll::SpellExtension => {
                for attr in EXTENDABLE {
                    let remaining = self.state().attr(attr);
                    self.set(attr, remaining * 2);
                }
                Refresh::EFFECTS
            }
            Scroll::Identify => {
                let state = self.state_mut();
                for (_, item) in state.inventory.iter() {
                    match item.kind {
                        ItemKind::Potion => state.knowledge.learn_potion(item.arg),
                        ItemKind::Scroll => state.knowledge.learn_scroll(item.arg),
                        _ => {}
                    }
                }
                Refresh::NONE
            }
            Scroll::RemoveCurse => self.remove_curse(),
            Scroll::Annihilation => self.world_effect(env, WorldEffect::Annihilate),
            Scroll::Pulverization => self.world_effect(env, WorldEffect::Pulverize),
            Scroll::LifeProtection => {
                self.add(Attr::LifeProtection, 1);
                Refresh::NONE
            }
        }
    }

    /// Learns a spell suited to the current depth, and maybe gets cleverer.
    pub fn read_book(&mut self, env: &mut GameEnv<'_>) -> Refresh {
        let depth = env.world().depth().min(BOOK_SPELL_LIMIT.len() - 1);
        let limit = BOOK_SPELL_LIMIT[depth];
        let spell = if depth <= 3 {
            env.rng().rund(limit as u32) as usize
        } else {
            9 + env.rng().rnd(limit.saturating_sub(9).max(1) as u32) as usize
        };
        let spell = spell.min(SPELL_CODES.len() - 1);

        self.state_mut().knowledge.learn_spell(spell);
        tracing::debug!(spell = SPELL_CODES[spell], depth, "spell learned");
        env.message(&format!("Spell \"{}\" learned", SPELL_CODES[spell]));

        if env.rng().rnd(10) == 4 {
            env.message("Your int went up by one!");
            self.adjust(Attr::Intelligence, 1);
            return Refresh::STATUS;
        }
        Refresh::NONE
    }

    /// The cookie is eaten; its fortune, if any, is read out.
    pub fn eat_cookie(&mut self, env: &mut GameEnv<'_>) -> Refresh {
        env.message("The cookie was delicious.");
        if !self.state().is_blind() {
            if let Some(fortune) = env.world().fortune() {
                env.message("Inside you find a scrap of paper that says:");
                env.message(&fortune);
            }
        }
        Refresh::NONE
    }

    fn world_effect(&mut self, env: &mut GameEnv<'_>, effect: WorldEffect) -> Refresh {
        env.world().apply(effect);
        Refresh::NONE
    }
}
