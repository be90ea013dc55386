//! Character class templates.
//!
//! A template carries everything needed to roll a fresh player: base
//! abilities, starting pools, starting pack with its equipment references,
//! and the spells known from the start. Content crates load templates from
//! data files; [`ClassTemplate::adventurer`] is the built-in default.

use crate::config::GameConfig;
use crate::state::{Attr, EquipSlot, Item, ItemKind, PlayerState, SlotIndex};
use crate::stats::recalc;

/// Base values for the six abilities.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AbilityScores {
    pub strength: i64,
    pub intelligence: i64,
    pub wisdom: i64,
    pub constitution: i64,
    pub dexterity: i64,
    pub charisma: i64,
}

impl AbilityScores {
    pub const fn uniform(value: i64) -> Self {
        Self {
            strength: value,
            intelligence: value,
            wisdom: value,
            constitution: value,
            dexterity: value,
            charisma: value,
        }
    }

    fn pairs(&self) -> [(Attr, i64); 6] {
        [
            (Attr::Strength, self.strength),
            (Attr::Intelligence, self.intelligence),
            (Attr::Wisdom, self.wisdom),
            (Attr::Constitution, self.constitution),
            (Attr::Dexterity, self.dexterity),
            (Attr::Charisma, self.charisma),
        ]
    }
}

impl Default for AbilityScores {
    fn default() -> Self {
        Self::uniform(12)
    }
}

/// One item of the starting pack, optionally equipped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StartingItem {
    pub kind: ItemKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub arg: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub equip: Option<EquipSlot>,
}

/// Character class template.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassTemplate {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub abilities: AbilityScores,
    pub hp: i64,
    pub spells: i64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub gold: i64,
    /// Packed into slots `a`, `b`, ... in order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub items: Vec<StartingItem>,
    /// Spell indices known from the start.
    #[cfg_attr(feature = "serde", serde(default))]
    pub known_spells: Vec<usize>,
}

impl ClassTemplate {
    /// Leather armor, a dagger and the protection spell.
    pub fn adventurer() -> Self {
        Self {
            name: "adventurer".to_string(),
            abilities: AbilityScores::default(),
            hp: 10,
            spells: 1,
            gold: 0,
            items: vec![
                StartingItem {
                    kind: ItemKind::Leather,
                    arg: 0,
                    equip: Some(EquipSlot::Wear),
                },
                StartingItem {
                    kind: ItemKind::Dagger,
                    arg: 0,
                    equip: Some(EquipSlot::Wield),
                },
            ],
            known_spells: vec![0],
        }
    }

    /// Rolls a level-1 player from this template.
    ///
    /// Items past the last inventory slot are ignored. Pickup side effects of
    /// starting items apply as if they had been picked up, and derived stats
    /// are resolved before the state is returned.
    pub fn to_player(&self, config: &GameConfig) -> PlayerState {
        let mut state = PlayerState::empty();
        let attrs = &mut state.attrs;

        for (attr, value) in self.abilities.pairs() {
            attrs.set(attr, value.max(GameConfig::ABILITY_FLOOR));
        }
        attrs.set(Attr::HpMax, self.hp.max(1));
        attrs.set(Attr::Hp, self.hp.max(1));
        attrs.set(Attr::SpellMax, self.spells.max(0));
        attrs.set(Attr::Spells, self.spells.max(0));
        attrs.set(Attr::Gold, self.gold.max(0));
        attrs.set(Attr::Level, 1);
        attrs.set(Attr::HardGame, config.difficulty);

        for (index, starting) in self.items.iter().enumerate() {
            let Some(slot) = SlotIndex::new(index) else {
                tracing::warn!(
                    class = %self.name,
                    dropped = self.items.len() - index,
                    "starting pack exceeds inventory slots"
                );
                break;
            };
            let item = Item::new(starting.kind, starting.arg);
            state.inventory.put(slot, item);
            state.apply_carry_effects(slot);
            if let Some(which) = starting.equip {
                state.equipment.assign(which, slot);
            }
        }

        for &spell in &self.known_spells {
            state.knowledge.learn_spell(spell);
        }

        recalc(&mut state);
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::EquipSlot;

    #[test]
    fn adventurer_starts_armed_and_armored() {
        let state = ClassTemplate::adventurer().to_player(&GameConfig::default());
        assert_eq!(state.level(), 1);
        assert_eq!(
            state.equipped(EquipSlot::Wear).map(|i| i.kind),
            Some(ItemKind::Leather)
        );
        assert_eq!(
            state.equipped(EquipSlot::Wield).map(|i| i.kind),
            Some(ItemKind::Dagger)
        );
        assert_eq!(state.attr(Attr::ArmorClass), 2);
        assert_eq!(state.attr(Attr::WeaponClass), 3);
        assert!(state.knowledge.spell_known(0));
    }

    #[test]
    fn difficulty_is_recorded() {
        let state = ClassTemplate::adventurer().to_player(&GameConfig::with_difficulty(3));
        assert_eq!(state.attr(Attr::HardGame), 3);
    }

    #[test]
    fn abilities_below_floor_are_raised() {
        let mut template = ClassTemplate::adventurer();
        template.abilities.wisdom = 1;
        let state = template.to_player(&GameConfig::default());
        assert_eq!(state.attr(Attr::Wisdom), GameConfig::ABILITY_FLOOR);
    }
}
