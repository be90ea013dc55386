//! What the player has identified: spells, scroll kinds, potion kinds.

use crate::config::GameConfig;

/// Three fixed-size known-flag arrays.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Knowledge {
    pub spells: [bool; GameConfig::SPELL_COUNT],
    pub scrolls: [bool; GameConfig::SCROLL_KINDS],
    pub potions: [bool; GameConfig::POTION_KINDS],
}

impl Knowledge {
    pub fn new() -> Self {
        Self {
            spells: [false; GameConfig::SPELL_COUNT],
            scrolls: [false; GameConfig::SCROLL_KINDS],
            potions: [false; GameConfig::POTION_KINDS],
        }
    }

    pub fn spell_known(&self, spell: usize) -> bool {
        self.spells.get(spell).copied().unwrap_or(false)
    }

    pub fn scroll_known(&self, arg: i32) -> bool {
        index(arg)
            .and_then(|i| self.scrolls.get(i).copied())
            .unwrap_or(false)
    }

    pub fn potion_known(&self, arg: i32) -> bool {
        index(arg)
            .and_then(|i| self.potions.get(i).copied())
            .unwrap_or(false)
    }

    pub fn learn_spell(&mut self, spell: usize) {
        if let Some(flag) = self.spells.get_mut(spell) {
            *flag = true;
        }
    }

    pub fn learn_scroll(&mut self, arg: i32) {
        if let Some(flag) = index(arg).and_then(|i| self.scrolls.get_mut(i)) {
            *flag = true;
        }
    }

    pub fn learn_potion(&mut self, arg: i32) {
        if let Some(flag) = index(arg).and_then(|i| self.potions.get_mut(i)) {
            *flag = true;
        }
    }

    /// Marks every spell, scroll and potion as known.
    pub fn learn_everything(&mut self) {
        self.spells = [true; GameConfig::SPELL_COUNT];
        self.scrolls = [true; GameConfig::SCROLL_KINDS];
        self.potions = [true; GameConfig::POTION_KINDS];
    }
}

impl Default for Knowledge {
    fn default() -> Self {
        Self::new()
    }
}

fn index(arg: i32) -> Option<usize> {
    usize::try_from(arg).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_arguments_are_ignored() {
        let mut knowledge = Knowledge::new();
        knowledge.learn_potion(-1);
        knowledge.learn_scroll(500);
        knowledge.learn_spell(GameConfig::SPELL_COUNT);
        assert_eq!(knowledge, Knowledge::new());
        assert!(!knowledge.potion_known(-1));
    }
}
