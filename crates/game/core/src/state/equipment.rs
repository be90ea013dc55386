//! Equipment references.
//!
//! Equipment does not own items: each reference names an inventory slot.
//! A slot may be referenced by at most one category at a time.

use super::inventory::SlotIndex;

/// The three equipment categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EquipSlot {
    Wield,
    Wear,
    Shield,
}

impl EquipSlot {
    pub const ALL: [EquipSlot; 3] = [EquipSlot::Wield, EquipSlot::Wear, EquipSlot::Shield];
}

/// Wielded, worn-armor and worn-shield references.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Equipment {
    pub wield: Option<SlotIndex>,
    pub wear: Option<SlotIndex>,
    pub shield: Option<SlotIndex>,
}

impl Equipment {
    /// Creates empty equipment.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, which: EquipSlot) -> Option<SlotIndex> {
        match which {
            EquipSlot::Wield => self.wield,
            EquipSlot::Wear => self.wear,
            EquipSlot::Shield => self.shield,
        }
    }

    fn get_mut(&mut self, which: EquipSlot) -> &mut Option<SlotIndex> {
        match which {
            EquipSlot::Wield => &mut self.wield,
            EquipSlot::Wear => &mut self.wear,
            EquipSlot::Shield => &mut self.shield,
        }
    }

    /// Points `which` at `slot`, clearing any other category that referenced
    /// the same slot. Returns the previous reference of `which`.
    pub fn assign(&mut self, which: EquipSlot, slot: SlotIndex) -> Option<SlotIndex> {
        for other in EquipSlot::ALL {
            if other != which && self.get(other) == Some(slot) {
                *self.get_mut(other) = None;
            }
        }
        self.get_mut(which).replace(slot)
    }

    /// Clears one category. Returns its previous reference.
    pub fn clear(&mut self, which: EquipSlot) -> Option<SlotIndex> {
        self.get_mut(which).take()
    }

    /// Clears every reference pointing at `slot`. Returns true if any did.
    pub fn release(&mut self, slot: SlotIndex) -> bool {
        let mut released = false;
        for which in EquipSlot::ALL {
            if self.get(which) == Some(slot) {
                *self.get_mut(which) = None;
                released = true;
            }
        }
        released
    }

    pub fn is_equipped(&self, slot: SlotIndex) -> bool {
        EquipSlot::ALL
            .iter()
            .any(|which| self.get(*which) == Some(slot))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(index: usize) -> SlotIndex {
        SlotIndex::new(index).unwrap()
    }

    #[test]
    fn assign_clears_other_categories_on_same_slot() {
        for from in EquipSlot::ALL {
            for to in EquipSlot::ALL {
                let mut equipment = Equipment::empty();
                equipment.assign(from, slot(4));
                equipment.assign(to, slot(4));
                assert_eq!(equipment.get(to), Some(slot(4)));
                for other in EquipSlot::ALL.into_iter().filter(|w| *w != to) {
                    assert_eq!(equipment.get(other), None, "{from:?} -> {to:?}");
                }
            }
        }
    }

    #[test]
    fn assign_keeps_unrelated_references() {
        let mut equipment = Equipment::empty();
        equipment.assign(EquipSlot::Wear, slot(1));
        equipment.assign(EquipSlot::Wield, slot(2));
        assert_eq!(equipment.wear, Some(slot(1)));
        assert_eq!(equipment.wield, Some(slot(2)));
    }

    #[test]
    fn release_clears_every_reference_to_slot() {
        let mut equipment = Equipment {
            wield: Some(slot(3)),
            wear: Some(slot(5)),
            shield: None,
        };
        assert!(equipment.release(slot(3)));
        assert_eq!(equipment.wield, None);
        assert_eq!(equipment.wear, Some(slot(5)));
        assert!(!equipment.release(slot(9)));
    }
}
