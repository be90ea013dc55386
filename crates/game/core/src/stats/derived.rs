//! Equipment resolution: armor class, weapon class, regeneration, energy and
//! the lance flag.
//!
//! Always recomputed from scratch, never patched. Only [`recalc`] writes the
//! derived slots of the attribute store.

use crate::state::{Attr, Attributes, EquipSlot, ItemKind, PlayerState};

/// Derived combat statistics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DerivedStats {
    pub armor_class: i64,
    pub weapon_class: i64,
    /// HP healed per regeneration tick.
    pub regen: i64,
    /// Shortens the spell regeneration countdown.
    pub energy: i64,
    /// Wielding the lance of death.
    pub lance_death: bool,
}

impl DerivedStats {
    /// Resolves derived stats from the current state without writing them.
    ///
    /// - AC: defense bonus + worn armor (bonus + enchantment) + shield
    ///   (bonus + enchantment) + protection rings (enchantment + 1 each)
    /// - WC: wielded item (bonus + enchantment) + damage bonus + damage rings
    ///   (enchantment + 1) + belts (2 × enchantment + 2)
    /// - Regen: 1 + regeneration rings (enchantment + 1) + extra
    ///   regeneration rings (5 × (enchantment + 1))
    /// - Energy: energy rings (enchantment + 1)
    pub fn resolve(state: &PlayerState) -> Self {
        let attrs = &state.attrs;

        let mut armor_class = attrs.get(Attr::MoreDefenses);
        for which in [EquipSlot::Wear, EquipSlot::Shield] {
            if let Some(item) = state.equipped(which) {
                armor_class += item.profile().armor.unwrap_or(0) + i64::from(item.arg);
            }
        }

        let wielded = state.equipped(EquipSlot::Wield);
        let mut weapon_class = wielded
            .map(|item| item.profile().weapon.unwrap_or(0) + i64::from(item.arg))
            .unwrap_or(0)
            + attrs.get(Attr::MoreDamage);

        let mut regen = 1;
        let mut energy = 0;

        for (_, item) in state.inventory.iter() {
            let step = i64::from(item.arg) + 1;
            match item.kind {
                ItemKind::ProtectionRing => armor_class += step,
                ItemKind::DamageRing => weapon_class += step,
                ItemKind::Belt => weapon_class += 2 * step,
                ItemKind::RegenRing => regen += step,
                ItemKind::ExtraRegenRing => regen += 5 * step,
                ItemKind::EnergyRing => energy += step,
                _ => {}
            }
        }

        Self {
            armor_class,
            weapon_class,
            regen,
            energy,
            lance_death: wielded.is_some_and(|item| item.kind == ItemKind::Lance),
        }
    }

    /// Reads the last resolved values back out of the attribute store.
    pub fn read_from(attrs: &Attributes) -> Self {
        Self {
            armor_class: attrs.get(Attr::ArmorClass),
            weapon_class: attrs.get(Attr::WeaponClass),
            regen: attrs.get(Attr::Regen),
            energy: attrs.get(Attr::Energy),
            lance_death: attrs.get(Attr::LanceDeath) != 0,
        }
    }

    fn write_to(&self, attrs: &mut Attributes) {
        attrs.set(Attr::ArmorClass, self.armor_class);
        attrs.set(Attr::WeaponClass, self.weapon_class);
        attrs.set(Attr::Regen, self.regen);
        attrs.set(Attr::Energy, self.energy);
        attrs.set(Attr::LanceDeath, i64::from(self.lance_death));
    }
}

/// Recomputes derived stats and stores them in the attribute store.
///
/// Idempotent. Call after anything that changes equipment references,
/// enchantments or ring contents.
pub fn recalc(state: &mut PlayerState) -> DerivedStats {
    let derived = DerivedStats::resolve(state);
    derived.write_to(&mut state.attrs);
    derived
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Item, SlotIndex};

    fn slot(index: usize) -> SlotIndex {
        SlotIndex::new(index).unwrap()
    }

    fn state_with(items: &[(usize, ItemKind, i32)]) -> PlayerState {
        let mut state = PlayerState::empty();
        for &(index, kind, arg) in items {
            state.inventory.put(slot(index), Item::new(kind, arg));
        }
        state
    }

    #[test]
    fn empty_state_has_base_regen_only() {
        let mut state = PlayerState::empty();
        let derived = recalc(&mut state);
        assert_eq!(
            derived,
            DerivedStats {
                armor_class: 0,
                weapon_class: 0,
                regen: 1,
                energy: 0,
                lance_death: false,
            }
        );
    }

    #[test]
    fn worn_armor_and_shield_add_bonus_plus_enchantment() {
        let mut state = state_with(&[(0, ItemKind::ChainMail, 2), (1, ItemKind::Shield, 1)]);
        state.equipment.assign(EquipSlot::Wear, slot(0));
        state.equipment.assign(EquipSlot::Shield, slot(1));
        state.attrs.set(Attr::MoreDefenses, 3);
        assert_eq!(recalc(&mut state).armor_class, 3 + (6 + 2) + (2 + 1));
    }

    #[test]
    fn carried_armor_does_nothing_until_worn() {
        let mut state = state_with(&[(0, ItemKind::PlateArmor, 0)]);
        assert_eq!(recalc(&mut state).armor_class, 0);
    }

    #[test]
    fn rings_and_belt_apply_from_any_slot() {
        let mut state = state_with(&[
            (0, ItemKind::LongSword, 1),
            (3, ItemKind::ProtectionRing, 2),
            (9, ItemKind::DamageRing, 0),
            (12, ItemKind::Belt, 1),
            (20, ItemKind::RegenRing, 0),
            (24, ItemKind::ExtraRegenRing, 1),
            (25, ItemKind::EnergyRing, 3),
        ]);
        state.equipment.assign(EquipSlot::Wield, slot(0));
        state.attrs.set(Attr::MoreDamage, 2);

        let derived = recalc(&mut state);
        assert_eq!(derived.armor_class, 3);
        assert_eq!(derived.weapon_class, (22 + 1) + 2 + 1 + 4);
        assert_eq!(derived.regen, 1 + 1 + 10);
        assert_eq!(derived.energy, 4);
    }

    #[test]
    fn lance_flag_tracks_wielded_kind() {
        let mut state = state_with(&[(0, ItemKind::Lance, 0), (1, ItemKind::Dagger, 0)]);
        state.equipment.assign(EquipSlot::Wield, slot(0));
        assert!(recalc(&mut state).lance_death);
        assert_eq!(state.attr(Attr::LanceDeath), 1);

        state.equipment.assign(EquipSlot::Wield, slot(1));
        assert!(!recalc(&mut state).lance_death);
        assert_eq!(state.attr(Attr::LanceDeath), 0);
    }

    #[test]
    fn recalc_is_idempotent() {
        let mut state = state_with(&[
            (0, ItemKind::TwoHandedSword, 3),
            (1, ItemKind::ElvenChain, 1),
            (2, ItemKind::ProtectionRing, 0),
            (5, ItemKind::EnergyRing, 1),
        ]);
        state.equipment.assign(EquipSlot::Wield, slot(0));
        state.equipment.assign(EquipSlot::Wear, slot(1));

        let first = recalc(&mut state);
        let after_first = state.attrs.clone();
        let second = recalc(&mut state);
        assert_eq!(first, second);
        assert_eq!(after_first, state.attrs);
        assert_eq!(DerivedStats::read_from(&state.attrs), second);
    }
}
