//! Attribute store: the player's named integer slots.
//!
//! Every numeric fact about the player lives here: the six abilities, HP and
//! spell pools, experience, derived combat stats and every timed counter.
//! Slot numbers are stable because the save record writes them in order.

use strum::{EnumCount, EnumIter, FromRepr, IntoStaticStr};

use crate::config::GameConfig;

/// Named attribute slots.
///
/// Discriminants are save-record positions; append new slots, never reorder.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, EnumCount, EnumIter, FromRepr, IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Attr {
    // Abilities (floor 3)
    Strength = 0,
    Intelligence = 1,
    Wisdom = 2,
    Constitution = 3,
    Dexterity = 4,
    Charisma = 5,

    // Pools and progression
    HpMax = 6,
    Hp = 7,
    Gold = 8,
    Experience = 9,
    Level = 10,
    BankAccount = 11,
    SpellMax = 12,
    Spells = 13,
    CaveLevel = 14,
    HardGame = 15,

    // Derived (written only by the resolver)
    ArmorClass = 16,
    WeaponClass = 17,
    Regen = 18,
    Energy = 19,
    LanceDeath = 20,

    // Regeneration countdowns
    RegenCounter = 21,
    EnergyCounter = 22,

    // Permanent modifiers
    MoreDefenses = 23,
    MoreDamage = 24,
    StrExtra = 25,
    LifeProtection = 26,

    // Possession counters (quest items and artifacts)
    Slaying = 27,
    NegateSpirit = 28,
    CubeOfUndead = 29,
    NoTheft = 30,
    Orb = 31,

    // Timed effects
    TimeStop = 32,
    Hero = 33,
    AltPro = 34,
    ProtectionTime = 35,
    DexCount = 36,
    StrCount = 37,
    BlindCount = 38,
    Confuse = 39,
    GiantStr = 40,
    CharmCount = 41,
    Invisibility = 42,
    Cancellation = 43,
    WalkThroughWalls = 44,
    HasteSelf = 45,
    Aggravate = 46,
    ScareMonster = 47,
    Stealth = 48,
    Awareness = 49,
    HoldMonster = 50,
    HasteMonster = 51,
    FireResistance = 52,
    Globe = 53,
    SpiritPro = 54,
    UndeadPro = 55,
    HalfDamage = 56,
    SeeInvisible = 57,
    Itching = 58,
    Clumsiness = 59,
    Laughing = 60,

    // Bookkeeping
    MovesMade = 61,
    MonstersKilled = 62,
    SpellsCast = 63,
}

impl Attr {
    /// The six ability scores, in save order.
    pub const ABILITIES: [Attr; 6] = [
        Attr::Strength,
        Attr::Intelligence,
        Attr::Wisdom,
        Attr::Constitution,
        Attr::Dexterity,
        Attr::Charisma,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn is_ability(self) -> bool {
        (self as u8) <= (Attr::Charisma as u8)
    }

    pub fn name(self) -> &'static str {
        self.into()
    }
}

const _: () = assert!(Attr::COUNT <= GameConfig::ATTRIBUTE_SLOTS);

/// Fixed-size attribute storage.
///
/// Slots past the last named [`Attr`] are reserved; they round-trip through
/// save records untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attributes {
    values: [i64; GameConfig::ATTRIBUTE_SLOTS],
}

impl Attributes {
    pub fn new() -> Self {
        Self {
            values: [0; GameConfig::ATTRIBUTE_SLOTS],
        }
    }

    /// Rebuilds a store from raw slot values (save records).
    pub fn from_raw(values: [i64; GameConfig::ATTRIBUTE_SLOTS]) -> Self {
        Self { values }
    }

    pub fn raw(&self) -> &[i64; GameConfig::ATTRIBUTE_SLOTS] {
        &self.values
    }

    #[inline]
    pub fn get(&self, attr: Attr) -> i64 {
        self.values[attr.index()]
    }

    #[inline]
    pub fn set(&mut self, attr: Attr, value: i64) {
        self.values[attr.index()] = value;
    }

    /// Adds `delta` to a slot with no range checks. Returns the new value.
    #[inline]
    pub fn add(&mut self, attr: Attr, delta: i64) -> i64 {
        let slot = &mut self.values[attr.index()];
        *slot += delta;
        *slot
    }

    /// Adjusts an ability score and enforces the ability floor.
    ///
    /// No-op for attributes outside the ability range. Returns true when the
    /// slot was touched.
    pub fn adjust_ability(&mut self, attr: Attr, delta: i64) -> bool {
        if !attr.is_ability() {
            return false;
        }
        let slot = &mut self.values[attr.index()];
        *slot = (*slot + delta).max(GameConfig::ABILITY_FLOOR);
        true
    }

    /// Floor-respecting adjustment for abilities, plain addition otherwise.
    pub fn adjust(&mut self, attr: Attr, delta: i64) {
        if !self.adjust_ability(attr, delta) {
            self.add(attr, delta);
        }
    }

    /// Raises every ability below the floor back up to it.
    pub fn enforce_ability_floor(&mut self) -> bool {
        let mut changed = false;
        for attr in Attr::ABILITIES {
            if self.get(attr) < GameConfig::ABILITY_FLOOR {
                self.set(attr, GameConfig::ABILITY_FLOOR);
                changed = true;
            }
        }
        changed
    }

    /// Decrements a counter that is positive. Returns true on the step that
    /// reaches zero.
    pub fn tick_down(&mut self, attr: Attr) -> bool {
        let slot = &mut self.values[attr.index()];
        if *slot <= 0 {
            return false;
        }
        *slot -= 1;
        *slot <= 0
    }

    pub fn is_active(&self, attr: Attr) -> bool {
        self.get(attr) > 0
    }
}

impl Default for Attributes {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn ability_range_is_exactly_the_six_abilities() {
        let abilities: Vec<Attr> = Attr::iter().filter(|a| a.is_ability()).collect();
        assert_eq!(abilities, Attr::ABILITIES.to_vec());
    }

    #[test]
    fn adjust_ability_clamps_to_floor() {
        let mut attrs = Attributes::new();
        attrs.set(Attr::Dexterity, 5);
        assert!(attrs.adjust_ability(Attr::Dexterity, -10));
        assert_eq!(attrs.get(Attr::Dexterity), 3);
        attrs.adjust_ability(Attr::Dexterity, 4);
        assert_eq!(attrs.get(Attr::Dexterity), 7);
    }

    #[test]
    fn adjust_ability_ignores_non_abilities() {
        let mut attrs = Attributes::new();
        attrs.set(Attr::Gold, 10);
        assert!(!attrs.adjust_ability(Attr::Gold, -50));
        assert_eq!(attrs.get(Attr::Gold), 10);
    }

    #[test]
    fn abilities_never_drop_below_floor_under_any_sequence() {
        let mut attrs = Attributes::new();
        for attr in Attr::ABILITIES {
            attrs.set(attr, 12);
        }
        let deltas = [-4, -9, 3, -1, -30, 7, -2, 15, -100, 1];
        for (i, delta) in deltas.iter().cycle().take(120).enumerate() {
            let attr = Attr::ABILITIES[i % 6];
            attrs.adjust_ability(attr, *delta);
            for attr in Attr::ABILITIES {
                assert!(attrs.get(attr) >= GameConfig::ABILITY_FLOOR);
            }
        }
    }

    #[test]
    fn tick_down_reports_only_the_expiring_step() {
        let mut attrs = Attributes::new();
        attrs.set(Attr::Confuse, 2);
        assert!(!attrs.tick_down(Attr::Confuse));
        assert!(attrs.tick_down(Attr::Confuse));
        assert!(!attrs.tick_down(Attr::Confuse));
        assert_eq!(attrs.get(Attr::Confuse), 0);
    }
}
