//! Item kinds and the static per-kind tables.
//!
//! Everything the engine needs to know about a kind of item is answered by a
//! lookup here: its use category, its armor/weapon bonus, whether it needs
//! both hands, and which permanent attributes it changes while carried. The
//! resolver, the dispatcher and the inventory manager all read the same
//! tables so they cannot drift apart.

use arrayvec::ArrayVec;
use strum::{EnumCount, EnumIter, FromRepr, IntoStaticStr};

use super::attributes::Attr;
use super::knowledge::Knowledge;

/// Kind tag of an item.
///
/// Discriminants are save-record codes; `0` is reserved for "empty".
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, EnumCount, EnumIter, FromRepr, IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum ItemKind {
    // Consumables
    Potion = 1,
    Scroll,
    Book,
    Cookie,

    // Body armor
    Leather,
    StuddedLeather,
    RingMail,
    ChainMail,
    SplintMail,
    PlateMail,
    PlateArmor,
    StainlessPlate,
    ElvenChain,
    Shield,

    // Weapons
    Dagger,
    Spear,
    Flail,
    BattleAxe,
    Lance,
    LongSword,
    TwoHandedSword,
    SwordOfSlashing,
    Hammer,
    Sunsword,
    Vorpal,

    // Jewelry carried for passive effect
    Belt,
    ProtectionRing,
    DamageRing,
    RegenRing,
    ExtraRegenRing,
    EnergyRing,
    DexterityRing,
    StrengthRing,
    CleverRing,

    // Artifacts
    OrbOfDragonSlaying,
    SpiritScarab,
    CubeOfUndead,
    NoTheftDevice,
    OrbOfEnlightenment,
    EyeOfLarn,

    // Gems (argument holds value)
    Diamond,
    Ruby,
    Emerald,
    Sapphire,

    // Ground-only
    GoldPile,
    Pit,
}

/// How the player can use an item from the pack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UseCategory {
    Wieldable,
    Wearable,
    Quaffable,
    Readable,
    Edible,
    DropOnly,
}

/// Static facts about an item kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ItemProfile {
    pub name: &'static str,
    pub category: UseCategory,
    /// Base armor class granted while worn (armor or shield reference).
    pub armor: Option<i64>,
    /// Base weapon class granted while wielded.
    pub weapon: Option<i64>,
    pub two_handed: bool,
    /// Carrying the item changes derived stats (rings, belts, artifacts with
    /// ability boosts).
    pub affects_derived: bool,
}

impl ItemProfile {
    const fn new(name: &'static str, category: UseCategory) -> Self {
        Self {
            name,
            category,
            armor: None,
            weapon: None,
            two_handed: false,
            affects_derived: false,
        }
    }

    const fn armor(name: &'static str, bonus: i64) -> Self {
        Self {
            armor: Some(bonus),
            ..Self::new(name, UseCategory::Wearable)
        }
    }

    const fn weapon(name: &'static str, bonus: i64) -> Self {
        Self {
            weapon: Some(bonus),
            ..Self::new(name, UseCategory::Wieldable)
        }
    }

    const fn passive(name: &'static str) -> Self {
        Self {
            affects_derived: true,
            ..Self::new(name, UseCategory::DropOnly)
        }
    }

    /// Rings are offered at the wear prompt but act while merely carried.
    const fn ring(name: &'static str) -> Self {
        Self {
            category: UseCategory::Wearable,
            ..Self::passive(name)
        }
    }
}

impl ItemKind {
    /// Looks up the static profile for this kind.
    pub const fn profile(self) -> ItemProfile {
        match self {
            Self::Potion => ItemProfile::new("potion", UseCategory::Quaffable),
            Self::Scroll => ItemProfile::new("scroll", UseCategory::Readable),
            Self::Book => ItemProfile::new("book", UseCategory::Readable),
            Self::Cookie => ItemProfile::new("fortune cookie", UseCategory::Edible),

            Self::Leather => ItemProfile::armor("leather armor", 2),
            Self::StuddedLeather => ItemProfile::armor("studded leather armor", 3),
            Self::RingMail => ItemProfile::armor("ring mail", 5),
            Self::ChainMail => ItemProfile::armor("chain mail", 6),
            Self::SplintMail => ItemProfile::armor("splint mail", 7),
            Self::PlateMail => ItemProfile::armor("plate mail", 9),
            Self::PlateArmor => ItemProfile::armor("plate armor", 10),
            Self::StainlessPlate => ItemProfile::armor("stainless plate armor", 12),
            Self::ElvenChain => ItemProfile::armor("elven chain", 15),
            Self::Shield => ItemProfile::armor("shield", 2),

            Self::Dagger => ItemProfile::weapon("dagger", 3),
            Self::Spear => ItemProfile::weapon("spear", 10),
            Self::Flail => ItemProfile::weapon("flail", 14),
            Self::BattleAxe => ItemProfile::weapon("battle axe", 17),
            Self::Lance => ItemProfile::weapon("lance of death", 20),
            Self::LongSword => ItemProfile::weapon("longsword", 22),
            Self::TwoHandedSword => ItemProfile {
                two_handed: true,
                ..ItemProfile::weapon("two handed sword", 26)
            },
            Self::SwordOfSlashing => ItemProfile {
                affects_derived: true,
                ..ItemProfile::weapon("sword of slashing", 30)
            },
            Self::Hammer => ItemProfile {
                affects_derived: true,
                ..ItemProfile::weapon("Bessman's flailing hammer", 35)
            },
            Self::Sunsword => ItemProfile::weapon("sunsword", 32),
            Self::Vorpal => ItemProfile::weapon("vorpal blade", 22),

            Self::Belt => ItemProfile::passive("belt of striking"),
            Self::ProtectionRing => ItemProfile::ring("ring of protection"),
            Self::DamageRing => ItemProfile::ring("ring of increase damage"),
            Self::RegenRing => ItemProfile::ring("ring of regeneration"),
            Self::ExtraRegenRing => ItemProfile::ring("ring of extra regeneration"),
            Self::EnergyRing => ItemProfile::ring("energy ring"),
            Self::DexterityRing => ItemProfile::ring("ring of dexterity"),
            Self::StrengthRing => ItemProfile::ring("ring of strength"),
            Self::CleverRing => ItemProfile::ring("ring of cleverness"),

            Self::OrbOfDragonSlaying => ItemProfile::new("orb of dragon slaying", UseCategory::DropOnly),
            Self::SpiritScarab => ItemProfile::new("scarab of negate spirit", UseCategory::DropOnly),
            Self::CubeOfUndead => ItemProfile::new("cube of undead control", UseCategory::DropOnly),
            Self::NoTheftDevice => ItemProfile::new("device of theft prevention", UseCategory::DropOnly),
            Self::OrbOfEnlightenment => ItemProfile::new("orb of enlightenment", UseCategory::DropOnly),
            Self::EyeOfLarn => ItemProfile::new("eye of Larn", UseCategory::DropOnly),

            Self::Diamond => ItemProfile::new("diamond", UseCategory::DropOnly),
            Self::Ruby => ItemProfile::new("ruby", UseCategory::DropOnly),
            Self::Emerald => ItemProfile::new("emerald", UseCategory::DropOnly),
            Self::Sapphire => ItemProfile::new("sapphire", UseCategory::DropOnly),

            Self::GoldPile => ItemProfile::new("gold", UseCategory::DropOnly),
            Self::Pit => ItemProfile::new("pit", UseCategory::DropOnly),
        }
    }

    pub const fn category(self) -> UseCategory {
        self.profile().category
    }

    pub const fn is_body_armor(self) -> bool {
        self.profile().armor.is_some() && !matches!(self, ItemKind::Shield)
    }

    pub const fn is_ring(self) -> bool {
        matches!(
            self,
            ItemKind::ProtectionRing
                | ItemKind::DamageRing
                | ItemKind::RegenRing
                | ItemKind::ExtraRegenRing
                | ItemKind::EnergyRing
                | ItemKind::DexterityRing
                | ItemKind::StrengthRing
                | ItemKind::CleverRing
        )
    }

    pub const fn is_gem(self) -> bool {
        matches!(
            self,
            ItemKind::Diamond | ItemKind::Ruby | ItemKind::Emerald | ItemKind::Sapphire
        )
    }

    /// Potions and scrolls are never enchanted.
    pub const fn is_enchantable(self) -> bool {
        !matches!(self, ItemKind::Potion | ItemKind::Scroll)
    }

    /// Save-record code for this kind.
    pub const fn code(self) -> u8 {
        self as u8
    }
}

/// An item: kind tag plus its integer argument (enchantment or variant).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub kind: ItemKind,
    pub arg: i32,
}

impl Item {
    pub const fn new(kind: ItemKind, arg: i32) -> Self {
        Self { kind, arg }
    }

    pub const fn profile(&self) -> ItemProfile {
        self.kind.profile()
    }
}

/// Most carry effects any single item has.
pub const MAX_CARRY_EFFECTS: usize = 3;

/// Permanent attribute changes applied while an item is carried.
///
/// Applied once at pickup. Drop and theft reverse what pickup actually
/// applied, which is less than this when the ability floor engaged.
pub fn carry_effects(item: Item) -> ArrayVec<(Attr, i64), MAX_CARRY_EFFECTS> {
    let ring = i64::from(item.arg) + 1;
    let mut effects = ArrayVec::new();
    match item.kind {
        ItemKind::DexterityRing => effects.push((Attr::Dexterity, ring)),
        ItemKind::StrengthRing => effects.push((Attr::StrExtra, ring)),
        ItemKind::CleverRing => effects.push((Attr::Intelligence, ring)),
        ItemKind::Hammer => {
            effects.push((Attr::Dexterity, 10));
            effects.push((Attr::StrExtra, 10));
            effects.push((Attr::Intelligence, -10));
        }
        ItemKind::SwordOfSlashing => effects.push((Attr::Dexterity, 5)),
        ItemKind::OrbOfDragonSlaying => effects.push((Attr::Slaying, 1)),
        ItemKind::SpiritScarab => effects.push((Attr::NegateSpirit, 1)),
        ItemKind::CubeOfUndead => effects.push((Attr::CubeOfUndead, 1)),
        ItemKind::NoTheftDevice => effects.push((Attr::NoTheft, 1)),
        ItemKind::OrbOfEnlightenment => effects.push((Attr::Orb, 1)),
        _ => {}
    }
    effects
}

/// Attribute that moves one-for-one with an item's enchantment.
pub const fn enchant_linked_attr(kind: ItemKind) -> Option<Attr> {
    match kind {
        ItemKind::DexterityRing => Some(Attr::Dexterity),
        ItemKind::StrengthRing => Some(Attr::StrExtra),
        ItemKind::CleverRing => Some(Attr::Intelligence),
        _ => None,
    }
}

/// Potion variants, indexed by the item argument.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumCount, EnumIter, FromRepr, IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Potion {
    Sleep = 0,
    Healing,
    RaiseLevel,
    IncreaseAbility,
    Wisdom,
    Strength,
    Charisma,
    Dizziness,
    Learning,
    GoldDetection,
    MonsterDetection,
    Forgetfulness,
    Water,
    Blindness,
    Confusion,
    Heroism,
    Sturdiness,
    GiantStrength,
    FireResistance,
    TreasureFinding,
    InstantHealing,
    CureDianthroritis,
    Poison,
    SeeInvisible,
}

impl Potion {
    pub fn from_arg(arg: i32) -> Option<Self> {
        u8::try_from(arg).ok().and_then(Self::from_repr)
    }

    pub const fn name(self) -> &'static str {
        use Potion::*;
        match self {
            Sleep => "sleep",
            Healing => "healing",
            RaiseLevel => "raise level",
            IncreaseAbility => "increase ability",
            Wisdom => "wisdom",
            Strength => "strength",
            Charisma => "raise charisma",
            Dizziness => "dizziness",
            Learning => "learning",
            GoldDetection => "gold detection",
            MonsterDetection => "monster detection",
            Forgetfulness => "forgetfulness",
            Water => "water",
            Blindness => "blindness",
            Confusion => "confusion",
            Heroism => "heroism",
            Sturdiness => "sturdiness",
            GiantStrength => "giant strength",
            FireResistance => "fire resistance",
            TreasureFinding => "treasure finding",
            InstantHealing => "instant healing",
            CureDianthroritis => "cure dianthroritis",
            Poison => "poison",
            SeeInvisible => "see invisible",
        }
    }
}

/// Scroll variants, indexed by the item argument.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumCount, EnumIter, FromRepr, IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Scroll {
    EnchantArmor = 0,
    EnchantWeapon,
    Enlightenment,
    BlankPaper,
    CreateMonster,
    CreateArtifact,
    AggravateMonsters,
    TimeWarp,
    Teleportation,
    ExpandedAwareness,
    HasteMonsters,
    MonsterHealing,
    SpiritProtection,
    UndeadProtection,
    Stealth,
    MagicMapping,
    HoldMonsters,
    GemPerfection,
    SpellExtension,
    Identify,
    RemoveCurse,
    Annihilation,
    Pulverization,
    LifeProtection,
}

impl Scroll {
    pub fn from_arg(arg: i32) -> Option<Self> {
        u8::try_from(arg).ok().and_then(Self::from_repr)
    }

    pub const fn name(self) -> &'static str {
        use Scroll::*;
        match self {
            EnchantArmor => "enchant armor",
            EnchantWeapon => "enchant weapon",
            Enlightenment => "enlightenment",
            BlankPaper => "blank paper",
            CreateMonster => "create monster",
            CreateArtifact => "create artifact",
            AggravateMonsters => "aggravate monsters",
            TimeWarp => "time warp",
            Teleportation => "teleportation",
            ExpandedAwareness => "expanded awareness",
            HasteMonsters => "haste monsters",
            MonsterHealing => "monster healing",
            SpiritProtection => "spirit protection",
            UndeadProtection => "undead protection",
            Stealth => "stealth",
            MagicMapping => "magic mapping",
            HoldMonsters => "hold monsters",
            GemPerfection => "gem perfection",
            SpellExtension => "spell extension",
            Identify => "identify",
            RemoveCurse => "remove curse",
            Annihilation => "annihilation",
            Pulverization => "pulverization",
            LifeProtection => "life protection",
        }
    }
}

/// Player-facing name of an item, honoring what the player has identified.
pub fn describe(item: Item, knowledge: &Knowledge) -> String {
    let profile = item.profile();
    match item.kind {
        ItemKind::Potion => match Potion::from_arg(item.arg) {
            Some(potion) if knowledge.potion_known(item.arg) => {
                format!("a magic potion of {}", potion.name())
            }
            _ => "a magic potion".to_string(),
        },
        ItemKind::Scroll => match Scroll::from_arg(item.arg) {
            Some(scroll) if knowledge.scroll_known(item.arg) => {
                format!("a magic scroll of {}", scroll.name())
            }
            _ => "a magic scroll".to_string(),
        },
        ItemKind::Book => "a book".to_string(),
        ItemKind::GoldPile => format!("{} gold pieces", item.arg),
        kind if kind.is_gem() => format!("a {} of value {}", profile.name, item.arg),
        _ if profile.armor.is_some()
            || profile.weapon.is_some()
            || profile.affects_derived
            || enchant_linked_attr(item.kind).is_some() =>
        {
            if item.arg >= 0 {
                format!("a {} +{}", profile.name, item.arg)
            } else {
                format!("a {} {}", profile.name, item.arg)
            }
        }
        _ => format!("the {}", profile.name),
    }
}
