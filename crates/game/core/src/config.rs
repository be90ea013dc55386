/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Difficulty level. Seeds the `HardGame` attribute at character creation
    /// and slows regeneration as it rises.
    pub difficulty: i64,

    /// Seed for the default [`PcgRng`](crate::env::PcgRng).
    pub rng_seed: u64,

    /// Itching strips armor when `rnd(100)` falls below this.
    pub itch_strip_chance: u32,

    /// Clumsiness drops the wielded item when `rnd(100)` falls below this.
    pub clumsy_drop_chance: u32,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Number of inventory slots (`a` through `z`).
    pub const INVENTORY_SLOTS: usize = 26;
    /// Number of attribute slots in the store and in the save record.
    pub const ATTRIBUTE_SLOTS: usize = 100;
    pub const MAX_LEVEL: i64 = 100;
    pub const SPELL_COUNT: usize = 38;
    pub const SCROLL_KINDS: usize = 28;
    pub const POTION_KINDS: usize = 35;

    // ===== capacity =====
    /// Slots usable for pickup at level 0.
    pub const PICKUP_BASE: usize = 15;
    /// Slots that count as "full" at level 0; one step stricter than pickup.
    pub const FULL_BASE: usize = 14;

    // ===== invariants =====
    pub const ABILITY_FLOOR: i64 = 3;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_DIFFICULTY: i64 = 0;
    pub const DEFAULT_RNG_SEED: u64 = 0x5eed_1a2b;
    pub const DEFAULT_ITCH_STRIP_CHANCE: u32 = 50;
    pub const DEFAULT_CLUMSY_DROP_CHANCE: u32 = 33;

    pub fn new() -> Self {
        Self {
            difficulty: Self::DEFAULT_DIFFICULTY,
            rng_seed: Self::DEFAULT_RNG_SEED,
            itch_strip_chance: Self::DEFAULT_ITCH_STRIP_CHANCE,
            clumsy_drop_chance: Self::DEFAULT_CLUMSY_DROP_CHANCE,
        }
    }

    pub fn with_difficulty(difficulty: i64) -> Self {
        Self {
            difficulty,
            ..Self::new()
        }
    }

    /// Number of slots searched by pickup at the given level.
    pub fn pickup_limit(level: i64) -> usize {
        (Self::PICKUP_BASE + (level.max(0) as usize >> 1)).min(Self::INVENTORY_SLOTS)
    }

    /// Number of slots that must be filled before the pack counts as full.
    pub fn full_limit(level: i64) -> usize {
        (Self::FULL_BASE + (level.max(0) as usize >> 1)).min(Self::INVENTORY_SLOTS)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
