//! Experience thresholds and level rewards.

use crate::config::GameConfig;
use crate::state::Attr;

const MEG: i64 = 1_000_000;

/// Experience needed to reach each level, indexed by level (`[0]` is 0).
///
/// A player at level `n` stays there while
/// `EXPERIENCE_TABLE[n - 1] <= experience < EXPERIENCE_TABLE[n]`.
pub const EXPERIENCE_TABLE: [i64; GameConfig::MAX_LEVEL as usize + 1] = build_table();

const fn build_table() -> [i64; GameConfig::MAX_LEVEL as usize + 1] {
    let early: [i64; 26] = [
        0,
        10,
        20,
        40,
        80,
        160,
        320,
        640,
        1280,
        2560,
        5120,
        10240,
        20480,
        40960,
        100_000,
        200_000,
        400_000,
        700_000,
        MEG,
        2 * MEG,
        3 * MEG,
        4 * MEG,
        5 * MEG,
        6 * MEG,
        8 * MEG,
        10 * MEG,
    ];

    let mut table = [0i64; GameConfig::MAX_LEVEL as usize + 1];
    let mut i = 0;
    while i < early.len() {
        table[i] = early[i];
        i += 1;
    }
    // 12M..=100M in steps of 2M
    let mut value = 12 * MEG;
    while value <= 100 * MEG {
        table[i] = value;
        value += 2 * MEG;
        i += 1;
    }
    // 105M..=200M in steps of 5M
    value = 105 * MEG;
    while value <= 200 * MEG {
        table[i] = value;
        value += 5 * MEG;
        i += 1;
    }
    // 210M..=300M in steps of 10M
    value = 210 * MEG;
    while value <= 300 * MEG {
        table[i] = value;
        value += 10 * MEG;
        i += 1;
    }
    assert!(i == GameConfig::MAX_LEVEL as usize + 1);
    table
}

/// Threshold for `level`, clamped into the table.
pub fn threshold(level: i64) -> i64 {
    EXPERIENCE_TABLE[level.clamp(0, GameConfig::MAX_LEVEL) as usize]
}

/// Duration granted by a guardian buff; long enough to be permanent in
/// practice.
pub const GUARDIAN_DURATION: i64 = 99_999;

/// Timed effects granted on first reaching one of the guardian levels.
pub fn guardian_buffs(level: i64) -> &'static [Attr] {
    match level {
        94 => &[Attr::WalkThroughWalls],
        95 => &[Attr::Invisibility],
        96 => &[Attr::FireResistance],
        97 => &[Attr::Cancellation],
        98 => &[Attr::HasteSelf],
        99 => &[Attr::Stealth],
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_strictly_increasing() {
        for pair in EXPERIENCE_TABLE.windows(2) {
            assert!(pair[0] < pair[1], "{pair:?}");
        }
    }

    #[test]
    fn table_anchors() {
        assert_eq!(EXPERIENCE_TABLE[0], 0);
        assert_eq!(EXPERIENCE_TABLE[1], 10);
        assert_eq!(EXPERIENCE_TABLE[18], MEG);
        assert_eq!(EXPERIENCE_TABLE[26], 12 * MEG);
        assert_eq!(EXPERIENCE_TABLE[70], 100 * MEG);
        assert_eq!(EXPERIENCE_TABLE[90], 200 * MEG);
        assert_eq!(EXPERIENCE_TABLE[100], 300 * MEG);
    }

    #[test]
    fn threshold_clamps_out_of_range_levels() {
        assert_eq!(threshold(-5), 0);
        assert_eq!(threshold(500), 300 * MEG);
    }

    #[test]
    fn each_guardian_level_grants_exactly_one_buff() {
        for level in 1..=100 {
            let expected = usize::from((94..=99).contains(&level));
            assert_eq!(guardian_buffs(level).len(), expected, "level {level}");
        }
    }
}
