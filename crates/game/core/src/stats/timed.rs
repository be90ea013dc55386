//! Registry of timed effects and what happens when each one runs out.
//!
//! The scheduler walks [`TIMED_EFFECTS`] once per turn. Each entry names the
//! counter, the state change fired on the step that reaches zero, and the
//! display layers that change with it. Time stop is not listed: it freezes
//! the scheduler itself and is handled before the scan.

use crate::state::{Attr, Refresh};

/// State change fired when a timed effect expires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Expiry {
    /// Nothing changes; the counter just stops.
    Quiet,
    /// Every ability moves by the delta (floor enforced).
    Abilities(i64),
    /// One attribute moves by the delta. Abilities keep their floor.
    Adjust(Attr, i64),
    /// A message only.
    Message(&'static str),
    /// A message, and invisible monsters fade from view again.
    SeeInvisible(&'static str),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimedEffect {
    pub attr: Attr,
    pub expiry: Expiry,
    /// Display layers to redraw on expiry. `STATUS` also means derived stats
    /// need recomputing.
    pub refresh: Refresh,
}

const fn effect(attr: Attr, expiry: Expiry, refresh: Refresh) -> TimedEffect {
    TimedEffect {
        attr,
        expiry,
        refresh,
    }
}

const STATUS: Refresh = Refresh::STATUS;
const EFFECTS: Refresh = Refresh::EFFECTS;
const BOTH: Refresh = Refresh::BOTH;
const NONE: Refresh = Refresh::NONE;

/// The 28 timed effects in scan order.
pub const TIMED_EFFECTS: [TimedEffect; 28] = [
    effect(Attr::Hero, Expiry::Abilities(-10), STATUS),
    effect(Attr::AltPro, Expiry::Adjust(Attr::MoreDefenses, -3), STATUS),
    effect(Attr::ProtectionTime, Expiry::Adjust(Attr::MoreDefenses, -2), STATUS),
    effect(Attr::DexCount, Expiry::Adjust(Attr::Dexterity, -3), STATUS),
    effect(Attr::StrCount, Expiry::Adjust(Attr::StrExtra, -3), STATUS),
    effect(Attr::BlindCount, Expiry::Message("The blindness lifts"), EFFECTS),
    effect(Attr::Confuse, Expiry::Message("You regain your senses"), EFFECTS),
    effect(Attr::GiantStr, Expiry::Adjust(Attr::StrExtra, -20), STATUS),
    effect(Attr::CharmCount, Expiry::Quiet, EFFECTS),
    effect(Attr::Invisibility, Expiry::Quiet, EFFECTS),
    effect(Attr::Cancellation, Expiry::Quiet, EFFECTS),
    effect(Attr::WalkThroughWalls, Expiry::Quiet, EFFECTS),
    effect(Attr::HasteSelf, Expiry::Quiet, EFFECTS),
    effect(Attr::Aggravate, Expiry::Quiet, NONE),
    effect(Attr::ScareMonster, Expiry::Quiet, EFFECTS),
    effect(Attr::Stealth, Expiry::Quiet, EFFECTS),
    effect(Attr::Awareness, Expiry::Quiet, NONE),
    effect(Attr::HoldMonster, Expiry::Quiet, EFFECTS),
    effect(Attr::HasteMonster, Expiry::Quiet, NONE),
    effect(Attr::FireResistance, Expiry::Quiet, EFFECTS),
    effect(Attr::Globe, Expiry::Adjust(Attr::MoreDefenses, -10), BOTH),
    effect(Attr::SpiritPro, Expiry::Quiet, EFFECTS),
    effect(Attr::UndeadPro, Expiry::Quiet, EFFECTS),
    effect(Attr::HalfDamage, Expiry::Message("You now feel better"), NONE),
    effect(
        Attr::SeeInvisible,
        Expiry::SeeInvisible("You feel your vision return to normal"),
        NONE,
    ),
    effect(
        Attr::Itching,
        Expiry::Message("You now feel the irritation subside!"),
        NONE,
    ),
    effect(
        Attr::Clumsiness,
        Expiry::Message("You now feel less awkward!"),
        NONE,
    ),
    effect(Attr::Laughing, Expiry::Message("You stop laughing"), NONE),
];

/// Registry entry for a counter, if it is a scheduled timed effect.
pub fn lookup(attr: Attr) -> Option<&'static TimedEffect> {
    TIMED_EFFECTS.iter().find(|effect| effect.attr == attr)
}
