//! World oracle: the dungeon as seen from the player's tile.

use crate::state::Item;

/// Dungeon-side consequences of player actions.
///
/// The engine does not generate levels or move monsters; it names what
/// should happen and the world carries it out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WorldEffect {
    DetectGold,
    DetectMonsters,
    DetectTreasure,
    ForgetMap,
    Enlighten,
    MagicMap,
    CreateMonster,
    CreateArtifact,
    Teleport,
    HealMonsters,
    Annihilate,
    Pulverize,
    /// Invisible stalkers become visible (or stop being) to the player.
    SeeInvisible(bool),
}

/// Mutable view of the world around the player.
pub trait World {
    /// Item lying on the player's tile, if any (pits and gold piles included).
    fn ground(&self) -> Option<Item>;

    fn set_ground(&mut self, item: Option<Item>);

    /// True on the tile where the home entrance sits; nothing may be dropped there.
    fn on_home_entrance(&self) -> bool;

    /// Current dungeon depth, used to pick the spell a book teaches.
    fn depth(&self) -> usize {
        0
    }

    /// Marks every tile of the current level as known.
    fn reveal_map(&mut self);

    fn apply(&mut self, effect: WorldEffect);

    /// Lets the rest of the dungeon take one turn (monsters move while the
    /// player sleeps).
    fn pass_turn(&mut self) {}

    /// Text of a fortune cookie, if the world has any to hand out.
    fn fortune(&mut self) -> Option<String> {
        None
    }
}
