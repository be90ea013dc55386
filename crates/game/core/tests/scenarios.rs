//! End-to-end scenarios driven through the public engine API with scripted
//! collaborators.

use cavern_core::testing::{ScriptedTerminal, SequenceRng, TestWorld};
use cavern_core::{
    ActionError, Attr, ClassTemplate, Conflict, Env, EquipSlot, GameConfig, GameEngine, GameEnv,
    Item, ItemKind, PcgRng, PlayerState, SlotIndex, Verb, World, recalc,
};

fn adventurer() -> PlayerState {
    ClassTemplate::adventurer().to_player(&GameConfig::default())
}

fn world_clear(env: &mut GameEnv<'_>) {
    env.world().set_ground(None);
}

fn slot(index: usize) -> SlotIndex {
    SlotIndex::new(index).unwrap()
}

/// Level-1 character, empty pack: a potion goes into slot 0 and back out
/// onto a clear tile.
#[test]
fn potion_pickup_then_drop() {
    let mut state = PlayerState::empty();
    state.attrs.set(Attr::Level, 1);
    let mut world = TestWorld::new();
    let (mut terminal, mut rng) = (ScriptedTerminal::new(), SequenceRng::repeating(0));
    let config = GameConfig::default();
    let mut env = Env::new(&mut world, &mut terminal, &mut rng, &config).into_game_env();

    let mut engine = GameEngine::new(&mut state);
    let (taken, _) = engine.take(&mut env, ItemKind::Potion, 3).unwrap();
    assert_eq!(taken, slot(0));
    engine.drop_object(&mut env, slot(0)).unwrap();

    assert_eq!(world.ground, Some(Item::new(ItemKind::Potion, 3)));
    assert_eq!(state.inventory.get(slot(0)), None);
    assert!(state.turn.drop_flag);
}

/// A wielded two-handed sword in slot 5 keeps a shield off.
#[test]
fn two_handed_sword_refuses_shield() {
    let mut state = adventurer();
    state
        .inventory
        .put(slot(5), Item::new(ItemKind::TwoHandedSword, 0));
    state.equipment.assign(EquipSlot::Wield, slot(5));
    state.inventory.put(slot(6), Item::new(ItemKind::Shield, 0));
    recalc(&mut state);
    let before = state.clone();

    let mut world = TestWorld::new();
    let mut terminal = ScriptedTerminal::with_keys(['g']);
    let mut rng = SequenceRng::repeating(0);
    let config = GameConfig::default();
    let mut env = Env::new(&mut world, &mut terminal, &mut rng, &config).into_game_env();

    let err = GameEngine::new(&mut state)
        .perform(&mut env, Verb::Wear)
        .unwrap_err();
    assert_eq!(err, ActionError::Conflict(Conflict::TwoHandedBlocksShield));
    assert_eq!(
        terminal.last_message(),
        Some("Your hands are busy with the two handed sword!")
    );
    assert_eq!(state.equipment.shield, None);
    assert_eq!(state, before);
}

/// Clumsiness drops the wielded weapon on roughly a third of turns.
#[test]
fn clumsiness_drops_weapon_about_a_third_of_the_time() {
    const TURNS: usize = 3_000;
    let template = {
        let mut state = adventurer();
        state.attrs.set(Attr::Clumsiness, 1_000_000);
        state
    };
    let mut rng = PcgRng::new(0xc1a5);
    let config = GameConfig::default();

    let mut drops = 0;
    for _ in 0..TURNS {
        let mut state = template.clone();
        let (mut world, mut terminal) = (TestWorld::new(), ScriptedTerminal::new());
        let mut env = Env::new(&mut world, &mut terminal, &mut rng, &config).into_game_env();
        GameEngine::new(&mut state).regen(&mut env);
        if state.equipment.wield.is_none() {
            assert_eq!(world.ground.map(|item| item.kind), Some(ItemKind::Dagger));
            drops += 1;
        }
    }

    let rate = drops as f64 / TURNS as f64;
    assert!((0.27..0.38).contains(&rate), "drop rate {rate}");
}

/// Clumsiness never drops onto an occupied tile.
#[test]
fn clumsiness_needs_a_clear_tile() {
    let mut state = adventurer();
    state.attrs.set(Attr::Clumsiness, 500);
    let mut world = TestWorld::with_ground(Item::new(ItemKind::Cookie, 0));
    let (mut terminal, mut rng) = (ScriptedTerminal::new(), SequenceRng::repeating(0));
    let config = GameConfig::default();

    for _ in 0..50 {
        let mut env = Env::new(&mut world, &mut terminal, &mut rng, &config).into_game_env();
        GameEngine::new(&mut state).regen(&mut env);
    }
    assert!(state.equipment.wield.is_some());
}

/// Itching strips armor on about half the turns it is running, and never
/// once it has run out.
#[test]
fn itching_strips_armor_about_half_the_time_while_active() {
    const TURNS: usize = 3_000;
    let config = GameConfig::default();
    let mut rng = PcgRng::new(0x17c4);

    let trial = |itching: i64, rng: &mut PcgRng| {
        let mut state = adventurer();
        state.attrs.set(Attr::Itching, itching);
        let (mut world, mut terminal) = (TestWorld::new(), ScriptedTerminal::new());
        let mut env = Env::new(&mut world, &mut terminal, rng, &config).into_game_env();
        GameEngine::new(&mut state).regen(&mut env);
        state.equipment.wear.is_none()
    };

    let stripped = (0..TURNS).filter(|_| trial(100, &mut rng)).count();
    let rate = stripped as f64 / TURNS as f64;
    assert!((0.44..0.55).contains(&rate), "strip rate {rate}");

    assert!((0..500).all(|_| !trial(1, &mut rng)));
}

/// Ability scores never fall below the floor, whatever drains them.
#[test]
fn abilities_stay_at_or_above_the_floor() {
    let mut state = adventurer();
    let (mut world, mut terminal, mut rng) =
        (TestWorld::new(), ScriptedTerminal::new(), SequenceRng::repeating(0));
    let config = GameConfig::default();
    let mut env = Env::new(&mut world, &mut terminal, &mut rng, &config).into_game_env();

    let mut engine = GameEngine::new(&mut state);
    engine.quaff_potion(&mut env, cavern_core::Potion::Heroism);
    for _ in 0..30 {
        engine.quaff_potion(&mut env, cavern_core::Potion::Dizziness);
    }
    assert_eq!(engine.state().attr(Attr::Strength), GameConfig::ABILITY_FLOOR);
    // hero expiry takes ten from every ability
    for _ in 0..250 {
        engine.regen(&mut env);
    }

    for attr in Attr::ABILITIES {
        assert!(state.attr(attr) >= GameConfig::ABILITY_FLOOR, "{attr:?}");
    }
}

/// Two recomputations in a row agree.
#[test]
fn recalc_is_idempotent() {
    let mut state = adventurer();
    state
        .inventory
        .put(slot(4), Item::new(ItemKind::ProtectionRing, 2));
    state.inventory.put(slot(5), Item::new(ItemKind::Belt, 1));
    state.inventory.put(slot(6), Item::new(ItemKind::RegenRing, 0));

    let first = recalc(&mut state);
    let attrs = state.attrs.clone();
    let second = recalc(&mut state);
    assert_eq!(first, second);
    assert_eq!(state.attrs, attrs);
}

/// Picking an item up and dropping it again restores every attribute, even
/// when the ability floor clipped the pickup.
#[test]
fn pickup_drop_round_trip_restores_attributes() {
    let kinds = [
        ItemKind::Hammer,
        ItemKind::SwordOfSlashing,
        ItemKind::StrengthRing,
        ItemKind::CleverRing,
        ItemKind::DexterityRing,
        ItemKind::NoTheftDevice,
        ItemKind::ProtectionRing,
        ItemKind::EnergyRing,
    ];
    for kind in kinds {
        let mut state = adventurer();
        assert!(state.attr(Attr::Intelligence) <= 12);
        let before = state.clone();
        let mut world = TestWorld::new();
        let (mut terminal, mut rng) = (ScriptedTerminal::new(), SequenceRng::repeating(0));
        let config = GameConfig::default();
        let mut env = Env::new(&mut world, &mut terminal, &mut rng, &config).into_game_env();

        let mut engine = GameEngine::new(&mut state);
        for _ in 0..3 {
            let (taken, _) = engine.take(&mut env, kind, 2).unwrap();
            engine.drop_object(&mut env, taken).unwrap();
            world_clear(&mut env);
        }
        assert_eq!(state.attrs, before.attrs, "{kind:?}");
        assert_eq!(state.inventory, before.inventory, "{kind:?}");
    }
}

/// One slot is never referenced by two equipment categories.
#[test]
fn equipping_a_slot_clears_other_references() {
    let mut state = adventurer();
    for which in [EquipSlot::Wield, EquipSlot::Wear, EquipSlot::Shield] {
        state.equipment.assign(which, slot(0));
        let holders = [EquipSlot::Wield, EquipSlot::Wear, EquipSlot::Shield]
            .into_iter()
            .filter(|other| state.equipment.get(*other) == Some(slot(0)))
            .count();
        assert_eq!(holders, 1);
    }
}

/// Gaining experience then losing the same amount lands on the same level,
/// but not on the same maximum HP: level gains roll an extra die that
/// losses never take back.
#[test]
fn experience_gain_and_loss_are_not_inverse() {
    let mut state = adventurer();
    let hp_before = state.attr(Attr::HpMax);
    let (mut world, mut terminal, mut rng) =
        (TestWorld::new(), ScriptedTerminal::new(), SequenceRng::repeating(0));
    let config = GameConfig::default();
    let mut env = Env::new(&mut world, &mut terminal, &mut rng, &config).into_game_env();

    let amount = cavern_core::stats::threshold(4);
    let mut engine = GameEngine::new(&mut state);
    engine.raise_experience(&mut env, amount);
    assert_eq!(engine.state().level(), 5);
    engine.lose_experience(&mut env, amount);

    assert_eq!(state.level(), 1);
    assert_ne!(state.attr(Attr::HpMax), hp_before);
}

/// Escaping from any verb prompt changes nothing.
#[test]
fn escape_from_every_verb_is_a_no_op() {
    for verb in Verb::ALL {
        let mut state = adventurer();
        let before = state.clone();
        let mut world = TestWorld::new();
        let mut terminal = ScriptedTerminal::with_keys([cavern_core::ESCAPE]);
        let mut rng = SequenceRng::repeating(0);
        let config = GameConfig::default();
        let mut env = Env::new(&mut world, &mut terminal, &mut rng, &config).into_game_env();

        let result = GameEngine::new(&mut state).perform(&mut env, verb);
        assert_eq!(result, Err(ActionError::Aborted));
        assert_eq!(state, before, "{verb:?}");
        assert!(terminal.messages.is_empty());
    }
}
