//! Scripted collaborators for driving the engine without a real dungeon or
//! screen.
//!
//! All three record what the engine asked of them so tests can assert on
//! messages, refresh requests and world effects after the fact. They are
//! also handy for replaying a recorded session headlessly.

use std::collections::VecDeque;

use crate::env::{Answer, RngOracle, Terminal, World, WorldEffect};
use crate::state::{Item, Refresh, SlotIndex};

/// Terminal that answers prompts from a queue and records all output.
///
/// When the key queue runs dry every further prompt aborts, so a test can
/// never hang waiting for input.
#[derive(Clone, Debug, Default)]
pub struct ScriptedTerminal {
    keys: VecDeque<Answer>,
    numbers: VecDeque<i64>,
    pub prompts: Vec<String>,
    pub messages: Vec<String>,
    pub refreshes: Vec<Refresh>,
    pub listings: Vec<Vec<(SlotIndex, String)>>,
    pub sight_faded: usize,
}

impl ScriptedTerminal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues single-key answers, consumed in order.
    pub fn with_keys(keys: impl IntoIterator<Item = char>) -> Self {
        let mut terminal = Self::new();
        for key in keys {
            terminal.push_key(key);
        }
        terminal
    }

    pub fn push_key(&mut self, key: char) -> &mut Self {
        self.keys.push_back(Answer::Key(key));
        self
    }

    pub fn push_abort(&mut self) -> &mut Self {
        self.keys.push_back(Answer::Abort);
        self
    }

    pub fn push_number(&mut self, number: i64) -> &mut Self {
        self.numbers.push_back(number);
        self
    }

    pub fn last_message(&self) -> Option<&str> {
        self.messages.last().map(String::as_str)
    }

    pub fn saw_message(&self, text: &str) -> bool {
        self.messages.iter().any(|message| message == text)
    }

    /// Union of every refresh requested so far.
    pub fn refreshed(&self) -> Refresh {
        self.refreshes
            .iter()
            .fold(Refresh::NONE, |acc, layers| acc | *layers)
    }
}

impl Terminal for ScriptedTerminal {
    fn prompt(&mut self, question: &str, _valid: &[char]) -> Answer {
        self.prompts.push(question.to_owned());
        self.keys.pop_front().unwrap_or(Answer::Abort)
    }

    fn prompt_number(&mut self, question: &str) -> Option<i64> {
        self.prompts.push(question.to_owned());
        self.numbers.pop_front()
    }

    fn message(&mut self, text: &str) {
        self.messages.push(text.to_owned());
    }

    fn list_items(&mut self, entries: &[(SlotIndex, String)]) {
        self.listings.push(entries.to_vec());
    }

    fn refresh(&mut self, layers: Refresh) {
        self.refreshes.push(layers);
    }

    fn sight_fades(&mut self) {
        self.sight_faded += 1;
    }
}

/// One-tile world: a ground slot, a home-entrance flag and a log of every
/// effect the engine requested.
#[derive(Clone, Debug, Default)]
pub struct TestWorld {
    pub ground: Option<Item>,
    pub home_entrance: bool,
    pub depth: usize,
    pub map_revealed: bool,
    pub effects: Vec<WorldEffect>,
    pub turns_passed: usize,
    /// Handed out front to back; the last one repeats.
    pub fortunes: Vec<String>,
}

impl TestWorld {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ground(item: Item) -> Self {
        Self {
            ground: Some(item),
            ..Self::default()
        }
    }
}

impl World for TestWorld {
    fn ground(&self) -> Option<Item> {
        self.ground
    }

    fn set_ground(&mut self, item: Option<Item>) {
        self.ground = item;
    }

    fn on_home_entrance(&self) -> bool {
        self.home_entrance
    }

    fn depth(&self) -> usize {
        self.depth
    }

    fn reveal_map(&mut self) {
        self.map_revealed = true;
    }

    fn apply(&mut self, effect: WorldEffect) {
        self.effects.push(effect);
    }

    fn pass_turn(&mut self) {
        self.turns_passed += 1;
    }

    fn fortune(&mut self) -> Option<String> {
        if self.fortunes.len() > 1 {
            Some(self.fortunes.remove(0))
        } else {
            self.fortunes.first().cloned()
        }
    }
}

/// Rng that replays a fixed list of raw values, then repeats the last one.
#[derive(Clone, Debug)]
pub struct SequenceRng {
    values: Vec<u32>,
    cursor: usize,
}

impl SequenceRng {
    pub fn new(values: Vec<u32>) -> Self {
        Self { values, cursor: 0 }
    }

    /// Always yields `value`: `rnd(n)` is then `value % n + 1`.
    pub fn repeating(value: u32) -> Self {
        Self::new(vec![value])
    }

    /// Raw values handed out so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RngOracle for SequenceRng {
    fn next_u32(&mut self) -> u32 {
        let index = self.cursor.min(self.values.len().saturating_sub(1));
        self.cursor += 1;
        self.values.get(index).copied().unwrap_or(0)
    }
}
