//! Terminal oracle: prompts, messages and display refresh requests.

use crate::state::{Refresh, SlotIndex};

/// Key used to abort a prompt.
pub const ESCAPE: char = '\u{1b}';

/// Result of a constrained single-character prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Answer {
    Key(char),
    Abort,
}

/// Input and output collaborator.
///
/// Prompts block until answered; nothing else mutates state while one is
/// pending.
pub trait Terminal {
    /// Asks for one character. `valid` lists the answers the prompt offers;
    /// callers still validate whatever comes back.
    fn prompt(&mut self, question: &str, valid: &[char]) -> Answer;

    /// Asks for a number. `None` means the player gave up.
    fn prompt_number(&mut self, question: &str) -> Option<i64>;

    /// Fire-and-forget narrative output.
    fn message(&mut self, text: &str);

    /// Shows candidate items (slot and player-facing name) for a pending prompt.
    fn list_items(&mut self, entries: &[(SlotIndex, String)]);

    /// Redraws the given display layers.
    fn refresh(&mut self, layers: Refresh);

    /// Short visual flourish where the view dims for a moment.
    fn sight_fades(&mut self) {}
}
