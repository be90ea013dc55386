/// Turn bookkeeping owned by the player state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TurnState {
    /// Global game clock, advanced by the scheduler.
    pub clock: u64,

    /// Alternates while hasted; the clock advances only when it is clear.
    pub haste_step: bool,

    /// Set by a drop so the ground item is not offered straight back.
    pub drop_flag: bool,
}

impl TurnState {
    /// Creates a new turn state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the clock by a signed amount, stopping at zero.
    pub fn shift_clock(&mut self, delta: i64) {
        self.clock = self.clock.saturating_add_signed(delta);
    }
}
