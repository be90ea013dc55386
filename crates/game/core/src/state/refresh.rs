use bitflags::bitflags;

bitflags! {
    /// Which display layers a mutation invalidated.
    ///
    /// Mutating operations return one of these instead of redrawing; callers
    /// union the results and flush once per command or turn.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct Refresh: u8 {
        /// Bottom status line (abilities, HP, AC/WC, gold, level).
        const STATUS  = 1 << 0;
        /// Side panel of active timed effects.
        const EFFECTS = 1 << 1;
    }
}

impl Refresh {
    pub const NONE: Refresh = Refresh::empty();
    pub const BOTH: Refresh = Refresh::all();
}
