//! Coordinator counters.

/// Counters describing how a coordinator has been driven.
///
/// `hides` counts every `hide()` request that armed a timer, while
/// `hides_fired` only counts timers that actually hid the overlay. The
/// difference is made up of timers that were cancelled by a later request,
/// tracked in `hides_superseded`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoordinatorStats {
    /// Number of `show()` calls.
    pub shows: u64,

    /// Number of `hide()` calls that armed a hide timer.
    pub hides: u64,

    /// Hide timers that ran to completion and hid the overlay.
    pub hides_fired: u64,

    /// Hide timers cancelled by a later `show()` or `hide()`.
    pub hides_superseded: u64,
}

impl CoordinatorStats {
    /// Hide timers that are neither fired nor superseded (0 or 1).
    pub fn hides_pending(&self) -> u64 {
        self.hides
            .saturating_sub(self.hides_fired)
            .saturating_sub(self.hides_superseded)
    }
}
