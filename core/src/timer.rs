//! Handles for host-scheduled callbacks.
//!
//! The host owns the clock: it schedules a per-second tick for a bonus round and a single
//! deferred call after a correct answer, then hands the handle back to the controller. Each handle
//! carries the epoch it was issued in, and the controller bumps its epoch whenever the state a
//! handle refers to goes away, so a late callback from a superseded round or session is ignored.

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Epoch(u32);

impl Epoch {
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

/// Handle for the repeating one-second bonus-round tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TimerToken {
    epoch: Epoch,
}

impl TimerToken {
    pub(crate) const fn new(epoch: Epoch) -> Self {
        Self { epoch }
    }

    pub const fn epoch(self) -> Epoch {
        self.epoch
    }
}

/// Handle for the one-shot "load the next word" call made after the correct-answer window.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct AdvanceTicket {
    epoch: Epoch,
}

impl AdvanceTicket {
    pub(crate) const fn new(epoch: Epoch) -> Self {
        Self { epoch }
    }

    pub const fn epoch(self) -> Epoch {
        self.epoch
    }
}
