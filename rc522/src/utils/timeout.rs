//! Bounded polling.
//!
//! The chip never raises an interrupt line here; completion is observed by
//! re-reading a status register. A [`PollBudget`] caps how many reads a wait
//! may spend, so the effective timeout depends on bus speed rather than on a
//! wall clock, and tests can force the timeout path with a tiny budget.

use crate::constants::{CRC_POLL_BUDGET, TRANSCEIVE_POLL_BUDGET};

/// Maximum number of status polls a wait loop may perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PollBudget(u32);

impl PollBudget {
    /// Budget of the CRC coprocessor wait
    pub const CRC: Self = Self(CRC_POLL_BUDGET);
    /// Budget of the transceive wait
    pub const TRANSCEIVE: Self = Self(TRANSCEIVE_POLL_BUDGET);

    /// Budget of `polls` reads.
    pub const fn new(polls: u32) -> Self {
        Self(polls)
    }

    /// Number of reads allowed.
    pub fn polls(&self) -> u32 {
        self.0
    }

    /// Call `probe` until it yields a value or the budget is spent.
    ///
    /// `probe` runs at least once even for a zero budget, matching a
    /// do/while register poll.
    pub fn poll<T, F>(self, mut probe: F) -> Option<T>
    where
        F: FnMut() -> Option<T>,
    {
        let mut remaining = self.0;
        loop {
            let found = probe();
            remaining = remaining.saturating_sub(1);
            if found.is_some() {
                return found;
            }
            if remaining == 0 {
                return None;
            }
        }
    }
}
