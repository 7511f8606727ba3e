// rc522/src/device/config.rs
//! Driver tuning knobs.

use crate::utils::PollBudget;

/// Runtime configuration of a [`crate::device::Device`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ReaderConfig {
    /// Polls of DivIrqReg while the CRC coprocessor runs
    pub crc_poll_budget: PollBudget,
    /// Polls of ComIrqReg while a transceive is in flight
    pub transceive_poll_budget: PollBudget,
    /// Recompute CRC_A over page reads and reject mismatching trailers.
    /// Off by default: the error register check is the only guard then.
    pub verify_read_crc: bool,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            crc_poll_budget: PollBudget::CRC,
            transceive_poll_budget: PollBudget::TRANSCEIVE,
            verify_read_crc: false,
        }
    }
}

impl ReaderConfig {
    /// Set the transceive poll budget.
    pub fn with_transceive_polls(mut self, polls: u32) -> Self {
        self.transceive_poll_budget = PollBudget::new(polls);
        self
    }

    /// Set the CRC coprocessor poll budget.
    pub fn with_crc_polls(mut self, polls: u32) -> Self {
        self.crc_poll_budget = PollBudget::new(polls);
        self
    }

    /// Enable or disable CRC verification of page reads.
    pub fn with_read_crc_check(mut self, enabled: bool) -> Self {
        self.verify_read_crc = enabled;
        self
    }
}
