//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common MockChip setup so tests across the
//! crate and the tests/ directory can reuse the same logic.

use std::cell::RefCell;
use std::rc::Rc;

use crate::device::{self, CardReply, MockChip, ReaderConfig};

/// Install `env_logger` once so `RUST_LOG=trace` shows register traffic.
#[cfg(test)]
pub(crate) fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Build a MockChip pre-seeded with the given card replies.
#[doc(hidden)]
pub fn mock_with_replies(replies: Vec<CardReply>) -> MockChip {
    let mut chip = MockChip::new();
    for reply in replies {
        chip.push_reply(reply);
    }
    chip
}

/// Create and initialize a Device<Initialized> backed by a MockChip
/// pre-seeded with `replies`, and keep a shared handle on the chip so the
/// caller can inspect registers and transmitted frames afterwards.
#[doc(hidden)]
pub fn shared_mock_device(
    replies: Vec<CardReply>,
) -> (device::Device<device::Initialized>, Rc<RefCell<MockChip>>) {
    shared_mock_device_with_config(replies, ReaderConfig::default())
}

/// [`shared_mock_device`] with a custom configuration.
#[doc(hidden)]
pub fn shared_mock_device_with_config(
    replies: Vec<CardReply>,
    config: ReaderConfig,
) -> (device::Device<device::Initialized>, Rc<RefCell<MockChip>>) {
    let chip = mock_with_replies(replies).shared();
    let dev = device::Device::new_with_chip(Box::new(chip.clone()))
        .with_config(config)
        .initialize();
    (dev, chip)
}
