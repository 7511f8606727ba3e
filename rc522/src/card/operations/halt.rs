//! HLTA.

use crate::Result;
use crate::constants::MAX_FRAME_LEN;
use crate::device::{Device, Initialized};
use crate::protocol::Command;

/// Send HLTA. A halted card does not answer, so `Err(Timeout)` is the
/// expected outcome; the result is informational only.
pub fn halt(device: &mut Device<Initialized>) -> Result<()> {
    let mut frame = [0u8; MAX_FRAME_LEN];
    device.execute(&Command::Halt, &mut frame).map(|_| ())
}
