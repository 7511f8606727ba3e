//! REQA and WUPA.

use crate::constants::MAX_FRAME_LEN;
use crate::device::{Device, Initialized};
use crate::protocol::Command;
use crate::types::{Atqa, RequestCode};
use crate::{Error, Result};

const ATQA_BITS: usize = 16;

/// Send REQA or WUPA as a 7-bit short frame and expect a 2-byte ATQA.
///
/// A reply of any other length is rejected even when the chip reported a
/// clean exchange.
pub fn request_card(device: &mut Device<Initialized>, code: RequestCode) -> Result<Atqa> {
    let mut frame = [0u8; MAX_FRAME_LEN];
    let bits = device.execute(&Command::Request(code), &mut frame)?;
    if bits != ATQA_BITS {
        log::debug!("request {:?}: {} bit answer", code, bits);
        return Err(Error::InvalidBitLength {
            expected: ATQA_BITS,
            actual: bits,
        });
    }
    Ok(Atqa::from([frame[0], frame[1]]))
}
