//! Anticollision and select for one cascade level.

use crate::constants::MAX_FRAME_LEN;
use crate::device::{Device, Initialized};
use crate::protocol::Command;
use crate::types::{CascadeLevel, Sak, UidLevel};
use crate::{Error, Result};

const UID_LEVEL_BITS: usize = 40;
const SAK_BITS: usize = 24;

/// Ask the card for one UID level (4 bytes plus check byte).
///
/// The check byte is verified here on top of the chip's own error flags:
/// a level whose five bytes do not XOR to zero is a transmission error.
pub fn read_uid(
    device: &mut Device<Initialized>,
    level: CascadeLevel,
    nvb: u8,
) -> Result<UidLevel> {
    let mut frame = [0u8; MAX_FRAME_LEN];
    let bits = device.execute(&Command::Anticollision { level, nvb }, &mut frame)?;
    if bits != UID_LEVEL_BITS {
        log::debug!("anticollision {:?}: {} bit answer", level, bits);
        return Err(Error::InvalidBitLength {
            expected: UID_LEVEL_BITS,
            actual: bits,
        });
    }

    let uid = UidLevel::from_raw([frame[0], frame[1], frame[2], frame[3], frame[4]]);
    let residue = uid.residue();
    if residue != 0 {
        log::debug!("anticollision {:?}: bcc residue {:#04x}", level, residue);
        return Err(Error::BccMismatch { residue });
    }
    Ok(uid)
}

/// Select the card owning `uid` at `level`. The answer must be exactly
/// SAK plus its two CRC bytes.
pub fn select_card(
    device: &mut Device<Initialized>,
    level: CascadeLevel,
    nvb: u8,
    uid: [u8; 4],
) -> Result<Sak> {
    let mut frame = [0u8; MAX_FRAME_LEN];
    let bits = device.execute(&Command::Select { level, nvb, uid }, &mut frame)?;
    if bits != SAK_BITS {
        log::debug!("select {:?}: {} bit answer", level, bits);
        return Err(Error::InvalidBitLength {
            expected: SAK_BITS,
            actual: bits,
        });
    }
    Ok(Sak::new(frame[0], [frame[1], frame[2]]))
}
