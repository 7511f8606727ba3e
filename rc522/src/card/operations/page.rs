//! Page read and write.

use crate::constants::{MAX_FRAME_LEN, MIFARE_ACK};
use crate::device::{Device, Initialized};
use crate::protocol::{Command, verify_crc_a};
use crate::types::PageData;
use crate::{Error, Result};

const READ_BITS: usize = 144;
const ACK_BITS: usize = 4;

/// Read 16 bytes starting at `page`.
///
/// The answer must be exactly 16 data bytes plus 2 CRC bytes. The CRC is
/// only checked when [`crate::device::ReaderConfig::verify_read_crc`] is set.
pub fn read_page(device: &mut Device<Initialized>, page: u8) -> Result<PageData> {
    let mut frame = [0u8; MAX_FRAME_LEN];
    let bits = device.execute(&Command::Read { page }, &mut frame)?;
    if bits != READ_BITS {
        log::debug!("read page {}: {} bit answer", page, bits);
        return Err(Error::InvalidBitLength {
            expected: READ_BITS,
            actual: bits,
        });
    }

    if device.config().verify_read_crc {
        verify_crc_a(&frame[..16], [frame[16], frame[17]])?;
    }

    let mut data = [0u8; 16];
    data.copy_from_slice(&frame[..16]);
    Ok(PageData::from(data))
}

/// Write 4 bytes to `page` and wait for the card's 4-bit ACK.
pub fn write_page(device: &mut Device<Initialized>, page: u8, data: [u8; 4]) -> Result<()> {
    let mut frame = [0u8; MAX_FRAME_LEN];
    let bits = device.execute(&Command::Write { page, data }, &mut frame)?;
    if bits != ACK_BITS {
        log::debug!("write page {}: {} bit answer", page, bits);
        return Err(Error::InvalidBitLength {
            expected: ACK_BITS,
            actual: bits,
        });
    }

    let code = frame[0] & 0x0F;
    if code != MIFARE_ACK {
        log::debug!("write page {}: nak {:#x}", page, code);
        return Err(Error::Nak { code });
    }
    Ok(())
}
