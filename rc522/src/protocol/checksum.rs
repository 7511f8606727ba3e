// rc522/src/protocol/checksum.rs
//! CRC_A in software and on the chip coprocessor.

use crate::constants::{CRC_IRQ, FLUSH_BUFFER};
use crate::device::registers::RegisterAccess;
use crate::types::{ChipCommand, Register};
use crate::utils::PollBudget;
use crate::{Error, Result};

/// Software CRC_A (ISO/IEC 14443-3): preset 0x6363, reflected polynomial
/// 0x8408, result little endian.
pub fn crc_a(data: &[u8]) -> [u8; 2] {
    let crc = data.iter().fold(0x6363u16, |crc, &b| {
        let mut x = b ^ (crc as u8);
        x ^= x << 4;
        let x = x as u16;
        (crc >> 8) ^ (x << 8) ^ (x << 3) ^ (x >> 4)
    });
    crc.to_le_bytes()
}

/// Compare a CRC trailer received from a card against `data`.
pub fn verify_crc_a(data: &[u8], received: [u8; 2]) -> Result<()> {
    let expected = crc_a(data);
    if expected == received {
        Ok(())
    } else {
        Err(Error::CrcMismatch {
            expected: u16::from_le_bytes(expected),
            actual: u16::from_le_bytes(received),
        })
    }
}

/// Run the chip's CRC coprocessor over `data`.
///
/// Soft timeout: when the budget runs out before the chip reports
/// completion, whatever the result registers hold is still returned.
/// Callers relying on the value must cross-check it against the card's
/// own CRC.
pub fn calculate_crc(chip: &mut dyn RegisterAccess, data: &[u8], budget: PollBudget) -> [u8; 2] {
    chip.write_register(Register::DivIrqReg, CRC_IRQ);
    chip.write_register(Register::CommandReg, ChipCommand::Idle.into());
    chip.set_bits(Register::FIFOLevelReg, FLUSH_BUFFER);
    for &b in data {
        chip.write_register(Register::FIFODataReg, b);
    }
    chip.write_register(Register::CommandReg, ChipCommand::CalcCrc.into());

    let done = budget.poll(|| {
        (chip.read_register(Register::DivIrqReg) & CRC_IRQ != 0).then_some(())
    });
    if done.is_none() {
        log::warn!(
            "crc coprocessor silent after {} polls, using stale result",
            budget.polls()
        );
    }

    [
        chip.read_register(Register::CRCResultRegLow),
        chip.read_register(Register::CRCResultRegHigh),
    ]
}
