// rc522/src/protocol/transceive.rs
//! The transceive command engine.

use crate::constants::{
    ERROR_MASK, FIFO_CAPACITY, FLUSH_BUFFER, IDLE_IRQ, IRQ_ALL, MAX_FRAME_LEN, RX_IRQ,
    RX_LAST_BITS_MASK, START_SEND,
};
use crate::device::registers::RegisterAccess;
use crate::types::{ChipCommand, Register};
use crate::utils::{PollBudget, bytes_to_hex_spaced};
use crate::{Error, Result};

/// Send `frame[..tx_len]` to the card and receive its answer into `frame`.
///
/// `frame` is both input and output: the reply overwrites it from index 0,
/// so callers must not expect the transmitted bytes to survive a successful
/// exchange. Returns the number of received bits. The reply is only copied
/// out after the chip signalled completion and the error register is clean;
/// on any error `frame` is left untouched. The chip is idle on return.
pub fn transceive(
    chip: &mut dyn RegisterAccess,
    frame: &mut [u8],
    tx_len: usize,
    budget: PollBudget,
) -> Result<usize> {
    let capacity = frame.len().min(FIFO_CAPACITY);
    if tx_len > capacity {
        return Err(Error::FrameTooLong {
            len: tx_len,
            capacity,
        });
    }

    log::trace!("transceive tx [{}]", bytes_to_hex_spaced(&frame[..tx_len]));

    chip.write_register(Register::ComIrqReg, IRQ_ALL);
    chip.write_register(Register::CommandReg, ChipCommand::Idle.into());
    chip.set_bits(Register::FIFOLevelReg, FLUSH_BUFFER);
    for &b in &frame[..tx_len] {
        chip.write_register(Register::FIFODataReg, b);
    }
    chip.write_register(Register::CommandReg, ChipCommand::Transceive.into());
    chip.set_bits(Register::BitFramingReg, START_SEND);

    let completed = budget.poll(|| {
        let irq = chip.read_register(Register::ComIrqReg);
        (irq & (RX_IRQ | IDLE_IRQ) != 0).then_some(irq)
    });

    chip.clear_bits(Register::BitFramingReg, START_SEND);

    let result = match completed {
        None => Err(Error::Timeout {
            polls: budget.polls(),
        }),
        Some(_) => {
            let flags = chip.read_register(Register::ErrorReg) & ERROR_MASK;
            if flags != 0 {
                Err(Error::Hardware { flags })
            } else {
                Ok(drain_fifo(chip, frame))
            }
        }
    };

    chip.write_register(Register::CommandReg, ChipCommand::Idle.into());

    match &result {
        Ok(bits) => log::trace!("transceive rx {} bits", bits),
        Err(e) => log::debug!("transceive failed: {}", e),
    }
    result
}

/// Copy the received bytes out of the FIFO and return the received bit
/// count. At least one byte is always drained; at most the frame capacity.
fn drain_fifo(chip: &mut dyn RegisterAccess, frame: &mut [u8]) -> usize {
    let level = (chip.read_register(Register::FIFOLevelReg) & 0x7F) as usize;
    let last_bits = (chip.read_register(Register::ControlReg) & RX_LAST_BITS_MASK) as usize;
    let bits = if last_bits != 0 {
        level.saturating_sub(1) * 8 + last_bits
    } else {
        level * 8
    };

    let count = level.max(1).min(frame.len().min(MAX_FRAME_LEN));
    for slot in frame[..count].iter_mut() {
        *slot = chip.read_register(Register::FIFODataReg);
    }
    bits
}
