// rc522/src/device/registers.rs
//! Register-level access to the chip.

use crate::transport::Transport;
use crate::types::Register;

/// Exclusive handle on the chip's register file.
///
/// Every higher layer talks to the chip only through this trait, so a
/// simulated register file (see [`crate::device::mock::MockChip`]) can stand
/// in for real hardware. Nothing is cached: each call is one bus round trip.
pub trait RegisterAccess {
    /// One read transaction.
    fn read_register(&mut self, reg: Register) -> u8;

    /// One write transaction.
    fn write_register(&mut self, reg: Register, value: u8);

    /// Read-modify-write setting `mask`. Not atomic; the bus is owned by a
    /// single caller.
    fn set_bits(&mut self, reg: Register, mask: u8) {
        let value = self.read_register(reg);
        self.write_register(reg, value | mask);
    }

    /// Read-modify-write clearing `mask`.
    fn clear_bits(&mut self, reg: Register, mask: u8) {
        let value = self.read_register(reg);
        self.write_register(reg, value & !mask);
    }

    /// Bring the chip out of power-down/reset. Default no-op.
    fn power_on(&mut self) {}
}

/// Register file reached over a serial [`Transport`].
pub struct RegisterBus {
    transport: Box<dyn Transport>,
}

impl RegisterBus {
    /// Talk to the chip over `transport`.
    pub fn new(transport: Box<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Release the underlying transport.
    pub fn into_inner(self) -> Box<dyn Transport> {
        self.transport
    }

    /// Run `f` with chip-select asserted for exactly its duration.
    fn transaction<T>(&mut self, f: impl FnOnce(&mut dyn Transport) -> T) -> T {
        self.transport.select();
        let out = f(&mut *self.transport);
        self.transport.deselect();
        out
    }
}

impl RegisterAccess for RegisterBus {
    fn read_register(&mut self, reg: Register) -> u8 {
        let value = self.transaction(|t| {
            t.transfer_byte(reg.read_address());
            t.transfer_byte(0x00)
        });
        log::trace!("read  {:?} -> {:#04x}", reg, value);
        value
    }

    fn write_register(&mut self, reg: Register, value: u8) {
        log::trace!("write {:?} <- {:#04x}", reg, value);
        self.transaction(|t| {
            t.transfer_byte(reg.write_address());
            t.transfer_byte(value);
        });
    }

    fn power_on(&mut self) {
        self.transport.reset();
    }
}
