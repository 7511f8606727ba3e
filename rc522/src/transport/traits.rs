// rc522/src/transport/traits.rs
//! The transport trait.

/// Byte-level access to the reader chip's serial port.
///
/// Transfers cannot fail: the bus is plain signal toggling and the chip
/// gives no acknowledgement. Scoping the chip-select line around a
/// transaction is the caller's job (see `device::registers::RegisterBus`).
pub trait Transport {
    /// Shift `out` MSB first while sampling the same number of bits in.
    /// The clock line is left low on return.
    fn transfer_byte(&mut self, out: u8) -> u8;

    /// Assert the active-low chip-select line.
    fn select(&mut self);

    /// Release the chip-select line.
    fn deselect(&mut self);

    /// Power the chip up and pulse its reset line. Transports without
    /// control lines keep the default no-op.
    fn reset(&mut self) {}
}
