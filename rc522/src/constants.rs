// rc522/src/constants.rs
//! Chip and card protocol constants used across the crate

/// Capacity of a frame buffer used for one transceive exchange
pub const MAX_FRAME_LEN: usize = 18;

/// Size of the chip's internal FIFO in bytes
pub const FIFO_CAPACITY: usize = 64;

/// Register polls spent waiting for the CRC coprocessor
pub const CRC_POLL_BUDGET: u32 = 255;

/// Register polls spent waiting for a transceive to complete
pub const TRANSCEIVE_POLL_BUDGET: u32 = 1000;

/// Low nibble of a card acknowledgement
pub const MIFARE_ACK: u8 = 0x0A;

/// NVB argument asking the card for its full UID level
pub const NVB_ANTICOLLISION: u8 = 0x20;
/// NVB argument announcing 7 valid bytes (a complete select frame)
pub const NVB_SELECT: u8 = 0x70;

/// First byte of a UID level that continues in the next cascade level
pub const CASCADE_TAG: u8 = 0x88;
/// SAK bit signalling that the UID is not complete yet
pub const SAK_CASCADE_BIT: u8 = 0x04;

/// Set1 bit of ComIrqReg/DivIrqReg: marked bits are set instead of cleared
pub const IRQ_SET: u8 = 0x80;
/// Every interrupt request bit of ComIrqReg
pub const IRQ_ALL: u8 = 0x7F;
/// ComIrqReg: receiver detected the end of a valid stream
pub const RX_IRQ: u8 = 0x20;
/// ComIrqReg: command terminated, chip went idle
pub const IDLE_IRQ: u8 = 0x10;

/// DivIrqReg: CRC coprocessor finished
pub const CRC_IRQ: u8 = 0x04;

/// FIFOLevelReg: empty the FIFO
pub const FLUSH_BUFFER: u8 = 0x80;

/// BitFramingReg: start transmission of a transceive
pub const START_SEND: u8 = 0x80;
/// BitFramingReg: valid bits of the last transmitted byte
pub const TX_LAST_BITS_MASK: u8 = 0x07;
/// REQA and WUPA are short frames of 7 bits
pub const SHORT_FRAME_BITS: u8 = 0x07;

/// ControlReg: valid bits of the last received byte, 0 for a full byte
pub const RX_LAST_BITS_MASK: u8 = 0x07;

/// ErrorReg bits that fail an exchange: buffer overflow, collision, parity
/// and protocol errors
pub const ERROR_MASK: u8 = 0x1B;

/// TxControlReg: Tx1RFEn | Tx2RFEn
pub const ANTENNA_ON: u8 = 0x03;

/// TxAutoReg value forcing 100% ASK modulation
pub const TX_AUTO_FORCE_100_ASK: u8 = 0x40;
/// TxWaitRF, MSB first CRC, CRC preset 0x6363
pub const MODE_CRC_PRESET_6363: u8 = 0x3D;
