// rc522/src/types.rs
//! Register map, command opcodes and the values exchanged with a card.

use derive_more::{AsRef, From};

/// Addressable registers of the MFRC522, all four pages.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Register {
    // page 0: command and status
    /// Starts and stops command execution
    CommandReg = 0x01,
    /// Interrupt request enables, ComIrqReg
    ComIEnReg = 0x02,
    /// Interrupt request enables, DivIrqReg
    DivIEnReg = 0x03,
    /// Interrupt request bits
    ComIrqReg = 0x04,
    /// Interrupt request bits, CRC and MFIN
    DivIrqReg = 0x05,
    /// Error flags of the last command
    ErrorReg = 0x06,
    /// Communication status
    Status1Reg = 0x07,
    /// Receiver, transmitter and data mode status
    Status2Reg = 0x08,
    /// FIFO input and output
    FIFODataReg = 0x09,
    /// Bytes stored in the FIFO
    FIFOLevelReg = 0x0A,
    /// FIFO warning level
    WaterLevelReg = 0x0B,
    /// Miscellaneous control, last received bits
    ControlReg = 0x0C,
    /// Bit-oriented frame adjustments
    BitFramingReg = 0x0D,
    /// First bit collision detected
    CollReg = 0x0E,
    // page 1: command
    /// Transmit and receive modes, CRC preset
    ModeReg = 0x11,
    /// Transmission data rate and framing
    TxModeReg = 0x12,
    /// Reception data rate and framing
    RxModeReg = 0x13,
    /// Antenna driver pins TX1 and TX2
    TxControlReg = 0x14,
    /// Transmit modulation setting
    TxAutoReg = 0x15,
    /// Internal sources for the antenna drivers
    TxSelReg = 0x16,
    /// Internal receiver settings
    RxSelReg = 0x17,
    /// Bit decoder thresholds
    RxThresholdReg = 0x18,
    /// Demodulator settings
    DemodReg = 0x19,
    /// MIFARE communication transmit parameters
    MifareReg = 0x1C,
    /// UART speed
    SerialSpeedReg = 0x1F,
    // page 2: configuration
    /// CRC result, high byte
    CRCResultRegHigh = 0x21,
    /// CRC result, low byte
    CRCResultRegLow = 0x22,
    /// Modulation width
    ModWidthReg = 0x24,
    /// Receiver gain
    RFCfgReg = 0x26,
    /// Antenna driver n-channel conductance
    GsNReg = 0x27,
    /// Antenna driver p-channel conductance, no modulation
    CWGsCfgReg = 0x28,
    /// Antenna driver p-channel conductance, modulation
    ModGsCfgReg = 0x29,
    /// Timer settings
    TModeReg = 0x2A,
    /// Timer prescaler, low bits
    TPrescalerReg = 0x2B,
    /// Timer reload value, high byte
    TReloadRegHigh = 0x2C,
    /// Timer reload value, low byte
    TReloadRegLow = 0x2D,
    /// Timer value, high byte
    TCounterValueRegHigh = 0x2E,
    /// Timer value, low byte
    TCounterValueRegLow = 0x2F,
    // page 3: test
    /// Test signal configuration
    TestSel1Reg = 0x31,
    /// Test signal configuration and PRBS control
    TestSel2Reg = 0x32,
    /// Test pin output drivers
    TestPinEnReg = 0x33,
    /// Test pin values
    TestPinValueReg = 0x34,
    /// Internal test bus status
    TestBusReg = 0x35,
    /// Digital self-test
    AutoTestReg = 0x36,
    /// Chip version
    VersionReg = 0x37,
    /// Analog test pins
    AnalogTestReg = 0x38,
    /// Test value for TestDAC1
    TestDAC1Reg = 0x39,
    /// Test value for TestDAC2
    TestDAC2Reg = 0x3A,
    /// ADC I and Q channel values
    TestADCReg = 0x3B,
}

impl Register {
    /// Register address, 0x00..=0x3F
    pub fn address(self) -> u8 {
        self as u8
    }

    /// First byte of a read transaction: `(addr << 1) | 0x80`
    pub fn read_address(self) -> u8 {
        (self.address() << 1) | 0x80
    }

    /// First byte of a write transaction: `(addr << 1) & 0x7E`
    pub fn write_address(self) -> u8 {
        (self.address() << 1) & 0x7E
    }
}

/// Commands understood by the chip's CommandReg.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChipCommand {
    /// No action, cancels the running command
    Idle = 0x00,
    /// Run the CRC coprocessor over the FIFO
    CalcCrc = 0x03,
    /// Transmit the FIFO
    Transmit = 0x04,
    /// Activate the receiver
    Receive = 0x08,
    /// Transmit the FIFO, then receive
    Transceive = 0x0C,
    /// MIFARE standard authentication
    MfAuthent = 0x0E,
    /// Reset the chip
    SoftReset = 0x0F,
}

impl From<ChipCommand> for u8 {
    fn from(command: ChipCommand) -> u8 {
        command as u8
    }
}

/// Opcodes sent over the air to the card.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PiccCommand {
    /// REQA
    ReqA = 0x26,
    /// WUPA
    WupA = 0x52,
    /// HLTA
    HltA = 0x50,
    /// Anticollision/select, cascade level 1
    SelCl1 = 0x93,
    /// Anticollision/select, cascade level 2
    SelCl2 = 0x95,
    /// Read four pages
    Read = 0x30,
    /// Write one page
    Write = 0xA2,
}

/// Short frame used to wake cards up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestCode {
    /// REQA: only cards in IDLE state answer
    Idle,
    /// WUPA: cards in IDLE and HALT state answer
    All,
}

impl RequestCode {
    /// Opcode of the short frame
    pub fn command(self) -> PiccCommand {
        match self {
            RequestCode::Idle => PiccCommand::ReqA,
            RequestCode::All => PiccCommand::WupA,
        }
    }
}

/// Anticollision cascade level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CascadeLevel {
    /// Cascade level 1
    One,
    /// Cascade level 2
    Two,
}

impl CascadeLevel {
    /// SEL opcode of this level
    pub fn command(self) -> PiccCommand {
        match self {
            CascadeLevel::One => PiccCommand::SelCl1,
            CascadeLevel::Two => PiccCommand::SelCl2,
        }
    }
}

/// Answer To reQuest, type A
#[derive(Debug, Clone, Copy, PartialEq, Eq, From, AsRef)]
pub struct Atqa([u8; 2]);

impl Atqa {
    /// Raw ATQA bytes as received
    pub fn as_bytes(&self) -> &[u8; 2] {
        &self.0
    }
}

/// One anticollision level: four UID bytes followed by their check byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UidLevel {
    bytes: [u8; 4],
    bcc: u8,
}

impl UidLevel {
    /// Split a raw 5-byte level. The check byte is not validated here.
    pub fn from_raw(raw: [u8; 5]) -> Self {
        Self {
            bytes: [raw[0], raw[1], raw[2], raw[3]],
            bcc: raw[4],
        }
    }

    /// The four UID bytes of this level
    pub fn as_bytes(&self) -> &[u8; 4] {
        &self.bytes
    }

    /// Check byte as received
    pub fn bcc(&self) -> u8 {
        self.bcc
    }

    /// XOR of all five bytes; zero for an intact level.
    pub fn residue(&self) -> u8 {
        bcc(&self.bytes) ^ self.bcc
    }

    /// True when the level only carries the first 3 bytes of a longer UID.
    pub fn is_cascade_tag(&self) -> bool {
        self.bytes[0] == crate::constants::CASCADE_TAG
    }
}

/// Block check character over a UID level.
pub fn bcc(bytes: &[u8]) -> u8 {
    bytes.iter().fold(0u8, |acc, &b| acc ^ b)
}

/// Select AcKnowledge with the two CRC bytes that trailed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sak {
    value: u8,
    crc: [u8; 2],
}

impl Sak {
    /// SAK byte and the CRC_A that trailed it
    pub fn new(value: u8, crc: [u8; 2]) -> Self {
        Self { value, crc }
    }

    /// The SAK byte
    pub fn value(&self) -> u8 {
        self.value
    }

    /// CRC_A bytes, low byte first
    pub fn crc(&self) -> [u8; 2] {
        self.crc
    }

    /// The UID continues in the next cascade level.
    pub fn is_uid_incomplete(&self) -> bool {
        self.value & crate::constants::SAK_CASCADE_BIT != 0
    }
}

/// Complete card identifier assembled from one or two cascade levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Uid {
    /// Single size UID, 4 bytes
    Single([u8; 4]),
    /// Double size UID, 7 bytes
    Double([u8; 7]),
}

impl Uid {
    /// UID bytes without cascade tags
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Uid::Single(b) => b,
            Uid::Double(b) => b,
        }
    }

    /// Lowercase hex, no separators
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

/// Four 4-byte pages returned by one READ command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, From, AsRef)]
pub struct PageData([u8; 16]);

impl PageData {
    /// All 16 bytes
    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Bytes of the `n`-th page (0..4) within this read.
    pub fn page(&self, n: usize) -> Option<[u8; 4]> {
        let chunk = self.0.chunks_exact(4).nth(n)?;
        Some([chunk[0], chunk[1], chunk[2], chunk[3]])
    }

    /// Lowercase hex, one space between bytes
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex_spaced(self.as_bytes())
    }
}
