// rc522/src/error.rs
//! Error type, fault categories and the binary status view.

use thiserror::Error;

/// Common error type for every layer of the driver stack.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Neither a transport nor a register interface was supplied.
    #[error("no register interface or transport configured")]
    DeviceNotFound,

    /// A bounded poll ran out before the chip signalled completion.
    #[error("operation timed out after {polls} polls")]
    Timeout {
        /// Polls spent
        polls: u32,
    },

    /// The chip's error register flagged the exchange.
    #[error("chip reported error flags {flags:#04x}")]
    Hardware {
        /// ErrorReg bits within the error mask
        flags: u8,
    },

    /// The card answered with an unexpected number of bits.
    #[error("invalid response length: expected {expected} bits, got {actual}")]
    InvalidBitLength {
        /// Bits the command requires
        expected: usize,
        /// Bits received
        actual: usize,
    },

    /// A UID level failed its check byte.
    #[error("uid check byte mismatch: level xor is {residue:#04x}")]
    BccMismatch {
        /// XOR over all five bytes, zero when intact
        residue: u8,
    },

    /// The card answered a write with something other than ACK.
    #[error("card did not acknowledge: code {code:#04x}")]
    Nak {
        /// Low nibble of the 4-bit answer
        code: u8,
    },

    /// A CRC_A trailer did not match the data it covers.
    #[error("crc mismatch: expected {expected:#06x}, got {actual:#06x}")]
    CrcMismatch {
        /// CRC computed over the data
        expected: u16,
        /// CRC received from the card
        actual: u16,
    },

    /// A frame does not fit the buffer or the chip FIFO.
    #[error("frame of {len} bytes exceeds capacity of {capacity}")]
    FrameTooLong {
        /// Bytes to send
        len: usize,
        /// Bytes available
        capacity: usize,
    },

    /// The card needs a third cascade level.
    #[error("uid continues beyond cascade level 2")]
    UidTooLong,
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Coarse fault category carried by every [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultKind {
    /// A bounded poll loop ran out of iterations.
    Timeout,
    /// The chip error register flagged the exchange.
    Hardware,
    /// The exchange completed but the reply broke the card protocol.
    Protocol,
    /// The driver was assembled without the pieces it needs.
    Configuration,
}

impl Error {
    /// Fault category of this error.
    pub fn kind(&self) -> FaultKind {
        match self {
            Error::Timeout { .. } => FaultKind::Timeout,
            Error::Hardware { .. } => FaultKind::Hardware,
            Error::InvalidBitLength { .. }
            | Error::BccMismatch { .. }
            | Error::Nak { .. }
            | Error::CrcMismatch { .. }
            | Error::FrameTooLong { .. }
            | Error::UidTooLong => FaultKind::Protocol,
            Error::DeviceNotFound => FaultKind::Configuration,
        }
    }
}

/// Binary OK/ERR view of an operation outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The operation succeeded
    Ok,
    /// The operation failed, whatever the cause
    Err,
}

impl Status {
    /// True for [`Status::Ok`]
    pub fn is_ok(self) -> bool {
        self == Status::Ok
    }
}

impl<T> From<&Result<T>> for Status {
    fn from(result: &Result<T>) -> Self {
        match result {
            Ok(_) => Status::Ok,
            Err(_) => Status::Err,
        }
    }
}

/// Collapse a driver result into its [`Status`].
pub trait StatusExt {
    /// OK/ERR view of this result.
    fn status(&self) -> Status;
}

impl<T> StatusExt for Result<T> {
    fn status(&self) -> Status {
        Status::from(self)
    }
}
