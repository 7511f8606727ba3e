// rc522/src/protocol/commands.rs
//! Card command frames.

use crate::constants::{NVB_ANTICOLLISION, SHORT_FRAME_BITS};
use crate::types::{CascadeLevel, PiccCommand, RequestCode, bcc};

/// Card commands issued by the protocol layer. Each variant knows its
/// on-air payload; CRC_A is appended separately when [`Command::needs_crc`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// REQA or WUPA short frame
    Request(RequestCode),
    /// Ask for the UID of one cascade level
    Anticollision {
        /// Cascade level
        level: CascadeLevel,
        /// Number of valid bits
        nvb: u8,
    },
    /// Select the card owning `uid`
    Select {
        /// Cascade level
        level: CascadeLevel,
        /// Number of valid bits
        nvb: u8,
        /// UID bytes of this level
        uid: [u8; 4],
    },
    /// Read four pages
    Read {
        /// First page
        page: u8,
    },
    /// Write one page
    Write {
        /// Target page
        page: u8,
        /// Page contents
        data: [u8; 4],
    },
    /// Put the card to sleep
    Halt,
}

impl Command {
    /// Anticollision with the NVB asking for a full level.
    pub fn anticollision(level: CascadeLevel) -> Self {
        Command::Anticollision {
            level,
            nvb: NVB_ANTICOLLISION,
        }
    }

    /// First byte on air.
    pub fn command_code(&self) -> u8 {
        let cmd = match self {
            Command::Request(code) => code.command(),
            Command::Anticollision { level, .. } | Command::Select { level, .. } => {
                level.command()
            }
            Command::Read { .. } => PiccCommand::Read,
            Command::Write { .. } => PiccCommand::Write,
            Command::Halt => PiccCommand::HltA,
        };
        cmd as u8
    }

    /// Payload without CRC. A select frame carries the UID check byte.
    pub fn encode(&self) -> Vec<u8> {
        let code = self.command_code();
        match self {
            Command::Request(_) => vec![code],
            Command::Anticollision { nvb, .. } => vec![code, *nvb],
            Command::Select { nvb, uid, .. } => {
                let mut out = Vec::with_capacity(7);
                out.push(code);
                out.push(*nvb);
                out.extend_from_slice(uid);
                out.push(bcc(uid));
                out
            }
            Command::Read { page } => vec![code, *page],
            Command::Write { page, data } => {
                let mut out = Vec::with_capacity(6);
                out.push(code);
                out.push(*page);
                out.extend_from_slice(data);
                out
            }
            Command::Halt => vec![code, 0x00],
        }
    }

    /// Whether CRC_A is appended before sending.
    pub fn needs_crc(&self) -> bool {
        matches!(
            self,
            Command::Select { .. } | Command::Read { .. } | Command::Write { .. } | Command::Halt
        )
    }

    /// BitFramingReg TxLastBits for this command: 7 for short frames,
    /// 0 (whole bytes) otherwise.
    pub fn tx_last_bits(&self) -> u8 {
        match self {
            Command::Request(_) => SHORT_FRAME_BITS,
            _ => 0,
        }
    }
}
