// rc522/src/device/mock.rs
//! Simulated MFRC522 register file.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::constants::{
    CRC_IRQ, FLUSH_BUFFER, IRQ_SET, RX_IRQ, RX_LAST_BITS_MASK, START_SEND, TX_LAST_BITS_MASK,
};
use crate::device::registers::RegisterAccess;
use crate::protocol::checksum::crc_a;
use crate::types::{ChipCommand, Register};

const ERR_IRQ: u8 = 0x02;
const BUFFER_OVFL: u8 = 0x10;
const DEFAULT_VERSION: u8 = 0x92;

/// What the simulated card does in answer to one transceive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardReply {
    /// Reply bytes; `last_bits` valid bits in the final byte, 0 for a full byte.
    Frame {
        /// Bytes placed in the FIFO
        bytes: Vec<u8>,
        /// Valid bits of the last byte
        last_bits: u8,
    },
    /// Reception completes with these ErrorReg flags and an empty FIFO.
    Error {
        /// ErrorReg value
        flags: u8,
    },
    /// No completion is ever signalled.
    Silent,
}

impl CardReply {
    /// Reply made of full bytes.
    pub fn bytes(bytes: &[u8]) -> Self {
        Self::bits(bytes, 0)
    }

    /// Reply whose last byte carries `last_bits` valid bits.
    pub fn bits(bytes: &[u8], last_bits: u8) -> Self {
        CardReply::Frame {
            bytes: bytes.to_vec(),
            last_bits: last_bits & RX_LAST_BITS_MASK,
        }
    }
}

/// One frame the chip put on air.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exchange {
    /// Bytes taken from the FIFO
    pub frame: Vec<u8>,
    /// Valid bits of the last transmitted byte, 0 for a full byte.
    pub tx_last_bits: u8,
}

/// Simulated MFRC522 register file for unit tests.
///
/// Models the FIFO, the interrupt request registers (with their Set1/Set2
/// write semantics), the CRC coprocessor, and transceive started by the
/// StartSend bit. Card answers are scripted through [`CardReply`]; an
/// exhausted script behaves like an empty field.
#[derive(Debug)]
pub struct MockChip {
    regs: [u8; 64],
    fifo: VecDeque<u8>,
    /// Scripted card answers, consumed in order
    pub replies: VecDeque<CardReply>,
    /// Every frame sent by a transceive
    pub exchanges: Vec<Exchange>,
    /// FIFO contents at each CalcCrc
    pub crc_inputs: Vec<Vec<u8>>,
    /// Testing hook: the CRC coprocessor never signals completion.
    pub crc_stalled: bool,
    /// Every value written to CommandReg, in order.
    pub commands: Vec<u8>,
    /// Reads of ComIrqReg
    pub com_irq_polls: u32,
    /// Reads of DivIrqReg
    pub div_irq_polls: u32,
    /// Set by `power_on`
    pub powered: bool,
}

impl Default for MockChip {
    fn default() -> Self {
        Self::new()
    }
}

impl MockChip {
    /// Fresh chip with an empty script.
    pub fn new() -> Self {
        let mut regs = [0u8; 64];
        regs[Register::VersionReg.address() as usize] = DEFAULT_VERSION;
        Self {
            regs,
            fifo: VecDeque::new(),
            replies: VecDeque::new(),
            exchanges: Vec::new(),
            crc_inputs: Vec::new(),
            crc_stalled: false,
            commands: Vec::new(),
            com_irq_polls: 0,
            div_irq_polls: 0,
            powered: false,
        }
    }

    /// Queue the answer to the next transceive.
    pub fn push_reply(&mut self, reply: CardReply) {
        self.replies.push_back(reply);
    }

    /// Wrap the chip so a test keeps a handle after the driver owns it.
    pub fn shared(self) -> Rc<RefCell<MockChip>> {
        Rc::new(RefCell::new(self))
    }

    /// Raw register value without side effects.
    pub fn register(&self, reg: Register) -> u8 {
        self.regs[reg.address() as usize]
    }

    /// Preset a register without side effects.
    pub fn set_register(&mut self, reg: Register, value: u8) {
        self.regs[reg.address() as usize] = value;
    }

    /// Last value written to CommandReg.
    pub fn last_command(&self) -> Option<u8> {
        self.commands.last().copied()
    }

    /// Bytes currently in the FIFO.
    pub fn fifo_len(&self) -> usize {
        self.fifo.len()
    }

    fn current_command(&self) -> u8 {
        self.register(Register::CommandReg) & 0x0F
    }

    fn run_command(&mut self, command: u8) {
        if command == ChipCommand::CalcCrc as u8 {
            let input: Vec<u8> = self.fifo.iter().copied().collect();
            if !self.crc_stalled {
                let crc = crc_a(&input);
                self.set_register(Register::CRCResultRegLow, crc[0]);
                self.set_register(Register::CRCResultRegHigh, crc[1]);
                self.regs[Register::DivIrqReg.address() as usize] |= CRC_IRQ;
            }
            self.crc_inputs.push(input);
        } else if command == ChipCommand::SoftReset as u8 {
            let version = self.register(Register::VersionReg);
            self.regs = [0u8; 64];
            self.set_register(Register::VersionReg, version);
            self.fifo.clear();
        }
    }

    fn exchange(&mut self, tx_last_bits: u8) {
        let frame = self.fifo.drain(..).collect();
        self.exchanges.push(Exchange {
            frame,
            tx_last_bits,
        });

        match self.replies.pop_front().unwrap_or(CardReply::Silent) {
            CardReply::Frame { bytes, last_bits } => {
                self.fifo.extend(bytes);
                self.set_register(Register::ErrorReg, 0);
                let control = self.register(Register::ControlReg) & !RX_LAST_BITS_MASK;
                self.set_register(Register::ControlReg, control | last_bits);
                self.regs[Register::ComIrqReg.address() as usize] |= RX_IRQ;
            }
            CardReply::Error { flags } => {
                self.set_register(Register::ErrorReg, flags);
                self.regs[Register::ComIrqReg.address() as usize] |= RX_IRQ | ERR_IRQ;
            }
            CardReply::Silent => {
                self.set_register(Register::ErrorReg, 0);
            }
        }
    }

    fn write_irq(&mut self, reg: Register, value: u8) {
        let idx = reg.address() as usize;
        if value & IRQ_SET != 0 {
            self.regs[idx] |= value & !IRQ_SET;
        } else {
            self.regs[idx] &= !value;
        }
    }
}

impl RegisterAccess for MockChip {
    fn read_register(&mut self, reg: Register) -> u8 {
        match reg {
            Register::ComIrqReg => {
                self.com_irq_polls += 1;
                self.register(reg)
            }
            Register::DivIrqReg => {
                self.div_irq_polls += 1;
                self.register(reg)
            }
            Register::FIFOLevelReg => self.fifo.len().min(0x7F) as u8,
            Register::FIFODataReg => self.fifo.pop_front().unwrap_or(0),
            _ => self.register(reg),
        }
    }

    fn write_register(&mut self, reg: Register, value: u8) {
        match reg {
            Register::CommandReg => {
                self.commands.push(value);
                self.set_register(reg, value);
                self.run_command(value & 0x0F);
            }
            Register::ComIrqReg | Register::DivIrqReg => self.write_irq(reg, value),
            Register::FIFOLevelReg => {
                if value & FLUSH_BUFFER != 0 {
                    self.fifo.clear();
                    let err = self.register(Register::ErrorReg) & !BUFFER_OVFL;
                    self.set_register(Register::ErrorReg, err);
                }
            }
            Register::FIFODataReg => self.fifo.push_back(value),
            Register::BitFramingReg => {
                let was_sending = self.register(reg) & START_SEND != 0;
                self.set_register(reg, value);
                let start = value & START_SEND != 0 && !was_sending;
                if start && self.current_command() == ChipCommand::Transceive as u8 {
                    self.exchange(value & TX_LAST_BITS_MASK);
                }
            }
            _ => self.set_register(reg, value),
        }
    }

    fn power_on(&mut self) {
        self.powered = true;
    }
}

impl RegisterAccess for Rc<RefCell<MockChip>> {
    fn read_register(&mut self, reg: Register) -> u8 {
        self.borrow_mut().read_register(reg)
    }

    fn write_register(&mut self, reg: Register, value: u8) {
        self.borrow_mut().write_register(reg, value)
    }

    fn power_on(&mut self) {
        self.borrow_mut().power_on()
    }
}
