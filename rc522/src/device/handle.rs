// rc522/src/device/handle.rs
//! The reader handle and its initialization state.

use std::marker::PhantomData;

use crate::card::{Card, operations};
use crate::constants::{ANTENNA_ON, MAX_FRAME_LEN, MODE_CRC_PRESET_6363, TX_AUTO_FORCE_100_ASK};
use crate::device::config::ReaderConfig;
use crate::device::registers::{RegisterAccess, RegisterBus};
use crate::protocol::{Command, calculate_crc, transceive};
use crate::transport::Transport;
use crate::types::{Atqa, CascadeLevel, ChipCommand, PageData, Register, RequestCode, Sak, UidLevel};
use crate::{Error, Result};

/// Type-state marker: chip not set up yet
pub struct Uninitialized;
/// Type-state marker: chip reset and antenna on
pub struct Initialized;

/// Reader handle that enforces initialization state at compile time.
///
/// The handle owns the chip's register interface exclusively. Every
/// operation is synchronous and leaves the chip idle; none may be
/// interleaved with another, which `&mut self` enforces.
pub struct Device<State = Uninitialized> {
    chip: Box<dyn RegisterAccess>,
    config: ReaderConfig,
    _state: PhantomData<State>,
}

impl Device<Uninitialized> {
    /// Create a Device from an existing register interface. This is
    /// primarily intended for tests where a MockChip is provided.
    pub fn new_with_chip(chip: Box<dyn RegisterAccess>) -> Self {
        Self {
            chip,
            config: ReaderConfig::default(),
            _state: PhantomData,
        }
    }

    /// Create a Device talking to the chip over `transport`.
    pub fn new_with_transport(transport: Box<dyn Transport>) -> Self {
        Self::new_with_chip(Box::new(RegisterBus::new(transport)))
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: ReaderConfig) -> Self {
        self.config = config;
        self
    }

    /// Power the chip, soft-reset it and switch the antenna on.
    pub fn initialize(mut self) -> Device<Initialized> {
        self.chip.power_on();
        self.chip.write_register(Register::CommandReg, ChipCommand::SoftReset.into());
        self.chip.write_register(Register::TxAutoReg, TX_AUTO_FORCE_100_ASK);
        self.chip.write_register(Register::ModeReg, MODE_CRC_PRESET_6363);
        self.chip.set_bits(Register::TxControlReg, ANTENNA_ON);
        log::debug!("reader initialized");

        Device {
            chip: self.chip,
            config: self.config,
            _state: PhantomData,
        }
    }
}

impl<State> Device<State> {
    /// Active configuration.
    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Chip version byte (0x91 or 0x92 for genuine parts).
    pub fn version(&mut self) -> u8 {
        self.chip.read_register(Register::VersionReg)
    }

    /// Release the register interface.
    pub fn release(self) -> Box<dyn RegisterAccess> {
        self.chip
    }
}

impl Device<Initialized> {
    /// Direct register access, for diagnosis beyond the binary status.
    pub fn chip(&mut self) -> &mut dyn RegisterAccess {
        &mut *self.chip
    }

    /// Switch both antenna drivers on or off.
    pub fn set_antenna(&mut self, on: bool) {
        if on {
            self.chip.set_bits(Register::TxControlReg, ANTENNA_ON);
        } else {
            self.chip.clear_bits(Register::TxControlReg, ANTENNA_ON);
        }
    }

    /// CRC_A of `data` computed by the chip (soft timeout, see
    /// [`crate::protocol::checksum::calculate_crc`]).
    pub fn calculate_crc(&mut self, data: &[u8]) -> [u8; 2] {
        calculate_crc(&mut *self.chip, data, self.config.crc_poll_budget)
    }

    /// Raw transceive over an aliased frame buffer; returns received bits.
    pub fn transceive(&mut self, frame: &mut [u8], tx_len: usize) -> Result<usize> {
        transceive(
            &mut *self.chip,
            frame,
            tx_len,
            self.config.transceive_poll_budget,
        )
    }

    /// Encode `cmd` into `frame`, append its CRC when the command needs
    /// one, set the bit framing and run the exchange.
    pub fn execute(&mut self, cmd: &Command, frame: &mut [u8; MAX_FRAME_LEN]) -> Result<usize> {
        let payload = cmd.encode();
        let mut len = payload.len();
        let total = if cmd.needs_crc() { len + 2 } else { len };
        if total > MAX_FRAME_LEN {
            return Err(Error::FrameTooLong {
                len: total,
                capacity: MAX_FRAME_LEN,
            });
        }
        frame[..len].copy_from_slice(&payload);

        if cmd.needs_crc() {
            let crc = self.calculate_crc(&payload);
            frame[len..len + 2].copy_from_slice(&crc);
            len += 2;
        }

        self.chip.write_register(Register::BitFramingReg, cmd.tx_last_bits());
        self.transceive(frame, len)
    }

    /// See [`operations::request_card`].
    pub fn request_card(&mut self, code: RequestCode) -> Result<Atqa> {
        operations::request_card(self, code)
    }

    /// See [`operations::read_uid`].
    pub fn read_uid(&mut self, level: CascadeLevel, nvb: u8) -> Result<UidLevel> {
        operations::read_uid(self, level, nvb)
    }

    /// See [`operations::select_card`].
    pub fn select_card(&mut self, level: CascadeLevel, nvb: u8, uid: [u8; 4]) -> Result<Sak> {
        operations::select_card(self, level, nvb, uid)
    }

    /// See [`operations::read_page`].
    pub fn read_page(&mut self, page: u8) -> Result<PageData> {
        operations::read_page(self, page)
    }

    /// See [`operations::write_page`].
    pub fn write_page(&mut self, page: u8, data: [u8; 4]) -> Result<()> {
        operations::write_page(self, page, data)
    }

    /// See [`operations::halt`].
    pub fn halt(&mut self) -> Result<()> {
        operations::halt(self)
    }

    /// Request, anticollide and select the card in the field.
    pub fn activate(&mut self, code: RequestCode) -> Result<Card> {
        operations::activate(self, code)
    }
}
