// rc522/src/device/builder.rs
//! Builder for [`Device`](crate::device::Device).

use crate::device::config::ReaderConfig;
use crate::device::handle::{Device, Uninitialized};
use crate::device::registers::{RegisterAccess, RegisterBus};
use crate::transport::Transport;
use crate::{Error, Result};

/// Helper to construct a Device with optional configuration.
#[derive(Default)]
pub struct DeviceBuilder {
    chip: Option<Box<dyn RegisterAccess>>,
    config: ReaderConfig,
}

impl DeviceBuilder {
    /// Empty builder with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reach the chip over a serial transport.
    pub fn with_transport(mut self, transport: Box<dyn Transport>) -> Self {
        self.chip = Some(Box::new(RegisterBus::new(transport)));
        self
    }

    /// Provide a register interface directly (e.g. a simulated chip).
    pub fn with_chip(mut self, chip: Box<dyn RegisterAccess>) -> Self {
        self.chip = Some(chip);
        self
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: ReaderConfig) -> Self {
        self.config = config;
        self
    }

    /// Consume the builder and return an uninitialized Device.
    /// Requires a transport or chip; otherwise returns DeviceNotFound.
    pub fn build_uninitialized(self) -> Result<Device<Uninitialized>> {
        match self.chip {
            Some(chip) => Ok(Device::new_with_chip(chip).with_config(self.config)),
            None => Err(Error::DeviceNotFound),
        }
    }
}
