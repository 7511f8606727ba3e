// rc522/src/card/mod.rs
//! Card handle returned by activation.

use crate::Result;
use crate::device::{Device, Initialized};
use crate::types::{Atqa, PageData, Sak, Uid};

pub mod operations;

/// A card brought to the selected state by
/// [`Device::activate`](crate::device::Device::activate).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    uid: Uid,
    atqa: Atqa,
    sak: Sak,
}

impl Card {
    /// Assemble a card from its activation answers.
    pub fn new(uid: Uid, atqa: Atqa, sak: Sak) -> Self {
        Self { uid, atqa, sak }
    }

    /// Complete UID
    pub fn uid(&self) -> &Uid {
        &self.uid
    }
    /// Answer to the request
    pub fn atqa(&self) -> &Atqa {
        &self.atqa
    }
    /// SAK of the final cascade level
    pub fn sak(&self) -> &Sak {
        &self.sak
    }

    /// Read 4 pages starting at `page`.
    pub fn read_page(&self, device: &mut Device<Initialized>, page: u8) -> Result<PageData> {
        operations::read_page(device, page)
    }

    /// Write 4 bytes to `page`.
    pub fn write_page(
        &self,
        device: &mut Device<Initialized>,
        page: u8,
        data: [u8; 4],
    ) -> Result<()> {
        operations::write_page(device, page, data)
    }

    /// Put the card to sleep. See [`operations::halt`] for the expected
    /// outcome.
    pub fn halt(&self, device: &mut Device<Initialized>) -> Result<()> {
        operations::halt(device)
    }
}
