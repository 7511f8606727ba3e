// rc522/src/lib.rs

//! rc522
//!
//! Reader-side driver for MFRC522 contactless front ends: bit-banged SPI,
//! register access, the chip's CRC coprocessor and transceive engine, and
//! the ISO 14443-3 Type A commands used to find, select, read and write
//! NTAG/Ultralight style cards.
#![warn(missing_docs)]

pub mod card;
pub mod constants;
pub mod device;
pub mod error;
pub mod prelude;
pub mod protocol;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the card types in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
