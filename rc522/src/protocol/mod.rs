// rc522/src/protocol/mod.rs
//! Checksum unit, command engine and command frames.

pub mod checksum;
pub mod commands;
pub mod transceive;

pub use checksum::{calculate_crc, crc_a, verify_crc_a};
pub use commands::Command;
pub use transceive::transceive;
