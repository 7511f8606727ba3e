// rc522/src/prelude.rs
//! Everyday types in one import.

pub use crate::card::Card;
pub use crate::device::{Device, DeviceBuilder, ReaderConfig, RegisterAccess};
pub use crate::device::{Initialized, Uninitialized};
pub use crate::protocol::Command;
pub use crate::transport::{BitBangTransport, Pins, Transport};
pub use crate::{
    Atqa, CascadeLevel, Error, FaultKind, PageData, RequestCode, Result, Sak, Status, StatusExt,
    Uid, UidLevel,
};

// Re-export small utilities for convenience
pub use crate::utils::{PollBudget, bytes_to_hex, bytes_to_hex_spaced};
