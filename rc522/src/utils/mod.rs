//! Small helpers shared across the crate: hex formatting for UIDs and page
//! dumps, and the bounded poll budget used by every busy-wait loop.

pub mod hex;
pub mod timeout;

pub use hex::*;
pub use timeout::*;
