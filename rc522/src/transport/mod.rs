// rc522/src/transport/mod.rs
//! Byte transports between controller and chip.

pub mod bitbang;
pub mod mock;
pub mod traits;

pub use bitbang::{BitBangTransport, Pins};
pub use mock::MockTransport;
pub use traits::Transport;
