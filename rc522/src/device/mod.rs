// rc522/src/device/mod.rs
//! Reader handle, register access and chip simulation.

pub mod builder;
pub mod config;
pub mod handle;
pub mod mock;
pub mod registers;

pub use builder::DeviceBuilder;
pub use config::ReaderConfig;
pub use handle::{Device, Initialized, Uninitialized};
pub use mock::{CardReply, MockChip};
pub use registers::{RegisterAccess, RegisterBus};
