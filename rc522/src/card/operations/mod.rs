//! Card protocol operations over an initialized [`crate::device::Device`].

pub mod activate;
pub mod anticollision;
pub mod halt;
pub mod page;
pub mod request;

// Re-export the operations at the module root so callers can use
// `crate::card::operations::read_page(...)` directly.
pub use activate::activate;
pub use anticollision::{read_uid, select_card};
pub use halt::halt;
pub use page::{read_page, write_page};
pub use request::request_card;
