//! # cw-core
//!
//! The relay's domain: the single shared clipboard slot, its expiry
//! machinery and the password gate. No HTTP or OS integration here.

pub mod entry;
pub mod expiry;
pub mod gate;
pub mod protocol;
pub mod store;

// Re-export commonly used types at the crate root
pub use entry::ClipboardEntry;
pub use expiry::{ExpiryPolicy, ExpiryWatcher};
pub use gate::RequestGate;
pub use protocol::CopyRequest;
pub use store::ClipboardStore;
