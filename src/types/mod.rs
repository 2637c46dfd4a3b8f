//! Shared types for DRY compliance.

mod format;
mod response;

pub use format::Format;
pub use response::{Message, Negotiated};
