//! Data models
//!
//! Shared between the server and any form client (via API).
//! Wire names are camelCase to match the persisted document schema.

pub mod rsvp;

// Re-exports
pub use rsvp::*;
