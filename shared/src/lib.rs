//! Shared domain core for the wedding RSVP service
//!
//! Pure data types and transition functions, no I/O:
//!
//! - **models** (`models`): form capture, persisted record (sum type)
//! - **form state machine** (`form`): attendance / companion toggles
//! - **validator** (`validate`): ordered, user-facing error messages
//! - **mapper** (`mapper`): form capture → persisted record
//! - **submission workflow** (`submit`): validate → map → persist over an
//!   injected [`submit::RsvpStore`] port
//! - **admin aggregation** (`admin`): filter, search, statistics, CSV export
//!
//! The server crate wires these to an embedded database and HTTP handlers;
//! everything here is testable with an in-memory store.

pub mod admin;
pub mod form;
pub mod mapper;
pub mod models;
pub mod submit;
pub mod util;
pub mod validate;

// Re-exports
pub use models::{
    AttendingRecord, BusService, Companion, DeclinedRecord, RsvpForm, RsvpRecord, StoredRsvp,
};
pub use serde::{Deserialize, Serialize};
pub use submit::{FormSession, RsvpStore, StoreError};
