//! Shared types for the tournament portal
//!
//! Contains the persisted record types, storage key names, the shared error
//! type and logging setup used by both the portal library and the webserver.

pub mod errors;
pub mod keys;
pub mod logging;
pub mod types;

pub use errors::*;
pub use logging::Component;
pub use types::*;
