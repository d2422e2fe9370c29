//! Trait definitions with mockall annotations for testing
//!
//! Persistence sits behind these traits so the write-through policy can be
//! swapped (file directory, in-memory map) and failures can be injected.

use crate::error::PortalResult;

/// Key-value storage abstraction
///
/// Values are whole JSON documents; callers always read and write an entry
/// in full.
#[mockall::automock]
#[async_trait::async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read an entry, `None` when the key was never written or was removed
    async fn get(&self, key: &str) -> PortalResult<Option<String>>;

    /// Overwrite an entry
    async fn set(&self, key: &str, value: &str) -> PortalResult<()>;

    /// Delete an entry; removing an absent key is not an error
    async fn remove(&self, key: &str) -> PortalResult<()>;
}
