//! In-memory key-value store for tests and ephemeral runs

use std::collections::HashMap;
use std::sync::Arc;
use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::PortalResult;
use crate::traits::KeyValueStore;

/// Key-value store backed by a shared `HashMap`
///
/// Clones share the same map, mirroring several handles onto one browser
/// storage area.
#[derive(Debug, Clone, Default)]
pub struct MemoryKeyValueStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl KeyValueStore for MemoryKeyValueStore {
    async fn get(&self, key: &str) -> PortalResult<Option<String>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> PortalResult<()> {
        self.entries.write().await.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> PortalResult<()> {
        self.entries.write().await.remove(key);
        Ok(())
    }
}
