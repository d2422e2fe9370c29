//! Persisted collections
//!
//! A collection is an ordered list of one record type stored as a single
//! JSON array under one key. Reads fail soft: an absent, unreadable or
//! corrupt entry yields an empty collection and a warning, never an error.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::PortalResult;
use crate::traits::KeyValueStore;
use shared::{component_warn, Component};

/// Read a whole collection, defaulting to empty
pub async fn read_collection<T, K>(store: &K, key: &str) -> Vec<T>
where
    T: DeserializeOwned,
    K: KeyValueStore + ?Sized,
{
    read_document(store, key).await.unwrap_or_default()
}

/// Read a single JSON document, `None` when absent or unusable
pub async fn read_document<T, K>(store: &K, key: &str) -> Option<T>
where
    T: DeserializeOwned,
    K: KeyValueStore + ?Sized,
{
    let raw = match store.get(key).await {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            component_warn!(Component::Storage, "⚠️ Could not read '{}', treating as empty: {}", key, e);
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            component_warn!(Component::Storage, "⚠️ Corrupt JSON under '{}', treating as empty: {}", key, e);
            None
        }
    }
}

/// Overwrite a whole collection
pub async fn write_collection<T, K>(store: &K, key: &str, records: &[T]) -> PortalResult<()>
where
    T: Serialize,
    K: KeyValueStore + ?Sized,
{
    write_document(store, key, records).await
}

/// Overwrite a single JSON document
pub async fn write_document<T, K>(store: &K, key: &str, value: &T) -> PortalResult<()>
where
    T: Serialize + ?Sized,
    K: KeyValueStore + ?Sized,
{
    let encoded = serde_json::to_string(value)?;
    store.set(key, &encoded).await
}
