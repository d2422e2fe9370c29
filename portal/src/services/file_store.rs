//! Real file-backed key-value store
//!
//! Each key lives in its own `<key>.json` file under the data directory.
//! Writes go to a uniquely named temporary sibling first and are renamed
//! into place, so a crash mid-write leaves the previous document intact and
//! concurrent writers never share a temp file.

use std::path::{Path, PathBuf};
use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

use crate::error::{PortalError, PortalResult};
use crate::traits::KeyValueStore;
use shared::{component_debug, Component};

/// File system key-value store
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    /// Directory holding one file per key
    data_dir: PathBuf,
}

impl FileKeyValueStore {
    /// Create a store rooted at `data_dir`, creating the directory if needed
    pub async fn open(data_dir: impl Into<PathBuf>) -> PortalResult<Self> {
        let data_dir = data_dir.into();
        fs::create_dir_all(&data_dir)
            .await
            .map_err(|e| PortalError::storage("create_dir", data_dir.display().to_string(), e))?;

        component_debug!(Component::Storage, "📁 Using data directory: {}", data_dir.display());
        Ok(Self { data_dir })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Get the file path for a key
    fn entry_path(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", sanitize_key(key)))
    }

    fn temp_path(&self, key: &str) -> PathBuf {
        self.data_dir
            .join(format!(".{}.{}.json.tmp", sanitize_key(key), Uuid::new_v4().simple()))
    }
}

/// Keep keys from escaping the data directory
fn sanitize_key(key: &str) -> String {
    key.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' || c == '-' { c } else { '_' })
        .collect()
}

#[async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn get(&self, key: &str) -> PortalResult<Option<String>> {
        let path = self.entry_path(key);

        match fs::read_to_string(&path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(PortalError::storage("read", key, e)),
        }
    }

    async fn set(&self, key: &str, value: &str) -> PortalResult<()> {
        let temp_path = self.temp_path(key);
        let storage_error =
            |operation: &'static str| move |e: std::io::Error| PortalError::storage(operation, key, e);

        let mut file = fs::File::create(&temp_path).await.map_err(storage_error("create"))?;
        file.write_all(value.as_bytes()).await.map_err(storage_error("write"))?;
        file.flush().await.map_err(storage_error("flush"))?;
        drop(file);

        if let Err(e) = fs::rename(&temp_path, self.entry_path(key)).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(PortalError::storage("rename", key, e));
        }

        component_debug!(Component::Storage, "💾 Wrote {} bytes to '{}'", value.len(), key);
        Ok(())
    }

    async fn remove(&self, key: &str) -> PortalResult<()> {
        match fs::remove_file(self.entry_path(key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(PortalError::storage("remove", key, e)),
        }
    }
}
