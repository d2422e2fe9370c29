//! Service-specific tests
//!
//! Each storage service has its own test file.


use std::collections::HashMap;
use std::io;
use std::sync::{Arc, Mutex};

use crate::error::PortalError;
use crate::traits::MockKeyValueStore;

pub(crate) type MockEntries = Arc<Mutex<HashMap<String, String>>>;

/// Map-backed mock storage whose writes to `failing_key` always fail
pub(crate) fn mock_storage_failing_on(failing_key: &'static str) -> (MockKeyValueStore, MockEntries) {
    let entries: MockEntries = Arc::default();
    let mut storage = MockKeyValueStore::new();

    let reads = Arc::clone(&entries);
    storage
        .expect_get()
        .returning(move |key| Ok(reads.lock().unwrap().get(key).cloned()));

    let writes = Arc::clone(&entries);
    storage.expect_set().returning(move |key, value| {
        if key == failing_key {
            return Err(PortalError::storage("write", key, io::Error::from(io::ErrorKind::Other)));
        }
        writes.lock().unwrap().insert(key.to_string(), value.to_string());
        Ok(())
    });

    let removes = Arc::clone(&entries);
    storage.expect_remove().returning(move |key| {
        removes.lock().unwrap().remove(key);
        Ok(())
    });

    (storage, entries)
}
