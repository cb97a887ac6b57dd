//! In-process blob store.

use super::{BlobStore, StorageKey};
use crate::errors::AppResult;
use std::collections::HashMap;
use std::sync::Mutex;

/// Keeps records in a map for the lifetime of the value.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<HashMap<StorageKey, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl BlobStore for MemoryStore {
    fn load(&self, key: &StorageKey) -> AppResult<Option<String>> {
        let records = self
            .records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        Ok(records.get(key).cloned())
    }

    fn save(&self, key: &StorageKey, payload: &str) -> AppResult<()> {
        let mut records = self
            .records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        records.insert(key.clone(), payload.to_string());
        Ok(())
    }
}
