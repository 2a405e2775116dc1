use crate::error::Result as SessionErrorResult;
use crate::storage::SessionStorage;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// In-memory storage for tests and ephemeral sessions.
///
/// Clones share the same map, so a handle kept aside observes writes made
/// through a store that owns another clone.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    records: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        // Single-writer discipline makes poisoning unreachable; recover
        // rather than propagate if it ever happens.
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> SessionErrorResult<Option<String>> {
        Ok(self.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> SessionErrorResult<()> {
        self.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> SessionErrorResult<()> {
        self.lock().remove(key);
        Ok(())
    }
}
