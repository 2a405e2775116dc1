mod file_storage;
mod memory_storage;

pub use file_storage::FileStorage;
pub use memory_storage::MemoryStorage;

use crate::error::Result as SessionErrorResult;

/// Durable key/value collaborator backing the session store.
///
/// Absence of a key means "no value"; `remove` must be a no-op for missing
/// keys. There is no cross-process consistency guarantee - durability only
/// covers restarts of the same client.
pub trait SessionStorage {
    fn get(&self, key: &str) -> SessionErrorResult<Option<String>>;

    fn set(&self, key: &str, value: &str) -> SessionErrorResult<()>;

    fn remove(&self, key: &str) -> SessionErrorResult<()>;
}
