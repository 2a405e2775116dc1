use crate::DEFAULT_STORAGE_DIR;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding the persisted session record, relative to the
    /// config directory
    pub dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: DEFAULT_STORAGE_DIR.to_string(),
        }
    }
}
