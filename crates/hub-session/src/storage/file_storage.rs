use crate::error::{Result as SessionErrorResult, SessionError};
use crate::storage::SessionStorage;

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use log::warn;

const DATE_FORMAT: &str = "%Y%m%d_%H%M%S";

/// File-backed storage: one `<key>.json` file per key under a root
/// directory.
///
/// Writes use the atomic pattern (temp file, fsync, rename) so a crash
/// mid-write cannot corrupt the record. Clones share the same root, so a
/// handle can be kept for maintenance calls after the store takes ownership
/// of another.
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }

    /// Moves a corrupted record out of the way for debugging.
    ///
    /// Renames `<key>.json` to `<key>.json.corrupted.{timestamp}` so the
    /// next read starts clean while the bad bytes stay inspectable.
    pub fn backup_corrupted(&self, key: &str) -> SessionErrorResult<Option<PathBuf>> {
        let path = self.key_path(key);

        if !path.exists() {
            return Ok(None);
        }

        let timestamp = chrono::Utc::now().format(DATE_FORMAT);
        let backup_path = self.root.join(format!("{key}.json.corrupted.{timestamp}"));

        fs::rename(&path, &backup_path)
            .map_err(|e| SessionError::atomic_rename(path, backup_path.clone(), e))?;

        warn!("Backed up corrupted session record to {backup_path:?}");
        Ok(Some(backup_path))
    }
}

impl SessionStorage for FileStorage {
    fn get(&self, key: &str) -> SessionErrorResult<Option<String>> {
        let path = self.key_path(key);

        if !path.exists() {
            return Ok(None);
        }

        fs::read_to_string(&path)
            .map(Some)
            .map_err(|e| SessionError::storage_read(key, e.to_string()))
    }

    fn set(&self, key: &str, value: &str) -> SessionErrorResult<()> {
        fs::create_dir_all(&self.root)
            .map_err(|e| SessionError::dir_creation(self.root.clone(), e))?;

        let final_path = self.key_path(key);
        let temp_path = self
            .root
            .join(format!("{key}.json.tmp.{}", std::process::id()));

        // Write to temp file with explicit sync
        {
            let mut file = fs::File::create(&temp_path)
                .map_err(|e| SessionError::storage_write(temp_path.clone(), e))?;

            file.write_all(value.as_bytes())
                .map_err(|e| SessionError::storage_write(temp_path.clone(), e))?;

            file.sync_all()
                .map_err(|e| SessionError::storage_write(temp_path.clone(), e))?;
        }

        // Atomic rename
        fs::rename(&temp_path, &final_path).map_err(|e| {
            // Clean up temp file on failure
            let _ = fs::remove_file(&temp_path);
            SessionError::atomic_rename(temp_path, final_path.clone(), e)
        })?;

        Ok(())
    }

    fn remove(&self, key: &str) -> SessionErrorResult<()> {
        let path = self.key_path(key);

        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionError::storage_remove(path, e)),
        }
    }
}
