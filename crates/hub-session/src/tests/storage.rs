use crate::storage::{FileStorage, MemoryStorage, SessionStorage};

use tempfile::TempDir;

// =============================================================================
// FileStorage
// =============================================================================

#[test]
fn given_missing_key_when_get_then_none() {
    let temp = TempDir::new().unwrap();
    let storage = FileStorage::new(temp.path());

    assert!(storage.get("gameHubUser").unwrap().is_none());
}

#[test]
fn given_set_value_when_get_then_same_bytes_back() {
    let temp = TempDir::new().unwrap();
    let storage = FileStorage::new(temp.path());

    storage.set("gameHubUser", r#"{"id":1}"#).unwrap();

    assert_eq!(storage.get("gameHubUser").unwrap().unwrap(), r#"{"id":1}"#);
}

#[test]
fn given_missing_root_dir_when_set_then_created() {
    let temp = TempDir::new().unwrap();
    let nested = temp.path().join("state").join("session");
    let storage = FileStorage::new(&nested);

    storage.set("gameHubUser", "{}").unwrap();

    assert!(nested.join("gameHubUser.json").exists());
}

#[test]
fn given_existing_value_when_set_again_then_overwritten_in_place() {
    let temp = TempDir::new().unwrap();
    let storage = FileStorage::new(temp.path());
    storage.set("gameHubUser", "old").unwrap();

    storage.set("gameHubUser", "new").unwrap();

    assert_eq!(storage.get("gameHubUser").unwrap().unwrap(), "new");
    // No temp file left behind
    let leftovers: Vec<_> = std::fs::read_dir(temp.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().contains(".tmp."))
        .collect();
    assert!(leftovers.is_empty());
}

#[test]
fn given_missing_key_when_remove_then_no_error() {
    let temp = TempDir::new().unwrap();
    let storage = FileStorage::new(temp.path());

    storage.remove("gameHubUser").unwrap();
    storage.remove("gameHubUser").unwrap();
}

#[test]
fn given_corrupted_record_when_backup_then_renamed_and_key_reads_empty() {
    let temp = TempDir::new().unwrap();
    let storage = FileStorage::new(temp.path());
    storage.set("gameHubUser", "{broken").unwrap();

    let backup = storage.backup_corrupted("gameHubUser").unwrap();

    let backup = backup.expect("a backup path should be returned");
    assert!(backup.exists());
    assert!(
        backup
            .file_name()
            .unwrap()
            .to_string_lossy()
            .starts_with("gameHubUser.json.corrupted.")
    );
    assert!(storage.get("gameHubUser").unwrap().is_none());
}

#[test]
fn given_nothing_persisted_when_backup_then_none() {
    let temp = TempDir::new().unwrap();
    let storage = FileStorage::new(temp.path());

    assert!(storage.backup_corrupted("gameHubUser").unwrap().is_none());
}

// =============================================================================
// MemoryStorage
// =============================================================================

#[test]
fn given_cloned_handle_when_set_through_one_then_visible_through_other() {
    let storage = MemoryStorage::new();
    let handle = storage.clone();

    storage.set("gameHubUser", "{}").unwrap();

    assert_eq!(handle.get("gameHubUser").unwrap().unwrap(), "{}");
}

#[test]
fn given_removed_key_when_get_then_none() {
    let storage = MemoryStorage::new();
    storage.set("gameHubUser", "{}").unwrap();

    storage.remove("gameHubUser").unwrap();

    assert!(storage.get("gameHubUser").unwrap().is_none());
}
