use tempfile::TempDir;

use crate::storage::Storage;

fn temp_storage() -> (TempDir, Storage) {
    let dir = TempDir::new().unwrap();
    let storage = Storage::at(dir.path().join("storage.json"));
    (dir, storage)
}

#[test]
fn test_remember_email() {
    let (_dir, storage) = temp_storage();
    assert_eq!(storage.remembered_email(), None);

    assert!(storage.remember_email("anna@example.com"));
    assert_eq!(
        storage.remembered_email(),
        Some("anna@example.com".to_string())
    );
}

#[test]
fn test_remember_email_overwrites_previous() {
    let (_dir, storage) = temp_storage();
    storage.remember_email("old@example.com");
    storage.remember_email("new@example.com");
    assert_eq!(
        storage.remembered_email(),
        Some("new@example.com".to_string())
    );
}

#[test]
fn test_consumed_codes() {
    let (_dir, storage) = temp_storage();
    assert!(!storage.has_consumed("anna:x7Fq2:9c1d"));

    assert!(storage.add_consumed_code("anna:x7Fq2:9c1d"));
    assert!(storage.has_consumed("anna:x7Fq2:9c1d"));
    assert!(!storage.has_consumed("bob:Ab3dE:17ff"));

    storage.add_consumed_code("bob:Ab3dE:17ff");
    assert_eq!(storage.consumed_codes().len(), 2);
}

#[test]
fn test_values_survive_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("storage.json");

    let storage = Storage::at(path.clone());
    storage.remember_email("anna@example.com");
    storage.add_consumed_code("anna:x7Fq2:9c1d");
    drop(storage);

    let reopened = Storage::at(path);
    assert_eq!(
        reopened.remembered_email(),
        Some("anna@example.com".to_string())
    );
    assert!(reopened.has_consumed("anna:x7Fq2:9c1d"));
}

#[test]
fn test_keys_do_not_clobber_each_other() {
    let (_dir, storage) = temp_storage();
    storage.remember_email("anna@example.com");
    storage.add_consumed_code("anna:x7Fq2:9c1d");

    assert_eq!(
        storage.remembered_email(),
        Some("anna@example.com".to_string())
    );
    assert_eq!(storage.consumed_codes(), vec!["anna:x7Fq2:9c1d".to_string()]);
}

#[test]
fn test_corrupt_file_reads_as_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("storage.json");
    std::fs::write(&path, "{ not json").unwrap();

    let storage = Storage::at(path);
    assert_eq!(storage.remembered_email(), None);
    assert!(storage.consumed_codes().is_empty());

    // Writing replaces the corrupt file
    assert!(storage.remember_email("anna@example.com"));
    assert_eq!(
        storage.remembered_email(),
        Some("anna@example.com".to_string())
    );
}

#[test]
fn test_malformed_value_reads_as_missing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("storage.json");
    // surveyCodes should hold an array; a string must not take the store down
    std::fs::write(&path, r#"{"surveyCodes": "oops", "email": "anna@example.com"}"#).unwrap();

    let storage = Storage::at(path);
    assert!(storage.consumed_codes().is_empty());
    assert_eq!(
        storage.remembered_email(),
        Some("anna@example.com".to_string())
    );
}
