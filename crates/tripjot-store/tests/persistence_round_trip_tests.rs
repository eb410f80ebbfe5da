// Integration tests for round-trip persistence over the SQLite backend
// Reopening the database must yield the list that was persisted

use tripjot_store::{KeyValueBackend, PreferenceStore, SqliteBackend, PREFS_KEY};

#[test]
fn test_entries_survive_close_and_reopen() {
    let temp_dir = tempfile::tempdir().unwrap();
    let db_path = temp_dir.path().join("prefs.db");

    // Given: a store with two saved entries
    let backend = SqliteBackend::open(&db_path).unwrap();
    let mut store = PreferenceStore::initialize(backend).unwrap();
    store.save("Beach trip, budget 500").unwrap();
    store.save("Mountain trip").unwrap();
    let saved: Vec<tripjot_core::PreferenceEntry> = store.entries().to_vec();
    drop(store);

    // When: we reopen the database and initialize again
    let backend = SqliteBackend::open(&db_path).unwrap();
    let reloaded = PreferenceStore::initialize(backend).unwrap();

    // Then: entries are equal by id, text, and createdAt, in the same order
    assert_eq!(reloaded.entries(), saved.as_slice());
}

#[test]
fn test_remove_all_leaves_no_key_after_reopen() {
    let temp_dir = tempfile::tempdir().unwrap();
    let db_path = temp_dir.path().join("prefs.db");

    let backend = SqliteBackend::open(&db_path).unwrap();
    let mut store = PreferenceStore::initialize(backend).unwrap();
    store.save("anything").unwrap();
    store.remove_all().unwrap();
    drop(store);

    let backend = SqliteBackend::open(&db_path).unwrap();
    assert_eq!(backend.get(PREFS_KEY).unwrap(), None, "key is absent");

    let reloaded = PreferenceStore::initialize(backend).unwrap();
    assert!(reloaded.entries().is_empty());
}

#[test]
fn test_corrupt_value_recovers_to_empty_without_truncating() {
    // Given: the well-known key holds something that is not JSON
    let mut backend = SqliteBackend::open_in_memory().unwrap();
    backend.set(PREFS_KEY, "not json").unwrap();

    // When: we initialize
    let store = PreferenceStore::initialize(backend).unwrap();

    // Then: the list is empty and the stored bytes were not rewritten
    assert!(store.entries().is_empty());
    assert_eq!(
        store.backend().get(PREFS_KEY).unwrap().as_deref(),
        Some("not json"),
        "recovery must not write back"
    );
}

#[test]
fn test_malformed_elements_are_dropped_on_load() {
    let mut backend = SqliteBackend::open_in_memory().unwrap();
    backend
        .set(
            PREFS_KEY,
            r#"[
                {"id": "keep-1", "text": "Beach trip", "createdAt": "2026-08-06 09:00:00"},
                {"text": "no id here"},
                {"id": "keep-2", "text": "Mountain trip", "createdAt": "2026-08-06 09:05:00"}
            ]"#,
        )
        .unwrap();

    let store = PreferenceStore::initialize(backend).unwrap();

    let ids: Vec<&str> = store.entries().iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["keep-1", "keep-2"], "well-formed siblings survive");
}
