use std::fs;

use scout_engine::{load_json, save_json, FileStore, KeyValueStore, MemoryStore, StoreError};
use tempfile::TempDir;

#[test]
fn open_creates_missing_directory() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("nested").join("data");
    let store = FileStore::open(&dir).unwrap();
    assert!(dir.is_dir());
    assert_eq!(store.dir(), dir.as_path());
}

#[test]
fn open_rejects_a_plain_file() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("not_a_dir");
    fs::write(&file, "x").unwrap();
    assert!(matches!(
        FileStore::open(&file),
        Err(StoreError::Directory { .. })
    ));
}

#[test]
fn values_survive_reopening() {
    let temp = TempDir::new().unwrap();
    let sources = vec![
        ("https://a.example/1".to_string(), "A".to_string()),
        ("https://b.example/2".to_string(), "B".to_string()),
    ];
    {
        let store = FileStore::open(temp.path()).unwrap();
        save_json(&store, "savedJobs", &sources).unwrap();
    }

    let reopened = FileStore::open(temp.path()).unwrap();
    let loaded: Option<Vec<(String, String)>> = load_json(&reopened, "savedJobs");
    assert_eq!(loaded, Some(sources));
    assert!(temp.path().join("savedJobs.json").is_file());
}

#[test]
fn write_replaces_previous_value() {
    let temp = TempDir::new().unwrap();
    let store = FileStore::open(temp.path()).unwrap();
    store.write("theme", "\"dark\"").unwrap();
    store.write("theme", "\"light\"").unwrap();

    assert_eq!(store.read("theme").unwrap().as_deref(), Some("\"light\""));
    let leftovers: Vec<_> = fs::read_dir(temp.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name())
        .collect();
    assert_eq!(leftovers.len(), 1);
}

#[test]
fn missing_key_reads_as_none() {
    let temp = TempDir::new().unwrap();
    let store = FileStore::open(temp.path()).unwrap();
    assert_eq!(store.read("theme").unwrap(), None);
    assert_eq!(load_json::<String>(&store, "theme"), None);
}

#[test]
fn corrupt_value_loads_as_none() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("savedJobs.json"), "{not json").unwrap();
    let store = FileStore::open(temp.path()).unwrap();

    let loaded: Option<Vec<(String, String)>> = load_json(&store, "savedJobs");
    assert_eq!(loaded, None);
}

#[test]
fn keys_cannot_escape_the_directory() {
    let temp = TempDir::new().unwrap();
    let store = FileStore::open(temp.path()).unwrap();
    for key in ["", "../theme", "a/b", "a.b"] {
        assert!(
            matches!(store.write(key, "1"), Err(StoreError::InvalidKey(_))),
            "key {key:?} accepted"
        );
    }
}

#[test]
fn memory_store_round_trips() {
    let store = MemoryStore::new();
    assert_eq!(store.read("theme").unwrap(), None);
    save_json(&store, "theme", "light").unwrap();
    assert_eq!(load_json::<String>(&store, "theme").as_deref(), Some("light"));
}
