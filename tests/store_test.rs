use chrono::{Duration, TimeZone, Utc};
use jump::error::JumpError;
use jump::model::Search;
use jump::scoring::{Entries, Score};
use jump::store::{FileStore, PINS_FILE, SCORES_FILE};
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, FileStore) {
    let dir = TempDir::new().unwrap();
    let store = FileStore::setup(dir.path().join("jump")).unwrap();
    (dir, store)
}

#[test]
fn test_entries_round_trip_with_unusual_paths() {
    let (_dir, store) = setup();
    let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();

    let mut entries = Entries::new();
    entries.insert("/home/ü/Projekte/Über", Score { weight: 7, age: now });
    entries.insert(
        "/srv/with space/and \"quotes\"",
        Score {
            weight: 1,
            age: now - Duration::days(90),
        },
    );
    entries.insert("/tmp/日本語/🚀", Score::new(now));

    store.write_entries(&entries).unwrap();
    let loaded = store.read_entries().unwrap();

    assert_eq!(loaded, entries);
}

#[test]
fn test_pins_round_trip() {
    let (_dir, store) = setup();
    store.write_pin("ü", "/home/ü").unwrap();
    store.write_pin("dots.and-dashes", "/a/b c").unwrap();

    let pins = store.read_pins().unwrap();
    assert_eq!(pins.get("ü").map(String::as_str), Some("/home/ü"));
    assert_eq!(
        pins.get("dots.and-dashes").map(String::as_str),
        Some("/a/b c")
    );
}

#[test]
fn test_write_pin_then_remove() {
    let (_dir, store) = setup();
    store.write_pin("work", "/home/u/work").unwrap();
    assert_eq!(store.find_pin("work").as_deref(), Some("/home/u/work"));

    store.remove_pin("work").unwrap();
    assert_eq!(store.find_pin("work"), None);

    store.remove_pin("work").unwrap();
}

#[test]
fn test_atomic_writes_leave_no_tmp_files() {
    let (_dir, store) = setup();
    let mut entries = Entries::new();
    entries.visit("/a", 1, Utc::now());

    store.write_entries(&entries).unwrap();
    store.write_pin("a", "/a").unwrap();
    store.write_search("a", 0).unwrap();

    assert!(store.dir().join(SCORES_FILE).exists());
    for entry in fs::read_dir(store.dir()).unwrap() {
        let name = entry.unwrap().file_name().to_string_lossy().to_string();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[test]
fn test_corrupt_entries_surface_an_error() {
    let (_dir, store) = setup();
    fs::write(store.dir().join(SCORES_FILE), "[1, 2").unwrap();

    let err = store.read_entries().unwrap_err();
    assert!(matches!(err, JumpError::Serialization(_)));
}

#[test]
fn test_corrupt_pins_surface_an_error_but_find_degrades() {
    let (_dir, store) = setup();
    fs::write(store.dir().join(PINS_FILE), "not json").unwrap();

    assert!(store.read_pins().is_err());
    assert_eq!(store.find_pin("anything"), None);
    assert!(store.write_pin("x", "/x").is_err());
}

#[test]
fn test_one_broken_file_does_not_block_the_others() {
    let (_dir, store) = setup();
    store.write_pin("a", "/a").unwrap();
    store.write_search("q", 3).unwrap();
    fs::write(store.dir().join(SCORES_FILE), "{").unwrap();

    assert!(store.read_entries().is_err());
    assert_eq!(store.read_pins().unwrap().len(), 1);
    assert_eq!(store.read_search(), Search::new("q", 3));
}

#[test]
fn test_setup_default_honours_explicit_dir() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("explicit");
    let store = FileStore::setup_default(Some(&target)).unwrap();

    assert_eq!(store.dir(), target.as_path());
    assert!(target.is_dir());
}

#[cfg(unix)]
#[test]
fn test_setup_fails_under_a_file() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("occupied");
    fs::write(&file, "").unwrap();

    let err = FileStore::setup(file.join("jump")).unwrap_err();
    match err {
        JumpError::Config(msg) => assert!(msg.contains("occupied")),
        other => panic!("unexpected error: {:?}", other),
    }
}
