//! High-score persistence through the facade crate

use std::fs;

use tempfile::TempDir;

use falliant::scores::{HighScore, HighScores};

#[test]
fn test_file_format_is_a_plain_array() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("scores.json");
    let mut table = HighScores::new();
    table.insert(HighScore::new("ace", 3000, 4, 31, "2026-02-03 04:05"));
    table.save(&path).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let raw: serde_json::Value = serde_json::from_str(&text).unwrap();
    let entries = raw.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["initials"], "ACE");
    assert_eq!(entries[0]["score"], 3000);
    assert_eq!(entries[0]["level"], 4);
    assert_eq!(entries[0]["lines"], 31);
    assert_eq!(entries[0]["date"], "2026-02-03 04:05");
}

#[test]
fn test_eleventh_entry_pushes_out_the_lowest() {
    let mut table = HighScores::new();
    for i in 0..10 {
        assert!(table.qualifies(i * 10));
        table.insert(HighScore::new("AAA", i * 10, 1, 0, "d"));
    }
    assert_eq!(table.len(), 10);
    assert!(!table.qualifies(0));
    assert!(table.qualifies(1));

    assert_eq!(table.insert(HighScore::new("TOP", 1000, 1, 0, "d")), Some(0));
    assert_eq!(table.len(), 10);
    assert_eq!(table.entries().last().unwrap().score, 10);
}

#[test]
fn test_load_or_default_ignores_garbage() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("garbage.json");
    fs::write(&path, "{\"not\": \"an array\"}").unwrap();
    assert!(HighScores::load(&path).is_err());
    assert!(HighScores::load_or_default(&path).is_empty());
}

#[test]
fn test_save_creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("scores.json");
    HighScores::new().save(&path).unwrap();
    assert!(HighScores::load(&path).unwrap().is_empty());
}
