//! High-score table and its JSON file.
//!
//! The table keeps at most [`HIGH_SCORE_CAPACITY`] records in descending score
//! order. On disk it is a plain JSON array:
//!
//! ```json
//! [{"initials":"ABC","score":1200,"level":3,"lines":24,"date":"2026-01-05 21:14"}]
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub use falliant_types as types;

use crate::types::{HIGH_SCORE_CAPACITY, INITIALS_LEN};

/// Timestamp format stored with each record
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// One finished run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScore {
    pub initials: String,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub date: String,
}

impl HighScore {
    pub fn new(
        initials: &str,
        score: u32,
        level: u32,
        lines: u32,
        date: impl Into<String>,
    ) -> Self {
        Self {
            initials: normalize_initials(initials),
            score,
            level,
            lines,
            date: date.into(),
        }
    }

    /// Record stamped with the current local time
    pub fn now(initials: &str, score: u32, level: u32, lines: u32) -> Self {
        let date = chrono::Local::now().format(DATE_FORMAT).to_string();
        Self::new(initials, score, level, lines, date)
    }
}

/// Uppercase ASCII letters only, padded with `A` or cut to three.
pub fn normalize_initials(raw: &str) -> String {
    let mut out: String = raw
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .take(INITIALS_LEN)
        .collect();
    while out.len() < INITIALS_LEN {
        out.push('A');
    }
    out
}

/// Sorted, bounded high-score table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HighScores {
    entries: Vec<HighScore>,
}

impl HighScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from arbitrary records; sorts and truncates.
    pub fn from_entries(entries: impl IntoIterator<Item = HighScore>) -> Self {
        let mut table = Self::new();
        for entry in entries {
            table.insert(entry);
        }
        table
    }

    pub fn entries(&self) -> &[HighScore] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn best(&self) -> Option<&HighScore> {
        self.entries.first()
    }

    /// Whether `score` would earn a place in the table
    pub fn qualifies(&self, score: u32) -> bool {
        match self.entries.last() {
            Some(lowest) if self.entries.len() >= HIGH_SCORE_CAPACITY => score > lowest.score,
            _ => true,
        }
    }

    /// Insert a record, keeping descending order.
    ///
    /// Equal scores rank below the ones already present. Returns the
    /// zero-based rank, or `None` when the record fell off the end.
    pub fn insert(&mut self, record: HighScore) -> Option<usize> {
        let rank = self
            .entries
            .iter()
            .position(|e| e.score < record.score)
            .unwrap_or(self.entries.len());
        if rank >= HIGH_SCORE_CAPACITY {
            return None;
        }
        self.entries.insert(rank, record);
        self.entries.truncate(HIGH_SCORE_CAPACITY);
        Some(rank)
    }

    /// Read a table; errors on unreadable or malformed files.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read high scores from {}", path.display()))?;
        let raw: Vec<HighScore> = serde_json::from_str(&text)
            .with_context(|| format!("invalid high score file {}", path.display()))?;
        Ok(Self::from_entries(raw))
    }

    /// Read a table, treating a missing or malformed file as empty.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(path).unwrap_or_default()
    }

    /// Write the table as a pretty-printed JSON array.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let text = serde_json::to_string_pretty(self).context("failed to encode high scores")?;
        fs::write(path, text)
            .with_context(|| format!("failed to write high scores to {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn record(initials: &str, score: u32) -> HighScore {
        HighScore::new(initials, score, 1, 0, "2026-01-01 00:00")
    }

    fn full_table() -> HighScores {
        HighScores::from_entries((1..=10).map(|i| record("AAA", i * 100)))
    }

    #[test]
    fn normalizes_initials() {
        assert_eq!(normalize_initials("abc"), "ABC");
        assert_eq!(normalize_initials("a1b"), "ABA");
        assert_eq!(normalize_initials("wxyz"), "WXY");
        assert_eq!(normalize_initials(""), "AAA");
    }

    #[test]
    fn empty_or_short_table_always_qualifies() {
        let mut table = HighScores::new();
        assert!(table.qualifies(0));
        table.insert(record("ABC", 500));
        assert!(table.qualifies(0));
    }

    #[test]
    fn full_table_needs_strictly_higher_score() {
        let table = full_table();
        assert_eq!(table.len(), 10);
        assert!(!table.qualifies(100));
        assert!(!table.qualifies(50));
        assert!(table.qualifies(101));
    }

    #[test]
    fn insert_keeps_descending_order_and_capacity() {
        let mut table = full_table();
        assert_eq!(table.insert(record("NEW", 550)), Some(5));
        assert_eq!(table.len(), 10);
        assert_eq!(table.entries()[5].initials, "NEW");
        assert_eq!(table.entries().last().map(|e| e.score), Some(200));

        let scores: Vec<u32> = table.entries().iter().map(|e| e.score).collect();
        assert!(scores.windows(2).all(|w| w[0] >= w[1]));

        assert_eq!(table.insert(record("LOW", 10)), None);
        assert_eq!(table.len(), 10);
    }

    #[test]
    fn ties_rank_below_existing_entries() {
        let mut table = HighScores::new();
        table.insert(record("OLD", 300));
        assert_eq!(table.insert(record("NEW", 300)), Some(1));
        assert_eq!(table.best().map(|e| e.initials.as_str()), Some("OLD"));
    }

    #[test]
    fn save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("scores.json");
        let mut table = HighScores::new();
        table.insert(record("ABC", 1200));
        table.insert(HighScore::now("xyz", 40, 2, 11));

        table.save(&path).unwrap();
        let loaded = HighScores::load(&path).unwrap();
        assert_eq!(loaded, table);
        assert_eq!(loaded.entries()[1].initials, "XYZ");

        let text = fs::read_to_string(&path).unwrap();
        let raw: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert!(raw.is_array());
        assert_eq!(raw[0]["score"], 1200);
    }

    #[test]
    fn load_sorts_unsorted_files() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("unsorted.json");
        fs::write(
            &path,
            r#"[{"initials":"LOW","score":10,"level":1,"lines":0,"date":"x"},
               {"initials":"TOP","score":90,"level":2,"lines":12,"date":"y"}]"#,
        )
        .unwrap();
        let table = HighScores::load(&path).unwrap();
        assert_eq!(table.entries()[0].initials, "TOP");
    }

    #[test]
    fn missing_or_invalid_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.json");
        assert!(HighScores::load(&missing).is_err());
        assert!(HighScores::load_or_default(&missing).is_empty());

        let invalid = dir.path().join("invalid.json");
        fs::write(&invalid, "not json").unwrap();
        let err = HighScores::load(&invalid).unwrap_err();
        assert!(format!("{err:#}").contains("invalid high score file"));
        assert!(HighScores::load_or_default(&invalid).is_empty());
    }

    #[test]
    fn timestamp_uses_minute_precision() {
        let rec = HighScore::now("abc", 1, 1, 1);
        assert!(chrono::NaiveDateTime::parse_from_str(&rec.date, DATE_FORMAT).is_ok());
    }
}
