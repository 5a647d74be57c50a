//! Runtime configuration read from the environment.
//!
//! | variable | default |
//! |---|---|
//! | `FALLIANT_SCORES_PATH` | `falliant_high_scores.json` |
//! | `FALLIANT_LEVEL` | `1` (clamped to 1..=10) |
//! | `FALLIANT_SEED` | derived from the clock |
//! | `FALLIANT_FPS` | `60` (clamped to 1..=240) |

use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::types::{FRAMERATE, MAX_START_LEVEL};

pub const DEFAULT_SCORES_PATH: &str = "falliant_high_scores.json";
pub const MAX_FPS: u32 = 240;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub scores_path: PathBuf,
    pub start_level: u32,
    pub seed: Option<u32>,
    pub fps: u32,
    /// Values that were present but unusable, reported once the terminal is restored
    pub warnings: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scores_path: PathBuf::from(DEFAULT_SCORES_PATH),
            start_level: 1,
            seed: None,
            fps: FRAMERATE,
            warnings: Vec::new(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (the environment in production, a map in tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(path) = lookup("FALLIANT_SCORES_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
        {
            config.scores_path = PathBuf::from(path);
        }

        if let Some(level) = config.parse_number(&lookup, "FALLIANT_LEVEL") {
            config.start_level = level.clamp(1, MAX_START_LEVEL);
        }

        config.seed = config.parse_number(&lookup, "FALLIANT_SEED");

        if let Some(fps) = config.parse_number(&lookup, "FALLIANT_FPS") {
            config.fps = fps.clamp(1, MAX_FPS);
        }

        config
    }

    fn parse_number(
        &mut self,
        lookup: &impl Fn(&str) -> Option<String>,
        key: &str,
    ) -> Option<u32> {
        let raw = lookup(key)?;
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        match raw.parse() {
            Ok(n) => Some(n),
            Err(_) => {
                self.warnings
                    .push(format!("ignoring {key}={raw:?}: not a non-negative integer"));
                None
            }
        }
    }

    /// Configured seed, or one derived from the wall clock.
    pub fn resolve_seed(&self) -> u32 {
        self.seed.unwrap_or_else(|| {
            let nanos = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos())
                .unwrap_or(0);
            (nanos as u32) ^ ((nanos >> 32) as u32)
        })
    }

    /// Duration of one frame at the configured rate.
    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs(1) / self.fps.max(1)
    }
}
