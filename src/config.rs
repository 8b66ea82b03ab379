//! Runtime configuration read from `BLOCKFALL_*` environment variables.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::types::FRAME_MS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Seed for the shape generator.
    pub seed: u32,
    /// Host frame interval in milliseconds (>= 1).
    pub frame_ms: u64,
    /// Session journal destination; `None` disables journaling.
    pub log_path: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: clock_seed(),
            frame_ms: FRAME_MS,
            log_path: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// - `BLOCKFALL_SEED`: u32 seed (default: derived from the system clock)
    /// - `BLOCKFALL_FRAME_MS`: frame interval (default 16)
    /// - `BLOCKFALL_LOG_PATH`: JSON-lines journal path (blank = off)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Config::from_env`], with the variable source injected.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup("BLOCKFALL_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(clock_seed);

        let frame_ms = lookup("BLOCKFALL_FRAME_MS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(FRAME_MS)
            .max(1);

        let log_path = lookup("BLOCKFALL_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            seed,
            frame_ms,
            log_path,
        }
    }

    pub fn frame_duration(&self) -> Duration {
        Duration::from_millis(self.frame_ms)
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}
