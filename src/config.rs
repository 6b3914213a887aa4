use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Milliseconds between CPU polls.
    pub poll_interval_ms: u64,
    /// Number of samples kept for the usage chart.
    pub history_points: usize,
    /// Quit the panel on the first failed sample instead of retrying next poll.
    pub exit_on_sample_error: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            poll_interval_ms: 1000,
            history_points: 60,
            exit_on_sample_error: false,
        }
    }
}

impl Config {
    /// Loads from `~/.config/cpu-panel.json`, falling back to defaults when
    /// the file is absent or unreadable. Missing fields default individually.
    pub fn load() -> Self {
        std::fs::read_to_string(Self::path())
            .ok()
            .and_then(|text| serde_json::from_str(&text).ok())
            .unwrap_or_default()
    }

    fn path() -> PathBuf {
        let home = std::env::var("HOME").unwrap_or_default();
        PathBuf::from(home).join(".config").join("cpu-panel.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.poll_interval_ms, 1000);
        assert_eq!(config.history_points, 60);
        assert!(!config.exit_on_sample_error);
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_fields() {
        let config: Config = serde_json::from_str(r#"{"poll_interval_ms": 250}"#).unwrap();
        assert_eq!(config.poll_interval_ms, 250);
        assert_eq!(config.history_points, 60);
        assert!(!config.exit_on_sample_error);
    }
}
