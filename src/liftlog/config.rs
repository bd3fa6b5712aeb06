use crate::error::{LiftlogError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "liftlog.json";
pub const DEFAULT_DOCUMENT: &str = "workout_log.md";
const DEFAULT_SETS: u32 = 1;

/// Configuration for liftlog, read from `liftlog.json` in the working directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogConfig {
    /// Path of the Markdown log, relative paths resolve against the config directory
    #[serde(default = "default_document")]
    pub document: PathBuf,

    /// Sets used by `record` when `--sets` is not given
    #[serde(default = "default_sets")]
    pub default_sets: u32,
}

fn default_document() -> PathBuf {
    PathBuf::from(DEFAULT_DOCUMENT)
}

fn default_sets() -> u32 {
    DEFAULT_SETS
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            document: default_document(),
            default_sets: DEFAULT_SETS,
        }
    }
}

impl LogConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_dir = config_dir.as_ref();
        let config_path = config_dir.join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default().resolved_in(config_dir));
        }

        let content = fs::read_to_string(&config_path).map_err(LiftlogError::Io)?;
        let config: LogConfig =
            serde_json::from_str(&content).map_err(LiftlogError::Serialization)?;
        tracing::debug!(path = %config_path.display(), "loaded config");
        Ok(config.resolved_in(config_dir))
    }

    /// Replace the document path (used by the `--file` flag)
    pub fn with_document(mut self, document: impl Into<PathBuf>) -> Self {
        self.document = document.into();
        self
    }

    /// Sets to record when none are given; never zero
    pub fn default_sets(&self) -> u32 {
        self.default_sets.max(1)
    }

    fn resolved_in(mut self, dir: &Path) -> Self {
        if self.document.is_relative() {
            self.document = dir.join(&self.document);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_points_at_workout_log() {
        let config = LogConfig::default();
        assert_eq!(config.document, PathBuf::from("workout_log.md"));
        assert_eq!(config.default_sets(), 1);
    }

    #[test]
    fn missing_config_resolves_default_document_in_dir() {
        let temp = TempDir::new().unwrap();
        let config = LogConfig::load(temp.path()).unwrap();
        assert_eq!(config.document, temp.path().join("workout_log.md"));
    }

    #[test]
    fn partial_config_fills_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILENAME), r#"{"default_sets": 3}"#).unwrap();

        let config = LogConfig::load(temp.path()).unwrap();
        assert_eq!(config.default_sets(), 3);
        assert_eq!(config.document, temp.path().join("workout_log.md"));
    }

    #[test]
    fn absolute_document_is_kept() {
        let temp = TempDir::new().unwrap();
        let elsewhere = temp.path().join("logs").join("gym.md");
        let written = LogConfig::default().with_document(&elsewhere);
        fs::write(
            temp.path().join(CONFIG_FILENAME),
            serde_json::to_string_pretty(&written).unwrap(),
        )
        .unwrap();

        let loaded = LogConfig::load(temp.path()).unwrap();
        assert_eq!(loaded.document, elsewhere);
    }

    #[test]
    fn zero_default_sets_is_clamped() {
        let config = LogConfig {
            default_sets: 0,
            ..LogConfig::default()
        };
        assert_eq!(config.default_sets(), 1);
    }

    #[test]
    fn malformed_config_is_an_error() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILENAME), "{ not json").unwrap();

        let err = LogConfig::load(temp.path()).unwrap_err();
        assert!(matches!(err, LiftlogError::Serialization(_)));
    }
}
