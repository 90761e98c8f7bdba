//! Configuration handling for the TUI

use crate::state::{Theme, DEFAULT_TARGET};
use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// User configuration for the TUI. Read once at startup, never written back.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Local date and time the countdown runs to
    pub countdown_target: Option<NaiveDateTime>,
    /// Theme shown at startup
    pub theme: Option<Theme>,
    /// Latency of the simulated registration service
    pub submission_latency_ms: Option<u64>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "contests", "contest-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the platform config directory
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file, defaulting when it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config: TuiConfig = serde_json::from_str(&content)
            .with_context(|| format!("invalid config {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    pub fn countdown_target(&self) -> NaiveDateTime {
        self.countdown_target.unwrap_or_else(default_countdown_target)
    }

    pub fn theme(&self) -> Theme {
        self.theme.unwrap_or_default()
    }

    pub fn submission_latency(&self) -> Duration {
        self.submission_latency_ms
            .map(Duration::from_millis)
            .unwrap_or(crate::registration::DEFAULT_LATENCY)
    }
}

fn default_countdown_target() -> NaiveDateTime {
    DEFAULT_TARGET.parse().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_config(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "contest-tui-{}-{}.json",
            name,
            uuid::Uuid::new_v4()
        ));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_default_config() {
        let config = TuiConfig::default();
        assert!(config.countdown_target.is_none());
        assert!(config.theme.is_none());
        assert!(config.submission_latency_ms.is_none());
    }

    #[test]
    fn test_defaults_applied() {
        let config = TuiConfig::default();
        assert_eq!(
            config.countdown_target().to_string(),
            "2025-04-21 10:00:00"
        );
        assert_eq!(config.theme(), Theme::Light);
        assert_eq!(config.submission_latency(), Duration::from_millis(1500));
    }

    #[test]
    fn test_serialization() {
        let config = TuiConfig {
            countdown_target: Some("2026-01-01T09:30:00".parse().unwrap()),
            theme: Some(Theme::Dark),
            submission_latency_ms: Some(250),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: TuiConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.countdown_target, config.countdown_target);
        assert_eq!(parsed.theme, Some(Theme::Dark));
        assert_eq!(parsed.submission_latency(), Duration::from_millis(250));
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: TuiConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.theme.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"theme": "dark", "unknown_field": "value"}"#;
        let parsed: TuiConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.theme, Some(Theme::Dark));
    }

    #[test]
    fn test_load_from_missing_file_returns_default() {
        let path = std::env::temp_dir().join("contest-tui-does-not-exist.json");
        let config = TuiConfig::load_from(&path).unwrap();
        assert!(config.countdown_target.is_none());
    }

    #[test]
    fn test_load_from_file() {
        let path = temp_config(
            "valid",
            r#"{"countdown_target": "2030-06-15T10:00:00", "submission_latency_ms": 10}"#,
        );
        let config = TuiConfig::load_from(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(
            config.countdown_target().to_string(),
            "2030-06-15 10:00:00"
        );
        assert_eq!(config.submission_latency(), Duration::from_millis(10));
    }

    #[test]
    fn test_load_from_invalid_file_is_error() {
        let path = temp_config("invalid", "{ not json");
        let result = TuiConfig::load_from(&path);
        fs::remove_file(&path).ok();

        let err = result.unwrap_err();
        assert!(err.to_string().starts_with("invalid config"));
    }

    #[test]
    fn test_config_path_returns_option() {
        // Just test that the function doesn't panic
        let _path = TuiConfig::config_path();
    }
}
