//! Application configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{SwipeableError, SwipeableResult};

/// Global application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Gesture tracker options.
    pub tracker: TrackerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Gesture tracker options, fixed for the lifetime of a tracker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Velocity (pixels per millisecond) above which a swipe is a flick.
    pub flick_threshold: f64,

    /// Minimum movement (pixels) on either axis before a gesture is a swipe.
    pub delta: f64,

    /// Suppress default handling of move events once a swipe is recognized.
    pub prevent_default_touchmove_event: bool,

    /// Stop the triggering event from propagating, on every phase.
    pub stop_propagation: bool,

    /// Ignore all events delivered through the host dispatch entry point.
    pub disabled: bool,

    /// Rotation of the coordinate frame in degrees.
    pub rotation_angle: f64,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "swipeable_gesture=trace,warn").
    pub level: String,

    /// Whether to output structured JSON logs.
    pub json: bool,

    /// Optional log file path.
    pub file: Option<PathBuf>,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            flick_threshold: 0.6,
            delta: 10.0,
            prevent_default_touchmove_event: false,
            stop_propagation: false,
            disabled: false,
            rotation_angle: 0.0,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            file: None,
        }
    }
}

impl TrackerConfig {
    /// Reject values the tracker cannot compare against meaningfully.
    pub fn validate(&self) -> SwipeableResult<()> {
        if !self.delta.is_finite() || self.delta < 0.0 {
            return Err(SwipeableError::invalid_option(
                "delta",
                format!("expected a finite, non-negative distance, got {}", self.delta),
            ));
        }
        if !self.flick_threshold.is_finite() || self.flick_threshold < 0.0 {
            return Err(SwipeableError::invalid_option(
                "flick_threshold",
                format!(
                    "expected a finite, non-negative velocity, got {}",
                    self.flick_threshold
                ),
            ));
        }
        if !self.rotation_angle.is_finite() {
            return Err(SwipeableError::invalid_option(
                "rotation_angle",
                format!("expected a finite angle, got {}", self.rotation_angle),
            ));
        }
        Ok(())
    }
}

impl AppConfig {
    /// Load config from the standard location, using defaults when no file
    /// exists there.
    pub fn load() -> SwipeableResult<Self> {
        Self::load_or_default(&config_file_path())
    }

    /// Load config from `path` if present. A file that exists but cannot be
    /// read, parsed or validated is an error, never a silent fallback.
    pub fn load_or_default(path: &Path) -> SwipeableResult<Self> {
        if !path.exists() {
            tracing::debug!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        Self::load_from(path).map_err(|e| {
            SwipeableError::config(format!("failed to load {}: {e}", path.display()))
        })
    }

    /// Load and validate config from an explicit path.
    pub fn load_from(path: &Path) -> SwipeableResult<Self> {
        if !path.exists() {
            return Err(SwipeableError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.tracker.validate()?;
        Ok(config)
    }

    /// Save config to the standard location.
    pub fn save(&self) -> SwipeableResult<()> {
        self.save_to(&config_file_path())
    }

    /// Save config to an explicit path.
    pub fn save_to(&self, path: &Path) -> SwipeableResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

/// Standard config file location.
pub fn config_file_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("swipeable").join("config.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracker_defaults() {
        let config = TrackerConfig::default();
        assert_eq!(config.flick_threshold, 0.6);
        assert_eq!(config.delta, 10.0);
        assert!(!config.prevent_default_touchmove_event);
        assert!(!config.stop_propagation);
        assert!(!config.disabled);
        assert_eq!(config.rotation_angle, 0.0);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let parsed: AppConfig =
            serde_json::from_str(r#"{"tracker":{"delta":25.0,"stop_propagation":true}}"#).unwrap();
        assert_eq!(parsed.tracker.delta, 25.0);
        assert!(parsed.tracker.stop_propagation);
        assert_eq!(parsed.tracker.flick_threshold, 0.6);
        assert_eq!(parsed.logging.level, "info");
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let negative = TrackerConfig {
            delta: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            negative.validate(),
            Err(SwipeableError::InvalidOption { field: "delta", .. })
        ));

        let nan = TrackerConfig {
            flick_threshold: f64::NAN,
            ..Default::default()
        };
        assert!(nan.validate().is_err());

        let infinite = TrackerConfig {
            rotation_angle: f64::INFINITY,
            ..Default::default()
        };
        assert!(infinite.validate().is_err());

        assert!(TrackerConfig::default().validate().is_ok());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = std::env::temp_dir().join("swipeable_test_config");
        let _ = std::fs::remove_dir_all(&dir);
        let path = dir.join("nested").join("config.json");

        let mut config = AppConfig::default();
        config.tracker.rotation_angle = 90.0;
        config.logging.json = true;
        config.save_to(&path).unwrap();

        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_load_from_missing_file() {
        let path = std::env::temp_dir().join("swipeable_test_config_missing.json");
        let _ = std::fs::remove_file(&path);
        assert!(matches!(
            AppConfig::load_from(&path),
            Err(SwipeableError::FileNotFound { .. })
        ));
    }

    #[test]
    fn test_load_from_rejects_invalid_tracker() {
        let dir = std::env::temp_dir().join("swipeable_test_config_invalid");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.json");
        std::fs::write(&path, r#"{"tracker":{"delta":-5.0}}"#).unwrap();

        assert!(AppConfig::load_from(&path).is_err());

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_load_or_default_without_file_uses_defaults() {
        let path = std::env::temp_dir().join("swipeable_test_config_absent.json");
        let _ = std::fs::remove_file(&path);
        assert_eq!(AppConfig::load_or_default(&path).unwrap(), AppConfig::default());
    }

    #[test]
    fn test_load_or_default_reports_invalid_file() {
        let dir = std::env::temp_dir().join("swipeable_test_config_present_invalid");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.json");
        std::fs::write(&path, r#"{"tracker":{"delta":-5}}"#).unwrap();

        let err = AppConfig::load_or_default(&path).unwrap_err();
        assert!(matches!(err, SwipeableError::Config { .. }));
        assert!(err.to_string().contains("delta"));

        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            AppConfig::load_or_default(&path),
            Err(SwipeableError::Config { .. })
        ));

        std::fs::remove_dir_all(&dir).ok();
    }
}
