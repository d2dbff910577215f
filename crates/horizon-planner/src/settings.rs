//! Planner settings and persistence.
//!
//! Settings are a typed tree with sensible defaults; any field missing from a
//! file falls back to its default. Files can be TOML or JSON:
//!
//! ```toml
//! [calendar]
//! layout_strategy = "clustered"
//! first_day_of_week = "Mon"
//!
//! [calendar.metrics]
//! row_height_px = 48.0
//! gutter_px = 2.0
//!
//! [deadlines]
//! default_duration_minutes = 30
//! ```
//!
//! ```ignore
//! use horizon_planner::settings::PlannerSettings;
//!
//! let settings = PlannerSettings::load("planner.toml")?;
//! settings.save_json("planner.json")?;
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Weekday;
use horizon_planner_core::logging::targets;
use horizon_planner_core::{LayoutMetrics, LayoutStrategy};
use serde::{Deserialize, Serialize};

/// Result type alias for settings operations.
pub type SettingsResult<T> = std::result::Result<T, SettingsError>;

/// Errors that can occur while loading, saving or validating settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// File I/O error.
    #[error("Failed to access settings file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML parse error.
    #[error("Invalid TOML settings: {0}")]
    ParseToml(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("Failed to serialize settings as TOML: {0}")]
    SerializeToml(#[from] toml::ser::Error),

    /// JSON parse or serialization error.
    #[error("Invalid JSON settings: {0}")]
    Json(#[from] serde_json::Error),

    /// The file extension is neither `.toml` nor `.json`.
    #[error("Unsupported settings format for '{path}'")]
    UnsupportedFormat { path: PathBuf },

    /// A value is outside its allowed range.
    #[error("Invalid value for setting '{field}': {message}")]
    Invalid {
        field: &'static str,
        message: String,
    },
}

impl SettingsError {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a validation error.
    pub fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            message: message.into(),
        }
    }
}

/// Calendar view settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarSettings {
    /// How column counts are reconciled among overlapping events.
    pub layout_strategy: LayoutStrategy,
    /// First column of the week and month views.
    pub first_day_of_week: Weekday,
    /// Pixel metrics of a day column.
    pub metrics: LayoutMetrics,
}

impl Default for CalendarSettings {
    fn default() -> Self {
        Self {
            layout_strategy: LayoutStrategy::default(),
            first_day_of_week: Weekday::Sun,
            metrics: LayoutMetrics::default(),
        }
    }
}

/// Deadline display settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeadlineSettings {
    /// Length of the block drawn for a deadline without its own duration.
    pub default_duration_minutes: u32,
}

impl Default for DeadlineSettings {
    fn default() -> Self {
        Self {
            default_duration_minutes: 60,
        }
    }
}

/// All planner settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerSettings {
    /// Calendar view settings.
    pub calendar: CalendarSettings,
    /// Deadline display settings.
    pub deadlines: DeadlineSettings,
}

impl PlannerSettings {
    /// Check that every value is usable.
    pub fn validate(&self) -> SettingsResult<()> {
        let metrics = &self.calendar.metrics;
        if !metrics.row_height_px.is_finite() || metrics.row_height_px <= 0.0 {
            return Err(SettingsError::invalid(
                "calendar.metrics.row_height_px",
                format!("must be positive, got {}", metrics.row_height_px),
            ));
        }
        if !metrics.gutter_px.is_finite()
            || metrics.gutter_px < 0.0
            || metrics.gutter_px >= metrics.row_height_px
        {
            return Err(SettingsError::invalid(
                "calendar.metrics.gutter_px",
                format!(
                    "must be in [0, {}), got {}",
                    metrics.row_height_px, metrics.gutter_px
                ),
            ));
        }
        let minutes = self.deadlines.default_duration_minutes;
        if !(1..=24 * 60).contains(&minutes) {
            return Err(SettingsError::invalid(
                "deadlines.default_duration_minutes",
                format!("must be between 1 and 1440, got {minutes}"),
            ));
        }
        Ok(())
    }

    /// Parse and validate settings from a TOML string.
    pub fn from_toml_str(content: &str) -> SettingsResult<Self> {
        let settings: Self = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Serialize settings as TOML.
    pub fn to_toml_string(&self) -> SettingsResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Parse and validate settings from a JSON string.
    pub fn from_json_str(content: &str) -> SettingsResult<Self> {
        let settings: Self = serde_json::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Serialize settings as pretty-printed JSON.
    pub fn to_json_string(&self) -> SettingsResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load settings from a TOML file.
    pub fn load_toml(path: impl AsRef<Path>) -> SettingsResult<Self> {
        let path = path.as_ref();
        let settings = Self::from_toml_str(&read(path)?)?;
        tracing::debug!(target: targets::SETTINGS, path = %path.display(), "loaded TOML settings");
        Ok(settings)
    }

    /// Load settings from a JSON file.
    pub fn load_json(path: impl AsRef<Path>) -> SettingsResult<Self> {
        let path = path.as_ref();
        let settings = Self::from_json_str(&read(path)?)?;
        tracing::debug!(target: targets::SETTINGS, path = %path.display(), "loaded JSON settings");
        Ok(settings)
    }

    /// Load settings, choosing the format from the file extension.
    pub fn load(path: impl AsRef<Path>) -> SettingsResult<Self> {
        let path = path.as_ref();
        match extension(path).as_deref() {
            Some("toml") => Self::load_toml(path),
            Some("json") => Self::load_json(path),
            _ => Err(SettingsError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }

    /// Save settings to a TOML file.
    pub fn save_toml(&self, path: impl AsRef<Path>) -> SettingsResult<()> {
        let path = path.as_ref();
        write(path, &self.to_toml_string()?)?;
        tracing::debug!(target: targets::SETTINGS, path = %path.display(), "saved TOML settings");
        Ok(())
    }

    /// Save settings to a JSON file.
    pub fn save_json(&self, path: impl AsRef<Path>) -> SettingsResult<()> {
        let path = path.as_ref();
        write(path, &self.to_json_string()?)?;
        tracing::debug!(target: targets::SETTINGS, path = %path.display(), "saved JSON settings");
        Ok(())
    }
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
}

fn read(path: &Path) -> SettingsResult<String> {
    fs::read_to_string(path).map_err(|e| SettingsError::io(path, e))
}

fn write(path: &Path, content: &str) -> SettingsResult<()> {
    fs::write(path, content).map_err(|e| SettingsError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = PlannerSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.calendar.first_day_of_week, Weekday::Sun);
        assert_eq!(settings.calendar.layout_strategy, LayoutStrategy::Neighborhood);
        assert_eq!(settings.deadlines.default_duration_minutes, 60);
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let settings = PlannerSettings::from_toml_str(
            r#"
            [calendar]
            layout_strategy = "clustered"

            [calendar.metrics]
            row_height_px = 48.0
            "#,
        )
        .unwrap();

        assert_eq!(settings.calendar.layout_strategy, LayoutStrategy::Clustered);
        assert_eq!(settings.calendar.metrics.row_height_px, 48.0);
        assert_eq!(settings.calendar.metrics.gutter_px, 2.0);
        assert_eq!(settings.deadlines, DeadlineSettings::default());
    }

    #[test]
    fn test_toml_round_trip() {
        let mut settings = PlannerSettings::default();
        settings.calendar.first_day_of_week = Weekday::Mon;
        settings.deadlines.default_duration_minutes = 45;

        let text = settings.to_toml_string().unwrap();
        assert_eq!(PlannerSettings::from_toml_str(&text).unwrap(), settings);
    }

    #[test]
    fn test_json_round_trip() {
        let mut settings = PlannerSettings::default();
        settings.calendar.metrics = LayoutMetrics::new(40.0, 1.0);

        let text = settings.to_json_string().unwrap();
        assert_eq!(PlannerSettings::from_json_str(&text).unwrap(), settings);
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let err = PlannerSettings::from_toml_str("[calendar.metrics]\nrow_height_px = 0.0\n")
            .unwrap_err();
        assert!(matches!(
            err,
            SettingsError::Invalid {
                field: "calendar.metrics.row_height_px",
                ..
            }
        ));

        let err =
            PlannerSettings::from_toml_str("[calendar.metrics]\nrow_height_px = 10.0\ngutter_px = 12.0\n")
                .unwrap_err();
        assert!(matches!(err, SettingsError::Invalid { field: "calendar.metrics.gutter_px", .. }));

        let err = PlannerSettings::from_json_str(r#"{"deadlines": {"default_duration_minutes": 0}}"#)
            .unwrap_err();
        assert!(matches!(
            err,
            SettingsError::Invalid {
                field: "deadlines.default_duration_minutes",
                ..
            }
        ));
    }

    #[test]
    fn test_malformed_input_is_a_parse_error() {
        assert!(matches!(
            PlannerSettings::from_toml_str("[calendar"),
            Err(SettingsError::ParseToml(_))
        ));
        assert!(matches!(
            PlannerSettings::from_json_str("{"),
            Err(SettingsError::Json(_))
        ));
    }
}
