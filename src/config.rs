//! Configuration file support for the fast scroller.
//!
//! This module provides serialization and deserialization of scroller
//! settings (orientation, styling and log verbosity) as JSON.

use std::path::Path;

use fastscroll_ui::{
    BUBBLE_HEIGHT, BUBBLE_WIDTH, Color, HANDLE_LENGTH, HANDLE_THICKNESS, Size, TextStyle,
};
use serde::{Deserialize, Serialize};

use crate::orientation::ScrollerOrientation;

/// Log level setting for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    Warn,
    /// Show errors, warnings, and info messages
    #[default]
    Info,
    /// Show debug-level logging
    Debug,
    /// Show all log messages including trace
    Trace,
}

impl LogLevel {
    /// Get the display name for this log level.
    pub fn name(&self) -> &'static str {
        match self {
            LogLevel::Error => "Error",
            LogLevel::Warn => "Warn",
            LogLevel::Info => "Info",
            LogLevel::Debug => "Debug",
            LogLevel::Trace => "Trace",
        }
    }

    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Current configuration file format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

/// Visual styling of the scroller, applied once at layout time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollerStyle {
    /// Handle tint
    #[serde(default = "default_handle_color")]
    pub handle_color: Color,

    /// Bubble background tint
    #[serde(default = "default_bubble_color")]
    pub bubble_color: Color,

    /// Bubble label style
    #[serde(default)]
    pub text_style: TextStyle,

    /// Handle size across the scroll axis
    #[serde(default = "default_handle_thickness")]
    pub handle_thickness: f32,

    /// Handle size along the scroll axis
    #[serde(default = "default_handle_length")]
    pub handle_length: f32,

    #[serde(default = "default_bubble_width")]
    pub bubble_width: f32,

    #[serde(default = "default_bubble_height")]
    pub bubble_height: f32,
}

fn default_handle_color() -> Color {
    Color::DARKER_GRAY
}

fn default_bubble_color() -> Color {
    Color::WHITE
}

fn default_handle_thickness() -> f32 {
    HANDLE_THICKNESS
}

fn default_handle_length() -> f32 {
    HANDLE_LENGTH
}

fn default_bubble_width() -> f32 {
    BUBBLE_WIDTH
}

fn default_bubble_height() -> f32 {
    BUBBLE_HEIGHT
}

impl Default for ScrollerStyle {
    fn default() -> Self {
        Self {
            handle_color: default_handle_color(),
            bubble_color: default_bubble_color(),
            text_style: TextStyle::default(),
            handle_thickness: default_handle_thickness(),
            handle_length: default_handle_length(),
            bubble_width: default_bubble_width(),
            bubble_height: default_bubble_height(),
        }
    }
}

impl ScrollerStyle {
    pub fn bubble_size(&self) -> Size {
        Size::new(self.bubble_width, self.bubble_height)
    }

    /// Check that every size is positive and every color in range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let sizes = [
            ("handle_thickness", self.handle_thickness),
            ("handle_length", self.handle_length),
            ("bubble_width", self.bubble_width),
            ("bubble_height", self.bubble_height),
            ("text_style.size", self.text_style.size),
        ];
        for (field, value) in sizes {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    message: format!("must be a positive number, got {}", value),
                });
            }
        }

        let colors = [
            ("handle_color", self.handle_color),
            ("bubble_color", self.bubble_color),
            ("text_style.color", self.text_style.color),
        ];
        for (field, color) in colors {
            if !color.is_valid() {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    message: "channels must be within 0.0..=1.0".to_string(),
                });
            }
        }

        Ok(())
    }
}

/// Scroller configuration that can be exported and imported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrollerConfig {
    /// Version of the configuration file format
    pub version: u32,

    /// Axis the handle travels along
    #[serde(default)]
    pub orientation: ScrollerOrientation,

    /// Colors and sizes
    #[serde(default)]
    pub style: ScrollerStyle,

    /// Log verbosity level
    #[serde(default)]
    pub log_level: LogLevel,
}

impl ScrollerConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self {
            version: CONFIG_VERSION,
            orientation: ScrollerOrientation::default(),
            style: ScrollerStyle::default(),
            log_level: LogLevel::default(),
        }
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize and validate configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;

        // Validate version compatibility
        if config.version > CONFIG_VERSION {
            return Err(ConfigError::VersionTooNew {
                file_version: config.version,
                supported_version: CONFIG_VERSION,
            });
        }

        config.style.validate()?;
        Ok(config)
    }

    /// Get the default filename for config export.
    pub fn default_filename() -> &'static str {
        "fastscroll-config.json"
    }

    /// Load configuration from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Save configuration to a file, creating parent directories if needed.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let json = self.to_json()?;
        std::fs::write(path, json)?;
        log::info!("Saved configuration to {:?}", path);
        Ok(())
    }
}

impl Default for ScrollerConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parsing error
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),

    /// I/O error reading or writing the config file
    #[error("Failed to access configuration file: {0}")]
    IoError(#[from] std::io::Error),

    /// Configuration file is from a newer version
    #[error(
        "Configuration file version {file_version} is newer than supported version {supported_version}"
    )]
    VersionTooNew {
        file_version: u32,
        supported_version: u32,
    },

    /// A field holds a value the scroller cannot use
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_roundtrip() {
        let config = ScrollerConfig::new();
        let json = config.to_json().unwrap();
        let parsed = ScrollerConfig::from_json(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let parsed = ScrollerConfig::from_json(r#"{ "version": 1, "orientation": "horizontal" }"#).unwrap();
        assert_eq!(parsed.orientation, ScrollerOrientation::Horizontal);
        assert_eq!(parsed.style, ScrollerStyle::default());
        assert_eq!(parsed.log_level, LogLevel::Info);

        let parsed = ScrollerConfig::from_json(
            r#"{ "version": 1, "style": { "handle_length": 64.0 }, "log_level": "trace" }"#,
        )
        .unwrap();
        assert_eq!(parsed.style.handle_length, 64.0);
        assert_eq!(parsed.style.handle_color, Color::DARKER_GRAY);
        assert_eq!(parsed.log_level.to_level_filter(), log::LevelFilter::Trace);
    }

    #[test]
    fn test_version_too_new() {
        let err = ScrollerConfig::from_json(r#"{ "version": 99 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::VersionTooNew {
                file_version: 99,
                supported_version: CONFIG_VERSION
            }
        ));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = ScrollerConfig::from_json(r#"{ "version": 1, "style": { "bubble_width": 0.0 } }"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "bubble_width"));

        let err = ScrollerConfig::from_json(
            r#"{ "version": 1, "style": { "bubble_color": { "r": 2.0, "g": 0.0, "b": 0.0, "a": 1.0 } } }"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "bubble_color"));
    }

    #[test]
    fn test_parse_error() {
        let err = ScrollerConfig::from_json("not json").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(ScrollerConfig::default_filename());

        let mut config = ScrollerConfig::new();
        config.orientation = ScrollerOrientation::Horizontal;
        config.style.bubble_color = Color::rgb(0.2, 0.4, 0.8);
        config.save(&path).unwrap();

        let loaded = ScrollerConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file() {
        let err = ScrollerConfig::load("/nonexistent/fastscroll/config.json").unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }
}
