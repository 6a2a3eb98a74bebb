//! Configuration and settings management for LabelKit
//!
//! Provides configuration file handling and validation.
//! Supports JSON and TOML file formats stored in the platform config directory.
//!
//! Configuration is organized into logical sections:
//! - Template settings (the label stock new documents start on)
//! - Event settings (document event history)
//! - Logging preferences

use labelkit_core::units::{parse_distance, Units};
use labelkit_core::{ConfigError, Error, EventBusConfig, Result, Template};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default label template for new documents
///
/// In files, `width` and `height` may also be written as length strings
/// with their own suffix (`"2.625in"`, `"54 mm"`); they are converted to
/// `units` on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTemplateSettings")]
pub struct TemplateSettings {
    /// Part name shown to the user
    pub name: String,
    /// Label width, in `units`
    pub width: f64,
    /// Label height, in `units`
    pub height: f64,
    /// Units `width` and `height` are written in
    pub units: Units,
    /// Lay the label out rotated by 90 degrees
    pub rotate: bool,
}

impl Default for TemplateSettings {
    fn default() -> Self {
        // Common 1" x 2-5/8" address label
        Self {
            name: "Address Label".to_string(),
            width: 2.625,
            height: 1.0,
            units: Units::In,
            rotate: false,
        }
    }
}

impl TemplateSettings {
    /// Build the template described by these settings, in points.
    pub fn to_template(&self) -> Template {
        Template::with_units(self.name.clone(), self.width, self.height, self.units)
    }
}

/// Template section as written on disk
#[derive(Deserialize)]
#[serde(default)]
struct RawTemplateSettings {
    name: String,
    width: Length,
    height: Length,
    units: Units,
    rotate: bool,
}

impl Default for RawTemplateSettings {
    fn default() -> Self {
        let defaults = TemplateSettings::default();
        Self {
            name: defaults.name,
            width: Length::Value(defaults.width),
            height: Length::Value(defaults.height),
            units: defaults.units,
            rotate: defaults.rotate,
        }
    }
}

impl TryFrom<RawTemplateSettings> for TemplateSettings {
    type Error = ConfigError;

    fn try_from(raw: RawTemplateSettings) -> std::result::Result<Self, Self::Error> {
        Ok(Self {
            width: raw.width.resolve(raw.units)?,
            height: raw.height.resolve(raw.units)?,
            name: raw.name,
            units: raw.units,
            rotate: raw.rotate,
        })
    }
}

/// A template dimension: a bare number in the section's units, or a string
#[derive(Deserialize)]
#[serde(untagged)]
enum Length {
    Value(f64),
    Text(String),
}

impl Length {
    /// Value expressed in `units`.
    fn resolve(self, units: Units) -> std::result::Result<f64, ConfigError> {
        match self {
            Length::Value(value) => Ok(value),
            Length::Text(text) => match text.trim().parse::<f64>() {
                Ok(value) => Ok(value),
                Err(_) => Ok(parse_distance(&text)?.in_units(units)),
            },
        }
    }
}

/// Logging preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default filter directive when `RUST_LOG` is unset (e.g. "info")
    pub level: String,
    /// Emit JSON lines instead of human readable output
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

/// Complete application configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Default template
    pub template: TemplateSettings,
    /// Document event bus options
    pub events: EventBusConfig,
    /// Logging preferences
    pub logging: LoggingSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default config file location (`<config dir>/labelkit/config.toml`)
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("labelkit")
            .join("config.toml")
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            ConfigFormat::Json => serde_json::from_str(&content)?,
            ConfigFormat::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load config from file, falling back to defaults if it does not exist
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        self.validate()?;
        let format = ConfigFormat::from_path(path)?;

        let content = match format {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.template.name.trim().is_empty() {
            return Err(ConfigError::invalid("template.name", "must not be empty").into());
        }

        if !(self.template.width > 0.0) || !self.template.width.is_finite() {
            return Err(ConfigError::invalid("template.width", "must be > 0").into());
        }

        if !(self.template.height > 0.0) || !self.template.height.is_finite() {
            return Err(ConfigError::invalid("template.height", "must be > 0").into());
        }

        if self.events.enable_history && self.events.max_history_size == 0 {
            return Err(ConfigError::invalid(
                "events.max_history_size",
                "must be > 0 when history is enabled",
            )
            .into());
        }

        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::invalid("logging.level", "must not be empty").into());
        }

        Ok(())
    }
}

/// Supported config file formats, chosen by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    fn from_path(path: &Path) -> std::result::Result<Self, Error> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(ConfigFormat::Json),
            Some("toml") => Ok(ConfigFormat::Toml),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )
            .into()),
        }
    }
}
