//! TOML configuration.
//!
//! Looked up from `--config`, then the `FRAMECUT_CONFIG` environment
//! variable; with neither set the built-in defaults apply. Every key is
//! optional.
//!
//! ```toml
//! [units]
//! default = "metric"
//!
//! [defaults]
//! clearance = 0.125
//!
//! [layout]
//! gap = 0.25
//! padding = 1.0
//!
//! [export]
//! status_seconds = 2.2
//! ```

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use framecut_core::EngineOptions;
use framecut_core::options::DEFAULT_LAYOUT_GAP_IN;
use framecut_core::status::DEFAULT_STATUS_DURATION;
use framecut_model::{DEFAULT_CLEARANCE_IN, UnitSystem};

/// Environment variable naming a config file.
pub const CONFIG_ENV: &str = "FRAMECUT_CONFIG";

/// Padding around the board drawing, in drawing cells.
pub const DEFAULT_PADDING: f64 = 1.0;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config value `{key}`: {message}")]
    Invalid { key: &'static str, message: String },
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub units: UnitsConfig,
    pub defaults: DefaultsConfig,
    pub layout: LayoutConfig,
    pub export: ExportConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UnitsConfig {
    pub default: UnitSystem,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DefaultsConfig {
    /// Clearance seeded into new sessions, in inches.
    pub clearance: f64,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            clearance: DEFAULT_CLEARANCE_IN,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    /// Gap between blanks, in inches.
    pub gap: f64,
    pub padding: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            gap: DEFAULT_LAYOUT_GAP_IN,
            padding: DEFAULT_PADDING,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExportConfig {
    pub status_seconds: f64,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            status_seconds: DEFAULT_STATUS_DURATION.as_secs_f64(),
        }
    }
}

/// Pick the config file: an explicit path wins over the environment.
pub fn resolve_path(explicit: Option<&Path>, env: Option<OsString>) -> Option<PathBuf> {
    explicit
        .map(Path::to_path_buf)
        .or_else(|| env.filter(|value| !value.is_empty()).map(PathBuf::from))
}

impl Config {
    /// Load from `explicit` or [`CONFIG_ENV`], falling back to defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match resolve_path(explicit, std::env::var_os(CONFIG_ENV)) {
            Some(path) => Self::from_file(&path),
            None => {
                debug!("no config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&text, path)?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse and check TOML text; `path` is only used in errors.
    pub fn parse(text: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })?;
        config.check()?;
        Ok(config)
    }

    fn check(&self) -> Result<(), ConfigError> {
        non_negative("defaults.clearance", self.defaults.clearance)?;
        non_negative("layout.gap", self.layout.gap)?;
        non_negative("layout.padding", self.layout.padding)?;
        self.status_duration().map(|_| ())
    }

    pub fn status_duration(&self) -> Result<Duration, ConfigError> {
        Duration::try_from_secs_f64(self.export.status_seconds).map_err(|error| {
            ConfigError::Invalid {
                key: "export.status_seconds",
                message: error.to_string(),
            }
        })
    }

    pub fn engine_options(&self) -> EngineOptions {
        EngineOptions::new()
            .with_unit(self.units.default)
            .with_default_clearance(self.defaults.clearance)
            .with_layout_gap(self.layout.gap)
            .with_status_duration(self.status_duration().unwrap_or(DEFAULT_STATUS_DURATION))
    }

    pub fn padding(&self) -> f64 {
        self.layout.padding
    }
}

fn non_negative(key: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            key,
            message: format!("expected a number 0 or greater, got {value}"),
        })
    }
}
