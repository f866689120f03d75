//! Configuration data model.
//!
//! Struct/enum definitions plus default values. Loading and precedence live
//! in the sibling modules.

use serde::Deserialize;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::ConfigError;

/// Where the host reduced-motion seed is read from.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReducedMotionSource {
    /// Ask the environment.
    #[default]
    Auto,
    On,
    Off,
}

impl FromStr for ReducedMotionSource {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "on" => Ok(Self::On),
            "off" => Ok(Self::Off),
            other => Err(ConfigError::Invalid(format!(
                "invalid reduced-motion source `{other}`: expected auto, on, or off"
            ))),
        }
    }
}

/// Output format for exported style variables.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `:root { --bg: ...; }`
    #[default]
    Css,
    /// Full visual configuration as JSON.
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "css" => Ok(Self::Css),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::Invalid(format!(
                "invalid output format `{other}`: expected css or json"
            ))),
        }
    }
}

/// Top-level runtime configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub display: DisplayConfig,
    pub host: HostConfig,
}

/// Terminal rendering preferences.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DisplayConfig {
    pub color: bool,
    pub show_panel: bool,
    pub format: OutputFormat,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: true,
            show_panel: true,
            format: OutputFormat::Css,
        }
    }
}

/// Host-signal settings.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct HostConfig {
    pub reduced_motion: ReducedMotionSource,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct FileConfig {
    pub(super) display: DisplayConfig,
    pub(super) host: HostConfig,
    /// Preferences are never persisted; a table here is reported and dropped.
    pub(super) preferences: Option<toml::Value>,
}

impl FileConfig {
    pub(super) fn into_config(self, diagnostics: &mut ConfigDiagnostics) -> Config {
        if self.preferences.is_some() {
            diagnostics.warnings.push(
                "`[preferences]` is ignored: preferences always start from defaults and are not saved."
                    .to_string(),
            );
        }
        Config {
            display: self.display,
            host: self.host,
        }
    }
}

/// Diagnostics captured while resolving runtime configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigDiagnostics {
    pub warnings: Vec<String>,
}

/// Configuration payload plus load-time details.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub diagnostics: ConfigDiagnostics,
    /// File the config came from; `None` when built-in defaults were used.
    pub source_path: Option<PathBuf>,
}

/// Result of `quietpage init`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GlobalConfigInitResult {
    Created {
        path: PathBuf,
    },
    AlreadyInitialized {
        path: PathBuf,
    },
    Overwritten {
        path: PathBuf,
        backup_path: PathBuf,
    },
}
