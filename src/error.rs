//! Unified error types for quietpage.

use std::fmt;

// ---------------------------------------------------------------------------
// PreferenceError
// ---------------------------------------------------------------------------

/// Errors from parsing user-typed preference values.
///
/// The preference model itself cannot be put into an invalid state; these
/// only surface where free text is turned into a closed choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreferenceError {
    UnknownTheme(String),
    UnknownPreset(String),
    /// Expected `on`/`off` (or a synonym) for a boolean toggle.
    InvalidToggle(String),
    /// Font size text that is not an integer at all.
    InvalidFontScale(String),
}

impl fmt::Display for PreferenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownTheme(name) => {
                write!(f, "unknown theme `{name}` (expected calm, ocean, or contrast)")
            }
            Self::UnknownPreset(name) => {
                write!(f, "unknown preset `{name}` (expected quiet or playful)")
            }
            Self::InvalidToggle(value) => write!(f, "expected on/off, got `{value}`"),
            Self::InvalidFontScale(value) => {
                write!(f, "font size must be a whole number of pixels, got `{value}`")
            }
        }
    }
}

impl std::error::Error for PreferenceError {}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors when loading or parsing configuration.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Toml(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Toml(e) => write!(f, "toml: {e}"),
            Self::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml(e)
    }
}

// ---------------------------------------------------------------------------
// AppError
// ---------------------------------------------------------------------------

/// Top-level error type for the binary.
#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Preference(PreferenceError),
    /// Terminal or stdout write failure.
    Io(std::io::Error),
    /// Serializing the visual configuration failed.
    Json(serde_json::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Preference(e) => write!(f, "{e}"),
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Json(e) => write!(f, "json: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<ConfigError> for AppError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<PreferenceError> for AppError {
    fn from(e: PreferenceError) -> Self {
        Self::Preference(e)
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}
