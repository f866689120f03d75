//! Where config files live and which one wins.
//!
//! Source order: explicit path > local file > global file > built-in defaults.

use std::path::{Path, PathBuf};

use crate::error::ConfigError;

use super::defaults::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use super::loader::ConfigEnv;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum ConfigSource {
    /// Config loaded from explicit `--config` path.
    Explicit(PathBuf),
    /// Config loaded from `./quietpage.toml`.
    Local,
    /// Config loaded from `<config root>/quietpage/quietpage.toml`.
    Global(PathBuf),
    /// No file found; runtime defaults were used.
    BuiltInDefaults,
}

impl ConfigSource {
    pub(super) fn path(&self) -> Option<PathBuf> {
        match self {
            Self::Explicit(path) | Self::Global(path) => Some(path.clone()),
            Self::Local => Some(PathBuf::from(CONFIG_FILE_NAME)),
            Self::BuiltInDefaults => None,
        }
    }
}

/// Config text from the highest-precedence source, or empty text for defaults.
pub(super) fn locate_config(
    env: &dyn ConfigEnv,
    path_override: Option<&str>,
) -> Result<(String, ConfigSource), ConfigError> {
    if let Some(explicit) = path_override {
        let path = PathBuf::from(explicit);
        let text = env.read_file(&path)?;
        return Ok((text, ConfigSource::Explicit(path)));
    }

    if let Ok(text) = env.read_file(Path::new(CONFIG_FILE_NAME)) {
        return Ok((text, ConfigSource::Local));
    }

    let global = env.config_root().map(global_config_path);
    match global {
        Some(path) => match env.read_file(&path) {
            Ok(text) => Ok((text, ConfigSource::Global(path))),
            Err(_) => Ok((String::new(), ConfigSource::BuiltInDefaults)),
        },
        None => Ok((String::new(), ConfigSource::BuiltInDefaults)),
    }
}

/// `<root>/quietpage/quietpage.toml`.
pub(super) fn global_config_path(root: PathBuf) -> PathBuf {
    root.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME)
}

/// `$XDG_CONFIG_HOME` when set, else `~/.config`, else the platform config dir.
pub fn config_root_dir() -> Option<PathBuf> {
    config_root_from(std::env::var("XDG_CONFIG_HOME").ok())
}

pub(super) fn config_root_from(xdg_config_home: Option<String>) -> Option<PathBuf> {
    xdg_config_home
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
        .or_else(dirs::config_dir)
}
