//! Config loading: find a file, parse it, then overlay the environment.

use std::io;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

use super::env::apply_runtime_env_overrides;
use super::sources::{config_root_dir, locate_config};
use super::{ConfigDiagnostics, FileConfig, LoadedConfig};

/// Everything the loader reads from outside the process.
pub trait ConfigEnv {
    /// Environment variable lookup.
    fn var(&self, name: &str) -> Option<String>;
    fn read_file(&self, path: &Path) -> io::Result<String>;
    /// Directory that holds `quietpage/quietpage.toml`.
    fn config_root(&self) -> Option<PathBuf>;
}

/// The running process: real variables, real files.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl ConfigEnv for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }

    fn read_file(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn config_root(&self) -> Option<PathBuf> {
        config_root_dir()
    }
}

/// Load configuration for this process.
///
/// `path_override` is the `--config` path; when given it must exist.
pub fn load_config_with_diagnostics(
    path_override: Option<&str>,
) -> Result<LoadedConfig, ConfigError> {
    load_config_in(&ProcessEnv, path_override)
}

/// Load configuration against an arbitrary environment.
pub fn load_config_in(
    env: &dyn ConfigEnv,
    path_override: Option<&str>,
) -> Result<LoadedConfig, ConfigError> {
    let (text, source) = locate_config(env, path_override)?;

    let mut diagnostics = ConfigDiagnostics::default();
    let mut config = toml::from_str::<FileConfig>(&text)?.into_config(&mut diagnostics);
    apply_runtime_env_overrides(&mut config, env)?;

    Ok(LoadedConfig {
        config,
        diagnostics,
        source_path: source.path(),
    })
}
