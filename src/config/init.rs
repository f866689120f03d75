//! `quietpage init`: write the commented template to the global path.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::ConfigError;

use super::defaults::{CONFIG_FILE_NAME, DEFAULT_CONFIG_TEMPLATE};
use super::sources::{config_root_dir, global_config_path};
use super::GlobalConfigInitResult;

/// `~/.config/quietpage/quietpage.toml`, honoring `XDG_CONFIG_HOME`.
pub fn default_global_config_path() -> Option<PathBuf> {
    config_root_dir().map(global_config_path)
}

/// Write the template to the global path; see [`write_template`].
pub fn initialize_default_global_config(
    force: bool,
) -> Result<GlobalConfigInitResult, ConfigError> {
    let path = default_global_config_path().ok_or_else(|| {
        ConfigError::Invalid("no home or XDG_CONFIG_HOME directory to hold quietpage.toml".into())
    })?;
    write_template(&path, force)
}

/// Write the template at `path`.
///
/// An existing file is left alone unless `force` is set, in which case it is
/// copied to a `.bak-<unix secs>` file beside it first.
pub(super) fn write_template(
    path: &Path,
    force: bool,
) -> Result<GlobalConfigInitResult, ConfigError> {
    let path = path.to_path_buf();
    let backup_path = match (path.exists(), force) {
        (true, false) => return Ok(GlobalConfigInitResult::AlreadyInitialized { path }),
        (true, true) => {
            let backup = free_backup_path(&path, unix_secs());
            fs::copy(&path, &backup)?;
            Some(backup)
        }
        (false, _) => {
            if let Some(dir) = path.parent() {
                fs::create_dir_all(dir)?;
            }
            None
        }
    };

    fs::write(&path, DEFAULT_CONFIG_TEMPLATE)?;
    Ok(match backup_path {
        Some(backup_path) => GlobalConfigInitResult::Overwritten { path, backup_path },
        None => GlobalConfigInitResult::Created { path },
    })
}

/// First unused name of the form `quietpage.toml.bak-<secs>[.N]`.
pub(super) fn free_backup_path(path: &Path, secs: u64) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| CONFIG_FILE_NAME.to_string());
    let base = format!("{file_name}.bak-{secs}");

    let mut candidate = path.with_file_name(&base);
    let mut n = 1u32;
    while candidate.exists() {
        candidate = path.with_file_name(format!("{base}.{n}"));
        n += 1;
    }
    candidate
}

fn unix_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or(0)
}
