//! Configuration loading from TOML files and environment variables.
//!
//! Config is loaded in this order of precedence (highest wins):
//! 1. Environment variables (`QUIETPAGE_COLOR`, `NO_COLOR`, `QUIETPAGE_FORMAT`)
//! 2. TOML file specified via `--config`
//! 3. `./quietpage.toml` in the current directory
//! 4. `$XDG_CONFIG_HOME/quietpage/quietpage.toml`
//!    (or `~/.config/quietpage/quietpage.toml`)
//! 5. Built-in defaults
//!
//! Configuration covers the program only. Page preferences always start from
//! their defaults.

mod defaults;
mod env;
mod init;
mod loader;
mod sources;
mod types;

pub use init::{default_global_config_path, initialize_default_global_config};
pub use loader::{load_config_in, load_config_with_diagnostics, ConfigEnv, ProcessEnv};
pub use sources::config_root_dir;
pub use types::{
    Config, ConfigDiagnostics, DisplayConfig, GlobalConfigInitResult, HostConfig, LoadedConfig,
    OutputFormat, ReducedMotionSource,
};
use types::FileConfig;
