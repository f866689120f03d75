//! Default configuration constants.

/// Embedded default `quietpage.toml` written by `quietpage init`.
pub(super) const DEFAULT_CONFIG_TEMPLATE: &str = include_str!("../templates/quietpage.toml");
/// File name used for local and global config files.
pub(super) const CONFIG_FILE_NAME: &str = "quietpage.toml";
/// Directory under the config root holding the global file.
pub(super) const CONFIG_DIR_NAME: &str = "quietpage";
