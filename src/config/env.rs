//! Environment overrides for runtime configuration.
//!
//! `NO_COLOR` follows the usual convention: any non-empty value disables
//! color. `QUIETPAGE_*` variables override file values.

use crate::error::ConfigError;
use crate::prefs::parse_toggle;

use super::loader::ConfigEnv;
use super::{Config, OutputFormat};

pub(super) fn apply_runtime_env_overrides(
    config: &mut Config,
    env: &dyn ConfigEnv,
) -> Result<(), ConfigError> {
    if let Some(raw) = env.var("QUIETPAGE_COLOR") {
        config.display.color = parse_toggle(&raw).map_err(|_| {
            ConfigError::Invalid(format!(
                "invalid QUIETPAGE_COLOR value `{raw}`: expected on or off"
            ))
        })?;
    }
    if env.var("NO_COLOR").is_some_and(|value| !value.is_empty()) {
        config.display.color = false;
    }
    if let Some(raw) = env.var("QUIETPAGE_FORMAT") {
        config.display.format = raw.parse::<OutputFormat>()?;
    }
    Ok(())
}
