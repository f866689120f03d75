//! Host environment signals read at startup.
//!
//! The only signal is the reduced-motion accessibility preference. It is read
//! once when the presenter mounts; later host changes are not observed.

use crate::config::ReducedMotionSource;
use crate::prefs::parse_toggle;
use tracing::warn;

/// Env var carrying an explicit reduced-motion preference (`on`/`off`).
pub const REDUCED_MOTION_ENV: &str = "QUIETPAGE_REDUCED_MOTION";
/// Presence-only convention honored by several terminal tools.
pub const NO_MOTION_ENV: &str = "NO_MOTION";

/// Source of the host reduced-motion preference.
pub trait HostEnvironment {
    fn prefers_reduced_motion(&self) -> bool;
}

/// Host with a hardcoded answer; used for `--reduced-motion on|off`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedHost(pub bool);

impl HostEnvironment for FixedHost {
    fn prefers_reduced_motion(&self) -> bool {
        self.0
    }
}

/// Host backed by process environment variables.
pub struct EnvHost<F> {
    env_lookup: F,
}

impl EnvHost<fn(&str) -> Option<String>> {
    /// Read from the real process environment.
    pub fn system() -> Self {
        fn lookup(name: &str) -> Option<String> {
            std::env::var(name).ok()
        }
        Self { env_lookup: lookup }
    }
}

impl<F> EnvHost<F>
where
    F: Fn(&str) -> Option<String>,
{
    pub fn with_lookup(env_lookup: F) -> Self {
        Self { env_lookup }
    }
}

impl<F> HostEnvironment for EnvHost<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn prefers_reduced_motion(&self) -> bool {
        if let Some(raw) = (self.env_lookup)(REDUCED_MOTION_ENV) {
            match parse_toggle(&raw) {
                Ok(value) => return value,
                Err(err) => warn!(var = REDUCED_MOTION_ENV, %err, "ignoring env var"),
            }
        }
        (self.env_lookup)(NO_MOTION_ENV).is_some_and(|v| !v.is_empty())
    }
}

/// Pick the host signal source for a configured mode.
pub fn host_for_source(source: ReducedMotionSource) -> Box<dyn HostEnvironment> {
    match source {
        ReducedMotionSource::Auto => Box::new(EnvHost::system()),
        ReducedMotionSource::On => Box::new(FixedHost(true)),
        ReducedMotionSource::Off => Box::new(FixedHost(false)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_host(pairs: &[(&str, &str)]) -> EnvHost<impl Fn(&str) -> Option<String>> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        EnvHost::with_lookup(move |name| map.get(name).cloned())
    }

    #[test]
    fn explicit_env_value_wins() {
        assert!(env_host(&[(REDUCED_MOTION_ENV, "on")]).prefers_reduced_motion());
        assert!(!env_host(&[(REDUCED_MOTION_ENV, "off"), (NO_MOTION_ENV, "1")])
            .prefers_reduced_motion());
    }

    #[test]
    fn no_motion_presence_is_a_fallback() {
        assert!(env_host(&[(NO_MOTION_ENV, "1")]).prefers_reduced_motion());
        assert!(!env_host(&[(NO_MOTION_ENV, "")]).prefers_reduced_motion());
    }

    #[test]
    fn invalid_explicit_value_falls_through() {
        assert!(!env_host(&[(REDUCED_MOTION_ENV, "sometimes")]).prefers_reduced_motion());
        assert!(env_host(&[(REDUCED_MOTION_ENV, "sometimes"), (NO_MOTION_ENV, "x")])
            .prefers_reduced_motion());
    }

    #[test]
    fn empty_environment_means_motion_allowed() {
        assert!(!env_host(&[]).prefers_reduced_motion());
    }

    #[test]
    fn fixed_sources_ignore_environment() {
        assert!(host_for_source(ReducedMotionSource::On).prefers_reduced_motion());
        assert!(!host_for_source(ReducedMotionSource::Off).prefers_reduced_motion());
    }
}
