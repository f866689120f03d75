//! Compile-time build metadata exposed to CLI surfaces.

/// Semver package version from `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// VCS commit hash captured at build time.
pub const GIT_COMMIT: &str = env!("QUIETPAGE_BUILD_GIT_HASH");

/// Build timestamp captured at compile time.
pub const BUILD_TIMESTAMP: &str = env!("QUIETPAGE_BUILD_TIMESTAMP");

/// Help trailer block that surfaces build metadata in `quietpage --help`.
pub const HELP_BUILD_METADATA: &str = concat!(
    "Build metadata:\n  commit: ",
    env!("QUIETPAGE_BUILD_GIT_HASH"),
    "\n  built: ",
    env!("QUIETPAGE_BUILD_TIMESTAMP")
);

/// Render the one-line banner shown when the interactive loop starts.
pub fn startup_metadata_line() -> String {
    format!("v{VERSION} ({GIT_COMMIT}, built {BUILD_TIMESTAMP})")
}

/// Render CLI version block used by `quietpage --version`.
pub fn cli_version_text() -> String {
    format!("quietpage {VERSION}\ncommit: {GIT_COMMIT}\nbuilt: {BUILD_TIMESTAMP}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn startup_metadata_line_contains_all_fields() {
        let text = startup_metadata_line();
        assert!(text.starts_with('v'));
        assert!(text.contains(GIT_COMMIT));
        assert!(text.contains(BUILD_TIMESTAMP));
    }

    #[test]
    fn cli_version_text_includes_expected_lines() {
        let text = cli_version_text();
        assert!(text.starts_with("quietpage "));
        assert!(text.contains("commit:"));
        assert!(text.contains("built:"));
    }
}
