//! Stamps the binary with the commit and build time shown by `--version`.
//!
//! Either value can be pinned through the environment. `SOURCE_DATE_EPOCH`
//! is honored for reproducible builds. Missing tooling yields "unknown".

use std::env;
use std::fs;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

const COMMIT_VAR: &str = "QUIETPAGE_BUILD_GIT_HASH";
const BUILT_VAR: &str = "QUIETPAGE_BUILD_TIMESTAMP";

fn main() {
    for var in [COMMIT_VAR, BUILT_VAR, "SOURCE_DATE_EPOCH"] {
        println!("cargo:rerun-if-env-changed={var}");
    }
    watch_git_head();

    let commit = pinned(COMMIT_VAR)
        .or_else(|| stdout_of("git", &["rev-parse", "--short=12", "HEAD"]))
        .unwrap_or_else(|| "unknown".to_string());
    let built = pinned(BUILT_VAR)
        .or_else(source_date_epoch)
        .or_else(|| stdout_of("date", &["-u", "+%Y-%m-%dT%H:%M:%SZ"]))
        .unwrap_or_else(|| format!("unix:{}", unix_secs()));

    println!("cargo:rustc-env={COMMIT_VAR}={commit}");
    println!("cargo:rustc-env={BUILT_VAR}={built}");
}

/// Rebuild when HEAD moves, including commits on the checked-out branch.
fn watch_git_head() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    if let Some(branch_ref) = fs::read_to_string(".git/HEAD")
        .ok()
        .and_then(|head| head.trim().strip_prefix("ref: ").map(str::to_string))
    {
        println!("cargo:rerun-if-changed=.git/{branch_ref}");
    }
}

fn pinned(var: &str) -> Option<String> {
    env::var(var).ok().filter(|value| !value.trim().is_empty())
}

fn source_date_epoch() -> Option<String> {
    pinned("SOURCE_DATE_EPOCH")
        .and_then(|secs| secs.trim().parse::<u64>().ok())
        .map(|secs| format!("unix:{secs}"))
}

fn unix_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or(0)
}

fn stdout_of(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8(output.stdout).ok()?;
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}
