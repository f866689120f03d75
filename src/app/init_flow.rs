//! `quietpage init` orchestration.

use quietpage::config::{initialize_default_global_config, GlobalConfigInitResult};
use quietpage::ui::render::RenderSink;

/// Write the default global config, backing up an existing file when forced.
pub(crate) fn run_init_flow(renderer: &dyn RenderSink, force: bool) -> Result<(), String> {
    let result = initialize_default_global_config(force)
        .map_err(|e| format!("failed to initialize ~/.config/quietpage: {e}"))?;
    apply_init_result(renderer, result);
    Ok(())
}

fn apply_init_result(renderer: &dyn RenderSink, result: GlobalConfigInitResult) {
    match result {
        GlobalConfigInitResult::Created { path } => {
            renderer.section("initialized quietpage config");
            renderer.field("path", &path.display().to_string());
        }
        GlobalConfigInitResult::Overwritten { path, backup_path } => {
            renderer.section("reinitialized quietpage config");
            renderer.field("path", &path.display().to_string());
            renderer.field("backup", &backup_path.display().to_string());
        }
        GlobalConfigInitResult::AlreadyInitialized { path } => {
            renderer.section("quietpage config already initialized");
            renderer.field("path", &path.display().to_string());
            renderer.detail("Use `quietpage init --force` to overwrite (a backup is kept).");
        }
    }
    eprintln!();
}
