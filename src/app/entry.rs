//! Application entry orchestration for the quietpage CLI.

use crate::app::commands::theme::resolve_theme_selector;
use crate::app::init_flow::run_init_flow;
use crate::app::oneshot::{apply_page_args, format_vars, run_render};
use crate::app::repl_loop::run_repl;
use crate::app::session::PageSession;
use crate::app::startup::render_startup_banner;
use crate::cli::{self, PageArgs};
use quietpage::config::{load_config_with_diagnostics, LoadedConfig, OutputFormat, ReducedMotionSource};
use quietpage::host::host_for_source;
use quietpage::presenter::{Presenter, StyleVariables};
use quietpage::ui::render::Renderer;
use std::io::Write;
use tracing::info;

/// Run the CLI and return the process exit code.
pub(crate) fn run(args: cli::Args) -> i32 {
    // 1) handle init early, 2) load config and apply CLI overrides,
    // 3) mount the presenter, 4) dispatch to one-shot or interactive mode.
    let bootstrap_renderer = Renderer::new(bootstrap_color(
        args.no_color,
        std::env::var("NO_COLOR").ok().as_deref(),
    ));
    if let Some(cli::Command::Init { force }) = args.command.as_ref() {
        if let Err(msg) = run_init_flow(&bootstrap_renderer, *force) {
            bootstrap_renderer.error(&msg);
            return 1;
        }
        return 0;
    }

    let loaded = match load_config_state(&args) {
        Ok(loaded) => loaded,
        Err(msg) => {
            bootstrap_renderer.error(&msg);
            return 1;
        }
    };
    let renderer = Renderer::new(loaded.config.display.color);
    for warning in &loaded.diagnostics.warnings {
        renderer.warn(warning);
    }

    let host = host_for_source(loaded.config.host.reduced_motion);
    let mut presenter = Presenter::mount(host.as_ref(), StyleVariables::new());

    let result = match args.command {
        Some(cli::Command::Render { page }) => {
            prepare_page(&mut presenter, &page).map(|()| {
                run_render(&renderer, &presenter, loaded.config.display.show_panel, page.frame)
            })
        }
        Some(cli::Command::Vars { page, format }) => {
            run_vars(&mut presenter, &page, format.as_deref(), loaded.config.display.format)
        }
        Some(cli::Command::Init { .. }) => Ok(()),
        Some(cli::Command::Repl) | None => {
            render_startup_banner(renderer.color());
            let mut session = PageSession::new(
                presenter,
                loaded.config.display.show_panel,
                loaded.source_path,
            );
            let stdin = std::io::stdin();
            run_repl(&renderer, &mut session, stdin.lock())
                .map_err(|e| format!("failed to read input: {e}"))
        }
    };

    match result {
        Ok(()) => 0,
        Err(msg) => {
            renderer.error(&msg);
            1
        }
    }
}

/// Color for output produced before config is loaded (init, load errors).
fn bootstrap_color(no_color_flag: bool, no_color_env: Option<&str>) -> bool {
    !no_color_flag && no_color_env.map_or(true, str::is_empty)
}

/// Load config and apply CLI overrides on top of file and env values.
fn load_config_state(args: &cli::Args) -> Result<LoadedConfig, String> {
    let mut loaded = load_config_with_diagnostics(args.config.as_deref())
        .map_err(|e| format!("failed to load config: {e}"))?;
    if args.no_color {
        loaded.config.display.color = false;
    }
    if let Some(source) = args.reduced_motion.as_deref() {
        loaded.config.host.reduced_motion = source
            .parse::<ReducedMotionSource>()
            .map_err(|e| e.to_string())?;
    }
    match loaded.source_path.as_ref() {
        Some(path) => info!(path = %path.display(), "loaded config"),
        None => info!("using built-in config defaults"),
    }
    Ok(loaded)
}

/// Apply one-shot page arguments, accepting theme indexes like `/theme`.
fn prepare_page(presenter: &mut Presenter<StyleVariables>, page: &PageArgs) -> Result<(), String> {
    let mut page = page.clone();
    if let Some(selector) = page.theme.take() {
        let theme = resolve_theme_selector(&selector)?;
        page.theme = Some(theme.name().to_string());
    }
    apply_page_args(presenter, &page).map_err(|e| e.to_string())
}

fn run_vars(
    presenter: &mut Presenter<StyleVariables>,
    page: &PageArgs,
    format: Option<&str>,
    configured: OutputFormat,
) -> Result<(), String> {
    prepare_page(presenter, page)?;
    let format = match format {
        Some(raw) => raw.parse::<OutputFormat>().map_err(|e| e.to_string())?,
        None => configured,
    };
    let text = format_vars(presenter, format).map_err(|e| e.to_string())?;
    let mut out = std::io::stdout().lock();
    out.write_all(text.as_bytes())
        .and_then(|()| out.flush())
        .map_err(|e| format!("failed to write output: {e}"))
}

#[cfg(test)]
mod tests {
    use super::bootstrap_color;

    #[test]
    fn bootstrap_color_honors_flag_and_no_color_env() {
        assert!(bootstrap_color(false, None));
        assert!(!bootstrap_color(true, None));
        assert!(!bootstrap_color(false, Some("1")));
        assert!(bootstrap_color(false, Some("")));
    }
}
