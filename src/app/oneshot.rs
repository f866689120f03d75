//! Non-interactive `render` and `vars` commands.

use crate::cli::PageArgs;
use quietpage::config::OutputFormat;
use quietpage::error::AppError;
use quietpage::prefs::{parse_font_px, parse_toggle, Preset, Theme};
use quietpage::presenter::{Presenter, StyleVariables};
use quietpage::tui::{render_page, PageOptions};
use quietpage::ui::render::RenderSink;

/// Apply command-line preference changes: preset first, then the rest.
pub(crate) fn apply_page_args(
    presenter: &mut Presenter<StyleVariables>,
    page: &PageArgs,
) -> Result<(), AppError> {
    if let Some(preset) = page.preset.as_deref() {
        presenter.apply_preset(preset.parse::<Preset>()?);
    }
    if let Some(theme) = page.theme.as_deref() {
        presenter.set_theme(theme.parse::<Theme>()?);
    }
    if let Some(font) = page.font.as_deref() {
        presenter.set_font_scale(parse_font_px(font)?);
    }
    if let Some(value) = page.reduce_motion.as_deref() {
        presenter.set_reduce_motion(parse_toggle(value)?);
    }
    if let Some(value) = page.simplified.as_deref() {
        presenter.set_simplified(parse_toggle(value)?);
    }
    if let Some(value) = page.sparkles.as_deref() {
        presenter.set_decorations_enabled(parse_toggle(value)?);
    }
    Ok(())
}

/// Draw the page once.
pub(crate) fn run_render(
    renderer: &dyn RenderSink,
    presenter: &Presenter<StyleVariables>,
    show_panel: bool,
    frame: usize,
) {
    let lines = render_page(
        presenter.visual(),
        PageOptions {
            color: renderer.color(),
            show_panel,
            frame,
        },
    );
    renderer.page(&lines);
}

/// Format the current presentation for `quietpage vars`.
pub(crate) fn format_vars(
    presenter: &Presenter<StyleVariables>,
    format: OutputFormat,
) -> Result<String, AppError> {
    match format {
        OutputFormat::Css => Ok(presenter.context().to_css()),
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(presenter.visual())?;
            out.push('\n');
            Ok(out)
        }
    }
}
