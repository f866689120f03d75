//! `/theme` command helpers.

use crate::app::session::PageSession;
use quietpage::prefs::Theme;
use quietpage::ui::render::RenderSink;

/// Handle `/theme`: switch when a selector is given, otherwise list themes.
pub(crate) fn handle_theme_command(
    renderer: &dyn RenderSink,
    session: &mut PageSession,
    selector: Option<&str>,
) -> bool {
    let Some(selector) = selector else {
        renderer.section("themes");
        for option in theme_picker_options(session.presenter.state().theme) {
            renderer.detail(&option);
        }
        renderer.detail("Use /theme <name|index> to switch.");
        eprintln!();
        return false;
    };

    match resolve_theme_selector(selector) {
        Ok(theme) => {
            session.presenter.set_theme(theme);
            true
        }
        Err(msg) => {
            renderer.warn(&msg);
            false
        }
    }
}

/// Build picker labels with active-theme marker.
pub(crate) fn theme_picker_options(active: Theme) -> Vec<String> {
    Theme::ALL
        .iter()
        .enumerate()
        .map(|(idx, theme)| {
            let marker = if *theme == active { "*" } else { " " };
            format!("{}.{} {}", idx + 1, marker, theme.name())
        })
        .collect()
}

/// Resolve `/theme` selector as either index or name.
pub(crate) fn resolve_theme_selector(selector: &str) -> Result<Theme, String> {
    let trimmed = selector.trim();
    if trimmed.is_empty() {
        return Err("Usage: /theme <name|index>".to_string());
    }

    if let Ok(index) = trimmed.parse::<usize>() {
        if index == 0 || index > Theme::ALL.len() {
            return Err(format!(
                "Theme index out of range: {index}. Choose 1-{}.",
                Theme::ALL.len()
            ));
        }
        return Ok(Theme::ALL[index - 1]);
    }

    trimmed
        .parse::<Theme>()
        .map_err(|_| format!("Unknown theme `{trimmed}`. Use /theme to list themes."))
}
