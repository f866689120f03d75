//! Slash-command dispatch for the interactive page.

/// `/theme` command helpers.
pub(crate) mod theme;

use crate::app::session::PageSession;
use quietpage::prefs::{parse_font_px, parse_toggle, FontScale, Preset};
use quietpage::tui::settings::on_off;
use quietpage::tui::{matching_slash_commands, SlashCommandAction, SLASH_COMMANDS};
use quietpage::ui::render::RenderSink;

/// What the loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DispatchOutcome {
    /// Preferences changed; draw the page again.
    Redraw,
    /// Output was informational; keep the prompt.
    Quiet,
    Quit,
}

/// Apply one parsed slash command to the session.
pub(crate) fn dispatch_slash_action(
    renderer: &dyn RenderSink,
    session: &mut PageSession,
    action: &SlashCommandAction,
) -> DispatchOutcome {
    match action {
        SlashCommandAction::Quit => DispatchOutcome::Quit,
        SlashCommandAction::Theme(selector) => {
            redraw_if(theme::handle_theme_command(renderer, session, selector.as_deref()))
        }
        SlashCommandAction::Font(arg) => redraw_if(handle_font(renderer, session, arg.as_deref())),
        SlashCommandAction::Motion(arg) => {
            let current = session.presenter.state().reduce_motion;
            match resolve_toggle(arg.as_deref(), current) {
                Ok(value) => {
                    session.presenter.set_reduce_motion(value);
                    DispatchOutcome::Redraw
                }
                Err(msg) => warn_quiet(renderer, &msg),
            }
        }
        SlashCommandAction::Simple(arg) => {
            let current = session.presenter.state().simplified;
            match resolve_toggle(arg.as_deref(), current) {
                Ok(value) => {
                    session.presenter.set_simplified(value);
                    DispatchOutcome::Redraw
                }
                Err(msg) => warn_quiet(renderer, &msg),
            }
        }
        SlashCommandAction::Sparkles(arg) => {
            let current = session.presenter.state().decorations_enabled;
            match resolve_toggle(arg.as_deref(), current) {
                Ok(value) => {
                    session.presenter.set_decorations_enabled(value);
                    if value && session.presenter.state().simplified {
                        renderer.detail("Sparkles stay hidden while the simplified page is on.");
                    }
                    DispatchOutcome::Redraw
                }
                Err(msg) => warn_quiet(renderer, &msg),
            }
        }
        SlashCommandAction::Preset(arg) => {
            let Some(name) = arg.as_deref() else {
                renderer.section("presets");
                for preset in Preset::ALL {
                    let flags = preset.flags();
                    renderer.field(
                        preset.name(),
                        &format!(
                            "simplified {}, reduce motion {}, sparkles {}",
                            on_off(flags.simplified),
                            on_off(flags.reduce_motion),
                            on_off(flags.decorations_enabled)
                        ),
                    );
                }
                eprintln!();
                return DispatchOutcome::Quiet;
            };
            match name.parse::<Preset>() {
                Ok(preset) => {
                    session.presenter.apply_preset(preset);
                    DispatchOutcome::Redraw
                }
                Err(err) => warn_quiet(renderer, &err.to_string()),
            }
        }
        SlashCommandAction::Reset => {
            session.presenter.reset();
            DispatchOutcome::Redraw
        }
        SlashCommandAction::Vars => {
            renderer.section("style variables");
            for (key, value) in session.presenter.context().iter() {
                renderer.field(key, value);
            }
            eprintln!();
            DispatchOutcome::Quiet
        }
        SlashCommandAction::Status => {
            render_status(renderer, session);
            DispatchOutcome::Quiet
        }
        SlashCommandAction::Help => {
            renderer.section("commands");
            for cmd in SLASH_COMMANDS {
                renderer.field(cmd.name, cmd.description);
            }
            eprintln!();
            DispatchOutcome::Quiet
        }
        SlashCommandAction::Unknown(token) => {
            renderer.warn(&format!("Unknown command `{token}`. Type /help for commands."));
            let suggestions = matching_slash_commands(token);
            if !suggestions.is_empty() {
                let names: Vec<_> = suggestions.iter().map(|cmd| cmd.name).collect();
                renderer.detail(&format!("Did you mean: {}", names.join(", ")));
            }
            DispatchOutcome::Quiet
        }
    }
}

fn handle_font(renderer: &dyn RenderSink, session: &mut PageSession, arg: Option<&str>) -> bool {
    let Some(arg) = arg else {
        renderer.warn(&format!(
            "Usage: /font <px> ({}-{}). Current: {}.",
            FontScale::MIN,
            FontScale::MAX,
            session.presenter.state().font_scale
        ));
        return false;
    };
    let requested = match parse_font_px(arg) {
        Ok(px) => px,
        Err(err) => {
            renderer.warn(&err.to_string());
            return false;
        }
    };
    if FontScale::is_out_of_range(requested) {
        renderer.detail(&format!(
            "{requested}px is outside {}-{}; using {}.",
            FontScale::MIN,
            FontScale::MAX,
            FontScale::clamped(requested)
        ));
    }
    session.presenter.set_font_scale(requested);
    true
}

/// Explicit value when given, otherwise the opposite of `current`.
fn resolve_toggle(arg: Option<&str>, current: bool) -> Result<bool, String> {
    match arg {
        None => Ok(!current),
        Some(raw) => parse_toggle(raw).map_err(|err| err.to_string()),
    }
}

fn render_status(renderer: &dyn RenderSink, session: &PageSession) {
    let state = session.presenter.state();
    let visual = session.presenter.visual();
    renderer.section("settings");
    renderer.field("theme", state.theme.name());
    renderer.field("font", &state.font_scale.to_string());
    renderer.field("reduce motion", on_off(state.reduce_motion));
    renderer.field("simplified", on_off(state.simplified));
    renderer.field("sparkles", on_off(state.decorations_enabled));
    renderer.field("motion", on_off(visual.motion_enabled));
    renderer.field("decorations", visual.density.name());
    let source = session
        .source_path
        .as_ref()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "built-in defaults".to_string());
    renderer.field("config", &source);
    eprintln!();
}

fn redraw_if(changed: bool) -> DispatchOutcome {
    if changed {
        DispatchOutcome::Redraw
    } else {
        DispatchOutcome::Quiet
    }
}

fn warn_quiet(renderer: &dyn RenderSink, msg: &str) -> DispatchOutcome {
    renderer.warn(msg);
    DispatchOutcome::Quiet
}
