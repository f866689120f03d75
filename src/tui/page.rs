//! Terminal rendition of the sensory-friendly page.
//!
//! Layout is computed from a [`VisualConfiguration`] only: palette colors,
//! content width (from font scale), and which decoration rows appear and
//! whether their glyphs advance with the frame counter.

use crate::tui::settings;
use crate::tui::text::{center, pad_to_width, wrap_for_block};
use crate::visual::{DecorationKind, DecorationState, VisualConfiguration};
use crossterm::style::{Color, Stylize};

/// Page text role, mapped onto the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    /// Body copy and panel keys.
    Muted,
    /// Title, decorations, and panel values.
    Accent,
}

/// Options that affect drawing but not the derived configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageOptions {
    pub color: bool,
    pub show_panel: bool,
    /// Animation tick; only animated decorations read it.
    pub frame: usize,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            color: true,
            show_panel: true,
            frame: 0,
        }
    }
}

/// Render the page into terminal lines (without trailing newlines).
pub fn render_page(visual: &VisualConfiguration, options: PageOptions) -> Vec<String> {
    let width = settings::content_columns(visual.font_scale.px());
    let painter = Painter {
        visual,
        color: options.color,
        width,
    };

    let mut lines = Vec::new();
    lines.push(painter.blank());
    for deco in top_decorations(visual) {
        lines.push(painter.line(&decoration_row(deco, width, options), Tone::Accent));
    }
    lines.push(painter.line(&center(settings::PAGE_TITLE, width), Tone::Accent));
    lines.push(painter.blank());
    for paragraph in settings::PAGE_BODY {
        for row in wrap_for_block(paragraph, width) {
            lines.push(painter.line(&row, Tone::Muted));
        }
        lines.push(painter.blank());
    }
    for deco in bottom_decorations(visual) {
        lines.push(painter.line(&decoration_row(deco, width, options), Tone::Accent));
    }
    if options.show_panel {
        push_panel(&painter, &mut lines);
    }
    lines.push(painter.blank());
    lines
}

fn top_decorations(visual: &VisualConfiguration) -> impl Iterator<Item = DecorationState> + '_ {
    visual
        .visible_decorations()
        .filter(|d| matches!(d.kind, DecorationKind::Clouds | DecorationKind::Sparkles))
}

fn bottom_decorations(visual: &VisualConfiguration) -> impl Iterator<Item = DecorationState> + '_ {
    visual
        .visible_decorations()
        .filter(|d| matches!(d.kind, DecorationKind::Bubbles | DecorationKind::Waves))
}

/// One row of a decoration's glyphs. Static rows ignore `options.frame`.
fn decoration_row(deco: DecorationState, width: usize, options: PageOptions) -> String {
    let frames = settings::decoration_frames(deco.kind, options.color);
    let tick = if deco.animated {
        options.frame % frames.len()
    } else {
        0
    };
    let slots = width / settings::DECORATION_SPACING;
    let mut row = String::new();
    for slot in 0..slots {
        let glyph = frames[(slot + tick) % frames.len()];
        row.push_str(&pad_to_width(glyph, settings::DECORATION_SPACING));
    }
    row
}

fn push_panel(painter: &Painter<'_>, lines: &mut Vec<String>) {
    let visual = painter.visual;
    lines.push(painter.line(
        &format!("{} {}", settings::GLYPH_SECTION_BULLET, settings::PANEL_TITLE),
        Tone::Accent,
    ));
    let sparkles = visual
        .decoration(DecorationKind::Sparkles)
        .is_some_and(|d| d.visible);
    let rows = [
        ("theme", visual.theme.to_string()),
        ("font", visual.font_scale.to_string()),
        ("motion", settings::on_off(visual.motion_enabled).to_string()),
        ("decorations", visual.density.name().to_string()),
        ("sparkles", settings::on_off(sparkles).to_string()),
        ("shown", shown_decorations(visual)),
    ];
    for (key, value) in rows {
        lines.push(painter.field(key, &value));
    }
}

fn shown_decorations(visual: &VisualConfiguration) -> String {
    let names: Vec<_> = visual.visible_decorations().map(|d| d.kind.name()).collect();
    if names.is_empty() {
        "none".to_string()
    } else {
        names.join(", ")
    }
}

struct Painter<'a> {
    visual: &'a VisualConfiguration,
    color: bool,
    width: usize,
}

impl Painter<'_> {
    fn margin(&self) -> String {
        " ".repeat(settings::PAGE_MARGIN)
    }

    fn fg(&self, tone: Tone) -> Color {
        match tone {
            Tone::Muted => self.visual.palette.muted.to_color(),
            Tone::Accent => self.visual.palette.accent.to_color(),
        }
    }

    fn bg(&self) -> Color {
        self.visual.palette.background.to_color()
    }

    fn blank(&self) -> String {
        self.line("", Tone::Muted)
    }

    fn line(&self, content: &str, tone: Tone) -> String {
        let body = format!(
            "{m}{}{m}",
            pad_to_width(content, self.width),
            m = self.margin()
        );
        if self.color {
            format!("{}", body.with(self.fg(tone)).on(self.bg()))
        } else {
            body.trim_end().to_string()
        }
    }

    fn field(&self, key: &str, value: &str) -> String {
        let label = format!("{}{key}: ", settings::INDENT_1);
        if !self.color {
            return self.line(&format!("{label}{value}"), Tone::Muted);
        }
        let value_width = self.width.saturating_sub(label.chars().count());
        format!(
            "{}{}{}{}",
            self.margin().on(self.bg()),
            label.with(self.fg(Tone::Muted)).on(self.bg()),
            pad_to_width(value, value_width)
                .with(self.fg(Tone::Accent))
                .on(self.bg())
                .bold(),
            self.margin().on(self.bg()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::{FontScale, PreferenceState, Theme};
    use crate::visual::render;

    fn plain(frame: usize) -> PageOptions {
        PageOptions {
            color: false,
            show_panel: true,
            frame,
        }
    }

    fn page_for(state: PreferenceState, options: PageOptions) -> Vec<String> {
        render_page(&render(&state), options)
    }

    #[test]
    fn default_page_has_title_body_and_all_decorations() {
        let text = page_for(PreferenceState::default(), plain(0)).join("\n");
        assert!(text.contains(settings::PAGE_TITLE));
        assert!(text.contains("Take your time here."));
        assert!(text.contains('*'), "sparkles");
        assert!(text.contains('@'), "clouds");
        assert!(text.contains('O'), "bubbles");
        assert!(text.contains('~'), "waves");
    }

    #[test]
    fn simplified_page_has_no_decoration_rows() {
        let state = PreferenceState {
            simplified: true,
            ..PreferenceState::default()
        };
        let full = page_for(PreferenceState::default(), plain(0));
        let simple = page_for(state, plain(0));
        assert_eq!(full.len() - simple.len(), DecorationKind::ALL.len());
        assert!(simple.join("\n").contains("decorations: none"));
    }

    #[test]
    fn animated_rows_advance_with_frame_static_rows_do_not() {
        let moving = PreferenceState::default();
        assert_ne!(page_for(moving, plain(0)), page_for(moving, plain(1)));

        let still = PreferenceState {
            reduce_motion: true,
            ..PreferenceState::default()
        };
        assert_eq!(page_for(still, plain(0)), page_for(still, plain(7)));
    }

    #[test]
    fn frame_counter_at_its_limit_still_draws() {
        let lines = page_for(PreferenceState::default(), plain(usize::MAX));
        assert!(lines.join("\n").contains(settings::PAGE_TITLE));
        let still = PreferenceState {
            reduce_motion: true,
            ..PreferenceState::default()
        };
        assert_eq!(page_for(still, plain(usize::MAX)), page_for(still, plain(0)));
    }

    #[test]
    fn panel_lists_shown_decorations_by_name() {
        let text = page_for(PreferenceState::default(), plain(0)).join("\n");
        assert!(text.contains("shown: sparkles, bubbles, waves, clouds"));
        let state = PreferenceState {
            simplified: true,
            ..PreferenceState::default()
        };
        assert!(page_for(state, plain(0)).join("\n").contains("shown: none"));
    }

    #[test]
    fn larger_font_narrows_content() {
        let small = page_for(PreferenceState::default(), plain(0));
        let large = page_for(
            PreferenceState {
                font_scale: FontScale::clamped(28),
                ..PreferenceState::default()
            },
            plain(0),
        );
        let widest = |lines: &[String]| lines.iter().map(|l| l.chars().count()).max().unwrap();
        assert!(widest(&large) < widest(&small));
        assert!(large.len() > small.len(), "body wraps onto more rows");
    }

    #[test]
    fn panel_reports_current_settings_and_can_be_hidden() {
        let state = PreferenceState {
            theme: Theme::Ocean,
            font_scale: FontScale::clamped(20),
            decorations_enabled: false,
            ..PreferenceState::default()
        };
        let text = page_for(state, plain(0)).join("\n");
        assert!(text.contains("theme: ocean"));
        assert!(text.contains("font: 20px"));
        assert!(text.contains("motion: on"));
        assert!(text.contains("decorations: reduced"));
        assert!(text.contains("sparkles: off"));

        let hidden = page_for(
            state,
            PageOptions {
                show_panel: false,
                ..plain(0)
            },
        )
        .join("\n");
        assert!(!hidden.contains("theme: ocean"));
    }

    #[test]
    fn colored_output_uses_palette_escape_codes() {
        let state = PreferenceState {
            theme: Theme::Contrast,
            ..PreferenceState::default()
        };
        let text = page_for(state, PageOptions::default()).join("\n");
        // Background black and accent #ffd400 as truecolor SGR parameters.
        assert!(text.contains("48;2;0;0;0"));
        assert!(text.contains("38;2;255;212;0"));
    }
}
