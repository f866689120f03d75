//! Preference → presentation mapping.
//!
//! [`render`] is the only place derived presentation is computed. Everything
//! the page draws (colors, text size, which decorations appear and whether
//! they move) is read from the [`VisualConfiguration`] it returns.

use crate::prefs::{FontScale, Palette, PreferenceState, Theme};
use serde::Serialize;

/// Non-essential graphics on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DecorationKind {
    Sparkles,
    Bubbles,
    Waves,
    Clouds,
}

impl DecorationKind {
    pub const ALL: [DecorationKind; 4] = [
        DecorationKind::Sparkles,
        DecorationKind::Bubbles,
        DecorationKind::Waves,
        DecorationKind::Clouds,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Sparkles => "sparkles",
            Self::Bubbles => "bubbles",
            Self::Waves => "waves",
            Self::Clouds => "clouds",
        }
    }

    /// Whether the separate decorations toggle also gates this kind.
    pub fn gated_by_toggle(self) -> bool {
        matches!(self, Self::Sparkles)
    }
}

/// Derived visibility for one decoration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DecorationState {
    pub kind: DecorationKind,
    pub visible: bool,
    /// Never true unless `visible` is.
    pub animated: bool,
}

/// How much decoration the page carries overall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DecorativeDensity {
    /// Simplified page; nothing decorative.
    None,
    /// Decorations shown, sparkles toggled off.
    Reduced,
    Full,
}

impl DecorativeDensity {
    pub fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Reduced => "reduced",
            Self::Full => "full",
        }
    }
}

/// Render-ready configuration derived from a [`PreferenceState`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisualConfiguration {
    pub theme: Theme,
    pub palette: Palette,
    pub font_scale: FontScale,
    pub motion_enabled: bool,
    pub density: DecorativeDensity,
    pub decorations: Vec<DecorationState>,
}

impl VisualConfiguration {
    pub fn decoration(&self, kind: DecorationKind) -> Option<DecorationState> {
        self.decorations.iter().copied().find(|d| d.kind == kind)
    }

    pub fn visible_decorations(&self) -> impl Iterator<Item = DecorationState> + '_ {
        self.decorations.iter().copied().filter(|d| d.visible)
    }

    /// The four outbound style variables, in a stable order.
    pub fn style_variables(&self) -> [(&'static str, String); 4] {
        [
            ("--bg", self.palette.background.hex()),
            ("--muted", self.palette.muted.hex()),
            ("--accent", self.palette.accent.hex()),
            ("--font-size", format!("{}px", self.font_scale.px())),
        ]
    }
}

/// Derive the full presentation from preferences. Pure and deterministic.
pub fn render(state: &PreferenceState) -> VisualConfiguration {
    let decorations = DecorationKind::ALL
        .into_iter()
        .map(|kind| decoration_state(state, kind))
        .collect();

    let density = if state.simplified {
        DecorativeDensity::None
    } else if state.decorations_enabled {
        DecorativeDensity::Full
    } else {
        DecorativeDensity::Reduced
    };

    VisualConfiguration {
        theme: state.theme,
        palette: state.theme.palette(),
        font_scale: state.font_scale,
        motion_enabled: !state.reduce_motion,
        density,
        decorations,
    }
}

fn decoration_state(state: &PreferenceState, kind: DecorationKind) -> DecorationState {
    let toggle_ok = !kind.gated_by_toggle() || state.decorations_enabled;
    let visible = !state.simplified && toggle_ok;
    DecorationState {
        kind,
        visible,
        animated: visible && !state.reduce_motion,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_states() -> Vec<PreferenceState> {
        let mut out = Vec::new();
        for theme in Theme::ALL {
            for bits in 0..8u8 {
                out.push(PreferenceState {
                    theme,
                    reduce_motion: bits & 1 != 0,
                    simplified: bits & 2 != 0,
                    decorations_enabled: bits & 4 != 0,
                    ..PreferenceState::default()
                });
            }
        }
        out
    }

    #[test]
    fn palette_follows_theme() {
        for state in all_states() {
            assert_eq!(render(&state).palette, state.theme.palette());
        }
    }

    #[test]
    fn simplified_hides_every_decoration() {
        for state in all_states().into_iter().filter(|s| s.simplified) {
            let visual = render(&state);
            assert_eq!(visual.visible_decorations().count(), 0, "{state:?}");
            assert_eq!(visual.density, DecorativeDensity::None);
        }
    }

    #[test]
    fn reduce_motion_stops_all_animation() {
        for state in all_states().into_iter().filter(|s| s.reduce_motion) {
            let visual = render(&state);
            assert!(!visual.motion_enabled);
            assert!(visual.decorations.iter().all(|d| !d.animated), "{state:?}");
        }
    }

    #[test]
    fn sparkles_need_toggle_but_others_do_not() {
        let state = PreferenceState {
            decorations_enabled: false,
            ..PreferenceState::default()
        };
        let visual = render(&state);
        assert_eq!(visual.density, DecorativeDensity::Reduced);
        assert!(!visual.decoration(DecorationKind::Sparkles).unwrap().visible);
        for kind in [
            DecorationKind::Bubbles,
            DecorationKind::Waves,
            DecorationKind::Clouds,
        ] {
            let deco = visual.decoration(kind).unwrap();
            assert!(deco.visible && deco.animated, "{kind:?}");
        }
    }

    #[test]
    fn animated_implies_visible() {
        for state in all_states() {
            for deco in render(&state).decorations {
                assert!(!deco.animated || deco.visible);
            }
        }
    }

    #[test]
    fn default_state_shows_everything_moving() {
        let visual = render(&PreferenceState::default());
        assert_eq!(visual.density, DecorativeDensity::Full);
        assert!(visual.motion_enabled);
        assert!(visual.decorations.iter().all(|d| d.visible && d.animated));
    }

    #[test]
    fn style_variables_carry_palette_and_font() {
        let state = PreferenceState {
            theme: Theme::Contrast,
            font_scale: FontScale::clamped(22),
            ..PreferenceState::default()
        };
        let vars = render(&state).style_variables();
        assert_eq!(vars[0], ("--bg", "#000000".to_string()));
        assert_eq!(vars[1], ("--muted", "#ffffff".to_string()));
        assert_eq!(vars[2], ("--accent", "#ffd400".to_string()));
        assert_eq!(vars[3], ("--font-size", "22px".to_string()));
    }

    #[test]
    fn serializes_to_json_with_hex_colors() {
        let value = serde_json::to_value(render(&PreferenceState::default())).expect("json");
        assert_eq!(value["theme"], "calm");
        assert_eq!(value["palette"]["background"], "#f4f1ea");
        assert_eq!(value["font_scale"], 16);
        assert_eq!(value["density"], "full");
        assert_eq!(value["decorations"][0]["kind"], "sparkles");
    }
}
