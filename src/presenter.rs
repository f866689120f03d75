//! Preference owner that republishes presentation on every change.
//!
//! The presenter holds the only mutable copy of [`PreferenceState`]. Each
//! public mutation recomputes the [`VisualConfiguration`] once and hands it to
//! the [`PresentationContext`] the presenter was mounted with.

use crate::host::HostEnvironment;
use crate::prefs::{FontScale, PreferenceState, Preset, Theme};
use crate::visual::{render, VisualConfiguration};
use tracing::{debug, info};

/// Consumer of derived presentation (page shell, style sheet, test probe).
pub trait PresentationContext {
    fn apply(&mut self, visual: &VisualConfiguration);
}

/// The page's shared style variables (`--bg`, `--muted`, `--accent`,
/// `--font-size`) as last written by the presenter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleVariables {
    vars: Vec<(&'static str, String)>,
    revision: u64,
}

impl StyleVariables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.vars.iter().map(|(key, value)| (*key, value.as_str()))
    }

    /// Number of times a configuration has been applied.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Render as a CSS `:root` rule.
    pub fn to_css(&self) -> String {
        let mut out = String::from(":root {\n");
        for (key, value) in &self.vars {
            out.push_str(&format!("  {key}: {value};\n"));
        }
        out.push_str("}\n");
        out
    }
}

impl PresentationContext for StyleVariables {
    fn apply(&mut self, visual: &VisualConfiguration) {
        self.vars = visual.style_variables().into_iter().collect();
        self.revision += 1;
    }
}

/// Owns preference state and pushes derived presentation to a context.
#[derive(Debug)]
pub struct Presenter<C> {
    state: PreferenceState,
    host_seed: bool,
    visual: VisualConfiguration,
    context: C,
}

impl<C: PresentationContext> Presenter<C> {
    /// Create the presenter, seeding `reduce_motion` from the host once.
    ///
    /// The host is not retained; later changes to its preference are not seen.
    pub fn mount(host: &dyn HostEnvironment, context: C) -> Self {
        let host_seed = host.prefers_reduced_motion();
        info!(host_reduced_motion = host_seed, "mounting presenter");
        let state = PreferenceState::with_host_seed(host_seed);
        let mut presenter = Self {
            state,
            host_seed,
            visual: render(&state),
            context,
        };
        presenter.publish();
        presenter
    }

    pub fn state(&self) -> &PreferenceState {
        &self.state
    }

    pub fn visual(&self) -> &VisualConfiguration {
        &self.visual
    }

    pub fn context(&self) -> &C {
        &self.context
    }

    pub fn into_context(self) -> C {
        self.context
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.update(|state| state.theme = theme);
    }

    /// Set the root font size, clamping into the supported range.
    pub fn set_font_scale(&mut self, px: i64) {
        if FontScale::is_out_of_range(px) {
            debug!(
                requested = px,
                min = FontScale::MIN,
                max = FontScale::MAX,
                "clamping font scale"
            );
        }
        self.update(|state| state.font_scale = FontScale::clamped(px));
    }

    pub fn set_reduce_motion(&mut self, reduce: bool) {
        self.update(|state| state.reduce_motion = reduce);
    }

    pub fn set_simplified(&mut self, simplified: bool) {
        self.update(|state| state.simplified = simplified);
    }

    pub fn set_decorations_enabled(&mut self, enabled: bool) {
        self.update(|state| state.decorations_enabled = enabled);
    }

    /// Apply all of a preset's flags with a single republish.
    pub fn apply_preset(&mut self, preset: Preset) {
        self.update(|state| state.apply_preset(preset));
    }

    /// Return to startup defaults using the seed captured at mount.
    pub fn reset(&mut self) {
        let seed = self.host_seed;
        self.update(|state| *state = PreferenceState::with_host_seed(seed));
    }

    fn update(&mut self, mutate: impl FnOnce(&mut PreferenceState)) {
        mutate(&mut self.state);
        self.publish();
    }

    fn publish(&mut self) {
        self.visual = render(&self.state);
        debug!(
            theme = %self.visual.theme,
            font_px = self.visual.font_scale.px(),
            motion = self.visual.motion_enabled,
            density = ?self.visual.density,
            "presentation recomputed"
        );
        self.context.apply(&self.visual);
    }
}
