//! User-adjustable display preferences.
//!
//! `PreferenceState` is the whole input of the page: every color, size, and
//! decoration decision is derived from it by [`crate::visual::render`].

mod font;
mod palette;

pub use font::{parse_font_px, FontScale};
pub use palette::{Palette, Rgb, Theme};

use crate::error::PreferenceError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// In-memory record of all user-adjustable display options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PreferenceState {
    pub theme: Theme,
    pub font_scale: FontScale,
    pub reduce_motion: bool,
    pub simplified: bool,
    /// Sparkle toggle; only matters while `simplified` is false.
    pub decorations_enabled: bool,
}

impl PreferenceState {
    /// Startup defaults, with `reduce_motion` taken from the host seed.
    pub fn with_host_seed(host_prefers_reduced_motion: bool) -> Self {
        Self {
            reduce_motion: host_prefers_reduced_motion,
            ..Self::default()
        }
    }

    /// Overwrite the three preset-controlled flags together.
    pub fn apply_preset(&mut self, preset: Preset) {
        let flags = preset.flags();
        self.simplified = flags.simplified;
        self.reduce_motion = flags.reduce_motion;
        self.decorations_enabled = flags.decorations_enabled;
    }
}

impl Default for PreferenceState {
    fn default() -> Self {
        Self {
            theme: Theme::Calm,
            font_scale: FontScale::DEFAULT,
            reduce_motion: false,
            simplified: false,
            decorations_enabled: true,
        }
    }
}

/// Flags a preset writes atomically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresetFlags {
    pub simplified: bool,
    pub reduce_motion: bool,
    pub decorations_enabled: bool,
}

/// One-click preference bundles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    /// Strip the page down: no decorations, no motion.
    Quiet,
    /// Everything on.
    Playful,
}

impl Preset {
    pub const ALL: [Preset; 2] = [Preset::Quiet, Preset::Playful];

    pub fn name(self) -> &'static str {
        match self {
            Self::Quiet => "quiet",
            Self::Playful => "playful",
        }
    }

    pub fn flags(self) -> PresetFlags {
        match self {
            Self::Quiet => PresetFlags {
                simplified: true,
                reduce_motion: true,
                decorations_enabled: false,
            },
            Self::Playful => PresetFlags {
                simplified: false,
                reduce_motion: false,
                decorations_enabled: true,
            },
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = PreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|preset| preset.name() == normalized)
            .ok_or_else(|| PreferenceError::UnknownPreset(s.trim().to_string()))
    }
}

/// Parse a typed boolean toggle (`on`/`off` and common synonyms).
pub fn parse_toggle(input: &str) -> Result<bool, PreferenceError> {
    match input.trim().to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Ok(true),
        "off" | "false" | "no" | "0" => Ok(false),
        _ => Err(PreferenceError::InvalidToggle(input.trim().to_string())),
    }
}
