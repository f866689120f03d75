//! Centralized, hardcoded UI settings for the terminal page.
//!
//! This is the single place to tweak prompt strings, glyphs, page copy, and
//! layout widths.

use crate::visual::DecorationKind;

// ---------------------------------------------------------------------------
// Layout / indentation
// ---------------------------------------------------------------------------

pub const INDENT_1: &str = "  ";
/// Blank columns on each side of page content.
pub const PAGE_MARGIN: usize = 2;
/// Content columns at the default 16px font size.
pub const BASE_COLUMNS: usize = 64;
/// Font size `BASE_COLUMNS` is calibrated for.
pub const BASE_FONT_PX: usize = 16;
/// Decoration glyphs are spaced this many columns apart.
pub const DECORATION_SPACING: usize = 3;

// ---------------------------------------------------------------------------
// Prompt strings / labels
// ---------------------------------------------------------------------------

pub const PROMPT_PRIMARY: &str = "> ";
pub const PROMPT_SYMBOL: &str = ">";
pub const LABEL_WARNING: &str = "warning:";
pub const LABEL_ERROR: &str = "error:";
pub const GLYPH_SECTION_BULLET: &str = "•";

// ---------------------------------------------------------------------------
// Page copy
// ---------------------------------------------------------------------------

pub const PAGE_TITLE: &str = "A quiet corner";
pub const PAGE_BODY: [&str; 2] = [
    "Take your time here. Nothing on this page will change unless you ask it to.",
    "Use the settings below to pick colors, make the text larger, calm the motion, \
     or strip the page back to just the words.",
];
pub const PANEL_TITLE: &str = "settings";

// ---------------------------------------------------------------------------
// Decorations
// ---------------------------------------------------------------------------

const SPARKLE_FRAMES: [&str; 3] = ["✦", "✧", "·"];
const BUBBLE_FRAMES: [&str; 3] = ["○", "◦", "°"];
const WAVE_FRAMES: [&str; 3] = ["~", "≈", "∽"];
const CLOUD_FRAMES: [&str; 2] = ["☁", " "];

/// Plain-ASCII frames for terminals without color (and usually without
/// reliable unicode either).
const SPARKLE_FRAMES_PLAIN: [&str; 3] = ["*", "+", "."];
const BUBBLE_FRAMES_PLAIN: [&str; 3] = ["o", "O", "."];
const WAVE_FRAMES_PLAIN: [&str; 2] = ["~", "-"];
const CLOUD_FRAMES_PLAIN: [&str; 2] = ["@", " "];

/// Glyph cycle for one decoration kind. Index 0 is the resting glyph.
pub fn decoration_frames(kind: DecorationKind, color: bool) -> &'static [&'static str] {
    match (kind, color) {
        (DecorationKind::Sparkles, true) => &SPARKLE_FRAMES,
        (DecorationKind::Bubbles, true) => &BUBBLE_FRAMES,
        (DecorationKind::Waves, true) => &WAVE_FRAMES,
        (DecorationKind::Clouds, true) => &CLOUD_FRAMES,
        (DecorationKind::Sparkles, false) => &SPARKLE_FRAMES_PLAIN,
        (DecorationKind::Bubbles, false) => &BUBBLE_FRAMES_PLAIN,
        (DecorationKind::Waves, false) => &WAVE_FRAMES_PLAIN,
        (DecorationKind::Clouds, false) => &CLOUD_FRAMES_PLAIN,
    }
}

/// Content width for a root font size: larger text, fewer columns.
pub fn content_columns(font_px: u8) -> usize {
    (BASE_COLUMNS * BASE_FONT_PX) / usize::from(font_px.max(1))
}

pub fn on_off(value: bool) -> &'static str {
    if value {
        "on"
    } else {
        "off"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_columns_shrink_as_font_grows() {
        assert_eq!(content_columns(16), BASE_COLUMNS);
        assert!(content_columns(14) > content_columns(16));
        assert!(content_columns(28) < content_columns(16));
        assert_eq!(content_columns(28), 36);
    }

    #[test]
    fn every_decoration_has_frames() {
        for kind in DecorationKind::ALL {
            assert!(!decoration_frames(kind, true).is_empty());
            assert!(!decoration_frames(kind, false).is_empty());
        }
    }
}
