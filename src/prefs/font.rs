//! Root font size, always inside the supported pixel range.

use crate::error::PreferenceError;
use serde::Serialize;
use std::fmt;
use std::num::IntErrorKind;
use std::str::FromStr;

/// Root text size in pixels, guaranteed to lie in `[MIN, MAX]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct FontScale(u8);

impl FontScale {
    pub const MIN: u8 = 14;
    pub const MAX: u8 = 28;
    pub const DEFAULT: FontScale = FontScale(16);

    /// Clamp any requested size into range. Never fails.
    pub fn clamped(px: i64) -> Self {
        let bounded = px.clamp(i64::from(Self::MIN), i64::from(Self::MAX));
        // In range after the clamp, so the narrowing cast is exact.
        Self(bounded as u8)
    }

    /// True when `px` would be changed by [`FontScale::clamped`].
    pub fn is_out_of_range(px: i64) -> bool {
        px < i64::from(Self::MIN) || px > i64::from(Self::MAX)
    }

    pub fn px(self) -> u8 {
        self.0
    }
}

impl Default for FontScale {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for FontScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.0)
    }
}

/// Parse typed pixel text (optional `px` suffix) without clamping.
///
/// Whole numbers beyond `i64` saturate, so they still clamp to a bound.
pub fn parse_font_px(input: &str) -> Result<i64, PreferenceError> {
    let trimmed = input.trim();
    let digits = trimmed.strip_suffix("px").unwrap_or(trimmed).trim_end();
    digits.parse::<i64>().or_else(|err| match err.kind() {
        IntErrorKind::PosOverflow => Ok(i64::MAX),
        IntErrorKind::NegOverflow => Ok(i64::MIN),
        _ => Err(PreferenceError::InvalidFontScale(trimmed.to_string())),
    })
}

/// Parses an integer pixel count and clamps it.
impl FromStr for FontScale {
    type Err = PreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_font_px(s).map(Self::clamped)
    }
}
