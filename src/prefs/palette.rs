//! The three fixed page themes and their palettes.

use crate::error::PreferenceError;
use crossterm::style::Color;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// 24-bit color used by palettes and exported as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Lowercase CSS hex notation.
    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Terminal color for crossterm styling.
    pub fn to_color(self) -> Color {
        Color::Rgb {
            r: self.r,
            g: self.g,
            b: self.b,
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.hex())
    }
}

/// Background, muted foreground, and accent for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub background: Rgb,
    pub muted: Rgb,
    pub accent: Rgb,
}

const CALM: Palette = Palette {
    background: Rgb::new(0xf4, 0xf1, 0xea),
    muted: Rgb::new(0x5f, 0x6b, 0x73),
    accent: Rgb::new(0x8f, 0xb8, 0xa8),
};

const OCEAN: Palette = Palette {
    background: Rgb::new(0xe6, 0xf2, 0xf5),
    muted: Rgb::new(0x35, 0x56, 0x6a),
    accent: Rgb::new(0x3f, 0x8f, 0xa8),
};

const CONTRAST: Palette = Palette {
    background: Rgb::new(0x00, 0x00, 0x00),
    muted: Rgb::new(0xff, 0xff, 0xff),
    accent: Rgb::new(0xff, 0xd4, 0x00),
};

/// Page theme. Each variant owns exactly one fixed palette.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Calm,
    Ocean,
    Contrast,
}

impl Theme {
    /// Stable display order used by pickers and index selectors.
    pub const ALL: [Theme; 3] = [Theme::Calm, Theme::Ocean, Theme::Contrast];

    pub fn name(self) -> &'static str {
        match self {
            Self::Calm => "calm",
            Self::Ocean => "ocean",
            Self::Contrast => "contrast",
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Self::Calm => CALM,
            Self::Ocean => OCEAN,
            Self::Contrast => CONTRAST,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Theme {
    type Err = PreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|theme| theme.name() == normalized)
            .ok_or_else(|| PreferenceError::UnknownTheme(s.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_table_is_fixed() {
        assert_eq!(Theme::Calm.palette().background.hex(), "#f4f1ea");
        assert_eq!(Theme::Calm.palette().muted.hex(), "#5f6b73");
        assert_eq!(Theme::Calm.palette().accent.hex(), "#8fb8a8");
        assert_eq!(Theme::Ocean.palette().background.hex(), "#e6f2f5");
        assert_eq!(Theme::Ocean.palette().muted.hex(), "#35566a");
        assert_eq!(Theme::Ocean.palette().accent.hex(), "#3f8fa8");
        assert_eq!(Theme::Contrast.palette().background.hex(), "#000000");
        assert_eq!(Theme::Contrast.palette().muted.hex(), "#ffffff");
        assert_eq!(Theme::Contrast.palette().accent.hex(), "#ffd400");
    }

    #[test]
    fn palettes_are_distinct_per_theme() {
        assert_ne!(Theme::Calm.palette(), Theme::Ocean.palette());
        assert_ne!(Theme::Ocean.palette(), Theme::Contrast.palette());
        assert_ne!(Theme::Calm.palette(), Theme::Contrast.palette());
    }

    #[test]
    fn theme_parses_case_insensitively() {
        assert_eq!(" Ocean ".parse::<Theme>(), Ok(Theme::Ocean));
        assert_eq!("CONTRAST".parse::<Theme>(), Ok(Theme::Contrast));
        assert_eq!(
            "neon".parse::<Theme>(),
            Err(PreferenceError::UnknownTheme("neon".into()))
        );
    }

    #[test]
    fn rgb_serializes_as_hex_string() {
        let json = serde_json::to_string(&Rgb::new(1, 2, 255)).expect("serialize");
        assert_eq!(json, "\"#0102ff\"");
        assert_eq!(
            Rgb::new(1, 2, 3).to_color(),
            Color::Rgb { r: 1, g: 2, b: 3 }
        );
    }
}
