//! Color tokens used by select choices, ratings, and number show-as options.
//!
//! A token is a family plus a shade, written as one camelCase word
//! (`blue`, `blueLight2`, `redDark1`). Tokens resolve to a concrete hex color
//! and to a text-contrast preference.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use schemars::{JsonSchema, Schema, SchemaGenerator};
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Text color drawn on top of a dark background.
pub const LIGHT_TEXT: &str = "#FFFFFF";
/// Text color drawn on top of a light background.
pub const DARK_TEXT: &str = "#000000";

/// Backgrounds at or below this relative luminance get light text.
const LIGHT_TEXT_LUMINANCE_THRESHOLD: f64 = 0.4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorFamily {
    Blue,
    Cyan,
    Gray,
    Green,
    Orange,
    Pink,
    Purple,
    Red,
    Teal,
    Yellow,
}

impl ColorFamily {
    pub const ALL: [Self; 10] = [
        Self::Blue,
        Self::Cyan,
        Self::Gray,
        Self::Green,
        Self::Orange,
        Self::Pink,
        Self::Purple,
        Self::Red,
        Self::Teal,
        Self::Yellow,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Cyan => "cyan",
            Self::Gray => "gray",
            Self::Green => "green",
            Self::Orange => "orange",
            Self::Pink => "pink",
            Self::Purple => "purple",
            Self::Red => "red",
            Self::Teal => "teal",
            Self::Yellow => "yellow",
        }
    }

    /// Palette for this family, indexed by [`ColorShade::index`].
    const fn palette(self) -> [&'static str; 5] {
        match self {
            Self::Blue => ["#bfdbfe", "#93c5fd", "#60a5fa", "#3b82f6", "#1d4ed8"],
            Self::Cyan => ["#a5f3fc", "#67e8f9", "#22d3ee", "#06b6d4", "#0e7490"],
            Self::Gray => ["#e5e7eb", "#d1d5db", "#9ca3af", "#6b7280", "#374151"],
            Self::Green => ["#bbf7d0", "#86efac", "#4ade80", "#22c55e", "#15803d"],
            Self::Orange => ["#fed7aa", "#fdba74", "#fb923c", "#f97316", "#c2410c"],
            Self::Pink => ["#fbcfe8", "#f9a8d4", "#f472b6", "#ec4899", "#be185d"],
            Self::Purple => ["#e9d5ff", "#d8b4fe", "#c084fc", "#a855f7", "#7e22ce"],
            Self::Red => ["#fecaca", "#fca5a5", "#f87171", "#ef4444", "#b91c1c"],
            Self::Teal => ["#99f6e4", "#5eead4", "#2dd4bf", "#14b8a6", "#0f766e"],
            Self::Yellow => ["#fef08a", "#fde047", "#facc15", "#eab308", "#a16207"],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorShade {
    Light2,
    Light1,
    Bright,
    Base,
    Dark1,
}

impl ColorShade {
    pub const ALL: [Self; 5] = [
        Self::Light2,
        Self::Light1,
        Self::Bright,
        Self::Base,
        Self::Dark1,
    ];

    /// Suffix appended to the family name. `Base` has none.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Light2 => "Light2",
            Self::Light1 => "Light1",
            Self::Bright => "Bright",
            Self::Base => "",
            Self::Dark1 => "Dark1",
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::Light2 => 0,
            Self::Light1 => 1,
            Self::Bright => 2,
            Self::Base => 3,
            Self::Dark1 => 4,
        }
    }
}

/// A color token such as `blueLight2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub family: ColorFamily,
    pub shade: ColorShade,
}

impl Color {
    #[must_use]
    pub const fn new(family: ColorFamily, shade: ColorShade) -> Self {
        Self { family, shade }
    }

    /// Concrete `#rrggbb` color for this token.
    #[must_use]
    pub const fn hex(self) -> &'static str {
        self.family.palette()[self.shade.index()]
    }

    /// Whether white text reads better than black on this background.
    #[must_use]
    pub fn prefers_light_text(self) -> bool {
        relative_luminance(self.hex()) <= LIGHT_TEXT_LUMINANCE_THRESHOLD
    }

    /// Text color to draw on top of this background.
    #[must_use]
    pub fn text_hex(self) -> &'static str {
        if self.prefers_light_text() {
            LIGHT_TEXT
        } else {
            DARK_TEXT
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new(ColorFamily::Blue, ColorShade::Base)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.family.as_str(), self.shade.suffix())
    }
}

impl FromStr for Color {
    type Err = CoreError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        for family in ColorFamily::ALL {
            let Some(rest) = token.strip_prefix(family.as_str()) else {
                continue;
            };
            if let Some(shade) = ColorShade::ALL.into_iter().find(|s| s.suffix() == rest) {
                return Ok(Self::new(family, shade));
            }
        }
        Err(CoreError::Validation(format!("unknown color token '{token}'")))
    }
}

impl TryFrom<String> for Color {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

impl JsonSchema for Color {
    fn schema_name() -> Cow<'static, str> {
        "Color".into()
    }

    fn json_schema(generator: &mut SchemaGenerator) -> Schema {
        <String as JsonSchema>::json_schema(generator)
    }
}

/// WCAG relative luminance of a `#rrggbb` color. Malformed input counts as black.
fn relative_luminance(hex: &str) -> f64 {
    let digits = hex.trim_start_matches('#');
    let channel = |range: std::ops::Range<usize>| {
        let raw = digits
            .get(range)
            .and_then(|s| u8::from_str_radix(s, 16).ok())
            .unwrap_or(0);
        let c = f64::from(raw) / 255.0;
        if c <= 0.039_28 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    0.0722f64.mul_add(
        channel(4..6),
        0.2126f64.mul_add(channel(0..2), 0.7152 * channel(2..4)),
    )
}
