#![forbid(unsafe_code)]

//! RGB/HSL color types and the hex-to-HSL converter.
//!
//! The converter follows the classic piecewise hue formula. When two
//! channels share the maximum value, the later channel in `r, g, b` order
//! is treated as the maximum (blue over green over red).
//!
//! # Example
//! ```
//! use tint_style::color::{HexColor, Hsl};
//!
//! let primary: HexColor = "#00d1b2".parse().unwrap();
//! let hsl = primary.to_hsl();
//! assert_eq!(hsl, Hsl { h: 171, s: 100.0, l: 41.0 });
//! assert_eq!(hsl.to_string(), "hsl(171, 100%, 41%)");
//! ```

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex_lite::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

static HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9a-fA-F]{6}$").expect("hex color pattern is valid"));

/// Errors produced while parsing a color string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Input is not a `#RRGGBB` string.
    #[error("invalid color {value:?}: expected #RRGGBB")]
    InvalidHex { value: String },
}

/// Returns `true` when `value` is a `#RRGGBB` string (hex digits in any case).
#[must_use]
pub fn is_hex_color(value: &str) -> bool {
    HEX_COLOR.is_match(value)
}

/// RGB color (opaque).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel (0–255).
    pub r: u8,
    /// Green channel (0–255).
    pub g: u8,
    /// Blue channel (0–255).
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#RRGGBB` string.
    pub fn from_hex(value: &str) -> Result<Self, ColorError> {
        if !is_hex_color(value) {
            return Err(ColorError::InvalidHex {
                value: value.to_string(),
            });
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&value[range], 16).map_err(|_| ColorError::InvalidHex {
                value: value.to_string(),
            })
        };
        Ok(Self::new(channel(1..3)?, channel(3..5)?, channel(5..7)?))
    }

    /// Convert to HSL.
    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        rgb_to_hsl(self)
    }
}

/// Hue/saturation/lightness triple as shown to users.
///
/// `h` is whole degrees in `[0, 360)`. `s` and `l` are percentages in
/// `[0, 100]` rounded to one decimal place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue in degrees.
    pub h: u16,
    /// Saturation percent.
    pub s: f64,
    /// Lightness percent.
    pub l: f64,
}

impl Hsl {
    /// Convert a `#RRGGBB` string.
    pub fn from_hex(value: &str) -> Result<Self, ColorError> {
        Rgb::from_hex(value).map(rgb_to_hsl)
    }

    /// Hue as a CSS angle, e.g. `171deg`.
    #[must_use]
    pub fn hue_css(&self) -> String {
        format!("{}deg", self.h)
    }

    /// Saturation as a CSS percentage, e.g. `70.8%`.
    #[must_use]
    pub fn saturation_css(&self) -> String {
        format!("{}%", self.s)
    }

    /// Lightness as a CSS percentage, e.g. `41%`.
    #[must_use]
    pub fn lightness_css(&self) -> String {
        format!("{}%", self.l)
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}

/// Convert an RGB color to its displayed HSL triple.
#[must_use]
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let channels = [
        f64::from(rgb.r) / 255.0,
        f64::from(rgb.g) / 255.0,
        f64::from(rgb.b) / 255.0,
    ];

    let mut min = channels[0];
    let mut max = channels[0];
    let mut max_channel = 0;
    for (index, &value) in channels.iter().enumerate().skip(1) {
        if value <= min {
            min = value;
        }
        if value >= max {
            max = value;
            max_channel = index;
        }
    }

    let [r, g, b] = channels;
    let range = max - min;
    let mut hue = match max_channel {
        0 => (g - b) / range,
        1 => 2.0 + (b - r) / range,
        _ => 4.0 + (r - g) / range,
    };
    // Zero range divides 0 by 0.
    if hue.is_nan() {
        hue = 0.0;
    }
    hue *= 60.0;
    if hue < 0.0 {
        hue += 360.0;
    }

    let lightness = (min + max) / 2.0;
    let saturation = if min == max {
        0.0
    } else if lightness < 0.5 {
        range / (max + min)
    } else {
        range / (2.0 - max - min)
    };

    Hsl {
        h: (hue.round() as u16) % 360,
        s: round_percent(saturation),
        l: round_percent(lightness),
    }
}

fn round_percent(fraction: f64) -> f64 {
    (fraction * 1000.0).round() / 10.0
}

/// A validated `#RRGGBB` color.
///
/// Parsing accepts either hex case; display is always lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(Rgb);

impl HexColor {
    /// Wrap an RGB value.
    #[must_use]
    pub const fn from_rgb(rgb: Rgb) -> Self {
        Self(rgb)
    }

    /// Construct from channel values in `const` context.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self(Rgb::new(r, g, b))
    }

    /// The underlying channels.
    #[must_use]
    pub const fn as_rgb(self) -> Rgb {
        self.0
    }

    /// Convert to HSL.
    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        rgb_to_hsl(self.0)
    }
}

impl FromStr for HexColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rgb::from_hex(s).map(Self)
    }
}

impl TryFrom<String> for HexColor {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.to_string()
    }
}

impl From<Rgb> for HexColor {
    fn from(rgb: Rgb) -> Self {
        Self(rgb)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Rgb { r, g, b } = self.0;
        write!(f, "#{r:02x}{g:02x}{b:02x}")
    }
}
