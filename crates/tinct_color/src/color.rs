//! Canonical color value

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::parse::ColorToken;

/// sRGB color with 8-bit channels and an optional alpha.
///
/// Channels are in range by construction; alpha, when present, is clamped
/// to `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: Option<f64>,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 128, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const CYAN: Color = Color::rgb(0, 255, 255);
    pub const MAGENTA: Color = Color::rgb(255, 0, 255);
    pub const GRAY: Color = Color::rgb(128, 128, 128);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: None }
    }

    pub fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self::rgb(r, g, b).with_alpha(a)
    }

    /// Create from hex value (0xRRGGBB)
    pub const fn from_hex(hex: u32) -> Self {
        Self::rgb(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }

    /// Set alpha (clamped to `[0, 1]`, NaN becomes opaque) and return new color
    pub fn with_alpha(self, alpha: f64) -> Self {
        let a = if alpha.is_nan() { 1.0 } else { alpha.clamp(0.0, 1.0) };
        Self { a: Some(a), ..self }
    }

    /// Build from floating point channels in `0..=255`, rounding and
    /// clamping each one.
    pub fn from_f64_channels(r: f64, g: f64, b: f64) -> Self {
        Self::rgb(channel_from_f64(r), channel_from_f64(g), channel_from_f64(b))
    }

    /// Lower-case `#rrggbb`. Alpha is not encoded.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn to_array(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

fn channel_from_f64(v: f64) -> u8 {
    if v.is_nan() {
        return 0;
    }
    v.round().clamp(0.0, 255.0) as u8
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Returned by [`Color::from_str`] when the input matches none of the
/// supported color syntaxes.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unrecognized color `{input}`")]
pub struct ColorParseError {
    pub input: String,
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColorToken::detect(s)
            .to_color()
            .ok_or_else(|| ColorParseError {
                input: s.to_string(),
            })
    }
}
