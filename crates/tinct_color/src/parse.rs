//! Color token parsing
//!
//! Recognized syntaxes, tried in order:
//! - `#RRGGBB` / `RRGGBB`
//! - `#RGB` / `RGB` (each digit doubled)
//! - `rgb(r, g, b)` with integer channels
//! - `rgba(r, g, b, a)` with a float alpha
//! - a small table of named colors (`black`, `white`, `red`, `green`, `blue`,
//!   `yellow`, `cyan`, `magenta`, `gray`/`grey`)
//!
//! Matching is case-insensitive and ignores surrounding whitespace. Anything
//! else is reported as [`ColorFormat::Unrecognized`]; nothing here fails loudly.

use std::fmt;
use std::sync::OnceLock;

use regex::{Captures, Regex};
use serde::Serialize;

use crate::color::Color;

/// Syntax a color token was written in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorFormat {
    Hex,
    ShortHex,
    Rgb,
    Rgba,
    Named,
    Unrecognized,
}

impl ColorFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::ShortHex => "short-hex",
            Self::Rgb => "rgb",
            Self::Rgba => "rgba",
            Self::Named => "named",
            Self::Unrecognized => "unrecognized",
        }
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A raw color string annotated with its detected format.
///
/// Only lives for the duration of a parse; keep the resulting [`Color`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorToken<'a> {
    raw: &'a str,
    normalized: String,
    format: ColorFormat,
}

impl<'a> ColorToken<'a> {
    pub fn detect(raw: &'a str) -> Self {
        let normalized = raw.trim().to_lowercase();
        let format = if patterns().hex.is_match(&normalized) {
            ColorFormat::Hex
        } else if patterns().short_hex.is_match(&normalized) {
            ColorFormat::ShortHex
        } else if patterns().rgb.is_match(&normalized) {
            ColorFormat::Rgb
        } else if patterns().rgba.is_match(&normalized) {
            ColorFormat::Rgba
        } else if named_color(&normalized).is_some() {
            ColorFormat::Named
        } else {
            ColorFormat::Unrecognized
        };

        Self {
            raw,
            normalized,
            format,
        }
    }

    pub fn raw(&self) -> &'a str {
        self.raw
    }

    pub fn format(&self) -> ColorFormat {
        self.format
    }

    pub fn is_recognized(&self) -> bool {
        self.format != ColorFormat::Unrecognized
    }

    /// Resolve the token to a canonical color, `None` if unrecognized.
    pub fn to_color(&self) -> Option<Color> {
        let s = self.normalized.as_str();
        match self.format {
            ColorFormat::Hex => {
                let caps = patterns().hex.captures(s)?;
                Some(Color::rgb(
                    hex_pair(&caps, 1)?,
                    hex_pair(&caps, 2)?,
                    hex_pair(&caps, 3)?,
                ))
            }
            ColorFormat::ShortHex => {
                let caps = patterns().short_hex.captures(s)?;
                Some(Color::rgb(
                    hex_digit_doubled(&caps, 1)?,
                    hex_digit_doubled(&caps, 2)?,
                    hex_digit_doubled(&caps, 3)?,
                ))
            }
            ColorFormat::Rgb => {
                let caps = patterns().rgb.captures(s)?;
                Some(Color::rgb(
                    int_channel(&caps, 1)?,
                    int_channel(&caps, 2)?,
                    int_channel(&caps, 3)?,
                ))
            }
            ColorFormat::Rgba => {
                let caps = patterns().rgba.captures(s)?;
                let alpha: f64 = caps.get(4)?.as_str().parse().ok()?;
                Some(Color::rgba(
                    int_channel(&caps, 1)?,
                    int_channel(&caps, 2)?,
                    int_channel(&caps, 3)?,
                    alpha,
                ))
            }
            ColorFormat::Named => named_color(s),
            ColorFormat::Unrecognized => None,
        }
    }
}

/// Parse a color token. Returns `None` for anything outside the supported
/// grammar; callers decide how to report that.
pub fn parse_color(token: &str) -> Option<Color> {
    ColorToken::detect(token).to_color()
}

struct Patterns {
    hex: Regex,
    short_hex: Regex,
    rgb: Regex,
    rgba: Regex,
}

fn patterns() -> &'static Patterns {
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();
    PATTERNS.get_or_init(|| Patterns {
        hex: compile(r"^#?([a-f\d]{2})([a-f\d]{2})([a-f\d]{2})$"),
        short_hex: compile(r"^#?([a-f\d])([a-f\d])([a-f\d])$"),
        rgb: compile(r"^rgb\(\s*(\d+)\s*,\s*(\d+)\s*,\s*(\d+)\s*\)$"),
        rgba: compile(
            r"^rgba\(\s*(\d+)\s*,\s*(\d+)\s*,\s*(\d+)\s*,\s*(\d+(?:\.\d*)?|\.\d+)\s*\)$",
        ),
    })
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("color patterns are valid regular expressions")
}

fn hex_pair(caps: &Captures<'_>, idx: usize) -> Option<u8> {
    u8::from_str_radix(caps.get(idx)?.as_str(), 16).ok()
}

fn hex_digit_doubled(caps: &Captures<'_>, idx: usize) -> Option<u8> {
    let digit = u8::from_str_radix(caps.get(idx)?.as_str(), 16).ok()?;
    Some(digit * 17)
}

/// Decimal channel, saturating at 255.
fn int_channel(caps: &Captures<'_>, idx: usize) -> Option<u8> {
    let digits = caps.get(idx)?.as_str();
    let value = digits.parse::<u32>().unwrap_or(u32::MAX);
    Some(value.min(255) as u8)
}

fn named_color(name: &str) -> Option<Color> {
    let color = match name {
        "black" => Color::BLACK,
        "white" => Color::WHITE,
        "red" => Color::RED,
        "green" => Color::GREEN,
        "blue" => Color::BLUE,
        "yellow" => Color::YELLOW,
        "cyan" => Color::CYAN,
        "magenta" => Color::MAGENTA,
        "gray" | "grey" => Color::GRAY,
        _ => return None,
    };
    Some(color)
}
