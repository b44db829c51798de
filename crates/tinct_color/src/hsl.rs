//! RGB <-> HSL conversion
//!
//! Components are rounded to whole units (hue in degrees, saturation and
//! lightness in percent), so a round trip through HSL can move a channel by
//! one step. Compare converted colors with a tolerance, never exactly.

use serde::Serialize;

use crate::color::Color;

/// Hue `0..360`, saturation and lightness `0..100`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub a: Option<f64>,
}

impl Hsl {
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l, a: None }
    }

    /// Same hue and saturation at a different lightness (clamped to `0..=100`).
    pub fn with_lightness(self, l: f64) -> Self {
        Self {
            l: l.clamp(0.0, 100.0),
            ..self
        }
    }

    pub fn to_color(&self) -> Color {
        hsl_to_rgb(self)
    }
}

impl Color {
    pub fn to_hsl(&self) -> Hsl {
        rgb_to_hsl(self)
    }
}

pub fn rgb_to_hsl(color: &Color) -> Hsl {
    let r = f64::from(color.r) / 255.0;
    let g = f64::from(color.g) / 255.0;
    let b = f64::from(color.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let chroma = max - min;
    let l = (max + min) / 2.0;

    let (mut h, mut s) = (0.0, 0.0);
    if chroma != 0.0 {
        s = if l > 0.5 {
            chroma / (2.0 - max - min)
        } else {
            chroma / (max + min)
        };

        // Sector is picked by whichever channel holds the maximum, red first.
        h = if max == r {
            (g - b) / chroma + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / chroma + 2.0
        } else {
            (r - g) / chroma + 4.0
        };
        h /= 6.0;
    }

    Hsl {
        h: (h * 360.0).round(),
        s: (s * 100.0).round(),
        l: (l * 100.0).round(),
        a: color.a,
    }
}

pub fn hsl_to_rgb(hsl: &Hsl) -> Color {
    let h = hsl.h / 360.0;
    let s = hsl.s / 100.0;
    let l = hsl.l / 100.0;

    let (r, g, b) = if s == 0.0 {
        (l, l, l)
    } else {
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        (
            hue_to_channel(p, q, h + 1.0 / 3.0),
            hue_to_channel(p, q, h),
            hue_to_channel(p, q, h - 1.0 / 3.0),
        )
    };

    let color = Color::from_f64_channels(r * 255.0, g * 255.0, b * 255.0);
    match hsl.a {
        Some(a) => color.with_alpha(a),
        None => color,
    }
}

fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}
