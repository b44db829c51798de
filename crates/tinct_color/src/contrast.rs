//! WCAG relative luminance and contrast ratio.
//!
//! Luminance follows the WCAG 2.x definition: each sRGB channel is
//! linearized with the piecewise gamma curve and weighted with the
//! ITU-R BT.709 coefficients. The contrast ratio of two luminances is
//! `(L_lighter + 0.05) / (L_darker + 0.05)`, which is bounded to `[1, 21]`.

use crate::color::Color;
use crate::parse::parse_color;

/// Lowest possible contrast ratio (identical luminance).
pub const MIN_CONTRAST_RATIO: f64 = 1.0;
/// Highest possible contrast ratio (black on white).
pub const MAX_CONTRAST_RATIO: f64 = 21.0;

fn linearize(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance in `[0, 1]`; alpha is ignored.
pub fn relative_luminance(color: &Color) -> f64 {
    0.2126 * linearize(color.r) + 0.7152 * linearize(color.g) + 0.0722 * linearize(color.b)
}

/// Contrast ratio between two colors. Symmetric in its arguments.
pub fn contrast_ratio(a: &Color, b: &Color) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    ((lighter + 0.05) / (darker + 0.05)).clamp(MIN_CONTRAST_RATIO, MAX_CONTRAST_RATIO)
}

/// Contrast ratio between two color tokens.
///
/// If either token cannot be parsed the result is exactly `1.0`; surfacing
/// that is up to the caller.
pub fn calculate_contrast_ratio(foreground: &str, background: &str) -> f64 {
    match (parse_color(foreground), parse_color(background)) {
        (Some(fg), Some(bg)) => contrast_ratio(&fg, &bg),
        _ => {
            tracing::debug!(
                foreground,
                background,
                "unparseable color in contrast calculation"
            );
            MIN_CONTRAST_RATIO
        }
    }
}

/// Black or white, whichever sits on the far side of the color's
/// perceived (BT.601) brightness.
pub fn high_contrast_variant(color: &Color) -> Color {
    let brightness =
        (0.299 * f64::from(color.r) + 0.587 * f64::from(color.g) + 0.114 * f64::from(color.b))
            / 255.0;
    if brightness > 0.5 {
        Color::WHITE
    } else {
        Color::BLACK
    }
}
