//! Remediation color suggestions
//!
//! Four bounded searches walk HSL lightness in steps of 10: darken and
//! lighten the foreground against the fixed background, then darken and
//! lighten the background against the fixed foreground. Each search stops
//! at the first step that reaches the target ratio, which keeps the output
//! order stable for callers that display the first entry. Results are
//! truncated to three, not ranked.

use std::fmt;

use serde::Serialize;

use crate::color::Color;
use crate::contrast::contrast_ratio;
use crate::hsl::Hsl;
use crate::parse::parse_color;

/// Default ratio searched for (WCAG AA, normal text).
pub const DEFAULT_TARGET_RATIO: f64 = 4.5;
/// Lightness change per search step, in percent.
pub const LIGHTNESS_STEP: i32 = 10;
/// Upper bound on the number of suggestions returned.
pub const MAX_SUGGESTIONS: usize = 3;

/// Which side of the pair a suggestion replaces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionTarget {
    Foreground,
    Background,
}

impl fmt::Display for SuggestionTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Foreground => "foreground",
            Self::Background => "background",
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Direction {
    Darker,
    Lighter,
}

impl Direction {
    fn label(self) -> &'static str {
        match self {
            Self::Darker => "Darker",
            Self::Lighter => "Lighter",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ColorSuggestion {
    #[serde(rename = "type")]
    pub target: SuggestionTarget,
    pub color: Color,
    pub ratio: f64,
    pub description: String,
}

/// Propose up to three replacement colors that reach `target_ratio`.
///
/// Returns an empty list if either token is unparseable or no step in any
/// direction reaches the target.
pub fn suggest_better_colors(
    foreground: &str,
    background: &str,
    target_ratio: f64,
) -> Vec<ColorSuggestion> {
    let (Some(fg), Some(bg)) = (parse_color(foreground), parse_color(background)) else {
        return Vec::new();
    };

    let searches = [
        (SuggestionTarget::Foreground, Direction::Darker),
        (SuggestionTarget::Foreground, Direction::Lighter),
        (SuggestionTarget::Background, Direction::Darker),
        (SuggestionTarget::Background, Direction::Lighter),
    ];

    searches
        .into_iter()
        .filter_map(|(target, direction)| search(&fg, &bg, target, direction, target_ratio))
        .take(MAX_SUGGESTIONS)
        .collect()
}

fn search(
    fg: &Color,
    bg: &Color,
    target: SuggestionTarget,
    direction: Direction,
    target_ratio: f64,
) -> Option<ColorSuggestion> {
    let (moving, fixed) = match target {
        SuggestionTarget::Foreground => (fg, bg),
        SuggestionTarget::Background => (bg, fg),
    };
    let hsl = moving.to_hsl();

    let found = lightness_steps(hsl.l, direction).find_map(|l| {
        let candidate = Hsl {
            l: f64::from(l),
            ..hsl
        }
        .to_color();
        let ratio = contrast_ratio(&candidate, fixed);
        (ratio >= target_ratio).then_some((l, candidate, ratio))
    });

    let Some((l, color, ratio)) = found else {
        tracing::trace!(%target, ?direction, target_ratio, "no lightness step reaches target");
        return None;
    };

    Some(ColorSuggestion {
        target,
        color,
        ratio,
        description: format!("{} {target} ({l}% lightness)", direction.label()),
    })
}

/// Lightness values visited from `start`, excluding `start` itself, staying
/// within `0..=100`.
fn lightness_steps(start: f64, direction: Direction) -> impl Iterator<Item = i32> {
    let start = start.round() as i32;
    let step = match direction {
        Direction::Darker => -LIGHTNESS_STEP,
        Direction::Lighter => LIGHTNESS_STEP,
    };
    (1..)
        .map(move |i| start + step * i)
        .take_while(|l| (0..=100).contains(l))
}
