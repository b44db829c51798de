//! WCAG compliance classification
//!
//! | Level | Normal text | Large text |
//! |-------|-------------|------------|
//! | AA    | 4.5         | 3.0        |
//! | AAA   | 7.0         | 4.5        |
//!
//! Large text is at least 18pt, or at least 14pt when bold.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::contrast::{calculate_contrast_ratio, MAX_CONTRAST_RATIO, MIN_CONTRAST_RATIO};

/// Point size at which regular text counts as large.
pub const LARGE_TEXT_REGULAR_PT: f64 = 18.0;
/// Point size at which bold text counts as large.
pub const LARGE_TEXT_BOLD_PT: f64 = 14.0;
/// Ratio below which a pair is reported as [`ComplianceLevel::Fail`].
pub const MINIMUM_RATIO_A: f64 = 3.0;

/// Conformance level a caller asks for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WcagLevel {
    #[default]
    #[serde(rename = "AA")]
    Aa,
    #[serde(rename = "AAA")]
    Aaa,
}

impl WcagLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Aa => "AA",
            Self::Aaa => "AAA",
        }
    }

    /// Minimum contrast ratio for this level.
    pub fn required_ratio(self, large_text: bool) -> f64 {
        match (self, large_text) {
            (Self::Aa, false) => 4.5,
            (Self::Aa, true) => 3.0,
            (Self::Aaa, false) => 7.0,
            (Self::Aaa, true) => 4.5,
        }
    }
}

impl fmt::Display for WcagLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

/// Text context a contrast pair is rendered in.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContrastContext {
    pub font_size_pt: f64,
    pub font_weight: FontWeight,
    pub level: WcagLevel,
}

impl Default for ContrastContext {
    fn default() -> Self {
        Self {
            font_size_pt: 16.0,
            font_weight: FontWeight::Normal,
            level: WcagLevel::Aa,
        }
    }
}

impl ContrastContext {
    pub fn with_level(level: WcagLevel) -> Self {
        Self {
            level,
            ..Self::default()
        }
    }

    pub fn is_large_text(&self) -> bool {
        self.font_size_pt >= LARGE_TEXT_REGULAR_PT
            || (self.font_size_pt >= LARGE_TEXT_BOLD_PT && self.font_weight == FontWeight::Bold)
    }

    /// Ratio the requested level demands for this text size.
    pub fn required_ratio(&self) -> f64 {
        self.level.required_ratio(self.is_large_text())
    }
}

/// Highest tier a ratio clears, independent of the requested level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum ComplianceLevel {
    #[serde(rename = "AAA")]
    Aaa,
    #[serde(rename = "AA")]
    Aa,
    #[serde(rename = "A")]
    A,
    #[serde(rename = "FAIL")]
    Fail,
}

impl ComplianceLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Aaa => "AAA",
            Self::Aa => "AA",
            Self::A => "A",
            Self::Fail => "FAIL",
        }
    }
}

impl fmt::Display for ComplianceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Verdict for one foreground/background pair.
///
/// `level` and `is_accessible` are always derived from `ratio` and the
/// [`ContrastContext`]; build one with [`classify`].
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContrastResult {
    /// Rounded to two decimals.
    pub ratio: f64,
    pub level: ComplianceLevel,
    pub is_accessible: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
}

/// Classify a contrast ratio in the given context.
///
/// The verdict uses the exact ratio; only the reported value is rounded.
pub fn classify(ratio: f64, ctx: &ContrastContext) -> ContrastResult {
    let ratio = if ratio.is_nan() {
        MIN_CONTRAST_RATIO
    } else {
        ratio.clamp(MIN_CONTRAST_RATIO, MAX_CONTRAST_RATIO)
    };
    let large = ctx.is_large_text();
    let requirement = ctx.level.required_ratio(large);
    let is_accessible = ratio >= requirement;

    let level = if ratio >= WcagLevel::Aaa.required_ratio(large) {
        ComplianceLevel::Aaa
    } else if ratio >= WcagLevel::Aa.required_ratio(large) {
        ComplianceLevel::Aa
    } else if ratio >= MINIMUM_RATIO_A {
        ComplianceLevel::A
    } else {
        ComplianceLevel::Fail
    };

    let recommendation = (!is_accessible).then(|| recommendation_for(requirement - ratio));

    ContrastResult {
        ratio: (ratio * 100.0).round() / 100.0,
        level,
        is_accessible,
        recommendation,
    }
}

fn recommendation_for(shortfall: f64) -> String {
    if shortfall > 2.0 {
        "Consider using a much darker or lighter color for better contrast".to_string()
    } else if shortfall > 1.0 {
        "Adjust color darkness/lightness to improve contrast".to_string()
    } else {
        "Minor color adjustment needed to meet accessibility standards".to_string()
    }
}

/// Parse both tokens and classify their contrast.
///
/// Unparseable input yields ratio `1.0`, which fails every level.
pub fn check_contrast_compliance(
    foreground: &str,
    background: &str,
    ctx: &ContrastContext,
) -> ContrastResult {
    classify(calculate_contrast_ratio(foreground, background), ctx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aa_normal_text_boundary() {
        let ctx = ContrastContext::default();
        assert!(!classify(4.49, &ctx).is_accessible);
        assert!(classify(4.50, &ctx).is_accessible);
    }

    #[test]
    fn large_text_detection() {
        let bold14 = ContrastContext {
            font_size_pt: 14.0,
            font_weight: FontWeight::Bold,
            ..Default::default()
        };
        assert!(bold14.is_large_text());
        assert_eq!(bold14.required_ratio(), 3.0);

        let normal14 = ContrastContext {
            font_size_pt: 14.0,
            ..Default::default()
        };
        assert!(!normal14.is_large_text());
        assert_eq!(normal14.required_ratio(), 4.5);

        let normal18 = ContrastContext {
            font_size_pt: 18.0,
            ..Default::default()
        };
        assert!(normal18.is_large_text());
    }

    #[test]
    fn reported_level_ignores_requested_level() {
        let aaa = ContrastContext::with_level(WcagLevel::Aaa);
        let result = classify(5.0, &aaa);
        assert_eq!(result.level, ComplianceLevel::Aa);
        assert!(!result.is_accessible);

        let result = classify(7.2, &ContrastContext::default());
        assert_eq!(result.level, ComplianceLevel::Aaa);
        assert!(result.is_accessible);
    }

    #[test]
    fn tiers_below_aa() {
        let ctx = ContrastContext::default();
        assert_eq!(classify(3.2, &ctx).level, ComplianceLevel::A);
        assert_eq!(classify(2.9, &ctx).level, ComplianceLevel::Fail);
        assert_eq!(classify(1.0, &ctx).level, ComplianceLevel::Fail);
    }

    #[test]
    fn recommendation_tiers_follow_shortfall() {
        let ctx = ContrastContext::default();
        let much = classify(2.0, &ctx).recommendation.unwrap();
        assert!(much.contains("much darker or lighter"), "{much}");
        let adjust = classify(3.0, &ctx).recommendation.unwrap();
        assert!(adjust.contains("darkness/lightness"), "{adjust}");
        let minor = classify(4.0, &ctx).recommendation.unwrap();
        assert!(minor.starts_with("Minor"), "{minor}");
        assert_eq!(classify(4.6, &ctx).recommendation, None);
    }

    #[test]
    fn ratio_is_rounded_and_bounded() {
        let ctx = ContrastContext::default();
        assert_eq!(classify(4.4567, &ctx).ratio, 4.46);
        assert_eq!(classify(0.3, &ctx).ratio, 1.0);
        assert_eq!(classify(f64::NAN, &ctx).ratio, 1.0);
        assert_eq!(classify(99.0, &ctx).ratio, 21.0);
    }

    #[test]
    fn compliance_from_tokens() {
        let ctx = ContrastContext::default();
        let result = check_contrast_compliance("#000", "#fff", &ctx);
        assert_eq!(result.ratio, 21.0);
        assert_eq!(result.level, ComplianceLevel::Aaa);

        let bad = check_contrast_compliance("bogus", "#fff", &ctx);
        assert_eq!(bad.ratio, 1.0);
        assert_eq!(bad.level, ComplianceLevel::Fail);
        assert!(!bad.is_accessible);
    }

    #[test]
    fn serializes_with_wcag_spelling() {
        let json = serde_json::to_value(classify(3.2, &ContrastContext::default())).unwrap();
        assert_eq!(json["level"], "A");
        assert_eq!(json["isAccessible"], false);
        let level: WcagLevel = serde_json::from_str("\"AAA\"").unwrap();
        assert_eq!(level, WcagLevel::Aaa);
    }
}
