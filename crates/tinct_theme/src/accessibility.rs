//! Accessibility checks
//!
//! Contrast is checked for four foreground/background pairs of the color
//! palette. A pair is only evaluated when both tokens are present; absence is
//! reported by the structural validator instead. A token that is not a
//! string is an accessibility warning at its own path and the pair is
//! skipped. An unrecognized color is a warning at its own path and the pair
//! is judged at ratio `1.0`, so it always fails.
//!
//! Touch target and focus ring checks run only when
//! [`ValidationOptions::check_interaction`] is set.

use serde::Serialize;
use tinct_color::contrast::MIN_CONTRAST_RATIO;
use tinct_color::{
    check_contrast_compliance, contrast_ratio, parse_color, ComplianceLevel, ContrastContext,
    ContrastResult, WcagLevel,
};

use crate::issue::{IssueCategory, IssueKind, ValidationIssue};
use crate::node::{ThemeNode, ThemePath};
use crate::options::ValidationOptions;

/// Smallest touch target and button height, in px.
pub const MIN_TOUCH_TARGET: f64 = 44.0;

/// A foreground/background pair of theme colors.
#[derive(Clone, Copy, Debug)]
pub struct ContrastPair {
    pub name: &'static str,
    pub context: &'static str,
    /// Prefix for failure messages, e.g. "Primary color".
    pub label: &'static str,
    /// Where a contrast failure is reported.
    pub owner: &'static [&'static str],
    pub foreground: &'static [&'static str],
    pub background: &'static [&'static str],
}

pub const CONTRAST_PAIRS: &[ContrastPair] = &[
    ContrastPair {
        name: "Primary Button Text",
        context: "Button text on primary background",
        label: "Primary color",
        owner: &["colors", "primary"],
        foreground: &["colors", "primary", "contrast"],
        background: &["colors", "primary", "main"],
    },
    ContrastPair {
        name: "Secondary Button Text",
        context: "Button text on secondary background",
        label: "Secondary color",
        owner: &["colors", "secondary"],
        foreground: &["colors", "secondary", "contrast"],
        background: &["colors", "secondary", "main"],
    },
    ContrastPair {
        name: "Primary Text on Surface",
        context: "Main text content",
        label: "Primary text",
        owner: &["colors", "text", "primary"],
        foreground: &["colors", "text", "primary"],
        background: &["colors", "surface", "primary"],
    },
    ContrastPair {
        name: "Error Text",
        context: "Error messages and alerts",
        label: "Error color",
        owner: &["colors", "error"],
        foreground: &["colors", "error", "contrast"],
        background: &["colors", "error", "main"],
    },
];

/// All accessibility findings for `theme`.
pub fn validate_accessibility(theme: &ThemeNode, options: &ValidationOptions) -> Vec<ValidationIssue> {
    let mut issues: Vec<ValidationIssue> = CONTRAST_PAIRS
        .iter()
        .flat_map(|pair| check_pair(theme, pair, options.contrast_level))
        .collect();
    if options.check_interaction {
        issues.extend(check_touch_targets(theme));
        issues.extend(check_focus_ring(theme));
    }
    issues
}

fn check_pair(theme: &ThemeNode, pair: &ContrastPair, level: WcagLevel) -> Vec<ValidationIssue> {
    let (fg, bg) = match pair_tokens(theme, pair) {
        Ok(Some(tokens)) => tokens,
        Ok(None) => return Vec::new(),
        Err(issues) => return issues,
    };

    let fg_color = parse_color(fg.value);
    let bg_color = parse_color(bg.value);
    let mut issues: Vec<ValidationIssue> = [
        (fg, fg_color, pair.foreground),
        (bg, bg_color, pair.background),
    ]
    .into_iter()
    .filter(|(_, color, _)| color.is_none())
    .map(|(token, _, path)| unrecognized(token.value, path))
    .collect();

    let ratio = match (fg_color, bg_color) {
        (Some(fg), Some(bg)) => contrast_ratio(&fg, &bg),
        _ => MIN_CONTRAST_RATIO,
    };
    let required = level.required_ratio(false);
    tracing::trace!(pair = pair.name, ratio, required, "contrast pair");
    if ratio >= required {
        return issues;
    }

    issues.push(
        ValidationIssue::error(
            IssueKind::ContrastFailure,
            IssueCategory::Accessibility,
            ThemePath::new(pair.owner.iter().copied()),
            format!(
                "{} contrast ratio {ratio:.2} is below {level} standard ({required})",
                pair.label
            ),
        )
        .with_suggestion("Consider using a darker or lighter contrast color"),
    );
    issues
}

#[derive(Clone, Copy)]
struct Token<'a> {
    value: &'a str,
}

/// Both tokens of a pair when present. Non-string tokens are returned as
/// `InvalidType` warnings.
fn pair_tokens<'a>(
    theme: &'a ThemeNode,
    pair: &ContrastPair,
) -> Result<Option<(Token<'a>, Token<'a>)>, Vec<ValidationIssue>> {
    let lookup = |path: &'static [&'static str]| -> Result<Option<Token<'a>>, ValidationIssue> {
        let Some(node) = theme.resolve(&ThemePath::new(path.iter().copied())) else {
            return Ok(None);
        };
        match node.as_str() {
            Some("") => Ok(None),
            Some(value) => Ok(Some(Token { value })),
            None => Err(ValidationIssue::warning(
                IssueKind::InvalidType,
                IssueCategory::Accessibility,
                ThemePath::new(path.iter().copied()),
                format!("Expected a color string, found {}", node.kind()),
            )),
        }
    };

    match (lookup(pair.foreground), lookup(pair.background)) {
        (Ok(Some(fg)), Ok(Some(bg))) => Ok(Some((fg, bg))),
        (Ok(_), Ok(_)) => Ok(None),
        (fg, bg) => Err(fg.err().into_iter().chain(bg.err()).collect()),
    }
}

fn unrecognized(value: &str, path: &[&str]) -> ValidationIssue {
    tracing::debug!(value, "unrecognized color in contrast pair");
    ValidationIssue::warning(
        IssueKind::InvalidValue,
        IssueCategory::Accessibility,
        ThemePath::new(path.iter().copied()),
        format!("Unrecognized color `{value}` has no measurable contrast"),
    )
    .with_suggestion("Use a hex, rgb(), rgba() or named color")
}

/// Touch target and button height findings.
pub fn check_touch_targets(theme: &ThemeNode) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    let min_touch_target = theme
        .get_dotted("accessibility.minTouchTarget")
        .and_then(ThemeNode::as_f64)
        .unwrap_or(MIN_TOUCH_TARGET);
    if min_touch_target < MIN_TOUCH_TARGET {
        issues.push(
            ValidationIssue::warning(
                IssueKind::InvalidValue,
                IssueCategory::Accessibility,
                ThemePath::new(["accessibility", "minTouchTarget"]),
                format!(
                    "Minimum touch target {min_touch_target}px is below WCAG recommendation (44px)"
                ),
            )
            .with_suggestion("Set minTouchTarget to at least 44px for better accessibility"),
        );
    }

    let heights_path = ThemePath::new(["componentThemes", "button", "minHeight"]);
    if let Some(heights) = theme.resolve(&heights_path).and_then(ThemeNode::as_map) {
        issues.extend(heights.iter().filter_map(|(size, node)| {
            let height = node.as_f64().filter(|h| *h < MIN_TOUCH_TARGET)?;
            Some(
                ValidationIssue::warning(
                    IssueKind::InvalidValue,
                    IssueCategory::Accessibility,
                    heights_path.child(size.as_str()),
                    format!("Button {size} height {height}px is below recommended 44px"),
                )
                .with_suggestion("Consider increasing button height for better touch accessibility"),
            )
        }));
    }

    issues
}

pub fn check_focus_ring(theme: &ThemeNode) -> Option<ValidationIssue> {
    let present = theme
        .get_dotted("accessibility.focusRing")
        .is_some_and(|node| !node.is_blank());
    (!present).then(|| {
        ValidationIssue::warning(
            IssueKind::MissingProperty,
            IssueCategory::Accessibility,
            ThemePath::new(["accessibility", "focusRing"]),
            "Missing focus ring configuration for keyboard navigation",
        )
        .with_suggestion("Add focusRing configuration for better keyboard accessibility")
    })
}

/// One evaluated pair in a [`ThemeContrastReport`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ContrastCheck {
    pub name: &'static str,
    pub foreground: String,
    pub background: String,
    pub context: &'static str,
    pub result: ContrastResult,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContrastSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    /// Checks whose ratio only reaches level A.
    pub warnings: usize,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ThemeContrastReport {
    pub checks: Vec<ContrastCheck>,
    pub summary: ContrastSummary,
}

impl ThemeContrastReport {
    pub fn all_passed(&self) -> bool {
        self.summary.failed == 0
    }
}

/// Evaluate every contrast pair whose colors are both present as strings.
///
/// Unlike [`validate_accessibility`] this reports passing pairs too.
/// Unrecognized colors are evaluated at ratio `1.0`.
pub fn validate_theme_contrast(theme: &ThemeNode, level: WcagLevel) -> ThemeContrastReport {
    let ctx = ContrastContext::with_level(level);
    let checks: Vec<ContrastCheck> = CONTRAST_PAIRS
        .iter()
        .filter_map(|pair| {
            let (fg, bg) = pair_tokens(theme, pair).ok().flatten()?;
            Some(ContrastCheck {
                name: pair.name,
                foreground: fg.value.to_string(),
                background: bg.value.to_string(),
                context: pair.context,
                result: check_contrast_compliance(fg.value, bg.value, &ctx),
            })
        })
        .collect();

    let passed = checks.iter().filter(|c| c.result.is_accessible).count();
    let summary = ContrastSummary {
        total: checks.len(),
        passed,
        failed: checks.len() - passed,
        warnings: checks
            .iter()
            .filter(|c| c.result.level == ComplianceLevel::A)
            .count(),
    };
    ThemeContrastReport { checks, summary }
}
