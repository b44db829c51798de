//! Validation aggregator
//!
//! Runs the enabled checks in a fixed order (completeness, accessibility,
//! consistency), splits the findings by severity and scores each category.

use serde::Serialize;

use crate::accessibility::validate_accessibility;
use crate::consistency::analyze_consistency;
use crate::issue::{IssueCategory, IssueKind, Severity, ValidationIssue};
use crate::node::ThemeNode;
use crate::options::ValidationOptions;
use crate::structure::validate_structure;

const CONTRAST_FAILURE_PENALTY: u32 = 20;
const ACCESSIBILITY_WARNING_PENALTY: u32 = 5;
const MISSING_PROPERTY_PENALTY: u32 = 10;
const CONSISTENCY_WARNING_PENALTY: u32 = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationSummary {
    pub total_errors: u32,
    pub total_warnings: u32,
    /// 0 to 100
    pub accessibility_score: u32,
    pub completeness_score: u32,
    pub consistency_score: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// `true` when there are no errors; warnings do not count.
    pub is_valid: bool,
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
    pub summary: ValidationSummary,
}

impl ValidationResult {
    /// Errors followed by warnings.
    pub fn issues(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.errors.iter().chain(&self.warnings)
    }
}

/// Validate `theme` with the checks enabled in `options`.
///
/// Never fails: every finding is reported in the result.
pub fn validate_theme(theme: &ThemeNode, options: &ValidationOptions) -> ValidationResult {
    let mut issues = Vec::new();
    if options.check_completeness {
        issues.extend(validate_structure(theme));
    }
    if options.check_accessibility {
        issues.extend(validate_accessibility(theme, options));
    }
    if options.check_consistency {
        issues.extend(analyze_consistency(theme));
    }

    let summary = summarize(&issues);
    let (errors, warnings): (Vec<_>, Vec<_>) =
        issues.into_iter().partition(ValidationIssue::is_error);

    tracing::debug!(
        errors = summary.total_errors,
        warnings = summary.total_warnings,
        accessibility = summary.accessibility_score,
        completeness = summary.completeness_score,
        consistency = summary.consistency_score,
        "validated theme"
    );

    ValidationResult {
        is_valid: errors.is_empty(),
        errors,
        warnings,
        summary,
    }
}

fn summarize(issues: &[ValidationIssue]) -> ValidationSummary {
    let contrast_failures = count(issues, |i| {
        i.severity == Severity::Error && i.kind == IssueKind::ContrastFailure
    });
    let accessibility_warnings = count(issues, |i| {
        i.severity == Severity::Warning && i.category == IssueCategory::Accessibility
    });
    let missing_properties = count(issues, |i| {
        i.severity == Severity::Error
            && i.kind == IssueKind::MissingProperty
            && i.category == IssueCategory::Completeness
    });
    let consistency_warnings = count(issues, |i| {
        i.severity == Severity::Warning && i.category == IssueCategory::Consistency
    });

    ValidationSummary {
        total_errors: count(issues, ValidationIssue::is_error),
        total_warnings: count(issues, |i| !i.is_error()),
        accessibility_score: score(&[
            (contrast_failures, CONTRAST_FAILURE_PENALTY),
            (accessibility_warnings, ACCESSIBILITY_WARNING_PENALTY),
        ]),
        completeness_score: score(&[(missing_properties, MISSING_PROPERTY_PENALTY)]),
        consistency_score: score(&[(consistency_warnings, CONSISTENCY_WARNING_PENALTY)]),
    }
}

fn count(issues: &[ValidationIssue], pred: impl Fn(&ValidationIssue) -> bool) -> u32 {
    let n = issues.iter().filter(|issue| pred(issue)).count();
    u32::try_from(n).unwrap_or(u32::MAX)
}

/// 100 minus the weighted counts, floored at zero.
fn score(penalties: &[(u32, u32)]) -> u32 {
    penalties
        .iter()
        .fold(100u32, |score, (count, weight)| {
            score.saturating_sub(count.saturating_mul(*weight))
        })
}
