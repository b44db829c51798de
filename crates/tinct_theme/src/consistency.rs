//! Scale and palette consistency checks
//!
//! A scale is consistent when every step grows by roughly the same factor:
//! each consecutive ratio must stay within a relative tolerance of the mean
//! ratio. Spacing steps are read in declaration order, font sizes sorted
//! ascending.

use crate::issue::{IssueCategory, IssueKind, ValidationIssue};
use crate::node::{ThemeNode, ThemePath};

/// Allowed relative deviation of a spacing step ratio from the mean.
pub const SPACING_TOLERANCE: f64 = 0.20;
/// Allowed relative deviation of a font size step ratio from the mean.
pub const FONT_SIZE_TOLERANCE: f64 = 0.15;

/// Audience roles whose palettes must each define primary and secondary.
pub const ROLE_PALETTES: &[&str] = &["student", "teacher", "parent", "management"];

/// How numeric values are ordered before ratios are taken.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScaleOrder {
    Declared,
    Ascending,
}

/// Consecutive step ratios of a scale and how far they stray from their mean.
#[derive(Clone, Debug, PartialEq)]
pub struct ScaleReport {
    pub ratios: Vec<f64>,
    pub mean_ratio: f64,
    /// Largest `|ratio - mean| / mean`.
    pub max_deviation: f64,
}

impl ScaleReport {
    /// `None` with fewer than two usable values. Non-positive and
    /// non-finite values are ignored.
    pub fn analyze(values: &[f64], order: ScaleOrder) -> Option<Self> {
        let mut values: Vec<f64> = values
            .iter()
            .copied()
            .filter(|v| v.is_finite() && *v > 0.0)
            .collect();
        if order == ScaleOrder::Ascending {
            values.sort_by(f64::total_cmp);
        }
        if values.len() < 2 {
            return None;
        }

        let ratios: Vec<f64> = values.windows(2).map(|w| w[1] / w[0]).collect();
        let mean_ratio = ratios.iter().sum::<f64>() / ratios.len() as f64;
        let max_deviation = ratios
            .iter()
            .map(|r| (r - mean_ratio).abs() / mean_ratio)
            .fold(0.0, f64::max);

        Some(Self {
            ratios,
            mean_ratio,
            max_deviation,
        })
    }

    pub fn is_consistent(&self, tolerance: f64) -> bool {
        self.max_deviation <= tolerance
    }
}

/// Run every consistency check against `theme`.
pub fn analyze_consistency(theme: &ThemeNode) -> Vec<ValidationIssue> {
    let mut issues = check_role_palettes(theme);
    issues.extend(check_spacing_scale(theme));
    issues.extend(check_font_size_scale(theme));
    issues
}

pub fn check_spacing_scale(theme: &ThemeNode) -> Option<ValidationIssue> {
    let path = ThemePath::new(["spacing", "base"]);
    check_scale(theme, path, ScaleOrder::Declared, SPACING_TOLERANCE).map(|issue| {
        issue.with_suggestion(
            "Consider using a consistent ratio between spacing values (e.g., 1.5x or 2x)",
        )
    })
}

pub fn check_font_size_scale(theme: &ThemeNode) -> Option<ValidationIssue> {
    let path = ThemePath::new(["typography", "fontSize"]);
    check_scale(theme, path, ScaleOrder::Ascending, FONT_SIZE_TOLERANCE).map(|issue| {
        issue.with_suggestion(
            "Consider using a consistent ratio between font sizes (e.g., 1.25x or 1.414x)",
        )
    })
}

fn check_scale(
    theme: &ThemeNode,
    path: ThemePath,
    order: ScaleOrder,
    tolerance: f64,
) -> Option<ValidationIssue> {
    let scale = theme.resolve(&path)?.as_map()?;
    let values: Vec<f64> = scale.values().filter_map(ThemeNode::as_f64).collect();
    let report = ScaleReport::analyze(&values, order)?;
    if report.is_consistent(tolerance) {
        return None;
    }

    let noun = match order {
        ScaleOrder::Declared => "Spacing values do not follow a consistent scale",
        ScaleOrder::Ascending => "Font sizes do not follow a consistent typographic scale",
    };
    Some(ValidationIssue::warning(
        IssueKind::InvalidValue,
        IssueCategory::Consistency,
        path,
        format!(
            "{noun} (mean ratio {:.2}, max deviation {:.0}%)",
            report.mean_ratio,
            report.max_deviation * 100.0
        ),
    ))
}

/// Each declared role palette needs both a primary and a secondary entry.
/// Blank values count as missing.
pub fn check_role_palettes(theme: &ThemeNode) -> Vec<ValidationIssue> {
    let Some(colors) = theme.get("colors") else {
        return Vec::new();
    };
    let colors_path = ThemePath::root().child("colors");

    ROLE_PALETTES
        .iter()
        .filter_map(|role| {
            colors
                .get(role)
                .filter(|palette| !palette.is_blank())
                .map(|palette| (*role, palette))
        })
        .flat_map(|(role, palette)| {
            let role_path = colors_path.child(role);
            ["primary", "secondary"]
                .into_iter()
                .filter(|field| palette.get(field).map_or(true, ThemeNode::is_blank))
                .map(move |field| {
                    ValidationIssue::warning(
                        IssueKind::MissingProperty,
                        IssueCategory::Consistency,
                        role_path.child(field),
                        format!("Missing {field} color for {role} role"),
                    )
                })
        })
        .collect()
}
