//! Structural completeness checks
//!
//! The manifest lists the sections a theme must define, the branches inside
//! each section, and the leaf keys inside each branch. A missing section or
//! branch is always an error reported once at its own path; the leaves under
//! it are not reported separately. Missing leaves take the branch's
//! configured severity.
//!
//! Errors are completeness findings. Leaf warnings (neutral shades, font
//! size and spacing steps) are gaps in a scale and are reported as
//! consistency findings.
//!
//! A key counts as present when it exists and is not blank: the empty
//! string, `0`, `NaN` and `false` are treated as unset (see
//! [`ThemeNode::is_blank`]).

use crate::issue::{IssueCategory, IssueKind, Severity, ValidationIssue};
use crate::node::{ThemeNode, ThemePath};

/// A required object and the keys it must contain.
#[derive(Clone, Copy, Debug)]
pub struct Branch {
    pub key: &'static str,
    pub leaves: &'static [&'static str],
    pub leaf_severity: Severity,
    /// Noun used in messages, e.g. "primary color".
    pub label: &'static str,
}

/// A top-level theme section and its required branches.
#[derive(Clone, Copy, Debug)]
pub struct Section {
    pub key: &'static str,
    pub branches: &'static [Branch],
}

pub const NEUTRAL_SHADES: &[&str] = &[
    "50", "100", "200", "300", "400", "500", "600", "700", "800", "900",
];
pub const FONT_SIZE_STEPS: &[&str] = &["xs", "sm", "base", "lg", "xl"];
pub const SPACING_STEPS: &[&str] = &["xs", "sm", "md", "lg", "xl"];

const fn branch(
    key: &'static str,
    label: &'static str,
    leaves: &'static [&'static str],
    leaf_severity: Severity,
) -> Branch {
    Branch {
        key,
        leaves,
        leaf_severity,
        label,
    }
}

/// Everything a complete theme defines.
pub const THEME_MANIFEST: &[Section] = &[
    Section {
        key: "colors",
        branches: &[
            branch("primary", "primary color", &["main", "contrast"], Severity::Error),
            branch("secondary", "secondary color", &["main", "contrast"], Severity::Error),
            branch("neutral", "neutral palette", NEUTRAL_SHADES, Severity::Warning),
        ],
    },
    Section {
        key: "typography",
        branches: &[
            branch("fontSize", "font size", FONT_SIZE_STEPS, Severity::Warning),
            branch("fontWeight", "font weight", &[], Severity::Warning),
            branch("lineHeight", "line height", &[], Severity::Warning),
        ],
    },
    Section {
        key: "spacing",
        branches: &[branch("base", "base spacing", SPACING_STEPS, Severity::Warning)],
    },
    Section {
        key: "componentThemes",
        branches: &[
            branch(
                "button",
                "button",
                &["borderRadius", "minHeight", "padding", "typography"],
                Severity::Error,
            ),
            branch(
                "card",
                "card",
                &["borderRadius", "backgroundColor", "padding", "shadow"],
                Severity::Error,
            ),
            branch(
                "modal",
                "modal",
                &["borderRadius", "backgroundColor", "padding", "shadow", "backdropColor"],
                Severity::Error,
            ),
            branch(
                "navigation",
                "navigation",
                &["backgroundColor", "height", "padding", "accentColor"],
                Severity::Error,
            ),
        ],
    },
];

/// Check `theme` against [`THEME_MANIFEST`].
pub fn validate_structure(theme: &ThemeNode) -> Vec<ValidationIssue> {
    validate_against(theme, THEME_MANIFEST)
}

fn validate_against(theme: &ThemeNode, manifest: &[Section]) -> Vec<ValidationIssue> {
    let root = ThemePath::root();
    manifest
        .iter()
        .flat_map(|section| validate_section(theme, section, &root))
        .collect()
}

fn validate_section(theme: &ThemeNode, section: &Section, root: &ThemePath) -> Vec<ValidationIssue> {
    let path = root.child(section.key);
    let Some(node) = present(theme, section.key) else {
        return vec![missing(
            path,
            Severity::Error,
            format!("Theme is missing {} object", section.key),
        )];
    };

    section
        .branches
        .iter()
        .flat_map(|branch| validate_branch(node, branch, &path))
        .collect()
}

fn validate_branch(parent: &ThemeNode, branch: &Branch, parent_path: &ThemePath) -> Vec<ValidationIssue> {
    let path = parent_path.child(branch.key);
    let Some(node) = present(parent, branch.key) else {
        return vec![missing(
            path,
            Severity::Error,
            format!("Missing {} object", branch.label),
        )];
    };

    branch
        .leaves
        .iter()
        .filter(|leaf| present(node, leaf).is_none())
        .map(|leaf| {
            missing(
                path.child(*leaf),
                branch.leaf_severity,
                format!("Missing {} {leaf}", branch.label),
            )
        })
        .collect()
}

fn present<'a>(node: &'a ThemeNode, key: &str) -> Option<&'a ThemeNode> {
    node.get(key).filter(|child| !child.is_blank())
}

fn missing(path: ThemePath, severity: Severity, message: String) -> ValidationIssue {
    match severity {
        Severity::Error => ValidationIssue::error(
            IssueKind::MissingProperty,
            IssueCategory::Completeness,
            path,
            message,
        ),
        Severity::Warning => ValidationIssue::warning(
            IssueKind::MissingProperty,
            IssueCategory::Consistency,
            path,
            message,
        ),
    }
}
