//! Tinct Theme Validation
//!
//! Audits a nested design-token tree for structural completeness, color
//! contrast and scale consistency, and scores the result.
//!
//! # Overview
//!
//! - [`ThemeNode`]: the theme tree, built in code or loaded from JSON/TOML
//! - [`validate_theme`]: runs the checks enabled in [`ValidationOptions`]
//!   and returns a [`ValidationResult`]
//! - [`validate_theme_contrast`]: a per-pair contrast report, passing pairs
//!   included
//!
//! # Quick Start
//!
//! ```rust
//! use tinct_theme::{validate_theme, IssueKind, ThemeNode, ValidationOptions};
//!
//! let theme = ThemeNode::from_json_str(r##"{
//!     "colors": { "primary": { "main": "#007bff", "contrast": "#ffffff" } }
//! }"##).unwrap();
//!
//! let result = validate_theme(&theme, &ValidationOptions::only_accessibility());
//! assert!(!result.is_valid);
//! assert_eq!(result.errors[0].kind, IssueKind::ContrastFailure);
//! assert_eq!(result.errors[0].path.to_dotted_string(), "colors.primary");
//! assert_eq!(result.summary.accessibility_score, 80);
//! ```
//!
//! # Scores
//!
//! Each category starts at 100 and is floored at 0:
//!
//! - accessibility: -20 per contrast failure, -5 per accessibility warning
//! - completeness: -10 per missing required key
//! - consistency: -8 per consistency warning, missing scale steps included
//!
//! A disabled check reports no issues and keeps its score at 100.
//!
//! The color engine is re-exported, so this crate is the only dependency a
//! caller needs.

pub mod accessibility;
pub mod consistency;
pub mod error;
pub mod issue;
pub mod node;
pub mod options;
pub mod structure;
pub mod validator;

#[cfg(test)]
pub(crate) mod testing;

pub use accessibility::{
    validate_accessibility, validate_theme_contrast, ContrastCheck, ContrastSummary,
    ThemeContrastReport,
};
pub use consistency::{analyze_consistency, ScaleOrder, ScaleReport};
pub use error::ThemeLoadError;
pub use issue::{IssueCategory, IssueKind, Severity, ValidationIssue};
pub use node::{Primitive, ThemeMap, ThemeNode, ThemePath};
pub use options::ValidationOptions;
pub use structure::{validate_structure, THEME_MANIFEST};
pub use validator::{validate_theme, ValidationResult, ValidationSummary};

pub use tinct_color::{
    calculate_contrast_ratio, check_contrast_compliance, high_contrast_variant, parse_color,
    suggest_better_colors, Color, ColorParseError, ColorSuggestion, ComplianceLevel,
    ContrastContext, ContrastResult, FontWeight, SuggestionTarget, WcagLevel,
};
