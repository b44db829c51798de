//! Tinct color engine
//!
//! Color parsing, WCAG contrast math and remediation suggestions for design
//! token validation.
//!
//! # Overview
//!
//! - [`parse_color`]: hex, short hex, `rgb()`, `rgba()` and a few named
//!   colors into a canonical [`Color`]
//! - [`calculate_contrast_ratio`]: WCAG contrast ratio between two tokens
//! - [`check_contrast_compliance`]: ratio plus text context into a
//!   [`ContrastResult`] verdict
//! - [`suggest_better_colors`]: lightness search for replacement colors
//!
//! # Quick Start
//!
//! ```rust
//! use tinct_color::{check_contrast_compliance, suggest_better_colors, ContrastContext};
//!
//! let result = check_contrast_compliance("#ffffff", "#007bff", &ContrastContext::default());
//! assert!(!result.is_accessible);
//!
//! for suggestion in suggest_better_colors("#ffffff", "#007bff", 4.5) {
//!     assert!(suggestion.ratio >= 4.5);
//! }
//! ```
//!
//! Everything here is a pure function of its inputs. Unparseable colors are
//! never an error at this layer: parsing yields `None` and contrast yields
//! `1.0`, and the caller decides how to report it.

pub mod color;
pub mod compliance;
pub mod contrast;
pub mod hsl;
pub mod parse;
pub mod suggest;

pub use color::{Color, ColorParseError};
pub use compliance::{
    check_contrast_compliance, classify, ComplianceLevel, ContrastContext, ContrastResult,
    FontWeight, WcagLevel,
};
pub use contrast::{
    calculate_contrast_ratio, contrast_ratio, high_contrast_variant, relative_luminance,
};
pub use hsl::{hsl_to_rgb, rgb_to_hsl, Hsl};
pub use parse::{parse_color, ColorFormat, ColorToken};
pub use suggest::{suggest_better_colors, ColorSuggestion, SuggestionTarget, DEFAULT_TARGET_RATIO};
