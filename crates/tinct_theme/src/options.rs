//! Validation options
//!
//! Options can be built in code or read from a TOML document such as:
//!
//! ```toml
//! checkConsistency = false
//! contrastLevel = "AAA"
//! ```
//!
//! Missing fields keep their defaults.

use serde::{Deserialize, Serialize};
use tinct_color::WcagLevel;

use crate::error::ThemeLoadError;

/// Which checks a validation run performs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ValidationOptions {
    /// Contrast pairs (and interaction checks when enabled)
    pub check_accessibility: bool,
    /// Required branches and keys
    pub check_completeness: bool,
    /// Scale ratios and role palettes
    pub check_consistency: bool,
    /// Level contrast pairs are held to
    pub contrast_level: WcagLevel,
    /// Touch target and focus ring checks; only runs with accessibility
    pub check_interaction: bool,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            check_accessibility: true,
            check_completeness: true,
            check_consistency: true,
            contrast_level: WcagLevel::Aa,
            check_interaction: false,
        }
    }
}

impl ValidationOptions {
    pub fn from_toml_str(src: &str) -> Result<Self, ThemeLoadError> {
        let options: Self = toml::from_str(src)?;
        tracing::debug!(?options, "loaded validation options");
        Ok(options)
    }

    pub fn with_contrast_level(mut self, level: WcagLevel) -> Self {
        self.contrast_level = level;
        self
    }

    pub fn only_accessibility() -> Self {
        Self {
            check_completeness: false,
            check_consistency: false,
            ..Self::default()
        }
    }

    pub fn only_completeness() -> Self {
        Self {
            check_accessibility: false,
            check_consistency: false,
            ..Self::default()
        }
    }

    pub fn only_consistency() -> Self {
        Self {
            check_accessibility: false,
            check_completeness: false,
            ..Self::default()
        }
    }
}
