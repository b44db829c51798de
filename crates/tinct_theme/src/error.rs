use thiserror::Error;

use crate::node::ThemePath;

/// Failure to turn a theme or options document into engine input.
///
/// Validation itself never fails; this only covers loading.
#[derive(Debug, Error)]
pub enum ThemeLoadError {
    #[error("invalid JSON theme: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid TOML document: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("unsupported {kind} value at `{path}`")]
    UnsupportedValue { path: String, kind: &'static str },

    #[error("theme root must be an object")]
    NotATable,
}

impl ThemeLoadError {
    pub(crate) fn unsupported(path: &ThemePath, kind: &'static str) -> Self {
        Self::UnsupportedValue {
            path: path.to_dotted_string(),
            kind,
        }
    }
}
