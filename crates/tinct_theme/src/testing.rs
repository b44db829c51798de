//! Shared fixtures for unit tests.

use crate::node::ThemeNode;

pub const COMPLETE_THEME_JSON: &str = include_str!("../tests/fixtures/complete_theme.json");

/// A theme that passes every check, interaction checks included.
pub fn complete_theme() -> ThemeNode {
    ThemeNode::from_json_str(COMPLETE_THEME_JSON).unwrap()
}
