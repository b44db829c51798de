//! Theme token tree
//!
//! A theme is an arbitrarily nested map of design tokens. [`ThemeNode`]
//! models it as an explicit tagged tree so every traversal is matched
//! exhaustively. Map entries keep insertion order; scale checks read values
//! in the order the theme declares them.

use std::fmt;

use indexmap::IndexMap;
use serde::{Serialize, Serializer};

use crate::error::ThemeLoadError;

/// Leaf value of a theme tree.
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    Text(String),
    Number(f64),
    Bool(bool),
}

impl Primitive {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "string",
            Self::Number(_) => "number",
            Self::Bool(_) => "boolean",
        }
    }
}

/// Map of child nodes keyed by token name.
pub type ThemeMap = IndexMap<String, ThemeNode>;

#[derive(Clone, Debug, PartialEq)]
pub enum ThemeNode {
    Primitive(Primitive),
    Map(ThemeMap),
}

impl ThemeNode {
    pub fn map() -> Self {
        Self::Map(ThemeMap::new())
    }

    pub fn text(value: impl Into<String>) -> Self {
        Self::Primitive(Primitive::Text(value.into()))
    }

    pub fn number(value: f64) -> Self {
        Self::Primitive(Primitive::Number(value))
    }

    pub fn bool(value: bool) -> Self {
        Self::Primitive(Primitive::Bool(value))
    }

    /// Builder-style insert; turns a primitive into an empty map first.
    pub fn with(mut self, key: impl Into<String>, child: impl Into<ThemeNode>) -> Self {
        self.insert(key, child);
        self
    }

    /// Insert a child, replacing any previous value under `key`.
    ///
    /// A primitive node is replaced by a map holding only the new child.
    pub fn insert(&mut self, key: impl Into<String>, child: impl Into<ThemeNode>) {
        if let Self::Primitive(_) = self {
            *self = Self::map();
        }
        if let Self::Map(map) = self {
            map.insert(key.into(), child.into());
        }
    }

    /// Remove and return a child; `None` on primitives or absent keys.
    pub fn remove(&mut self, key: &str) -> Option<ThemeNode> {
        match self {
            Self::Map(map) => map.shift_remove(key),
            Self::Primitive(_) => None,
        }
    }

    pub fn get(&self, key: &str) -> Option<&ThemeNode> {
        self.as_map()?.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut ThemeNode> {
        match self {
            Self::Map(map) => map.get_mut(key),
            Self::Primitive(_) => None,
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Look a node up by path; the empty path resolves to `self`.
    pub fn resolve(&self, path: &ThemePath) -> Option<&ThemeNode> {
        path.segments()
            .iter()
            .try_fold(self, |node, segment| node.get(segment))
    }

    /// Look a node up by dotted path such as `colors.primary.main`.
    pub fn get_dotted(&self, dotted: &str) -> Option<&ThemeNode> {
        self.resolve(&ThemePath::parse(dotted))
    }

    pub fn as_map(&self) -> Option<&ThemeMap> {
        match self {
            Self::Map(map) => Some(map),
            Self::Primitive(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Primitive(Primitive::Text(s)) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Primitive(Primitive::Number(n)) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Primitive(Primitive::Bool(b)) => Some(*b),
            _ => None,
        }
    }

    /// `true` for values a theme author would read as unset: the empty
    /// string, `0`, `NaN` and `false`. Maps are never blank.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Primitive(Primitive::Text(s)) => s.is_empty(),
            Self::Primitive(Primitive::Number(n)) => *n == 0.0 || n.is_nan(),
            Self::Primitive(Primitive::Bool(b)) => !b,
            Self::Map(_) => false,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Primitive(p) => p.kind(),
            Self::Map(_) => "object",
        }
    }

    /// Parse a JSON theme document. `null` and array members are dropped.
    pub fn from_json_str(src: &str) -> Result<Self, ThemeLoadError> {
        let value: serde_json::Value = serde_json::from_str(src)?;
        let node = Self::try_from(value)?;
        tracing::debug!(entries = node.as_map().map_or(0, |m| m.len()), "loaded JSON theme");
        Ok(node)
    }

    /// Parse a TOML theme document. Arrays are dropped; datetimes are
    /// rejected.
    pub fn from_toml_str(src: &str) -> Result<Self, ThemeLoadError> {
        let table: toml::Table = toml::from_str(src)?;
        let node = from_toml_table(table, &ThemePath::root())?;
        tracing::debug!(entries = node.as_map().map_or(0, |m| m.len()), "loaded TOML theme");
        Ok(node)
    }
}

impl From<&str> for ThemeNode {
    fn from(value: &str) -> Self {
        Self::text(value)
    }
}

impl From<String> for ThemeNode {
    fn from(value: String) -> Self {
        Self::text(value)
    }
}

impl From<f64> for ThemeNode {
    fn from(value: f64) -> Self {
        Self::number(value)
    }
}

impl From<i32> for ThemeNode {
    fn from(value: i32) -> Self {
        Self::number(f64::from(value))
    }
}

impl From<bool> for ThemeNode {
    fn from(value: bool) -> Self {
        Self::bool(value)
    }
}

impl From<ThemeMap> for ThemeNode {
    fn from(value: ThemeMap) -> Self {
        Self::Map(value)
    }
}

impl TryFrom<serde_json::Value> for ThemeNode {
    type Error = ThemeLoadError;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        match from_json_value(value, &ThemePath::root())? {
            Some(node @ ThemeNode::Map(_)) => Ok(node),
            _ => Err(ThemeLoadError::NotATable),
        }
    }
}

fn from_json_value(
    value: serde_json::Value,
    path: &ThemePath,
) -> Result<Option<ThemeNode>, ThemeLoadError> {
    use serde_json::Value;

    let node = match value {
        Value::Null => return Ok(None),
        Value::Bool(b) => ThemeNode::bool(b),
        Value::Number(n) => match n.as_f64() {
            Some(f) => ThemeNode::number(f),
            None => return Err(ThemeLoadError::unsupported(path, "number")),
        },
        Value::String(s) => ThemeNode::text(s),
        Value::Array(_) => {
            tracing::trace!(%path, "dropping array value");
            return Ok(None);
        }
        Value::Object(members) => {
            let mut map = ThemeMap::with_capacity(members.len());
            for (key, member) in members {
                let child_path = path.child(key.as_str());
                if let Some(child) = from_json_value(member, &child_path)? {
                    map.insert(key, child);
                }
            }
            ThemeNode::Map(map)
        }
    };
    Ok(Some(node))
}

fn from_toml_table(table: toml::Table, path: &ThemePath) -> Result<ThemeNode, ThemeLoadError> {
    let mut map = ThemeMap::with_capacity(table.len());
    for (key, value) in table {
        let child_path = path.child(key.as_str());
        if let Some(child) = from_toml_value(value, &child_path)? {
            map.insert(key, child);
        }
    }
    Ok(ThemeNode::Map(map))
}

fn from_toml_value(
    value: toml::Value,
    path: &ThemePath,
) -> Result<Option<ThemeNode>, ThemeLoadError> {
    use toml::Value;

    let node = match value {
        Value::String(s) => ThemeNode::text(s),
        Value::Integer(i) => ThemeNode::number(i as f64),
        Value::Float(f) => ThemeNode::number(f),
        Value::Boolean(b) => ThemeNode::bool(b),
        Value::Table(table) => from_toml_table(table, path)?,
        Value::Array(_) => {
            tracing::trace!(%path, "dropping array value");
            return Ok(None);
        }
        Value::Datetime(_) => return Err(ThemeLoadError::unsupported(path, "datetime")),
    };
    Ok(Some(node))
}

/// Location of a node inside a theme tree.
///
/// Held as segments; rendered as a dot-joined string such as
/// `componentThemes.button.minHeight`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ThemePath {
    segments: Vec<String>,
}

impl ThemePath {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// Split a dotted string; empty segments are skipped.
    pub fn parse(dotted: &str) -> Self {
        Self::new(dotted.split('.').filter(|s| !s.is_empty()))
    }

    pub fn child(&self, segment: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment.into());
        Self { segments }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn last(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    pub fn to_dotted_string(&self) -> String {
        self.segments.join(".")
    }
}

impl fmt::Display for ThemePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_dotted_string())
    }
}

impl From<&str> for ThemePath {
    fn from(dotted: &str) -> Self {
        Self::parse(dotted)
    }
}

impl PartialEq<str> for ThemePath {
    fn eq(&self, other: &str) -> bool {
        self.to_dotted_string() == other
    }
}

impl PartialEq<&str> for ThemePath {
    fn eq(&self, other: &&str) -> bool {
        self.to_dotted_string() == *other
    }
}

impl Serialize for ThemePath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
