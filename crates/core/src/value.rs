//! Runtime prop values.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::PropKind;

/// The value a prop holds at generation time.
///
/// Serialized untagged, so a catalog default of `"solid"`, `false` or `3`
/// reads back as the obvious variant. Anything that is not a string, boolean
/// or number (arrays, objects, null) lands in `Structured`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropValue {
    Bool(bool),
    Number(serde_json::Number),
    Text(String),
    Structured(serde_json::Value),
}

impl PropValue {
    pub fn text(value: impl Into<String>) -> Self {
        PropValue::Text(value.into())
    }

    /// Build a number value. Returns `None` for NaN and infinities, which
    /// have no JSON form.
    pub fn number(value: f64) -> Option<Self> {
        serde_json::Number::from_f64(value).map(PropValue::Number)
    }

    pub fn integer(value: i64) -> Self {
        PropValue::Number(serde_json::Number::from(value))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// True for values the renderer leaves out of attribute text: the empty
    /// string. `false` is handled separately because it still counts as a
    /// present value for class lookup.
    pub fn is_blank(&self) -> bool {
        matches!(self, PropValue::Text(s) if s.is_empty())
    }

    /// Whether this value fits a declared prop kind.
    pub fn matches_kind(&self, kind: PropKind) -> bool {
        matches!(
            (self, kind),
            (PropValue::Text(_), PropKind::String)
                | (PropValue::Bool(_), PropKind::Boolean)
                | (PropValue::Number(_), PropKind::Number)
        )
    }

    /// The key used to look this value up in a variant table.
    ///
    /// Text matches by content, booleans and numbers by their canonical
    /// text. Structured values never match a variant.
    pub fn variant_key(&self) -> Option<Cow<'_, str>> {
        match self {
            PropValue::Text(s) => Some(Cow::Borrowed(s)),
            PropValue::Bool(b) => Some(Cow::Owned(b.to_string())),
            PropValue::Number(n) => Some(Cow::Owned(n.to_string())),
            PropValue::Structured(_) => None,
        }
    }

    /// Canonical JSON literal of the value, as used in braced expressions.
    pub fn to_literal(&self) -> String {
        match self {
            PropValue::Bool(b) => b.to_string(),
            PropValue::Number(n) => n.to_string(),
            PropValue::Text(s) => serde_json::Value::String(s.clone()).to_string(),
            PropValue::Structured(v) => v.to_string(),
        }
    }

    /// Convert an arbitrary JSON value, keeping primitives in their own
    /// variants.
    pub fn from_json(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Bool(b) => PropValue::Bool(b),
            serde_json::Value::Number(n) => PropValue::Number(n),
            serde_json::Value::String(s) => PropValue::Text(s),
            other => PropValue::Structured(other),
        }
    }
}

impl fmt::Display for PropValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropValue::Text(s) => f.write_str(s),
            other => f.write_str(&other.to_literal()),
        }
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        PropValue::Text(value.to_string())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        PropValue::Text(value)
    }
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        PropValue::Bool(value)
    }
}

impl From<i64> for PropValue {
    fn from(value: i64) -> Self {
        PropValue::integer(value)
    }
}
