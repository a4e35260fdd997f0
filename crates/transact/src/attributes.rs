//! Attribute values for element markers.
//!
//! An element marker (the opening half of `{type: "T", attributes: {...}}`)
//! carries a map of these. The `attribute` op changes exactly one entry of
//! that map at a time rather than composing whole maps the way a
//! Quill-style retain-attribute does, so unlike `quillai_delta` this crate
//! has no map-level compose/diff/transform/invert — only the value type
//! itself is shared with that model.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A value assigned to an element attribute.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    String(String),
    Number(i64),
    Boolean(bool),
    StringList(Vec<String>),
    /// Represents attribute removal (`to: undefined` on the wire).
    Null,
}

impl AttributeValue {
    pub fn is_null(&self) -> bool {
        matches!(self, AttributeValue::Null)
    }
}

impl From<String> for AttributeValue {
    fn from(s: String) -> Self {
        AttributeValue::String(s)
    }
}

impl From<&str> for AttributeValue {
    fn from(s: &str) -> Self {
        AttributeValue::String(s.to_string())
    }
}

impl From<i64> for AttributeValue {
    fn from(n: i64) -> Self {
        AttributeValue::Number(n)
    }
}

impl From<i32> for AttributeValue {
    fn from(n: i32) -> Self {
        AttributeValue::Number(n as i64)
    }
}

impl From<bool> for AttributeValue {
    fn from(b: bool) -> Self {
        AttributeValue::Boolean(b)
    }
}

/// Attribute map carried by an opening element marker. `BTreeMap` for
/// deterministic ordering under equality and serialization, same rationale
/// as `quillai_delta::AttributeMap`.
pub type AttributeMap = BTreeMap<String, AttributeValue>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions_roundtrip() {
        let v: AttributeValue = "bullet".into();
        assert_eq!(v, AttributeValue::String("bullet".to_string()));
        let v: AttributeValue = 2i32.into();
        assert_eq!(v, AttributeValue::Number(2));
        let v: AttributeValue = true.into();
        assert_eq!(v, AttributeValue::Boolean(true));
    }

    #[test]
    fn null_is_null() {
        assert!(AttributeValue::Null.is_null());
        assert!(!AttributeValue::Boolean(false).is_null());
    }
}
