//! Scalar field values shared by all record types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A scalar JSON value as it appears in a record field.
///
/// securelog-server emits ids as strings for clients and as integers for
/// searches, and timestamps as RFC 3339 strings. Views only ever display
/// these values, so they are kept in their wire form and rendered verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    /// Arrays or objects where a scalar was expected; rendered as JSON.
    Other(serde_json::Value),
}

impl FieldValue {
    /// Display text for an optional field; missing or `null` renders empty.
    pub fn display_opt(value: &Option<FieldValue>) -> String {
        value.as_ref().map(ToString::to_string).unwrap_or_default()
    }

    /// The value as a string slice, if it is text.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Integer(n) => write!(f, "{}", n),
            FieldValue::Float(n) => write!(f, "{}", n),
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Other(v) => write!(f, "{}", v),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_value_untagged_variants() {
        let values: Vec<FieldValue> =
            serde_json::from_str(r#"[true, 7, 2.5, "text", [1, 2]]"#).unwrap();

        assert_eq!(values[0], FieldValue::Bool(true));
        assert_eq!(values[1], FieldValue::Integer(7));
        assert_eq!(values[2], FieldValue::Float(2.5));
        assert_eq!(values[3], FieldValue::Text("text".to_string()));
        assert!(matches!(values[4], FieldValue::Other(_)));
    }

    #[test]
    fn test_field_value_display() {
        assert_eq!(FieldValue::Bool(false).to_string(), "false");
        assert_eq!(FieldValue::Integer(-3).to_string(), "-3");
        assert_eq!(FieldValue::Float(0.5).to_string(), "0.5");
        assert_eq!(FieldValue::from("2024-01-01").to_string(), "2024-01-01");
        assert_eq!(
            FieldValue::Other(serde_json::json!(["a", 1])).to_string(),
            r#"["a",1]"#
        );
    }

    #[test]
    fn test_display_opt_missing_is_empty() {
        assert_eq!(FieldValue::display_opt(&None), "");
        assert_eq!(FieldValue::display_opt(&Some(FieldValue::Integer(1))), "1");
    }
}
