//! Label values attached to log entries
//!
//! Labels are a closed set of value types so that every formatter can
//! render them exhaustively and serialization stays deterministic.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Ordered label map; iteration and serialization follow key order
pub type Labels = BTreeMap<String, LabelValue>;

/// Value type for entry labels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LabelValue {
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl fmt::Display for LabelValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabelValue::String(s) => write!(f, "{}", s),
            LabelValue::Int(i) => write!(f, "{}", i),
            LabelValue::Float(fl) => write!(f, "{}", fl),
            LabelValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl LabelValue {
    /// Convert to serde_json::Value for JSON serialization
    ///
    /// Non-finite floats have no JSON representation and become `null`.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        match self {
            LabelValue::String(s) => serde_json::Value::String(s.clone()),
            LabelValue::Int(i) => serde_json::Value::Number((*i).into()),
            LabelValue::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            LabelValue::Bool(b) => serde_json::Value::Bool(*b),
        }
    }
}

impl From<String> for LabelValue {
    fn from(s: String) -> Self {
        LabelValue::String(s)
    }
}

impl From<&str> for LabelValue {
    fn from(s: &str) -> Self {
        LabelValue::String(s.to_string())
    }
}

impl From<i64> for LabelValue {
    fn from(i: i64) -> Self {
        LabelValue::Int(i)
    }
}

impl From<i32> for LabelValue {
    fn from(i: i32) -> Self {
        LabelValue::Int(i64::from(i))
    }
}

impl From<u32> for LabelValue {
    fn from(i: u32) -> Self {
        LabelValue::Int(i64::from(i))
    }
}

impl From<u16> for LabelValue {
    fn from(i: u16) -> Self {
        LabelValue::Int(i64::from(i))
    }
}

impl From<f64> for LabelValue {
    fn from(f: f64) -> Self {
        LabelValue::Float(f)
    }
}

impl From<bool> for LabelValue {
    fn from(b: bool) -> Self {
        LabelValue::Bool(b)
    }
}

/// Render labels as JSON object members
pub(crate) fn labels_to_json(labels: &Labels) -> serde_json::Map<String, serde_json::Value> {
    labels
        .iter()
        .map(|(k, v)| (k.clone(), v.to_json_value()))
        .collect()
}

/// Format labels as space separated key=value pairs
pub(crate) fn format_labels(labels: &Labels) -> String {
    labels
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join(" ")
}
