//! Wire-safe attribute values and the normalization boundary.
//!
//! Only a fixed set of scalar kinds may cross onto a span: boolean
//! `true`, integers, floats, and strings. `false` and null are dropped
//! outright, and anything structured is rendered to a diagnostic string.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::fmt::Write as _;

/// A scalar value permitted to appear directly on a span attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AttrValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Bool(b) => write!(f, "{b}"),
            AttrValue::Int(i) => write!(f, "{i}"),
            AttrValue::Float(v) => write!(f, "{v}"),
            AttrValue::String(s) => write!(f, "{s}"),
        }
    }
}

impl From<bool> for AttrValue {
    fn from(v: bool) -> Self {
        AttrValue::Bool(v)
    }
}

impl From<i64> for AttrValue {
    fn from(v: i64) -> Self {
        AttrValue::Int(v)
    }
}

impl From<f64> for AttrValue {
    fn from(v: f64) -> Self {
        AttrValue::Float(v)
    }
}

impl From<&str> for AttrValue {
    fn from(v: &str) -> Self {
        AttrValue::String(v.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(v: String) -> Self {
        AttrValue::String(v)
    }
}

/// Normalize a captured value into its wire-safe form.
///
/// Returns `None` for values that must not be emitted at all: null and
/// boolean `false`. Scalars pass through unchanged; arrays and objects
/// are replaced with [`render`] output.
pub fn normalize(value: &Value) -> Option<AttrValue> {
    match value {
        Value::Null => None,
        Value::Bool(false) => None,
        Value::Bool(true) => Some(AttrValue::Bool(true)),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(AttrValue::Int(i))
            } else {
                // u64 beyond i64::MAX, or a float; i64 is the only wire
                // integer kind.
                n.as_f64().map(AttrValue::Float)
            }
        }
        Value::String(s) => Some(AttrValue::String(s.clone())),
        Value::Array(_) | Value::Object(_) => Some(AttrValue::String(render(value))),
    }
}

/// Deterministic, human-readable rendering of a structured value.
///
/// Intended for diagnostic display only; not guaranteed parseable.
pub fn render(value: &Value) -> String {
    let mut out = String::new();
    write_value(&mut out, value);
    out
}

fn write_value(out: &mut String, value: &Value) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => {
            let _ = write!(out, "{b}");
        }
        Value::Number(n) => {
            let _ = write!(out, "{n}");
        }
        Value::String(s) => {
            let _ = write!(out, "{s:?}");
        }
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_value(out, item);
            }
            out.push(']');
        }
        Value::Object(map) => {
            out.push('{');
            for (i, (key, val)) in map.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                let _ = write!(out, "{key:?}: ");
                write_value(out, val);
            }
            out.push('}');
        }
    }
}
