//! Conversions from the extraction model to OpenTelemetry key-values.
//!
//! Both attribute name representations map onto `Key`, which is
//! string-backed; the symbolic/textual distinction carries no further
//! meaning on the wire.

use opentelemetry::trace::Span;
use opentelemetry::{Key, KeyValue, Value};
use span_attrs_core::{AttrName, AttrValue, AttributeSet};

pub fn to_key(name: &AttrName) -> Key {
    Key::new(name.as_str().to_string())
}

pub fn to_value(value: &AttrValue) -> Value {
    match value {
        AttrValue::Bool(b) => Value::Bool(*b),
        AttrValue::Int(i) => Value::I64(*i),
        AttrValue::Float(f) => Value::F64(*f),
        AttrValue::String(s) => Value::String(s.clone().into()),
    }
}

/// Convert a finished attribute set into OTel key-values, preserving
/// the set's emission order.
pub fn to_key_values(attrs: &AttributeSet) -> Vec<KeyValue> {
    attrs
        .iter()
        .map(|(name, value)| KeyValue::new(to_key(name), to_value(value)))
        .collect()
}

/// Record every attribute of the set on an OTel span.
pub fn record_on_span<S: Span>(span: &mut S, attrs: &AttributeSet) {
    for kv in to_key_values(attrs) {
        span.set_attribute(kv);
    }
}
