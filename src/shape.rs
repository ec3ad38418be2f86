//! Field-level shape checks over untyped JSON values.
//!
//! Each helper answers a single question about a value and never panics, so
//! callers can turn a `None` into the matching diagnostic.

use serde_json::{Map, Value};

pub type Object = Map<String, Value>;

/// Returns the elements when `value` is a JSON array.
pub fn as_sequence(value: &Value) -> Option<&[Value]> {
    value.as_array().map(Vec::as_slice)
}

/// Returns the fields when `value` is a JSON object.
pub fn as_object(value: &Value) -> Option<&Object> {
    value.as_object()
}

/// Returns the field when it is present and a JSON string.
pub fn text_field<'a>(object: &'a Object, key: &str) -> Option<&'a str> {
    object.get(key).and_then(Value::as_str)
}

/// Returns the field coerced to `f64` when it is present and a JSON number,
/// integer or floating-point. Booleans, strings and null are rejected.
pub fn number_field(object: &Object, key: &str) -> Option<f64> {
    match object.get(key) {
        Some(Value::Number(number)) => number.as_f64(),
        _ => None,
    }
}
