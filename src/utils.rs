//! Utility functions
use crate::errors::{ApiError, ApiResult};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::str::FromStr;

/// Stand-in for any missing or blank positional value: `i32::MAX`, stringified.
pub const SENTINEL: &str = "2147483647";

/// String form of the value at `index`, or [`SENTINEL`] when the index is out
/// of range or the value is null/blank.
///
/// Arrays and objects have no string form and are reported as a decode error
/// against `field`.
pub fn value_or_sentinel(values: &[Value], index: usize, field: &'static str) -> ApiResult<String> {
    let text = match values.get(index) {
        None | Some(Value::Null) => return Ok(SENTINEL.to_string()),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(other) => return Err(ApiError::decode(field, other.to_string())),
    };

    if text.trim().is_empty() {
        Ok(SENTINEL.to_string())
    } else {
        Ok(text)
    }
}

/// Parse a positional field to its declared type.
pub fn parse_field<T: FromStr>(field: &'static str, raw: &str) -> ApiResult<T> {
    raw.parse::<T>().map_err(|_| ApiError::decode(field, raw))
}

/// Extract number from JSON value
pub fn num(v: &Value) -> Option<f64> {
    if let Some(x) = v.as_f64() {
        return Some(x);
    }
    if let Some(s) = v.as_str() {
        return s.trim().parse::<f64>().ok();
    }
    None
}

/// Accept either a JSON integer or a numeric string.
pub fn lenient_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    if let Some(n) = value.as_i64() {
        return Ok(n);
    }
    value
        .as_str()
        .and_then(|s| s.trim().parse::<i64>().ok())
        .ok_or_else(|| serde::de::Error::custom(format!("expected integer, got {}", value)))
}

/// Decode raw image bytes, guessing the format from the content.
pub fn decode_image(bytes: &[u8]) -> ApiResult<image::DynamicImage> {
    Ok(image::load_from_memory(bytes)?)
}
