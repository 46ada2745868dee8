//! Value coercions shared by provider mappers.
//!
//! Canonical identifiers are strings; providers use numbers, strings or `{ "id": .. }` objects.

use super::MapperFault;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::borrow::Cow;

/// Reads a provider field, falling back to `T::default()` when the value has another shape.
///
/// Use with `#[serde(default, deserialize_with = "lenient")]` on provider output structs so
/// one odd field (or a custom value written over a standard key) does not reject the object.
///
/// # Errors
/// Only when the underlying input is not valid JSON.
pub fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Parses an optional canonical identifier for a provider with numeric ids.
///
/// # Errors
/// A [`MapperFault`] on `field` when the identifier is not an integer.
pub fn numeric_id(
    field: impl Into<Cow<'static, str>>,
    id: Option<&str>,
) -> Result<Option<i64>, MapperFault> {
    let Some(id) = id.map(str::trim).filter(|id| !id.is_empty()) else {
        return Ok(None);
    };
    id.parse()
        .map(Some)
        .map_err(|_| MapperFault::new(field, format!("'{id}' is not a numeric identifier")))
}

/// Reads an identifier written as a number, a string, or an object with an `id` key.
#[must_use]
pub fn ref_id(value: &Value) -> Option<String> {
    match value {
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Object(object) => object.get("id").and_then(ref_id),
        _ => None,
    }
}

/// Reads a monetary amount written as a number or a numeric string.
#[must_use]
pub fn amount(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Non-empty string or a fault naming `field`.
///
/// # Errors
/// A [`MapperFault::missing`] when `value` is blank.
pub fn required(field: &'static str, value: String) -> Result<String, MapperFault> {
    if value.trim().is_empty() { Err(MapperFault::missing(field)) } else { Ok(value) }
}
