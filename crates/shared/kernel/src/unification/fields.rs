//! Custom-field projection.
//!
//! Canonical objects carry their custom fields as an ordered list of single-entry objects,
//! `[{"priority": "high"}, {"region": null}]`. Field mappings supplied with each request tell
//! which provider key (`remote_id`) holds the value of each canonical `slug`.

use super::UnificationError;
use fxhash::FxHashSet;
use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;
use uhub_domain::mapping::FieldMapping;

/// One canonical custom-field value, serialized as `{"<slug>": <value | null>}`.
///
/// A JSON `null` and an absent value are the same thing here.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomFieldValue {
    pub slug: String,
    pub value: Option<Value>,
}

impl CustomFieldValue {
    pub fn new(slug: impl Into<String>, value: impl Into<Value>) -> Self {
        let value = value.into();
        Self { slug: slug.into(), value: (!value.is_null()).then_some(value) }
    }

    /// A slug whose value the provider did not return.
    pub fn missing(slug: impl Into<String>) -> Self {
        Self { slug: slug.into(), value: None }
    }

    #[must_use]
    pub const fn is_missing(&self) -> bool {
        self.value.is_none()
    }
}

impl Serialize for CustomFieldValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.slug, &self.value)?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for CustomFieldValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SingleEntry;

        impl<'de> Visitor<'de> for SingleEntry {
            type Value = CustomFieldValue;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object with exactly one `slug: value` entry")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let Some((slug, value)) = map.next_entry::<String, Option<Value>>()? else {
                    return Err(de::Error::invalid_length(0, &self));
                };
                let mut extra = 0;
                while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {
                    extra += 1;
                }
                if extra > 0 {
                    return Err(de::Error::invalid_length(extra + 1, &self));
                }
                Ok(CustomFieldValue { slug, value })
            }
        }

        deserializer.deserialize_map(SingleEntry)
    }
}

/// Checks a request's field mappings before any mapper sees them.
///
/// # Errors
/// [`UnificationError::MalformedFieldMapping`] for a blank `slug` or `remote_id`, or for a
/// `slug` listed twice. The index is that of the offending entry.
pub fn validate(mappings: &[FieldMapping]) -> Result<(), UnificationError> {
    let mut seen = FxHashSet::default();

    for (index, mapping) in mappings.iter().enumerate() {
        let message = if mapping.slug.trim().is_empty() {
            "slug must not be empty".into()
        } else if mapping.remote_id.trim().is_empty() {
            format!("remote_id for slug '{}' must not be empty", mapping.slug).into()
        } else if !seen.insert(mapping.slug.as_str()) {
            format!("duplicate slug '{}'", mapping.slug).into()
        } else {
            continue;
        };
        return Err(UnificationError::MalformedFieldMapping { index, message, context: None });
    }

    Ok(())
}

/// Canonical custom fields to provider keys.
///
/// For each mapping, in order, the value stored under its `slug` lands under its `remote_id`.
/// Slugs without a value are skipped. If a slug appears more than once among `values`, its
/// first occurrence decides.
#[must_use]
pub fn project_outbound(values: &[CustomFieldValue], mappings: &[FieldMapping]) -> Map<String, Value> {
    let mut projected = Map::new();

    for mapping in mappings {
        let value = values
            .iter()
            .find(|field| field.slug == mapping.slug)
            .and_then(|field| field.value.as_ref());
        if let Some(value) = value {
            projected.insert(mapping.remote_id.clone(), value.clone());
        }
    }

    projected
}

/// Provider keys to canonical custom fields.
///
/// Emits exactly one entry per mapping, in mapping order. A `remote_id` missing from `remote`
/// still yields its slug, with no value.
#[must_use]
pub fn project_inbound(remote: &Map<String, Value>, mappings: &[FieldMapping]) -> Vec<CustomFieldValue> {
    mappings
        .iter()
        .map(|mapping| CustomFieldValue {
            slug: mapping.slug.clone(),
            value: remote.get(&mapping.remote_id).filter(|value| !value.is_null()).cloned(),
        })
        .collect()
}

/// Writes projected custom keys over a provider payload. Custom keys win on collision.
pub fn merge_into(target: &mut Map<String, Value>, custom: Map<String, Value>) {
    for (key, value) in custom {
        target.insert(key, value);
    }
}
