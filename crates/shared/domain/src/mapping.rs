use serde::{Deserialize, Serialize};

/// Describes how one custom field's canonical name relates to its provider-specific key.
///
/// Supplied per request by the caller; never persisted by the mapping engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldMapping {
    /// Canonical custom-field identifier.
    pub slug: String,
    /// Provider-specific field key.
    pub remote_id: String,
}

impl FieldMapping {
    pub fn new(slug: impl Into<String>, remote_id: impl Into<String>) -> Self {
        Self { slug: slug.into(), remote_id: remote_id.into() }
    }
}
