#![allow(dead_code, unreachable_pub)]

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uhub_kernel::prelude::*;
use uhub_kernel::unification::fields;

pub const NOTE: ObjectType = ObjectType::Crm(CrmObject::Note);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnifiedNote {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote_id: Option<String>,
    pub content: String,
    #[serde(default)]
    pub field_mappings: Vec<CustomFieldValue>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AcmeNote {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub body: String,
    #[serde(flatten)]
    pub custom: Map<String, Value>,
}

/// Flat provider keeping custom fields next to its standard ones.
#[derive(Debug)]
pub struct AcmeNoteMapper;

impl ProviderMapper for AcmeNoteMapper {
    const OBJECT_TYPE: ObjectType = NOTE;
    const PROVIDER: &'static str = "acme";

    type UnifiedInput = UnifiedNote;
    type UnifiedOutput = UnifiedNote;
    type RemoteInput = AcmeNote;
    type RemoteOutput = AcmeNote;

    fn desunify(&self, source: UnifiedNote, mappings: &[FieldMapping]) -> Result<AcmeNote, MapperFault> {
        if source.content.trim().is_empty() {
            return Err(MapperFault::missing("content"));
        }
        let custom = fields::project_outbound(&source.field_mappings, mappings);
        Ok(AcmeNote { id: None, body: source.content, custom })
    }

    fn unify(
        &self,
        source: AcmeNote,
        raw: &Map<String, Value>,
        mappings: &[FieldMapping],
    ) -> Result<UnifiedNote, MapperFault> {
        Ok(UnifiedNote {
            remote_id: source.id,
            content: source.body,
            field_mappings: fields::project_inbound(raw, mappings),
        })
    }
}

/// Second provider for the same object type, registered under another name.
#[derive(Debug)]
pub struct GlobexNoteMapper;

impl ProviderMapper for GlobexNoteMapper {
    const OBJECT_TYPE: ObjectType = NOTE;
    const PROVIDER: &'static str = "globex";

    type UnifiedInput = UnifiedNote;
    type UnifiedOutput = UnifiedNote;
    type RemoteInput = Value;
    type RemoteOutput = Value;

    fn desunify(&self, source: UnifiedNote, mappings: &[FieldMapping]) -> Result<Value, MapperFault> {
        let mut payload = Map::new();
        payload.insert("text".to_owned(), Value::String(source.content));
        fields::merge_into(&mut payload, fields::project_outbound(&source.field_mappings, mappings));
        Ok(Value::Object(payload))
    }

    fn unify(
        &self,
        source: Value,
        _: &Map<String, Value>,
        mappings: &[FieldMapping],
    ) -> Result<UnifiedNote, MapperFault> {
        let Value::Object(object) = source else {
            return Err(MapperFault::new("$", "expected an object"));
        };
        let content = object
            .get("text")
            .and_then(Value::as_str)
            .ok_or_else(|| MapperFault::missing("text"))?
            .to_owned();
        Ok(UnifiedNote {
            remote_id: None,
            content,
            field_mappings: fields::project_inbound(&object, mappings),
        })
    }
}

pub fn unifier() -> Unifier {
    Unifier::new(MappingRegistry::builder().mapper(AcmeNoteMapper).mapper(GlobexNoteMapper).build())
}
