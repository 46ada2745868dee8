use super::{MappingRegistry, REMOTE_DATA_KEY, UnificationError, UnificationErrorExt, fields};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tracing::{instrument, trace};
use uhub_domain::mapping::FieldMapping;
use uhub_domain::objects::ObjectType;

/// Per-call switches for [`Unifier::unify_one`] and [`Unifier::unify_many`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnifyOptions {
    /// Attach the untouched provider object to every canonical output under `remote_data`.
    pub remote_data: bool,
}

impl UnifyOptions {
    #[must_use]
    pub const fn with_remote_data(remote_data: bool) -> Self {
        Self { remote_data }
    }
}

/// The single entry point services use to translate data.
///
/// Validates field mappings, resolves the mapper for `(object type, provider)` and delegates
/// to it. Clones share the same registry.
#[derive(Debug, Clone)]
pub struct Unifier {
    registry: Arc<MappingRegistry>,
}

impl Unifier {
    #[must_use]
    pub fn new(registry: MappingRegistry) -> Self {
        Self { registry: Arc::new(registry) }
    }

    #[must_use]
    pub const fn from_shared(registry: Arc<MappingRegistry>) -> Self {
        Self { registry }
    }

    #[must_use]
    pub fn registry(&self) -> &MappingRegistry {
        &self.registry
    }

    /// Canonical object to provider payload.
    ///
    /// The mapper's output is returned as is.
    ///
    /// # Errors
    /// * [`UnificationError::MalformedFieldMapping`] for invalid `mappings`.
    /// * [`UnificationError::UnsupportedMapping`] when no mapper serves the pair.
    /// * [`UnificationError::Transform`] when the mapper rejects `source`.
    /// * [`UnificationError::Serialization`] when `source` cannot be encoded.
    #[instrument(level = "debug", skip_all, fields(%object_type, provider))]
    pub fn desunify<T>(
        &self,
        source: &T,
        object_type: ObjectType,
        provider: &str,
        mappings: &[FieldMapping],
    ) -> Result<Value, UnificationError>
    where
        T: Serialize + ?Sized,
    {
        fields::validate(mappings)?;
        let mapper = self.registry.resolve(object_type, provider)?;
        let source = serde_json::to_value(source).context("Encoding canonical object")?;

        let payload = mapper.desunify_value(source, mappings)?;
        trace!(?payload, "Desunified");
        Ok(payload)
    }

    /// Provider object to canonical object.
    ///
    /// # Errors
    /// Same kinds as [`Unifier::desunify`].
    #[instrument(level = "debug", skip_all, fields(%object_type, provider))]
    pub fn unify_one(
        &self,
        source: Value,
        object_type: ObjectType,
        provider: &str,
        mappings: &[FieldMapping],
        options: UnifyOptions,
    ) -> Result<Value, UnificationError> {
        fields::validate(mappings)?;
        let mapper = self.registry.resolve(object_type, provider)?;

        let raw = options.remote_data.then(|| source.clone());
        let unified = mapper.unify_value(source, mappings)?;
        Ok(attach_remote_data(unified, raw))
    }

    /// Provider objects to canonical objects, one for one and in input order.
    ///
    /// An empty input yields an empty output.
    ///
    /// # Errors
    /// Same kinds as [`Unifier::desunify`]. The first failing element aborts the batch and its
    /// index is recorded in the error context.
    #[instrument(level = "debug", skip_all, fields(%object_type, provider, count = source.len()))]
    pub fn unify_many(
        &self,
        source: Vec<Value>,
        object_type: ObjectType,
        provider: &str,
        mappings: &[FieldMapping],
        options: UnifyOptions,
    ) -> Result<Vec<Value>, UnificationError> {
        fields::validate(mappings)?;
        let mapper = self.registry.resolve(object_type, provider)?;

        source
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                let raw = options.remote_data.then(|| item.clone());
                mapper
                    .unify_value(item, mappings)
                    .map(|unified| attach_remote_data(unified, raw))
                    .map_err(|err| err.with_context(format!("element {index}")))
            })
            .collect()
    }

    /// [`Unifier::unify_one`] decoded into a canonical Rust type.
    ///
    /// # Errors
    /// Same kinds as [`Unifier::unify_one`], plus [`UnificationError::Serialization`] when the
    /// output does not decode as `O`.
    pub fn unify_one_as<O: DeserializeOwned>(
        &self,
        source: Value,
        object_type: ObjectType,
        provider: &str,
        mappings: &[FieldMapping],
        options: UnifyOptions,
    ) -> Result<O, UnificationError> {
        let unified = self.unify_one(source, object_type, provider, mappings, options)?;
        serde_json::from_value(unified).context("Decoding canonical object")
    }

    /// [`Unifier::unify_many`] decoded into a canonical Rust type.
    ///
    /// # Errors
    /// Same kinds as [`Unifier::unify_one_as`].
    pub fn unify_many_as<O: DeserializeOwned>(
        &self,
        source: Vec<Value>,
        object_type: ObjectType,
        provider: &str,
        mappings: &[FieldMapping],
        options: UnifyOptions,
    ) -> Result<Vec<O>, UnificationError> {
        self.unify_many(source, object_type, provider, mappings, options)?
            .into_iter()
            .map(|unified| serde_json::from_value(unified).context("Decoding canonical object"))
            .collect()
    }
}

fn attach_remote_data(mut unified: Value, raw: Option<Value>) -> Value {
    if let (Some(raw), Value::Object(object)) = (raw, &mut unified) {
        object.insert(REMOTE_DATA_KEY.to_owned(), raw);
    }
    unified
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unification::{CustomFieldValue, MapperFault, ProviderMapper, fields};
    use serde::Deserialize;
    use serde_json::{Map, json};
    use uhub_domain::objects::CrmObject;

    #[derive(Debug, Serialize, Deserialize)]
    struct UnifiedNote {
        content: String,
        #[serde(default)]
        field_mappings: Vec<CustomFieldValue>,
    }

    #[derive(Serialize)]
    struct AcmeNote {
        body: String,
        #[serde(flatten)]
        custom: Map<String, Value>,
    }

    #[derive(Deserialize)]
    struct AcmeNoteRead {
        body: String,
    }

    struct AcmeNoteMapper;

    impl ProviderMapper for AcmeNoteMapper {
        const OBJECT_TYPE: ObjectType = ObjectType::Crm(CrmObject::Note);
        const PROVIDER: &'static str = "acme";

        type UnifiedInput = UnifiedNote;
        type UnifiedOutput = UnifiedNote;
        type RemoteInput = AcmeNote;
        type RemoteOutput = AcmeNoteRead;

        fn desunify(&self, source: UnifiedNote, mappings: &[FieldMapping]) -> Result<AcmeNote, MapperFault> {
            let custom = fields::project_outbound(&source.field_mappings, mappings);
            Ok(AcmeNote { body: source.content, custom })
        }

        fn unify(
            &self,
            source: AcmeNoteRead,
            raw: &Map<String, Value>,
            mappings: &[FieldMapping],
        ) -> Result<UnifiedNote, MapperFault> {
            if source.body.is_empty() {
                return Err(MapperFault::missing("body"));
            }
            let field_mappings = fields::project_inbound(raw, mappings);
            Ok(UnifiedNote { content: source.body, field_mappings })
        }
    }

    const NOTE: ObjectType = ObjectType::Crm(CrmObject::Note);

    fn unifier() -> Unifier {
        Unifier::new(MappingRegistry::builder().mapper(AcmeNoteMapper).build())
    }

    #[test]
    fn unify_many_preserves_order_and_length() {
        let source = vec![json!({"body": "a"}), json!({"body": "b"}), json!({"body": "c"})];
        let notes: Vec<UnifiedNote> =
            unifier().unify_many_as(source, NOTE, "acme", &[], UnifyOptions::default()).unwrap();
        let contents: Vec<_> = notes.iter().map(|n| n.content.as_str()).collect();
        assert_eq!(contents, ["a", "b", "c"]);
    }

    #[test]
    fn unify_many_of_nothing_is_nothing() {
        let out = unifier().unify_many(Vec::new(), NOTE, "acme", &[], UnifyOptions::default()).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn unify_many_tags_the_failing_element() {
        let source = vec![json!({"body": "a"}), json!({"body": ""})];
        let err = unifier().unify_many(source, NOTE, "acme", &[], UnifyOptions::default()).unwrap_err();
        assert!(matches!(err, UnificationError::Transform { ref field, .. } if field == "body"));
        assert!(err.to_string().contains("(element 1)"));
    }

    #[test]
    fn remote_data_carries_the_raw_provider_object() {
        let raw = json!({"body": "a", "cf_1": 5});
        let out = unifier()
            .unify_one(raw.clone(), NOTE, "acme", &[], UnifyOptions::with_remote_data(true))
            .unwrap();
        assert_eq!(out[REMOTE_DATA_KEY], raw);

        let plain = unifier().unify_one(raw, NOTE, "acme", &[], UnifyOptions::default()).unwrap();
        assert!(plain.get(REMOTE_DATA_KEY).is_none());
    }

    #[test]
    fn field_mappings_are_validated_before_lookup() {
        let mappings = [FieldMapping::new("", "cf_1")];
        let err = unifier()
            .desunify(&json!({"content": "x"}), NOTE, "unknown", &mappings)
            .unwrap_err();
        assert!(matches!(err, UnificationError::MalformedFieldMapping { index: 0, .. }));
    }

    #[test]
    fn desunify_returns_the_mapper_output() {
        let note = UnifiedNote { content: "x".into(), field_mappings: vec![CustomFieldValue::new("tier", "gold")] };
        let payload = unifier()
            .desunify(&note, NOTE, "ACME", &[FieldMapping::new("tier", "cf_tier")])
            .unwrap();
        assert_eq!(payload, json!({"body": "x", "cf_tier": "gold"}));
    }
}
