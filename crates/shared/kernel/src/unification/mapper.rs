use super::{UnificationError, UnificationErrorExt, WHOLE_PAYLOAD};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::borrow::Cow;
use uhub_domain::mapping::FieldMapping;
use uhub_domain::objects::ObjectType;

/// A mapper could not build its output from the data it was given.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {message}")]
pub struct MapperFault {
    /// Offending field, named as the side being read knows it.
    pub field: Cow<'static, str>,
    pub message: Cow<'static, str>,
}

impl MapperFault {
    pub fn new(field: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self { field: field.into(), message: message.into() }
    }

    /// A mandatory field was absent or empty.
    pub fn missing(field: impl Into<Cow<'static, str>>) -> Self {
        Self::new(field, "required field is missing")
    }
}

/// Bidirectional translation between one canonical object type and one provider.
///
/// Implementations are pure: no I/O, no shared state. They fill in provider defaults for
/// optional canonical fields and report a [`MapperFault`] only when a mandatory value is absent.
/// Field mappings reaching a mapper have already been validated.
pub trait ProviderMapper: Send + Sync + 'static {
    const OBJECT_TYPE: ObjectType;
    /// Lower-case provider name the mapper is registered under.
    const PROVIDER: &'static str;

    type UnifiedInput: DeserializeOwned;
    type UnifiedOutput: Serialize;
    type RemoteInput: Serialize;
    type RemoteOutput: DeserializeOwned;

    /// Canonical object to provider payload.
    ///
    /// # Errors
    /// A [`MapperFault`] naming the canonical field the provider cannot do without.
    fn desunify(
        &self,
        source: Self::UnifiedInput,
        mappings: &[FieldMapping],
    ) -> Result<Self::RemoteInput, MapperFault>;

    /// Provider object to canonical object.
    ///
    /// `raw` is the same provider object before typed decoding. Providers that keep custom
    /// fields next to their standard ones project from it, so a mapping may name a standard key.
    /// It is empty when the provider sent something other than a JSON object.
    ///
    /// # Errors
    /// A [`MapperFault`] naming the provider field that could not be read.
    fn unify(
        &self,
        source: Self::RemoteOutput,
        raw: &Map<String, Value>,
        mappings: &[FieldMapping],
    ) -> Result<Self::UnifiedOutput, MapperFault>;
}

/// Object-safe view of a [`ProviderMapper`] over JSON values, as stored in the registry.
pub trait DynMapper: Send + Sync {
    fn object_type(&self) -> ObjectType;

    fn provider(&self) -> &'static str;

    /// # Errors
    /// [`UnificationError::Transform`] when `source` is not a valid canonical input or the
    /// mapper rejects it, [`UnificationError::Serialization`] when the payload cannot be encoded.
    fn desunify_value(
        &self,
        source: Value,
        mappings: &[FieldMapping],
    ) -> Result<Value, UnificationError>;

    /// # Errors
    /// [`UnificationError::Transform`] when `source` is not a valid provider object or the
    /// mapper rejects it, [`UnificationError::Serialization`] when the result cannot be encoded.
    fn unify_value(&self, source: Value, mappings: &[FieldMapping]) -> Result<Value, UnificationError>;
}

impl<M: ProviderMapper> DynMapper for M {
    fn object_type(&self) -> ObjectType {
        M::OBJECT_TYPE
    }

    fn provider(&self) -> &'static str {
        M::PROVIDER
    }

    fn desunify_value(
        &self,
        source: Value,
        mappings: &[FieldMapping],
    ) -> Result<Value, UnificationError> {
        let input = serde_json::from_value::<M::UnifiedInput>(source).map_err(|err| {
            UnificationError::transform(M::OBJECT_TYPE, M::PROVIDER, WHOLE_PAYLOAD, err.to_string())
        })?;
        let payload = self.desunify(input, mappings).map_err(fault_error::<M>)?;

        serde_json::to_value(payload).context("Encoding provider payload")
    }

    fn unify_value(&self, source: Value, mappings: &[FieldMapping]) -> Result<Value, UnificationError> {
        let remote = M::RemoteOutput::deserialize(&source).map_err(|err| {
            UnificationError::transform(M::OBJECT_TYPE, M::PROVIDER, WHOLE_PAYLOAD, err.to_string())
        })?;
        let empty = Map::new();
        let raw = source.as_object().unwrap_or(&empty);
        let unified = self.unify(remote, raw, mappings).map_err(fault_error::<M>)?;

        serde_json::to_value(unified).context("Encoding canonical object")
    }
}

fn fault_error<M: ProviderMapper>(fault: MapperFault) -> UnificationError {
    UnificationError::transform(M::OBJECT_TYPE, M::PROVIDER, fault.field, fault.message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;
    use uhub_domain::objects::TicketingObject;

    #[derive(Deserialize)]
    struct Input {
        name: Option<String>,
    }

    #[derive(Serialize, Deserialize)]
    struct Payload {
        title: String,
    }

    struct Echo;

    impl ProviderMapper for Echo {
        const OBJECT_TYPE: ObjectType = ObjectType::Ticketing(TicketingObject::Tag);
        const PROVIDER: &'static str = "echo";

        type UnifiedInput = Input;
        type UnifiedOutput = Payload;
        type RemoteInput = Payload;
        type RemoteOutput = Payload;

        fn desunify(&self, source: Input, _: &[FieldMapping]) -> Result<Payload, MapperFault> {
            let title = source.name.ok_or_else(|| MapperFault::missing("name"))?;
            Ok(Payload { title })
        }

        fn unify(
            &self,
            source: Payload,
            _: &Map<String, Value>,
            _: &[FieldMapping],
        ) -> Result<Payload, MapperFault> {
            Ok(source)
        }
    }

    /// Keeps only the standard key in its typed output; custom fields come from the raw object.
    struct Flat;

    impl ProviderMapper for Flat {
        const OBJECT_TYPE: ObjectType = ObjectType::Ticketing(TicketingObject::Tag);
        const PROVIDER: &'static str = "flat";

        type UnifiedInput = Value;
        type UnifiedOutput = Vec<crate::unification::CustomFieldValue>;
        type RemoteInput = Value;
        type RemoteOutput = Payload;

        fn desunify(&self, source: Value, _: &[FieldMapping]) -> Result<Value, MapperFault> {
            Ok(source)
        }

        fn unify(
            &self,
            _: Payload,
            raw: &Map<String, Value>,
            mappings: &[FieldMapping],
        ) -> Result<Self::UnifiedOutput, MapperFault> {
            Ok(crate::unification::fields::project_inbound(raw, mappings))
        }
    }

    #[test]
    fn dyn_mapper_reports_identity() {
        let mapper: &dyn DynMapper = &Echo;
        assert_eq!(mapper.provider(), "echo");
        assert_eq!(mapper.object_type().to_string(), "ticketing.tag");
    }

    #[test]
    fn mapper_faults_become_transform_errors() {
        let err = Echo.desunify_value(json!({}), &[]).unwrap_err();
        let UnificationError::Transform { field, provider, .. } = err else {
            panic!("expected a transform error, got {err:?}");
        };
        assert_eq!(field, "name");
        assert_eq!(provider, "echo");
    }

    #[test]
    fn shape_errors_name_the_whole_payload() {
        let err = Echo.unify_value(json!("not an object"), &[]).unwrap_err();
        assert!(matches!(err, UnificationError::Transform { ref field, .. } if field == WHOLE_PAYLOAD));
    }

    #[test]
    fn unify_sees_keys_claimed_by_the_typed_output() {
        let mappings = [FieldMapping::new("headline", "title")];
        let unified = Flat.unify_value(json!({"title": "vip"}), &mappings).unwrap();
        assert_eq!(unified, json!([{"headline": "vip"}]));
    }

    #[test]
    fn values_flow_through_the_typed_mapper() {
        assert_eq!(Echo.desunify_value(json!({"name": "vip"}), &[]).unwrap(), json!({"title": "vip"}));
        assert_eq!(Echo.unify_value(json!({"title": "vip"}), &[]).unwrap(), json!({"title": "vip"}));
    }
}
