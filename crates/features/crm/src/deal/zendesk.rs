use super::{OBJECT_TYPE, UnifiedDealInput, UnifiedDealOutput};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uhub_domain::constants::ZENDESK;
use uhub_domain::mapping::FieldMapping;
use uhub_domain::objects::ObjectType;
use uhub_kernel::unification::convert::{amount, lenient, numeric_id, required};
use uhub_kernel::unification::{MapperFault, ProviderMapper, fields};

/// Deal payload accepted by Zendesk Sell. Custom fields are nested under `custom_fields`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ZendeskDealInput {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage_id: Option<i64>,
    /// Organisation contact the deal belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub custom_fields: Map<String, Value>,
}

/// Deal as returned by Zendesk Sell. `value` comes back as a decimal string.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ZendeskDealOutput {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub name: String,
    #[serde(default)]
    pub value: Value,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<i64>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub stage_id: Option<i64>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub contact_id: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub custom_fields: Map<String, Value>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ZendeskDealMapper;

impl ProviderMapper for ZendeskDealMapper {
    const OBJECT_TYPE: ObjectType = OBJECT_TYPE;
    const PROVIDER: &'static str = ZENDESK;

    type UnifiedInput = UnifiedDealInput;
    type UnifiedOutput = UnifiedDealOutput;
    type RemoteInput = ZendeskDealInput;
    type RemoteOutput = ZendeskDealOutput;

    fn desunify(
        &self,
        source: UnifiedDealInput,
        mappings: &[FieldMapping],
    ) -> Result<ZendeskDealInput, MapperFault> {
        Ok(ZendeskDealInput {
            owner_id: numeric_id("user_id", source.user_id.as_deref())?,
            stage_id: numeric_id("stage_id", source.stage_id.as_deref())?,
            contact_id: numeric_id("company_id", source.company_id.as_deref())?,
            custom_fields: fields::project_outbound(&source.field_mappings, mappings),
            name: required("name", source.name)?,
            value: source.amount,
        })
    }

    fn unify(
        &self,
        source: ZendeskDealOutput,
        _: &Map<String, Value>,
        mappings: &[FieldMapping],
    ) -> Result<UnifiedDealOutput, MapperFault> {
        Ok(UnifiedDealOutput {
            remote_id: source.id.map(|id| id.to_string()),
            amount: amount(&source.value),
            user_id: source.owner_id.map(|id| id.to_string()),
            stage_id: source.stage_id.map(|id| id.to_string()),
            company_id: source.contact_id.map(|id| id.to_string()),
            field_mappings: fields::project_inbound(&source.custom_fields, mappings),
            name: source.name,
            ..UnifiedDealOutput::default()
        })
    }
}
