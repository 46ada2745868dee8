use super::{OBJECT_TYPE, UnifiedDealInput, UnifiedDealOutput};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uhub_domain::constants::PIPEDRIVE;
use uhub_domain::mapping::FieldMapping;
use uhub_domain::objects::ObjectType;
use uhub_kernel::unification::convert::{amount, lenient, numeric_id, ref_id, required};
use uhub_kernel::unification::{MapperFault, ProviderMapper, fields};

/// Deal payload accepted by Pipedrive. Custom fields are top-level hash keys.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PipedriveDealInput {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org_id: Option<i64>,
    #[serde(flatten)]
    pub custom: Map<String, Value>,
}

/// Deal as returned by Pipedrive. Related records are expanded to `{ id, name, .. }` objects.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PipedriveDealOutput {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub title: String,
    #[serde(default)]
    pub value: Value,
    #[serde(default)]
    pub user_id: Value,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub stage_id: Option<i64>,
    #[serde(default)]
    pub org_id: Value,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PipedriveDealMapper;

impl ProviderMapper for PipedriveDealMapper {
    const OBJECT_TYPE: ObjectType = OBJECT_TYPE;
    const PROVIDER: &'static str = PIPEDRIVE;

    type UnifiedInput = UnifiedDealInput;
    type UnifiedOutput = UnifiedDealOutput;
    type RemoteInput = PipedriveDealInput;
    type RemoteOutput = PipedriveDealOutput;

    fn desunify(
        &self,
        source: UnifiedDealInput,
        mappings: &[FieldMapping],
    ) -> Result<PipedriveDealInput, MapperFault> {
        Ok(PipedriveDealInput {
            user_id: numeric_id("user_id", source.user_id.as_deref())?,
            stage_id: numeric_id("stage_id", source.stage_id.as_deref())?,
            org_id: numeric_id("company_id", source.company_id.as_deref())?,
            custom: fields::project_outbound(&source.field_mappings, mappings),
            title: required("name", source.name)?,
            value: source.amount,
        })
    }

    fn unify(
        &self,
        source: PipedriveDealOutput,
        raw: &Map<String, Value>,
        mappings: &[FieldMapping],
    ) -> Result<UnifiedDealOutput, MapperFault> {
        Ok(UnifiedDealOutput {
            remote_id: source.id.map(|id| id.to_string()),
            amount: amount(&source.value),
            user_id: ref_id(&source.user_id),
            stage_id: source.stage_id.map(|id| id.to_string()),
            company_id: ref_id(&source.org_id),
            field_mappings: fields::project_inbound(raw, mappings),
            name: source.title,
            ..UnifiedDealOutput::default()
        })
    }
}
