use super::{OBJECT_TYPE, UnifiedStageInput, UnifiedStageOutput};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uhub_domain::constants::ZENDESK;
use uhub_domain::mapping::FieldMapping;
use uhub_domain::objects::ObjectType;
use uhub_kernel::unification::convert::{lenient, required};
use uhub_kernel::unification::{MapperFault, ProviderMapper, fields};

/// Stage payload accepted by Zendesk Sell.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ZendeskStageInput {
    pub name: String,
    #[serde(flatten)]
    pub custom: Map<String, Value>,
}

/// Stage as returned by Zendesk Sell.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ZendeskStageOutput {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub pipeline_id: Option<i64>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub likelihood: Option<u8>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ZendeskStageMapper;

impl ProviderMapper for ZendeskStageMapper {
    const OBJECT_TYPE: ObjectType = OBJECT_TYPE;
    const PROVIDER: &'static str = ZENDESK;

    type UnifiedInput = UnifiedStageInput;
    type UnifiedOutput = UnifiedStageOutput;
    type RemoteInput = ZendeskStageInput;
    type RemoteOutput = ZendeskStageOutput;

    fn desunify(
        &self,
        source: UnifiedStageInput,
        mappings: &[FieldMapping],
    ) -> Result<ZendeskStageInput, MapperFault> {
        Ok(ZendeskStageInput {
            name: required("stage_name", source.stage_name)?,
            custom: fields::project_outbound(&source.field_mappings, mappings),
        })
    }

    fn unify(
        &self,
        source: ZendeskStageOutput,
        raw: &Map<String, Value>,
        mappings: &[FieldMapping],
    ) -> Result<UnifiedStageOutput, MapperFault> {
        Ok(UnifiedStageOutput {
            remote_id: source.id.map(|id| id.to_string()),
            stage_name: source.name,
            field_mappings: fields::project_inbound(raw, mappings),
            remote_data: None,
        })
    }
}
