use super::{OBJECT_TYPE, UnifiedStageInput, UnifiedStageOutput};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uhub_domain::constants::PIPEDRIVE;
use uhub_domain::mapping::FieldMapping;
use uhub_domain::objects::ObjectType;
use uhub_kernel::unification::convert::{lenient, required};
use uhub_kernel::unification::{MapperFault, ProviderMapper, fields};

/// Stage payload accepted by Pipedrive.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PipedriveStageInput {
    pub name: String,
    #[serde(flatten)]
    pub custom: Map<String, Value>,
}

/// Stage as returned by Pipedrive.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PipedriveStageOutput {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub pipeline_id: Option<i64>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub order_nr: Option<i64>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub deal_probability: Option<u8>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub active_flag: Option<bool>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PipedriveStageMapper;

impl ProviderMapper for PipedriveStageMapper {
    const OBJECT_TYPE: ObjectType = OBJECT_TYPE;
    const PROVIDER: &'static str = PIPEDRIVE;

    type UnifiedInput = UnifiedStageInput;
    type UnifiedOutput = UnifiedStageOutput;
    type RemoteInput = PipedriveStageInput;
    type RemoteOutput = PipedriveStageOutput;

    fn desunify(
        &self,
        source: UnifiedStageInput,
        mappings: &[FieldMapping],
    ) -> Result<PipedriveStageInput, MapperFault> {
        Ok(PipedriveStageInput {
            name: required("stage_name", source.stage_name)?,
            custom: fields::project_outbound(&source.field_mappings, mappings),
        })
    }

    fn unify(
        &self,
        source: PipedriveStageOutput,
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
