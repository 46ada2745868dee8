use super::{OBJECT_TYPE, UnifiedStageInput, UnifiedStageOutput};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uhub_domain::constants::HUBSPOT;
use uhub_domain::mapping::FieldMapping;
use uhub_domain::objects::ObjectType;
use uhub_kernel::unification::convert::{lenient, required};
use uhub_kernel::unification::{MapperFault, ProviderMapper, fields};

/// Pipeline stage payload accepted by HubSpot. Custom keys live in `metadata`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HubspotStageInput {
    pub label: String,
    pub display_order: i64,
    #[serde(default)]
    pub metadata: Map<String, Value>,
}

/// Pipeline stage as returned by HubSpot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HubspotStageOutput {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub label: String,
    #[serde(default, deserialize_with = "lenient")]
    pub display_order: i64,
    #[serde(default, deserialize_with = "lenient")]
    pub metadata: Map<String, Value>,
    #[serde(default, deserialize_with = "lenient")]
    pub archived: bool,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct HubspotStageMapper;

impl ProviderMapper for HubspotStageMapper {
    const OBJECT_TYPE: ObjectType = OBJECT_TYPE;
    const PROVIDER: &'static str = HUBSPOT;

    type UnifiedInput = UnifiedStageInput;
    type UnifiedOutput = UnifiedStageOutput;
    type RemoteInput = HubspotStageInput;
    type RemoteOutput = HubspotStageOutput;

    fn desunify(
        &self,
        source: UnifiedStageInput,
        mappings: &[FieldMapping],
    ) -> Result<HubspotStageInput, MapperFault> {
        // The canonical stage carries no ordering; HubSpot requires one.
        Ok(HubspotStageInput {
            label: required("stage_name", source.stage_name)?,
            display_order: 0,
            metadata: fields::project_outbound(&source.field_mappings, mappings),
        })
    }

    fn unify(
        &self,
        source: HubspotStageOutput,
        _: &Map<String, Value>,
        mappings: &[FieldMapping],
    ) -> Result<UnifiedStageOutput, MapperFault> {
        Ok(UnifiedStageOutput {
            remote_id: source.id,
            stage_name: source.label,
            field_mappings: fields::project_inbound(&source.metadata, mappings),
            remote_data: None,
        })
    }
}
