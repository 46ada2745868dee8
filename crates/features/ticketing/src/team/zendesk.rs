use super::{OBJECT_TYPE, UnifiedTeamInput, UnifiedTeamOutput};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uhub_domain::constants::ZENDESK;
use uhub_domain::mapping::FieldMapping;
use uhub_domain::objects::ObjectType;
use uhub_kernel::unification::convert::{lenient, required};
use uhub_kernel::unification::{MapperFault, ProviderMapper, fields};

/// Group payload accepted by Zendesk Support.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ZendeskTeamInput {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub custom: Map<String, Value>,
}

/// Group as returned by Zendesk Support.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ZendeskTeamOutput {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub default: bool,
    #[serde(default, deserialize_with = "lenient")]
    pub deleted: bool,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ZendeskTeamMapper;

impl ProviderMapper for ZendeskTeamMapper {
    const OBJECT_TYPE: ObjectType = OBJECT_TYPE;
    const PROVIDER: &'static str = ZENDESK;

    type UnifiedInput = UnifiedTeamInput;
    type UnifiedOutput = UnifiedTeamOutput;
    type RemoteInput = ZendeskTeamInput;
    type RemoteOutput = ZendeskTeamOutput;

    fn desunify(
        &self,
        source: UnifiedTeamInput,
        mappings: &[FieldMapping],
    ) -> Result<ZendeskTeamInput, MapperFault> {
        Ok(ZendeskTeamInput {
            custom: fields::project_outbound(&source.field_mappings, mappings),
            name: required("name", source.name)?,
            description: source.description,
        })
    }

    fn unify(
        &self,
        source: ZendeskTeamOutput,
        raw: &Map<String, Value>,
        mappings: &[FieldMapping],
    ) -> Result<UnifiedTeamOutput, MapperFault> {
        Ok(UnifiedTeamOutput {
            remote_id: source.id.map(|id| id.to_string()),
            field_mappings: fields::project_inbound(raw, mappings),
            name: source.name,
            description: source.description,
            remote_data: None,
        })
    }
}
