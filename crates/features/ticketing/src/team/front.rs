use super::{OBJECT_TYPE, UnifiedTeamInput, UnifiedTeamOutput};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uhub_domain::constants::FRONT;
use uhub_domain::mapping::FieldMapping;
use uhub_domain::objects::ObjectType;
use uhub_kernel::unification::convert::{lenient, required};
use uhub_kernel::unification::{MapperFault, ProviderMapper, fields};

/// Team payload accepted by Front. Front teams carry no description.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrontTeamInput {
    pub name: String,
    #[serde(flatten)]
    pub custom: Map<String, Value>,
}

/// Team as returned by Front, ids look like `tim_55c8c149`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrontTeamOutput {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub name: String,
    #[serde(rename = "_links", default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Value>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FrontTeamMapper;

impl ProviderMapper for FrontTeamMapper {
    const OBJECT_TYPE: ObjectType = OBJECT_TYPE;
    const PROVIDER: &'static str = FRONT;

    type UnifiedInput = UnifiedTeamInput;
    type UnifiedOutput = UnifiedTeamOutput;
    type RemoteInput = FrontTeamInput;
    type RemoteOutput = FrontTeamOutput;

    fn desunify(
        &self,
        source: UnifiedTeamInput,
        mappings: &[FieldMapping],
    ) -> Result<FrontTeamInput, MapperFault> {
        Ok(FrontTeamInput {
            custom: fields::project_outbound(&source.field_mappings, mappings),
            name: required("name", source.name)?,
        })
    }

    fn unify(
        &self,
        source: FrontTeamOutput,
        raw: &Map<String, Value>,
        mappings: &[FieldMapping],
    ) -> Result<UnifiedTeamOutput, MapperFault> {
        Ok(UnifiedTeamOutput {
            remote_id: source.id,
            field_mappings: fields::project_inbound(raw, mappings),
            name: source.name,
            ..UnifiedTeamOutput::default()
        })
    }
}
