use super::{OBJECT_TYPE, UnifiedDealInput, UnifiedDealOutput};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uhub_domain::constants::ZOHO;
use uhub_domain::mapping::FieldMapping;
use uhub_domain::objects::ObjectType;
use uhub_kernel::unification::convert::{lenient, required};
use uhub_kernel::unification::{MapperFault, ProviderMapper, fields};

/// Stage given to new Zoho deals when the canonical deal names none.
pub const DEFAULT_STAGE: &str = "Qualification";

/// Lookup reference to another Zoho record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZohoRef {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl ZohoRef {
    fn from_id(id: Option<String>) -> Option<Self> {
        id.filter(|id| !id.trim().is_empty()).map(|id| Self { id, name: None })
    }
}

/// Deal record accepted by the Zoho CRM API.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ZohoDealInput {
    #[serde(rename = "Deal_Name")]
    pub deal_name: String,
    #[serde(rename = "Stage")]
    pub stage: String,
    #[serde(rename = "Amount", default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(rename = "Description", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "Owner", default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<ZohoRef>,
    #[serde(rename = "Account_Name", default, skip_serializing_if = "Option::is_none")]
    pub account: Option<ZohoRef>,
    #[serde(flatten)]
    pub custom: Map<String, Value>,
}

/// Deal record as returned by the Zoho CRM API.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ZohoDealOutput {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "Deal_Name", default, deserialize_with = "lenient")]
    pub deal_name: String,
    #[serde(
        rename = "Stage",
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub stage: Option<String>,
    #[serde(
        rename = "Amount",
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub amount: Option<f64>,
    #[serde(
        rename = "Description",
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
    #[serde(
        rename = "Owner",
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub owner: Option<ZohoRef>,
    #[serde(
        rename = "Account_Name",
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub account: Option<ZohoRef>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ZohoDealMapper;

impl ProviderMapper for ZohoDealMapper {
    const OBJECT_TYPE: ObjectType = OBJECT_TYPE;
    const PROVIDER: &'static str = ZOHO;

    type UnifiedInput = UnifiedDealInput;
    type UnifiedOutput = UnifiedDealOutput;
    type RemoteInput = ZohoDealInput;
    type RemoteOutput = ZohoDealOutput;

    fn desunify(
        &self,
        source: UnifiedDealInput,
        mappings: &[FieldMapping],
    ) -> Result<ZohoDealInput, MapperFault> {
        let custom = fields::project_outbound(&source.field_mappings, mappings);

        // Zoho stages are referenced by name.
        let stage = source
            .stage_id
            .filter(|stage| !stage.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_STAGE.to_owned());

        Ok(ZohoDealInput {
            deal_name: required("name", source.name)?,
            stage,
            amount: source.amount,
            description: source.description,
            owner: ZohoRef::from_id(source.user_id),
            account: ZohoRef::from_id(source.company_id),
            custom,
        })
    }

    fn unify(
        &self,
        source: ZohoDealOutput,
        raw: &Map<String, Value>,
        mappings: &[FieldMapping],
    ) -> Result<UnifiedDealOutput, MapperFault> {
        Ok(UnifiedDealOutput {
            remote_id: source.id,
            name: source.deal_name,
            description: source.description,
            amount: source.amount,
            user_id: source.owner.map(|owner| owner.id),
            stage_id: source.stage,
            company_id: source.account.map(|account| account.id),
            field_mappings: fields::project_inbound(raw, mappings),
            remote_data: None,
        })
    }
}
