use super::{OBJECT_TYPE, UnifiedDealInput, UnifiedDealOutput};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uhub_domain::constants::HUBSPOT;
use uhub_domain::mapping::FieldMapping;
use uhub_domain::objects::ObjectType;
use uhub_kernel::unification::convert::{amount, lenient, required};
use uhub_kernel::unification::{MapperFault, ProviderMapper, fields};

/// Pipeline used for new deals when none is implied by the stage.
pub const DEFAULT_PIPELINE: &str = "default";

/// Deal object accepted by HubSpot. Standard and custom properties share one map.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HubspotDealInput {
    pub properties: Map<String, Value>,
}

/// Deal object as returned by HubSpot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HubspotDealOutput {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub properties: Map<String, Value>,
    #[serde(default, deserialize_with = "lenient")]
    pub archived: bool,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct HubspotDealMapper;

impl ProviderMapper for HubspotDealMapper {
    const OBJECT_TYPE: ObjectType = OBJECT_TYPE;
    const PROVIDER: &'static str = HUBSPOT;

    type UnifiedInput = UnifiedDealInput;
    type UnifiedOutput = UnifiedDealOutput;
    type RemoteInput = HubspotDealInput;
    type RemoteOutput = HubspotDealOutput;

    fn desunify(
        &self,
        source: UnifiedDealInput,
        mappings: &[FieldMapping],
    ) -> Result<HubspotDealInput, MapperFault> {
        let mut properties = Map::new();
        properties.insert("dealname".to_owned(), required("name", source.name)?.into());
        properties.insert("pipeline".to_owned(), DEFAULT_PIPELINE.into());
        // HubSpot stores numbers as strings.
        if let Some(value) = source.amount {
            properties.insert("amount".to_owned(), value.to_string().into());
        }
        let optional = [
            ("description", source.description),
            ("dealstage", source.stage_id),
            ("hubspot_owner_id", source.user_id),
        ];
        for (key, value) in optional {
            if let Some(value) = value {
                properties.insert(key.to_owned(), value.into());
            }
        }

        fields::merge_into(&mut properties, fields::project_outbound(&source.field_mappings, mappings));
        Ok(HubspotDealInput { properties })
    }

    fn unify(
        &self,
        source: HubspotDealOutput,
        _: &Map<String, Value>,
        mappings: &[FieldMapping],
    ) -> Result<UnifiedDealOutput, MapperFault> {
        let properties = &source.properties;
        let text = |key: &str| properties.get(key).and_then(Value::as_str).map(str::to_owned);

        Ok(UnifiedDealOutput {
            remote_id: source.id,
            name: text("dealname").unwrap_or_default(),
            description: text("description"),
            amount: properties.get("amount").and_then(amount),
            user_id: text("hubspot_owner_id"),
            stage_id: text("dealstage"),
            company_id: None,
            field_mappings: fields::project_inbound(properties, mappings),
            remote_data: None,
        })
    }
}
