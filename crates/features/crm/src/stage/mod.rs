//! Pipeline stages a deal moves through.

mod hubspot;
mod pipedrive;
mod zendesk;

pub use hubspot::{HubspotStageInput, HubspotStageMapper, HubspotStageOutput};
pub use pipedrive::{PipedriveStageInput, PipedriveStageMapper, PipedriveStageOutput};
pub use zendesk::{ZendeskStageInput, ZendeskStageMapper, ZendeskStageOutput};

use serde_json::Value;
use uhub_derive::api_model;
use uhub_domain::objects::{CrmObject, ObjectType};
use uhub_kernel::unification::CustomFieldValue;

pub const OBJECT_TYPE: ObjectType = ObjectType::Crm(CrmObject::Stage);

#[api_model(deny_unknown_fields = false)]
#[derive(Clone, PartialEq)]
pub struct UnifiedStageInput {
    pub stage_name: String,
    #[serde(default)]
    #[cfg_attr(feature = "server", schema(value_type = Vec<Object>))]
    pub field_mappings: Vec<CustomFieldValue>,
}

#[api_model(deny_unknown_fields = false)]
#[derive(Clone, PartialEq)]
pub struct UnifiedStageOutput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote_id: Option<String>,
    pub stage_name: String,
    #[serde(default)]
    #[cfg_attr(feature = "server", schema(value_type = Vec<Object>))]
    pub field_mappings: Vec<CustomFieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "server", schema(value_type = Option<Object>))]
    pub remote_data: Option<Value>,
}
