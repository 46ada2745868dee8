//! Sales opportunities.

mod hubspot;
mod pipedrive;
mod zendesk;
mod zoho;

pub use hubspot::{
    DEFAULT_PIPELINE as HUBSPOT_DEFAULT_PIPELINE, HubspotDealInput, HubspotDealMapper, HubspotDealOutput,
};
pub use pipedrive::{PipedriveDealInput, PipedriveDealMapper, PipedriveDealOutput};
pub use zendesk::{ZendeskDealInput, ZendeskDealMapper, ZendeskDealOutput};
pub use zoho::{
    DEFAULT_STAGE as ZOHO_DEFAULT_STAGE, ZohoDealInput, ZohoDealMapper, ZohoDealOutput, ZohoRef,
};

use serde_json::Value;
use uhub_derive::api_model;
use uhub_domain::objects::{CrmObject, ObjectType};
use uhub_kernel::unification::CustomFieldValue;

pub const OBJECT_TYPE: ObjectType = ObjectType::Crm(CrmObject::Deal);

#[api_model(deny_unknown_fields = false)]
#[derive(Clone, Default, PartialEq)]
pub struct UnifiedDealInput {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub amount: Option<f64>,
    /// Owner of the deal
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub stage_id: Option<String>,
    #[serde(default)]
    pub company_id: Option<String>,
    #[serde(default)]
    #[cfg_attr(feature = "server", schema(value_type = Vec<Object>))]
    pub field_mappings: Vec<CustomFieldValue>,
}

#[api_model(deny_unknown_fields = false)]
#[derive(Clone, Default, PartialEq)]
pub struct UnifiedDealOutput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote_id: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_id: Option<String>,
    #[serde(default)]
    #[cfg_attr(feature = "server", schema(value_type = Vec<Object>))]
    pub field_mappings: Vec<CustomFieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "server", schema(value_type = Option<Object>))]
    pub remote_data: Option<Value>,
}
