//! To-dos attached to CRM records.

mod hubspot;
mod pipedrive;

pub use hubspot::{HubspotTaskInput, HubspotTaskMapper, HubspotTaskOutput};
pub use pipedrive::{PipedriveTaskInput, PipedriveTaskMapper, PipedriveTaskOutput};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uhub_derive::api_model;
use uhub_domain::objects::{CrmObject, ObjectType};
use uhub_kernel::unification::CustomFieldValue;

pub const OBJECT_TYPE: ObjectType = ObjectType::Crm(CrmObject::Task);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    #[default]
    Pending,
    Completed,
}

#[api_model(deny_unknown_fields = false)]
#[derive(Clone, Default, PartialEq)]
pub struct UnifiedTaskInput {
    pub subject: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub status: Option<TaskStatus>,
    /// RFC 3339 timestamp
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub deal_id: Option<String>,
    #[serde(default)]
    pub company_id: Option<String>,
    #[serde(default)]
    #[cfg_attr(feature = "server", schema(value_type = Vec<Object>))]
    pub field_mappings: Vec<CustomFieldValue>,
}

#[api_model(deny_unknown_fields = false)]
#[derive(Clone, Default, PartialEq)]
pub struct UnifiedTaskOutput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote_id: Option<String>,
    pub subject: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub status: TaskStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finished_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deal_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_id: Option<String>,
    #[serde(default)]
    #[cfg_attr(feature = "server", schema(value_type = Vec<Object>))]
    pub field_mappings: Vec<CustomFieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "server", schema(value_type = Option<Object>))]
    pub remote_data: Option<Value>,
}
