//! Groups of agents tickets are assigned to.

mod front;
mod zendesk;

pub use front::{FrontTeamInput, FrontTeamMapper, FrontTeamOutput};
pub use zendesk::{ZendeskTeamInput, ZendeskTeamMapper, ZendeskTeamOutput};

use serde_json::Value;
use uhub_derive::api_model;
use uhub_domain::objects::{ObjectType, TicketingObject};
use uhub_kernel::unification::CustomFieldValue;

pub const OBJECT_TYPE: ObjectType = ObjectType::Ticketing(TicketingObject::Team);

#[api_model(deny_unknown_fields = false)]
#[derive(Clone, Default, PartialEq)]
pub struct UnifiedTeamInput {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    #[cfg_attr(feature = "server", schema(value_type = Vec<Object>))]
    pub field_mappings: Vec<CustomFieldValue>,
}

#[api_model(deny_unknown_fields = false)]
#[derive(Clone, Default, PartialEq)]
pub struct UnifiedTeamOutput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote_id: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    #[cfg_attr(feature = "server", schema(value_type = Vec<Object>))]
    pub field_mappings: Vec<CustomFieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "server", schema(value_type = Option<Object>))]
    pub remote_data: Option<Value>,
}
