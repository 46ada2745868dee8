//! Messages posted on a ticket.
//!
//! The ticket a comment belongs to travels in the request path for both providers, so
//! `ticket_id` is never part of a provider payload and only comes back when the caller
//! re-attaches it.

mod front;
mod zendesk;

pub use front::{FrontAuthor, FrontCommentInput, FrontCommentMapper, FrontCommentOutput};
pub use zendesk::{ZendeskCommentInput, ZendeskCommentMapper, ZendeskCommentOutput};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uhub_derive::api_model;
use uhub_domain::objects::{ObjectType, TicketingObject};
use uhub_kernel::unification::CustomFieldValue;

pub const OBJECT_TYPE: ObjectType = ObjectType::Ticketing(TicketingObject::Comment);

/// Who wrote a comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum CreatorType {
    User,
    Contact,
}

#[api_model(deny_unknown_fields = false)]
#[derive(Clone, Default, PartialEq)]
pub struct UnifiedCommentInput {
    pub body: String,
    #[serde(default)]
    pub html_body: Option<String>,
    #[serde(default)]
    pub is_private: Option<bool>,
    #[serde(default)]
    pub creator_type: Option<CreatorType>,
    #[serde(default)]
    pub ticket_id: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub contact_id: Option<String>,
    /// Provider upload tokens or attachment ids.
    #[serde(default)]
    pub attachments: Vec<String>,
    #[serde(default)]
    #[cfg_attr(feature = "server", schema(value_type = Vec<Object>))]
    pub field_mappings: Vec<CustomFieldValue>,
}

impl UnifiedCommentInput {
    /// Author id with the canonical field it came from, picked by `creator_type`.
    /// Without a type, whichever id is present wins, the user first.
    #[must_use]
    pub fn author(&self) -> Option<(&'static str, &str)> {
        let user = self.user_id.as_deref().map(|id| ("user_id", id));
        let contact = self.contact_id.as_deref().map(|id| ("contact_id", id));
        match self.creator_type {
            Some(CreatorType::User) => user,
            Some(CreatorType::Contact) => contact,
            None => user.or(contact),
        }
    }
}

#[api_model(deny_unknown_fields = false)]
#[derive(Clone, Default, PartialEq)]
pub struct UnifiedCommentOutput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote_id: Option<String>,
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_body: Option<String>,
    pub is_private: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator_type: Option<CreatorType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticket_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_id: Option<String>,
    #[serde(default)]
    pub attachments: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default)]
    #[cfg_attr(feature = "server", schema(value_type = Vec<Object>))]
    pub field_mappings: Vec<CustomFieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "server", schema(value_type = Option<Object>))]
    pub remote_data: Option<Value>,
}
