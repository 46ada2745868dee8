use super::{OBJECT_TYPE, UnifiedCommentInput, UnifiedCommentOutput};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uhub_domain::constants::ZENDESK;
use uhub_domain::mapping::FieldMapping;
use uhub_domain::objects::ObjectType;
use uhub_kernel::unification::convert::{lenient, numeric_id, ref_id, required};
use uhub_kernel::unification::{MapperFault, ProviderMapper, fields};

/// Ticket comment accepted by Zendesk Support.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ZendeskCommentInput {
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_body: Option<String>,
    pub public: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_id: Option<i64>,
    /// Tokens returned by the uploads endpoint.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub uploads: Vec<String>,
    #[serde(flatten)]
    pub custom: Map<String, Value>,
}

/// Ticket comment as returned by Zendesk Support. Missing `public` means public.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ZendeskCommentOutput {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub body: String,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub html_body: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub public: Option<bool>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub author_id: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub attachments: Vec<Value>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ZendeskCommentMapper;

impl ProviderMapper for ZendeskCommentMapper {
    const OBJECT_TYPE: ObjectType = OBJECT_TYPE;
    const PROVIDER: &'static str = ZENDESK;

    type UnifiedInput = UnifiedCommentInput;
    type UnifiedOutput = UnifiedCommentOutput;
    type RemoteInput = ZendeskCommentInput;
    type RemoteOutput = ZendeskCommentOutput;

    fn desunify(
        &self,
        source: UnifiedCommentInput,
        mappings: &[FieldMapping],
    ) -> Result<ZendeskCommentInput, MapperFault> {
        let author_id = match source.author() {
            Some((field, id)) => numeric_id(field, Some(id))?,
            None => None,
        };

        Ok(ZendeskCommentInput {
            public: !source.is_private.unwrap_or(false),
            author_id,
            custom: fields::project_outbound(&source.field_mappings, mappings),
            body: required("body", source.body)?,
            html_body: source.html_body,
            uploads: source.attachments,
        })
    }

    fn unify(
        &self,
        source: ZendeskCommentOutput,
        raw: &Map<String, Value>,
        mappings: &[FieldMapping],
    ) -> Result<UnifiedCommentOutput, MapperFault> {
        Ok(UnifiedCommentOutput {
            remote_id: source.id.map(|id| id.to_string()),
            is_private: !source.public.unwrap_or(true),
            user_id: source.author_id.map(|id| id.to_string()),
            attachments: source.attachments.iter().filter_map(ref_id).collect(),
            field_mappings: fields::project_inbound(raw, mappings),
            body: source.body,
            html_body: source.html_body,
            created_at: source.created_at,
            ..UnifiedCommentOutput::default()
        })
    }
}
