use super::{CreatorType, OBJECT_TYPE, UnifiedCommentInput, UnifiedCommentOutput};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uhub_domain::constants::FRONT;
use uhub_domain::mapping::FieldMapping;
use uhub_domain::objects::ObjectType;
use uhub_kernel::unification::convert::{lenient, ref_id, required};
use uhub_kernel::unification::{MapperFault, ProviderMapper, fields};

/// Conversation comment accepted by Front.
///
/// Comments in Front are internal notes written by teammates, so a contact author is rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrontCommentInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_id: Option<String>,
    pub body: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<String>,
    #[serde(flatten)]
    pub custom: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrontAuthor {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Conversation comment as returned by Front.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrontCommentOutput {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub body: String,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub author: Option<FrontAuthor>,
    /// Epoch seconds.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub posted_at: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub attachments: Vec<Value>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FrontCommentMapper;

impl ProviderMapper for FrontCommentMapper {
    const OBJECT_TYPE: ObjectType = OBJECT_TYPE;
    const PROVIDER: &'static str = FRONT;

    type UnifiedInput = UnifiedCommentInput;
    type UnifiedOutput = UnifiedCommentOutput;
    type RemoteInput = FrontCommentInput;
    type RemoteOutput = FrontCommentOutput;

    fn desunify(
        &self,
        source: UnifiedCommentInput,
        mappings: &[FieldMapping],
    ) -> Result<FrontCommentInput, MapperFault> {
        if source.creator_type == Some(CreatorType::Contact) {
            return Err(MapperFault::new("creator_type", "Front comments are written by teammates"));
        }

        Ok(FrontCommentInput {
            author_id: source.user_id,
            custom: fields::project_outbound(&source.field_mappings, mappings),
            body: required("body", source.body)?,
            attachments: source.attachments,
        })
    }

    fn unify(
        &self,
        source: FrontCommentOutput,
        raw: &Map<String, Value>,
        mappings: &[FieldMapping],
    ) -> Result<UnifiedCommentOutput, MapperFault> {
        let user_id = source.author.map(|author| author.id);

        Ok(UnifiedCommentOutput {
            remote_id: source.id,
            is_private: true,
            creator_type: user_id.as_ref().map(|_| CreatorType::User),
            user_id,
            attachments: source.attachments.iter().filter_map(attachment_ref).collect(),
            created_at: source.posted_at.map(|at| at.to_string()),
            field_mappings: fields::project_inbound(raw, mappings),
            body: source.body,
            ..UnifiedCommentOutput::default()
        })
    }
}

/// Front attachments have no id, the download url identifies them.
fn attachment_ref(attachment: &Value) -> Option<String> {
    attachment.get("url").and_then(ref_id).or_else(|| ref_id(attachment))
}
