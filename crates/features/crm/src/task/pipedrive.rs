use super::{OBJECT_TYPE, TaskStatus, UnifiedTaskInput, UnifiedTaskOutput};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uhub_domain::constants::PIPEDRIVE;
use uhub_domain::mapping::FieldMapping;
use uhub_domain::objects::ObjectType;
use uhub_kernel::unification::convert::{lenient, numeric_id, ref_id, required};
use uhub_kernel::unification::{MapperFault, ProviderMapper, fields};

/// Pipedrive models tasks as activities of this type.
pub const ACTIVITY_TYPE: &str = "task";

/// Activity payload accepted by Pipedrive.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PipedriveTaskInput {
    pub subject: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub done: u8,
    /// `YYYY-MM-DD`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deal_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org_id: Option<i64>,
    #[serde(flatten)]
    pub custom: Map<String, Value>,
}

/// Activity as returned by Pipedrive.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PipedriveTaskOutput {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub subject: String,
    /// `true`/`false` on reads, `0`/`1` on the write side.
    #[serde(default)]
    pub done: Value,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub marked_as_done_time: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default)]
    pub user_id: Value,
    #[serde(default)]
    pub deal_id: Value,
    #[serde(default)]
    pub org_id: Value,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PipedriveTaskMapper;

impl ProviderMapper for PipedriveTaskMapper {
    const OBJECT_TYPE: ObjectType = OBJECT_TYPE;
    const PROVIDER: &'static str = PIPEDRIVE;

    type UnifiedInput = UnifiedTaskInput;
    type UnifiedOutput = UnifiedTaskOutput;
    type RemoteInput = PipedriveTaskInput;
    type RemoteOutput = PipedriveTaskOutput;

    fn desunify(
        &self,
        source: UnifiedTaskInput,
        mappings: &[FieldMapping],
    ) -> Result<PipedriveTaskInput, MapperFault> {
        let done = u8::from(source.status == Some(TaskStatus::Completed));
        // Pipedrive wants the date part only.
        let due_date = source.due_date.map(|due| due.chars().take(10).collect());

        Ok(PipedriveTaskInput {
            kind: ACTIVITY_TYPE.to_owned(),
            done,
            due_date,
            note: source.content,
            user_id: numeric_id("user_id", source.user_id.as_deref())?,
            deal_id: numeric_id("deal_id", source.deal_id.as_deref())?,
            org_id: numeric_id("company_id", source.company_id.as_deref())?,
            custom: fields::project_outbound(&source.field_mappings, mappings),
            subject: required("subject", source.subject)?,
        })
    }

    fn unify(
        &self,
        source: PipedriveTaskOutput,
        raw: &Map<String, Value>,
        mappings: &[FieldMapping],
    ) -> Result<UnifiedTaskOutput, MapperFault> {
        Ok(UnifiedTaskOutput {
            remote_id: source.id.map(|id| id.to_string()),
            status: if is_done(&source.done) { TaskStatus::Completed } else { TaskStatus::Pending },
            user_id: ref_id(&source.user_id),
            deal_id: ref_id(&source.deal_id),
            company_id: ref_id(&source.org_id),
            field_mappings: fields::project_inbound(raw, mappings),
            subject: source.subject,
            content: source.note,
            due_date: source.due_date,
            finished_date: source.marked_as_done_time,
            remote_data: None,
        })
    }
}

fn is_done(flag: &Value) -> bool {
    match flag {
        Value::Bool(done) => *done,
        Value::Number(n) => n.as_i64() == Some(1),
        _ => false,
    }
}
