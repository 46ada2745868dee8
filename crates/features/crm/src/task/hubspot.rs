use super::{OBJECT_TYPE, TaskStatus, UnifiedTaskInput, UnifiedTaskOutput};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uhub_domain::constants::HUBSPOT;
use uhub_domain::mapping::FieldMapping;
use uhub_domain::objects::ObjectType;
use uhub_kernel::unification::convert::{lenient, required};
use uhub_kernel::unification::{MapperFault, ProviderMapper, fields};

const SUBJECT: &str = "hs_task_subject";
const BODY: &str = "hs_task_body";
const STATUS: &str = "hs_task_status";
const DUE: &str = "hs_timestamp";
const COMPLETED_AT: &str = "hs_task_completion_date";
const OWNER: &str = "hubspot_owner_id";

/// Task object accepted by HubSpot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HubspotTaskInput {
    pub properties: Map<String, Value>,
}

/// Task object as returned by HubSpot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HubspotTaskOutput {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub properties: Map<String, Value>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct HubspotTaskMapper;

impl ProviderMapper for HubspotTaskMapper {
    const OBJECT_TYPE: ObjectType = OBJECT_TYPE;
    const PROVIDER: &'static str = HUBSPOT;

    type UnifiedInput = UnifiedTaskInput;
    type UnifiedOutput = UnifiedTaskOutput;
    type RemoteInput = HubspotTaskInput;
    type RemoteOutput = HubspotTaskOutput;

    fn desunify(
        &self,
        source: UnifiedTaskInput,
        mappings: &[FieldMapping],
    ) -> Result<HubspotTaskInput, MapperFault> {
        let status = match source.status.unwrap_or_default() {
            TaskStatus::Pending => "NOT_STARTED",
            TaskStatus::Completed => "COMPLETED",
        };

        let mut properties = Map::new();
        properties.insert(SUBJECT.to_owned(), required("subject", source.subject)?.into());
        properties.insert(STATUS.to_owned(), status.into());
        if let Some(body) = source.content {
            properties.insert(BODY.to_owned(), body.into());
        }
        if let Some(due) = source.due_date {
            properties.insert(DUE.to_owned(), due.into());
        }
        if let Some(owner) = source.user_id {
            properties.insert(OWNER.to_owned(), owner.into());
        }

        fields::merge_into(&mut properties, fields::project_outbound(&source.field_mappings, mappings));
        Ok(HubspotTaskInput { properties })
    }

    fn unify(
        &self,
        source: HubspotTaskOutput,
        _: &Map<String, Value>,
        mappings: &[FieldMapping],
    ) -> Result<UnifiedTaskOutput, MapperFault> {
        let properties = &source.properties;
        let text = |key: &str| properties.get(key).and_then(Value::as_str).map(str::to_owned);

        let status = match text(STATUS).as_deref() {
            Some("COMPLETED") => TaskStatus::Completed,
            _ => TaskStatus::Pending,
        };

        Ok(UnifiedTaskOutput {
            remote_id: source.id,
            subject: text(SUBJECT).unwrap_or_default(),
            content: text(BODY),
            status,
            due_date: text(DUE),
            finished_date: text(COMPLETED_AT),
            user_id: text(OWNER),
            field_mappings: fields::project_inbound(properties, mappings),
            ..UnifiedTaskOutput::default()
        })
    }
}
