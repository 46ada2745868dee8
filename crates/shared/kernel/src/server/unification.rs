use super::error::{ApiError, ErrorBody};
use crate::unification::{Unifier, UnifyOptions};
use axum::Json;
use axum::extract::{Path, State};
use serde_json::Value;
use uhub_derive::{api_handler, api_model};
use uhub_domain::constants::UNIFICATION_TAG;
use uhub_domain::mapping::FieldMapping;
use uhub_domain::objects::ObjectType;

#[api_model]
/// One `(object type, provider)` pair served by the registry
pub struct MappingEntry {
    /// `<vertical>.<object>`, e.g. `crm.stage`
    pub object_type: String,
    pub provider: String,
}

#[api_model]
pub struct MappingsResponse {
    pub mappings: Vec<MappingEntry>,
}

#[api_model]
/// Canonical object to translate for a provider
pub struct DesunifyRequest {
    #[schema(value_type = Object)]
    pub source: Value,
    /// Custom field slugs and their provider keys
    #[serde(default)]
    #[schema(value_type = Vec<Object>)]
    pub field_mappings: Vec<FieldMapping>,
}

#[api_model]
pub struct DesunifyResponse {
    /// Provider-shaped payload
    #[schema(value_type = Object)]
    pub payload: Value,
}

#[api_model]
/// Provider object, or array of them, to translate into canonical form
pub struct UnifyRequest {
    #[schema(value_type = Object)]
    pub source: Value,
    #[serde(default)]
    #[schema(value_type = Vec<Object>)]
    pub field_mappings: Vec<FieldMapping>,
    /// Attach the untouched provider object to every result
    #[serde(default)]
    pub remote_data: bool,
}

#[api_model]
pub struct UnifyResponse {
    /// Canonical object, or array in input order
    #[schema(value_type = Object)]
    pub data: Value,
}

#[api_handler(
    get,
    path = "/unification/mappings",
    responses((status = OK, description = "Registered mappers", body = MappingsResponse)),
    tag = UNIFICATION_TAG,
)]
pub(super) async fn mappings_handler(State(unifier): State<Unifier>) -> Json<MappingsResponse> {
    let mappings = unifier
        .registry()
        .entries()
        .into_iter()
        .map(|(object_type, provider)| MappingEntry {
            object_type: object_type.to_string(),
            provider: provider.to_owned(),
        })
        .collect();

    Json(MappingsResponse { mappings })
}

#[api_handler(
    post,
    path = "/unification/{vertical}/{object}/{provider}/desunify",
    params(
        ("vertical" = String, Path, description = "Vertical, e.g. `crm`"),
        ("object" = String, Path, description = "Object within the vertical, e.g. `stage`"),
        ("provider" = String, Path, description = "Provider name, e.g. `zendesk`"),
    ),
    request_body = DesunifyRequest,
    responses(
        (status = OK, description = "Provider payload", body = DesunifyResponse),
        (status = BAD_REQUEST, description = "Unknown object type or malformed field mapping", body = ErrorBody),
        (status = NOT_FOUND, description = "No mapper for this provider", body = ErrorBody),
        (status = UNPROCESSABLE_ENTITY, description = "Source cannot be translated", body = ErrorBody),
    ),
    tag = UNIFICATION_TAG,
)]
pub(super) async fn desunify_handler(
    State(unifier): State<Unifier>,
    Path((vertical, object, provider)): Path<(String, String, String)>,
    Json(request): Json<DesunifyRequest>,
) -> Result<Json<DesunifyResponse>, ApiError> {
    let object_type = ObjectType::parse(&vertical, &object)?;
    let payload =
        unifier.desunify(&request.source, object_type, &provider, &request.field_mappings)?;

    Ok(Json(DesunifyResponse { payload }))
}

#[api_handler(
    post,
    path = "/unification/{vertical}/{object}/{provider}/unify",
    params(
        ("vertical" = String, Path, description = "Vertical, e.g. `crm`"),
        ("object" = String, Path, description = "Object within the vertical, e.g. `stage`"),
        ("provider" = String, Path, description = "Provider name, e.g. `zendesk`"),
    ),
    request_body = UnifyRequest,
    responses(
        (status = OK, description = "Canonical object(s)", body = UnifyResponse),
        (status = BAD_REQUEST, description = "Unknown object type or malformed field mapping", body = ErrorBody),
        (status = NOT_FOUND, description = "No mapper for this provider", body = ErrorBody),
        (status = UNPROCESSABLE_ENTITY, description = "Source cannot be translated", body = ErrorBody),
    ),
    tag = UNIFICATION_TAG,
)]
pub(super) async fn unify_handler(
    State(unifier): State<Unifier>,
    Path((vertical, object, provider)): Path<(String, String, String)>,
    Json(request): Json<UnifyRequest>,
) -> Result<Json<UnifyResponse>, ApiError> {
    let object_type = ObjectType::parse(&vertical, &object)?;
    let options = UnifyOptions::with_remote_data(request.remote_data);
    let mappings = &request.field_mappings;

    // The wire format accepts either shape; the engine keeps them apart.
    let data = match request.source {
        Value::Array(items) => {
            Value::Array(unifier.unify_many(items, object_type, &provider, mappings, options)?)
        },
        single => unifier.unify_one(single, object_type, &provider, mappings, options)?,
    };

    Ok(Json(UnifyResponse { data }))
}
