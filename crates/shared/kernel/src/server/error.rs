use crate::unification::UnificationError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use std::borrow::Cow;
use tracing::{error, warn};
use uhub_derive::api_model;
use uhub_domain::objects::ObjectTypeError;

/// Failures surfaced by the HTTP layer.
#[uhub_derive::uhub_error]
pub enum ApiError {
    #[error("{source}{}", format_context(.context))]
    Unification { source: UnificationError, context: Option<Cow<'static, str>> },

    #[error("Invalid mapping target{}: {source}", format_context(.context))]
    Target { source: ObjectTypeError, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

#[api_model]
/// Error payload returned by every failing endpoint
pub struct ErrorBody {
    /// Human-readable description
    pub error: String,
    /// Stable machine-readable failure kind
    pub kind: String,
}

impl ApiError {
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Unification { source, .. } => match source {
                UnificationError::UnsupportedMapping { .. } => StatusCode::NOT_FOUND,
                UnificationError::MalformedFieldMapping { .. } => StatusCode::BAD_REQUEST,
                UnificationError::Transform { .. } | UnificationError::Serialization { .. } => {
                    StatusCode::UNPROCESSABLE_ENTITY
                },
                UnificationError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::Target { .. } => StatusCode::BAD_REQUEST,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Unification { source, .. } => source.kind(),
            Self::Target { .. } => "invalid_target",
            Self::Internal { .. } => "internal",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(kind = self.kind(), "{self}");
        } else {
            warn!(kind = self.kind(), "{self}");
        }

        let body = ErrorBody { error: self.to_string(), kind: self.kind().to_owned() };
        (status, Json(body)).into_response()
    }
}
