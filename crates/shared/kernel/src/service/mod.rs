//! Service-layer contract around the mapping engine.
//!
//! [`UnifiedService`] runs the round trip a provider integration needs: desunify the canonical
//! input, hand the payload to a [`RemoteGateway`], unify what comes back. The gateway is the
//! embedding application's business: it resolves connections and performs the HTTP call.

use crate::unification::{UnificationError, Unifier, UnifyOptions};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Cow;
use std::future::Future;
use strum::{AsRefStr, Display};
use tracing::{debug, error};
use uhub_domain::mapping::FieldMapping;
use uhub_domain::objects::ObjectType;

/// What the service asked the provider to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, Serialize, Deserialize)]
#[strum(serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum ProviderAction {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

/// Everything a gateway needs to locate the remote resource.
#[derive(Debug, Clone, Copy)]
pub struct RemoteCall<'a> {
    pub action: ProviderAction,
    pub object_type: ObjectType,
    pub provider: &'a str,
    /// End-user whose provider connection is used.
    pub linked_user_id: &'a str,
}

/// A provider call failed before a usable response was received.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct GatewayFailure {
    /// HTTP status returned by the provider, if it answered at all.
    pub status: Option<u16>,
    pub message: Cow<'static, str>,
}

impl GatewayFailure {
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self { status: None, message: message.into() }
    }

    #[must_use]
    pub const fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }
}

/// Outbound side of a provider integration.
pub trait RemoteGateway: Send + Sync {
    /// Sends a provider payload and returns the provider's representation of the stored object.
    fn push(
        &self,
        call: RemoteCall<'_>,
        payload: Value,
    ) -> impl Future<Output = Result<Value, GatewayFailure>> + Send;

    /// Lists provider objects.
    fn pull(&self, call: RemoteCall<'_>) -> impl Future<Output = Result<Vec<Value>, GatewayFailure>> + Send;
}

#[uhub_derive::uhub_error]
pub enum ServiceError {
    #[error("Unification error{}: {source}", format_context(.context))]
    Unification { source: UnificationError, context: Option<Cow<'static, str>> },

    #[retryable]
    #[error("{action} {object_type} on {provider} failed{}: {message}", format_context(.context))]
    Gateway {
        action: ProviderAction,
        object_type: ObjectType,
        provider: String,
        status: Option<u16>,
        message: Cow<'static, str>,
        context: Option<Cow<'static, str>>,
    },

    #[error("Internal service error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

/// Envelope returned to API clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceResponse<T> {
    pub data: T,
    pub message: String,
    pub status_code: u16,
}

/// One object type of one vertical, served through any registered provider.
#[derive(Debug, Clone)]
pub struct UnifiedService<G> {
    unifier: Unifier,
    gateway: G,
}

impl<G: RemoteGateway> UnifiedService<G> {
    pub const fn new(unifier: Unifier, gateway: G) -> Self {
        Self { unifier, gateway }
    }

    #[must_use]
    pub const fn unifier(&self) -> &Unifier {
        &self.unifier
    }

    /// Creates an object at the provider and returns it in canonical form.
    ///
    /// # Errors
    /// [`ServiceError::Unification`] when either translation fails, [`ServiceError::Gateway`]
    /// when the provider call does. Both are logged before being returned.
    pub async fn add<T>(
        &self,
        source: &T,
        call: RemoteCall<'_>,
        mappings: &[FieldMapping],
        options: UnifyOptions,
    ) -> Result<ServiceResponse<Value>, ServiceError>
    where
        T: Serialize + ?Sized,
    {
        self.try_add(source, call, mappings, options).await.inspect_err(|err| log_failure(&call, err))
    }

    /// Lists the provider's objects in canonical form, in provider order.
    ///
    /// # Errors
    /// Same as [`UnifiedService::add`].
    pub async fn sync(
        &self,
        call: RemoteCall<'_>,
        mappings: &[FieldMapping],
        options: UnifyOptions,
    ) -> Result<ServiceResponse<Vec<Value>>, ServiceError> {
        self.try_sync(call, mappings, options).await.inspect_err(|err| log_failure(&call, err))
    }

    async fn try_add<T>(
        &self,
        source: &T,
        call: RemoteCall<'_>,
        mappings: &[FieldMapping],
        options: UnifyOptions,
    ) -> Result<ServiceResponse<Value>, ServiceError>
    where
        T: Serialize + ?Sized,
    {
        let payload = self.unifier.desunify(source, call.object_type, call.provider, mappings)?;
        let created = self.gateway.push(call, payload).await.map_err(|f| gateway_error(&call, f))?;
        let data = self.unifier.unify_one(created, call.object_type, call.provider, mappings, options)?;

        Ok(ServiceResponse {
            data,
            message: format!("{} {} created", call.provider, call.object_type.object_name()),
            status_code: 201,
        })
    }

    async fn try_sync(
        &self,
        call: RemoteCall<'_>,
        mappings: &[FieldMapping],
        options: UnifyOptions,
    ) -> Result<ServiceResponse<Vec<Value>>, ServiceError> {
        let remote = self.gateway.pull(call).await.map_err(|f| gateway_error(&call, f))?;
        debug!(count = remote.len(), provider = call.provider, "Pulled provider objects");

        let data = self.unifier.unify_many(remote, call.object_type, call.provider, mappings, options)?;

        Ok(ServiceResponse {
            data,
            message: format!("{} {}s retrieved", call.provider, call.object_type.object_name()),
            status_code: 200,
        })
    }
}

fn gateway_error(call: &RemoteCall<'_>, failure: GatewayFailure) -> ServiceError {
    ServiceError::Gateway {
        action: call.action,
        object_type: call.object_type,
        provider: call.provider.to_owned(),
        status: failure.status,
        message: failure.message,
        context: None,
    }
}

fn log_failure(call: &RemoteCall<'_>, err: &ServiceError) {
    error!(
        provider = call.provider,
        object_type = %call.object_type,
        action = %call.action,
        retryable = err.is_retryable(),
        "{err}"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actions_render_as_http_verbs() {
        assert_eq!(ProviderAction::Post.to_string(), "POST");
        assert_eq!(ProviderAction::Delete.as_ref(), "DELETE");
    }

    #[test]
    fn gateway_errors_are_retryable_unification_errors_are_not() {
        let call = RemoteCall {
            action: ProviderAction::Get,
            object_type: uhub_domain::objects::CrmObject::Task.into(),
            provider: "pipedrive",
            linked_user_id: "user-1",
        };
        let err = gateway_error(&call, GatewayFailure::new("connection reset").with_status(503));
        assert!(err.is_retryable());
        assert_eq!(err.to_string(), "GET crm.task on pipedrive failed: connection reset");

        let err = ServiceError::from(UnificationError::from("boom"));
        assert!(!err.is_retryable());
    }
}
