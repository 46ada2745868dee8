use crate::unification::Unifier;
use axum::extract::FromRef;
use std::borrow::Cow;
use std::ops::Deref;
use std::sync::Arc;
use uhub_domain::config::ApiConfig;

#[uhub_derive::uhub_error]
pub enum ApiStateError {
    #[error("State validation error{}: {message}", format_context(.context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

#[derive(Debug)]
pub struct ApiStateInner {
    pub config: ApiConfig,
    pub unifier: Unifier,
}

/// Shared handler state. Cloning is cheap.
#[derive(Debug, Clone)]
pub struct ApiState {
    inner: Arc<ApiStateInner>,
}

impl ApiState {
    #[must_use]
    pub fn builder() -> ApiStateBuilder {
        ApiStateBuilder::default()
    }
}

impl Deref for ApiState {
    type Target = ApiStateInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl FromRef<ApiState> for ApiConfig {
    fn from_ref(state: &ApiState) -> Self {
        state.inner.config.clone()
    }
}

impl FromRef<ApiState> for Unifier {
    fn from_ref(state: &ApiState) -> Self {
        state.inner.unifier.clone()
    }
}

#[derive(Debug, Default)]
pub struct ApiStateBuilder {
    config: Option<ApiConfig>,
    unifier: Option<Unifier>,
}

impl ApiStateBuilder {
    #[must_use]
    pub fn config(mut self, config: ApiConfig) -> Self {
        self.config = Some(config);
        self
    }

    #[must_use]
    pub fn unifier(mut self, unifier: Unifier) -> Self {
        self.unifier = Some(unifier);
        self
    }

    /// # Errors
    /// Returns [`ApiStateError::Validation`] when no unifier was provided.
    pub fn build(self) -> Result<ApiState, ApiStateError> {
        let unifier = self.unifier.ok_or_else(|| ApiStateError::Validation {
            message: "Unifier not provided".into(),
            context: None,
        })?;
        let config = self.config.unwrap_or_default();

        Ok(ApiState { inner: Arc::new(ApiStateInner { config, unifier }) })
    }
}
