//! Axum glue over the mapping engine. Compiled with the `server` feature.

mod error;
mod health;
pub mod router;
mod state;
mod unification;

pub use error::{ApiError, ApiErrorExt, ErrorBody};
pub use state::{ApiState, ApiStateBuilder, ApiStateError, ApiStateErrorExt, ApiStateInner};
pub use unification::{
    DesunifyRequest, DesunifyResponse, MappingEntry, MappingsResponse, UnifyRequest, UnifyResponse,
};
