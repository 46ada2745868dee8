use super::{health, unification};
use crate::unification::Unifier;
use axum::extract::FromRef;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

pub fn system_router<S>() -> OpenApiRouter<S>
where
    S: Send + Sync + Clone + 'static,
{
    OpenApiRouter::<S>::new().routes(routes!(health::health_handler))
}

/// Routes exposing the mapping engine: introspection, desunify and unify.
pub fn unification_router<S>() -> OpenApiRouter<S>
where
    S: Send + Sync + Clone + 'static,
    Unifier: FromRef<S>,
{
    OpenApiRouter::<S>::new()
        .routes(routes!(unification::mappings_handler))
        .routes(routes!(unification::desunify_handler))
        .routes(routes!(unification::unify_handler))
}
