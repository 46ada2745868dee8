//! Facade crate for `UnifyHub` verticals and shared modules.
//! Re-exports domain/kernel primitives and assembles the mapping registry.
//! Keep this crate thin: it composes other crates, it does not map anything itself.
//!
//! ## Usage
//! - Add `uhub` with the `server` feature when the HTTP surface is needed.
//! - Call [`init`] with the unification settings to get a ready [`kernel::unification::Unifier`].

pub use uhub_domain as domain;
pub use uhub_kernel as kernel;

use tracing::info;
use uhub_domain::config::UnificationConfig;
use uhub_domain::objects::Vertical;
use uhub_kernel::unification::{MapperRegistration, MappingRegistry, Unifier};

#[cfg(feature = "server")]
pub mod server {
    pub use uhub_kernel::server::{ApiError, ApiState, ApiStateBuilder, ApiStateError};

    pub mod router {
        pub use uhub_kernel::server::router::{system_router, unification_router};
    }
}

/// Vertical crates, addressable by name.
pub mod verticals {
    pub use uhub_crm as crm;
    pub use uhub_ticketing as ticketing;

    use uhub_domain::objects::Vertical;
    use uhub_kernel::unification::MapperRegistration;

    /// Every mapper a vertical ships.
    #[must_use]
    pub fn registrations(vertical: Vertical) -> Vec<MapperRegistration> {
        match vertical {
            Vertical::Crm => crm::init(),
            Vertical::Ticketing => ticketing::init(),
        }
    }
}

/// Mappers of the verticals enabled in `config`.
#[must_use]
pub fn registrations(config: &UnificationConfig) -> Vec<MapperRegistration> {
    Vertical::all()
        .filter(|vertical| config.verticals.has(*vertical))
        .flat_map(verticals::registrations)
        .collect()
}

/// Builds the registry for `config`: enabled verticals only, disabled providers left out.
#[must_use]
pub fn registry(config: &UnificationConfig) -> MappingRegistry {
    let registry = MappingRegistry::builder()
        .register_many(registrations(config))
        .disable_providers(config.disabled_providers.iter())
        .build();

    info!(verticals = ?config.verticals, mappers = registry.len(), "Unification registry ready");
    registry
}

/// Initializes the unification engine for server or embedded use.
#[must_use]
pub fn init(config: &UnificationConfig) -> Unifier {
    Unifier::new(registry(config))
}
