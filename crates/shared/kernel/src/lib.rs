//! Kernel shared by every vertical.
//! Keep this crate free of provider knowledge; verticals plug their mappers into it.
//!
//! ## Mapping engine
//! ```rust,ignore
//! use uhub_kernel::unification::{MappingRegistry, Unifier, UnifyOptions};
//!
//! let registry = MappingRegistry::builder().register_many(uhub_crm::init()).build();
//! let unifier = Unifier::new(registry);
//! let payload = unifier.desunify(&stage, CrmObject::Stage.into(), "zendesk", &mappings)?;
//! ```
//!
//! ## Config loading (non-wasm)
//! ```rust,ignore
//! #[cfg(not(target_arch = "wasm32"))]
//! # {
//!     use uhub_kernel::config::load_config;
//!     let cfg: serde_json::Value = load_config::<serde_json::Value>(Some("server")).unwrap();
//! # }
//! ```
#[cfg(not(target_arch = "wasm32"))]
pub mod config;
pub mod prelude;
#[cfg(feature = "server")]
pub mod server;
pub mod service;
pub mod unification;

pub use uhub_domain as domain;
