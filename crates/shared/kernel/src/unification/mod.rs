//! # Mapping engine
//!
//! Translates canonical ("unified") objects into provider payloads and back.
//!
//! * [`ProviderMapper`] is the typed contract a provider integration implements for one
//!   object type. Every mapper is also a [`DynMapper`], its `serde_json::Value` face.
//! * [`MappingRegistry`] holds one mapper per `(object type, provider)` pair. It is assembled
//!   explicitly with [`MappingRegistryBuilder`] and never changes afterwards.
//! * [`Unifier`] is the single call path for services: it validates field mappings, resolves the
//!   mapper and delegates to it.
//! * [`fields`] implements custom-field projection in both directions, [`convert`] the value
//!   coercions mappers share.
//!
//! All of it is synchronous and performs no I/O.

pub mod convert;
mod dispatcher;
mod error;
pub mod fields;
mod mapper;
mod registry;

pub use dispatcher::{Unifier, UnifyOptions};
pub use error::{UnificationError, UnificationErrorExt};
pub use fields::CustomFieldValue;
pub use mapper::{DynMapper, MapperFault, ProviderMapper};
pub use registry::{MapperRegistration, MappingRegistry, MappingRegistryBuilder};

/// Key under which [`UnifyOptions::remote_data`] attaches the raw provider object.
pub const REMOTE_DATA_KEY: &str = "remote_data";

/// Field name reported when a failure concerns the payload as a whole.
pub const WHOLE_PAYLOAD: &str = "$";
