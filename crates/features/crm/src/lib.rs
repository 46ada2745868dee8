//! # CRM vertical
//!
//! Canonical models for CRM objects and the mappers translating them for each provider.
//!
//! | Object  | Providers                          |
//! |---------|------------------------------------|
//! | `stage` | zendesk, pipedrive, hubspot        |
//! | `deal`  | zendesk, pipedrive, zoho, hubspot  |
//! | `task`  | pipedrive, hubspot                 |
//!
//! Nothing registers itself: [`init`] lists every mapper and the caller decides what goes into
//! the registry.

pub mod deal;
pub mod stage;
pub mod task;

use uhub_kernel::unification::MapperRegistration;

/// Every CRM mapper, ready for [`uhub_kernel::unification::MappingRegistryBuilder::register_many`].
#[must_use]
pub fn init() -> Vec<MapperRegistration> {
    vec![
        MapperRegistration::new(stage::ZendeskStageMapper),
        MapperRegistration::new(stage::PipedriveStageMapper),
        MapperRegistration::new(stage::HubspotStageMapper),
        MapperRegistration::new(deal::ZendeskDealMapper),
        MapperRegistration::new(deal::PipedriveDealMapper),
        MapperRegistration::new(deal::ZohoDealMapper),
        MapperRegistration::new(deal::HubspotDealMapper),
        MapperRegistration::new(task::PipedriveTaskMapper),
        MapperRegistration::new(task::HubspotTaskMapper),
    ]
}
