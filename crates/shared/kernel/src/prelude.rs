pub use crate::service::{
    GatewayFailure, ProviderAction, RemoteCall, RemoteGateway, ServiceError, ServiceErrorExt,
    ServiceResponse, UnifiedService,
};
pub use crate::unification::{
    CustomFieldValue, DynMapper, MapperFault, MapperRegistration, MappingRegistry,
    MappingRegistryBuilder, ProviderMapper, Unifier, UnificationError, UnificationErrorExt,
    UnifyOptions,
};
pub use uhub_domain::mapping::FieldMapping;
pub use uhub_domain::objects::{CrmObject, ObjectType, TicketingObject, Vertical};
