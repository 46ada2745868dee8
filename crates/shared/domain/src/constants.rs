//! Well-known names shared by the verticals, the registry and the HTTP layer.

// Verticals
pub const CRM: &str = "crm";
pub const TICKETING: &str = "ticketing";

// Providers
pub const FRONT: &str = "front";
pub const HUBSPOT: &str = "hubspot";
pub const PIPEDRIVE: &str = "pipedrive";
pub const ZENDESK: &str = "zendesk";
pub const ZOHO: &str = "zoho";

// OpenAPI tags
pub const SYSTEM_TAG: &str = "System";
pub const UNIFICATION_TAG: &str = "Unification";
