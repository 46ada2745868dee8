use uhub::domain::config::UnificationConfig;
use uhub::domain::objects::{CrmObject, ObjectType, TicketingObject};
use uhub::domain::verticals::VerticalSet;

#[test]
fn default_config_registers_both_verticals() {
    let unifier = uhub::init(&UnificationConfig::default());
    let registry = unifier.registry();

    assert_eq!(registry.len(), 13);
    assert!(registry.contains(CrmObject::Stage.into(), "zendesk"));
    assert!(registry.contains(TicketingObject::Comment.into(), "front"));
}

#[test]
fn disabled_verticals_are_skipped() {
    let config = UnificationConfig { verticals: VerticalSet::TICKETING, ..UnificationConfig::default() };

    let registry = uhub::registry(&config);

    assert_eq!(registry.len(), 4);
    assert!(registry.entries().iter().all(|(object_type, _)| matches!(object_type, ObjectType::Ticketing(_))));
}

#[test]
fn disabled_providers_are_not_resolvable() {
    let config = UnificationConfig {
        disabled_providers: vec![" HubSpot ".to_owned(), "front".to_owned()],
        ..UnificationConfig::default()
    };

    let registry = uhub::registry(&config);

    assert!(!registry.contains(CrmObject::Deal.into(), "hubspot"));
    assert!(!registry.contains(TicketingObject::Team.into(), "front"));
    assert!(registry.contains(CrmObject::Deal.into(), "zoho"));
    assert_eq!(registry.len(), 13 - 3 - 2);
}

#[test]
fn empty_vertical_set_yields_an_empty_registry() {
    let config = UnificationConfig { verticals: VerticalSet::empty(), ..UnificationConfig::default() };
    assert!(uhub::registry(&config).is_empty());
}
