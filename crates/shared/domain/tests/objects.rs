use uhub_domain::constants::{CRM, TICKETING};
use uhub_domain::objects::{CrmObject, ObjectType, ObjectTypeError, TicketingObject, Vertical};
use uhub_domain::verticals::VerticalSet;

#[test]
fn object_type_displays_as_vertical_dot_object() {
    assert_eq!(ObjectType::Crm(CrmObject::Stage).to_string(), "crm.stage");
    assert_eq!(ObjectType::Ticketing(TicketingObject::Team).to_string(), "ticketing.team");
}

#[test]
fn object_type_parses_both_forms() {
    assert_eq!("crm.deal".parse::<ObjectType>().unwrap(), ObjectType::Crm(CrmObject::Deal));
    assert_eq!(
        ObjectType::parse(TICKETING, "comment").unwrap(),
        ObjectType::Ticketing(TicketingObject::Comment)
    );
}

#[test]
fn object_type_parse_errors_are_typed() {
    assert_eq!(
        "crm".parse::<ObjectType>().unwrap_err(),
        ObjectTypeError::Malformed("crm".to_owned())
    );
    assert_eq!(
        ObjectType::parse("accounting", "invoice").unwrap_err(),
        ObjectTypeError::UnknownVertical("accounting".to_owned())
    );
    assert_eq!(
        ObjectType::parse(CRM, "team").unwrap_err(),
        ObjectTypeError::UnknownObject { vertical: Vertical::Crm, object: "team".to_owned() }
    );
}

#[test]
fn object_type_serde_uses_text_form() {
    let json = serde_json::to_string(&ObjectType::Crm(CrmObject::Task)).unwrap();
    assert_eq!(json, "\"crm.task\"");

    let back: ObjectType = serde_json::from_str(&json).unwrap();
    assert_eq!(back, ObjectType::Crm(CrmObject::Task));
}

#[test]
fn all_object_types_roundtrip_through_text() {
    let all: Vec<ObjectType> = ObjectType::all().collect();
    assert_eq!(all.len(), 17);
    for object_type in all {
        assert_eq!(object_type.to_string().parse::<ObjectType>().unwrap(), object_type);
    }
}

#[test]
fn vertical_set_parses_names() {
    assert_eq!(VerticalSet::from("crm"), VerticalSet::CRM);
    assert_eq!(VerticalSet::from("Ticketing"), VerticalSet::TICKETING);
    assert_eq!(VerticalSet::from("*"), VerticalSet::ALL);
    assert!(VerticalSet::from("accounting").is_empty());

    assert!(VerticalSet::CRM.has(Vertical::Crm));
    assert!(!VerticalSet::CRM.has(Vertical::Ticketing));
}

#[test]
fn vertical_set_serializes_as_names() {
    let json = serde_json::to_value(VerticalSet::ALL).unwrap();
    assert_eq!(json, serde_json::json!(["crm", "ticketing"]));

    let back: VerticalSet = serde_json::from_value(json).unwrap();
    assert_eq!(back, VerticalSet::ALL);
}

#[test]
fn verticals_enumerate_in_declaration_order() {
    let all: Vec<_> = Vertical::all().map(|v| v.to_string()).collect();
    assert_eq!(all, ["crm", "ticketing"]);
}
