use serde_json::json;
use uhub_kernel::prelude::*;
use uhub_ticketing::comment::{self, CreatorType, UnifiedCommentInput, UnifiedCommentOutput};

fn unifier() -> Unifier {
    Unifier::new(MappingRegistry::builder().register_many(uhub_ticketing::init()).build())
}

fn reply() -> UnifiedCommentInput {
    UnifiedCommentInput {
        body: "We are on it".to_owned(),
        creator_type: Some(CreatorType::User),
        user_id: Some("9001".to_owned()),
        ticket_id: Some("77".to_owned()),
        attachments: vec!["upload_token".to_owned()],
        ..UnifiedCommentInput::default()
    }
}

#[test]
fn zendesk_comments_are_public_unless_private() {
    let payload = unifier().desunify(&reply(), comment::OBJECT_TYPE, "zendesk", &[]).unwrap();
    assert_eq!(
        payload,
        json!({"body": "We are on it", "public": true, "author_id": 9001, "uploads": ["upload_token"]})
    );

    let private = UnifiedCommentInput { is_private: Some(true), ..reply() };
    let payload = unifier().desunify(&private, comment::OBJECT_TYPE, "zendesk", &[]).unwrap();
    assert_eq!(payload["public"], false);
}

#[test]
fn zendesk_contact_authors_fault_on_the_contact_field() {
    let source = UnifiedCommentInput {
        creator_type: Some(CreatorType::Contact),
        contact_id: Some("jane".to_owned()),
        ..reply()
    };

    let err = unifier().desunify(&source, comment::OBJECT_TYPE, "zendesk", &[]).unwrap_err();

    assert!(matches!(&err, UnificationError::Transform { field, .. } if field == "contact_id"), "{err}");
}

#[test]
fn zendesk_unify_defaults_to_public() {
    let remote = vec![
        json!({"id": 1, "body": "hi", "author_id": 5, "attachments": [{"id": 44, "file_name": "a.png"}]}),
        json!({"id": 2, "body": "note", "public": false}),
    ];

    let comments: Vec<UnifiedCommentOutput> = unifier()
        .unify_many_as(remote, comment::OBJECT_TYPE, "zendesk", &[], UnifyOptions::default())
        .unwrap();

    assert!(!comments[0].is_private);
    assert_eq!(comments[0].user_id.as_deref(), Some("5"));
    assert_eq!(comments[0].attachments, ["44"]);
    assert!(comments[1].is_private);
}

#[test]
fn front_comments_are_always_private() {
    let remote = json!({
        "id": "com_1",
        "body": "internal",
        "author": {"id": "tea_2", "email": "ann@example.com"},
        "posted_at": 1_700_000_000.0,
        "attachments": [{"url": "https://files/x", "filename": "x.txt"}],
    });

    let unified: UnifiedCommentOutput = unifier()
        .unify_one_as(remote, comment::OBJECT_TYPE, "front", &[], UnifyOptions::default())
        .unwrap();

    assert!(unified.is_private);
    assert_eq!(unified.creator_type, Some(CreatorType::User));
    assert_eq!(unified.user_id.as_deref(), Some("tea_2"));
    assert_eq!(unified.created_at.as_deref(), Some("1700000000"));
    assert_eq!(unified.attachments, ["https://files/x"]);
}

#[test]
fn front_rejects_contact_authors() {
    let source = UnifiedCommentInput { creator_type: Some(CreatorType::Contact), ..reply() };

    let err = unifier().desunify(&source, comment::OBJECT_TYPE, "front", &[]).unwrap_err();

    assert!(err.is_data());
    assert!(matches!(&err, UnificationError::Transform { field, .. } if field == "creator_type"));
}

#[test]
fn front_custom_fields_round_trip() {
    let mappings = [FieldMapping::new("sentiment", "sentiment_score")];
    let source = UnifiedCommentInput {
        field_mappings: vec![CustomFieldValue::new("sentiment", 0.8)],
        ..reply()
    };

    let payload = unifier().desunify(&source, comment::OBJECT_TYPE, "front", &mappings).unwrap();
    assert_eq!(payload["author_id"], "9001");
    assert_eq!(payload["sentiment_score"], 0.8);

    let unified = unifier()
        .unify_one(payload, comment::OBJECT_TYPE, "front", &mappings, UnifyOptions::default())
        .unwrap();
    assert_eq!(unified["field_mappings"], json!([{"sentiment": 0.8}]));
}

#[test]
fn custom_fields_may_name_standard_keys() {
    let visibility = [FieldMapping::new("visibility", "public")];
    let remote = json!({"id": 1, "body": "hi", "public": "agents_only"});
    let unified: UnifiedCommentOutput = unifier()
        .unify_one_as(remote, comment::OBJECT_TYPE, "zendesk", &visibility, UnifyOptions::default())
        .unwrap();
    assert!(!unified.is_private);
    assert_eq!(unified.field_mappings, vec![CustomFieldValue::new("visibility", "agents_only")]);

    let text = [FieldMapping::new("text", "body")];
    let remote = json!({"id": "com_1", "body": "internal"});
    let unified: UnifiedCommentOutput = unifier()
        .unify_one_as(remote, comment::OBJECT_TYPE, "front", &text, UnifyOptions::default())
        .unwrap();
    assert_eq!(unified.body, "internal");
    assert_eq!(unified.field_mappings, vec![CustomFieldValue::new("text", "internal")]);
}

#[test]
fn comments_without_a_body_still_unify() {
    for provider in ["zendesk", "front"] {
        let remote = vec![json!({"id": 1}), json!({"id": 2, "body": "hi"})];
        let comments: Vec<UnifiedCommentOutput> = unifier()
            .unify_many_as(remote, comment::OBJECT_TYPE, provider, &[], UnifyOptions::default())
            .unwrap();
        let bodies: Vec<_> = comments.iter().map(|c| c.body.as_str()).collect();
        assert_eq!(bodies, ["", "hi"], "{provider}");
    }
}

#[test]
fn unified_comments_feed_back_into_desunify() {
    let remote = json!({"id": 7, "body": "hi", "public": false, "author_id": 5, "created_at": "2026-01-01T00:00:00Z"});
    let unified = unifier()
        .unify_one(remote, comment::OBJECT_TYPE, "zendesk", &[], UnifyOptions::with_remote_data(true))
        .unwrap();

    let payload = unifier().desunify(&unified, comment::OBJECT_TYPE, "zendesk", &[]).unwrap();
    assert_eq!(payload, json!({"body": "hi", "public": false, "author_id": 5}));
}
