mod common;

use common::{NOTE, unifier};
use serde_json::{Value, json};
use std::sync::Mutex;
use uhub_kernel::prelude::*;

/// Gateway answering from memory and recording what it was sent.
#[derive(Debug, Default)]
struct InMemoryGateway {
    pushed: Mutex<Vec<Value>>,
    listing: Vec<Value>,
    down: bool,
}

impl RemoteGateway for InMemoryGateway {
    async fn push(&self, _call: RemoteCall<'_>, payload: Value) -> Result<Value, GatewayFailure> {
        if self.down {
            return Err(GatewayFailure::new("connection refused"));
        }
        self.pushed.lock().unwrap().push(payload.clone());
        let mut created = payload;
        created["id"] = json!("remote-1");
        Ok(created)
    }

    async fn pull(&self, _call: RemoteCall<'_>) -> Result<Vec<Value>, GatewayFailure> {
        if self.down {
            return Err(GatewayFailure::new("bad gateway").with_status(502));
        }
        Ok(self.listing.clone())
    }
}

fn call(action: ProviderAction, provider: &str) -> RemoteCall<'_> {
    RemoteCall { action, object_type: NOTE, provider, linked_user_id: "user-42" }
}

#[tokio::test]
async fn add_desunifies_pushes_and_unifies() {
    let service = UnifiedService::new(unifier(), InMemoryGateway::default());
    let mappings = [FieldMapping::new("priority", "custom_field_1")];
    let note = json!({"content": "Call back", "field_mappings": [{"priority": "high"}]});

    let response = service
        .add(&note, call(ProviderAction::Post, "acme"), &mappings, UnifyOptions::default())
        .await
        .unwrap();

    assert_eq!(response.status_code, 201);
    assert_eq!(response.message, "acme note created");
    assert_eq!(
        response.data,
        json!({"remote_id": "remote-1", "content": "Call back", "field_mappings": [{"priority": "high"}]})
    );
}

#[tokio::test]
async fn sync_unifies_the_listing_in_order() {
    let gateway = InMemoryGateway {
        listing: vec![json!({"id": "a", "body": "first"}), json!({"id": "b", "body": "second"})],
        ..InMemoryGateway::default()
    };
    let service = UnifiedService::new(unifier(), gateway);

    let response = service
        .sync(call(ProviderAction::Get, "acme"), &[], UnifyOptions::default())
        .await
        .unwrap();

    assert_eq!(response.status_code, 200);
    let ids: Vec<&str> = response.data.iter().filter_map(|n| n["remote_id"].as_str()).collect();
    assert_eq!(ids, ["a", "b"]);
}

#[tokio::test]
async fn gateway_failures_are_retryable_and_keep_their_status() {
    let gateway = InMemoryGateway { down: true, ..InMemoryGateway::default() };
    let service = UnifiedService::new(unifier(), gateway);

    let err = service.sync(call(ProviderAction::Get, "acme"), &[], UnifyOptions::default()).await.unwrap_err();

    assert!(err.is_retryable());
    assert!(matches!(
        err,
        ServiceError::Gateway { action: ProviderAction::Get, status: Some(502), ref provider, .. } if provider == "acme"
    ));
}

#[tokio::test]
async fn unsupported_mappings_never_reach_the_gateway() {
    let service = UnifiedService::new(unifier(), InMemoryGateway::default());

    let err = service
        .add(&json!({"content": "x"}), call(ProviderAction::Post, "unknownprovider"), &[], UnifyOptions::default())
        .await
        .unwrap_err();

    assert!(!err.is_retryable());
    assert!(matches!(
        err,
        ServiceError::Unification { source: UnificationError::UnsupportedMapping { .. }, .. }
    ));
}
