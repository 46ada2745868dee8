use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;
use uhub::domain::config::ApiConfig;
use uhub::domain::verticals::VerticalSet;
use uhub_server::Server;

fn server(configure: impl FnOnce(&mut ApiConfig)) -> Server {
    let mut cfg = ApiConfig::default();
    configure(&mut cfg);
    Server::builder().config(cfg).build().unwrap()
}

async fn send(server: &Server, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    let response = server.router().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

fn json_body(bytes: &[u8]) -> Value {
    serde_json::from_slice(bytes).unwrap()
}

#[tokio::test]
async fn every_vertical_is_served_by_default() {
    let server = server(|_| {});

    let (status, body) = send(&server, "GET", "/unification/mappings", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_body(&body)["mappings"].as_array().map(Vec::len), Some(13));
}

#[tokio::test]
async fn zendesk_stage_scenario_over_http() {
    let server = server(|_| {});
    let request = json!({
        "source": {"stage_name": "Won", "field_mappings": [{"priority": "high"}]},
        "field_mappings": [{"slug": "priority", "remote_id": "custom_field_1"}],
    });

    let (status, body) =
        send(&server, "POST", "/unification/crm/stage/zendesk/desunify", Some(request)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_body(&body)["payload"], json!({"name": "Won", "custom_field_1": "high"}));
}

#[tokio::test]
async fn disabled_providers_answer_not_found() {
    let server = server(|cfg| cfg.unification.disabled_providers = vec!["front".to_owned()]);
    let request = json!({"source": [{"id": "tim_1", "name": "Billing"}]});

    let (status, body) = send(&server, "POST", "/unification/ticketing/team/front/unify", Some(request)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json_body(&body)["kind"], "unsupported_mapping");
}

#[tokio::test]
async fn vertical_selection_limits_the_registry() {
    let server = server(|cfg| cfg.unification.verticals = VerticalSet::TICKETING);
    let request = json!({"source": [{"id": "tim_1", "name": "Billing"}, {"id": "tim_2", "name": "Sales"}]});

    let (status, body) = send(&server, "POST", "/unification/ticketing/team/front/unify", Some(request)).await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<_> = json_body(&body)["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|team| team["name"].clone())
        .collect();
    assert_eq!(names, [json!("Billing"), json!("Sales")]);

    let (status, _) = send(&server, "POST", "/unification/crm/deal/zoho/desunify", Some(json!({"source": {"name": "x"}}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn api_reference_is_served() {
    let server = server(|_| {});

    let (status, body) = send(&server, "GET", "/api", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(String::from_utf8_lossy(&body).contains("<html"));
}

#[test]
fn missing_certificates_fail_the_build() {
    let mut cfg = ApiConfig::default();
    cfg.server.ssl = Some(uhub::domain::config::SslConfig {
        cert: "/nonexistent/cert.pem".into(),
        key: "/nonexistent/key.pem".into(),
    });

    let err = Server::builder().config(cfg).build().unwrap_err();

    assert!(err.to_string().contains("SSL certificate not found"));
}
