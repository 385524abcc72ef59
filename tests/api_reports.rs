// HTTP API tests over a real server bound to an ephemeral port.

mod helpers;

use std::sync::Arc;
use std::time::Instant;

use helpers::{build_service, create_test_pool};
use raid_reports::{start_server, AppState};

async fn spawn_server() -> (String, AppState) {
    let pool = create_test_pool().await;
    let (service, stats) = build_service(pool, 100.0, 3);
    let state = AppState {
        service,
        stats,
        start_time: Arc::new(Instant::now()),
    };

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("read bound address");

    let server_state = state.clone();
    tokio::spawn(async move {
        let _ = start_server(listener, server_state).await;
    });

    (format!("http://{}", addr), state)
}

const MINIMAL_BODY: &str =
    r#"{"coordinates": {"lat": 33.7490, "lng": -84.3880}, "tacticsUsed": ["SURVEILLANCE"]}"#;

#[tokio::test]
async fn submission_without_bearer_token_is_unauthorized() {
    let (base, state) = spawn_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/v1/reports"))
        .header("content-type", "application/json")
        .body(MINIMAL_BODY)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 401);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("unauthenticated"));
    assert_eq!(state.stats.created_count(), 0);
}

#[tokio::test]
async fn empty_bearer_token_is_unauthorized() {
    let (base, _) = spawn_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/v1/reports"))
        .header("authorization", "Bearer ")
        .header("content-type", "application/json")
        .body(MINIMAL_BODY)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 401);
}

#[tokio::test]
async fn valid_submission_returns_report_id() {
    let (base, state) = spawn_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/v1/reports"))
        .bearer_auth("test-token")
        .header("content-type", "application/json")
        .body(MINIMAL_BODY)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);

    let body: serde_json::Value = resp.json().await.unwrap();
    let id = body["id"].as_str().unwrap();
    assert_eq!(id.len(), 20);
    assert_eq!(state.stats.created_count(), 1);
}

#[tokio::test]
async fn invalid_payload_returns_bad_request_naming_field() {
    let (base, _) = spawn_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/v1/reports"))
        .bearer_auth("test-token")
        .header("content-type", "application/json")
        .body(r#"{"coordinates": {"lat": 95.0, "lng": -84.3880}, "tacticsUsed": ["SURVEILLANCE"]}"#)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["field"].as_str(), Some("coordinates"));
    assert!(body["error"].as_str().unwrap().contains("invalid-argument"));
}

#[tokio::test]
async fn undeserializable_body_gets_typed_invalid_argument() {
    let (base, _) = spawn_server().await;
    let client = reqwest::Client::new();

    // A string latitude and an unknown field both fail at the deserializer,
    // before validation runs. Clients must still see the typed error shape,
    // not a serde message.
    for body in [
        r#"{"coordinates": {"lat": "33.7", "lng": -84.3880}, "tacticsUsed": ["SURVEILLANCE"]}"#,
        r#"{"coordinates": {"lat": 33.7, "lng": -84.3880}, "tacticsUsed": ["SURVEILLANCE"], "exactAddress": "x"}"#,
        r#"not json at all"#,
    ] {
        let resp = client
            .post(format!("{base}/v1/reports"))
            .bearer_auth("test-token")
            .header("content-type", "application/json")
            .body(body)
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 400);

        let parsed: serde_json::Value = resp.json().await.unwrap();
        let error = parsed["error"].as_str().unwrap();
        assert!(error.starts_with("invalid-argument"), "got '{error}'");
        assert!(
            !error.contains("deserialize") && !error.contains("f64"),
            "deserializer detail leaked: '{error}'"
        );
    }
}

#[tokio::test]
async fn status_endpoint_is_open_and_reflects_counters() {
    let (base, _) = spawn_server().await;
    let client = reqwest::Client::new();

    // One success, one validation failure, one unauthenticated rejection.
    client
        .post(format!("{base}/v1/reports"))
        .bearer_auth("test-token")
        .header("content-type", "application/json")
        .body(MINIMAL_BODY)
        .send()
        .await
        .unwrap();
    client
        .post(format!("{base}/v1/reports"))
        .bearer_auth("test-token")
        .header("content-type", "application/json")
        .body(r#"{"coordinates": {"lat": 1.0, "lng": 2.0}, "tacticsUsed": []}"#)
        .send()
        .await
        .unwrap();
    client
        .post(format!("{base}/v1/reports"))
        .header("content-type", "application/json")
        .body(MINIMAL_BODY)
        .send()
        .await
        .unwrap();

    let resp = client.get(format!("{base}/status")).send().await.unwrap();
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["reports_created"], 1);
    assert_eq!(body["errors"]["validation"]["total"], 1);
    assert_eq!(body["errors"]["validation"]["invalid_tactics"], 1);
    assert_eq!(body["errors"]["unauthenticated"], 1);
    assert!(body["elapsed_seconds"].as_f64().unwrap() >= 0.0);
}
