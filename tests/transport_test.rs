//! Tests for the reqwest transport against a local stand-in provider.

use axum::{http::HeaderMap, http::StatusCode, routing::get, Json, Router};
use courtside_server::clients::balldontlie::ERROR_BODY_PREFIX;
use courtside_server::clients::{HttpTransport, StatsTransport};
use courtside_server::error::FetchError;
use reqwest::Url;
use serde_json::{json, Value};

async fn echo_credentials(headers: HeaderMap) -> Json<Value> {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    Json(json!({
        "authorization": header("authorization"),
        "user_agent": header("user-agent"),
    }))
}

/// Serve a small provider on an ephemeral port and return its `/v1` base.
async fn spawn_provider() -> Url {
    let app = Router::new()
        .route("/v1/echo", get(echo_credentials))
        .route(
            "/v1/overloaded",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "x".repeat(300)) }),
        )
        .route(
            "/v1/missing",
            get(|| async { (StatusCode::NOT_FOUND, "no such player") }),
        )
        .route("/v1/plain", get(|| async { "this is not json" }));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("No local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server error");
    });

    Url::parse(&format!("http://{addr}/v1/")).unwrap()
}

#[tokio::test]
async fn test_api_key_is_sent_raw() {
    let base = spawn_provider().await;
    let transport = HttpTransport::new(Some("secret-key".into())).unwrap();

    let body = transport.get_json(&base.join("echo").unwrap()).await.unwrap();
    assert_eq!(body["authorization"], "secret-key");
    assert_eq!(body["user_agent"], "Courtside/1.0");
}

#[tokio::test]
async fn test_no_api_key_sends_no_credential() {
    let base = spawn_provider().await;
    let transport = HttpTransport::new(None).unwrap();

    let body = transport.get_json(&base.join("echo").unwrap()).await.unwrap();
    assert!(body["authorization"].is_null());
}

#[tokio::test]
async fn test_error_body_is_truncated() {
    let base = spawn_provider().await;
    let transport = HttpTransport::new(None).unwrap();

    match transport.get_json(&base.join("overloaded").unwrap()).await {
        Err(FetchError::Upstream { status, body }) => {
            assert_eq!(status, 500);
            assert_eq!(body.chars().count(), ERROR_BODY_PREFIX);
            assert_eq!(body, "x".repeat(200));
        }
        other => panic!("expected upstream error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_provider_404_is_not_found() {
    let base = spawn_provider().await;
    let transport = HttpTransport::new(None).unwrap();

    let err = transport
        .get_json(&base.join("missing").unwrap())
        .await
        .unwrap_err();
    assert!(err.is_not_found());
    assert!(matches!(
        err,
        FetchError::Upstream { status: 404, ref body } if body == "no such player"
    ));
}

#[tokio::test]
async fn test_non_json_body_is_decode_error() {
    let base = spawn_provider().await;
    let transport = HttpTransport::new(None).unwrap();

    let err = transport
        .get_json(&base.join("plain").unwrap())
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::Decode(_)));
}

#[tokio::test]
async fn test_unreachable_provider_is_network_error() {
    // Reserve a port, then close it so nothing is listening.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let transport = HttpTransport::new(None).unwrap();
    let url = Url::parse(&format!("http://{addr}/v1/games/1")).unwrap();

    let err = transport.get_json(&url).await.unwrap_err();
    assert!(matches!(err, FetchError::Network(_)));
}
