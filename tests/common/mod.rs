use std::sync::Arc;

use courtside_server::app;
use courtside_server::config::Config;
use courtside_server::state::AppState;
use courtside_server::testing_utils::ScriptedTransport;
use reqwest::Client;

/// A running server backed by a scripted provider.
pub struct TestServer {
    pub base_url: String,
}

impl TestServer {
    /// Build a URL for an API endpoint.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Bind the real router on an ephemeral port. Provider requests are answered
/// by `upstream`, keyed like `/v1/games/7`.
pub async fn spawn(upstream: Arc<ScriptedTransport>) -> TestServer {
    let config = Config {
        base_url: "http://upstream.test/v1".to_string(),
        current_season: 2025,
        ..Config::default()
    };
    let state = AppState::new(&config, upstream).expect("Failed to build state");

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("No local addr");

    tokio::spawn(async move {
        axum::serve(listener, app::router(state))
            .await
            .expect("Server error");
    });

    TestServer {
        base_url: format!("http://{addr}"),
    }
}

/// Build a reqwest client for tests.
pub fn client() -> Client {
    Client::new()
}
