use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Failures reaching or interpreting the statistics provider.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Non-2xx from the provider. `body` holds at most the first 200 characters.
    #[error("Upstream error {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("{0}")]
    NotFound(String),

    #[error("Malformed upstream payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid upstream URL: {0}")]
    Url(String),
}

impl FetchError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::NotFound(_))
            || matches!(self, FetchError::Upstream { status: 404, .. })
    }
}

/// Errors surfaced by route handlers. Only `BadRequest` reaches the client
/// with its own text; everything else becomes a fixed 500 message.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{message}: {source}")]
    Failed {
        message: &'static str,
        #[source]
        source: FetchError,
    },
}

impl AppError {
    /// Wrap a provider failure under the endpoint's user-facing message.
    pub fn failed(message: &'static str) -> impl FnOnce(FetchError) -> AppError {
        move |source| AppError::Failed { message, source }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Failed { message, source } => {
                tracing::error!("{message}: {source}");
                (StatusCode::INTERNAL_SERVER_ERROR, (*message).to_string())
            }
        };

        (status, Json(json!({ "message": message }))).into_response()
    }
}
