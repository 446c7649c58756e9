use serde::Serialize;

pub mod api;

pub type Result<T> = std::result::Result<T, RelayErrorResponse>;

/// Uniform error body returned to the storefront caller.
#[derive(Debug, Serialize)]
pub struct RelayErrorResponse {
    error: String,
}

impl RelayErrorResponse {
    pub fn new(text: String) -> Self {
        Self { error: text }
    }
}

impl std::error::Error for RelayErrorResponse {}

impl std::fmt::Display for RelayErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.error)
    }
}

impl axum::response::IntoResponse for RelayErrorResponse {
    fn into_response(self) -> axum::response::Response {
        tracing::debug!(error = %self.error, "Relay error response payload");
        (reqwest::StatusCode::INTERNAL_SERVER_ERROR, axum::Json(self)).into_response()
    }
}
