//! Relay error types and their HTTP mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use spark_github::{FailureKind, GithubError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RelayError {
    /// Missing or malformed request input.
    #[error("{0}")]
    BadRequest(String),

    /// The document failed validation and cannot be submitted.
    #[error("spark is not valid: {}", .0.join("; "))]
    Invalid(Vec<String>),

    #[error(transparent)]
    Github(#[from] GithubError),

    #[error("configuration error: {0}")]
    Config(#[from] spark_config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl RelayError {
    #[must_use]
    pub const fn kind(&self) -> FailureKind {
        match self {
            Self::BadRequest(_) | Self::Invalid(_) | Self::Config(_) => FailureKind::Invalid,
            Self::Github(e) => e.kind(),
            Self::Io(_) => FailureKind::Other,
        }
    }

    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Io(_) | Self::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => match self.kind() {
                FailureKind::Invalid => StatusCode::BAD_REQUEST,
                FailureKind::NotFound => StatusCode::NOT_FOUND,
                FailureKind::RateLimited => StatusCode::TOO_MANY_REQUESTS,
                FailureKind::Unauthorized => StatusCode::UNAUTHORIZED,
                FailureKind::Other => StatusCode::BAD_GATEWAY,
            },
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(%self, "request failed");
        } else {
            tracing::debug!(%self, "request rejected");
        }
        let mut body = json!({
            "error": self.to_string(),
            "kind": self.kind().as_str(),
        });
        if let Self::Invalid(errors) = &self {
            body["errors"] = json!(errors);
        }
        (status, Json(body)).into_response()
    }
}
