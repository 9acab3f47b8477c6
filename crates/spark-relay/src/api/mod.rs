//! HTTP routes.

mod health;
mod mission;
mod prs;
mod sparks;
mod submit;
mod user;

use std::path::Path;

use axum::Router;
use axum::http::HeaderMap;
use axum::http::header::AUTHORIZATION;
use axum::routing::{get, post};
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::error::RelayError;
use crate::state::AppState;

/// Build the relay router. `static_dir`, when given, is served for every
/// non-API path with `index.html` as the fallback.
pub fn router(state: AppState, static_dir: Option<&Path>) -> Router {
    let api = Router::new()
        .route("/api/health", get(health::health))
        .route("/api/sparks", get(sparks::list))
        .route("/api/mission", post(mission::audit_content))
        .route("/api/mission/file", post(mission::audit_file))
        .route("/api/prs", get(prs::open_pull_requests))
        .route("/api/submit", post(submit::submit))
        .route("/api/user", get(user::current_user));

    let app = match static_dir {
        Some(dir) => api.fallback_service(
            ServeDir::new(dir).fallback(ServeFile::new(dir.join("index.html"))),
        ),
        None => api,
    };

    app.layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bearer token from an `Authorization: Bearer ...` or `token ...` header.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?.trim();
    value
        .strip_prefix("Bearer ")
        .or_else(|| value.strip_prefix("token "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Trimmed, non-empty request field.
fn required<'a>(value: Option<&'a str>, field: &str) -> Result<&'a str, RelayError> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| RelayError::BadRequest(format!("{field} is required")))
}
