use axum::Json;
use axum::extract::State;
use axum::http::HeaderMap;
use serde_json::{Value, json};

use super::bearer_token;
use crate::error::RelayError;
use crate::state::AppState;

/// `GET /api/user`: handle behind the caller's token, `null` when anonymous.
pub async fn current_user(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Value>, RelayError> {
    let login = state.source.current_user(bearer_token(&headers)).await?;
    Ok(Json(json!({ "login": login })))
}
