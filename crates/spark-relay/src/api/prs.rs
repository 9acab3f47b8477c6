use axum::Json;
use axum::extract::{Query, State};
use axum::http::HeaderMap;
use serde::Deserialize;
use spark_core::responses::OpenPullRequests;

use super::{bearer_token, required};
use crate::error::RelayError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PrQuery {
    repo: Option<String>,
    path: Option<String>,
}

/// `GET /api/prs`: open pull requests that change one spark.
pub async fn open_pull_requests(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<PrQuery>,
) -> Result<Json<OpenPullRequests>, RelayError> {
    let path = required(query.path.as_deref(), "path")?;
    let repo = state.repo(query.repo.as_deref())?;
    let token = bearer_token(&headers);

    let source = state.source.clone();
    let lookup = state
        .prs
        .get_or_refresh(&repo.key(path), || async {
            source.open_pull_requests(&repo, path, token).await
        })
        .await?;
    Ok(Json(lookup.value))
}
