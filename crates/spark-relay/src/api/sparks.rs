use axum::Json;
use axum::extract::{Query, State};
use serde::Deserialize;
use spark_core::responses::SparkListing;

use crate::error::RelayError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    repo: Option<String>,
    branch: Option<String>,
    /// Directory listed when code search finds nothing.
    path: Option<String>,
}

/// `GET /api/sparks`: every spark in a repository with its markdown.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<SparkListing>, RelayError> {
    let repo = state.repo(query.repo.as_deref())?;
    let branch = state.branch(query.branch.as_deref()).to_string();
    let dir = query
        .path
        .as_deref()
        .map(|p| p.trim().trim_matches('/'))
        .filter(|p| !p.is_empty())
        .unwrap_or(&state.config.spark_dir)
        .to_string();

    let key = if dir == state.config.spark_dir {
        repo.key(&branch)
    } else {
        repo.key(&format!("{branch}:{dir}"))
    };

    let source = state.source.clone();
    let lookup = state
        .listings
        .get_or_refresh(&key, || async {
            source.list_sparks(&repo, &branch, &dir).await
        })
        .await?;

    tracing::info!(%repo, %branch, count = lookup.value.len(), cached = lookup.cached, "listed sparks");
    Ok(Json(SparkListing {
        repo: repo.to_string(),
        branch,
        sparks: lookup.value,
        cached: lookup.cached,
        stale: lookup.stale.is_some(),
        error: lookup.stale,
    }))
}
