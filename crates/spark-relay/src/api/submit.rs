use axum::Json;
use axum::extract::State;
use axum::http::HeaderMap;
use serde::Deserialize;
use spark_core::responses::SubmissionResponse;
use spark_github::Submission;

use super::{bearer_token, required};
use crate::error::RelayError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    token: Option<String>,
    repo: Option<String>,
    path: Option<String>,
    content: Option<String>,
    title: Option<String>,
    body: Option<String>,
}

/// `POST /api/submit`: validate a spark and open a pull request with it.
///
/// The token comes from the body, else the `Authorization` header.
pub async fn submit(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<SubmitRequest>,
) -> Result<Json<SubmissionResponse>, RelayError> {
    let path = required(request.path.as_deref(), "path")?;
    let content = required(request.content.as_deref(), "content")?;
    let repo = state.repo(request.repo.as_deref())?;
    let token = request
        .token
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .or_else(|| bearer_token(&headers));

    let report = spark_audit::validate(&spark_markdown::parse(content));
    if !report.valid {
        return Err(RelayError::Invalid(report.errors));
    }

    let submission = Submission {
        repo: repo.clone(),
        path: path.to_string(),
        content: content.to_string(),
        title: request.title,
        body: request.body,
    };
    let response = state.source.submit(&submission, token).await?;
    state.prs.invalidate(&repo.key(path)).await;
    tracing::info!(%repo, path, pr = %response.pr_url, "submitted spark");
    Ok(Json(response))
}
