use axum::Json;
use axum::extract::State;
use serde::Deserialize;
use spark_core::responses::MissionReport;

use super::required;
use crate::error::RelayError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ContentRequest {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct FileRequest {
    repo: Option<String>,
    path: Option<String>,
    branch: Option<String>,
}

fn report(markdown: &str) -> MissionReport {
    let doc = spark_markdown::parse(markdown);
    spark_audit::mission_report(&doc)
}

/// `POST /api/mission`: audit posted markdown.
pub async fn audit_content(
    Json(request): Json<ContentRequest>,
) -> Result<Json<MissionReport>, RelayError> {
    let content = required(request.content.as_deref(), "content")?;
    Ok(Json(report(content)))
}

/// `POST /api/mission/file`: fetch a spark from GitHub, then audit it.
pub async fn audit_file(
    State(state): State<AppState>,
    Json(request): Json<FileRequest>,
) -> Result<Json<MissionReport>, RelayError> {
    let path = required(request.path.as_deref(), "path")?;
    let repo = state.repo(request.repo.as_deref())?;
    let branch = state.branch(request.branch.as_deref());

    let markdown = state.source.fetch_raw(&repo, branch, path).await?;
    let report = report(&markdown);
    tracing::info!(%repo, path, status = ?report.audit.status, "audited spark file");
    Ok(Json(report))
}
