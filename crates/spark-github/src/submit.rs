//! Change-request creation.
//!
//! A submission is four API writes: a branch off the default branch, a
//! contents commit on that branch, and a pull request back to the base.

use serde::{Deserialize, Serialize};
use spark_core::responses::SubmissionResponse;

use crate::contents::PutFile;
use crate::{GithubClient, RepoRef, error::GithubError, http::check_response};

pub const DEFAULT_PR_TITLE: &str = "Spark submission";
pub const DEFAULT_PR_BODY: &str = "Submitted from Spark Assembly Lab.";

/// An edited spark to propose as a pull request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub repo: RepoRef,
    pub path: String,
    pub content: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
}

impl Submission {
    #[must_use]
    pub fn title(&self) -> &str {
        self.title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(DEFAULT_PR_TITLE)
    }

    #[must_use]
    pub fn body(&self) -> &str {
        self.body
            .as_deref()
            .map(str::trim)
            .filter(|b| !b.is_empty())
            .unwrap_or(DEFAULT_PR_BODY)
    }
}

#[derive(Deserialize)]
struct RepoInfo {
    default_branch: String,
}

#[derive(Deserialize)]
struct GitRef {
    object: GitObject,
}

#[derive(Deserialize)]
struct GitObject {
    sha: String,
}

#[derive(Deserialize)]
struct CreatedPull {
    html_url: String,
}

/// Branch name for a submission made at `timestamp` (unix seconds).
#[must_use]
pub fn submission_branch(timestamp: i64) -> String {
    format!("spark/{timestamp}")
}

impl GithubClient {
    /// Commit `submission.content` on a fresh branch and open a pull request.
    ///
    /// # Errors
    ///
    /// Returns [`GithubError::Unauthorized`] without a token, or the first
    /// failing step's [`GithubError`].
    pub async fn submit(&self, submission: &Submission) -> Result<SubmissionResponse, GithubError> {
        if self.token.is_none() {
            return Err(GithubError::Unauthorized);
        }
        let repo = &submission.repo;

        let info: RepoInfo = check_response(
            self.get(&self.api_url(&format!("repos/{repo}"))).send().await?,
            &repo.to_string(),
        )
        .await?
        .json()
        .await?;
        let base = info.default_branch;

        let head: GitRef = check_response(
            self.get(&self.api_url(&format!(
                "repos/{repo}/git/ref/heads/{}",
                urlencoding::encode(&base)
            )))
            .send()
            .await?,
            &format!("{repo} branch {base}"),
        )
        .await?
        .json()
        .await?;

        let branch = submission_branch(chrono::Utc::now().timestamp());
        check_response(
            self.request(reqwest::Method::POST, &self.api_url(&format!("repos/{repo}/git/refs")))
                .json(&serde_json::json!({
                    "ref": format!("refs/heads/{branch}"),
                    "sha": head.object.sha,
                }))
                .send()
                .await?,
            &format!("{repo} branch {branch}"),
        )
        .await?;
        tracing::debug!(%repo, %branch, %base, "created submission branch");

        let sha = match self.file_sha(repo, &submission.path, &branch).await {
            Ok(sha) => sha,
            Err(e) => {
                tracing::debug!(%repo, path = %submission.path, %e, "no existing blob sha");
                None
            }
        };

        self.put_file(
            repo,
            &submission.path,
            &PutFile {
                message: submission.title(),
                content: &submission.content,
                branch: &branch,
                sha: sha.as_deref(),
            },
        )
        .await?;

        let pull: CreatedPull = check_response(
            self.request(reqwest::Method::POST, &self.api_url(&format!("repos/{repo}/pulls")))
                .json(&serde_json::json!({
                    "title": submission.title(),
                    "body": submission.body(),
                    "head": branch,
                    "base": base,
                }))
                .send()
                .await?,
            &format!("{repo} pulls"),
        )
        .await?
        .json()
        .await?;

        tracing::info!(%repo, pr = %pull.html_url, "opened spark pull request");
        Ok(SubmissionResponse {
            pr_url: pull.html_url,
            branch,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn submission() -> Submission {
        Submission {
            repo: RepoRef::new("acme", "ideas"),
            path: "sparks/solar-mesh.spark.md".into(),
            content: "# Solar Mesh\n".into(),
            title: None,
            body: Some("  ".into()),
        }
    }

    #[test]
    fn blank_title_and_body_use_defaults() {
        let s = submission();
        assert_eq!(s.title(), DEFAULT_PR_TITLE);
        assert_eq!(s.body(), DEFAULT_PR_BODY);
    }

    #[test]
    fn explicit_title_is_trimmed() {
        let s = Submission {
            title: Some(" Refine gap ".into()),
            ..submission()
        };
        assert_eq!(s.title(), "Refine gap");
    }

    #[test]
    fn branch_name_uses_timestamp() {
        assert_eq!(submission_branch(1_700_000_000), "spark/1700000000");
    }

    #[test]
    fn parse_ref_and_pull() {
        let head: GitRef = serde_json::from_str(
            r#"{"ref": "refs/heads/main", "object": {"sha": "aa218f56b14c9653891f9e74264a383fa43fefbd", "type": "commit"}}"#,
        )
        .unwrap();
        assert_eq!(head.object.sha, "aa218f56b14c9653891f9e74264a383fa43fefbd");

        let pull: CreatedPull = serde_json::from_str(
            r#"{"number": 7, "html_url": "https://github.com/acme/ideas/pull/7"}"#,
        )
        .unwrap();
        assert_eq!(pull.html_url, "https://github.com/acme/ideas/pull/7");
    }

    #[tokio::test]
    async fn anonymous_submit_is_unauthorized() {
        let client = GithubClient::default();
        let err = client.submit(&submission()).await.unwrap_err();
        assert!(matches!(err, GithubError::Unauthorized));
    }
}
