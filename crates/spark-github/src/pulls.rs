//! Open pull requests touching a spark.

use serde::Deserialize;
use spark_core::responses::OpenPullRequests;
use tokio::task::JoinSet;

use crate::{GithubClient, RepoRef, error::GithubError, http::check_response};

fn touching(path: &str, mut urls: Vec<String>) -> OpenPullRequests {
    urls.sort();
    OpenPullRequests {
        path: path.to_string(),
        count: urls.len(),
        urls,
    }
}

#[derive(Deserialize)]
struct PullSummary {
    number: u64,
    html_url: String,
}

#[derive(Deserialize)]
struct PullFile {
    filename: String,
}

impl GithubClient {
    /// Open pull requests in `repo` that change `path`.
    ///
    /// Only the first hundred open pull requests and the first hundred files
    /// of each are inspected. Pull requests whose file list cannot be fetched
    /// are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`GithubError`] if the pull request list itself fails.
    pub async fn open_pull_requests(
        &self,
        repo: &RepoRef,
        path: &str,
    ) -> Result<OpenPullRequests, GithubError> {
        let url = self.api_url(&format!("repos/{repo}/pulls?state=open&per_page=100"));
        let resp = check_response(self.get(&url).send().await?, &format!("{repo} pulls")).await?;
        let pulls: Vec<PullSummary> = resp.json().await?;

        let mut set = JoinSet::new();
        for pull in pulls {
            let client = self.clone();
            let repo = repo.clone();
            set.spawn(async move {
                let files = client.pull_files(&repo, pull.number).await;
                (pull, files)
            });
        }

        let mut urls = Vec::new();
        while let Some(joined) = set.join_next().await {
            match joined {
                Ok((pull, Ok(files))) => {
                    if files.iter().any(|file| file.filename == path) {
                        urls.push(pull.html_url);
                    }
                }
                Ok((pull, Err(e))) => {
                    tracing::warn!(%repo, pull = pull.number, %e, "skipping pull request files");
                }
                Err(e) => tracing::warn!(%repo, %e, "pull request task failed"),
            }
        }
        Ok(touching(path, urls))
    }

    async fn pull_files(&self, repo: &RepoRef, number: u64) -> Result<Vec<PullFile>, GithubError> {
        let url = self.api_url(&format!("repos/{repo}/pulls/{number}/files?per_page=100"));
        let resp = check_response(self.get(&url).send().await?, &format!("{repo}#{number}")).await?;
        Ok(resp.json().await?)
    }
}
