//! Spark listing: discover spark files, then fetch their text.

use std::sync::Arc;

use spark_core::responses::SparkFile;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use crate::contents::ContentItem;
use crate::{GithubClient, RepoRef, error::GithubError};

/// Upper bound on simultaneous file downloads during a listing.
pub const MAX_CONCURRENT_FETCHES: usize = 8;

impl GithubClient {
    /// Locate spark files in `repo`.
    ///
    /// Code search runs first. When it fails or finds nothing, the
    /// `dir` directory at `branch` is listed instead.
    ///
    /// # Errors
    ///
    /// Returns the directory listing's [`GithubError`] when both strategies fail.
    pub async fn find_spark_files(
        &self,
        repo: &RepoRef,
        branch: &str,
        dir: &str,
    ) -> Result<Vec<ContentItem>, GithubError> {
        match self.search_spark_files(repo).await {
            Ok(items) if !items.is_empty() => {
                tracing::debug!(%repo, count = items.len(), "code search found sparks");
                return Ok(items);
            }
            Ok(_) => tracing::debug!(%repo, "code search empty, listing directory"),
            Err(e) => tracing::debug!(%repo, %e, "code search failed, listing directory"),
        }
        self.list_directory(repo, dir, branch).await
    }

    /// List spark files and fetch each one's text concurrently, at most
    /// [`MAX_CONCURRENT_FETCHES`] at a time.
    ///
    /// Files that fail to download are logged and skipped. The result is
    /// sorted by path.
    ///
    /// # Errors
    ///
    /// Returns [`GithubError`] if no listing strategy succeeds.
    pub async fn list_sparks(
        &self,
        repo: &RepoRef,
        branch: &str,
        dir: &str,
    ) -> Result<Vec<SparkFile>, GithubError> {
        let items = self.find_spark_files(repo, branch, dir).await?;

        let permits = Arc::new(Semaphore::new(MAX_CONCURRENT_FETCHES));
        let mut set = JoinSet::new();
        for item in items {
            let client = self.clone();
            let repo = repo.clone();
            let branch = branch.to_string();
            let permits = Arc::clone(&permits);
            set.spawn(async move {
                // The semaphore is never closed.
                let _permit = permits.acquire_owned().await.ok();
                let fetched = match &item.download_url {
                    Some(url) => client.fetch_url(url, &item.path).await,
                    None => client.fetch_raw(&repo, &branch, &item.path).await,
                };
                (item, fetched)
            });
        }

        let mut sparks = Vec::new();
        while let Some(joined) = set.join_next().await {
            match joined {
                Ok((item, Ok(content))) => sparks.push(SparkFile {
                    name: item.name,
                    path: item.path,
                    content,
                }),
                Ok((item, Err(e))) => {
                    tracing::warn!(%repo, path = %item.path, %e, "skipping spark that failed to download");
                }
                Err(e) => tracing::warn!(%repo, %e, "spark download task failed"),
            }
        }
        sparks.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(sparks)
    }
}
