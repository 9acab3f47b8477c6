//! The collaborator capabilities the document tools consume.

use async_trait::async_trait;
use spark_core::responses::{OpenPullRequests, SparkFile, SubmissionResponse};

use crate::submit::Submission;
use crate::{GithubClient, RepoRef, error::GithubError};

/// A remote home for spark documents.
///
/// `token` arguments override the source's own credentials for one call.
#[async_trait]
pub trait SparkSource: Send + Sync {
    async fn list_sparks(
        &self,
        repo: &RepoRef,
        branch: &str,
        dir: &str,
    ) -> Result<Vec<SparkFile>, GithubError>;

    async fn fetch_raw(&self, repo: &RepoRef, branch: &str, path: &str)
    -> Result<String, GithubError>;

    async fn open_pull_requests(
        &self,
        repo: &RepoRef,
        path: &str,
        token: Option<&str>,
    ) -> Result<OpenPullRequests, GithubError>;

    async fn submit(
        &self,
        submission: &Submission,
        token: Option<&str>,
    ) -> Result<SubmissionResponse, GithubError>;

    async fn current_user(&self, token: Option<&str>) -> Result<Option<String>, GithubError>;
}

#[async_trait]
impl SparkSource for GithubClient {
    async fn list_sparks(
        &self,
        repo: &RepoRef,
        branch: &str,
        dir: &str,
    ) -> Result<Vec<SparkFile>, GithubError> {
        Self::list_sparks(self, repo, branch, dir).await
    }

    async fn fetch_raw(
        &self,
        repo: &RepoRef,
        branch: &str,
        path: &str,
    ) -> Result<String, GithubError> {
        Self::fetch_raw(self, repo, branch, path).await
    }

    async fn open_pull_requests(
        &self,
        repo: &RepoRef,
        path: &str,
        token: Option<&str>,
    ) -> Result<OpenPullRequests, GithubError> {
        self.with_token(token).open_pull_requests(repo, path).await
    }

    async fn submit(
        &self,
        submission: &Submission,
        token: Option<&str>,
    ) -> Result<SubmissionResponse, GithubError> {
        self.with_token(token).submit(submission).await
    }

    async fn current_user(&self, token: Option<&str>) -> Result<Option<String>, GithubError> {
        self.with_token(token).current_user().await
    }
}
