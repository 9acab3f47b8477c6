//! Raw file content.

use crate::{GithubClient, RepoRef, encode_path, error::GithubError, http::check_response};

impl GithubClient {
    /// Fetch the text of `path` at `branch` from the raw content host.
    ///
    /// # Errors
    ///
    /// Returns [`GithubError::NotFound`] when the file does not exist at that
    /// branch, or another [`GithubError`] on transport failure.
    pub async fn fetch_raw(
        &self,
        repo: &RepoRef,
        branch: &str,
        path: &str,
    ) -> Result<String, GithubError> {
        let url = self.raw_url(repo, branch, path);
        self.fetch_url(&url, path).await
    }

    /// Fetch text from a fully-formed URL such as a contents `download_url`.
    pub(crate) async fn fetch_url(&self, url: &str, resource: &str) -> Result<String, GithubError> {
        let mut builder = self.http.get(url);
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }
        let resp = check_response(builder.send().await?, resource).await?;
        Ok(resp.text().await?)
    }

    fn raw_url(&self, repo: &RepoRef, branch: &str, path: &str) -> String {
        format!(
            "{}/{}/{}/{}/{}",
            self.raw_base,
            urlencoding::encode(&repo.owner),
            urlencoding::encode(&repo.repo),
            encode_path(branch),
            encode_path(path)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn raw_url_layout() {
        let client = GithubClient::default();
        let repo = RepoRef::new("acme", "ideas");
        assert_eq!(
            client.raw_url(&repo, "main", "sparks/solar-mesh.spark.md"),
            "https://raw.githubusercontent.com/acme/ideas/main/sparks/solar-mesh.spark.md"
        );
    }

    #[test]
    fn branch_with_slash_keeps_segments() {
        let client = GithubClient::default();
        let repo = RepoRef::new("acme", "ideas");
        assert_eq!(
            client.raw_url(&repo, "spark/1700000000", "a.spark.md"),
            "https://raw.githubusercontent.com/acme/ideas/spark/1700000000/a.spark.md"
        );
    }
}
