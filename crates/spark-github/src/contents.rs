//! Repository contents API.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

use crate::{
    GithubClient, RepoRef, SPARK_SUFFIX, encode_path, error::GithubError, http::check_response,
};

/// A file found by search or directory listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    pub name: String,
    pub path: String,
    /// Direct raw URL when the API supplied one.
    #[serde(default)]
    pub download_url: Option<String>,
}

#[derive(Deserialize)]
struct DirectoryEntry {
    name: String,
    path: String,
    #[serde(rename = "type")]
    kind: String,
    download_url: Option<String>,
}

#[derive(Deserialize)]
struct FileMetadata {
    sha: String,
}

impl GithubClient {
    /// List `*.spark.md` files directly inside `dir` at `branch`.
    ///
    /// # Errors
    ///
    /// Returns [`GithubError::NotFound`] when the repository or directory
    /// does not exist, or another [`GithubError`] on transport failure.
    pub async fn list_directory(
        &self,
        repo: &RepoRef,
        dir: &str,
        branch: &str,
    ) -> Result<Vec<ContentItem>, GithubError> {
        let url = self.api_url(&format!(
            "repos/{repo}/contents/{}?ref={}",
            encode_path(dir),
            urlencoding::encode(branch)
        ));
        let resource = format!("{repo}/{dir} at {branch}");
        let resp = check_response(self.get(&url).send().await?, &resource).await?;

        let entries: Vec<DirectoryEntry> = resp.json().await?;
        Ok(spark_entries(entries))
    }

    /// Blob sha of `path` at `branch`, or `None` if the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`GithubError`] for failures other than not-found.
    pub async fn file_sha(
        &self,
        repo: &RepoRef,
        path: &str,
        branch: &str,
    ) -> Result<Option<String>, GithubError> {
        let url = self.api_url(&format!(
            "repos/{repo}/contents/{}?ref={}",
            encode_path(path),
            urlencoding::encode(branch)
        ));
        match check_response(self.get(&url).send().await?, path).await {
            Ok(resp) => Ok(Some(resp.json::<FileMetadata>().await?.sha)),
            Err(GithubError::NotFound { .. }) => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Create or update `path` on `branch` in a single commit.
    ///
    /// # Errors
    ///
    /// Returns [`GithubError`] if GitHub rejects the write.
    pub async fn put_file(
        &self,
        repo: &RepoRef,
        path: &str,
        request: &PutFile<'_>,
    ) -> Result<(), GithubError> {
        let url = self.api_url(&format!("repos/{repo}/contents/{}", encode_path(path)));
        let body = serde_json::json!({
            "message": request.message,
            "content": STANDARD.encode(request.content),
            "branch": request.branch,
            "sha": request.sha,
        });
        check_response(
            self.request(reqwest::Method::PUT, &url).json(&body).send().await?,
            path,
        )
        .await?;
        Ok(())
    }
}

/// Arguments of a contents write.
pub(crate) struct PutFile<'a> {
    pub message: &'a str,
    pub content: &'a str,
    pub branch: &'a str,
    /// Existing blob sha; required by GitHub when updating.
    pub sha: Option<&'a str>,
}

fn spark_entries(entries: Vec<DirectoryEntry>) -> Vec<ContentItem> {
    entries
        .into_iter()
        .filter(|entry| entry.kind == "file" && entry.name.ends_with(SPARK_SUFFIX))
        .map(|entry| ContentItem {
            name: entry.name,
            path: entry.path,
            download_url: entry.download_url,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const FIXTURE: &str = r#"[
        {
            "name": "solar-mesh.spark.md",
            "path": "sparks/solar-mesh.spark.md",
            "type": "file",
            "download_url": "https://raw.githubusercontent.com/acme/ideas/main/sparks/solar-mesh.spark.md"
        },
        {
            "name": "archive",
            "path": "sparks/archive",
            "type": "dir",
            "download_url": null
        },
        {
            "name": "notes.md",
            "path": "sparks/notes.md",
            "type": "file",
            "download_url": "https://raw.githubusercontent.com/acme/ideas/main/sparks/notes.md"
        }
    ]"#;

    #[test]
    fn keeps_only_spark_files() {
        let entries: Vec<DirectoryEntry> = serde_json::from_str(FIXTURE).unwrap();
        let items = spark_entries(entries);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "solar-mesh.spark.md");
        assert!(items[0].download_url.is_some());
    }

    #[test]
    fn parse_file_metadata() {
        let meta: FileMetadata =
            serde_json::from_str(r#"{"name": "a.spark.md", "sha": "3d21ec53a331a6f037a91c368710b99387d012c1"}"#)
                .unwrap();
        assert_eq!(meta.sha, "3d21ec53a331a6f037a91c368710b99387d012c1");
    }
}
