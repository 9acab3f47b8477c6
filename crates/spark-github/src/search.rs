//! Code search for spark files.

use crate::contents::ContentItem;
use crate::{GithubClient, RepoRef, SPARK_SUFFIX, error::GithubError, http::check_response};

#[derive(serde::Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(serde::Deserialize)]
struct SearchItem {
    name: String,
    path: String,
}

impl GithubClient {
    /// Find `*.spark.md` files anywhere in `repo` via code search.
    ///
    /// Code search only indexes the default branch.
    ///
    /// # Errors
    ///
    /// Returns [`GithubError`] if the request fails or search is unavailable,
    /// which is common for anonymous callers.
    pub async fn search_spark_files(&self, repo: &RepoRef) -> Result<Vec<ContentItem>, GithubError> {
        let query = format!("filename:{SPARK_SUFFIX} repo:{repo}");
        let url = self.api_url(&format!("search/code?q={}", urlencoding::encode(&query)));
        let resp = check_response(self.get(&url).send().await?, "code search").await?;

        let data: SearchResponse = resp.json().await?;
        Ok(data
            .items
            .into_iter()
            .filter(|item| item.name.ends_with(SPARK_SUFFIX))
            .map(|item| ContentItem {
                name: item.name,
                path: item.path,
                download_url: None,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"{
        "total_count": 2,
        "incomplete_results": false,
        "items": [
            {
                "name": "solar-mesh.spark.md",
                "path": "sparks/solar-mesh.spark.md",
                "sha": "abc",
                "html_url": "https://github.com/acme/ideas/blob/main/sparks/solar-mesh.spark.md"
            },
            {
                "name": "README.md",
                "path": "sparks/README.md",
                "sha": "def"
            }
        ]
    }"#;

    #[test]
    fn parse_search_response() {
        let data: SearchResponse = serde_json::from_str(FIXTURE).unwrap();
        assert_eq!(data.items.len(), 2);
        assert_eq!(data.items[0].path, "sparks/solar-mesh.spark.md");
    }

    #[test]
    fn missing_items_is_empty() {
        let data: SearchResponse = serde_json::from_str("{}").unwrap();
        assert!(data.items.is_empty());
    }
}
