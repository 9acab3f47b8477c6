//! # spark-github
//!
//! GitHub collaborator for Spark Assembly Lab.
//!
//! Everything the document core never does itself lives here:
//! - listing `*.spark.md` files (code search, then directory listing)
//! - fetching raw file text
//! - finding open pull requests that touch a spark
//! - submitting an edited spark as a pull request
//! - resolving the handle behind a token
//!
//! Failures carry a [`FailureKind`] so callers can tell not-found from
//! rate-limited from unauthorized. There is no retry policy here.

mod contents;
mod error;
mod http;
mod listing;
mod pulls;
mod raw;
mod repo;
mod search;
mod source;
mod submit;
mod user;

pub use contents::ContentItem;
pub use error::{FailureKind, GithubError};
pub use listing::MAX_CONCURRENT_FETCHES;
pub use repo::RepoRef;
pub use source::SparkSource;
pub use submit::{DEFAULT_PR_BODY, DEFAULT_PR_TITLE, Submission, submission_branch};

use std::time::Duration;

use reqwest::header::ACCEPT;
use spark_config::GithubConfig;

/// Suffix identifying spark files.
pub const SPARK_SUFFIX: &str = ".spark.md";

/// HTTP client for the GitHub REST API and raw content host.
#[derive(Debug, Clone)]
pub struct GithubClient {
    http: reqwest::Client,
    api_base: String,
    raw_base: String,
    token: Option<String>,
}

impl Default for GithubClient {
    fn default() -> Self {
        Self::new(&GithubConfig::default())
    }
}

impl GithubClient {
    /// Create a client from configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    #[must_use]
    pub fn new(config: &GithubConfig) -> Self {
        Self {
            http: reqwest::Client::builder()
                .user_agent(config.user_agent.as_str())
                .timeout(Duration::from_secs(config.timeout_secs))
                .build()
                .expect("reqwest client should build"),
            api_base: config.api_base.trim_end_matches('/').to_string(),
            raw_base: config.raw_base.trim_end_matches('/').to_string(),
            token: config.token().map(str::to_string),
        }
    }

    /// A copy of this client that authenticates with `token` instead.
    /// `None` keeps the configured token.
    #[must_use]
    pub fn with_token(&self, token: Option<&str>) -> Self {
        let mut client = self.clone();
        if let Some(token) = token.map(str::trim).filter(|t| !t.is_empty()) {
            client.token = Some(token.to_string());
        }
        client
    }

    #[must_use]
    pub const fn has_token(&self) -> bool {
        self.token.is_some()
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.api_base, path.trim_start_matches('/'))
    }

    /// Request against the REST API with the JSON media type and bearer token.
    fn request(&self, method: reqwest::Method, url: &str) -> reqwest::RequestBuilder {
        let builder = self
            .http
            .request(method, url)
            .header(ACCEPT, "application/vnd.github+json");
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.request(reqwest::Method::GET, url)
    }
}

/// Percent-encode each segment of a slash-separated repository path.
fn encode_path(path: &str) -> String {
    path.trim_matches('/')
        .split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}
