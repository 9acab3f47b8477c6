//! Relay server settings.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_listen() -> String {
    "0.0.0.0:8080".to_string()
}

/// Default listing and PR cache lifetime in seconds.
const fn default_cache_ttl_secs() -> u64 {
    60
}

fn default_repo() -> String {
    "rvishravars/thecommons".to_string()
}

fn default_branch() -> String {
    "main".to_string()
}

fn default_spark_dir() -> String {
    "sparks".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RelayConfig {
    /// Socket address the relay binds to.
    #[serde(default = "default_listen")]
    pub listen: String,

    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,

    /// Repository listed when a request names none, as `owner/repo`.
    #[serde(default = "default_repo")]
    pub default_repo: String,

    #[serde(default = "default_branch")]
    pub default_branch: String,

    /// Directory searched for `*.spark.md` when code search finds nothing.
    #[serde(default = "default_spark_dir")]
    pub spark_dir: String,

    /// Built editor bundle served at `/`, with `index.html` as fallback.
    #[serde(default)]
    pub static_dir: Option<PathBuf>,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            cache_ttl_secs: default_cache_ttl_secs(),
            default_repo: default_repo(),
            default_branch: default_branch(),
            spark_dir: default_spark_dir(),
            static_dir: None,
        }
    }
}

impl RelayConfig {
    /// `(owner, repo)` of the default repository if it has that shape.
    #[must_use]
    pub fn default_repo_parts(&self) -> Option<(&str, &str)> {
        let (owner, repo) = self.default_repo.trim().split_once('/')?;
        let valid = |part: &str| {
            !part.is_empty()
                && part
                    .bytes()
                    .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.'))
        };
        (valid(owner) && valid(repo)).then_some((owner, repo))
    }
}
