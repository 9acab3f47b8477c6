//! GitHub API access.

use serde::{Deserialize, Serialize};

fn default_api_base() -> String {
    "https://api.github.com".to_string()
}

fn default_raw_base() -> String {
    "https://raw.githubusercontent.com".to_string()
}

fn default_user_agent() -> String {
    "spark-assembly-lab".to_string()
}

/// Default request timeout in seconds.
const fn default_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GithubConfig {
    /// Personal access token sent as a bearer token. Anonymous when empty.
    #[serde(default)]
    pub token: String,

    /// REST API root, overridable for GitHub Enterprise or tests.
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Root serving raw file contents by `owner/repo/branch/path`.
    #[serde(default = "default_raw_base")]
    pub raw_base: String,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            api_base: default_api_base(),
            raw_base: default_raw_base(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl GithubConfig {
    /// Whether a token is available for authenticated calls.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.token.trim().is_empty()
    }

    /// The token, if set.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        Some(self.token.trim()).filter(|token| !token.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_public_github() {
        let config = GithubConfig::default();
        assert!(!config.is_configured());
        assert_eq!(config.token(), None);
        assert_eq!(config.api_base, "https://api.github.com");
        assert_eq!(config.raw_base, "https://raw.githubusercontent.com");
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn whitespace_token_is_not_configured() {
        let config = GithubConfig {
            token: "  ".into(),
            ..GithubConfig::default()
        };
        assert!(!config.is_configured());
    }
}
