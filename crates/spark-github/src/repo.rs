//! Repository references.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::GithubError;

/// An `owner/repo` pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepoRef {
    pub owner: String,
    pub repo: String,
}

impl RepoRef {
    #[must_use]
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    /// Parse `owner/repo`, `github.com/owner/repo`, or
    /// `https://github.com/owner/repo(.git)`. Trailing path segments such as
    /// `/tree/main` are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`GithubError::InvalidRepo`] when fewer than two segments remain.
    pub fn parse(input: &str) -> Result<Self, GithubError> {
        let trimmed = input.trim();
        let rest = trimmed
            .strip_prefix("https://")
            .or_else(|| trimmed.strip_prefix("http://"))
            .unwrap_or(trimmed);
        let rest = rest.strip_prefix("www.").unwrap_or(rest);
        let rest = rest.strip_prefix("github.com/").unwrap_or(rest);

        let mut parts = rest.split('/').filter(|part| !part.is_empty());
        match (parts.next(), parts.next()) {
            (Some(owner), Some(repo)) => {
                let repo = repo.strip_suffix(".git").unwrap_or(repo);
                if owner.contains(':') || repo.is_empty() {
                    return Err(GithubError::InvalidRepo(input.to_string()));
                }
                Ok(Self::new(owner, repo))
            }
            _ => Err(GithubError::InvalidRepo(input.to_string())),
        }
    }

    /// Cache key for a branch or path of this repository.
    #[must_use]
    pub fn key(&self, suffix: &str) -> String {
        format!("{self}:{suffix}")
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}
