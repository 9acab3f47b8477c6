//! GitHub error types.

use thiserror::Error;

/// Errors that can occur when talking to GitHub.
#[derive(Debug, Error)]
pub enum GithubError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// 404 for a repository, branch, or file.
    #[error("not found: {resource}")]
    NotFound { resource: String },

    /// 429, or 403 with the rate-limit budget exhausted.
    #[error("GitHub API rate limit exceeded, retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    /// 401. The token is missing, expired, or lacks a scope.
    #[error("GitHub rejected the credentials")]
    Unauthorized,

    /// Any other non-success status.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Failed to parse a response.
    #[error("parse error: {0}")]
    Parse(String),

    /// Input that does not name a repository.
    #[error("invalid repository '{0}': use owner/repo or https://github.com/owner/repo")]
    InvalidRepo(String),
}

/// Coarse failure category, for choosing a recovery action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Retry is pointless; offer a different path or repository.
    NotFound,
    /// Wait, or fall back to cached data.
    RateLimited,
    /// Prompt for credentials.
    Unauthorized,
    /// Invalid input from the caller.
    Invalid,
    Other,
}

impl FailureKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotFound => "not_found",
            Self::RateLimited => "rate_limited",
            Self::Unauthorized => "unauthorized",
            Self::Invalid => "invalid",
            Self::Other => "other",
        }
    }
}

impl GithubError {
    #[must_use]
    pub const fn kind(&self) -> FailureKind {
        match self {
            Self::NotFound { .. } => FailureKind::NotFound,
            Self::RateLimited { .. } => FailureKind::RateLimited,
            Self::Unauthorized => FailureKind::Unauthorized,
            Self::InvalidRepo(_) => FailureKind::Invalid,
            Self::Http(_) | Self::Api { .. } | Self::Parse(_) => FailureKind::Other,
        }
    }
}

impl From<serde_json::Error> for GithubError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
