//! Shared HTTP response helpers.
//!
//! Centralizes status-code classification so each endpoint module only
//! builds its request and maps its response.

use reqwest::StatusCode;

use crate::error::GithubError;

/// Fallback wait when GitHub gives no usable hint.
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// Check a response for error statuses.
///
/// - **404** → [`GithubError::NotFound`] naming `resource`.
/// - **429**, or **403** with `x-ratelimit-remaining: 0` →
///   [`GithubError::RateLimited`], waiting for `Retry-After`, else until
///   `x-ratelimit-reset`, else 60 s.
/// - **401** → [`GithubError::Unauthorized`].
/// - Other non-success → [`GithubError::Api`] with the body as message.
pub async fn check_response(
    resp: reqwest::Response,
    resource: &str,
) -> Result<reqwest::Response, GithubError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    if status == StatusCode::TOO_MANY_REQUESTS
        || (status == StatusCode::FORBIDDEN && budget_exhausted(&resp))
    {
        return Err(GithubError::RateLimited {
            retry_after_secs: retry_after(&resp),
        });
    }
    match status {
        StatusCode::NOT_FOUND => Err(GithubError::NotFound {
            resource: resource.to_string(),
        }),
        StatusCode::UNAUTHORIZED => Err(GithubError::Unauthorized),
        _ => Err(GithubError::Api {
            status: status.as_u16(),
            message: resp.text().await.unwrap_or_default(),
        }),
    }
}

fn header<'a>(resp: &'a reqwest::Response, name: &str) -> Option<&'a str> {
    resp.headers().get(name).and_then(|v| v.to_str().ok())
}

fn budget_exhausted(resp: &reqwest::Response) -> bool {
    header(resp, "x-ratelimit-remaining").is_some_and(|v| v.trim() == "0")
}

fn retry_after(resp: &reqwest::Response) -> u64 {
    if let Some(secs) = header(resp, "retry-after").and_then(|v| v.trim().parse().ok()) {
        return secs;
    }
    header(resp, "x-ratelimit-reset")
        .and_then(|v| v.trim().parse::<i64>().ok())
        .map(|reset| {
            let wait = reset.saturating_sub(chrono::Utc::now().timestamp()).max(1);
            u64::try_from(wait).unwrap_or(DEFAULT_RETRY_AFTER_SECS)
        })
        .unwrap_or(DEFAULT_RETRY_AFTER_SECS)
}
