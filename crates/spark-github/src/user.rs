//! Authenticated user lookup.

use crate::{GithubClient, error::GithubError, http::check_response};

#[derive(serde::Deserialize)]
struct User {
    login: String,
}

impl GithubClient {
    /// Handle of the user behind the token, or `None` when anonymous.
    ///
    /// # Errors
    ///
    /// Returns [`GithubError::Unauthorized`] if the token is rejected.
    pub async fn current_user(&self) -> Result<Option<String>, GithubError> {
        if self.token.is_none() {
            return Ok(None);
        }
        let resp = check_response(self.get(&self.api_url("user")).send().await?, "user").await?;
        let user: User = resp.json().await?;
        Ok(Some(user.login))
    }
}
