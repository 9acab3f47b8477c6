//! # spark-relay
//!
//! Thin HTTP relay between the spark editor and GitHub.
//!
//! | Route | Purpose |
//! |---|---|
//! | `GET /api/health` | liveness |
//! | `GET /api/sparks?repo&branch&path` | cached repository listing with markdown |
//! | `POST /api/mission` | audit posted markdown |
//! | `POST /api/mission/file` | fetch a spark, then audit it |
//! | `GET /api/prs?repo&path` | cached open pull requests touching a spark |
//! | `POST /api/submit` | validate, then open a pull request |
//! | `GET /api/user` | handle behind the caller's token |
//!
//! Listings and pull request lookups sit behind TTL caches. When GitHub fails
//! and an expired entry exists, the expired entry is served and flagged.

mod api;
mod cache;
mod error;
mod state;

pub use api::router;
pub use cache::{ListingCache, Lookup, PrCache, TtlCache};
pub use error::RelayError;
pub use state::AppState;

use std::net::SocketAddr;
use std::sync::Arc;

use spark_config::SparkConfig;
use spark_github::GithubClient;

/// Bind `config.relay.listen` and serve until Ctrl-C.
///
/// # Errors
///
/// Returns [`RelayError`] if the configuration is invalid or the listener
/// cannot be bound.
pub async fn serve(config: &SparkConfig) -> Result<(), RelayError> {
    config.validate()?;
    let addr: SocketAddr = config.relay.listen.parse().map_err(|_| {
        RelayError::BadRequest(format!("invalid listen address '{}'", config.relay.listen))
    })?;

    let source = Arc::new(GithubClient::new(&config.github));
    let state = AppState::new(source, config.relay.clone());
    let app = router(state, config.relay.static_dir.as_deref());

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, authenticated = config.github.is_configured(), "relay listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("shutdown requested");
}
