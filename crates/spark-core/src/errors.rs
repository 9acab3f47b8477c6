//! Cross-cutting error types for Spark Assembly Lab.
//!
//! The document transforms themselves never fail. These errors cover
//! construction mistakes made by callers: unknown section numbers and
//! invalid handles. Collaborator errors (`GithubError`, `ConfigError`) live
//! in their own crates.

use thiserror::Error;

/// Errors that can be raised by any Spark crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A section number outside `1..=8` was used.
    #[error("Unknown section number: {0} (expected 1-8)")]
    UnknownSection(u8),

    /// A contributor handle failed the `^[A-Za-z0-9-]+$` check.
    #[error("Invalid contributor handle: {0:?}")]
    InvalidHandle(String),
}
