//! # spark-core
//!
//! Core types shared by every Spark Assembly Lab crate:
//! - The [`SparkDocument`](entities::SparkDocument) model with its tagged
//!   legacy (3-phase) and enhanced (8-section) bodies
//! - Fixed vocabulary enums (phases, fields, sections, roles, audit verdicts)
//! - YAML frontmatter preserved line-by-line
//! - HTML comment stripping shared by the parser and the audit
//! - Stability scoring over the current document content
//! - Audit and validation response types
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod handle;
pub mod markup;
pub mod responses;
pub mod stability;

pub use entities::{EnhancedBody, Frontmatter, LegacyBody, Phase, SparkBody, SparkDocument};
pub use errors::CoreError;
