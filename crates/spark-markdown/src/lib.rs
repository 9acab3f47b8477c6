//! # spark-markdown
//!
//! Bidirectional transform between spark markdown and [`SparkDocument`].
//!
//! The format is a small fixed vocabulary layered on markdown: phase headers,
//! numbered section headers, bold field labels, and a status line. It is
//! matched with regular expressions against that vocabulary, not with a
//! general markdown parser. Label adjacency ("capture until the next bold
//! label") is part of the format and would not survive an AST round trip.
//!
//! - [`parse`] never fails. Unrecognized structure degrades to empty fields.
//! - [`generate`] is total and deterministic.
//! - [`sanitize`] flattens a field value to one clean line before emission.
//!
//! [`SparkDocument`]: spark_core::SparkDocument

mod extract;
mod generate;
mod patterns;
mod sanitize;
pub mod templates;

pub use extract::parse;
pub use generate::{DELETION_NOTICE, generate};
pub use sanitize::sanitize;
pub use templates::{ENHANCED_TEMPLATE, new_enhanced, new_legacy};

/// Substring whose presence selects the enhanced shape.
pub const ENHANCED_SENTINEL: &str = "spark_type:";
