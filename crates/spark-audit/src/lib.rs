//! # spark-audit
//!
//! Read-only judgements over a [`SparkDocument`]:
//!
//! - [`summarize`] classifies a spark as RED/YELLOW/GREEN with a
//!   recommendation, critical flaws, and a merit plan.
//! - [`validate`] collects every rule a document breaks before it may be
//!   exported or submitted.
//! - [`mission_report`] wraps a summary with the spark's identity, as served
//!   by the relay and printed by `spark audit`.
//!
//! Nothing here touches I/O. The same document always yields the same result,
//! whether it was parsed locally or rebuilt from freshly fetched text.
//!
//! [`SparkDocument`]: spark_core::SparkDocument

mod meaningful;
mod summarize;
mod validate;

pub use meaningful::meaningful_len;
pub use summarize::{mission_report, summarize};
pub use validate::validate;
