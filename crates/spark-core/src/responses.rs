//! Response types returned by the audit, validation, and relay surfaces.
//!
//! These serialize to the JSON shapes the editor UI and `spark` CLI consume.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{AuditStatus, Confidence, Recommendation};

/// A reward owed to one contributor.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MeritEntry {
    /// Handle including the leading `@`.
    pub handle: String,
    pub role: String,
    pub reward: String,
}

/// Go/no-go classification of a spark.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AuditSummary {
    pub status: AuditStatus,
    pub recommendation: Recommendation,
    pub scribe_report: String,
    pub critical_flaws: Vec<String>,
    pub merit_plan: Vec<MeritEntry>,
    /// Named completeness checks and whether each passed.
    pub checks: BTreeMap<String, bool>,
    pub confidence_level: Confidence,
    pub governance_notes: Vec<String>,
    /// How many of the three stability checks passed.
    pub stable_count: u8,
}

/// Outcome of validating a document before export or submission.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<String>,
}

impl ValidationReport {
    #[must_use]
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }
}

/// Identity block attached to a mission report.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SparkInfo {
    pub id: String,
    pub name: String,
    pub stability_score: u8,
}

/// Response of the mission endpoints and `spark audit`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MissionReport {
    pub spark_info: SparkInfo,
    pub audit: AuditSummary,
}

/// One spark file returned by a repository listing.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SparkFile {
    pub name: String,
    pub path: String,
    pub content: String,
}

/// Response of the listing endpoint and `spark list`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SparkListing {
    pub repo: String,
    pub branch: String,
    pub sparks: Vec<SparkFile>,
    /// Served from the cache without contacting upstream.
    #[serde(default)]
    pub cached: bool,
    /// Upstream failed and a previously cached listing was served instead.
    #[serde(default)]
    pub stale: bool,
    /// Upstream failure text when `stale` is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Open change requests touching one spark file.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct OpenPullRequests {
    pub path: String,
    pub count: usize,
    pub urls: Vec<String>,
}

/// Result of submitting a document as a change request.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SubmissionResponse {
    pub pr_url: String,
    pub branch: String,
}
