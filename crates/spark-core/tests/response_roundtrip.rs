//! Serde roundtrip and JsonSchema validation tests for response types.

use std::collections::BTreeMap;

use schemars::schema_for;
use spark_core::enums::{AuditStatus, Confidence, Recommendation};
use spark_core::responses::*;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn yellow_summary() -> AuditSummary {
    AuditSummary {
        status: AuditStatus::Yellow,
        recommendation: Recommendation::RequestRefinement,
        scribe_report: "⚠️ Needs refinement before merge.".into(),
        critical_flaws: vec!["Section 3 (Simulation) or Section 4 (Evaluation) needed".into()],
        merit_plan: vec![MeritEntry {
            handle: "@alice".into(),
            role: "Owner".into(),
            reward: "+5 CS".into(),
        }],
        checks: BTreeMap::from([
            ("narrative_complete".to_string(), true),
            ("hypothesis_complete".to_string(), true),
            ("evaluation_planned".to_string(), false),
        ]),
        confidence_level: Confidence::Medium,
        governance_notes: vec!["Address critical flaws and re-run the audit.".into()],
        stable_count: 2,
    }
}

roundtrip_and_validate!(audit_summary_roundtrip, AuditSummary, yellow_summary());

roundtrip_and_validate!(
    mission_report_roundtrip,
    MissionReport,
    MissionReport {
        spark_info: SparkInfo {
            id: "solar-mesh".into(),
            name: "Solar Mesh".into(),
            stability_score: 2,
        },
        audit: yellow_summary(),
    }
);

roundtrip_and_validate!(
    validation_report_roundtrip,
    ValidationReport,
    ValidationReport::from_errors(vec!["Spark name is required".into()])
);

roundtrip_and_validate!(
    listing_roundtrip,
    SparkListing,
    SparkListing {
        repo: "rvishravars/thecommons".into(),
        branch: "main".into(),
        sparks: vec![SparkFile {
            name: "mesh.spark.md".into(),
            path: "sparks/mesh.spark.md".into(),
            content: "# Mesh\n".into(),
        }],
        cached: false,
        stale: true,
        error: Some("rate limited".into()),
    }
);

roundtrip_and_validate!(
    open_prs_roundtrip,
    OpenPullRequests,
    OpenPullRequests {
        path: "sparks/mesh.spark.md".into(),
        count: 1,
        urls: vec!["https://github.com/o/r/pull/7".into()],
    }
);

#[test]
fn audit_summary_uses_wire_spelling() {
    let json = serde_json::to_value(yellow_summary()).unwrap();
    assert_eq!(json["status"], "YELLOW");
    assert_eq!(json["recommendation"], "Request Refinement");
    assert_eq!(json["confidence_level"], "medium");
}
