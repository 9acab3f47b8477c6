//! parse → generate → parse over realistic documents.

use pretty_assertions::assert_eq;
use rstest::rstest;
use spark_core::enums::{EnhancedSection, FieldKey, PhaseId, Role};
use spark_core::{LegacyBody, SparkDocument};
use spark_markdown::{generate, new_enhanced, new_legacy, parse};

const LEGACY: &str = include_str!("fixtures/legacy_mesh.spark.md");
const ENHANCED: &str = include_str!("fixtures/enhanced_mesh.spark.md");

/// Fields that survive a round trip regardless of formatting.
fn assert_same_content(left: &SparkDocument, right: &SparkDocument) {
    assert_eq!(left.name, right.name);
    assert_eq!(left.contributors, right.contributors);
    assert_eq!(left.marked_for_deletion, right.marked_for_deletion);
    assert_eq!(left.shape(), right.shape());
    match (left.as_legacy(), right.as_legacy()) {
        (Some(a), Some(b)) => {
            for id in PhaseId::ALL {
                assert_eq!(a.phase(id).fields, b.phase(id).fields, "phase {id}");
            }
        }
        _ => {
            let (a, b) = (left.as_enhanced().unwrap(), right.as_enhanced().unwrap());
            assert_eq!(a.sections, b.sections);
            assert_eq!(a.proposals, b.proposals);
        }
    }
}

#[test]
fn legacy_fixture_regenerates_byte_for_byte() {
    let doc = parse(LEGACY);
    assert_eq!(doc.stability(), 2);
    assert_eq!(generate(&doc), LEGACY);
}

#[test]
fn enhanced_fixture_passes_through() {
    let doc = parse(ENHANCED);
    assert_eq!(doc.owner(), Some("alice"));
    assert_eq!(generate(&doc), ENHANCED);
}

#[test]
fn edited_enhanced_fixture_round_trips() {
    let mut doc = parse(ENHANCED);
    doc.as_enhanced_mut()
        .unwrap()
        .set_section(EnhancedSection::NextActions, "- [ ] Pilot on one feeder");
    let out = generate(&doc);
    assert!(out.contains("owner: \"alice\""));
    assert!(!out.contains("Section 5 (Feedback"));
    assert_same_content(&doc, &parse(&out));
}

#[test]
fn edited_legacy_fixture_round_trips() {
    let mut doc = parse(LEGACY);
    let body = doc.as_legacy_mut().unwrap();
    body.set_field(FieldKey::ClutchTest, "Replay one week of meter data.");
    body.set_field(FieldKey::Dependencies, "tokio, an interval data export");
    doc.set_contributor(Role::Builder, "bob").unwrap();

    let reparsed = parse(&generate(&doc));
    assert_same_content(&doc, &reparsed);
    assert_eq!(reparsed.stability(), 3);
}

#[rstest]
#[case::legacy(new_legacy("Grid Ledger"))]
#[case::enhanced(new_enhanced("Grid Ledger"))]
fn templates_round_trip(#[case] doc: SparkDocument) {
    let reparsed = parse(&generate(&doc));
    assert_same_content(&doc, &reparsed);
}

#[test]
fn built_legacy_document_round_trips() {
    let mut body = LegacyBody::templated();
    body.set_field(FieldKey::Observation, "Idle panels at noon.");
    body.set_field(FieldKey::Gap, "No local settlement.");
    body.set_field(FieldKey::NovelCore, "Settle on the feeder.");
    let mut doc = SparkDocument::legacy("Mesh", body);
    doc.set_contributor(Role::Scout, "alice").unwrap();
    doc.marked_for_deletion = true;

    let reparsed = parse(&generate(&doc));
    assert_same_content(&doc, &reparsed);
}

#[test]
fn unmarking_deletion_removes_the_flag() {
    let mut doc = new_legacy("Mesh");
    doc.marked_for_deletion = true;
    let mut marked = parse(&generate(&doc));
    assert!(marked.marked_for_deletion);

    marked.marked_for_deletion = false;
    let out = generate(&marked);
    assert!(!out.contains("deletion_pending"));
    assert!(!parse(&out).marked_for_deletion);
}
