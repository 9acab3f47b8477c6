use std::collections::BTreeMap;

use spark_core::enums::{AuditStatus, EnhancedSection, FieldKey, Role};
use spark_core::responses::{AuditSummary, MeritEntry, MissionReport, SparkInfo};
use spark_core::{EnhancedBody, LegacyBody, SparkBody, SparkDocument};

use crate::meaningful::meaningful_len;

/// Minimum meaningful characters for an enhanced section to count as filled.
const MEANINGFUL_THRESHOLD: usize = 20;

const FLAW_NARRATIVE: &str = "Section 1 (Spark Narrative) is missing or needs more detail";
const FLAW_HYPOTHESIS: &str = "Section 2 (Hypothesis Formalization) is missing or needs more detail";
const FLAW_PLAN: &str = "Section 3 (Simulation) or Section 4 (Evaluation) needed";

/// The three named checks that decide a verdict, plus any informational ones.
struct Checks {
    stability: [(&'static str, bool); 3],
    extra: Vec<(&'static str, bool)>,
}

impl Checks {
    fn stable_count(&self) -> usize {
        self.stability.iter().filter(|(_, passed)| *passed).count()
    }

    fn into_map(self) -> BTreeMap<String, bool> {
        self.stability
            .into_iter()
            .chain(self.extra)
            .map(|(name, passed)| (name.to_string(), passed))
            .collect()
    }
}

/// Classify a document.
///
/// Enhanced documents are judged on sections 1, 2, and 3-or-4 carrying more
/// than twenty meaningful characters. Legacy documents are judged on the
/// Design and Logic phases; the Spark phase always passes.
#[must_use]
pub fn summarize(doc: &SparkDocument) -> AuditSummary {
    let (checks, critical_flaws) = match &doc.body {
        SparkBody::Enhanced(body) => enhanced_checks(body),
        SparkBody::Legacy(body) => legacy_checks(body),
    };

    let stable_count = checks.stable_count();
    let status = AuditStatus::from_stable_count(stable_count);
    let merit_plan = merit_plan(doc, status);

    let mut governance_notes = vec![governance_note(status).to_string()];
    if doc.as_legacy().is_some_and(|body| !body.recovered_sections.is_empty()) {
        governance_notes.push(
            "Numbered sections were found without spark_type; audited as a three-phase spark."
                .to_string(),
        );
    }

    tracing::debug!(
        name = %doc.name,
        %status,
        stable_count,
        flaws = critical_flaws.len(),
        "summarized spark"
    );

    AuditSummary {
        status,
        recommendation: status.recommendation(),
        scribe_report: scribe_report(status).to_string(),
        critical_flaws,
        merit_plan,
        checks: checks.into_map(),
        confidence_level: status.confidence(),
        governance_notes,
        // At most three checks.
        stable_count: u8::try_from(stable_count).unwrap_or(u8::MAX),
    }
}

/// Summary plus the identity block served by the mission endpoints.
#[must_use]
pub fn mission_report(doc: &SparkDocument) -> MissionReport {
    let audit = summarize(doc);
    MissionReport {
        spark_info: SparkInfo {
            id: doc.id(),
            name: doc.name.clone(),
            stability_score: audit.stable_count,
        },
        audit,
    }
}

fn enhanced_checks(body: &EnhancedBody) -> (Checks, Vec<String>) {
    let filled = |section| meaningful_len(body.section(section)) > MEANINGFUL_THRESHOLD;
    let narrative = filled(EnhancedSection::Narrative);
    let hypothesis = filled(EnhancedSection::Hypothesis);
    let plan = filled(EnhancedSection::Simulation) || filled(EnhancedSection::Evaluation);

    let flaws = [
        (narrative, FLAW_NARRATIVE),
        (hypothesis, FLAW_HYPOTHESIS),
        (plan, FLAW_PLAN),
    ]
    .into_iter()
    .filter(|(passed, _)| !passed)
    .map(|(_, flaw)| flaw.to_string())
    .collect();

    let checks = Checks {
        stability: [
            ("narrative_complete", narrative),
            ("hypothesis_complete", hypothesis),
            ("plan_complete", plan),
        ],
        extra: vec![("has_proposals", body.proposals.values().any(|p| !p.trim().is_empty()))],
    };
    (checks, flaws)
}

fn legacy_checks(body: &LegacyBody) -> (Checks, Vec<String>) {
    let has = |key| !body.field(key).trim().is_empty();
    let design = has(FieldKey::Blueprint) && has(FieldKey::Interface);
    let logic = has(FieldKey::TechnicalImpl) && has(FieldKey::ClutchTest);

    let flaws = [
        (FieldKey::Gap, "Missing gap definition in Spark"),
        (FieldKey::Interface, "Missing interface specification"),
        (FieldKey::ClutchTest, "Missing Clutch Power Test"),
        (FieldKey::Dependencies, "Missing dependency list"),
    ]
    .into_iter()
    .filter(|(key, _)| !has(*key))
    .map(|(_, flaw)| flaw.to_string())
    .collect();

    let checks = Checks {
        stability: [
            ("spark_complete", true),
            ("design_complete", design),
            ("logic_complete", logic),
        ],
        extra: vec![
            ("interface_snappable", has(FieldKey::Interface)),
            ("logic_testable", has(FieldKey::ClutchTest)),
        ],
    };
    (checks, flaws)
}

/// One entry per claimed role. Enhanced sparks only reward the owner.
fn merit_plan(doc: &SparkDocument, status: AuditStatus) -> Vec<MeritEntry> {
    let green = status == AuditStatus::Green;
    let roles: &[Role] = if doc.is_enhanced() {
        &[Role::Scout]
    } else {
        &Role::ALL
    };
    roles
        .iter()
        .filter_map(|role| {
            let handle = doc.contributor(*role)?;
            let reward = match role {
                Role::Scout => "+5 CS",
                Role::Designer if green => "+15 CS (+5 Echo bonus)",
                Role::Designer => "+15 CS",
                Role::Builder if green => "+25 CS (+10 Prototype bonus)",
                Role::Builder => "+25 CS",
            };
            Some(MeritEntry {
                handle: format!("@{handle}"),
                role: role.label().to_string(),
                reward: reward.to_string(),
            })
        })
        .collect()
}

const fn scribe_report(status: AuditStatus) -> &'static str {
    match status {
        AuditStatus::Green => "✅ Fully stable across all three phases.",
        AuditStatus::Yellow => "⚠️ Needs refinement before merge.",
        AuditStatus::Red => "❌ Unstable. Critical phases are missing or empty.",
    }
}

const fn governance_note(status: AuditStatus) -> &'static str {
    match status {
        AuditStatus::Green => {
            "Meets all Meritocratic Standards. Ready for Final Lock and community integration."
        }
        AuditStatus::Yellow => {
            "Shows promise but requires refinement before merge. Request contributors address feedback."
        }
        AuditStatus::Red => {
            "Does not meet Meritocratic Standards. Recommend rejection until critical flaws are resolved."
        }
    }
}
