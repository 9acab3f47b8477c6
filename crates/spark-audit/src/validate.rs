use spark_core::entities::{NEW_SPARK_NAME, UNTITLED_NAME};
use spark_core::enums::{EnhancedSection, FieldKey, PhaseId, Role};
use spark_core::handle::is_valid_handle;
use spark_core::markup::strip_comments;
use spark_core::responses::ValidationReport;
use spark_core::{EnhancedBody, LegacyBody, SparkBody, SparkDocument};


const NARRATIVE_MIN: usize = 50;
const SECTION_MIN: usize = 10;
const SPARK_CONTENT_MIN: usize = 20;

/// Check a document before export or submission.
///
/// Every violated rule contributes one message; nothing short-circuits. The
/// document is never modified.
#[must_use]
pub fn validate(doc: &SparkDocument) -> ValidationReport {
    let mut errors = Vec::new();
    check_name(doc, &mut errors);
    match &doc.body {
        SparkBody::Enhanced(body) => check_enhanced(doc, body, &mut errors),
        SparkBody::Legacy(body) => check_legacy(doc, body, &mut errors),
    }
    if !errors.is_empty() {
        tracing::debug!(name = %doc.name, errors = errors.len(), "spark failed validation");
    }
    ValidationReport::from_errors(errors)
}

fn check_name(doc: &SparkDocument, errors: &mut Vec<String>) {
    let name = doc.name.trim();
    if name.is_empty() {
        errors.push("Spark name is required".into());
    } else if doc.is_enhanced() && [NEW_SPARK_NAME, UNTITLED_NAME].contains(&name) {
        errors.push(format!("Spark name must be changed from \"{name}\""));
    }
}

fn check_enhanced(doc: &SparkDocument, body: &EnhancedBody, errors: &mut Vec<String>) {
    let narrative = EnhancedSection::Narrative;
    if content_len(body.section(narrative)) <= NARRATIVE_MIN {
        errors.push(format!(
            "Section {narrative} must be more than {NARRATIVE_MIN} characters"
        ));
    }

    for number in &body.active_sections {
        let Ok(section) = EnhancedSection::from_number(*number) else {
            continue;
        };
        if section != narrative && content_len(body.section(section)) <= SECTION_MIN {
            errors.push(format!(
                "Section {section} must be more than {SECTION_MIN} characters"
            ));
        }
    }

    if let Some(owner) = doc.owner() {
        check_handle(Role::Scout, owner, errors);
    }
}

fn check_legacy(doc: &SparkDocument, body: &LegacyBody, errors: &mut Vec<String>) {
    match doc.contributor(Role::Scout) {
        Some(scout) => check_handle(Role::Scout, scout, errors),
        None => errors.push("Spark phase requires a scout handle".into()),
    }
    for role in [Role::Designer, Role::Builder] {
        if let Some(handle) = doc.contributor(role) {
            check_handle(role, handle, errors);
        }
    }

    let spark = body.phase(PhaseId::Spark);
    let longest = [FieldKey::Observation, FieldKey::Gap, FieldKey::Why]
        .iter()
        .map(|key| spark.field(*key))
        .chain([spark.notes.as_str()])
        .map(|text| text.trim().chars().count())
        .max()
        .unwrap_or_default();
    if longest < SPARK_CONTENT_MIN {
        errors.push(format!(
            "Spark phase needs at least {SPARK_CONTENT_MIN} characters in its notes, observation, gap, or why"
        ));
    }
}

fn check_handle(role: Role, handle: &str, errors: &mut Vec<String>) {
    if !is_valid_handle(handle) {
        errors.push(format!(
            "{} handle \"{handle}\" may only contain letters, digits, and hyphens",
            role.label()
        ));
    }
}

/// Trimmed length with HTML comments removed, so template scaffolding does
/// not pass as content.
fn content_len(text: &str) -> usize {
    strip_comments(text).trim().chars().count()
}
