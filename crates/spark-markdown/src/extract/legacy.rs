use std::collections::BTreeMap;

use spark_core::LegacyBody;
use spark_core::entities::{EMPTY_STATUS, Phase};
use spark_core::enums::{FieldKey, PhaseId, Role};
use spark_core::handle::is_placeholder_handle;

use super::enhanced;
use crate::patterns::{FIELD_END, HANDLE, PHASE_END, STATUS_BRACKETED, STATUS_PLAIN, field_labels};

/// Lines dropped from a phase span when computing its notes.
const NOTE_SKIP_PREFIXES: [&str; 4] = ["*Status:", "*Scout:", "*Designer:", "*Builder:"];

pub(super) fn extract(text: &str) -> (LegacyBody, BTreeMap<Role, String>) {
    let mut contributors = BTreeMap::new();
    let phases = PhaseId::ALL.map(|id| {
        let (phase, handle) = extract_phase(text, id);
        if let Some(handle) = handle {
            contributors.insert(id.role(), handle);
        }
        phase
    });

    let recovered_sections = enhanced::extract_sections(text)
        .into_iter()
        .filter(|(_, body)| !body.is_empty())
        .collect();

    let [spark, design, logic] = phases;
    (
        LegacyBody {
            spark,
            design,
            logic,
            recovered_sections,
        },
        contributors,
    )
}

/// Span from the phase header to the next H1/H2 line, header included.
fn phase_span(text: &str, id: PhaseId) -> Option<&str> {
    let start = text.find(id.header())?;
    let header_end = text[start..]
        .find('\n')
        .map_or(text.len(), |offset| start + offset);
    let end = PHASE_END
        .find_at(text, header_end)
        .map_or(text.len(), |m| m.start());
    Some(&text[start..end])
}

fn extract_phase(text: &str, id: PhaseId) -> (Phase, Option<String>) {
    let Some(span) = phase_span(text, id) else {
        return (Phase::new(id, EMPTY_STATUS), None);
    };

    let mut phase = Phase::new(id, status(span));
    for key in id.fields() {
        phase.set_field(*key, field_value(span, *key));
    }
    phase.notes = notes(span);

    let handle = HANDLE
        .captures(span)
        .map(|caps| caps[1].to_string())
        .filter(|handle| !is_placeholder_handle(handle));

    (phase, handle)
}

fn status(span: &str) -> String {
    if let Some(caps) = STATUS_BRACKETED.captures(span) {
        let value = caps[1].split('/').next().unwrap_or_default().trim();
        if !value.is_empty() {
            return value.to_string();
        }
    }
    STATUS_PLAIN
        .captures(span)
        .map(|caps| caps[1].trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| EMPTY_STATUS.to_string())
}

/// Text after the first matching label up to the next field boundary, with
/// blockquote markers removed. A value equal to its own placeholder is empty.
fn field_value(span: &str, key: FieldKey) -> String {
    let Some(label) = field_labels(key).iter().find_map(|re| re.find(span)) else {
        return String::new();
    };
    let start = label.end();
    let end = FIELD_END
        .find_at(span, start)
        .map_or(span.len(), |m| m.start());

    let value = span[start..end]
        .lines()
        .map(|line| {
            let line = line.trim();
            line.strip_prefix('>').map_or(line, str::trim_start)
        })
        .collect::<Vec<_>>()
        .join("\n");
    let value = value.trim();

    if value == key.placeholder() {
        String::new()
    } else {
        value.to_string()
    }
}

fn notes(span: &str) -> String {
    let kept = span
        .lines()
        .skip(1)
        .filter(|line| {
            let line = line.trim_start();
            !NOTE_SKIP_PREFIXES
                .iter()
                .any(|prefix| line.starts_with(prefix))
        })
        .collect::<Vec<_>>()
        .join("\n");
    let trimmed = kept.trim();
    trimmed.strip_suffix("---").map_or(trimmed, str::trim_end).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SPARK: &str = "\
# Mesh

---

## 🧠 Phase 1: The Spark (!HUNCH)
*Status: [Claimed/Active]* *Scout: @alice*

### The Observation
> Rooftop panels sit idle at noon.
* **The Gap:** No peer-to-peer trading.
* **The \"Why\":** Grid losses.

---

## 🎨 Phase 2: The Design (!SHAPE)
*Status: Pending* *Designer: @Handle*

---

## 🛠️ Phase 3: The Logic
*Status: [In-Progress]* *Builder: @bob-2*

**Technical Specs (draft):** Rust daemon
**Clutch Power Test:** (Explain verification)
**Dependencies:** tokio
";

    #[test]
    fn extracts_statuses_and_contributors() {
        let (body, contributors) = extract(SPARK);
        assert_eq!(body.spark.status, "Claimed");
        assert_eq!(body.design.status, "Pending");
        assert_eq!(body.logic.status, "In-Progress");
        assert_eq!(contributors.get(&Role::Scout).map(String::as_str), Some("alice"));
        assert_eq!(contributors.get(&Role::Designer), None);
        assert_eq!(contributors.get(&Role::Builder).map(String::as_str), Some("bob-2"));
    }

    #[test]
    fn extracts_fields_with_boundaries() {
        let (body, _) = extract(SPARK);
        assert_eq!(
            body.spark.field(FieldKey::Observation),
            "Rooftop panels sit idle at noon."
        );
        assert_eq!(body.spark.field(FieldKey::Gap), "No peer-to-peer trading.");
        assert_eq!(body.spark.field(FieldKey::Why), "Grid losses.");
        assert_eq!(body.logic.field(FieldKey::TechnicalImpl), "Rust daemon");
        assert_eq!(body.logic.field(FieldKey::ClutchTest), "");
        assert_eq!(body.logic.field(FieldKey::Dependencies), "tokio");
        assert!(!body.design.has_field_content());
    }

    #[test]
    fn notes_drop_header_status_and_trailing_rule() {
        let (body, _) = extract(SPARK);
        assert!(body.spark.notes.starts_with("### The Observation"));
        assert!(body.spark.notes.ends_with("Grid losses."));
        assert_eq!(body.design.notes, "");
    }

    #[test]
    fn missing_phase_is_empty_with_all_fields() {
        let (body, contributors) = extract("# Only a title\n");
        assert_eq!(body.logic.status, EMPTY_STATUS);
        assert_eq!(body.logic.fields.len(), 3);
        assert!(contributors.is_empty());
    }

    #[test]
    fn mid_sentence_bold_does_not_end_a_field() {
        let text = "## 🧠 Phase 1: The Spark\n**The Gap:** this is **really** open\nstill the gap\n**The \"Why\":** y\n";
        let (body, _) = extract(text);
        assert_eq!(
            body.spark.field(FieldKey::Gap),
            "this is **really** open\nstill the gap"
        );
    }

    #[test]
    fn line_initial_bold_ends_a_field() {
        let text = "## 🧠 Phase 1: The Spark\n**The Gap:** first line\n**Note** this line starts bold\n";
        let (body, _) = extract(text);
        assert_eq!(body.spark.field(FieldKey::Gap), "first line");
    }

    #[test]
    fn status_without_brackets_or_missing() {
        assert_eq!(status("*Status: Merged*"), "Merged");
        assert_eq!(status("no status here"), EMPTY_STATUS);
    }
}
