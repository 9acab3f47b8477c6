//! Markdown → [`SparkDocument`].

mod enhanced;
mod legacy;
mod name;

use spark_core::enums::Role;
use spark_core::{Frontmatter, SparkBody, SparkDocument};

use crate::ENHANCED_SENTINEL;

/// Parse spark markdown into a structured document.
///
/// Never fails. The shape is decided once from the presence of
/// `spark_type:` anywhere in the text. The returned document carries the
/// source text and a baseline snapshot so later edits can be detected.
#[must_use]
pub fn parse(text: &str) -> SparkDocument {
    let normalized = text.replace("\r\n", "\n");
    let (frontmatter, body_text) = Frontmatter::split(&normalized);
    let frontmatter = frontmatter.unwrap_or_default();

    let name = name::resolve(&frontmatter, body_text);
    let enhanced = normalized.contains(ENHANCED_SENTINEL);

    let (body, contributors) = if enhanced {
        let (body, owner) = enhanced::extract(&frontmatter, body_text);
        let contributors = owner
            .map(|handle| (Role::Scout, handle))
            .into_iter()
            .collect();
        (SparkBody::Enhanced(body), contributors)
    } else {
        let (body, contributors) = legacy::extract(body_text);
        if !body.recovered_sections.is_empty() {
            tracing::warn!(
                name = %name,
                sections = body.recovered_sections.len(),
                "numbered sections found without spark_type; parsed as legacy"
            );
        }
        (SparkBody::Legacy(body), contributors)
    };

    let mut doc = SparkDocument::new(name, body);
    doc.contributors = contributors;
    doc.marked_for_deletion = frontmatter
        .get("marked_for_deletion")
        .is_some_and(|value| value.eq_ignore_ascii_case("true"));
    doc.frontmatter = frontmatter;
    doc.raw_content = Some(text.to_string());
    doc.mark_baseline();

    tracing::debug!(
        name = %doc.name,
        shape = %doc.shape(),
        stability = doc.stability(),
        "parsed spark"
    );
    doc
}

/// Name `parse` would resolve for `text`.
pub(crate) fn source_name(text: &str) -> String {
    let normalized = text.replace("\r\n", "\n");
    let (frontmatter, body_text) = Frontmatter::split(&normalized);
    name::resolve(&frontmatter.unwrap_or_default(), body_text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use spark_core::enums::{FieldKey, SparkShape};

    #[test]
    fn numbered_sections_without_sentinel_stay_legacy() {
        let doc = parse("# My Idea\n\n# 1. Spark Narrative\nThis fixes X because Y.\n\n---\n");
        assert_eq!(doc.name, "My Idea");
        assert!(!doc.is_enhanced());
        assert_eq!(
            doc.sections().get(&1).map(String::as_str),
            Some("This fixes X because Y.")
        );
    }

    #[test]
    fn sentinel_selects_enhanced_shape() {
        let doc = parse("---\nspark_type: \"exploration\"\n---\n# 1. Spark Narrative\nBody\n");
        assert_eq!(doc.shape(), SparkShape::Enhanced);
    }

    #[test]
    fn garbage_parses_to_an_empty_legacy_document() {
        let doc = parse("just some words\nwith no structure");
        assert_eq!(doc.name, "Untitled Spark");
        assert_eq!(doc.stability(), 0);
        assert!(doc.contributors.is_empty());
        assert!(!doc.is_dirty());
    }

    #[test]
    fn deletion_flag_is_read_from_frontmatter() {
        let doc = parse("---\nstatus: deletion_pending\nmarked_for_deletion: true\n---\n# Old\n");
        assert!(doc.marked_for_deletion);
        assert_eq!(doc.name, "Old");
    }

    #[test]
    fn crlf_input_is_normalized() {
        let doc = parse("# Name\r\n\r\n## 🧠 Phase 1: The Spark\r\n*Status: [Active]*\r\n**The Gap:** g\r\n");
        let body = doc.as_legacy().unwrap();
        assert_eq!(body.spark.field(FieldKey::Gap), "g");
    }
}
