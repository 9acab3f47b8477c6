//! Compiled patterns for the spark vocabulary.

use std::sync::LazyLock;

use regex::Regex;
use spark_core::enums::FieldKey;

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("built-in spark pattern should compile")
}

/// `*Status: [Active/Claimed]*`
pub static STATUS_BRACKETED: LazyLock<Regex> =
    LazyLock::new(|| compile(r"\*Status: \[([^\]]+)\]\*"));

/// `*Status: Active*`
pub static STATUS_PLAIN: LazyLock<Regex> = LazyLock::new(|| compile(r"\*Status:\s*([^*]+)\*"));

/// First `@handle` in a span.
pub static HANDLE: LazyLock<Regex> = LazyLock::new(|| compile(r"@([\w-]+)"));

/// `*Owner: @handle*` or `*Scout: @handle*` in an enhanced body.
pub static OWNER_LINE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?m)^\*(?:Owner|Scout):\s*@([\w-]+)\*"));

/// End of a legacy phase: the next H1 or H2 line.
pub static PHASE_END: LazyLock<Regex> = LazyLock::new(|| compile(r"(?m)^#{1,2}\s"));

/// End of a field value: a bold label, bulleted bold label, `##`+ heading,
/// or horizontal rule at the start of a line.
pub static FIELD_END: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?m)^[ \t]*(?:[*-][ \t]+\*\*|\*\*|#{2,}|---)"));

/// Any numbered H1 heading, e.g. `# 3. Simulation`.
pub static NUMBERED_HEADING: LazyLock<Regex> = LazyLock::new(|| compile(r"^#\s*\d+\."));

/// Numbered H1 heading line capturing its number.
pub static SECTION_HEADER: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?m)^#[ \t]*(\d+)\.[^\n]*$"));

/// End of an enhanced section: the next H1 line or a `---` rule.
pub static SECTION_END: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?m)^(?:#(?:[ \t]|\d)|---[ \t]*$)"));

/// Next H1 line, which closes the proposals block.
pub static H1_LINE: LazyLock<Regex> = LazyLock::new(|| compile(r"(?m)^#(?:[ \t]|\d)"));

/// `## Proposed Changes to Section N (...)`
pub static PROPOSAL_HEADER: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?m)^##[ \t]*Proposed Changes to Section (\d+)[^\n]*$"));

/// End of a proposal body.
pub static PROPOSAL_END: LazyLock<Regex> = LazyLock::new(|| compile(r"(?m)^(?:##|---)"));

/// Emoji or brand prefix before a title: `🧩 Spark: `, `Template - `, `The `.
pub static BRAND_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)^(?:[^\w\s]|\s)*(?:Spark|Template|The)\s*[:\s]\s*"));

static OBSERVATION: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [
        compile(r"\*\*The Observation:?\*\*"),
        compile(r"###[ \t]*The Observation[^\n]*"),
    ]
});
static GAP: LazyLock<[Regex; 1]> = LazyLock::new(|| [compile(r"\*\*The Gap:\*\*")]);
static WHY: LazyLock<[Regex; 1]> = LazyLock::new(|| [compile(r#"\*\*The "Why":\*\*"#)]);
static NOVEL_CORE: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [
        compile(r"\*\*The Novel Core:?\*\*"),
        compile(r"###[ \t]*The Novel Core[^\n]*"),
    ]
});
static BLUEPRINT: LazyLock<[Regex; 1]> = LazyLock::new(|| [compile(r"\*\*The Blueprint:\*\*")]);
static INTERFACE: LazyLock<[Regex; 1]> = LazyLock::new(|| [compile(r"\*\*The Interface:\*\*")]);
static PRIOR_ART: LazyLock<[Regex; 1]> = LazyLock::new(|| [compile(r"\*\*Prior Art:\*\*")]);
static TECHNICAL_IMPL: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        compile(r"\*\*The Logic:\*\*"),
        compile(r"\*\*Technical Specs[^:*\n]*:\*\*"),
        compile(r"###[ \t]*Technical Implementation[^\n]*"),
    ]
});
static CLUTCH_TEST: LazyLock<[Regex; 1]> =
    LazyLock::new(|| [compile(r"\*\*Clutch Power Test:\*\*")]);
static DEPENDENCIES: LazyLock<[Regex; 1]> =
    LazyLock::new(|| [compile(r"\*\*Dependencies:\*\*")]);

/// Label patterns for a field in priority order. Bold labels come before
/// heading variants so a heading does not swallow the bullets below it.
pub fn field_labels(key: FieldKey) -> &'static [Regex] {
    match key {
        FieldKey::Observation => OBSERVATION.as_slice(),
        FieldKey::Gap => GAP.as_slice(),
        FieldKey::Why => WHY.as_slice(),
        FieldKey::NovelCore => NOVEL_CORE.as_slice(),
        FieldKey::Blueprint => BLUEPRINT.as_slice(),
        FieldKey::Interface => INTERFACE.as_slice(),
        FieldKey::PriorArt => PRIOR_ART.as_slice(),
        FieldKey::TechnicalImpl => TECHNICAL_IMPL.as_slice(),
        FieldKey::ClutchTest => CLUTCH_TEST.as_slice(),
        FieldKey::Dependencies => DEPENDENCIES.as_slice(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spark_core::enums::PhaseId;

    #[test]
    fn every_pattern_compiles() {
        for phase in PhaseId::ALL {
            for key in phase.fields() {
                assert!(!field_labels(*key).is_empty());
            }
        }
        for pattern in [
            &*STATUS_BRACKETED,
            &*STATUS_PLAIN,
            &*HANDLE,
            &*OWNER_LINE,
            &*PHASE_END,
            &*FIELD_END,
            &*NUMBERED_HEADING,
            &*SECTION_HEADER,
            &*SECTION_END,
            &*H1_LINE,
            &*PROPOSAL_HEADER,
            &*PROPOSAL_END,
            &*BRAND_PREFIX,
        ] {
            assert!(!pattern.as_str().is_empty());
        }
    }

    #[test]
    fn field_end_ignores_mid_line_bold() {
        let text = "value with **bold** inside\n* **Next:** x";
        let hit = FIELD_END.find(text).unwrap();
        assert_eq!(&text[hit.start()..hit.start() + 4], "* **");
    }

    #[test]
    fn phase_end_skips_h3() {
        assert!(!PHASE_END.is_match("### The Observation\n> x"));
        assert!(PHASE_END.is_match("text\n## 🎨 Phase 2"));
    }

    #[test]
    fn brand_prefix_strips_emoji_and_keyword() {
        assert_eq!(BRAND_PREFIX.replace("🧩 Spark: Solar Mesh", ""), "Solar Mesh");
        assert_eq!(BRAND_PREFIX.replace("Solar Mesh", ""), "Solar Mesh");
    }
}
