//! Stability scoring.
//!
//! Stability is always derived from current content. Nothing stores it.

use crate::entities::{SparkBody, SparkDocument};
use crate::enums::EnhancedSection;

/// Upper bound of the stability score in both shapes.
pub const MAX_STABILITY: u8 = 3;

impl SparkDocument {
    /// Number of stable phases (legacy) or passing core section checks
    /// (enhanced), in `0..=3`.
    ///
    /// Legacy: a phase counts when it has a status line and at least one
    /// non-empty labeled field. Enhanced: section 1 present, section 2
    /// present, section 3 or 4 present.
    #[must_use]
    pub fn stability(&self) -> u8 {
        let passing = match &self.body {
            SparkBody::Legacy(body) => body
                .phases()
                .filter(|(_, phase)| phase.has_status() && phase.has_field_content())
                .count(),
            SparkBody::Enhanced(body) => [
                body.is_present(EnhancedSection::Narrative),
                body.is_present(EnhancedSection::Hypothesis),
                body.is_present(EnhancedSection::Simulation)
                    || body.is_present(EnhancedSection::Evaluation),
            ]
            .into_iter()
            .filter(|passed| *passed)
            .count(),
        };
        u8::try_from(passing).unwrap_or(MAX_STABILITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{EMPTY_STATUS, EnhancedBody, LegacyBody};
    use crate::enums::FieldKey;

    #[test]
    fn empty_documents_score_zero() {
        let legacy = SparkDocument::legacy("x", LegacyBody::templated());
        let enhanced = SparkDocument::enhanced("x", EnhancedBody::default());
        assert_eq!(legacy.stability(), 0);
        assert_eq!(enhanced.stability(), 0);
    }

    #[test]
    fn legacy_phase_needs_status_and_content() {
        let mut body = LegacyBody::templated();
        body.set_field(FieldKey::Gap, "gap");
        body.set_field(FieldKey::Blueprint, "blueprint");
        body.design.status = EMPTY_STATUS.to_string();
        let doc = SparkDocument::legacy("x", body);
        assert_eq!(doc.stability(), 1);
    }

    #[test]
    fn enhanced_counts_the_core_triple_only() {
        let mut body = EnhancedBody::default();
        body.set_section(EnhancedSection::Narrative, "n");
        body.set_section(EnhancedSection::Evaluation, "e");
        body.set_section(EnhancedSection::NextActions, "later");
        let doc = SparkDocument::enhanced("x", body);
        assert_eq!(doc.stability(), 2);
    }

    #[test]
    fn adding_content_never_lowers_the_score() {
        let mut doc = SparkDocument::enhanced("x", EnhancedBody::default());
        let mut last = doc.stability();
        for section in EnhancedSection::ALL {
            doc.as_enhanced_mut()
                .unwrap()
                .set_section(section, "content");
            let now = doc.stability();
            assert!(now >= last);
            assert!(doc.is_enhanced());
            last = now;
        }
        assert_eq!(last, MAX_STABILITY);
    }
}
