use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::enums::EnhancedSection;
use crate::errors::CoreError;

/// The eight-section body of an enhanced spark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnhancedBody {
    /// Section number to verbatim markdown body.
    pub sections: BTreeMap<u8, String>,
    /// Sections shown to the editor. Section 1 is always a member.
    pub active_sections: BTreeSet<u8>,
    /// Section number to community proposal text. Never merged into `sections`.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub proposals: BTreeMap<u8, String>,
}

impl Default for EnhancedBody {
    fn default() -> Self {
        Self {
            sections: BTreeMap::new(),
            active_sections: BTreeSet::from([EnhancedSection::Narrative.number()]),
            proposals: BTreeMap::new(),
        }
    }
}

impl EnhancedBody {
    /// Build a body and derive the active set from the non-empty sections.
    #[must_use]
    pub fn from_sections(sections: BTreeMap<u8, String>, proposals: BTreeMap<u8, String>) -> Self {
        let mut active_sections = BTreeSet::from([EnhancedSection::Narrative.number()]);
        active_sections.extend(
            sections
                .iter()
                .filter(|(_, body)| !body.trim().is_empty())
                .map(|(number, _)| *number),
        );
        Self {
            sections,
            active_sections,
            proposals,
        }
    }

    #[must_use]
    pub fn section(&self, section: EnhancedSection) -> &str {
        self.sections
            .get(&section.number())
            .map_or("", String::as_str)
    }

    /// Whether the stored body for `section` is non-empty after trimming.
    #[must_use]
    pub fn is_present(&self, section: EnhancedSection) -> bool {
        !self.section(section).trim().is_empty()
    }

    /// Replace a section body. A non-empty body also activates the section.
    pub fn set_section(&mut self, section: EnhancedSection, body: impl Into<String>) {
        let body = body.into();
        if !body.trim().is_empty() {
            self.active_sections.insert(section.number());
        }
        self.sections.insert(section.number(), body);
    }

    /// Show a section in the editor without giving it content.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::UnknownSection`] for numbers outside `1..=8`.
    pub fn activate(&mut self, number: u8) -> Result<(), CoreError> {
        EnhancedSection::from_number(number)?;
        self.active_sections.insert(number);
        Ok(())
    }

    /// Hide a section. Section 1 cannot be hidden.
    pub fn deactivate(&mut self, section: EnhancedSection) {
        if section != EnhancedSection::Narrative {
            self.active_sections.remove(&section.number());
        }
    }

    #[must_use]
    pub fn proposal(&self, section: EnhancedSection) -> &str {
        self.proposals
            .get(&section.number())
            .map_or("", String::as_str)
    }

    pub fn set_proposal(&mut self, section: EnhancedSection, text: impl Into<String>) {
        self.proposals.insert(section.number(), text.into());
    }
}
