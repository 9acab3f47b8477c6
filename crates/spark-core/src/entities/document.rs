use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::entities::{EnhancedBody, Frontmatter, LegacyBody};
use crate::enums::{EnhancedSection, FieldKey, PhaseId, Role, SparkShape};
use crate::errors::CoreError;
use crate::handle::{is_valid_handle, normalize_handle};

/// Name used when none can be recovered from the text.
pub const UNTITLED_NAME: &str = "Untitled Spark";

/// Name given to a document created from a blank template.
pub const NEW_SPARK_NAME: &str = "New Spark";

/// Frontmatter value assigned when a legacy document is promoted.
pub const DEFAULT_SPARK_TYPE: &str = "exploration";

/// Shape-specific content of a spark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum SparkBody {
    Legacy(LegacyBody),
    Enhanced(EnhancedBody),
}

impl SparkBody {
    #[must_use]
    pub const fn shape(&self) -> SparkShape {
        match self {
            Self::Legacy(_) => SparkShape::Legacy,
            Self::Enhanced(_) => SparkShape::Enhanced,
        }
    }
}

/// State captured right after parsing, used to detect edits.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Baseline {
    marked_for_deletion: bool,
    contributors: BTreeMap<Role, String>,
    body: SparkBody,
}

/// A single structured spark document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SparkDocument {
    pub name: String,
    #[serde(default)]
    pub marked_for_deletion: bool,
    /// Role to handle, stored without the `@`. Unclaimed roles are absent.
    #[serde(default)]
    pub contributors: BTreeMap<Role, String>,
    pub body: SparkBody,
    #[serde(default, skip_serializing_if = "Frontmatter::is_empty")]
    pub frontmatter: Frontmatter,
    /// Opaque location handle, passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_path: Option<String>,
    /// Text this document was parsed from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_content: Option<String>,
    #[serde(skip)]
    baseline: Option<Box<Baseline>>,
}

impl SparkDocument {
    #[must_use]
    pub fn new(name: impl Into<String>, body: SparkBody) -> Self {
        Self {
            name: name.into(),
            marked_for_deletion: false,
            contributors: BTreeMap::new(),
            body,
            frontmatter: Frontmatter::default(),
            source_path: None,
            raw_content: None,
            baseline: None,
        }
    }

    #[must_use]
    pub fn legacy(name: impl Into<String>, body: LegacyBody) -> Self {
        Self::new(name, SparkBody::Legacy(body))
    }

    #[must_use]
    pub fn enhanced(name: impl Into<String>, body: EnhancedBody) -> Self {
        Self::new(name, SparkBody::Enhanced(body))
    }

    #[must_use]
    pub const fn shape(&self) -> SparkShape {
        self.body.shape()
    }

    #[must_use]
    pub const fn is_enhanced(&self) -> bool {
        matches!(self.body, SparkBody::Enhanced(_))
    }

    #[must_use]
    pub const fn as_legacy(&self) -> Option<&LegacyBody> {
        match &self.body {
            SparkBody::Legacy(body) => Some(body),
            SparkBody::Enhanced(_) => None,
        }
    }

    pub const fn as_legacy_mut(&mut self) -> Option<&mut LegacyBody> {
        match &mut self.body {
            SparkBody::Legacy(body) => Some(body),
            SparkBody::Enhanced(_) => None,
        }
    }

    #[must_use]
    pub const fn as_enhanced(&self) -> Option<&EnhancedBody> {
        match &self.body {
            SparkBody::Enhanced(body) => Some(body),
            SparkBody::Legacy(_) => None,
        }
    }

    pub const fn as_enhanced_mut(&mut self) -> Option<&mut EnhancedBody> {
        match &mut self.body {
            SparkBody::Enhanced(body) => Some(body),
            SparkBody::Legacy(_) => None,
        }
    }

    /// Numbered section bodies: the enhanced sections, or the ones recovered
    /// from a legacy document that used numbered headers.
    #[must_use]
    pub const fn sections(&self) -> &BTreeMap<u8, String> {
        match &self.body {
            SparkBody::Enhanced(body) => &body.sections,
            SparkBody::Legacy(body) => &body.recovered_sections,
        }
    }

    /// Handle for `role`, if claimed.
    #[must_use]
    pub fn contributor(&self, role: Role) -> Option<&str> {
        self.contributors
            .get(&role)
            .map(String::as_str)
            .filter(|handle| !handle.is_empty())
    }

    /// Claim or release a role. An empty handle releases it.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidHandle`] if the handle fails the pattern.
    pub fn set_contributor(&mut self, role: Role, handle: &str) -> Result<(), CoreError> {
        let handle = normalize_handle(handle);
        if handle.is_empty() {
            self.contributors.remove(&role);
            return Ok(());
        }
        if !is_valid_handle(handle) {
            return Err(CoreError::InvalidHandle(handle.to_string()));
        }
        self.contributors.insert(role, handle.to_string());
        Ok(())
    }

    /// Owner of an enhanced spark. Same slot as the legacy scout.
    #[must_use]
    pub fn owner(&self) -> Option<&str> {
        self.contributor(Role::Scout)
    }

    /// Stable identifier: frontmatter `id:` or a slug of the name.
    #[must_use]
    pub fn id(&self) -> String {
        self.frontmatter
            .get("id")
            .filter(|id| !id.is_empty() && !id.contains('<'))
            .unwrap_or_else(|| slugify(&self.name))
    }

    /// Record the current content as the unedited reference point.
    pub fn mark_baseline(&mut self) {
        self.baseline = Some(Box::new(self.snapshot()));
    }

    #[must_use]
    pub const fn has_baseline(&self) -> bool {
        self.baseline.is_some()
    }

    /// Whether any structural content differs from the baseline.
    ///
    /// The name is excluded: renaming is handled by patching the title line.
    /// A document without a baseline is always dirty.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.baseline
            .as_deref()
            .is_none_or(|baseline| *baseline != self.snapshot())
    }

    /// Whether any labeled field of `phase` was edited since parsing.
    #[must_use]
    pub fn phase_fields_edited(&self, phase: PhaseId) -> bool {
        self.differs_from_baseline(|before, after| {
            before.phase(phase).fields != after.phase(phase).fields
        })
    }

    /// Whether the notes of `phase` were edited since parsing.
    #[must_use]
    pub fn phase_notes_edited(&self, phase: PhaseId) -> bool {
        self.differs_from_baseline(|before, after| {
            before.phase(phase).notes != after.phase(phase).notes
        })
    }

    /// Whether the generator should print `notes` verbatim for `phase`
    /// instead of the field template.
    ///
    /// Notes win when they are non-empty and either they were edited or the
    /// fields were left alone. A field edit without a notes edit switches the
    /// phase back to the template so the edit is not lost.
    #[must_use]
    pub fn uses_notes_override(&self, phase: PhaseId) -> bool {
        let Some(body) = self.as_legacy() else {
            return false;
        };
        if body.phase(phase).notes.trim().is_empty() {
            return false;
        }
        self.phase_notes_edited(phase) || !self.phase_fields_edited(phase)
    }

    fn differs_from_baseline(&self, differs: impl Fn(&LegacyBody, &LegacyBody) -> bool) -> bool {
        let Some(baseline) = self.baseline.as_deref() else {
            return false;
        };
        match (&baseline.body, &self.body) {
            (SparkBody::Legacy(before), SparkBody::Legacy(after)) => differs(before, after),
            _ => true,
        }
    }

    fn snapshot(&self) -> Baseline {
        Baseline {
            marked_for_deletion: self.marked_for_deletion,
            contributors: self.contributors.clone(),
            body: self.body.clone(),
        }
    }

    /// Convert to the enhanced shape.
    ///
    /// Numbered sections recovered from the legacy text are used as-is. When
    /// there are none, the Spark, Design, and Logic phases become sections 1,
    /// 2, and 3. Only the scout survives as owner. The result has no baseline
    /// and no raw content, so the next generation is a full re-render.
    #[must_use]
    pub fn into_enhanced(self) -> Self {
        let legacy = match self.body {
            SparkBody::Enhanced(_) => return self,
            SparkBody::Legacy(legacy) => legacy,
        };

        let sections = if legacy.recovered_sections.is_empty() {
            let mut sections = BTreeMap::new();
            for (phase, section) in [
                (PhaseId::Spark, EnhancedSection::Narrative),
                (PhaseId::Design, EnhancedSection::Hypothesis),
                (PhaseId::Logic, EnhancedSection::Simulation),
            ] {
                let text = phase_as_prose(&legacy, phase);
                if !text.is_empty() {
                    sections.insert(section.number(), text);
                }
            }
            sections
        } else {
            legacy.recovered_sections
        };

        let mut frontmatter = self.frontmatter;
        if !frontmatter.contains("spark_type") {
            frontmatter.set_str("spark_type", DEFAULT_SPARK_TYPE);
        }

        let contributors = self
            .contributors
            .into_iter()
            .filter(|(role, _)| *role == Role::Scout)
            .collect();

        Self {
            name: self.name,
            marked_for_deletion: self.marked_for_deletion,
            contributors,
            body: SparkBody::Enhanced(EnhancedBody::from_sections(sections, BTreeMap::new())),
            frontmatter,
            source_path: self.source_path,
            raw_content: None,
            baseline: None,
        }
    }
}

fn phase_as_prose(body: &LegacyBody, phase: PhaseId) -> String {
    let current = body.phase(phase);
    let fields: Vec<String> = phase
        .fields()
        .iter()
        .filter(|key| !current.field(**key).trim().is_empty())
        .map(|key| format!("**{}:** {}", key.label(), current.field(*key).trim()))
        .collect();
    if fields.is_empty() {
        current.notes.trim().to_string()
    } else {
        fields.join("\n\n")
    }
}

fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
        } else if !slug.ends_with('-') && !slug.is_empty() {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    if slug.is_empty() {
        String::from("untitled")
    } else {
        slug
    }
}

/// Field key lookup by its snake-case name, as used by CLI `--set` flags.
#[must_use]
pub fn field_key_by_name(name: &str) -> Option<FieldKey> {
    PhaseId::ALL
        .iter()
        .flat_map(|phase| phase.fields().iter().copied())
        .find(|key| key.as_str() == name)
}
