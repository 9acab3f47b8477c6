//! Fixed vocabulary of the spark format: phases, fields, sections, roles,
//! and audit verdicts.
//!
//! The header and label strings here are load-bearing. The extractor
//! recognizes exactly these literals and the generator emits exactly these
//! literals, so changing one breaks compatibility with existing documents.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// PhaseId
// ---------------------------------------------------------------------------

/// One of the three stages of a legacy spark.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum PhaseId {
    Spark,
    Design,
    Logic,
}

impl PhaseId {
    pub const ALL: [Self; 3] = [Self::Spark, Self::Design, Self::Logic];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Spark => "spark",
            Self::Design => "design",
            Self::Logic => "logic",
        }
    }

    /// Header literal that opens the phase block.
    #[must_use]
    pub const fn header(self) -> &'static str {
        match self {
            Self::Spark => "## 🧠 Phase 1: The Spark",
            Self::Design => "## 🎨 Phase 2: The Design",
            Self::Logic => "## 🛠️ Phase 3: The Logic",
        }
    }

    /// Suffix appended to the header on output, e.g. `(!HUNCH)`.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Spark => "(!HUNCH)",
            Self::Design => "(!SHAPE)",
            Self::Logic => "(!BUILD)",
        }
    }

    /// Status a freshly templated phase starts with.
    #[must_use]
    pub const fn default_status(self) -> &'static str {
        match self {
            Self::Spark => "Active",
            Self::Design => "Pending",
            Self::Logic => "In-Progress",
        }
    }

    /// Contributor role that owns this phase.
    #[must_use]
    pub const fn role(self) -> Role {
        match self {
            Self::Spark => Role::Scout,
            Self::Design => Role::Designer,
            Self::Logic => Role::Builder,
        }
    }

    /// Sub-heading emitted above the field template.
    #[must_use]
    pub const fn template_heading(self) -> &'static str {
        match self {
            Self::Spark => "### The Observation",
            Self::Design => "### The Novel Core (The 10% Delta)",
            Self::Logic => "### Technical Implementation",
        }
    }

    /// Labeled fields belonging to this phase, in emission order.
    #[must_use]
    pub const fn fields(self) -> &'static [FieldKey] {
        match self {
            Self::Spark => &[FieldKey::Observation, FieldKey::Gap, FieldKey::Why],
            Self::Design => &[
                FieldKey::NovelCore,
                FieldKey::Blueprint,
                FieldKey::Interface,
                FieldKey::PriorArt,
            ],
            Self::Logic => &[
                FieldKey::TechnicalImpl,
                FieldKey::ClutchTest,
                FieldKey::Dependencies,
            ],
        }
    }
}

impl fmt::Display for PhaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// FieldKey
// ---------------------------------------------------------------------------

/// A labeled sub-field of a legacy phase.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum FieldKey {
    Observation,
    Gap,
    Why,
    NovelCore,
    Blueprint,
    Interface,
    PriorArt,
    TechnicalImpl,
    ClutchTest,
    Dependencies,
}

impl FieldKey {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Observation => "observation",
            Self::Gap => "gap",
            Self::Why => "why",
            Self::NovelCore => "novel_core",
            Self::Blueprint => "blueprint",
            Self::Interface => "interface",
            Self::PriorArt => "prior_art",
            Self::TechnicalImpl => "technical_impl",
            Self::ClutchTest => "clutch_test",
            Self::Dependencies => "dependencies",
        }
    }

    /// Bold label text as written in a document, without the asterisks.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Observation => "The Observation",
            Self::Gap => "The Gap",
            Self::Why => "The \"Why\"",
            Self::NovelCore => "The Novel Core",
            Self::Blueprint => "The Blueprint",
            Self::Interface => "The Interface",
            Self::PriorArt => "Prior Art",
            Self::TechnicalImpl => "The Logic",
            Self::ClutchTest => "Clutch Power Test",
            Self::Dependencies => "Dependencies",
        }
    }

    /// Bracketed default content emitted for an empty field.
    #[must_use]
    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::Observation => "(Describe the observation)",
            Self::Gap => "(Describe the gap)",
            Self::Why => "(Explain why this matters)",
            Self::NovelCore => "(Describe the 10% delta)",
            Self::Blueprint => "(Describe the unique design)",
            Self::Interface => "(How does this snap into the ecosystem?)",
            Self::PriorArt => "(Why existing solutions don't work)",
            Self::TechnicalImpl => "(Technical documentation or code)",
            Self::ClutchTest => "(Explain verification)",
            Self::Dependencies => "(List dependencies)",
        }
    }

    #[must_use]
    pub const fn phase(self) -> PhaseId {
        match self {
            Self::Observation | Self::Gap | Self::Why => PhaseId::Spark,
            Self::NovelCore | Self::Blueprint | Self::Interface | Self::PriorArt => {
                PhaseId::Design
            }
            Self::TechnicalImpl | Self::ClutchTest | Self::Dependencies => PhaseId::Logic,
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// EnhancedSection
// ---------------------------------------------------------------------------

/// One of the eight numbered sections of an enhanced spark.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum EnhancedSection {
    Narrative = 1,
    Hypothesis = 2,
    Simulation = 3,
    Evaluation = 4,
    Feedback = 5,
    Results = 6,
    RevisionNotes = 7,
    NextActions = 8,
}

impl EnhancedSection {
    pub const ALL: [Self; 8] = [
        Self::Narrative,
        Self::Hypothesis,
        Self::Simulation,
        Self::Evaluation,
        Self::Feedback,
        Self::Results,
        Self::RevisionNotes,
        Self::NextActions,
    ];

    /// Number of the community proposals block that follows the sections.
    pub const PROPOSALS_NUMBER: u8 = 9;

    #[must_use]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Look up a section by its number.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::UnknownSection`] for anything outside `1..=8`.
    pub const fn from_number(number: u8) -> Result<Self, CoreError> {
        match number {
            1 => Ok(Self::Narrative),
            2 => Ok(Self::Hypothesis),
            3 => Ok(Self::Simulation),
            4 => Ok(Self::Evaluation),
            5 => Ok(Self::Feedback),
            6 => Ok(Self::Results),
            7 => Ok(Self::RevisionNotes),
            8 => Ok(Self::NextActions),
            other => Err(CoreError::UnknownSection(other)),
        }
    }

    /// Title as it appears in the `# N. Title` header.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Narrative => "Spark Narrative",
            Self::Hypothesis => "Hypothesis Formalization",
            Self::Simulation => "Simulation / Modeling Plan",
            Self::Evaluation => "Evaluation Strategy",
            Self::Feedback => "Feedback & Critique",
            Self::Results => "Results (When Available)",
            Self::RevisionNotes => "Revision Notes",
            Self::NextActions => "Next Actions",
        }
    }

    /// Name used in `## Proposed Changes to Section N (<Name>)`.
    #[must_use]
    pub const fn proposal_title(self) -> &'static str {
        match self {
            Self::Results => "Results",
            other => other.title(),
        }
    }

    #[must_use]
    pub fn header(self) -> String {
        format!("# {}. {}", self.number(), self.title())
    }
}

impl fmt::Display for EnhancedSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.title())
    }
}

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// Contributor role. Enhanced sparks only use [`Role::Scout`], shown as the owner.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Scout,
    Designer,
    Builder,
}

impl Role {
    pub const ALL: [Self; 3] = [Self::Scout, Self::Designer, Self::Builder];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Scout => "scout",
            Self::Designer => "designer",
            Self::Builder => "builder",
        }
    }

    /// Capitalized label used in status lines and merit plans.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Scout => "Scout",
            Self::Designer => "Designer",
            Self::Builder => "Builder",
        }
    }

    /// Handle written into a status line when the role is unclaimed.
    #[must_use]
    pub const fn placeholder_handle(self) -> &'static str {
        match self {
            Self::Scout => "YourGitHubHandle",
            Self::Designer | Self::Builder => "Handle",
        }
    }

    /// Handle written into the contribution log when the role is unclaimed.
    #[must_use]
    pub const fn log_placeholder(self) -> &'static str {
        match self {
            Self::Scout => "user1",
            Self::Designer => "user2",
            Self::Builder => "user3",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// SparkShape
// ---------------------------------------------------------------------------

/// Discriminant of the two document shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SparkShape {
    Legacy,
    Enhanced,
}

impl SparkShape {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Legacy => "legacy",
            Self::Enhanced => "enhanced",
        }
    }
}

impl fmt::Display for SparkShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AuditStatus
// ---------------------------------------------------------------------------

/// Traffic-light verdict of a mission audit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum AuditStatus {
    Red,
    Yellow,
    Green,
}

impl AuditStatus {
    /// Classify by how many of the three stability checks passed.
    #[must_use]
    pub const fn from_stable_count(count: usize) -> Self {
        match count {
            3.. => Self::Green,
            2 => Self::Yellow,
            _ => Self::Red,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Red => "RED",
            Self::Yellow => "YELLOW",
            Self::Green => "GREEN",
        }
    }

    #[must_use]
    pub const fn recommendation(self) -> Recommendation {
        match self {
            Self::Red => Recommendation::Reject,
            Self::Yellow => Recommendation::RequestRefinement,
            Self::Green => Recommendation::FinalLock,
        }
    }

    #[must_use]
    pub const fn confidence(self) -> Confidence {
        match self {
            Self::Red => Confidence::Low,
            Self::Yellow => Confidence::Medium,
            Self::Green => Confidence::High,
        }
    }
}

impl fmt::Display for AuditStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Recommendation
// ---------------------------------------------------------------------------

/// Action recommended to maintainers for an audited spark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Recommendation {
    #[serde(rename = "Reject")]
    Reject,
    #[serde(rename = "Request Refinement")]
    RequestRefinement,
    #[serde(rename = "Final Lock")]
    FinalLock,
}

impl Recommendation {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Reject => "Reject",
            Self::RequestRefinement => "Request Refinement",
            Self::FinalLock => "Final Lock",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Confidence
// ---------------------------------------------------------------------------

/// Confidence attached to an audit verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
