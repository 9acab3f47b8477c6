use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::enums::{FieldKey, PhaseId};

/// Status recorded when a phase block has no status line.
pub const EMPTY_STATUS: &str = "empty";

/// One stage of a legacy spark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phase {
    pub status: String,
    /// Every field of the phase is present; missing ones hold `""`.
    pub fields: BTreeMap<FieldKey, String>,
    /// Prose left over after the header and status lines are removed.
    #[serde(default)]
    pub notes: String,
}

impl Phase {
    /// A phase with all fields empty and the given status.
    #[must_use]
    pub fn new(id: PhaseId, status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            fields: id
                .fields()
                .iter()
                .map(|key| (*key, String::new()))
                .collect(),
            notes: String::new(),
        }
    }

    /// A phase as instantiated by the new-document template.
    #[must_use]
    pub fn templated(id: PhaseId) -> Self {
        Self::new(id, id.default_status())
    }

    #[must_use]
    pub fn field(&self, key: FieldKey) -> &str {
        self.fields.get(&key).map_or("", String::as_str)
    }

    pub fn set_field(&mut self, key: FieldKey, value: impl Into<String>) {
        self.fields.insert(key, value.into());
    }

    /// Whether any labeled field carries text.
    #[must_use]
    pub fn has_field_content(&self) -> bool {
        self.fields.values().any(|value| !value.trim().is_empty())
    }

    #[must_use]
    pub fn has_status(&self) -> bool {
        self.status != EMPTY_STATUS
    }

    /// Status to print, falling back to the phase default.
    #[must_use]
    pub fn display_status(&self, id: PhaseId) -> &str {
        if self.status.trim().is_empty() || !self.has_status() {
            id.default_status()
        } else {
            self.status.trim()
        }
    }
}

/// The three phases of a legacy document plus any numbered sections found
/// in it without the enhanced-shape marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyBody {
    pub spark: Phase,
    pub design: Phase,
    pub logic: Phase,
    /// Numbered `# N. Title` bodies seen in a document that lacked
    /// `spark_type:`. Informational only: the legacy generator does not emit
    /// them, [`SparkDocument::into_enhanced`](super::SparkDocument::into_enhanced) does.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub recovered_sections: BTreeMap<u8, String>,
}

impl LegacyBody {
    /// Template body with default statuses and empty fields.
    #[must_use]
    pub fn templated() -> Self {
        Self {
            spark: Phase::templated(PhaseId::Spark),
            design: Phase::templated(PhaseId::Design),
            logic: Phase::templated(PhaseId::Logic),
            recovered_sections: BTreeMap::new(),
        }
    }

    #[must_use]
    pub const fn phase(&self, id: PhaseId) -> &Phase {
        match id {
            PhaseId::Spark => &self.spark,
            PhaseId::Design => &self.design,
            PhaseId::Logic => &self.logic,
        }
    }

    pub const fn phase_mut(&mut self, id: PhaseId) -> &mut Phase {
        match id {
            PhaseId::Spark => &mut self.spark,
            PhaseId::Design => &mut self.design,
            PhaseId::Logic => &mut self.logic,
        }
    }

    #[must_use]
    pub fn field(&self, key: FieldKey) -> &str {
        self.phase(key.phase()).field(key)
    }

    pub fn set_field(&mut self, key: FieldKey, value: impl Into<String>) {
        self.phase_mut(key.phase()).set_field(key, value);
    }

    pub fn phases(&self) -> impl Iterator<Item = (PhaseId, &Phase)> {
        PhaseId::ALL.into_iter().map(|id| (id, self.phase(id)))
    }
}

impl Default for LegacyBody {
    fn default() -> Self {
        Self::templated()
    }
}
