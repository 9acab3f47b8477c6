//! Starting documents for `spark new`.

use spark_core::entities::NEW_SPARK_NAME;
use spark_core::{LegacyBody, SparkDocument};

use crate::parse;

/// Blank enhanced spark with every section scaffolded.
pub const ENHANCED_TEMPLATE: &str = r#"---
id: spark_<unique_id>
title: "<Clear, concise spark title>"
domain: "<research | engineering | policy | education | product | other>"
spark_type: "<hypothesis | reframing | contradiction | system_design | constraint | exploration>"

maturity_level: "<seed | structured | modeled | validated | implemented>"
status: "<draft | under_review | iterating | accepted | archived>"

core_claim: "<One-sentence central claim or shift>"

problem_statement: "<What gap or inefficiency does this address?>"

assumptions:
  - "<Assumption 1>"
  - "<Assumption 2>"

unknowns:
  - "<Unknown 1>"
  - "<Unknown 2>"

variables:
  independent:
    - "<Variable manipulated>"
  dependent:
    - "<Outcome measured>"

metrics:
  - "<Metric 1>"
  - "<Metric 2>"

constraints:
  - "<Budget / time / technical constraint>"
  - "<Acceptable trade-offs>"

risks:
  - "<Technical risk>"
  - "<Adoption risk>"
  - "<Ethical or unintended consequence>"

evaluation_strategy:
  method: "<experiment | simulation | case study | prototype | survey | analysis>"
  success_criteria: "<What defines success?>"
  falsifiable: true

related_sparks:
  - "<spark_id_if_any>"

revision_history:
  - version: "0.1"
    note: "Initial structured spark"
---

# 1. Spark Narrative
<!-- Describe the idea clearly and compellingly.
     Explain the shift in thinking.
     What makes this different from current approaches? -->

---

# 2. Hypothesis Formalization
<!-- Convert the spark into a falsifiable statement. -->

**Hypothesis Statement**
> "<Clear measurable hypothesis>"

**Null Hypothesis**
> "<What would prove this wrong?>"

---

# 3. Simulation / Modeling Plan
<!-- Describe how the idea will be tested before full implementation. -->

## Model Type
- <Data replay / mathematical model / agent-based simulation / prototype / other>

## Inputs
- <Data or parameters required>

## Expected Outputs
- <What results will be generated?>

## Sensitivity Analysis
- <What variables may significantly change outcomes?>

---

# 4. Evaluation Strategy
<!-- Define how evidence will be gathered and judged. -->

- Measurement method:
- Data source:
- Statistical or logical criteria:
- Comparison baseline:

---

# 5. Feedback & Critique
<!-- Document structured critique. -->

## Internal Critique
- Hidden assumptions:
- Weaknesses:
- Scalability concerns:

## Counter-Hypothesis
> "<Alternative explanation or competing theory>"

---

# 6. Results (When Available)
<!-- Populate after simulation or experimentation. -->

- Observed outcomes:
- Deviations from expectation:
- Surprises:

---

# 7. Revision Notes
<!-- Track how the idea evolves. -->

- What changed?
- Why?
- New maturity level:

---

# 8. Next Actions
<!-- Concrete steps forward. -->

- [ ] Run simulation
- [ ] Gather dataset
- [ ] Peer review
- [ ] Prototype
- [ ] Publish findings

---

# 9. Community Proposals
<!-- Non-owner contributions section. Community members can propose improvements to sections. -->

## Proposed Changes to Section 1 (Spark Narrative)
<!-- Describe proposed improvements to the core story or narrative. -->

---

## Proposed Changes to Section 2 (Hypothesis Formalization)
<!-- Propose alternative or refined hypothesis statements. -->

---

## Proposed Changes to Section 3 (Simulation / Modeling Plan)
<!-- Suggest modeling improvements or alternative evaluation approaches. -->

---

## Proposed Changes to Section 4 (Evaluation Strategy)
<!-- Propose refinements to success criteria or measurement methods. -->

---

## Proposed Changes to Section 5 (Feedback & Critique)
<!-- Add structured critiques or counter-hypotheses. -->

---

## Proposed Changes to Section 6 (Results)
<!-- Community replications or additional findings. -->

---

## Proposed Changes to Section 7 (Revision Notes)
<!-- Suggest evolutionary improvements to the spark. -->

---

## Proposed Changes to Section 8 (Next Actions)
<!-- Suggest concrete next steps or refinements. -->

---

> **Proposal Tracking**: Each proposal is tracked with contributor attribution for Echo Bonus (+5 CS) and Validation Bonus (+10 CS) rewards per the Manifesto.

---

# Maturity Guide (Reference)

- **Seed** → Conceptual spark only
- **Structured** → Hypothesis defined
- **Modeled** → Simulated or analyzed
- **Validated** → Empirical support
- **Implemented** → Deployed in real context
"#;

/// A fresh enhanced spark named `name`, parsed from [`ENHANCED_TEMPLATE`].
///
/// The template text is kept as the raw source, so generating the result
/// before any edit reproduces the scaffold with only the title replaced.
#[must_use]
pub fn new_enhanced(name: &str) -> SparkDocument {
    let mut doc = parse(ENHANCED_TEMPLATE);
    doc.name = display_name(name);
    doc
}

/// A fresh three-phase spark with default statuses and empty fields.
#[must_use]
pub fn new_legacy(name: &str) -> SparkDocument {
    SparkDocument::legacy(display_name(name), LegacyBody::templated())
}

fn display_name(name: &str) -> String {
    let name = name.trim();
    if name.is_empty() {
        NEW_SPARK_NAME.to_string()
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate;
    use pretty_assertions::assert_eq;
    use spark_core::enums::EnhancedSection;

    #[test]
    fn template_is_enhanced_with_all_sections() {
        let doc = new_enhanced("Solar Mesh");
        assert!(doc.is_enhanced());
        let body = doc.as_enhanced().unwrap();
        assert_eq!(body.active_sections.len(), 8);
        assert!(body.proposals.is_empty());
        assert!(body.section(EnhancedSection::Hypothesis).contains("**Null Hypothesis**"));
    }

    #[test]
    fn fresh_template_generates_with_title_patched() {
        let out = generate(&new_enhanced("Solar Mesh"));
        assert!(out.starts_with("---\nid: spark_<unique_id>\ntitle: \"Solar Mesh\"\n"));
        assert!(out.contains("# Maturity Guide (Reference)"));
        assert_eq!(out.len(), ENHANCED_TEMPLATE.len() + "Solar Mesh".len() - "<Clear, concise spark title>".len());
    }

    #[test]
    fn blank_names_fall_back() {
        assert_eq!(new_legacy("  ").name, NEW_SPARK_NAME);
        assert_eq!(new_enhanced("").name, NEW_SPARK_NAME);
    }

    #[test]
    fn legacy_template_starts_unclaimed() {
        let doc = new_legacy("Mesh");
        assert!(doc.contributors.is_empty());
        assert_eq!(doc.stability(), 0);
    }
}
