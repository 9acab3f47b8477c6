use std::fmt::Write as _;

use spark_core::enums::{FieldKey, PhaseId, Role};
use spark_core::{LegacyBody, SparkDocument};

use super::{DELETION_NOTICE, apply_deletion_flag};
use crate::sanitize;

const CONTRIBUTION_LOG_HEADER: &str = "## 📊 Contribution Log (CS Tracker)\n| Phase | Contributor | Action | Reward |\n| :--- | :--- | :--- | :--- |\n";

const INSTRUCTIONS: &str = "> *Instructions: Start by filling out Phase 1. As the community interacts, update the file via Pull Requests to complete Phase 2 and 3.*\n";

pub(super) fn render(doc: &SparkDocument, body: &LegacyBody) -> String {
    let mut out = String::new();

    let mut frontmatter = doc.frontmatter.clone();
    apply_deletion_flag(&mut frontmatter, doc.marked_for_deletion);
    if !frontmatter.is_empty() {
        out.push_str(&frontmatter.render());
        out.push('\n');
    }
    if doc.marked_for_deletion {
        out.push_str(DELETION_NOTICE);
        out.push_str("\n\n");
    }

    let _ = write!(out, "# {}\n\n---\n\n", doc.name);
    for (id, phase) in body.phases() {
        let role = id.role();
        let _ = writeln!(
            out,
            "{} {}\n*Status: [{}]* *{}: @{}*\n",
            id.header(),
            id.tag(),
            phase.display_status(id),
            role.label(),
            doc.contributor(role).unwrap_or(role.placeholder_handle()),
        );
        if doc.uses_notes_override(id) {
            let _ = write!(out, "{}\n\n", phase.notes.trim());
        } else {
            render_fields(&mut out, id, body);
        }
        out.push_str("---\n\n");
    }

    render_contribution_log(&mut out, doc);
    out
}

/// Fixed field template for one phase with placeholders for empty fields.
fn render_fields(out: &mut String, id: PhaseId, body: &LegacyBody) {
    out.push_str(id.template_heading());
    out.push('\n');
    for key in id.fields() {
        let value = field_text(body, *key);
        if *key == FieldKey::Observation {
            let _ = writeln!(out, "> {value}");
        } else {
            let _ = writeln!(out, "* **{}:** {value}", key.label());
        }
    }
    out.push('\n');
}

fn field_text(body: &LegacyBody, key: FieldKey) -> String {
    let value = sanitize(body.field(key), key.label());
    if value.is_empty() {
        key.placeholder().to_string()
    } else {
        value
    }
}

fn render_contribution_log(out: &mut String, doc: &SparkDocument) {
    let handle = |role: Role| doc.contributor(role).unwrap_or(role.log_placeholder());
    out.push_str(CONTRIBUTION_LOG_HEADER);
    let _ = writeln!(
        out,
        "| **Spark** | @{} | Submitted Hunch | +5 CS |",
        handle(Role::Scout)
    );
    let _ = writeln!(
        out,
        "| **Design** | @{} | Designed Shape | +15 CS (+5 Echo) |",
        handle(Role::Designer)
    );
    let _ = writeln!(
        out,
        "| **Logic** | @{} | Merged Build | +25 CS (+10 Prototype) |",
        handle(Role::Builder)
    );
    out.push_str("\n---\n");
    out.push_str(INSTRUCTIONS);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_document_gets_placeholders_everywhere() {
        let doc = SparkDocument::legacy("Blank", LegacyBody::default());
        let out = crate::generate(&doc);
        for key in PhaseId::ALL.iter().flat_map(|id| id.fields()) {
            assert!(out.contains(key.placeholder()), "missing {key:?}");
        }
        assert!(out.contains("| **Spark** | @user1 |"));
        assert!(out.contains("| **Design** | @user2 |"));
        assert!(out.contains("| **Logic** | @user3 |"));
        assert!(out.contains("*Status: [Active]* *Scout: @YourGitHubHandle*"));
        assert!(out.ends_with(INSTRUCTIONS));
    }

    #[test]
    fn field_values_are_sanitized() {
        let mut body = LegacyBody::default();
        body.set_field(FieldKey::Gap, "**The Gap:** no trading\nno trading");
        let doc = SparkDocument::legacy("Mesh", body);
        let out = crate::generate(&doc);
        assert!(out.contains("* **The Gap:** no trading\n"));
    }

    #[test]
    fn claimed_roles_replace_placeholders() {
        let mut doc = SparkDocument::legacy("Mesh", LegacyBody::default());
        doc.set_contributor(Role::Designer, "@dana").unwrap();
        let out = crate::generate(&doc);
        assert!(out.contains("*Designer: @dana*"));
        assert!(out.contains("| **Design** | @dana |"));
    }

    #[test]
    fn unedited_notes_are_emitted_verbatim() {
        let source = "# Mesh\n\n## 🧠 Phase 1: The Spark (!HUNCH)\n*Status: [Active]* *Scout: @alice*\n\nFree prose about meshes.\n\n---\n";
        let doc = parse(source);
        let out = crate::generate(&doc);
        assert!(out.contains("*Scout: @alice*\n\nFree prose about meshes.\n\n---\n"));
    }

    #[test]
    fn edited_fields_win_over_stale_notes() {
        let source = "# Mesh\n\n## 🧠 Phase 1: The Spark (!HUNCH)\n*Status: [Active]* *Scout: @alice*\n\n### The Observation\n> Idle panels.\n* **The Gap:** none\n\n---\n";
        let mut doc = parse(source);
        doc.as_legacy_mut()
            .unwrap()
            .set_field(FieldKey::Gap, "no local market");
        let out = crate::generate(&doc);
        assert!(out.contains("> Idle panels.\n* **The Gap:** no local market\n"));
        assert_eq!(parse(&out).as_legacy().unwrap().field(FieldKey::Gap), "no local market");
    }

    #[test]
    fn deletion_writes_frontmatter_and_notice() {
        let mut doc = SparkDocument::legacy("Mesh", LegacyBody::default());
        doc.marked_for_deletion = true;
        let out = crate::generate(&doc);
        assert!(out.starts_with("---\nstatus: deletion_pending\nmarked_for_deletion: true\n---\n\n"));
        assert!(out.contains(DELETION_NOTICE));
        assert!(parse(&out).marked_for_deletion);
    }
}
