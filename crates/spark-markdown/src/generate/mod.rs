//! [`SparkDocument`] → markdown.

mod enhanced;
mod legacy;

use spark_core::{Frontmatter, SparkBody, SparkDocument};

use crate::ENHANCED_SENTINEL;
use crate::extract::source_name;

/// Blockquote emitted under the frontmatter of a document marked for deletion.
pub const DELETION_NOTICE: &str = "> ⚠️ **Marked for deletion.** The owner has requested removal of this spark. It will be deleted once this change is merged.";

/// Serialize a document to spark markdown.
///
/// Deterministic and total. An enhanced document that was parsed and not
/// structurally edited since is returned as its original text with only the
/// title patched.
#[must_use]
pub fn generate(doc: &SparkDocument) -> String {
    if let Some(raw) = passthrough(doc) {
        tracing::debug!(name = %doc.name, "spark unchanged; reusing source text");
        return raw;
    }
    match &doc.body {
        SparkBody::Legacy(body) => legacy::render(doc, body),
        SparkBody::Enhanced(body) => enhanced::render(doc, body),
    }
}

/// Source text with the title patched, if the document is unedited.
fn passthrough(doc: &SparkDocument) -> Option<String> {
    let raw = doc.raw_content.as_deref()?;
    if !raw.contains(ENHANCED_SENTINEL) || doc.is_dirty() {
        return None;
    }

    let normalized = raw.replace("\r\n", "\n");
    let (Some(mut frontmatter), body) = Frontmatter::split(&normalized) else {
        // No title line to patch; a rename needs a full render.
        return (source_name(raw) == doc.name).then(|| raw.to_string());
    };
    let title_matches = frontmatter.get("title").as_deref() == Some(doc.name.as_str());
    let name_matches = frontmatter
        .get("name")
        .is_none_or(|name| name == doc.name);
    if title_matches && name_matches {
        return Some(raw.to_string());
    }
    patch_title(&mut frontmatter, &doc.name);
    Some(format!("{}{body}", frontmatter.render()))
}

/// Point `title:` (and `name:` when present) at `name`.
fn patch_title(frontmatter: &mut Frontmatter, name: &str) {
    frontmatter.set_str_first("title", name);
    if frontmatter.contains("name") {
        frontmatter.set_str("name", name);
    }
}

/// Add or clear the deletion keys.
fn apply_deletion_flag(frontmatter: &mut Frontmatter, marked: bool) {
    if marked {
        frontmatter.set_raw("status", "deletion_pending");
        frontmatter.set_raw("marked_for_deletion", "true");
    } else {
        frontmatter.remove("marked_for_deletion");
        if frontmatter.get("status").as_deref() == Some("deletion_pending") {
            frontmatter.remove("status");
        }
    }
}
