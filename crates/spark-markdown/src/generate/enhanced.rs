use std::fmt::Write as _;

use spark_core::entities::DEFAULT_SPARK_TYPE;
use spark_core::enums::EnhancedSection;
use spark_core::handle::{is_placeholder_handle, is_valid_handle, normalize_handle};
use spark_core::{EnhancedBody, Frontmatter, SparkDocument};

use super::{DELETION_NOTICE, apply_deletion_flag, patch_title};

const PROPOSALS_HEADER: &str = "# 9. Community Proposals\n\n";

const PROPOSAL_TRACKING_NOTE: &str = "> **Proposal Tracking**: Each proposal is tracked with contributor attribution for Echo Bonus (+5 CS) and Validation Bonus (+10 CS) rewards per the Manifesto.";

pub(super) fn render(doc: &SparkDocument, body: &EnhancedBody) -> String {
    let mut frontmatter = doc.frontmatter.clone();
    patch_title(&mut frontmatter, &doc.name);
    if !frontmatter.contains("spark_type") {
        frontmatter.set_str("spark_type", DEFAULT_SPARK_TYPE);
    }
    sync_owner(&mut frontmatter, doc.owner());
    apply_deletion_flag(&mut frontmatter, doc.marked_for_deletion);

    let mut out = frontmatter.render();
    out.push('\n');
    if doc.marked_for_deletion {
        out.push_str(DELETION_NOTICE);
        out.push_str("\n\n");
    }

    let _ = write!(out, "# {}\n\n", doc.name);
    if let Some(owner) = doc.owner() {
        let _ = write!(out, "*Owner: @{owner}*\n\n");
    }

    for section in EnhancedSection::ALL {
        let text = body.section(section).trim();
        if !text.is_empty() {
            let _ = write!(out, "{}\n{text}\n\n---\n\n", section.header());
        }
    }

    let proposals: Vec<(EnhancedSection, &str)> = EnhancedSection::ALL
        .into_iter()
        .map(|section| (section, body.proposal(section).trim()))
        .filter(|(_, text)| !text.is_empty())
        .collect();
    if !proposals.is_empty() {
        out.push_str(PROPOSALS_HEADER);
        for (section, text) in proposals {
            let _ = write!(
                out,
                "## Proposed Changes to Section {} ({})\n{text}\n\n---\n\n",
                section.number(),
                section.proposal_title(),
            );
        }
        out.push_str(PROPOSAL_TRACKING_NOTE);
    }

    let mut out = out.trim_end().to_string();
    out.push('\n');
    out
}

/// Point the frontmatter owner keys at the current owner.
///
/// Each `owner:`/`scout:` key present is rewritten, or removed when the spark
/// has no owner. Template placeholders are left alone since parsing skips them.
fn sync_owner(frontmatter: &mut Frontmatter, owner: Option<&str>) {
    for key in ["owner", "scout"] {
        if !frontmatter.contains(key) {
            continue;
        }
        match owner {
            Some(owner) => frontmatter.set_str(key, owner),
            None => {
                let claimed = frontmatter.get(key).is_some_and(|value| {
                    let handle = normalize_handle(&value);
                    is_valid_handle(handle) && !is_placeholder_handle(handle)
                });
                if claimed {
                    frontmatter.remove(key);
                }
            }
        }
    }
}
