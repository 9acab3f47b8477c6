use std::collections::BTreeMap;

use spark_core::enums::EnhancedSection;
use spark_core::handle::{is_placeholder_handle, is_valid_handle, normalize_handle};
use spark_core::markup::strip_comments;
use spark_core::{EnhancedBody, Frontmatter};

use crate::patterns::{
    H1_LINE, OWNER_LINE, PROPOSAL_END, PROPOSAL_HEADER, SECTION_END, SECTION_HEADER,
};

pub(super) fn extract(frontmatter: &Frontmatter, text: &str) -> (EnhancedBody, Option<String>) {
    let sections = extract_sections(text);
    let proposals = extract_proposals(text);
    (
        EnhancedBody::from_sections(sections, proposals),
        owner(frontmatter, text),
    )
}

/// Bodies of sections 1..=8, each trimmed. The first header for a number wins.
pub(super) fn extract_sections(text: &str) -> BTreeMap<u8, String> {
    let mut sections = BTreeMap::new();
    for caps in SECTION_HEADER.captures_iter(text) {
        let Some(number) = caps[1].parse::<u8>().ok().filter(|n| (1..=8).contains(n)) else {
            continue;
        };
        if sections.contains_key(&number) {
            continue;
        }
        let Some(header) = caps.get(0) else {
            continue;
        };
        let start = header.end();
        let end = SECTION_END
            .find_at(text, start)
            .map_or(text.len(), |m| m.start());
        sections.insert(number, text[start..end].trim().to_string());
    }
    sections
}

/// Per-section proposals under `# 9. Community Proposals`. Empty and
/// comment-only proposals are dropped.
fn extract_proposals(text: &str) -> BTreeMap<u8, String> {
    let mut proposals = BTreeMap::new();
    let Some(block_header) = SECTION_HEADER
        .captures_iter(text)
        .find(|caps| caps[1].parse::<u8>().ok() == Some(EnhancedSection::PROPOSALS_NUMBER))
        .and_then(|caps| caps.get(0))
    else {
        return proposals;
    };

    let block_start = block_header.end();
    let block_end = H1_LINE
        .find_at(text, block_start)
        .map_or(text.len(), |m| m.start());
    let block = &text[block_start..block_end];

    for caps in PROPOSAL_HEADER.captures_iter(block) {
        let Some(section) = caps[1]
            .parse::<u8>()
            .ok()
            .and_then(|n| EnhancedSection::from_number(n).ok())
        else {
            continue;
        };
        let Some(header) = caps.get(0) else {
            continue;
        };
        let start = header.end();
        let end = PROPOSAL_END
            .find_at(block, start)
            .map_or(block.len(), |m| m.start());
        let cleaned = strip_comments(&block[start..end]);
        let cleaned = cleaned.trim();
        if !cleaned.is_empty() {
            proposals.insert(section.number(), cleaned.to_string());
        }
    }
    proposals
}

/// Owner from frontmatter `owner:`/`scout:` or an `*Owner: @handle*` line.
fn owner(frontmatter: &Frontmatter, text: &str) -> Option<String> {
    ["owner", "scout"]
        .iter()
        .filter_map(|key| frontmatter.get(key))
        .map(|value| normalize_handle(&value).to_string())
        .find(|handle| is_valid_handle(handle) && !is_placeholder_handle(handle))
        .or_else(|| {
            OWNER_LINE
                .captures(text)
                .map(|caps| caps[1].to_string())
                .filter(|handle| !is_placeholder_handle(handle))
        })
}
