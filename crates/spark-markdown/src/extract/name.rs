use spark_core::Frontmatter;
use spark_core::entities::UNTITLED_NAME;

use crate::patterns::{BRAND_PREFIX, NUMBERED_HEADING};

/// Frontmatter `name:`, then `title:`, then the first non-numbered heading
/// with any emoji or brand prefix removed, then the untitled placeholder.
pub(super) fn resolve(frontmatter: &Frontmatter, body: &str) -> String {
    for key in ["name", "title"] {
        if let Some(value) = frontmatter.get(key).filter(|v| !v.trim().is_empty()) {
            return value.trim().to_string();
        }
    }

    for line in body.lines() {
        let line = line.trim();
        if !line.starts_with('#') || NUMBERED_HEADING.is_match(line) {
            continue;
        }
        let raw_title = line.trim_start_matches('#').trim();
        if raw_title.is_empty() {
            continue;
        }
        let clean = BRAND_PREFIX.replace(raw_title, "");
        let clean = clean.trim();
        return if clean.is_empty() { raw_title } else { clean }.to_string();
    }

    UNTITLED_NAME.to_string()
}
