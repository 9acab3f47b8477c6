use std::sync::LazyLock;

use regex::Regex;
use spark_core::markup::strip_comments;

static HEADER_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*#{1,6}[ \t].*$").expect("header regex should compile"));

static LIST_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*(?:[-*+]|\d+[.)])[ \t]+(?:\[[ xX]\][ \t]*)?")
        .expect("list marker regex should compile")
});

/// Characters left after removing HTML comments, header lines, and list or
/// checkbox markers, then trimming.
#[must_use]
pub fn meaningful_len(text: &str) -> usize {
    let text = strip_comments(text);
    let text = HEADER_LINE.replace_all(&text, "");
    let text = LIST_MARKER.replace_all(&text, "");
    text.trim().chars().count()
}
