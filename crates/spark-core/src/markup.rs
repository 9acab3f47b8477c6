//! Markup helpers shared by the parser and the audit.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// HTML comment, possibly spanning lines.
pub static HTML_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<!--[\s\S]*?-->").expect("comment regex should compile"));

/// Remove HTML comments, borrowing when there are none.
#[must_use]
pub fn strip_comments(text: &str) -> Cow<'_, str> {
    HTML_COMMENT.replace_all(text, "")
}
