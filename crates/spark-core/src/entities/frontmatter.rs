use serde::{Deserialize, Serialize};

/// YAML frontmatter kept as its original lines.
///
/// Only top-level `key: value` lines are addressable. Nested blocks, comments,
/// and blank lines are carried through untouched so that regenerating a
/// document does not reorder or drop metadata the core does not understand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Frontmatter {
    lines: Vec<String>,
}

impl Frontmatter {
    /// Split a document into its frontmatter block and the remaining body.
    ///
    /// The block must open on the very first line with `---` and close with a
    /// later `---` line. Anything else yields `None` and the full text.
    #[must_use]
    pub fn split(text: &str) -> (Option<Self>, &str) {
        let source = text.strip_prefix('\u{feff}').unwrap_or(text);
        let mut lines = source.split_inclusive('\n');
        let Some(first) = lines.next() else {
            return (None, text);
        };
        if first.trim_end() != "---" || !first.ends_with('\n') {
            return (None, text);
        }

        let mut offset = first.len();
        let mut collected = Vec::new();
        for line in lines {
            offset += line.len();
            let content = line.trim_end_matches(['\n', '\r']);
            if content.trim_end() == "---" {
                return (Some(Self { lines: collected }), &source[offset..]);
            }
            collected.push(content.to_string());
        }
        (None, text)
    }

    #[must_use]
    pub fn from_lines(lines: Vec<String>) -> Self {
        Self { lines }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Value of a top-level key with surrounding quotes removed.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        self.lines
            .iter()
            .find_map(|line| value_of(line, key))
            .map(|raw| unquote(raw.trim()))
    }

    /// Whether a top-level key is present, even with an empty value.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.lines.iter().any(|line| value_of(line, key).is_some())
    }

    /// Set a key to a raw YAML scalar (`true`, `deletion_pending`).
    pub fn set_raw(&mut self, key: &str, raw: &str) {
        let rendered = format!("{key}: {raw}");
        match self.lines.iter_mut().find(|line| value_of(line, key).is_some()) {
            Some(line) => *line = rendered,
            None => self.lines.push(rendered),
        }
    }

    /// Set a key to a double-quoted string value.
    pub fn set_str(&mut self, key: &str, value: &str) {
        self.set_raw(key, &quote(value));
    }

    /// Insert a quoted key at the top of the block unless it already exists.
    pub fn set_str_first(&mut self, key: &str, value: &str) {
        if self.contains(key) {
            self.set_str(key, value);
        } else {
            self.lines.insert(0, format!("{key}: {}", quote(value)));
        }
    }

    /// Remove every top-level line for `key`.
    pub fn remove(&mut self, key: &str) {
        self.lines.retain(|line| value_of(line, key).is_none());
    }

    /// Render the block including its `---` fences and a trailing newline.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::from("---\n");
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out.push_str("---\n");
        out
    }
}

fn value_of<'a>(line: &'a str, key: &str) -> Option<&'a str> {
    line.strip_prefix(key)?.strip_prefix(':')
}

fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
}

fn unquote(raw: &str) -> String {
    if raw.len() >= 2 && raw.starts_with('"') && raw.ends_with('"') {
        return raw[1..raw.len() - 1]
            .replace("\\\"", "\"")
            .replace("\\\\", "\\");
    }
    if raw.len() >= 2 && raw.starts_with('\'') && raw.ends_with('\'') {
        return raw[1..raw.len() - 1].replace("''", "'");
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const DOC: &str = "---\nid: spark_1\ntitle: \"Solar Mesh\"\nspark_type: 'exploration'\nassumptions:\n  - \"a\"\n---\n\n# Solar Mesh\n";

    #[test]
    fn split_separates_block_and_body() {
        let (fm, body) = Frontmatter::split(DOC);
        let fm = fm.expect("frontmatter present");
        assert_eq!(fm.lines().len(), 5);
        assert_eq!(body, "\n# Solar Mesh\n");
    }

    #[test]
    fn split_without_fence_returns_whole_text() {
        let (fm, body) = Frontmatter::split("# Title\n---\n");
        assert!(fm.is_none());
        assert_eq!(body, "# Title\n---\n");
    }

    #[test]
    fn split_unterminated_block_is_not_frontmatter() {
        let (fm, _) = Frontmatter::split("---\ntitle: x\n");
        assert!(fm.is_none());
    }

    #[test]
    fn get_strips_both_quote_styles() {
        let (fm, _) = Frontmatter::split(DOC);
        let fm = fm.unwrap();
        assert_eq!(fm.get("title").as_deref(), Some("Solar Mesh"));
        assert_eq!(fm.get("spark_type").as_deref(), Some("exploration"));
        assert_eq!(fm.get("name"), None);
    }

    #[test]
    fn nested_keys_are_not_top_level() {
        let fm = Frontmatter::from_lines(vec!["outer:".into(), "  title: inner".into()]);
        assert_eq!(fm.get("title"), None);
    }

    #[test]
    fn set_replaces_in_place_and_appends_new_keys() {
        let (fm, _) = Frontmatter::split(DOC);
        let mut fm = fm.unwrap();
        fm.set_str("title", "Say \"hi\"");
        fm.set_raw("marked_for_deletion", "true");
        assert_eq!(fm.lines()[1], "title: \"Say \\\"hi\\\"\"");
        assert_eq!(fm.get("title").as_deref(), Some("Say \"hi\""));
        assert_eq!(fm.lines().last().unwrap(), "marked_for_deletion: true");
    }

    #[test]
    fn remove_drops_key() {
        let mut fm = Frontmatter::from_lines(vec!["status: deletion_pending".into(), "id: x".into()]);
        fm.remove("status");
        assert_eq!(fm.render(), "---\nid: x\n---\n");
    }

    #[test]
    fn set_first_inserts_at_top() {
        let mut fm = Frontmatter::from_lines(vec!["spark_type: \"exploration\"".into()]);
        fm.set_str_first("title", "Mesh");
        assert_eq!(fm.lines()[0], "title: \"Mesh\"");
    }
}
