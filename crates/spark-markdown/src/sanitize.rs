//! Field value flattening for the legacy template.

/// Flatten a field value to one clean line.
///
/// Removes a leading echo of the field's own label (`**The Gap:**`,
/// optionally behind `>`, `*`, or `-`) and leading blockquote markers from
/// every line, drops blank lines and lines identical to the one before, and
/// joins the rest with single spaces. Stripping repeats until nothing changes,
/// so `sanitize(sanitize(x, l), l) == sanitize(x, l)`.
#[must_use]
pub fn sanitize(value: &str, label: &str) -> String {
    let normalized = value.replace("\r\n", "\n");
    let mut lines: Vec<&str> = Vec::new();
    for line in normalized.split('\n') {
        let cleaned = strip_to_fixpoint(line, label);
        if cleaned.is_empty() || lines.last() == Some(&cleaned) {
            continue;
        }
        lines.push(cleaned);
    }
    let joined = lines.join(" ");
    strip_to_fixpoint(&joined, label).to_string()
}

fn strip_to_fixpoint<'a>(line: &'a str, label: &str) -> &'a str {
    let mut current = line.trim();
    loop {
        let next = strip_blockquote(strip_label_echo(current, label)).trim();
        if next.len() == current.len() {
            return current;
        }
        current = next;
    }
}

/// `^\s*[>*-]?\s*\*{0,2}LABEL\*{0,2}\s*:?\s*`, case-insensitive. A colon
/// written inside the bold markers is accepted too.
fn strip_label_echo<'a>(line: &'a str, label: &str) -> &'a str {
    let rest = line.trim_start();
    let rest = rest.strip_prefix(['>', '*', '-']).unwrap_or(rest).trim_start();
    let rest = strip_stars(rest);
    let Some(head) = rest.get(..label.len()) else {
        return line;
    };
    if !head.eq_ignore_ascii_case(label) {
        return line;
    }
    let rest = strip_stars(&rest[label.len()..]);
    let rest = rest.strip_prefix(':').unwrap_or(rest);
    let rest = strip_stars(rest).trim_start();
    rest.strip_prefix(':').unwrap_or(rest).trim_start()
}

fn strip_stars(text: &str) -> &str {
    let text = text.strip_prefix('*').unwrap_or(text);
    text.strip_prefix('*').unwrap_or(text)
}

/// `^\s*>\s+`
fn strip_blockquote(line: &str) -> &str {
    let rest = line.trim_start();
    match rest.strip_prefix('>') {
        Some(after) if after.starts_with(char::is_whitespace) => after.trim_start(),
        _ => line,
    }
}
