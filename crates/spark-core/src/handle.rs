//! Contributor handle rules.

/// Handles written into unclaimed status lines. Parsing treats them as absent.
pub const PLACEHOLDER_HANDLES: [&str; 2] = ["YourGitHubHandle", "Handle"];

/// Whether `handle` matches `^[A-Za-z0-9-]+$`.
#[must_use]
pub fn is_valid_handle(handle: &str) -> bool {
    !handle.is_empty() && handle.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
}

/// Whether `handle` is one of the template placeholders.
#[must_use]
pub fn is_placeholder_handle(handle: &str) -> bool {
    PLACEHOLDER_HANDLES.contains(&handle)
}

/// Strip a leading `@` and surrounding whitespace.
#[must_use]
pub fn normalize_handle(handle: &str) -> &str {
    handle.trim().trim_start_matches('@')
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("octocat", true)]
    #[case("dev-42", true)]
    #[case("", false)]
    #[case("under_score", false)]
    #[case("with space", false)]
    #[case("@octocat", false)]
    #[case("naïve", false)]
    fn handle_pattern(#[case] handle: &str, #[case] expected: bool) {
        assert_eq!(is_valid_handle(handle), expected);
    }

    #[test]
    fn placeholder_handles_are_recognized() {
        assert!(is_placeholder_handle("YourGitHubHandle"));
        assert!(is_placeholder_handle("Handle"));
        assert!(!is_placeholder_handle("handle"));
    }

    #[test]
    fn normalize_strips_at_sign() {
        assert_eq!(normalize_handle(" @octocat "), "octocat");
    }
}
