//! Whitespace normalization applied before segment splitting.

/// Collapse every whitespace run (spaces, tabs, newlines) into a single space
/// and trim both ends.
///
/// After this step tag boundaries no longer depend on source formatting:
/// `<div\n  id="a">` and `<div id="a">` split identically.
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_runs_and_trims() {
        assert_eq!(normalize("  <p>\n\t hello   world </p>\r\n"), "<p> hello world </p>");
    }

    #[test]
    fn test_whitespace_only_is_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" \n\t "), "");
    }

    #[test]
    fn test_already_normal_is_unchanged() {
        assert_eq!(normalize("<a href=\"x\">y</a>"), "<a href=\"x\">y</a>");
    }
}
