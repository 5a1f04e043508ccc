use itertools::Itertools;

/// Remove `//` comment lines before parsing.
///
/// The publication content files use `//` comments rather than BibTeX's `%`;
/// both parsers strip them up front.
pub(crate) fn strip_comment_lines(text: &str) -> String {
    text.lines()
        .filter(|line| !line.trim_start().starts_with("//"))
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_strip_comment_lines() {
        let input = "// header comment\n@article{Key,\n  // inline note\n  year={2021}\n}";
        assert_eq!(
            strip_comment_lines(input),
            "@article{Key,\n  year={2021}\n}"
        );
    }

    #[test]
    fn test_strip_comment_lines_ignores_indentation() {
        assert_eq!(strip_comment_lines("   // indented"), "");
        assert_eq!(strip_comment_lines("text // trailing"), "text // trailing");
    }

    #[test]
    fn test_strip_comment_lines_empty_input() {
        assert_eq!(strip_comment_lines(""), "");
    }
}
