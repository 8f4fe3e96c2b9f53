//! Shared utilities for block parsing.

/// Strip up to 3 leading spaces from a line.
pub(crate) fn strip_leading_spaces(line: &str) -> &str {
    line.strip_prefix("   ")
        .or_else(|| line.strip_prefix("  "))
        .or_else(|| line.strip_prefix(" "))
        .unwrap_or(line)
}

/// Strip trailing newline (LF or CRLF) from a line, returning the content and the newline string.
pub(crate) fn strip_newline(line: &str) -> (&str, &str) {
    if let Some(content) = line.strip_suffix("\r\n") {
        (content, "\r\n")
    } else if let Some(content) = line.strip_suffix('\n') {
        (content, "\n")
    } else {
        (line, "")
    }
}

/// Split `text` into its leading spaces/tabs and the rest.
pub(crate) fn split_leading_whitespace(text: &str) -> (&str, &str) {
    let rest = text.trim_start_matches([' ', '\t']);
    text.split_at(text.len() - rest.len())
}

/// Split `text` into the rest and its trailing spaces/tabs.
pub(crate) fn split_trailing_whitespace(text: &str) -> (&str, &str) {
    let rest = text.trim_end_matches([' ', '\t']);
    text.split_at(rest.len())
}

/// Split input into lines while preserving line endings (LF or CRLF).
/// This is like split_inclusive but handles both \n and \r\n.
pub(crate) fn split_lines_inclusive(input: &str) -> Vec<&str> {
    if input.is_empty() {
        return vec![];
    }

    let mut lines = Vec::new();
    let mut start = 0;
    let bytes = input.as_bytes();
    let len = bytes.len();

    let mut i = 0;
    while i < len {
        if bytes[i] == b'\n' {
            lines.push(&input[start..=i]);
            start = i + 1;
            i += 1;
        } else if bytes[i] == b'\r' && i + 1 < len && bytes[i + 1] == b'\n' {
            lines.push(&input[start..=i + 1]);
            start = i + 2;
            i += 2;
        } else {
            i += 1;
        }
    }

    // Last line without newline
    if start < len {
        lines.push(&input[start..]);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_lines_inclusive() {
        assert_eq!(split_lines_inclusive(""), Vec::<&str>::new());
        assert_eq!(split_lines_inclusive("a\nb"), vec!["a\n", "b"]);
        assert_eq!(split_lines_inclusive("a\r\nb\n"), vec!["a\r\n", "b\n"]);
        assert_eq!(split_lines_inclusive("a\rb"), vec!["a\rb"]);
    }

    #[test]
    fn test_strip_newline() {
        assert_eq!(strip_newline("a\r\n"), ("a", "\r\n"));
        assert_eq!(strip_newline("a\n"), ("a", "\n"));
        assert_eq!(strip_newline("a"), ("a", ""));
    }

    #[test]
    fn test_strip_leading_spaces() {
        assert_eq!(strip_leading_spaces("    code"), " code");
        assert_eq!(strip_leading_spaces("  text"), "text");
    }

    #[test]
    fn test_split_whitespace() {
        assert_eq!(split_leading_whitespace(" \tabc "), (" \t", "abc "));
        assert_eq!(split_trailing_whitespace(" abc \t"), (" abc", " \t"));
        assert_eq!(split_trailing_whitespace(""), ("", ""));
    }
}
