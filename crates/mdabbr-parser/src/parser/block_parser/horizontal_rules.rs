//! Thematic break parsing utilities.

use crate::syntax::SyntaxKind;
use rowan::GreenNodeBuilder;

use super::utils::{split_leading_whitespace, split_trailing_whitespace, strip_newline};

/// Try to parse a thematic break from a line.
///
/// A thematic break is 3 or more `*`, `-`, or `_` characters,
/// optionally separated by spaces, indented by at most 3 spaces.
pub(crate) fn try_parse_horizontal_rule(line: &str) -> Option<char> {
    let (content, _) = strip_newline(line);
    let (indent, rest) = split_leading_whitespace(content);
    if indent.contains('\t') || indent.len() > 3 {
        return None;
    }
    let trimmed = rest.trim_end();

    let rule_char = trimmed.chars().next()?;
    if !matches!(rule_char, '*' | '-' | '_') {
        return None;
    }

    let mut count = 0;
    for ch in trimmed.chars() {
        match ch {
            c if c == rule_char => count += 1,
            ' ' | '\t' => continue,
            _ => return None,
        }
    }

    if count >= 3 { Some(rule_char) } else { None }
}

/// Emit a thematic break node. The line ending stays with the caller.
pub(crate) fn emit_horizontal_rule(builder: &mut GreenNodeBuilder<'static>, content: &str) {
    builder.start_node(SyntaxKind::HORIZONTAL_RULE.into());

    let (indent, rest) = split_leading_whitespace(content);
    let (marker, trailing) = split_trailing_whitespace(rest);

    if !indent.is_empty() {
        builder.token(SyntaxKind::WHITESPACE.into(), indent);
    }
    builder.token(SyntaxKind::HORIZONTAL_RULE_MARKER.into(), marker);
    if !trailing.is_empty() {
        builder.token(SyntaxKind::WHITESPACE.into(), trailing);
    }

    builder.finish_node();
}
