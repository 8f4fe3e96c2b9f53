//! ATX heading parsing utilities.

use crate::syntax::SyntaxKind;
use rowan::GreenNodeBuilder;

use super::utils::{split_leading_whitespace, split_trailing_whitespace};

/// Try to parse an ATX heading from content, returns heading level (1-6) if found.
pub(crate) fn try_parse_atx_heading(content: &str) -> Option<usize> {
    let trimmed = content.trim_start_matches(' ');

    // Check leading spaces (max 3)
    if content.len() - trimmed.len() > 3 {
        return None;
    }

    let hash_count = trimmed.chars().take_while(|&c| c == '#').count();
    if hash_count == 0 || hash_count > 6 {
        return None;
    }

    // After hashes, must be end of line, space, or tab
    let after_hashes = &trimmed[hash_count..];
    if !after_hashes.is_empty()
        && !after_hashes.starts_with([' ', '\t', '\n'])
        && !after_hashes.starts_with("\r\n")
    {
        return None;
    }

    Some(hash_count)
}

/// Split heading text into content and an optional closing sequence.
///
/// Returns `(content, gap, closing)`; the closing hashes only count when they
/// are preceded by whitespace or make up the whole text.
fn split_closing_sequence(text: &str) -> (&str, &str, &str) {
    let without_hashes = text.trim_end_matches('#');
    if without_hashes.len() == text.len() {
        return (text, "", "");
    }
    if without_hashes.is_empty() {
        return ("", "", text);
    }
    if !without_hashes.ends_with([' ', '\t']) {
        return (text, "", "");
    }
    let (content, gap) = split_trailing_whitespace(without_hashes);
    (content, gap, &text[without_hashes.len()..])
}

/// Emit an ATX heading node. `content` must not include the line ending.
pub(crate) fn emit_atx_heading(
    builder: &mut GreenNodeBuilder<'static>,
    content: &str,
    level: usize,
) {
    builder.start_node(SyntaxKind::HEADING.into());

    let (indent, trimmed) = split_leading_whitespace(content);
    if !indent.is_empty() {
        builder.token(SyntaxKind::WHITESPACE.into(), indent);
    }

    builder.token(SyntaxKind::ATX_HEADING_MARKER.into(), &trimmed[..level]);

    let (spaces, after_marker) = split_leading_whitespace(&trimmed[level..]);
    if !spaces.is_empty() {
        builder.token(SyntaxKind::WHITESPACE.into(), spaces);
    }

    let (heading_text, trailing) = split_trailing_whitespace(after_marker);
    let (text, gap, closing) = split_closing_sequence(heading_text);

    builder.start_node(SyntaxKind::HEADING_CONTENT.into());
    if !text.is_empty() {
        builder.token(SyntaxKind::TEXT.into(), text);
    }
    builder.finish_node();

    if !gap.is_empty() {
        builder.token(SyntaxKind::WHITESPACE.into(), gap);
    }
    if !closing.is_empty() {
        builder.token(SyntaxKind::ATX_HEADING_MARKER.into(), closing);
    }
    if !trailing.is_empty() {
        builder.token(SyntaxKind::WHITESPACE.into(), trailing);
    }

    builder.finish_node(); // HEADING
}
