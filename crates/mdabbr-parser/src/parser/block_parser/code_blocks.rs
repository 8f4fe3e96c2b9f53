//! Fenced code block parsing utilities.

use crate::syntax::SyntaxKind;
use rowan::GreenNodeBuilder;

use super::utils::{
    split_leading_whitespace, split_trailing_whitespace, strip_leading_spaces, strip_newline,
};

/// Information about a detected code fence opening.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FenceInfo {
    pub fence_char: char,
    pub fence_count: usize,
    pub info_string: String,
}

/// Try to detect a fenced code block opening from a line.
pub(crate) fn try_parse_fence_open(line: &str) -> Option<FenceInfo> {
    let (content, _) = strip_newline(line);
    let trimmed = strip_leading_spaces(content);

    let fence_char = match trimmed.chars().next()? {
        c @ ('`' | '~') => c,
        _ => return None,
    };
    let fence_count = trimmed.chars().take_while(|&c| c == fence_char).count();
    if fence_count < 3 {
        return None;
    }

    let info_string = trimmed[fence_count..].trim();
    // A backtick fence cannot carry backticks in its info string, that is a code span.
    if fence_char == '`' && info_string.contains('`') {
        return None;
    }

    Some(FenceInfo {
        fence_char,
        fence_count,
        info_string: info_string.to_string(),
    })
}

/// Check if a line is a valid closing fence for the given fence info.
pub(crate) fn is_closing_fence(line: &str, fence: &FenceInfo) -> bool {
    let (content, _) = strip_newline(line);
    let trimmed = strip_leading_spaces(content);

    let closing_count = trimmed
        .chars()
        .take_while(|&c| c == fence.fence_char)
        .count();

    closing_count >= fence.fence_count && trimmed[closing_count..].trim().is_empty()
}

fn emit_fence_open(builder: &mut GreenNodeBuilder<'static>, content: &str, fence: &FenceInfo) {
    builder.start_node(SyntaxKind::CODE_FENCE_OPEN.into());

    let (indent, rest) = split_leading_whitespace(content);
    if !indent.is_empty() {
        builder.token(SyntaxKind::WHITESPACE.into(), indent);
    }
    builder.token(SyntaxKind::CODE_FENCE_MARKER.into(), &rest[..fence.fence_count]);

    let (space, info) = split_leading_whitespace(&rest[fence.fence_count..]);
    let (info, trailing) = split_trailing_whitespace(info);
    if !space.is_empty() {
        builder.token(SyntaxKind::WHITESPACE.into(), space);
    }
    if !info.is_empty() {
        builder.token(SyntaxKind::CODE_INFO.into(), info);
    }
    if !trailing.is_empty() {
        builder.token(SyntaxKind::WHITESPACE.into(), trailing);
    }

    builder.finish_node(); // CODE_FENCE_OPEN
}

fn emit_fence_close(builder: &mut GreenNodeBuilder<'static>, content: &str) {
    builder.start_node(SyntaxKind::CODE_FENCE_CLOSE.into());

    let (indent, rest) = split_leading_whitespace(content);
    let (marker, trailing) = split_trailing_whitespace(rest);
    if !indent.is_empty() {
        builder.token(SyntaxKind::WHITESPACE.into(), indent);
    }
    builder.token(SyntaxKind::CODE_FENCE_MARKER.into(), marker);
    if !trailing.is_empty() {
        builder.token(SyntaxKind::WHITESPACE.into(), trailing);
    }

    builder.finish_node(); // CODE_FENCE_CLOSE
}

/// Parse a fenced code block starting at `start_pos`.
///
/// An unclosed fence runs to the end of the document. The line ending of the
/// block's last line is emitted after the block node. Returns the number of
/// lines consumed.
pub(crate) fn parse_fenced_code_block(
    builder: &mut GreenNodeBuilder<'static>,
    lines: &[&str],
    start_pos: usize,
    fence: &FenceInfo,
) -> usize {
    let mut end = start_pos + 1;
    let mut closed = false;
    while end < lines.len() {
        let line = lines[end];
        end += 1;
        if is_closing_fence(line, fence) {
            closed = true;
            break;
        }
    }
    let last = end - 1;

    log::debug!(
        "Fenced code block: lines {}..{}, closed={}",
        start_pos + 1,
        end,
        closed
    );

    builder.start_node(SyntaxKind::CODE_BLOCK.into());

    for (pos, &line) in lines.iter().enumerate().take(end).skip(start_pos) {
        let (content, newline) = strip_newline(line);
        if pos == start_pos {
            emit_fence_open(builder, content, fence);
            if pos != last && !newline.is_empty() {
                builder.token(SyntaxKind::NEWLINE.into(), newline);
            }
        } else if closed && pos == last {
            emit_fence_close(builder, content);
        } else {
            let text = if pos == last { content } else { line };
            if !text.is_empty() {
                builder.token(SyntaxKind::CODE_CONTENT.into(), text);
            }
        }
    }

    builder.finish_node(); // CODE_BLOCK

    let (_, newline) = strip_newline(lines[last]);
    if !newline.is_empty() {
        builder.token(SyntaxKind::NEWLINE.into(), newline);
    }

    end - start_pos
}
