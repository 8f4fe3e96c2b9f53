//! Parsing for emphasis (*italic*, **bold**).
//!
//! A delimiter run of one or two `*`/`_` opens emphasis when it is left
//! flanking and is closed by the next right-flanking run of the same
//! character and length. Longer runs are plain text.
//!
//! With `intraword_underscores`, underscores inside words neither open nor
//! close emphasis, so `snake_case_name` stays literal.

use crate::options::Extensions;
use crate::syntax::SyntaxKind;
use rowan::GreenNodeBuilder;

use super::code_spans::try_parse_code_span;
use super::escapes::try_parse_escape;

/// A matched emphasis span, relative to the position it was tried at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct EmphasisMatch {
    /// Length of the whole span, delimiters included.
    pub len: usize,
    /// 1 = em, 2 = strong
    pub level: usize,
    pub delim_char: char,
}

/// Length of the run of `ch` starting at `pos`.
pub(crate) fn delimiter_run_len(text: &str, pos: usize, ch: char) -> usize {
    text[pos..].chars().take_while(|&c| c == ch).count()
}

/// Determine if a delimiter run can open/close emphasis based on flanking rules.
fn analyze_delimiter_run(
    text: &str,
    run_start: usize,
    run_char: char,
    run_count: usize,
    intraword_underscores: bool,
) -> (bool, bool) {
    let run_end = run_start + run_count;

    let char_before = text[..run_start].chars().last();
    let char_after = text[run_end..].chars().next();

    let followed_by_whitespace = char_after.is_none_or(char::is_whitespace);
    let followed_by_punctuation = char_after.is_some_and(|c| c.is_ascii_punctuation());
    let preceded_by_whitespace = char_before.is_none_or(char::is_whitespace);
    let preceded_by_punctuation = char_before.is_some_and(|c| c.is_ascii_punctuation());

    let left_flanking = !followed_by_whitespace
        && (!followed_by_punctuation || preceded_by_whitespace || preceded_by_punctuation);

    let right_flanking = !preceded_by_whitespace
        && (!preceded_by_punctuation || followed_by_whitespace || followed_by_punctuation);

    if run_char == '_' && intraword_underscores {
        let preceded_by_alnum = char_before.is_some_and(char::is_alphanumeric);
        let followed_by_alnum = char_after.is_some_and(char::is_alphanumeric);

        (
            left_flanking && !preceded_by_alnum,
            right_flanking && !followed_by_alnum,
        )
    } else {
        (left_flanking, right_flanking)
    }
}

/// Try to parse emphasis opening at byte `pos` of `text`.
///
/// The whole of `text` is passed so the character before the opener counts
/// for flanking. Code spans and escapes are skipped while looking for the
/// closer.
pub(crate) fn try_parse_emphasis(
    text: &str,
    pos: usize,
    extensions: &Extensions,
) -> Option<EmphasisMatch> {
    let delim_char = text[pos..].chars().next()?;
    if delim_char != '*' && delim_char != '_' {
        return None;
    }

    let open_count = delimiter_run_len(text, pos, delim_char);
    if open_count > 2 {
        return None;
    }

    let intraword = extensions.intraword_underscores;
    let (can_open, _) = analyze_delimiter_run(text, pos, delim_char, open_count, intraword);
    if !can_open {
        return None;
    }

    let mut search_pos = pos + open_count;
    while search_pos < text.len() {
        let rest = &text[search_pos..];

        if extensions.backslash_escapes
            && let Some((len, _)) = try_parse_escape(rest)
        {
            search_pos += len;
            continue;
        }
        if rest.starts_with('`') {
            search_pos += match try_parse_code_span(rest) {
                Some((len, _, _)) => len,
                None => delimiter_run_len(text, search_pos, '`'),
            };
            continue;
        }
        if rest.starts_with(delim_char) {
            let close_count = delimiter_run_len(text, search_pos, delim_char);
            let (_, can_close) =
                analyze_delimiter_run(text, search_pos, delim_char, close_count, intraword);
            if can_close && close_count == open_count {
                return Some(EmphasisMatch {
                    len: search_pos + close_count - pos,
                    level: open_count,
                    delim_char,
                });
            }
            search_pos += close_count;
            continue;
        }

        search_pos += rest.chars().next()?.len_utf8();
    }

    None
}

/// Emit an emphasis or strong node. `span` is the matched text, delimiters included.
pub(crate) fn emit_emphasis(
    builder: &mut GreenNodeBuilder<'static>,
    span: &str,
    found: EmphasisMatch,
    extensions: &Extensions,
) {
    let (node, marker) = if found.level == 2 {
        (SyntaxKind::STRONG, SyntaxKind::STRONG_MARKER)
    } else {
        (SyntaxKind::EMPHASIS, SyntaxKind::EMPHASIS_MARKER)
    };
    let level = found.level;
    let inner = &span[level..span.len() - level];

    builder.start_node(node.into());
    builder.token(marker.into(), &span[..level]);
    super::parse_inline_text(builder, inner, extensions);
    builder.token(marker.into(), &span[span.len() - level..]);
    builder.finish_node();
}
