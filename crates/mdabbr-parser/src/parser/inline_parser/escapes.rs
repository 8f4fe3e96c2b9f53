//! Parsing for backslash escape sequences.
//!
//! Any ASCII punctuation character preceded by a backslash is literal. Escapes
//! do not apply inside code spans.

use crate::syntax::SyntaxKind;
use rowan::GreenNodeBuilder;

/// Try to parse a backslash escape at the start of `text`.
/// Returns (total_len, escaped_char).
pub(crate) fn try_parse_escape(text: &str) -> Option<(usize, char)> {
    let next_char = text.strip_prefix('\\')?.chars().next()?;

    if !next_char.is_ascii_punctuation() {
        return None;
    }

    Some((1 + next_char.len_utf8(), next_char))
}

/// Emit the full escape sequence (backslash + character) for losslessness.
pub(crate) fn emit_escape(builder: &mut GreenNodeBuilder<'static>, ch: char) {
    let mut s = String::with_capacity(2);
    s.push('\\');
    s.push(ch);
    builder.token(SyntaxKind::ESCAPED_CHAR.into(), &s);
}
