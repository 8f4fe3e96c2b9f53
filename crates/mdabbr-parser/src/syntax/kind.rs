//! Syntax kinds and language definition for the Markdown CST.

use rowan::Language;

#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum SyntaxKind {
    // Tokens
    WHITESPACE = 0,
    NEWLINE,
    TEXT,
    ESCAPED_CHAR,           // \* and friends
    BLANK_LINE,             // whole blank line, newline included
    ATX_HEADING_MARKER,     // leading or closing #####
    HORIZONTAL_RULE_MARKER, // *** or --- or ___ (inner spaces included)
    CODE_FENCE_MARKER,      // ``` or ~~~
    CODE_INFO,              // raw info string after the opening fence
    CODE_CONTENT,           // one line of fenced code, newline included
    CODE_SPAN_MARKER,       // ` or `` or ```
    EMPHASIS_MARKER,        // * or _
    STRONG_MARKER,          // ** or __
    ABBR_DEFINITION_MARKER, // * [ ] : of an abbreviation definition

    // Inline nodes
    CODE_SPAN,
    EMPHASIS,
    STRONG,

    // Abbreviations
    ABBR_DEFINITION,        // *[HTML]: Hyper Text Markup Language
    ABBR_DEFINITION_LABEL,  // [HTML]
    ABBR_DEFINITION_STRING, // HTML
    ABBR_DEFINITION_VALUE,  // Hyper Text Markup Language

    // Blocks
    BLANK_LINE_NODE,
    PARAGRAPH,
    HEADING,
    HEADING_CONTENT,
    HORIZONTAL_RULE,
    CODE_BLOCK,
    CODE_FENCE_OPEN,
    CODE_FENCE_CLOSE,

    // Must stay last, `kind_from_raw` relies on it.
    DOCUMENT,
}

impl SyntaxKind {
    /// Kinds that are emitted as leaf tokens rather than nodes.
    pub fn is_token(self) -> bool {
        self <= SyntaxKind::ABBR_DEFINITION_MARKER
    }

    /// Kinds that carry inline content which the inline parser expands.
    pub fn is_inline_container(self) -> bool {
        matches!(self, SyntaxKind::PARAGRAPH | SyntaxKind::HEADING_CONTENT)
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MarkdownLanguage {}

impl Language for MarkdownLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        assert!(raw.0 <= SyntaxKind::DOCUMENT as u16, "unknown syntax kind {}", raw.0);
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_kinds() {
        assert!(SyntaxKind::TEXT.is_token());
        assert!(SyntaxKind::ABBR_DEFINITION_MARKER.is_token());
        assert!(!SyntaxKind::ABBR_DEFINITION.is_token());
        assert!(!SyntaxKind::DOCUMENT.is_token());
    }

    #[test]
    fn test_raw_roundtrip() {
        for kind in [
            SyntaxKind::WHITESPACE,
            SyntaxKind::ABBR_DEFINITION_VALUE,
            SyntaxKind::DOCUMENT,
        ] {
            let raw = MarkdownLanguage::kind_to_raw(kind);
            assert_eq!(MarkdownLanguage::kind_from_raw(raw), kind);
        }
    }
}
