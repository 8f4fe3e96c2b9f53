//! Parser extension switches.

/// Markdown extensions understood by the parser.
///
/// Everything is on by default; switching `abbreviations` off turns
/// `*[LABEL]: text` lines back into ordinary paragraphs.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Extensions {
    /// `*[LABEL]: expansion` definitions
    pub abbreviations: bool,
    /// Fenced code blocks with backticks or tildes
    pub fenced_code_blocks: bool,
    /// Backslash escapes any ASCII punctuation
    pub backslash_escapes: bool,
    /// Underscores inside words don't open or close emphasis
    pub intraword_underscores: bool,
}

impl Default for Extensions {
    fn default() -> Self {
        Self {
            abbreviations: true,
            fenced_code_blocks: true,
            backslash_escapes: true,
            intraword_underscores: true,
        }
    }
}
