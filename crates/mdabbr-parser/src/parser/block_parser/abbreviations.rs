//! Abbreviation definitions.
//!
//! ```markdown
//! *[HTML]: Hyper Text Markup Language
//! ```
//!
//! A definition occupies exactly one line. The label must be non-empty and
//! cannot contain `]` or a line ending; the value is the rest of the line,
//! verbatim. Anything that does not fit is left for the other block
//! constructs to claim.

use std::ops::Range;

use rowan::GreenNodeBuilder;

use crate::parser::tokenizer::factory::{SpaceOrTab, SpaceStep, space_or_tab};
use crate::parser::tokenizer::{Attempt, Code, Construct, Effects, Step, attempt, replay};
use crate::syntax::SyntaxKind;

/// One definition as it was found in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AbbrEntry {
    pub label: String,
    pub value: String,
    /// Byte range of the whole definition, from `*` to the end of the value.
    pub range: Range<usize>,
}

/// Every abbreviation definition of one document, in document order.
///
/// Labels are case-sensitive. When a label is defined more than once, the
/// definition that comes last wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AbbrRegistry {
    definitions: Vec<AbbrEntry>,
}

impl AbbrRegistry {
    pub fn new() -> Self {
        Self {
            definitions: Vec::new(),
        }
    }

    pub fn add(&mut self, label: String, value: String, range: Range<usize>) {
        self.definitions.push(AbbrEntry {
            label,
            value,
            range,
        });
    }

    /// All definitions, duplicates included.
    pub fn definitions(&self) -> &[AbbrEntry] {
        &self.definitions
    }

    /// The winning definition for `label`.
    pub fn get(&self, label: &str) -> Option<&AbbrEntry> {
        self.definitions.iter().rev().find(|entry| entry.label == label)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.get(label).is_some()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Definitions whose label was already defined earlier in the document.
    pub fn duplicates(&self) -> Vec<&AbbrEntry> {
        self.definitions
            .iter()
            .enumerate()
            .filter(|(i, entry)| {
                self.definitions[..*i]
                    .iter()
                    .any(|earlier| earlier.label == entry.label)
            })
            .map(|(_, entry)| entry)
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbbrState {
    Start,
    LabelOpen,
    LabelStart,
    LabelBody,
    SeparatorExpect,
    Whitespace(SpaceOrTab),
    ValueStart,
    ValueBody,
}

/// State machine for `*[LABEL]: value`.
#[derive(Debug, Default)]
pub struct AbbrDefinitionConstruct;

impl AbbrDefinitionConstruct {
    fn marker(effects: &mut Effects<'_>, code: Code) {
        effects.enter(SyntaxKind::ABBR_DEFINITION_MARKER);
        effects.consume(code);
        effects.exit(SyntaxKind::ABBR_DEFINITION_MARKER);
    }
}

impl Construct for AbbrDefinitionConstruct {
    type State = AbbrState;

    fn name(&self) -> &'static str {
        "abbr_definition"
    }

    fn start(&self) -> AbbrState {
        AbbrState::Start
    }

    fn step(&mut self, effects: &mut Effects<'_>, state: AbbrState, code: Code) -> Step<AbbrState> {
        match state {
            // *[HTML]: Hyper Text Markup Language
            // ^
            AbbrState::Start => {
                if code != Code::Char('*') {
                    return Step::Nok;
                }
                effects.enter(SyntaxKind::ABBR_DEFINITION);
                Self::marker(effects, code);
                Step::Next(AbbrState::LabelOpen)
            }
            // *[HTML]: Hyper Text Markup Language
            //  ^
            AbbrState::LabelOpen => {
                if code != Code::Char('[') {
                    return Step::Nok;
                }
                effects.enter(SyntaxKind::ABBR_DEFINITION_LABEL);
                Self::marker(effects, code);
                Step::Next(AbbrState::LabelStart)
            }
            // *[HTML]: Hyper Text Markup Language
            //   ^
            AbbrState::LabelStart => {
                if code == Code::Char(']') || code.is_eof() || code.is_line_ending() || code.is_nul()
                {
                    return Step::Nok;
                }
                effects.enter(SyntaxKind::ABBR_DEFINITION_STRING);
                effects.enter(SyntaxKind::TEXT);
                Step::Retry(AbbrState::LabelBody)
            }
            // *[HTML]: Hyper Text Markup Language
            //   ^^^^^
            AbbrState::LabelBody => {
                if code.is_eof() || code.is_line_ending() || code.is_nul() {
                    return Step::Nok;
                }
                if code == Code::Char(']') {
                    effects.exit(SyntaxKind::TEXT);
                    effects.exit(SyntaxKind::ABBR_DEFINITION_STRING);
                    Self::marker(effects, code);
                    effects.exit(SyntaxKind::ABBR_DEFINITION_LABEL);
                    return Step::Next(AbbrState::SeparatorExpect);
                }
                effects.consume(code);
                Step::Next(AbbrState::LabelBody)
            }
            // *[HTML]: Hyper Text Markup Language
            //        ^
            AbbrState::SeparatorExpect => {
                if code != Code::Char(':') {
                    return Step::Nok;
                }
                Self::marker(effects, code);
                Step::Next(AbbrState::Whitespace(SpaceOrTab::Before))
            }
            // *[HTML]: Hyper Text Markup Language
            //         ^
            AbbrState::Whitespace(inner) => {
                match space_or_tab(effects, inner, code, SyntaxKind::WHITESPACE) {
                    SpaceStep::Next(next) => Step::Next(AbbrState::Whitespace(next)),
                    SpaceStep::Done => Step::Retry(AbbrState::ValueStart),
                }
            }
            // *[HTML]: Hyper Text Markup Language
            //          ^
            AbbrState::ValueStart => {
                effects.enter(SyntaxKind::ABBR_DEFINITION_VALUE);
                effects.enter(SyntaxKind::TEXT);
                Step::Retry(AbbrState::ValueBody)
            }
            // *[HTML]: Hyper Text Markup Language
            //          ^^^^^^^^^^^^^^^^^^^^^^^^^^
            AbbrState::ValueBody => {
                let ends_line = match code {
                    Code::Eof | Code::Char('\n') => true,
                    Code::Char('\r') => matches!(effects.lookahead(), Code::Char('\n') | Code::Eof),
                    _ => false,
                };
                if ends_line {
                    effects.exit(SyntaxKind::TEXT);
                    effects.exit(SyntaxKind::ABBR_DEFINITION_VALUE);
                    effects.exit(SyntaxKind::ABBR_DEFINITION);
                    return Step::Ok;
                }
                effects.consume(code);
                Step::Next(AbbrState::ValueBody)
            }
        }
    }
}

/// Try to recognise an abbreviation definition at the start of `content`.
pub(crate) fn try_parse_abbr_definition(content: &str) -> Option<Attempt> {
    if !content.starts_with("*[") {
        return None;
    }
    attempt(&mut AbbrDefinitionConstruct, content)
}

/// Label and value text of a successful attempt.
pub(crate) fn definition_parts(result: &Attempt, content: &str) -> (String, String) {
    let text = |kind| {
        result
            .span(kind)
            .map(|span| content[span.range()].to_string())
            .unwrap_or_default()
    };
    (
        text(SyntaxKind::ABBR_DEFINITION_STRING),
        text(SyntaxKind::ABBR_DEFINITION_VALUE),
    )
}

/// Emit a recognised definition and the rest of its line.
pub(crate) fn emit_abbr_definition(
    builder: &mut GreenNodeBuilder<'static>,
    result: &Attempt,
    content: &str,
) {
    replay(result, content, builder);

    let rest = &content[result.len()..];
    if !rest.is_empty() {
        builder.token(SyntaxKind::NEWLINE.into(), rest);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(input: &str) -> Option<(String, String)> {
        try_parse_abbr_definition(input).map(|result| definition_parts(&result, input))
    }

    fn kinds(input: &str) -> Vec<(SyntaxKind, String)> {
        let result = try_parse_abbr_definition(input).unwrap();
        result
            .spans()
            .into_iter()
            .map(|span| (span.name, input[span.range()].to_string()))
            .collect()
    }

    #[test]
    fn test_simple_definition() {
        assert_eq!(
            parts("*[HTML]: Hyper Text Markup Language"),
            Some(("HTML".to_string(), "Hyper Text Markup Language".to_string()))
        );
    }

    #[test]
    fn test_event_shape() {
        assert_eq!(
            kinds("*[HTML]: Hyper"),
            vec![
                (SyntaxKind::ABBR_DEFINITION, "*[HTML]: Hyper".to_string()),
                (SyntaxKind::ABBR_DEFINITION_MARKER, "*".to_string()),
                (SyntaxKind::ABBR_DEFINITION_LABEL, "[HTML]".to_string()),
                (SyntaxKind::ABBR_DEFINITION_MARKER, "[".to_string()),
                (SyntaxKind::ABBR_DEFINITION_STRING, "HTML".to_string()),
                (SyntaxKind::TEXT, "HTML".to_string()),
                (SyntaxKind::ABBR_DEFINITION_MARKER, "]".to_string()),
                (SyntaxKind::ABBR_DEFINITION_MARKER, ":".to_string()),
                (SyntaxKind::WHITESPACE, " ".to_string()),
                (SyntaxKind::ABBR_DEFINITION_VALUE, "Hyper".to_string()),
                (SyntaxKind::TEXT, "Hyper".to_string()),
            ]
        );
    }

    #[test]
    fn test_complex_label() {
        assert_eq!(
            parts("*[MV(VSL) (E&W)]: Motor Vehicle (Vehicle Stock Ledger) (England & Wales)"),
            Some((
                "MV(VSL) (E&W)".to_string(),
                "Motor Vehicle (Vehicle Stock Ledger) (England & Wales)".to_string()
            ))
        );
    }

    #[test]
    fn test_value_stops_at_line_ending() {
        let input = "*[HTML]: Hyper Text\nnext";
        let result = try_parse_abbr_definition(input).unwrap();
        assert_eq!(result.len(), 19);
        assert_eq!(definition_parts(&result, input).1, "Hyper Text");

        let input = "*[HTML]: Hyper Text\r\nnext";
        let result = try_parse_abbr_definition(input).unwrap();
        assert_eq!(result.len(), 19);
    }

    #[test]
    fn test_value_is_verbatim() {
        assert_eq!(
            parts("*[A]: spaced out  ").map(|(_, value)| value),
            Some("spaced out  ".to_string())
        );
        assert_eq!(
            parts("*[A]: a\rb").map(|(_, value)| value),
            Some("a\rb".to_string())
        );
        assert_eq!(
            parts("*[A]: a\0b").map(|(_, value)| value),
            Some("a\0b".to_string())
        );
    }

    #[test]
    fn test_whitespace_is_optional() {
        assert_eq!(
            parts("*[A]:value"),
            Some(("A".to_string(), "value".to_string()))
        );
        assert_eq!(
            parts("*[A]:\t  value"),
            Some(("A".to_string(), "value".to_string()))
        );
    }

    #[test]
    fn test_empty_value() {
        assert_eq!(parts("*[A]:"), Some(("A".to_string(), String::new())));
        assert_eq!(parts("*[A]:   \n"), Some(("A".to_string(), String::new())));
    }

    #[test]
    fn test_empty_label_is_not_a_definition() {
        assert_eq!(parts("*[]: Empty"), None);
    }

    #[test]
    fn test_malformed_definitions() {
        assert_eq!(parts("*HTML]: x"), None);
        assert_eq!(parts("[HTML]: x"), None);
        assert_eq!(parts("*[HTML] x"), None);
        assert_eq!(parts("*[HTML]x"), None);
        assert_eq!(parts("*[HT\nML]: x"), None);
        assert_eq!(parts("*[HT\0ML]: x"), None);
        assert_eq!(parts("*[HTML"), None);
        assert_eq!(parts("*["), None);
    }

    #[test]
    fn test_registry_last_wins() {
        let mut registry = AbbrRegistry::new();
        registry.add("HTML".to_string(), "first".to_string(), 0..10);
        registry.add("CSS".to_string(), "styles".to_string(), 11..20);
        registry.add("HTML".to_string(), "second".to_string(), 21..30);

        assert_eq!(registry.len(), 3);
        assert_eq!(registry.get("HTML").unwrap().value, "second");
        assert!(registry.contains("CSS"));
        assert!(!registry.contains("css"));

        let duplicates = registry.duplicates();
        assert_eq!(duplicates.len(), 1);
        assert_eq!(duplicates[0].range, 21..30);
    }
}
