//! Character-level tokenizer framework for micro-grammar constructs.
//!
//! A construct is a state machine that is fed one [`Code`] at a time. While
//! running it records `enter`/`exit` events for typed spans through
//! [`Effects`]. The driver, [`attempt`], either hands back the recorded
//! events once the construct reports [`Step::Ok`], or throws everything away
//! on [`Step::Nok`] so the caller can try another construct on the same
//! input. A construct that does not match never leaves anything behind.
//!
//! Recorded events are turned into CST nodes and tokens by [`replay`].

use std::fmt;
use std::ops::Range;

use rowan::GreenNodeBuilder;

use crate::syntax::SyntaxKind;

pub mod factory;

/// A single character code, or the end of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Code {
    Char(char),
    Eof,
}

impl Code {
    pub fn is_eof(self) -> bool {
        self == Code::Eof
    }

    pub fn is_line_ending(self) -> bool {
        matches!(self, Code::Char('\n' | '\r'))
    }

    pub fn is_space_or_tab(self) -> bool {
        matches!(self, Code::Char(' ' | '\t'))
    }

    pub fn is_nul(self) -> bool {
        self == Code::Char('\0')
    }

    fn len_utf8(self) -> usize {
        match self {
            Code::Char(c) => c.len_utf8(),
            Code::Eof => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Enter,
    Exit,
}

/// Start or end of a typed span, at a byte offset into the attempted input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event {
    pub kind: EventKind,
    pub name: SyntaxKind,
    pub offset: usize,
}

/// A closed span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub name: SyntaxKind,
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// The side effects a construct can have while it runs.
pub struct Effects<'a> {
    input: &'a str,
    cursor: usize,
    events: Vec<Event>,
    open: Vec<(SyntaxKind, usize)>,
    consumed: bool,
}

impl<'a> Effects<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            cursor: 0,
            events: Vec::new(),
            open: Vec::new(),
            consumed: false,
        }
    }

    /// The code at the cursor.
    pub fn current(&self) -> Code {
        self.input[self.cursor..]
            .chars()
            .next()
            .map_or(Code::Eof, Code::Char)
    }

    /// The code right after the cursor.
    pub fn lookahead(&self) -> Code {
        let mut chars = self.input[self.cursor..].chars();
        chars.next();
        chars.next().map_or(Code::Eof, Code::Char)
    }

    /// Open a span of kind `name` at the cursor.
    pub fn enter(&mut self, name: SyntaxKind) {
        self.events.push(Event {
            kind: EventKind::Enter,
            name,
            offset: self.cursor,
        });
        self.open.push((name, self.cursor));
    }

    /// Close the innermost open span, which must be of kind `name`.
    pub fn exit(&mut self, name: SyntaxKind) -> Span {
        let start = match self.open.pop() {
            Some((open, start)) if open == name => start,
            other => panic!("exit({name:?}) does not match the open span {other:?}"),
        };
        self.events.push(Event {
            kind: EventKind::Exit,
            name,
            offset: self.cursor,
        });
        Span {
            name,
            start,
            end: self.cursor,
        }
    }

    /// Move past `code`, which must be the current code.
    pub fn consume(&mut self, code: Code) {
        assert_eq!(code, self.current(), "consumed a code that is not current");
        assert!(!code.is_eof(), "cannot consume the end of the input");
        assert!(!self.consumed, "consumed twice in one step");
        self.cursor += code.len_utf8();
        self.consumed = true;
    }

    /// The source text covered by `span`.
    pub fn slice(&self, span: Span) -> &'a str {
        &self.input[span.range()]
    }
}

/// What a construct wants to do after looking at a code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step<S> {
    /// The code was consumed; feed the next one to this state.
    Next(S),
    /// The code was not consumed; feed it again to this state.
    Retry(S),
    /// The construct matched, ending before the current code.
    Ok,
    /// The construct does not match here.
    Nok,
}

/// A micro-grammar construct.
pub trait Construct {
    type State: Copy + fmt::Debug;

    /// Name used in log output.
    fn name(&self) -> &'static str;

    fn start(&self) -> Self::State;

    fn step(&mut self, effects: &mut Effects<'_>, state: Self::State, code: Code)
    -> Step<Self::State>;
}

/// The recorded result of a successful [`attempt`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    events: Vec<Event>,
    consumed: usize,
}

impl Attempt {
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Number of bytes the construct consumed.
    pub fn len(&self) -> usize {
        self.consumed
    }

    pub fn is_empty(&self) -> bool {
        self.consumed == 0
    }

    /// All spans, ordered by where they were entered.
    pub fn spans(&self) -> Vec<Span> {
        let mut spans = Vec::new();
        let mut open = Vec::new();
        for event in &self.events {
            match event.kind {
                EventKind::Enter => {
                    open.push(spans.len());
                    spans.push(Span {
                        name: event.name,
                        start: event.offset,
                        end: event.offset,
                    });
                }
                EventKind::Exit => {
                    if let Some(index) = open.pop() {
                        spans[index].end = event.offset;
                    }
                }
            }
        }
        spans
    }

    /// The first span of kind `name`.
    pub fn span(&self, name: SyntaxKind) -> Option<Span> {
        self.spans().into_iter().find(|span| span.name == name)
    }
}

/// Run `construct` against the start of `input`.
///
/// Returns `None` when the construct reports no match; in that case nothing
/// it recorded is kept.
pub fn attempt<C: Construct>(construct: &mut C, input: &str) -> Option<Attempt> {
    let mut effects = Effects::new(input);
    let mut state = construct.start();

    loop {
        let code = effects.current();
        effects.consumed = false;

        match construct.step(&mut effects, state, code) {
            Step::Next(next) => {
                assert!(
                    effects.consumed,
                    "{} moved to {next:?} without consuming {code:?}",
                    construct.name()
                );
                state = next;
            }
            Step::Retry(next) => {
                assert!(
                    !effects.consumed,
                    "{} consumed {code:?} but asked for a retry",
                    construct.name()
                );
                state = next;
            }
            Step::Ok => {
                assert!(
                    effects.open.is_empty(),
                    "{} finished with open spans {:?}",
                    construct.name(),
                    effects.open
                );
                debug_assert_eq!(
                    token_coverage(&effects.events),
                    effects.cursor,
                    "{} consumed text outside of a token span",
                    construct.name()
                );
                log::trace!(
                    "{} matched {:?}",
                    construct.name(),
                    &input[..effects.cursor]
                );
                return Some(Attempt {
                    events: effects.events,
                    consumed: effects.cursor,
                });
            }
            Step::Nok => {
                log::trace!(
                    "{} did not match at byte {} of {:?}",
                    construct.name(),
                    effects.cursor,
                    input
                );
                return None;
            }
        }
    }
}

fn token_coverage(events: &[Event]) -> usize {
    let mut covered = 0;
    let mut token_start = None;
    for event in events {
        if !event.name.is_token() {
            continue;
        }
        match event.kind {
            EventKind::Enter => token_start = Some(event.offset),
            EventKind::Exit => {
                if let Some(start) = token_start.take() {
                    covered += event.offset - start;
                }
            }
        }
    }
    covered
}

/// Emit the spans of `attempt` into `builder`.
///
/// Token kinds become leaf tokens holding the text they cover (empty ones are
/// dropped), every other kind becomes a node.
pub fn replay(attempt: &Attempt, input: &str, builder: &mut GreenNodeBuilder<'static>) {
    let mut token_start = None;
    for event in &attempt.events {
        match (event.kind, event.name.is_token()) {
            (EventKind::Enter, true) => {
                debug_assert!(token_start.is_none(), "tokens cannot nest");
                token_start = Some(event.offset);
            }
            (EventKind::Exit, true) => {
                let start = token_start.take().unwrap_or(event.offset);
                if event.offset > start {
                    builder.token(event.name.into(), &input[start..event.offset]);
                }
            }
            (EventKind::Enter, false) => builder.start_node(event.name.into()),
            (EventKind::Exit, false) => builder.finish_node(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::SyntaxNode;

    /// `<` letters `>`, used to exercise the driver.
    struct Angle;

    #[derive(Debug, Clone, Copy)]
    enum AngleState {
        Open,
        Inside,
    }

    impl Construct for Angle {
        type State = AngleState;

        fn name(&self) -> &'static str {
            "angle"
        }

        fn start(&self) -> AngleState {
            AngleState::Open
        }

        fn step(&mut self, effects: &mut Effects<'_>, state: AngleState, code: Code) -> Step<AngleState> {
            match (state, code) {
                (AngleState::Open, Code::Char('<')) => {
                    effects.enter(SyntaxKind::CODE_SPAN);
                    effects.enter(SyntaxKind::CODE_SPAN_MARKER);
                    effects.consume(code);
                    effects.exit(SyntaxKind::CODE_SPAN_MARKER);
                    effects.enter(SyntaxKind::TEXT);
                    Step::Next(AngleState::Inside)
                }
                (AngleState::Inside, Code::Char('>')) => {
                    effects.exit(SyntaxKind::TEXT);
                    effects.enter(SyntaxKind::CODE_SPAN_MARKER);
                    effects.consume(code);
                    effects.exit(SyntaxKind::CODE_SPAN_MARKER);
                    effects.exit(SyntaxKind::CODE_SPAN);
                    Step::Ok
                }
                (AngleState::Inside, Code::Char(c)) if c.is_alphabetic() => {
                    effects.consume(code);
                    Step::Next(AngleState::Inside)
                }
                _ => Step::Nok,
            }
        }
    }

    #[test]
    fn test_code_predicates() {
        assert!(Code::Char('\n').is_line_ending());
        assert!(Code::Char('\r').is_line_ending());
        assert!(Code::Char('\t').is_space_or_tab());
        assert!(Code::Char('\0').is_nul());
        assert!(Code::Eof.is_eof());
        assert!(!Code::Eof.is_line_ending());
    }

    #[test]
    fn test_attempt_ok() {
        let result = attempt(&mut Angle, "<abc> rest").unwrap();
        assert_eq!(result.len(), 5);

        let names: Vec<_> = result.spans().iter().map(|s| s.name).collect();
        assert_eq!(
            names,
            vec![
                SyntaxKind::CODE_SPAN,
                SyntaxKind::CODE_SPAN_MARKER,
                SyntaxKind::TEXT,
                SyntaxKind::CODE_SPAN_MARKER,
            ]
        );
        assert_eq!(result.span(SyntaxKind::TEXT).unwrap().range(), 1..4);
    }

    #[test]
    fn test_attempt_nok_leaves_nothing() {
        assert_eq!(attempt(&mut Angle, "<ab1>"), None);
        assert_eq!(attempt(&mut Angle, "<abc"), None);
        assert_eq!(attempt(&mut Angle, "abc>"), None);
    }

    #[test]
    fn test_replay_builds_tokens() {
        let input = "<abc>";
        let result = attempt(&mut Angle, input).unwrap();

        let mut builder = GreenNodeBuilder::new();
        builder.start_node(SyntaxKind::DOCUMENT.into());
        replay(&result, input, &mut builder);
        builder.finish_node();
        let tree = SyntaxNode::new_root(builder.finish());

        assert_eq!(tree.text().to_string(), input);
        let span = tree.first_child().unwrap();
        assert_eq!(span.kind(), SyntaxKind::CODE_SPAN);
        let tokens: Vec<_> = span
            .children_with_tokens()
            .filter_map(|it| it.into_token())
            .map(|t| (t.kind(), t.text().to_string()))
            .collect();
        assert_eq!(
            tokens,
            vec![
                (SyntaxKind::CODE_SPAN_MARKER, "<".to_string()),
                (SyntaxKind::TEXT, "abc".to_string()),
                (SyntaxKind::CODE_SPAN_MARKER, ">".to_string()),
            ]
        );
    }

    #[test]
    fn test_replay_drops_empty_tokens() {
        let input = "<>";
        let result = attempt(&mut Angle, input).unwrap();

        let mut builder = GreenNodeBuilder::new();
        builder.start_node(SyntaxKind::DOCUMENT.into());
        replay(&result, input, &mut builder);
        builder.finish_node();
        let tree = SyntaxNode::new_root(builder.finish());

        let span = tree.first_child().unwrap();
        assert_eq!(span.children_with_tokens().count(), 2);
    }

    #[test]
    fn test_lookahead() {
        let effects = Effects::new("ab");
        assert_eq!(effects.current(), Code::Char('a'));
        assert_eq!(effects.lookahead(), Code::Char('b'));
        let effects = Effects::new("a");
        assert_eq!(effects.lookahead(), Code::Eof);
    }
}
