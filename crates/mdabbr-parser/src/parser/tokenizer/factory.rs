//! Reusable sub-state-machines shared by constructs.

use super::{Code, Effects};
use crate::syntax::SyntaxKind;

/// Where [`space_or_tab`] is within a whitespace run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpaceOrTab {
    Before,
    Inside,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpaceStep {
    /// The code was consumed, keep feeding this state.
    Next(SpaceOrTab),
    /// The run is over. The current code was not consumed.
    Done,
}

/// Wrap zero or more spaces and tabs into a single `kind` span.
///
/// Nothing is recorded when there is no whitespace at all.
pub fn space_or_tab(
    effects: &mut Effects<'_>,
    state: SpaceOrTab,
    code: Code,
    kind: SyntaxKind,
) -> SpaceStep {
    match state {
        SpaceOrTab::Before if code.is_space_or_tab() => {
            effects.enter(kind);
            effects.consume(code);
            SpaceStep::Next(SpaceOrTab::Inside)
        }
        SpaceOrTab::Before => SpaceStep::Done,
        SpaceOrTab::Inside if code.is_space_or_tab() => {
            effects.consume(code);
            SpaceStep::Next(SpaceOrTab::Inside)
        }
        SpaceOrTab::Inside => {
            effects.exit(kind);
            SpaceStep::Done
        }
    }
}
