//! Abbreviation definition AST node wrapper.

use super::ast::support;
use super::{AstNode, SyntaxKind, SyntaxNode};

/// `*[LABEL]: expansion` as it appears in the CST.
pub struct AbbrDefinition(SyntaxNode);

impl AstNode for AbbrDefinition {
    fn can_cast(kind: SyntaxKind) -> bool {
        kind == SyntaxKind::ABBR_DEFINITION
    }

    fn cast(syntax: SyntaxNode) -> Option<Self> {
        if Self::can_cast(syntax.kind()) {
            Some(Self(syntax))
        } else {
            None
        }
    }

    fn syntax(&self) -> &SyntaxNode {
        &self.0
    }
}

impl AbbrDefinition {
    /// The label between the brackets, exactly as written.
    pub fn label(&self) -> String {
        support::child(&self.0, SyntaxKind::ABBR_DEFINITION_LABEL)
            .and_then(|label| support::child(&label, SyntaxKind::ABBR_DEFINITION_STRING))
            .map(|string| support::text_of(&string, SyntaxKind::TEXT))
            .unwrap_or_default()
    }

    /// The expansion text after the colon, verbatim.
    pub fn value(&self) -> String {
        support::child(&self.0, SyntaxKind::ABBR_DEFINITION_VALUE)
            .map(|value| support::text_of(&value, SyntaxKind::TEXT))
            .unwrap_or_default()
    }
}
