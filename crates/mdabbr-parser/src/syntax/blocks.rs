//! Heading and code block AST node wrappers.

use super::ast::support;
use super::{AstNode, SyntaxKind, SyntaxNode};

pub struct Heading(SyntaxNode);

impl AstNode for Heading {
    fn can_cast(kind: SyntaxKind) -> bool {
        kind == SyntaxKind::HEADING
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

impl Heading {
    /// Returns the heading level (1-6), taken from the opening marker.
    pub fn level(&self) -> usize {
        support::token(&self.0, SyntaxKind::ATX_HEADING_MARKER)
            .map(|marker| marker.text().len())
            .unwrap_or(1)
    }

    /// Returns the heading content node if present.
    pub fn content(&self) -> Option<SyntaxNode> {
        support::child(&self.0, SyntaxKind::HEADING_CONTENT)
    }
}

pub struct CodeBlock(SyntaxNode);

impl AstNode for CodeBlock {
    fn can_cast(kind: SyntaxKind) -> bool {
        kind == SyntaxKind::CODE_BLOCK
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

impl CodeBlock {
    /// The raw info string of the opening fence, if any.
    pub fn info(&self) -> Option<String> {
        support::child(&self.0, SyntaxKind::CODE_FENCE_OPEN)
            .and_then(|open| support::token(&open, SyntaxKind::CODE_INFO))
            .map(|info| info.text().to_string())
    }

    /// The first word of the info string.
    pub fn language(&self) -> Option<String> {
        self.info()
            .and_then(|info| info.split_whitespace().next().map(str::to_string))
    }

    /// The code between the fences, including line endings.
    pub fn content(&self) -> String {
        self.0
            .children_with_tokens()
            .filter_map(|it| it.into_token())
            .filter(|it| it.kind() == SyntaxKind::CODE_CONTENT)
            .map(|it| it.text().to_string())
            .collect()
    }
}
