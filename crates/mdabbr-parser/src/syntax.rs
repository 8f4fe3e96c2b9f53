//! Syntax tree types and typed node wrappers.

mod abbreviations;
mod ast;
mod blocks;
mod kind;

pub use abbreviations::AbbrDefinition;
pub use ast::AstNode;
pub use blocks::{CodeBlock, Heading};
pub use kind::{MarkdownLanguage, SyntaxKind};

pub type SyntaxNode = rowan::SyntaxNode<MarkdownLanguage>;
pub type SyntaxToken = rowan::SyntaxToken<MarkdownLanguage>;
pub type SyntaxElement = rowan::SyntaxElement<MarkdownLanguage>;
