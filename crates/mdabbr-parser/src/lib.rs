//! Lossless Markdown parser with abbreviation definitions.
//!
//! Parsing happens in two passes, both producing a `rowan` CST:
//!
//! 1. [`BlockParser`] splits the input into blocks. Abbreviation definitions
//!    (`*[HTML]: Hyper Text Markup Language`) are recognised here by a
//!    character-level construct driven by the [`parser::tokenizer`] framework.
//! 2. [`InlineParser`] expands paragraph and heading content into code spans,
//!    emphasis and escapes.
//!
//! The tree text always equals the input.

pub mod options;
pub mod parser;
pub mod syntax;

pub use options::Extensions;
pub use parser::block_parser::{AbbrEntry, AbbrRegistry, BlockParser};
pub use parser::inline_parser::InlineParser;
pub use parser::parse;
pub use syntax::{SyntaxKind, SyntaxNode, SyntaxToken};
