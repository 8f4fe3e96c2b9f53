//! Parser module containing the tokenizer framework, block and inline parsers.

use crate::options::Extensions;
use crate::syntax::SyntaxNode;

pub mod block_parser;
pub mod inline_parser;
pub mod tokenizer;

use block_parser::{AbbrRegistry, BlockParser};
use inline_parser::InlineParser;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Parses a Markdown document into a CST plus the abbreviation definitions
/// found while parsing it.
///
/// # Examples
///
/// ```rust
/// use mdabbr_parser::{Extensions, parse};
///
/// let (tree, registry) = parse("*[HTML]: Hyper Text Markup Language", &Extensions::default());
/// assert_eq!(tree.text().to_string(), "*[HTML]: Hyper Text Markup Language");
/// assert_eq!(registry.get("HTML").unwrap().value, "Hyper Text Markup Language");
/// ```
pub fn parse(input: &str, extensions: &Extensions) -> (SyntaxNode, AbbrRegistry) {
    #[cfg(debug_assertions)]
    {
        init_logger();
    }

    let (block_tree, registry) = BlockParser::new(input, extensions).parse();
    let tree = InlineParser::new(block_tree, extensions.clone()).parse();
    (tree, registry)
}
