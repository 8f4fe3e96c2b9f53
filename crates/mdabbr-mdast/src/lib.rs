//! mdast-style syntax tree for documents parsed by `mdabbr-parser`.
//!
//! The CST is lowered with [`compile`], abbreviation references are resolved
//! with [`resolve_abbreviations`], and the result can be written out again
//! with [`to_html`] or [`to_markdown`].

pub mod abbr;
pub mod ast;
pub mod compile;
pub mod position;
pub mod to_html;
pub mod to_markdown;
pub mod visit;

pub use abbr::{LabelTable, resolve_abbreviations, split_text};
pub use ast::{Node, NodeKind, remove_position};
pub use compile::{Capture, CompileContext, compile};
pub use position::{LineIndex, Point, Position};
pub use to_html::{DefinitionOutput, HtmlOptions, to_html};
pub use to_markdown::to_markdown;
pub use visit::{Splice, Visit, splice, visit};
