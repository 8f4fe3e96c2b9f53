use crate::options::Extensions;
use crate::syntax::{SyntaxKind, SyntaxNode};
use rowan::{GreenNode, GreenNodeBuilder};

mod code_spans;
mod emphasis;
mod escapes;

use code_spans::{emit_code_span, try_parse_code_span};
use emphasis::{delimiter_run_len, emit_emphasis, try_parse_emphasis};
use escapes::{emit_escape, try_parse_escape};

/// Second pass: rebuilds the block tree with paragraph and heading content
/// expanded into inline nodes.
pub struct InlineParser {
    root: SyntaxNode,
    extensions: Extensions,
}

impl InlineParser {
    pub fn new(root: SyntaxNode, extensions: Extensions) -> Self {
        Self { root, extensions }
    }

    pub fn parse(self) -> SyntaxNode {
        let green = self.parse_node(&self.root);
        SyntaxNode::new_root(green)
    }

    fn parse_node(&self, node: &SyntaxNode) -> GreenNode {
        let mut builder = GreenNodeBuilder::new();
        self.copy_node_to_builder(&mut builder, node);
        builder.finish()
    }

    /// Copy a node and its children to the builder, expanding inline content.
    fn copy_node_to_builder(&self, builder: &mut GreenNodeBuilder<'static>, node: &SyntaxNode) {
        builder.start_node(node.kind().into());

        if node.kind().is_inline_container() {
            // Paragraph lines are separate TEXT/NEWLINE tokens; inline constructs
            // can span them, so parse the joined text.
            let text: String = node
                .children_with_tokens()
                .filter_map(|child| child.into_token())
                .map(|token| token.text().to_string())
                .collect();
            log::trace!("Inline content of {:?}: {:?}", node.kind(), text);
            parse_inline_text(builder, &text, &self.extensions);
        } else {
            for child in node.children_with_tokens() {
                match child {
                    rowan::NodeOrToken::Node(n) => self.copy_node_to_builder(builder, &n),
                    rowan::NodeOrToken::Token(t) => builder.token(t.kind().into(), t.text()),
                }
            }
        }

        builder.finish_node();
    }
}

/// Parse inline elements of `text` into `builder`.
pub(crate) fn parse_inline_text(
    builder: &mut GreenNodeBuilder<'static>,
    text: &str,
    extensions: &Extensions,
) {
    let mut pos = 0;
    let mut plain_start = 0;

    while pos < text.len() {
        let rest = &text[pos..];

        if extensions.backslash_escapes
            && rest.starts_with('\\')
            && let Some((len, ch)) = try_parse_escape(rest)
        {
            emit_plain(builder, &text[plain_start..pos]);
            emit_escape(builder, ch);
            pos += len;
            plain_start = pos;
            continue;
        }

        if rest.starts_with('`') {
            if let Some((len, content, backticks)) = try_parse_code_span(rest) {
                emit_plain(builder, &text[plain_start..pos]);
                emit_code_span(builder, content, backticks);
                pos += len;
                plain_start = pos;
            } else {
                // An unmatched run is literal, all of it.
                pos += delimiter_run_len(text, pos, '`');
            }
            continue;
        }

        if rest.starts_with(['*', '_']) {
            if let Some(found) = try_parse_emphasis(text, pos, extensions) {
                emit_plain(builder, &text[plain_start..pos]);
                emit_emphasis(builder, &text[pos..pos + found.len], found, extensions);
                pos += found.len;
                plain_start = pos;
            } else {
                let ch = if rest.starts_with('*') { '*' } else { '_' };
                pos += delimiter_run_len(text, pos, ch);
            }
            continue;
        }

        pos += rest.chars().next().map_or(1, char::len_utf8);
    }

    emit_plain(builder, &text[plain_start..]);
}

/// Emit literal text, splitting off line endings and continuation indentation.
fn emit_plain(builder: &mut GreenNodeBuilder<'static>, text: &str) {
    let mut rest = text;
    let mut line_start = false;

    while !rest.is_empty() {
        if line_start {
            let indent = rest.len() - rest.trim_start_matches([' ', '\t']).len();
            if indent > 0 {
                builder.token(SyntaxKind::WHITESPACE.into(), &rest[..indent]);
                rest = &rest[indent..];
            }
            line_start = false;
            continue;
        }

        match rest.find('\n') {
            Some(i) => {
                let (line, newline_len) = if i > 0 && rest.as_bytes()[i - 1] == b'\r' {
                    (&rest[..i - 1], 2)
                } else {
                    (&rest[..i], 1)
                };
                if !line.is_empty() {
                    builder.token(SyntaxKind::TEXT.into(), line);
                }
                builder.token(
                    SyntaxKind::NEWLINE.into(),
                    &rest[line.len()..line.len() + newline_len],
                );
                rest = &rest[line.len() + newline_len..];
                line_start = true;
            }
            None => {
                builder.token(SyntaxKind::TEXT.into(), rest);
                rest = "";
            }
        }
    }
}
