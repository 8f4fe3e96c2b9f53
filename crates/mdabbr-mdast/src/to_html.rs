//! HTML serialization.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::ast::Node;

/// How abbreviation definitions show up in HTML.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum DefinitionOutput {
    /// Leave them out.
    #[default]
    Suppress,
    /// Keep them as `<!-- *[label]: title -->` comments.
    Comment,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlOptions {
    pub definitions: DefinitionOutput,
}

/// Serialize `tree` to HTML. Block elements each end with a newline.
pub fn to_html(tree: &Node, options: &HtmlOptions) -> String {
    let mut out = String::new();
    write_node(&mut out, tree, options);
    out
}

fn write_children(out: &mut String, node: &Node, options: &HtmlOptions) {
    for child in node.children().into_iter().flatten() {
        write_node(out, child, options);
    }
}

fn write_node(out: &mut String, node: &Node, options: &HtmlOptions) {
    match node {
        Node::Root { .. } => write_children(out, node, options),
        Node::Paragraph { .. } => {
            out.push_str("<p>");
            write_children(out, node, options);
            out.push_str("</p>\n");
        }
        Node::Heading { depth, .. } => {
            out.push_str(&format!("<h{}>", depth));
            write_children(out, node, options);
            out.push_str(&format!("</h{}>\n", depth));
        }
        Node::ThematicBreak { .. } => out.push_str("<hr />\n"),
        Node::Code { lang, value, .. } => {
            match lang {
                Some(lang) => out.push_str(&format!(
                    "<pre><code class=\"language-{}\">",
                    escape_attribute(lang)
                )),
                None => out.push_str("<pre><code>"),
            }
            out.push_str(&escape_html(value));
            if !value.is_empty() {
                out.push('\n');
            }
            out.push_str("</code></pre>\n");
        }
        Node::Text { value, .. } => out.push_str(&escape_html(value)),
        Node::Emphasis { .. } => {
            out.push_str("<em>");
            write_children(out, node, options);
            out.push_str("</em>");
        }
        Node::Strong { .. } => {
            out.push_str("<strong>");
            write_children(out, node, options);
            out.push_str("</strong>");
        }
        Node::InlineCode { value, .. } => {
            out.push_str("<code>");
            out.push_str(&escape_html(value));
            out.push_str("</code>");
        }
        Node::AbbrReference { title, .. } => {
            out.push_str(&format!("<abbr title=\"{}\">", escape_attribute(title)));
            write_children(out, node, options);
            out.push_str("</abbr>");
        }
        Node::AbbrDefinition { label, title, .. } => match options.definitions {
            DefinitionOutput::Suppress => {}
            DefinitionOutput::Comment => {
                let text = comment_text(&format!("*[{}]: {}", label, title));
                out.push_str(&format!("<!-- {} -->\n", text));
            }
        },
    }
}

/// Break up every run of `-` so the text holds no `--`, which would let it
/// close the comment it is written into.
fn comment_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        out.push(c);
        if c == '-' && chars.peek() == Some(&'-') {
            out.push(' ');
        }
    }
    out
}

/// Escapes HTML special characters in text content.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// Escapes HTML special characters in attribute values.
pub fn escape_attribute(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            '\n' => escaped.push_str("&#10;"),
            '\r' => escaped.push_str("&#13;"),
            '\t' => escaped.push_str("&#9;"),
            c => escaped.push(c),
        }
    }
    escaped
}
