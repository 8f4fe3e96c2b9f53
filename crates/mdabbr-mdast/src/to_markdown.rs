//! Markdown serialization.
//!
//! References are written back as their bare label and definitions as
//! `*[label]: title` lines, so parsing the output again yields the same
//! definitions and references.

use crate::ast::{Node, NodeKind};

/// Serialize `tree` to Markdown. Blocks are separated by one blank line,
/// except runs of definitions, which stay on consecutive lines.
pub fn to_markdown(tree: &Node) -> String {
    let mut out = String::new();
    match tree {
        Node::Root { children, .. } => write_blocks(&mut out, children),
        other => out.push_str(&block(other)),
    }
    if !out.is_empty() {
        out.push('\n');
    }
    out
}

fn write_blocks(out: &mut String, children: &[Node]) {
    let mut previous: Option<NodeKind> = None;
    for child in children {
        let kind = child.kind();
        match previous {
            None => {}
            Some(NodeKind::AbbrDefinition) if kind == NodeKind::AbbrDefinition => out.push('\n'),
            Some(_) => out.push_str("\n\n"),
        }
        out.push_str(&block(child));
        previous = Some(kind);
    }
}

fn block(node: &Node) -> String {
    match node {
        Node::Paragraph { children, .. } => inline_children(children),
        Node::Heading {
            depth, children, ..
        } => {
            let content = inline_children(children);
            if content.is_empty() {
                "#".repeat(*depth as usize)
            } else {
                format!("{} {}", "#".repeat(*depth as usize), content)
            }
        }
        Node::ThematicBreak { .. } => "***".to_string(),
        Node::Code { lang, value, .. } => {
            let fence = "`".repeat(longest_run(value, '`').max(2) + 1);
            let lang = lang.as_deref().unwrap_or("");
            if value.is_empty() {
                format!("{fence}{lang}\n{fence}")
            } else {
                format!("{fence}{lang}\n{value}\n{fence}")
            }
        }
        Node::AbbrDefinition { label, title, .. } if title.is_empty() => format!("*[{}]:", label),
        Node::AbbrDefinition { label, title, .. } => format!("*[{}]: {}", label, title),
        Node::Root { children, .. } => {
            let mut out = String::new();
            write_blocks(&mut out, children);
            out
        }
        inline_node => inline_children(std::slice::from_ref(inline_node)),
    }
}

/// Serialize a run of inline nodes, escaping text so it stays literal.
fn inline_children(children: &[Node]) -> String {
    let mut out = String::new();
    for child in children {
        write_inline(&mut out, child);
    }
    out
}

fn write_inline(out: &mut String, node: &Node) {
    match node {
        Node::Text { value, .. } => escape_text(out, value),
        Node::Emphasis { children, .. } => {
            out.push('*');
            children.iter().for_each(|child| write_inline(out, child));
            out.push('*');
        }
        Node::Strong { children, .. } => {
            out.push_str("**");
            children.iter().for_each(|child| write_inline(out, child));
            out.push_str("**");
        }
        Node::InlineCode { value, .. } => {
            let fence = "`".repeat(longest_run(value, '`') + 1);
            let pad = value.starts_with('`')
                || value.ends_with('`')
                || (value.starts_with(' ') && value.ends_with(' ') && !value.trim().is_empty());
            let pad = if pad { " " } else { "" };
            out.push_str(&format!("{fence}{pad}{value}{pad}{fence}"));
        }
        Node::AbbrReference { children, .. } => {
            children.iter().for_each(|child| write_inline(out, child));
        }
        other => {
            if let Some(children) = other.children() {
                children.iter().for_each(|child| write_inline(out, child));
            }
        }
    }
}

/// Backslash-escape characters that would otherwise start inline or block
/// syntax.
fn escape_text(out: &mut String, value: &str) {
    let mut line_start = out.is_empty() || out.ends_with('\n');
    for c in value.chars() {
        let escape = matches!(c, '\\' | '*' | '_' | '`')
            || (line_start && matches!(c, '#' | '-' | '~'));
        if escape {
            out.push('\\');
        }
        out.push(c);
        line_start = c == '\n';
    }
}

fn longest_run(text: &str, ch: char) -> usize {
    let mut longest = 0;
    let mut current = 0;
    for c in text.chars() {
        if c == ch {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }
    longest
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_definitions_and_references() {
        let tree = Node::root(vec![
            Node::paragraph(vec![
                Node::text("I like to use "),
                Node::abbr_reference("HTML", "Hyper Text Markup Language"),
                Node::text(" because it is cool"),
            ]),
            Node::abbr_definition("HTML", "Hyper Text Markup Language"),
        ]);
        assert_eq!(
            to_markdown(&tree),
            "I like to use HTML because it is cool\n\n*[HTML]: Hyper Text Markup Language\n"
        );
    }

    #[test]
    fn test_escaping() {
        let tree = Node::root(vec![Node::paragraph(vec![Node::text(
            "# not *a* heading\n- nor a list",
        )])]);
        assert_eq!(
            to_markdown(&tree),
            "\\# not \\*a\\* heading\n\\- nor a list\n"
        );
    }

    #[test]
    fn test_inline_nodes() {
        let tree = Node::root(vec![Node::paragraph(vec![
            Node::Emphasis {
                children: vec![Node::text("em")],
                position: None,
            },
            Node::text(" "),
            Node::Strong {
                children: vec![Node::text("strong")],
                position: None,
            },
            Node::text(" "),
            Node::InlineCode {
                value: "a`b".to_string(),
                position: None,
            },
        ])]);
        assert_eq!(to_markdown(&tree), "*em* **strong** ``a`b``\n");
    }

    #[test]
    fn test_blocks() {
        let tree = Node::root(vec![
            Node::Heading {
                depth: 3,
                children: vec![Node::text("Title")],
                position: None,
            },
            Node::ThematicBreak { position: None },
            Node::Code {
                lang: Some("rust".to_string()),
                value: "let s = \"```\";".to_string(),
                position: None,
            },
        ]);
        assert_eq!(
            to_markdown(&tree),
            "### Title\n\n***\n\n````rust\nlet s = \"```\";\n````\n"
        );
    }

    #[test]
    fn test_consecutive_definitions() {
        let tree = Node::root(vec![
            Node::paragraph(vec![Node::text("text")]),
            Node::abbr_definition("A", "alpha"),
            Node::abbr_definition("B", "beta"),
            Node::ThematicBreak { position: None },
            Node::abbr_definition("C", "gamma"),
        ]);
        assert_eq!(
            to_markdown(&tree),
            "text\n\n*[A]: alpha\n*[B]: beta\n\n***\n\n*[C]: gamma\n"
        );
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(to_markdown(&Node::root(Vec::new())), "");
    }
}
