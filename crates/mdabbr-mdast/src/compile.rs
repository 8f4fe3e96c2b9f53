//! Lowering of the parser's CST into [`Node`]s.
//!
//! [`CompileContext`] is a stack machine: `enter` opens a node, `exit` closes
//! it and appends it to its parent. Raw text can be captured instead of
//! turned into nodes with `buffer`/`resume`, which the abbreviation
//! definition uses for its label and title.

use std::ops::Range;

use mdabbr_parser::syntax::{AstNode, CodeBlock, Heading};
use mdabbr_parser::{SyntaxKind, SyntaxNode};
use rowan::{NodeOrToken, WalkEvent};

use crate::ast::{Node, NodeKind};
use crate::position::{LineIndex, Position};

/// Handle of an open text capture.
///
/// Returned by [`CompileContext::buffer`] and consumed by
/// [`CompileContext::resume`]; it can neither be copied nor reused.
#[must_use = "every capture must be resumed"]
#[derive(Debug)]
pub struct Capture {
    depth: usize,
}

pub struct CompileContext<'a> {
    index: &'a LineIndex<'a>,
    stack: Vec<Node>,
    buffers: Vec<String>,
}

impl<'a> CompileContext<'a> {
    pub fn new(index: &'a LineIndex<'a>) -> Self {
        Self {
            index,
            stack: vec![Node::root(Vec::new())],
            buffers: Vec::new(),
        }
    }

    /// Open `node` at byte `offset`.
    pub fn enter(&mut self, mut node: Node, offset: usize) {
        node.set_position(Some(self.index.position(offset, offset)));
        self.stack.push(node);
    }

    /// Close the innermost open node at byte `offset`.
    pub fn exit(&mut self, offset: usize) {
        assert!(self.stack.len() > 1, "exit without a matching enter");
        let end = self.index.point(offset);
        if let Some(mut node) = self.stack.pop() {
            if let Some(start) = node.position().map(|p| p.start) {
                node.set_position(Some(Position::new(start, end)));
            }
            self.append(node);
        }
    }

    /// Start capturing text instead of emitting it.
    pub fn buffer(&mut self) -> Capture {
        self.buffers.push(String::new());
        Capture {
            depth: self.buffers.len(),
        }
    }

    /// Stop the innermost capture and return what it collected.
    pub fn resume(&mut self, capture: Capture) -> String {
        assert_eq!(
            capture.depth,
            self.buffers.len(),
            "captures must be resumed innermost first"
        );
        self.buffers.pop().unwrap_or_default()
    }

    /// Add literal text covering `range` of the source.
    ///
    /// Goes into the open capture if there is one. Otherwise it extends the
    /// current node's last child when that is a text node, or starts a new one.
    pub fn data(&mut self, text: &str, range: Range<usize>) {
        if let Some(buffer) = self.buffers.last_mut() {
            buffer.push_str(text);
            return;
        }

        let end = self.index.point(range.end);
        if let Some(children) = self.current_mut().children_mut()
            && let Some(Node::Text { value, position }) = children.last_mut()
        {
            value.push_str(text);
            if let Some(position) = position {
                position.end = end;
            }
            return;
        }

        let node = Node::Text {
            value: text.to_string(),
            position: Some(self.index.position(range.start, range.end)),
        };
        self.append(node);
    }

    /// Append a finished node covering `range`.
    pub fn leaf(&mut self, mut node: Node, range: Range<usize>) {
        node.set_position(Some(self.index.position(range.start, range.end)));
        self.append(node);
    }

    /// Open nodes, outermost first.
    pub fn stack(&self) -> &[Node] {
        &self.stack
    }

    pub fn stack_mut(&mut self) -> &mut [Node] {
        &mut self.stack
    }

    pub fn current_mut(&mut self) -> &mut Node {
        let last = self.stack.len() - 1;
        &mut self.stack[last]
    }

    /// Close the root, which spans up to byte `end`.
    pub fn finish(mut self, end: usize) -> Node {
        assert_eq!(self.stack.len(), 1, "unclosed nodes at the end of the document");
        assert!(self.buffers.is_empty(), "unresumed capture at the end of the document");
        let mut root = self.stack.remove(0);
        root.set_position(Some(self.index.position(0, end)));
        root
    }

    fn append(&mut self, node: Node) {
        match self.current_mut().children_mut() {
            Some(children) => children.push(node),
            None => panic!("cannot append {:?} to a leaf node", node.kind()),
        }
    }
}

/// Lower a CST produced by `mdabbr_parser::parse` into an mdast tree.
///
/// Abbreviation references are not resolved here; see
/// [`crate::abbr::resolve_abbreviations`].
pub fn compile(tree: &SyntaxNode) -> Node {
    let text = tree.text().to_string();
    let index = LineIndex::new(&text);
    let mut context = CompileContext::new(&index);
    let mut capture = None;

    let mut preorder = tree.preorder_with_tokens();
    while let Some(event) = preorder.next() {
        match event {
            WalkEvent::Enter(NodeOrToken::Node(node)) => {
                let range = byte_range(&node);
                match node.kind() {
                    SyntaxKind::PARAGRAPH => context.enter(Node::paragraph(Vec::new()), range.start),
                    SyntaxKind::HEADING => {
                        let depth = Heading::cast(node.clone()).map_or(1, |h| h.level());
                        let heading = Node::Heading {
                            depth: depth as u8,
                            children: Vec::new(),
                            position: None,
                        };
                        context.enter(heading, range.start);
                    }
                    SyntaxKind::EMPHASIS => context.enter(
                        Node::Emphasis {
                            children: Vec::new(),
                            position: None,
                        },
                        range.start,
                    ),
                    SyntaxKind::STRONG => context.enter(
                        Node::Strong {
                            children: Vec::new(),
                            position: None,
                        },
                        range.start,
                    ),
                    SyntaxKind::ABBR_DEFINITION => {
                        context.enter(Node::abbr_definition("", ""), range.start)
                    }
                    SyntaxKind::ABBR_DEFINITION_STRING | SyntaxKind::ABBR_DEFINITION_VALUE => {
                        assert!(capture.is_none(), "nested abbreviation capture");
                        capture = Some(context.buffer());
                    }
                    SyntaxKind::HORIZONTAL_RULE => {
                        context.leaf(Node::ThematicBreak { position: None }, range);
                        preorder.skip_subtree();
                    }
                    SyntaxKind::CODE_BLOCK => {
                        context.leaf(code_block(&node), range);
                        preorder.skip_subtree();
                    }
                    SyntaxKind::CODE_SPAN => {
                        let value = inline_code_value(&node);
                        context.leaf(
                            Node::InlineCode {
                                value,
                                position: None,
                            },
                            range,
                        );
                        preorder.skip_subtree();
                    }
                    SyntaxKind::BLANK_LINE_NODE => preorder.skip_subtree(),
                    _ => {}
                }
            }
            WalkEvent::Leave(NodeOrToken::Node(node)) => {
                let range = byte_range(&node);
                match node.kind() {
                    SyntaxKind::PARAGRAPH
                    | SyntaxKind::HEADING
                    | SyntaxKind::EMPHASIS
                    | SyntaxKind::STRONG
                    | SyntaxKind::ABBR_DEFINITION => context.exit(range.end),
                    SyntaxKind::ABBR_DEFINITION_STRING => {
                        let label = resume(&mut context, &mut capture);
                        set_definition_label(&mut context, label);
                    }
                    SyntaxKind::ABBR_DEFINITION_VALUE => {
                        let title = resume(&mut context, &mut capture);
                        set_definition_title(&mut context, title);
                    }
                    _ => {}
                }
            }
            WalkEvent::Enter(NodeOrToken::Token(token)) => {
                let range = usize::from(token.text_range().start())..usize::from(token.text_range().end());
                match token.kind() {
                    SyntaxKind::TEXT => context.data(token.text(), range),
                    SyntaxKind::ESCAPED_CHAR => context.data(&token.text()[1..], range),
                    SyntaxKind::NEWLINE
                        if token.parent().is_some_and(|parent| is_inline_parent(parent.kind())) =>
                    {
                        context.data(token.text(), range)
                    }
                    _ => {}
                }
            }
            WalkEvent::Leave(NodeOrToken::Token(_)) => {}
        }
    }

    let root = context.finish(text.len());
    log::debug!(
        "Compiled {} top-level node(s)",
        root.children().map_or(0, Vec::len)
    );
    root
}

fn byte_range(node: &SyntaxNode) -> Range<usize> {
    let range = node.text_range();
    usize::from(range.start())..usize::from(range.end())
}

fn is_inline_parent(kind: SyntaxKind) -> bool {
    kind.is_inline_container() || matches!(kind, SyntaxKind::EMPHASIS | SyntaxKind::STRONG)
}

fn resume(context: &mut CompileContext<'_>, capture: &mut Option<Capture>) -> String {
    match capture.take() {
        Some(capture) => context.resume(capture),
        None => panic!("abbreviation text finished without a capture"),
    }
}

fn set_definition_label(context: &mut CompileContext<'_>, label: String) {
    match context.stack_mut().last_mut() {
        Some(Node::AbbrDefinition { label: slot, .. }) => *slot = label,
        other => panic!(
            "abbreviation label outside of a definition: {:?}",
            other.map(|n| n.kind())
        ),
    }
}

fn set_definition_title(context: &mut CompileContext<'_>, title: String) {
    let definition = context
        .stack_mut()
        .iter_mut()
        .rev()
        .find(|node| node.kind() == NodeKind::AbbrDefinition);
    match definition {
        Some(Node::AbbrDefinition { title: slot, .. }) => *slot = title,
        _ => panic!("abbreviation value finished without a definition on the stack"),
    }
}

fn code_block(node: &SyntaxNode) -> Node {
    let (lang, content) = match CodeBlock::cast(node.clone()) {
        Some(block) => (block.language(), block.content()),
        None => (None, String::new()),
    };
    let value = content
        .strip_suffix("\r\n")
        .or_else(|| content.strip_suffix('\n'))
        .unwrap_or(&content)
        .to_string();
    Node::Code {
        lang,
        value,
        position: None,
    }
}

/// Code span content with line endings turned into spaces and one space
/// stripped from both sides when it pads non-space content.
fn inline_code_value(node: &SyntaxNode) -> String {
    let raw: String = node
        .children_with_tokens()
        .filter_map(|it| it.into_token())
        .filter(|it| it.kind() == SyntaxKind::TEXT)
        .map(|it| it.text().to_string())
        .collect();
    let value = raw.replace("\r\n", " ").replace('\n', " ");
    if value.len() >= 2
        && value.starts_with(' ')
        && value.ends_with(' ')
        && !value.chars().all(|c| c == ' ')
    {
        value[1..value.len() - 1].to_string()
    } else {
        value
    }
}
