//! The mdast-style syntax tree.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::position::Position;

/// A node of the syntax tree.
///
/// With the `serde` feature, nodes serialize the way mdast does: an object
/// tagged by `type`, with `position` left out when it is unknown.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "camelCase"))]
pub enum Node {
    Root {
        children: Vec<Node>,
        #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
        position: Option<Position>,
    },
    Paragraph {
        children: Vec<Node>,
        #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
        position: Option<Position>,
    },
    Heading {
        depth: u8,
        children: Vec<Node>,
        #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
        position: Option<Position>,
    },
    ThematicBreak {
        #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
        position: Option<Position>,
    },
    Code {
        lang: Option<String>,
        value: String,
        #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
        position: Option<Position>,
    },
    Text {
        value: String,
        #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
        position: Option<Position>,
    },
    Emphasis {
        children: Vec<Node>,
        #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
        position: Option<Position>,
    },
    Strong {
        children: Vec<Node>,
        #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
        position: Option<Position>,
    },
    InlineCode {
        value: String,
        #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
        position: Option<Position>,
    },
    /// `*[label]: title`, always a direct child of the root.
    AbbrDefinition {
        label: String,
        title: String,
        #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
        position: Option<Position>,
    },
    /// An occurrence of a defined label. Holds one text child with the label.
    #[cfg_attr(feature = "serde", serde(rename = "abbr"))]
    AbbrReference {
        label: String,
        title: String,
        children: Vec<Node>,
        #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
        position: Option<Position>,
    },
}

/// The variant of a [`Node`], without its data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Root,
    Paragraph,
    Heading,
    ThematicBreak,
    Code,
    Text,
    Emphasis,
    Strong,
    InlineCode,
    AbbrDefinition,
    AbbrReference,
}

impl Node {
    pub fn root(children: Vec<Node>) -> Self {
        Node::Root {
            children,
            position: None,
        }
    }

    pub fn paragraph(children: Vec<Node>) -> Self {
        Node::Paragraph {
            children,
            position: None,
        }
    }

    pub fn text(value: impl Into<String>) -> Self {
        Node::Text {
            value: value.into(),
            position: None,
        }
    }

    pub fn abbr_definition(label: impl Into<String>, title: impl Into<String>) -> Self {
        Node::AbbrDefinition {
            label: label.into(),
            title: title.into(),
            position: None,
        }
    }

    /// A reference whose only child is a text node with the label.
    pub fn abbr_reference(label: impl Into<String>, title: impl Into<String>) -> Self {
        let label = label.into();
        Node::AbbrReference {
            children: vec![Node::text(label.clone())],
            label,
            title: title.into(),
            position: None,
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Root { .. } => NodeKind::Root,
            Node::Paragraph { .. } => NodeKind::Paragraph,
            Node::Heading { .. } => NodeKind::Heading,
            Node::ThematicBreak { .. } => NodeKind::ThematicBreak,
            Node::Code { .. } => NodeKind::Code,
            Node::Text { .. } => NodeKind::Text,
            Node::Emphasis { .. } => NodeKind::Emphasis,
            Node::Strong { .. } => NodeKind::Strong,
            Node::InlineCode { .. } => NodeKind::InlineCode,
            Node::AbbrDefinition { .. } => NodeKind::AbbrDefinition,
            Node::AbbrReference { .. } => NodeKind::AbbrReference,
        }
    }

    /// Child nodes, or `None` for leaves.
    pub fn children(&self) -> Option<&Vec<Node>> {
        match self {
            Node::Root { children, .. }
            | Node::Paragraph { children, .. }
            | Node::Heading { children, .. }
            | Node::Emphasis { children, .. }
            | Node::Strong { children, .. }
            | Node::AbbrReference { children, .. } => Some(children),
            Node::ThematicBreak { .. }
            | Node::Code { .. }
            | Node::Text { .. }
            | Node::InlineCode { .. }
            | Node::AbbrDefinition { .. } => None,
        }
    }

    pub fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Node::Root { children, .. }
            | Node::Paragraph { children, .. }
            | Node::Heading { children, .. }
            | Node::Emphasis { children, .. }
            | Node::Strong { children, .. }
            | Node::AbbrReference { children, .. } => Some(children),
            Node::ThematicBreak { .. }
            | Node::Code { .. }
            | Node::Text { .. }
            | Node::InlineCode { .. }
            | Node::AbbrDefinition { .. } => None,
        }
    }

    pub fn position(&self) -> Option<&Position> {
        self.position_slot().as_ref()
    }

    pub fn set_position(&mut self, position: Option<Position>) {
        *self.position_slot_mut() = position;
    }

    fn position_slot(&self) -> &Option<Position> {
        match self {
            Node::Root { position, .. }
            | Node::Paragraph { position, .. }
            | Node::Heading { position, .. }
            | Node::ThematicBreak { position }
            | Node::Code { position, .. }
            | Node::Text { position, .. }
            | Node::Emphasis { position, .. }
            | Node::Strong { position, .. }
            | Node::InlineCode { position, .. }
            | Node::AbbrDefinition { position, .. }
            | Node::AbbrReference { position, .. } => position,
        }
    }

    fn position_slot_mut(&mut self) -> &mut Option<Position> {
        match self {
            Node::Root { position, .. }
            | Node::Paragraph { position, .. }
            | Node::Heading { position, .. }
            | Node::ThematicBreak { position }
            | Node::Code { position, .. }
            | Node::Text { position, .. }
            | Node::Emphasis { position, .. }
            | Node::Strong { position, .. }
            | Node::InlineCode { position, .. }
            | Node::AbbrDefinition { position, .. }
            | Node::AbbrReference { position, .. } => position,
        }
    }

    /// Concatenated text of the node and its descendants.
    pub fn to_plain_text(&self) -> String {
        match self {
            Node::Text { value, .. } | Node::InlineCode { value, .. } | Node::Code { value, .. } => {
                value.clone()
            }
            Node::AbbrDefinition { .. } | Node::ThematicBreak { .. } => String::new(),
            _ => self
                .children()
                .map(|children| children.iter().map(Node::to_plain_text).collect())
                .unwrap_or_default(),
        }
    }
}

/// Strip positions from `node` and all of its descendants.
pub fn remove_position(node: &mut Node) {
    node.set_position(None);
    if let Some(children) = node.children_mut() {
        for child in children {
            remove_position(child);
        }
    }
}
