//! Abbreviation reference resolution.
//!
//! Once the tree is built, every text node outside of definitions is split at
//! word-bounded occurrences of defined labels:
//!
//! ```text
//! Text "I like to use HTML because it is cool"
//! ```
//!
//! becomes
//!
//! ```text
//! Text "I like to use "
//! AbbrReference label="HTML" title="Hyper Text Markup Language"
//!   Text "HTML"
//! Text " because it is cool"
//! ```
//!
//! Only the first occurrence of each label within one text node is
//! considered. Candidates are emitted in start order, longer labels first
//! when two start at the same place; overlapping candidates are emitted as
//! they are, so their text shows up twice.

use std::collections::HashMap;

use crate::ast::{Node, NodeKind};
use crate::position::Position;
use crate::visit::{Splice, splice};

/// Label to title lookup for one document. The last definition of a label wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelTable {
    /// In order of first definition.
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl LabelTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect the definitions that are direct children of `root`.
    pub fn collect(root: &Node) -> Self {
        let mut table = Self::new();
        for child in root.children().into_iter().flatten() {
            if let Node::AbbrDefinition { label, title, .. } = child {
                table.insert(label.clone(), title.clone());
            }
        }
        table
    }

    pub fn insert(&mut self, label: String, title: String) {
        match self.index.get(&label) {
            Some(&i) => self.entries[i].1 = title,
            None => {
                self.index.insert(label.clone(), self.entries.len());
                self.entries.push((label, title));
            }
        }
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.index
            .get(label)
            .map(|&i| self.entries[i].1.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(label, title)| (label.as_str(), title.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Characters that make up a word for boundary checks.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Candidate<'t> {
    start: usize,
    end: usize,
    title: &'t str,
}

/// The first word-bounded occurrence of every label, in emission order.
fn find_candidates<'t>(value: &str, table: &'t LabelTable) -> Vec<Candidate<'t>> {
    let mut candidates: Vec<Candidate<'t>> = table
        .iter()
        .filter(|(label, _)| !label.is_empty())
        .filter_map(|(label, title)| {
            let start = value.find(label)?;
            let end = start + label.len();
            let before = value[..start].chars().next_back();
            let after = value[end..].chars().next();
            let bounded = !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char);
            bounded.then_some(Candidate { start, end, title })
        })
        .collect();

    candidates.sort_by(|a, b| a.start.cmp(&b.start).then(b.end.cmp(&a.end)));
    candidates
}

/// Split one text value at label occurrences.
///
/// Returns `None` when nothing matched and the text node should stay as it
/// is. Positions of the new nodes are offsets from `position.start` on the
/// same line; the last piece keeps the original end.
pub fn split_text(
    value: &str,
    position: Option<&Position>,
    table: &LabelTable,
) -> Option<Vec<Node>> {
    let candidates = find_candidates(value, table);
    if candidates.is_empty() {
        return None;
    }

    let char_offset = |byte: usize| value[..byte].chars().count();
    let span = |from: usize, to: usize| {
        position.map(|p| {
            Position::new(
                p.start.shifted(char_offset(from)),
                p.start.shifted(char_offset(to)),
            )
        })
    };

    let mut nodes = Vec::with_capacity(candidates.len() * 2 + 1);
    let mut cursor = 0;
    for candidate in &candidates {
        if candidate.start > cursor {
            nodes.push(Node::Text {
                value: value[cursor..candidate.start].to_string(),
                position: span(cursor, candidate.start),
            });
        }

        let label = &value[candidate.start..candidate.end];
        let position = span(candidate.start, candidate.end);
        nodes.push(Node::AbbrReference {
            label: label.to_string(),
            title: candidate.title.to_string(),
            children: vec![Node::Text {
                value: label.to_string(),
                position,
            }],
            position,
        });
        cursor = candidate.end;
    }

    if cursor < value.len() {
        let position = position.map(|p| Position::new(p.start.shifted(char_offset(cursor)), p.end));
        nodes.push(Node::Text {
            value: value[cursor..].to_string(),
            position,
        });
    }

    Some(nodes)
}

/// Replace label occurrences in text nodes with abbreviation references.
///
/// Definitions are collected from the direct children of `root` first, so
/// every reference uses the final title of its label no matter where it
/// appears. Returns the number of references created.
///
/// The table is rebuilt from the tree rather than taken from the parser's
/// `AbbrRegistry`: the tree may have been edited or built by hand since
/// parsing, and only the definitions still in it should count. Both apply
/// the same last-wins rule, so on a freshly compiled tree they agree.
///
/// Each label is matched once per text node, so a text node that repeats a
/// label keeps its later occurrences until the next call.
pub fn resolve_abbreviations(root: &mut Node) -> usize {
    let table = LabelTable::collect(root);
    if table.is_empty() {
        return 0;
    }
    log::debug!("Resolving {} abbreviation label(s)", table.len());

    let mut created = 0;
    splice(root, |node, _, parent| {
        if matches!(node, Node::AbbrDefinition { .. }) {
            return Splice::Skip(node);
        }
        if parent != NodeKind::AbbrReference
            && let Node::Text { value, position } = &node
            && let Some(nodes) = split_text(value, position.as_ref(), &table)
        {
            created += nodes
                .iter()
                .filter(|n| n.kind() == NodeKind::AbbrReference)
                .count();
            return Splice::Replace(nodes);
        }
        Splice::Continue(node)
    });

    log::debug!("Created {} abbreviation reference(s)", created);
    created
}
