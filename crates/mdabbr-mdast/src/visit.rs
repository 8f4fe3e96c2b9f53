//! Depth-first tree walking.

use crate::ast::{Node, NodeKind};

/// What [`visit`] should do after a node was visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    Continue,
    /// Do not descend into this node's children.
    Skip,
}

/// Visit `tree` and all of its descendants in preorder.
///
/// The visitor receives the node, its index in the parent and the parent;
/// both are `None` for `tree` itself.
pub fn visit<F>(tree: &Node, mut visitor: F)
where
    F: FnMut(&Node, Option<usize>, Option<&Node>) -> Visit,
{
    fn walk<F>(node: &Node, index: Option<usize>, parent: Option<&Node>, visitor: &mut F)
    where
        F: FnMut(&Node, Option<usize>, Option<&Node>) -> Visit,
    {
        if visitor(node, index, parent) == Visit::Skip {
            return;
        }
        if let Some(children) = node.children() {
            for (i, child) in children.iter().enumerate() {
                walk(child, Some(i), Some(node), visitor);
            }
        }
    }

    walk(tree, None, None, &mut visitor);
}

/// What [`splice`] should do with a child node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Splice {
    /// Keep the node and descend into it.
    Continue(Node),
    /// Keep the node as is.
    Skip(Node),
    /// Put these nodes in its place. They are not visited.
    Replace(Vec<Node>),
}

/// Rewrite the descendants of `tree`.
///
/// The rewriter receives each node by value with its index in the original
/// child list and the kind of its parent. Every child list is rebuilt and
/// assigned back in one go.
pub fn splice<F>(tree: &mut Node, mut rewriter: F)
where
    F: FnMut(Node, usize, NodeKind) -> Splice,
{
    fn rebuild<F>(parent: &mut Node, rewriter: &mut F)
    where
        F: FnMut(Node, usize, NodeKind) -> Splice,
    {
        let parent_kind = parent.kind();
        let Some(children) = parent.children_mut() else {
            return;
        };

        let old = std::mem::take(children);
        let mut rebuilt = Vec::with_capacity(old.len());
        for (index, child) in old.into_iter().enumerate() {
            match rewriter(child, index, parent_kind) {
                Splice::Continue(mut node) => {
                    rebuild(&mut node, rewriter);
                    rebuilt.push(node);
                }
                Splice::Skip(node) => rebuilt.push(node),
                Splice::Replace(nodes) => rebuilt.extend(nodes),
            }
        }
        *children = rebuilt;
    }

    rebuild(tree, &mut rewriter);
}
