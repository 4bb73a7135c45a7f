//! Node arena for AST storage.

use crate::base::NodeIndex;
use crate::node::{Children, Node, NodeData};
use ecma_common::limits::MAX_PARENT_WALK_ITERATIONS;
use ecma_scanner::TokenSpan;
use serde::Serialize;

/// Arena-based storage for the nodes of one tree.
///
/// The arena owns every node; ownership between nodes is expressed only by
/// child slots, and each node's `parent` is a back-reference to the single
/// slot holder. Nodes are never freed individually: a detached subtree
/// simply becomes unreachable from the root.
#[derive(Debug, Default, Serialize)]
pub struct NodeArena {
    pub nodes: Vec<Node>,
}

impl NodeArena {
    pub fn new() -> NodeArena {
        NodeArena { nodes: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> NodeArena {
        NodeArena {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Add a detached node and return its index. Children named in `data`
    /// are not reparented; use the `add_*` constructors for that.
    pub fn add(&mut self, node: Node) -> NodeIndex {
        let index = self.nodes.len() as u32;
        self.nodes.push(node);
        NodeIndex(index)
    }

    pub fn get(&self, index: NodeIndex) -> Option<&Node> {
        if index.is_none() {
            None
        } else {
            self.nodes.get(index.0 as usize)
        }
    }

    pub fn get_mut(&mut self, index: NodeIndex) -> Option<&mut Node> {
        if index.is_none() {
            None
        } else {
            self.nodes.get_mut(index.0 as usize)
        }
    }

    pub fn data(&self, index: NodeIndex) -> Option<&NodeData> {
        self.get(index).map(|node| &node.data)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Parent of `index`, or [`NodeIndex::NONE`].
    pub fn parent_of(&self, index: NodeIndex) -> NodeIndex {
        self.get(index).map_or(NodeIndex::NONE, |node| node.parent)
    }

    pub fn span_of(&self, index: NodeIndex) -> Option<&TokenSpan> {
        self.get(index).map(|node| &node.span)
    }

    /// Present direct children of `index` in source order.
    pub fn children(&self, index: NodeIndex) -> Children<'_> {
        Children::new(self.data(index))
    }

    /// Ancestors of `index`, nearest first, bounded so that a corrupted
    /// parent chain cannot loop forever.
    pub fn ancestors(&self, index: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        let mut current = self.parent_of(index);
        (0..MAX_PARENT_WALK_ITERATIONS).map_while(move |_| {
            let found = current.to_option()?;
            current = self.parent_of(found);
            Some(found)
        })
    }

    // =========================================================================
    // Reparenting
    // =========================================================================

    /// Make `parent` the parent of `child`.
    ///
    /// A child still installed under another node is first removed from that
    /// node's slot, so no node is ever held by two parents.
    pub(crate) fn adopt(&mut self, parent: NodeIndex, child: NodeIndex) {
        let previous = self.parent_of(child);
        if previous.is_some() {
            self.replace_child(previous, child, NodeIndex::NONE);
        }
        if let Some(node) = self.get_mut(child) {
            node.parent = parent;
        }
    }

    /// Clear `child`'s parent pointer if it still points at `parent`.
    pub(crate) fn release(&mut self, parent: NodeIndex, child: NodeIndex) {
        if let Some(node) = self.get_mut(child) {
            if node.parent == parent {
                node.parent = NodeIndex::NONE;
            }
        }
    }

    /// Widen `index`'s ancestors until each covers its child's span.
    pub(crate) fn bubble_span(&mut self, index: NodeIndex) {
        let mut child = index;
        for _ in 0..MAX_PARENT_WALK_ITERATIONS {
            let parent = self.parent_of(child);
            let (Some(child_span), Some(parent_span)) = (self.span_of(child), self.span_of(parent))
            else {
                return;
            };
            if child_span.is_empty() && child_span.resolver().is_none() {
                return;
            }
            if parent_span.start <= child_span.start && child_span.end <= parent_span.end {
                return;
            }
            let widened = union_span(parent_span, child_span);
            if let Some(node) = self.get_mut(parent) {
                node.span = widened;
            }
            child = parent;
        }
    }
}

/// Union of two spans, keeping `base`'s token kind. A detached zero-width
/// span (the placeholder of a node built without source) contributes
/// nothing.
pub(crate) fn union_span(base: &TokenSpan, other: &TokenSpan) -> TokenSpan {
    let is_placeholder = |span: &TokenSpan| span.is_empty() && span.resolver().is_none();
    if is_placeholder(other) {
        return base.clone();
    }
    if is_placeholder(base) {
        return other.clone().with_token(base.token);
    }
    TokenSpan::combine(base, other)
}
