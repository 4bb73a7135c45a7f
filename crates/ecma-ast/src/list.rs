//! Node list operations.
//!
//! A list is itself a node ([`NodeData::List`](crate::NodeData::List)), so
//! its elements' parent is the list and the list's parent is the node that
//! holds it. Indices stay dense: removal shifts later elements down.

use crate::arena::{NodeArena, union_span};
use crate::base::NodeIndex;
use crate::node::ListFamily;
use tracing::trace;

impl NodeArena {
    pub fn list_family(&self, list: NodeIndex) -> Option<ListFamily> {
        self.data(list)
            .and_then(|data| data.as_list())
            .map(|list| list.family)
    }

    /// Elements of `list`; empty when `list` is not a list.
    pub fn list_nodes(&self, list: NodeIndex) -> &[NodeIndex] {
        self.data(list)
            .and_then(|data| data.as_list())
            .map_or(&[], |list| list.nodes.as_slice())
    }

    pub fn list_len(&self, list: NodeIndex) -> usize {
        self.list_nodes(list).len()
    }

    /// Element at `position`, or [`NodeIndex::NONE`].
    pub fn list_get(&self, list: NodeIndex, position: usize) -> NodeIndex {
        self.list_nodes(list)
            .get(position)
            .copied()
            .unwrap_or(NodeIndex::NONE)
    }

    /// Append `node` to `list`.
    ///
    /// A list of the same family is inlined element by element (and left
    /// empty) instead of being nested. Returns `false` if `list` is not a
    /// list or `node` is absent.
    pub fn list_append(&mut self, list: NodeIndex, node: NodeIndex) -> bool {
        let len = self.list_len(list);
        self.list_insert(list, len, node)
    }

    /// Insert `node` at `position` (clamped to the length), shifting later
    /// elements up. Same-family lists are inlined in order.
    ///
    /// A node that encloses `list` is refused whole, leaving both trees
    /// untouched.
    pub fn list_insert(&mut self, list: NodeIndex, position: usize, node: NodeIndex) -> bool {
        let Some(family) = self.list_family(list) else {
            return false;
        };
        if node.is_none() || self.encloses(node, list) {
            return false;
        }
        if self.list_family(node) == Some(family) {
            let mut at = position;
            while self.list_len(node) > 0 {
                let element = self.list_remove_at(node, 0);
                if self.insert_element(list, at, element) {
                    at += 1;
                }
            }
            trace!(list = %list, from = %node, "inlined list");
            return true;
        }
        self.insert_element(list, position, node)
    }

    fn encloses(&self, node: NodeIndex, list: NodeIndex) -> bool {
        node == list || self.ancestors(list).any(|ancestor| ancestor == node)
    }

    fn insert_element(&mut self, list: NodeIndex, position: usize, node: NodeIndex) -> bool {
        if self.encloses(node, list) {
            return false;
        }
        let mut position = position;
        // Moving an element within the same list shifts its successors.
        if self.parent_of(node) == list {
            if let Some(current) = self.list_nodes(list).iter().position(|&n| n == node) {
                if current < position {
                    position -= 1;
                }
            }
        }
        self.adopt(list, node);

        let Some(elements) = self.get_mut(list).and_then(|n| n.data.as_list_mut()) else {
            return false;
        };
        let position = position.min(elements.nodes.len());
        elements.nodes.insert(position, node);
        let was_empty = elements.nodes.len() == 1;

        if was_empty {
            self.recompute_list_span(list);
        } else {
            let widened = match (self.span_of(list), self.span_of(node)) {
                (Some(list_span), Some(node_span)) => Some(union_span(list_span, node_span)),
                _ => None,
            };
            if let (Some(span), Some(n)) = (widened, self.get_mut(list)) {
                n.span = span;
            }
        }
        self.bubble_span(list);
        trace!(list = %list, node = %node, position, "inserted list element");
        true
    }

    /// Remove and return the element at `position`, clearing its parent
    /// pointer. Returns [`NodeIndex::NONE`] when out of range.
    pub fn list_remove_at(&mut self, list: NodeIndex, position: usize) -> NodeIndex {
        let Some(elements) = self.get_mut(list).and_then(|n| n.data.as_list_mut()) else {
            return NodeIndex::NONE;
        };
        if position >= elements.nodes.len() {
            return NodeIndex::NONE;
        }
        let removed = elements.nodes.remove(position);
        self.release(list, removed);
        self.recompute_list_span(list);
        trace!(list = %list, node = %removed, position, "removed list element");
        removed
    }

    /// Index assignment. An absent `node` removes the slot instead of
    /// leaving a hole. Returns `false` for an out-of-range position.
    pub fn list_set(&mut self, list: NodeIndex, position: usize, node: NodeIndex) -> bool {
        let old = self.list_get(list, position);
        if old.is_none() {
            return false;
        }
        if node.is_none() {
            self.list_remove_at(list, position);
            return true;
        }
        self.replace_child(list, old, node)
    }

    /// Reset `list`'s span to the union of its elements. An emptied list
    /// collapses to a zero-width span at its old start.
    pub(crate) fn recompute_list_span(&mut self, list: NodeIndex) {
        let Some(current) = self.span_of(list) else {
            return;
        };
        let token = current.token;
        let mut union: Option<ecma_scanner::TokenSpan> = None;
        for &element in self.list_nodes(list) {
            if let Some(span) = self.span_of(element) {
                union = Some(match union {
                    Some(acc) => union_span(&acc, span),
                    None => span.clone().with_token(token),
                });
            }
        }
        let span = union.unwrap_or_else(|| current.flatten_to_start());
        if let Some(node) = self.get_mut(list) {
            node.span = span;
        }
    }
}
