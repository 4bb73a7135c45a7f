//! Pre/post-order tree walking.
//!
//! For every node the walker calls `Visitor::walk` first. When that returns
//! `true` the node's present children are walked in source order; whatever
//! it returned, `Visitor::post_walk` is called afterwards. Skipping a
//! subtree therefore never unbalances bookkeeping done in matching
//! `walk`/`post_walk` pairs (a scope stack, a depth counter).

use crate::arena::NodeArena;
use crate::base::NodeIndex;

/// Read-only tree visitor.
pub trait Visitor {
    /// Pre-order hook; return `false` to skip `node`'s children.
    fn walk(&mut self, _arena: &NodeArena, _node: NodeIndex) -> bool {
        true
    }

    /// Post-order hook, called even when `walk` returned `false`.
    fn post_walk(&mut self, _arena: &NodeArena, _node: NodeIndex) {}
}

/// Rewriting visitor. Hooks receive the arena mutably, so a pass may
/// replace or remove nodes (typically children of the node it is visiting)
/// as it goes.
pub trait VisitorMut {
    fn walk(&mut self, _arena: &mut NodeArena, _node: NodeIndex) -> bool {
        true
    }

    fn post_walk(&mut self, _arena: &mut NodeArena, _node: NodeIndex) {}
}

impl NodeArena {
    /// Walk the subtree rooted at `root`. Absent or unknown roots visit
    /// nothing.
    pub fn walk<V: Visitor + ?Sized>(&self, root: NodeIndex, visitor: &mut V) {
        if self.get(root).is_none() {
            return;
        }
        if visitor.walk(self, root) {
            for child in self.children(root) {
                self.walk(child, visitor);
            }
        }
        visitor.post_walk(self, root);
    }

    /// Walk the subtree rooted at `root`, letting the visitor mutate the
    /// tree.
    ///
    /// Slots are re-read one at a time, so children installed by the
    /// pre-visit are the ones descended into. A list element that removes
    /// itself during its own walk does not cause its successor to be
    /// skipped.
    pub fn walk_mut<V: VisitorMut + ?Sized>(&mut self, root: NodeIndex, visitor: &mut V) {
        if self.get(root).is_none() {
            return;
        }
        if visitor.walk(self, root) {
            let mut slot = 0;
            while let Some(data) = self.data(root) {
                let count = data.slot_count();
                if slot >= count {
                    break;
                }
                let child = data.slot(slot);
                if child.is_some() {
                    self.walk_mut(child, visitor);
                }
                let still_here = self
                    .data(root)
                    .is_some_and(|data| data.slot(slot) == child);
                let shrank = self.data(root).map_or(0, |data| data.slot_count()) < count;
                if still_here || !shrank {
                    slot += 1;
                }
            }
        }
        visitor.post_walk(self, root);
    }
}
