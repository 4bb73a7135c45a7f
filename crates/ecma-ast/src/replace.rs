//! Direct-child replacement.

use crate::arena::NodeArena;
use crate::base::NodeIndex;
use crate::node::NodeData;
use tracing::{debug, trace};

impl NodeArena {
    /// Replace the direct child `old` of `parent` with `new`.
    ///
    /// Only `parent`'s own slots are searched. On a match `old` is detached
    /// (its parent pointer is cleared if it still points here) and `new` is
    /// installed and reparented, first leaving whatever parent it had. An
    /// absent `new` empties a fixed slot, or removes the element outright
    /// when `parent` is a list.
    ///
    /// Returns `false`, changing nothing, when `old` is not a direct child
    /// of `parent` or when installing `new` would make it its own ancestor.
    pub fn replace_child(&mut self, parent: NodeIndex, old: NodeIndex, new: NodeIndex) -> bool {
        let Some(data) = self.data(parent) else {
            return false;
        };
        if data.slot_of(old).is_none() {
            return false;
        }
        if old == new {
            return true;
        }
        if new.is_some() {
            if new == parent || self.ancestors(parent).any(|ancestor| ancestor == new) {
                debug!(parent = %parent, new = %new, "refusing to install an ancestor as a child");
                return false;
            }
            self.adopt(parent, new);
        }

        // Adopting `new` may have pulled it out of this same list.
        let Some(slot) = self.data(parent).and_then(|data| data.slot_of(old)) else {
            return false;
        };
        let mut is_list = false;
        if let Some(node) = self.get_mut(parent) {
            match &mut node.data {
                NodeData::List(list) => {
                    is_list = true;
                    if new.is_none() {
                        list.nodes.remove(slot);
                    } else {
                        list.nodes[slot] = new;
                    }
                }
                data => {
                    if let Some(held) = data.fixed_slot_mut(slot) {
                        *held = new;
                    }
                }
            }
        }
        self.release(parent, old);
        if is_list {
            self.recompute_list_span(parent);
        }
        if new.is_some() {
            self.bubble_span(new);
        }
        trace!(parent = %parent, old = %old, new = %new, slot, "replaced child");
        true
    }

    /// Property-setter style mutation: install `new` in `slot` of `parent`,
    /// with the same reparenting rules as [`NodeArena::replace_child`].
    ///
    /// For lists this is index assignment, so an absent `new` removes the
    /// element. Returns `false` for an out-of-range slot.
    pub fn set_child(&mut self, parent: NodeIndex, slot: usize, new: NodeIndex) -> bool {
        let Some(data) = self.data(parent) else {
            return false;
        };
        if data.as_list().is_some() {
            return self.list_set(parent, slot, new);
        }
        if slot >= data.slot_count() {
            return false;
        }
        let old = data.slot(slot);
        if old.is_some() {
            return self.replace_child(parent, old, new);
        }
        if new.is_none() {
            return true;
        }
        if new == parent || self.ancestors(parent).any(|ancestor| ancestor == new) {
            return false;
        }
        self.adopt(parent, new);
        if let Some(held) = self
            .get_mut(parent)
            .and_then(|node| node.data.fixed_slot_mut(slot))
        {
            *held = new;
        }
        self.bubble_span(new);
        trace!(parent = %parent, new = %new, slot, "filled empty slot");
        true
    }
}
