//! Generational slot arena backing the list.
//!
//! Nodes live in a `Vec` of slots instead of individual heap allocations.
//! Links between nodes are raw `u32` slot indices with [`NIL`] standing in
//! for "no neighbor", which keeps the node layout compact and sidesteps
//! ownership cycles entirely.
//!
//! Each slot carries a generation counter that is bumped every time the slot
//! is vacated. A [`NodeRef`] snapshots the generation at insertion time, so a
//! handle to a removed node can be detected even after its slot has been
//! reused - resolution simply fails instead of aliasing the new occupant.

use std::mem;

/// Sentinel slot index representing "no node".
pub(crate) const NIL: u32 = u32::MAX;

/// An opaque handle to a node in a [`List`](crate::List).
///
/// Handles are returned by every insertion and stay valid until the node they
/// name is removed. They are positional arguments only: a handle lets you
/// read or overwrite one payload and splice relative to one position, never
/// rewire links directly.
///
/// A handle whose node has been removed is *stale*. Fallible operations
/// report [`ListError::StaleHandle`](crate::ListError::StaleHandle) for a
/// stale handle; infallible accessors return `None`.
///
/// # Example
///
/// ```
/// use slotlist::List;
///
/// let mut list = List::new();
/// let a = list.push_back(1);
/// let b = list.push_back(2);
///
/// assert_eq!(list.value(a), Some(&1));
/// list.remove(b).unwrap();
///
/// // `b` is now stale: it no longer resolves.
/// assert_eq!(list.value(b), None);
/// assert!(list.remove(b).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeRef {
    pub(crate) slot: u32,
    pub(crate) generation: u32,
}

/// A chain element: one payload plus raw neighbor indices.
#[derive(Debug)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) prev: u32,
    pub(crate) next: u32,
}

impl<T> Node<T> {
    /// Creates an unlinked node.
    #[inline]
    pub(crate) fn new(value: T) -> Self {
        Self {
            value,
            prev: NIL,
            next: NIL,
        }
    }
}

#[derive(Debug)]
enum Entry<T> {
    Occupied(Node<T>),
    Vacant { next_free: u32 },
}

#[derive(Debug)]
struct Slot<T> {
    generation: u32,
    entry: Entry<T>,
}

/// Slot storage with LIFO free-list reuse and generation tagging.
///
/// The arena only hands out raw indices; pairing them with head/tail
/// tracking is the list's job. Invariant: every occupied slot is part of the
/// owning list's chain, so internal accessors take occupancy for granted.
#[derive(Debug)]
pub(crate) struct Arena<T> {
    slots: Vec<Slot<T>>,
    free_head: u32,
    len: usize,
}

impl<T> Arena<T> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_head: NIL,
            len: 0,
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free_head: NIL,
            len: 0,
        }
    }

    #[inline]
    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    /// Stores a node, reusing a vacated slot when one is available.
    pub(crate) fn insert(&mut self, node: Node<T>) -> NodeRef {
        self.len += 1;

        if self.free_head != NIL {
            let slot = self.free_head;
            let entry = &mut self.slots[slot as usize];
            let next_free = match entry.entry {
                Entry::Vacant { next_free } => next_free,
                Entry::Occupied(_) => unreachable!("occupied slot on the free list"),
            };
            entry.entry = Entry::Occupied(node);
            let generation = entry.generation;
            self.free_head = next_free;
            return NodeRef { slot, generation };
        }

        let slot = self.slots.len();
        assert!(slot < NIL as usize, "arena slot index space exhausted");
        self.slots.push(Slot {
            generation: 0,
            entry: Entry::Occupied(node),
        });
        NodeRef {
            slot: slot as u32,
            generation: 0,
        }
    }

    /// Vacates a slot and returns its node, bumping the generation so every
    /// outstanding handle to it goes stale.
    pub(crate) fn remove(&mut self, slot: u32) -> Node<T> {
        let entry = &mut self.slots[slot as usize];
        let vacated = mem::replace(
            &mut entry.entry,
            Entry::Vacant {
                next_free: self.free_head,
            },
        );
        match vacated {
            Entry::Occupied(node) => {
                entry.generation = entry.generation.wrapping_add(1);
                self.free_head = slot;
                self.len -= 1;
                node
            }
            Entry::Vacant { .. } => unreachable!("vacant slot in the list chain"),
        }
    }

    /// Resolves a handle to its slot index, or `None` if it is stale.
    #[inline]
    pub(crate) fn resolve(&self, node: NodeRef) -> Option<u32> {
        let slot = self.slots.get(node.slot as usize)?;
        match slot.entry {
            Entry::Occupied(_) if slot.generation == node.generation => Some(node.slot),
            _ => None,
        }
    }

    /// Builds a live handle for an occupied slot.
    #[inline]
    pub(crate) fn handle(&self, slot: u32) -> NodeRef {
        NodeRef {
            slot,
            generation: self.slots[slot as usize].generation,
        }
    }

    #[inline]
    pub(crate) fn node(&self, slot: u32) -> &Node<T> {
        match &self.slots[slot as usize].entry {
            Entry::Occupied(node) => node,
            Entry::Vacant { .. } => unreachable!("vacant slot in the list chain"),
        }
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, slot: u32) -> &mut Node<T> {
        match &mut self.slots[slot as usize].entry {
            Entry::Occupied(node) => node,
            Entry::Vacant { .. } => unreachable!("vacant slot in the list chain"),
        }
    }

    /// Exchanges the payloads of two occupied slots. Links are untouched.
    pub(crate) fn swap_values(&mut self, a: u32, b: u32) {
        if a == b {
            return;
        }
        let (lo, hi) = if a < b {
            (a as usize, b as usize)
        } else {
            (b as usize, a as usize)
        };
        let (head, tail) = self.slots.split_at_mut(hi);
        match (&mut head[lo].entry, &mut tail[0].entry) {
            (Entry::Occupied(x), Entry::Occupied(y)) => mem::swap(&mut x.value, &mut y.value),
            _ => unreachable!("vacant slot in the list chain"),
        }
    }

    /// Drops every occupied node and rebuilds the free list.
    ///
    /// Generations of vacated slots are bumped, so handles issued before the
    /// clear cannot resurrect through later slot reuse.
    pub(crate) fn clear(&mut self) {
        self.free_head = NIL;
        for (i, slot) in self.slots.iter_mut().enumerate().rev() {
            if matches!(slot.entry, Entry::Occupied(_)) {
                slot.generation = slot.generation.wrapping_add(1);
            }
            slot.entry = Entry::Vacant {
                next_free: self.free_head,
            };
            self.free_head = i as u32;
        }
        self.len = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_resolve_remove() {
        let mut arena: Arena<u64> = Arena::new();

        let a = arena.insert(Node::new(1));
        assert_eq!(arena.len(), 1);
        assert_eq!(arena.resolve(a), Some(a.slot));
        assert_eq!(arena.node(a.slot).value, 1);

        let node = arena.remove(a.slot);
        assert_eq!(node.value, 1);
        assert_eq!(arena.len(), 0);
        assert_eq!(arena.resolve(a), None);
    }

    #[test]
    fn slot_reuse_is_lifo() {
        let mut arena: Arena<u64> = Arena::new();

        let a = arena.insert(Node::new(1));
        let b = arena.insert(Node::new(2));
        arena.remove(a.slot);
        arena.remove(b.slot);

        // Last vacated, first reused.
        let c = arena.insert(Node::new(3));
        assert_eq!(c.slot, b.slot);
        let d = arena.insert(Node::new(4));
        assert_eq!(d.slot, a.slot);
    }

    #[test]
    fn reuse_does_not_resurrect_handles() {
        let mut arena: Arena<u64> = Arena::new();

        let a = arena.insert(Node::new(1));
        arena.remove(a.slot);

        let b = arena.insert(Node::new(2));
        assert_eq!(b.slot, a.slot);
        assert_ne!(b.generation, a.generation);

        assert_eq!(arena.resolve(a), None);
        assert_eq!(arena.resolve(b), Some(b.slot));
    }

    #[test]
    fn swap_values_leaves_links_alone() {
        let mut arena: Arena<u64> = Arena::new();

        let a = arena.insert(Node::new(1));
        let b = arena.insert(Node::new(2));
        arena.node_mut(a.slot).next = b.slot;
        arena.node_mut(b.slot).prev = a.slot;

        arena.swap_values(a.slot, b.slot);

        assert_eq!(arena.node(a.slot).value, 2);
        assert_eq!(arena.node(b.slot).value, 1);
        assert_eq!(arena.node(a.slot).next, b.slot);
        assert_eq!(arena.node(b.slot).prev, a.slot);
    }

    #[test]
    fn swap_values_self_is_noop() {
        let mut arena: Arena<u64> = Arena::new();
        let a = arena.insert(Node::new(7));
        arena.swap_values(a.slot, a.slot);
        assert_eq!(arena.node(a.slot).value, 7);
    }

    #[test]
    fn clear_invalidates_everything() {
        let mut arena: Arena<u64> = Arena::new();

        let a = arena.insert(Node::new(1));
        let b = arena.insert(Node::new(2));
        arena.clear();

        assert_eq!(arena.len(), 0);
        assert_eq!(arena.resolve(a), None);
        assert_eq!(arena.resolve(b), None);

        // Cleared slots are reusable, but old handles stay stale.
        let c = arena.insert(Node::new(3));
        assert_eq!(arena.resolve(c), Some(c.slot));
        assert_eq!(arena.resolve(a), None);
        assert_eq!(arena.resolve(b), None);
    }

    #[test]
    fn clear_drops_values() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        static DROPS: AtomicUsize = AtomicUsize::new(0);

        struct Counted;
        impl Drop for Counted {
            fn drop(&mut self) {
                DROPS.fetch_add(1, Ordering::SeqCst);
            }
        }

        DROPS.store(0, Ordering::SeqCst);
        let mut arena: Arena<Counted> = Arena::new();
        arena.insert(Node::new(Counted));
        arena.insert(Node::new(Counted));
        arena.clear();

        assert_eq!(DROPS.load(Ordering::SeqCst), 2);
    }
}
