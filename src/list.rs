//! Doubly-linked list over generational slot storage.
//!
//! The list owns its arena; callers see payloads, indices, and opaque
//! [`NodeRef`] handles. Handles make relative insertion and removal O(1)
//! without re-walking, and resolving one validates slot occupancy and
//! generation, so a handle to a removed node fails with
//! [`ListError::StaleHandle`] instead of touching whatever reused its slot.
//!
//! # Structural invariants
//!
//! Every public operation preserves, together:
//!
//! - `len == 0` exactly when both `head` and `tail` are absent;
//! - the forward walk from `head` reaches `tail` in `len - 1` steps and the
//!   backward walk is its exact mirror;
//! - each node's neighbors point back at it;
//! - every occupied arena slot is on the chain.
//!
//! All insertions funnel through one splice routine and all removals through
//! one unlink routine, so the endpoint and sibling bookkeeping lives in
//! exactly two places.
//!
//! # Example
//!
//! ```
//! use slotlist::List;
//!
//! let mut list = List::from_slice(&[5, 3, 1, 4, 2]);
//!
//! let three = list.position_by(&3, |a, b| a == b).unwrap();
//! assert_eq!(three, 1);
//!
//! list.sort();
//! assert_eq!(list.to_vec(), vec![1, 2, 3, 4, 5]);
//!
//! list.insert_at(2, 9).unwrap();
//! assert_eq!(list.to_vec(), vec![1, 2, 9, 3, 4, 5]);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use crate::arena::{Arena, Node, NodeRef, NIL};
use crate::error::ListError;

/// An index-addressable doubly-linked list.
///
/// Positional operations (`get`, `set`, `insert_at`, `remove_at`) cost a walk
/// from the head; handle-based operations (`insert_after`, `insert_before`,
/// [`remove`](List::remove)) are O(1). Sorting is an in-place quicksort that
/// swaps payloads between positions and never rewires a link.
///
/// The container is single-threaded by design: it is `Send` when `T` is, and
/// exclusive access for mutation is enforced by the borrow checker.
///
/// # Example
///
/// ```
/// use slotlist::List;
///
/// let mut list = List::new();
/// let a = list.push_back("alpha");
/// list.push_back("gamma");
/// list.insert_after(a, "beta").unwrap();
///
/// assert_eq!(list.to_vec(), vec!["alpha", "beta", "gamma"]);
/// ```
pub struct List<T> {
    arena: Arena<T>,
    head: u32,
    tail: u32,
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> List<T> {
    /// Creates an empty list.
    #[inline]
    pub const fn new() -> Self {
        Self {
            arena: Arena::new(),
            head: NIL,
            tail: NIL,
        }
    }

    /// Creates an empty list with room for `capacity` nodes pre-allocated.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: Arena::with_capacity(capacity),
            head: NIL,
            tail: NIL,
        }
    }

    /// Builds a list from a slice, preserving order. O(n).
    pub fn from_slice(values: &[T]) -> Self
    where
        T: Clone,
    {
        let mut list = Self::with_capacity(values.len());
        list.extend_from_slice(values);
        list
    }

    /// Materializes the elements into a `Vec` in forward order. O(n).
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Returns the number of elements in the list.
    #[inline]
    pub const fn len(&self) -> usize {
        self.arena.len()
    }

    /// Returns `true` if the list is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // ========================================================================
    // Internal splice / unlink - the only two places that touch topology
    // ========================================================================

    /// Wires `slot` between `prev` and `next` (either may be `NIL`),
    /// re-deriving `head`/`tail` as needed.
    fn link_between(&mut self, slot: u32, prev: u32, next: u32) {
        {
            let node = self.arena.node_mut(slot);
            node.prev = prev;
            node.next = next;
        }
        if prev != NIL {
            self.arena.node_mut(prev).next = slot;
        } else {
            self.head = slot;
        }
        if next != NIL {
            self.arena.node_mut(next).prev = slot;
        } else {
            self.tail = slot;
        }
    }

    /// Detaches `slot` from the chain, re-deriving `head`/`tail` as needed.
    /// The slot stays occupied; callers vacate it.
    fn unlink(&mut self, slot: u32) {
        let node = self.arena.node(slot);
        let (prev, next) = (node.prev, node.next);

        if prev != NIL {
            self.arena.node_mut(prev).next = next;
        } else {
            self.head = next;
        }
        if next != NIL {
            self.arena.node_mut(next).prev = prev;
        } else {
            self.tail = prev;
        }
    }

    fn remove_slot(&mut self, slot: u32) -> T {
        self.unlink(slot);
        self.arena.remove(slot).value
    }

    /// Positional walk from the head. Caller guarantees `index < len`.
    fn slot_at(&self, index: usize) -> u32 {
        let mut slot = self.head;
        for _ in 0..index {
            slot = self.arena.node(slot).next;
        }
        slot
    }

    #[inline]
    fn resolve(&self, node: NodeRef) -> Result<u32, ListError> {
        self.arena.resolve(node).ok_or(ListError::StaleHandle)
    }

    #[inline]
    fn check_index(&self, index: usize) -> Result<(), ListError> {
        if index < self.len() {
            Ok(())
        } else {
            Err(ListError::IndexOutOfBounds {
                index,
                len: self.len(),
            })
        }
    }

    // ========================================================================
    // Insertion
    // ========================================================================

    /// Appends a value at the tail. O(1).
    ///
    /// On an empty list the new node becomes both head and tail.
    pub fn push_back(&mut self, value: T) -> NodeRef {
        let node = self.arena.insert(Node::new(value));
        let tail = self.tail;
        self.link_between(node.slot, tail, NIL);
        node
    }

    /// Prepends a value at the head. O(1).
    pub fn push_front(&mut self, value: T) -> NodeRef {
        let node = self.arena.insert(Node::new(value));
        let head = self.head;
        self.link_between(node.slot, NIL, head);
        node
    }

    /// Inserts a value immediately after `after`. O(1).
    ///
    /// If `after` is the tail, the new node becomes the tail.
    ///
    /// # Errors
    ///
    /// [`ListError::StaleHandle`] if `after` no longer names a live node.
    pub fn insert_after(&mut self, after: NodeRef, value: T) -> Result<NodeRef, ListError> {
        let anchor = self.resolve(after)?;
        let next = self.arena.node(anchor).next;
        let node = self.arena.insert(Node::new(value));
        self.link_between(node.slot, anchor, next);
        Ok(node)
    }

    /// Inserts a value immediately before `before`. O(1).
    ///
    /// If `before` is the head, the new node becomes the head.
    ///
    /// # Errors
    ///
    /// [`ListError::StaleHandle`] if `before` no longer names a live node.
    pub fn insert_before(&mut self, before: NodeRef, value: T) -> Result<NodeRef, ListError> {
        let anchor = self.resolve(before)?;
        let prev = self.arena.node(anchor).prev;
        let node = self.arena.insert(Node::new(value));
        self.link_between(node.slot, prev, anchor);
        Ok(node)
    }

    /// Appends a slice at the tail, preserving its order. O(k).
    ///
    /// A no-op for an empty slice.
    pub fn extend_from_slice(&mut self, values: &[T])
    where
        T: Clone,
    {
        for value in values {
            self.push_back(value.clone());
        }
    }

    /// Inserts a value so it occupies position `index` afterwards. O(index).
    ///
    /// `index == len` behaves like [`push_back`](List::push_back).
    ///
    /// # Errors
    ///
    /// [`ListError::IndexOutOfBounds`] when `index > len`.
    pub fn insert_at(&mut self, index: usize, value: T) -> Result<NodeRef, ListError> {
        if index > self.len() {
            return Err(ListError::IndexOutOfBounds {
                index,
                len: self.len(),
            });
        }
        if index == self.len() {
            return Ok(self.push_back(value));
        }
        let at = self.slot_at(index);
        let prev = self.arena.node(at).prev;
        let node = self.arena.insert(Node::new(value));
        self.link_between(node.slot, prev, at);
        Ok(node)
    }

    /// Inserts an entire slice starting at position `index`, preserving its
    /// internal order. Same bounds contract as [`insert_at`](List::insert_at).
    ///
    /// # Errors
    ///
    /// [`ListError::IndexOutOfBounds`] when `index > len`. The list is left
    /// untouched on error.
    ///
    /// # Example
    ///
    /// ```
    /// use slotlist::List;
    ///
    /// let mut list = List::from_slice(&[1, 5]);
    /// list.insert_slice_at(1, &[2, 3, 4]).unwrap();
    /// assert_eq!(list.to_vec(), vec![1, 2, 3, 4, 5]);
    /// ```
    pub fn insert_slice_at(&mut self, index: usize, values: &[T]) -> Result<(), ListError>
    where
        T: Clone,
    {
        if index > self.len() {
            return Err(ListError::IndexOutOfBounds {
                index,
                len: self.len(),
            });
        }
        if index == self.len() {
            self.extend_from_slice(values);
            return Ok(());
        }
        // Splicing each value directly before the anchor keeps the slice
        // order and re-derives the head for index 0 via the shared routine.
        let anchor = self.slot_at(index);
        for value in values {
            let prev = self.arena.node(anchor).prev;
            let node = self.arena.insert(Node::new(value.clone()));
            self.link_between(node.slot, prev, anchor);
        }
        Ok(())
    }

    // ========================================================================
    // Lookup & mutation
    // ========================================================================

    /// Returns a reference to the element at `index`. O(index).
    ///
    /// # Errors
    ///
    /// [`ListError::IndexOutOfBounds`] when `index >= len`.
    pub fn get(&self, index: usize) -> Result<&T, ListError> {
        self.check_index(index)?;
        Ok(&self.arena.node(self.slot_at(index)).value)
    }

    /// Returns a mutable reference to the element at `index`. O(index).
    ///
    /// # Errors
    ///
    /// [`ListError::IndexOutOfBounds`] when `index >= len`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, ListError> {
        self.check_index(index)?;
        let slot = self.slot_at(index);
        Ok(&mut self.arena.node_mut(slot).value)
    }

    /// Overwrites the payload at `index`, returning the previous value.
    ///
    /// # Errors
    ///
    /// [`ListError::IndexOutOfBounds`] when `index >= len`.
    pub fn set(&mut self, index: usize, value: T) -> Result<T, ListError> {
        self.check_index(index)?;
        let slot = self.slot_at(index);
        Ok(mem::replace(&mut self.arena.node_mut(slot).value, value))
    }

    /// Returns the position of the first element equal to `value` under a
    /// caller-supplied predicate. Linear scan from the head.
    ///
    /// # Errors
    ///
    /// [`ListError::NotFound`] if no element matches.
    pub fn position_by<F>(&self, value: &T, mut eq: F) -> Result<usize, ListError>
    where
        F: FnMut(&T, &T) -> bool,
    {
        let mut slot = self.head;
        let mut index = 0;
        while slot != NIL {
            let node = self.arena.node(slot);
            if eq(&node.value, value) {
                return Ok(index);
            }
            slot = node.next;
            index += 1;
        }
        Err(ListError::NotFound)
    }

    // ========================================================================
    // Removal
    // ========================================================================

    /// Removes the first element equal to `value` under the predicate and
    /// returns its payload. Only the first match is removed.
    ///
    /// # Errors
    ///
    /// [`ListError::NotFound`] if no element matches.
    pub fn remove_first_by<F>(&mut self, value: &T, mut eq: F) -> Result<T, ListError>
    where
        F: FnMut(&T, &T) -> bool,
    {
        let mut slot = self.head;
        while slot != NIL {
            let node = self.arena.node(slot);
            if eq(&node.value, value) {
                return Ok(self.remove_slot(slot));
            }
            slot = node.next;
        }
        Err(ListError::NotFound)
    }

    /// Removes the element at `index` and returns it. O(index).
    ///
    /// # Errors
    ///
    /// [`ListError::IndexOutOfBounds`] when `index >= len`.
    pub fn remove_at(&mut self, index: usize) -> Result<T, ListError> {
        self.check_index(index)?;
        let slot = self.slot_at(index);
        Ok(self.remove_slot(slot))
    }

    /// Removes the node named by a handle and returns its payload. O(1).
    ///
    /// # Errors
    ///
    /// [`ListError::StaleHandle`] if `node` no longer names a live node.
    pub fn remove(&mut self, node: NodeRef) -> Result<T, ListError> {
        let slot = self.resolve(node)?;
        Ok(self.remove_slot(slot))
    }

    /// Removes and returns the front element, or `None` if empty. O(1).
    pub fn pop_front(&mut self) -> Option<T> {
        if self.head == NIL {
            return None;
        }
        let head = self.head;
        Some(self.remove_slot(head))
    }

    /// Removes and returns the back element, or `None` if empty. O(1).
    pub fn pop_back(&mut self) -> Option<T> {
        if self.tail == NIL {
            return None;
        }
        let tail = self.tail;
        Some(self.remove_slot(tail))
    }

    /// Removes every element. Outstanding handles all go stale.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.head = NIL;
        self.tail = NIL;
    }

    // ========================================================================
    // Endpoint access
    // ========================================================================

    /// Returns a reference to the front element.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        (self.head != NIL).then(|| &self.arena.node(self.head).value)
    }

    /// Returns a mutable reference to the front element.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        if self.head == NIL {
            return None;
        }
        Some(&mut self.arena.node_mut(self.head).value)
    }

    /// Returns a reference to the back element.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        (self.tail != NIL).then(|| &self.arena.node(self.tail).value)
    }

    /// Returns a mutable reference to the back element.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        if self.tail == NIL {
            return None;
        }
        Some(&mut self.arena.node_mut(self.tail).value)
    }

    // ========================================================================
    // Node handles
    // ========================================================================

    /// Returns a handle to the head node, or `None` if empty.
    #[inline]
    pub fn head_node(&self) -> Option<NodeRef> {
        (self.head != NIL).then(|| self.arena.handle(self.head))
    }

    /// Returns a handle to the tail node, or `None` if empty.
    #[inline]
    pub fn tail_node(&self) -> Option<NodeRef> {
        (self.tail != NIL).then(|| self.arena.handle(self.tail))
    }

    /// Returns a handle to the node after `node`.
    ///
    /// `None` if `node` is the tail or stale.
    #[inline]
    pub fn next_node(&self, node: NodeRef) -> Option<NodeRef> {
        let slot = self.arena.resolve(node)?;
        let next = self.arena.node(slot).next;
        (next != NIL).then(|| self.arena.handle(next))
    }

    /// Returns a handle to the node before `node`.
    ///
    /// `None` if `node` is the head or stale.
    #[inline]
    pub fn prev_node(&self, node: NodeRef) -> Option<NodeRef> {
        let slot = self.arena.resolve(node)?;
        let prev = self.arena.node(slot).prev;
        (prev != NIL).then(|| self.arena.handle(prev))
    }

    /// Returns a reference to the payload named by a handle.
    ///
    /// `None` if the handle is stale.
    #[inline]
    pub fn value(&self, node: NodeRef) -> Option<&T> {
        let slot = self.arena.resolve(node)?;
        Some(&self.arena.node(slot).value)
    }

    /// Returns a mutable reference to the payload named by a handle.
    ///
    /// `None` if the handle is stale.
    #[inline]
    pub fn value_mut(&mut self, node: NodeRef) -> Option<&mut T> {
        let slot = self.arena.resolve(node)?;
        Some(&mut self.arena.node_mut(slot).value)
    }

    /// Returns `true` if the handle still names a live node in this list.
    #[inline]
    pub fn contains_node(&self, node: NodeRef) -> bool {
        self.arena.resolve(node).is_some()
    }

    // ========================================================================
    // Iteration
    // ========================================================================

    /// Returns a double-ended iterator over references, front to back.
    ///
    /// `iter().enumerate()` yields `(position, value)` pairs, and because the
    /// iterator is exact-size, `iter().enumerate().rev()` walks back to front
    /// while the positions stay absolute (0-based from the head).
    ///
    /// # Example
    ///
    /// ```
    /// use slotlist::List;
    ///
    /// let list = List::from_slice(&[10, 20, 30]);
    /// let backward: Vec<_> = list.iter().enumerate().rev().collect();
    /// assert_eq!(backward, vec![(2, &30), (1, &20), (0, &10)]);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            arena: &self.arena,
            front: self.head,
            back: self.tail,
            remaining: self.len(),
        }
    }

    /// Returns a double-ended iterator over mutable references, front to back.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        let front = self.head;
        let back = self.tail;
        let remaining = self.len();
        IterMut {
            arena: &mut self.arena,
            front,
            back,
            remaining,
        }
    }

    /// Returns an iterator over node handles, front to back.
    #[inline]
    pub fn nodes(&self) -> Nodes<'_, T> {
        Nodes {
            arena: &self.arena,
            front: self.head,
            back: self.tail,
            remaining: self.len(),
        }
    }

    // ========================================================================
    // Sort
    // ========================================================================

    /// Sorts the list in place in ascending order. O(n log n) average.
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        self.sort_by(T::cmp);
    }

    /// Sorts the list in place by a comparator.
    ///
    /// Quicksort with Lomuto partitioning over node positions: the pivot is
    /// the payload of the range's last node, and ordering is restored by
    /// swapping payloads between positions. No link is modified, so every
    /// handle keeps naming its position and head/tail never move.
    ///
    /// Average O(n log n) comparisons and swaps; O(n²) for already-sorted or
    /// reverse-sorted input, as usual for a fixed last-element pivot. The
    /// sort is not stable.
    ///
    /// # Example
    ///
    /// ```
    /// use slotlist::List;
    ///
    /// let mut list = List::from_slice(&[3.0, 1.0, 2.0]);
    /// list.sort_by(|a, b| a.partial_cmp(b).unwrap());
    /// assert_eq!(list.to_vec(), vec![1.0, 2.0, 3.0]);
    /// ```
    pub fn sort_by<F>(&mut self, mut cmp: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let (head, tail) = (self.head, self.tail);
        self.quicksort(head, tail, &mut cmp);
    }

    fn quicksort<F>(&mut self, lo: u32, hi: u32, cmp: &mut F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        // The range is empty when `hi` is absent, a single node, or
        // degenerate (`lo` has walked past `hi`).
        if hi == NIL || lo == hi || lo == self.arena.node(hi).next {
            return;
        }
        let pivot = self.partition(lo, hi, cmp);
        let before = self.arena.node(pivot).prev;
        let after = self.arena.node(pivot).next;
        self.quicksort(lo, before, cmp);
        self.quicksort(after, hi, cmp);
    }

    /// Lomuto partition over `[lo, hi]` pivoting on `hi`'s payload.
    ///
    /// `last_lesser` is the node-pointer analogue of the partition index; the
    /// NIL sentinel encodes its initial "one before lo" state, and advancing
    /// it means "step to lo the first time, to its successor after that".
    /// Returns the pivot's final position.
    fn partition<F>(&mut self, lo: u32, hi: u32, cmp: &mut F) -> u32
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut last_lesser = NIL;
        let mut j = lo;
        while j != hi {
            // `j` never reaches `hi`, so the pivot payload is not disturbed
            // by the swaps below and can be compared in place.
            let ord = cmp(&self.arena.node(j).value, &self.arena.node(hi).value);
            if ord != Ordering::Greater {
                last_lesser = if last_lesser == NIL {
                    lo
                } else {
                    self.arena.node(last_lesser).next
                };
                self.arena.swap_values(last_lesser, j);
            }
            j = self.arena.node(j).next;
        }
        last_lesser = if last_lesser == NIL {
            lo
        } else {
            self.arena.node(last_lesser).next
        };
        self.arena.swap_values(last_lesser, hi);
        last_lesser
    }
}

// =============================================================================
// Trait impls
// =============================================================================

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut List<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Iterator over references to list elements, front to back.
pub struct Iter<'a, T> {
    arena: &'a Arena<T>,
    front: u32,
    back: u32,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.arena.node(self.front);
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.arena.node(self.back);
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> std::iter::FusedIterator for Iter<'_, T> {}

/// Iterator over mutable references to list elements, front to back.
pub struct IterMut<'a, T> {
    arena: &'a mut Arena<T>,
    front: u32,
    back: u32,
    remaining: usize,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<&'a mut T> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.arena.node_mut(self.front);
        self.front = node.next;
        self.remaining -= 1;
        // Each node is visited exactly once, so the handed-out borrows are
        // disjoint and may outlive `&mut self`.
        Some(unsafe { &mut *(&mut node.value as *mut T) })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.arena.node_mut(self.back);
        self.back = node.prev;
        self.remaining -= 1;
        // Same disjointness argument as `next`.
        Some(unsafe { &mut *(&mut node.value as *mut T) })
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> std::iter::FusedIterator for IterMut<'_, T> {}

/// Iterator over node handles, front to back.
pub struct Nodes<'a, T> {
    arena: &'a Arena<T>,
    front: u32,
    back: u32,
    remaining: usize,
}

impl<T> Iterator for Nodes<'_, T> {
    type Item = NodeRef;

    #[inline]
    fn next(&mut self) -> Option<NodeRef> {
        if self.remaining == 0 {
            return None;
        }
        let handle = self.arena.handle(self.front);
        self.front = self.arena.node(self.front).next;
        self.remaining -= 1;
        Some(handle)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Nodes<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<NodeRef> {
        if self.remaining == 0 {
            return None;
        }
        let handle = self.arena.handle(self.back);
        self.back = self.arena.node(self.back).prev;
        self.remaining -= 1;
        Some(handle)
    }
}

impl<T> ExactSizeIterator for Nodes<'_, T> {}
impl<T> std::iter::FusedIterator for Nodes<'_, T> {}

/// Owning iterator that drains the list front to back.
pub struct IntoIter<T> {
    list: List<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.list.pop_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> std::iter::FusedIterator for IntoIter<T> {}
