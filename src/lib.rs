//! An index-addressable doubly-linked list backed by a generational slot
//! arena.
//!
//! `std`'s `LinkedList` hides its nodes, so every operation that is not at an
//! endpoint pays a walk and there is no way to hold onto a position across
//! mutations. [`List`] stores its nodes in a slot arena and hands out opaque
//! [`NodeRef`] handles: relative insertion and handle-based removal are O(1),
//! and a handle to a node that has since been removed is detected by a
//! generation tag and rejected with [`ListError::StaleHandle`] rather than
//! silently aliasing whatever reused the slot.
//!
//! Links are slot indices rather than pointers, so the whole structure is a
//! single contiguous allocation, nodes are recycled through a free list, and
//! there is no per-node `Box` traffic.
//!
//! # Quick start
//!
//! ```
//! use slotlist::{List, ListError};
//!
//! let mut list = List::new();
//! let b = list.push_back("b");
//! list.push_back("d");
//! list.push_front("a");
//!
//! // Handles give O(1) relative insertion.
//! let c = list.insert_after(b, "c").unwrap();
//! assert_eq!(list.to_vec(), vec!["a", "b", "c", "d"]);
//!
//! // Positional operations walk from the head.
//! assert_eq!(list.get(2), Ok(&"c"));
//! assert_eq!(list.remove_at(0), Ok("a"));
//!
//! // A removed node's handle goes stale instead of dangling.
//! list.remove(c).unwrap();
//! assert_eq!(list.remove(c), Err(ListError::StaleHandle));
//! ```
//!
//! # Sorting
//!
//! [`List::sort`] and [`List::sort_by`] run an in-place quicksort that swaps
//! payloads between positions instead of relinking nodes, so handles keep
//! naming the same positions across a sort:
//!
//! ```
//! use slotlist::List;
//!
//! let mut list = List::from_slice(&[5, 3, 1, 4, 2]);
//! let head = list.head_node().unwrap();
//! list.sort();
//!
//! assert_eq!(list.to_vec(), vec![1, 2, 3, 4, 5]);
//! assert_eq!(list.head_node(), Some(head));
//! ```

#![warn(missing_docs)]

mod arena;
mod error;
mod list;

pub use arena::NodeRef;
pub use error::ListError;
pub use list::{IntoIter, Iter, IterMut, List, Nodes};
