//! This crate provides a singly-linked circular list with owned nodes,
//! anchored at its last node.
//!
//! The [`RingList`] allows inserting at both ends, removing the first element
//! and rotating in constant time. It does not store its length: counting the
//! elements, splitting the list in halves and comparing lists all walk the
//! ring.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use ring_list::RingList;
//!
//! let mut list = RingList::new();
//! for x in [1, 2, 3, 4] {
//!     list.add_last(x);
//! }
//! assert_eq!(list.to_string(), "1 2 3 4");
//!
//! list.rotate(); // the old head becomes the tail
//! assert_eq!(list.to_string(), "2 3 4 1");
//!
//! assert_eq!(list.remove_first(), Some(2));
//! list.add_first(0);
//! assert_eq!(list.to_string(), "0 3 4 1");
//! assert_eq!(list.len(), 4);
//! ```
//!
//! # Memory Layout
//!
//! The memory layout of the list is like the following graph:
//! ```text
//!    ┌────────────────────────────────────────────────────────────────────────┐
//!    ↓                                                                        │
//! ╔═══════════╗           ╔═══════════╗                        ╔═══════════╗  │
//! ║   next    ║ ────────→ ║   next    ║ ────────→ ┄┄ ────────→ ║   next    ║ ─┘
//! ╟───────────╢           ╟───────────╢     Node 2, 3, ...     ╟───────────╢
//! ║ element E ║           ║ element E ║                        ║ element E ║
//! ╚═══════════╝           ╚═══════════╝                        ╚═══════════╝
//! Node 0 (head)              Node 1                            Node n-1 (tail)
//!                                                                    ↑
//!                                                  ╔═══════════╗     │
//!                                                  ║   tail    ║ ────┘
//!                                                  ╚═══════════╝
//!                                                      List
//! ```
//! The `RingList` contains only a pointer `tail` to the last node, or nothing
//! if the list is empty.
//!
//! Each node of the list `RingList<E>` is allocated on heap, which contains:
//! - the `next` pointer that points to the next element (or the first element
//!   if it is the last one);
//! - the actual payload `E`.
//!
//! A list with a single element holds one node whose `next` pointer points to
//! itself.
//!
//! # Comparing Lists
//!
//! Two kinds of comparison are offered:
//! - `==` compares both lists from their own head, element by element. A list
//!   and one of its rotations are *not* equal.
//! - [`RingList::rotation_eq`] and [`compare_lists`] ignore the phase: they
//!   succeed if some rotation of the second list equals the first.
//!
//! ```
//! use ring_list::{compare_lists, RingList};
//!
//! let mut l = RingList::new();
//! for x in [1, 2, 3, 4] {
//!     l.add_last(x);
//! }
//! let mut m = l.clone();
//! m.rotate();
//! m.rotate(); // [3, 4, 1, 2]
//!
//! assert!(l != m);
//! assert!(compare_lists(Some(&l), Some(&m)));
//! ```
//!
//! # Splitting
//!
//! A list with an even, non-zero number of elements can be split in two
//! halves with [`RingList::split`]. The nodes of the second half are moved
//! into the returned list; nothing is copied.
//!
//! ```
//! use ring_list::{RingList, SplitError};
//!
//! let mut list = RingList::new();
//! for x in 1..=4 {
//!     list.add_last(x);
//! }
//! let second = list.split()?;
//! assert_eq!(list.to_string(), "1 2");
//! assert_eq!(second.to_string(), "3 4");
//! # Ok::<(), SplitError>(())
//! ```
//!
//! # Features
//!
//! - `tracing`: emit [`tracing`](https://docs.rs/tracing) events from
//!   rotation, split and rotation-invariant comparison. Off by default.
//!
//! [`RingList`]: crate::RingList
//! [`compare_lists`]: crate::compare_lists

#[macro_use]
mod trace;

mod error;
pub mod list;

#[doc(inline)]
pub use error::SplitError;
#[doc(inline)]
pub use list::{compare_lists, RingList};
