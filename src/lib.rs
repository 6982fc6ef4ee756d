//! This crate provides a doubly-linked list that remembers where it was last
//! accessed, so that indexed operations near the previous one are cheap.
//!
//! The [`List`] keeps a *cursor*: the node most recently reached by an indexed
//! operation, together with its index. Looking up index *i* walks from
//! whichever of the cursor, the front or the back is closest to *i*, and
//! leaves the cursor there. Sequential access (*i*, *i* + 1, *i* + 2, ...)
//! thus costs *O*(1) per step instead of *O*(*i*), without holding an
//! iterator or cursor object across calls.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use cursor_list::{List, Node};
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter([1, 2, 3, 4]);
//!
//! assert!(list.insert(Node::new(0), 0).is_ok()); // insert 0 at the beginning
//! assert_eq!(list.get(1), Some(&1));
//! assert_eq!(list, List::from_iter([0, 1, 2, 3, 4]));
//!
//! assert_eq!(list.remove(3), Some(3)); // remove the element at index 3
//! assert_eq!(list, List::from_iter([0, 1, 2, 4]));
//!
//! list.push_front(5); // pushing front to the list is also allowed
//! assert_eq!(list, List::from_iter([5, 0, 1, 2, 4]));
//! ```
//!
//! # Memory Layout
//!
//! The memory layout of the list is like the following graph:
//! ```text
//!    ╔═══════════╗           ╔═══════════╗           ╔═══════════╗
//!    ║   next    ║ ════════→ ║   next    ║ ════════→ ║   next    ║ ──→ None
//!    ╟───────────╢           ╟───────────╢           ╟───────────╢
//!    ║   prev    ║ ←──────── ║   prev    ║ ←──────── ║   prev    ║
//!    ╟───────────╢           ╟───────────╢           ╟───────────╢
//!    ║ element T ║           ║ element T ║           ║ element T ║
//!    ╚═══════════╝           ╚═══════════╝           ╚═══════════╝
//!       Node 0                  Node 1                  Node 2
//!         ↑                       ↑                       ↑
//!         ║                       │                       │
//!    ╔═══════════╗                │                       │
//!    ║   first   ║                │                       │
//!    ╟───────────╢                │                       │
//!    ║   last    ║ ───────────────┼───────────────────────┘
//!    ╟───────────╢                │
//!    ║  cursor   ║ ───────────────┘
//!    ╟───────────╢
//!    ║ cursor_ix ║ = 1
//!    ╟───────────╢
//!    ║    len    ║ = 3
//!    ╚═══════════╝
//!        List
//! ```
//! The `List` owns the first node, and each node owns the next one (`═══→`).
//! The `prev` links, `last` and `cursor` are plain back-references (`───→`).
//! `prev` of the first node and `next` of the last node are `None`.
//!
//! # Nodes
//!
//! Elements can be moved in and out of a list as whole [`Node`]s, without
//! reallocating:
//! - [`append`] and [`prepend`] link a node at either end;
//! - [`insert`] links a node at any index, handing it back if the index is out
//!   of bounds;
//! - [`splice_at`] (or [`splice`] with a [`NodeHandle`] from [`get_node`])
//!   detaches a node and hands it back to the caller, who may link it into
//!   another list.
//!
//! ```
//! use cursor_list::{List, Node};
//! use std::iter::FromIterator;
//!
//! let mut todo = List::from_iter(["write", "test", "ship"]);
//! let mut done = List::new();
//!
//! let node = todo.splice_at(0).unwrap();
//! done.append(node);
//!
//! assert_eq!(todo, List::from_iter(["test", "ship"]));
//! assert_eq!(done, List::from_iter(["write"]));
//! ```
//!
//! # Iteration
//!
//! Iterating over a list is by the [`Iter`] and [`IterMut`] iterators. These are
//! double-ended iterators and iterate the list like an array (fused and
//! exact-sized). They walk the links directly and leave the cursor alone.
//!
//! ## Examples
//!
//! ```
//! use cursor_list::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter([1, 2, 3]);
//! let mut iter = list.iter();
//! assert_eq!(iter.next(), Some(&1));
//! assert_eq!(iter.next(), Some(&2));
//! assert_eq!(iter.next(), Some(&3));
//! assert_eq!(iter.next(), None);
//! assert_eq!(iter.next(), None); // Fused
//!
//! list.iter_mut().for_each(|item| *item *= 2);
//! assert_eq!(Vec::from_iter(list), vec![2, 4, 6]);
//! ```
//!
//! # Threads
//!
//! A `List` can be sent to another thread, but it is never `Sync`: even
//! [`List::get`] moves the cursor. Wrap the list in a lock to share it.
//!
//! [`List`]: crate::List
//! [`Node`]: crate::Node
//! [`NodeHandle`]: crate::NodeHandle
//! [`Iter`]: crate::Iter
//! [`IterMut`]: crate::IterMut
//! [`append`]: crate::List::append
//! [`prepend`]: crate::List::prepend
//! [`insert`]: crate::List::insert
//! [`splice`]: crate::List::splice
//! [`splice_at`]: crate::List::splice_at
//! [`get_node`]: crate::List::get_node

#[doc(inline)]
pub use list::iterator::{IntoIter, Iter, IterMut};
#[doc(inline)]
pub use list::{List, Node, NodeHandle};

pub mod list;
