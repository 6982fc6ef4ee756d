use std::cell::Cell;
use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;
use std::ptr::NonNull;

use tracing::trace;

use crate::{IntoIter, Iter, IterMut};

pub use node::{Node, NodeHandle};

pub mod iterator;
pub mod node;

mod algorithms;
mod resolve;

/// A doubly-linked list that remembers the position of its last access.
///
/// Besides the `first` and `last` nodes, the `List` keeps a *cursor*: the
/// node (and its index) most recently reached by an indexed operation.
/// Every index lookup walks from whichever of the cursor, the front or the
/// back is closest, and leaves the cursor on the node it found, so a run of
/// accesses to neighboring indices costs *O*(1) each.
///
/// The `List` contains:
/// - `first`: the head node, which owns the rest of the chain through the
///   `next` links;
/// - `last`: a back-reference to the tail node;
/// - `cursor` and `cursor_index`: a back-reference to some node in the list
///   and its position. They live in [`Cell`]s so that [`List::get`] can move
///   the cursor through a shared borrow. As a consequence, `List` is never
///   `Sync`;
/// - `len`: the number of nodes.
///
/// The list is either *empty* (`first`, `last` and `cursor` are all `None`,
/// `len == 0`) or *non-empty* (all three are set and `cursor_index < len`).
/// Every operation keeps it in one of these two states.
pub struct List<T> {
    first: Option<NonNull<Node<T>>>,
    last: Option<NonNull<Node<T>>>,
    cursor: Cell<Option<NonNull<Node<Erased>>>>,
    cursor_index: Cell<usize>,
    len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

/// Element type of the cursor pointer, so that storing the cursor in a
/// `Cell` does not make `List<T>` invariant over `T`. Never dereferenced.
enum Erased {}

// private methods
impl<T> List<T> {
    pub(crate) fn cursor_node(&self) -> Option<NonNull<Node<T>>> {
        self.cursor.get().map(NonNull::cast)
    }

    pub(crate) fn set_cursor(&self, node: NonNull<Node<T>>, at: usize) {
        self.cursor.set(Some(node.cast()));
        self.cursor_index.set(at);
    }

    fn reset_cursor(&self) {
        self.cursor.set(None);
        self.cursor_index.set(0);
    }

    /// Link a detached node in front of `first`.
    fn link_front(&mut self, node: Box<Node<T>>) {
        debug_assert!(node.is_detached(), "Cannot link a node that is still linked");
        let mut node = NonNull::from(Box::leak(node));
        // SAFETY: `node` was just leaked, and `first` is live while linked.
        unsafe {
            node.as_mut().next = self.first;
            match self.first {
                Some(mut first) => first.as_mut().prev = Some(node),
                None => self.last = Some(node),
            }
        }
        self.first = Some(node);
        self.set_cursor(node, 0);
        self.len += 1;
    }

    /// Link a detached node behind `last`.
    fn link_back(&mut self, node: Box<Node<T>>) {
        debug_assert!(node.is_detached(), "Cannot link a node that is still linked");
        let mut node = NonNull::from(Box::leak(node));
        // SAFETY: `node` was just leaked, and `last` is live while linked.
        unsafe {
            node.as_mut().prev = self.last;
            match self.last {
                Some(mut last) => last.as_mut().next = Some(node),
                None => self.first = Some(node),
            }
        }
        self.last = Some(node);
        self.set_cursor(node, self.len);
        self.len += 1;
    }

    /// Link a detached node immediately before `next`, which sits at index
    /// `at`. The new node takes index `at`.
    ///
    /// # Safety
    ///
    /// `next` must be linked into this list at index `at`.
    unsafe fn link_before(&mut self, node: Box<Node<T>>, mut next: NonNull<Node<T>>, at: usize) {
        debug_assert!(node.is_detached(), "Cannot link a node that is still linked");
        let mut node = NonNull::from(Box::leak(node));
        // `next.prev` has to be read before it is redirected to `node`.
        let prev = next.as_ref().prev;
        node.as_mut().next = Some(next);
        node.as_mut().prev = prev;
        next.as_mut().prev = Some(node);
        match prev {
            Some(mut prev) => prev.as_mut().next = Some(node),
            None => self.first = Some(node),
        }
        self.set_cursor(node, at);
        self.len += 1;
    }

    /// Detach `node` from the list and return it as a box with cleared links.
    ///
    /// `at` is the index of `node` if the caller knows it. When the cursor
    /// sits on `node` it moves to the previous node, or to the next one if
    /// `node` is the front. When the cursor sits elsewhere, its index is
    /// shifted if `at` shows the removal happened before it; without `at`
    /// the shift is unknown and the cursor is moved back to the front.
    ///
    /// # Safety
    ///
    /// `node` must be linked into this list, and `at` (if any) must be its
    /// index.
    unsafe fn unlink(&mut self, node: NonNull<Node<T>>, at: Option<usize>) -> Box<Node<T>> {
        let prev = node.as_ref().prev;
        let next = node.as_ref().next;
        debug_assert!(
            prev.is_some() || self.first == Some(node),
            "Cannot splice a node that does not belong to the list"
        );
        debug_assert!(
            next.is_some() || self.last == Some(node),
            "Cannot splice a node that does not belong to the list"
        );

        let cursor_index = self.cursor_index.get();
        let mut lost_cursor = false;
        if self.cursor_node() == Some(node) {
            match (prev, next) {
                (Some(prev), _) => self.set_cursor(prev, cursor_index - 1),
                (None, Some(next)) => self.set_cursor(next, cursor_index),
                (None, None) => self.reset_cursor(),
            }
        } else {
            match at {
                Some(at) if at < cursor_index => self.cursor_index.set(cursor_index - 1),
                Some(_) => {}
                None => lost_cursor = true,
            }
        }

        match prev {
            Some(mut prev) => prev.as_mut().next = next,
            None => self.first = next,
        }
        match next {
            Some(mut next) => next.as_mut().prev = prev,
            None => self.last = prev,
        }
        self.len -= 1;

        if lost_cursor {
            match self.first {
                Some(first) => self.set_cursor(first, 0),
                None => self.reset_cursor(),
            }
        }
        trace!(?at, len = self.len, "spliced");

        let mut node = Box::from_raw(node.as_ptr());
        node.next = None;
        node.prev = None;
        node
    }

    /// Assert the whole structural invariant of the list, walking the chain
    /// in both directions.
    #[cfg(test)]
    pub(crate) fn check_invariants(&self) {
        if self.len == 0 {
            assert!(self.first.is_none());
            assert!(self.last.is_none());
            assert!(self.cursor_node().is_none());
            assert_eq!(self.cursor_index.get(), 0);
            return;
        }
        let first = self.first.expect("non-empty list must have a first node");
        let last = self.last.expect("non-empty list must have a last node");
        let cursor = self.cursor_node().expect("non-empty list must have a cursor");
        assert!(self.cursor_index.get() < self.len);

        let mut count = 0;
        let mut prev = None;
        let mut current = Some(first);
        while let Some(node) = current {
            let links = unsafe { node.as_ref() };
            assert_eq!(links.prev, prev, "broken back link at index {}", count);
            if count == self.cursor_index.get() {
                assert_eq!(node, cursor, "cursor is not at index {}", count);
            }
            prev = Some(node);
            current = links.next;
            count += 1;
        }
        assert_eq!(count, self.len);
        assert_eq!(prev, Some(last));

        let mut count = 0;
        let mut current = Some(last);
        while let Some(node) = current {
            current = unsafe { node.as_ref().prev };
            count += 1;
        }
        assert_eq!(count, self.len);
    }
}

impl<T> List<T> {
    /// Creates an empty `List`.
    ///
    /// This is a `const fn`, so the list can live in any storage the caller
    /// provides. See [`List::try_boxed`] for a heap-allocated list.
    ///
    /// # Examples
    /// ```
    /// use cursor_list::List;
    /// let list: List<u32> = List::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    pub const fn new() -> Self {
        Self {
            first: None,
            last: None,
            cursor: Cell::new(None),
            cursor_index: Cell::new(0),
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Creates an empty `List` on the heap, or returns `None` if the
    /// allocation fails.
    ///
    /// # Examples
    /// ```
    /// use cursor_list::List;
    ///
    /// let mut list = List::try_boxed().expect("allocation failed");
    /// list.push_back(1);
    /// assert_eq!(list.len(), 1);
    /// ```
    pub fn try_boxed() -> Option<Box<Self>> {
        node::try_box(Self::new())
    }

    /// Returns `true` if the `List` is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.first.is_none()
    }

    /// Returns the length of the `List`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// assert_eq!(list.len(), 1);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.len(), 2);
    ///
    /// list.push_back(3);
    /// assert_eq!(list.len(), 3);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns the index the cursor rests on, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter(0..10);
    /// assert_eq!(list.cursor_index(), Some(9));
    ///
    /// assert_eq!(list.get(4), Some(&4));
    /// assert_eq!(list.cursor_index(), Some(4));
    /// ```
    #[inline]
    pub fn cursor_index(&self) -> Option<usize> {
        self.cursor.get().map(|_| self.cursor_index.get())
    }

    /// Removes and releases all elements, leaving the `List` empty and
    /// ready for reuse.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// list.push_front(1);
    /// assert_eq!(list.len(), 2);
    /// assert_eq!(list.front(), Some(&1));
    ///
    /// list.clear();
    /// assert_eq!(list.len(), 0);
    /// assert_eq!(list.front(), None);
    /// ```
    pub fn clear(&mut self) {
        // Reset first, so a panicking destructor leaves no dangling pointers.
        let mut current = self.first.take();
        self.last = None;
        self.reset_cursor();
        let released = std::mem::replace(&mut self.len, 0);

        while let Some(node) = current {
            // SAFETY: every node of the chain is owned by its predecessor (or
            // by the list, for the first one) and is visited once.
            let node = unsafe { Box::from_raw(node.as_ptr()) };
            current = node.next;
        }
        trace!(released, "cleared");
    }

    /// Provides a reference to the front element, or `None` if the list is
    /// empty. The cursor does not move.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.front(), None);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front(), Some(&1));
    /// ```
    #[inline]
    pub fn front(&self) -> Option<&T> {
        // SAFETY: `first` is live while the list is borrowed.
        self.first.map(|node| unsafe { &(*node.as_ptr()).element })
    }

    /// Provides a mutable reference to the front element, or `None` if the
    /// list is empty.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        // SAFETY: `first` is live while the list is borrowed mutably.
        self.first.map(|node| unsafe { &mut (*node.as_ptr()).element })
    }

    /// Provides a reference to the back element, or `None` if the list is
    /// empty. The cursor does not move.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.back(), None);
    ///
    /// list.push_back(1);
    /// assert_eq!(list.back(), Some(&1));
    /// ```
    #[inline]
    pub fn back(&self) -> Option<&T> {
        // SAFETY: `last` is live while the list is borrowed.
        self.last.map(|node| unsafe { &(*node.as_ptr()).element })
    }

    /// Provides a mutable reference to the back element, or `None` if the
    /// list is empty.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        // SAFETY: `last` is live while the list is borrowed mutably.
        self.last.map(|node| unsafe { &mut (*node.as_ptr()).element })
    }

    /// Links `node` after the last node. The cursor moves to `node`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::{List, Node};
    ///
    /// let mut list = List::new();
    /// list.append(Node::new('a'));
    /// list.append(Node::new('b'));
    /// assert_eq!(list.back(), Some(&'b'));
    /// assert_eq!(list.cursor_index(), Some(1));
    /// ```
    pub fn append(&mut self, node: Box<Node<T>>) {
        self.link_back(node);
    }

    /// Links `node` before the first node. The cursor moves to `node`, at
    /// index 0.
    ///
    /// Every element already in the list shifts one index up, so indices
    /// observed before this call no longer name the same elements.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::{List, Node};
    ///
    /// let mut list = List::new();
    /// list.prepend(Node::new('b'));
    /// list.prepend(Node::new('a'));
    /// assert_eq!(list.front(), Some(&'a'));
    /// assert_eq!(list.get(1), Some(&'b'));
    /// ```
    pub fn prepend(&mut self, node: Box<Node<T>>) {
        self.link_front(node);
    }

    /// Links `node` at index `at`, shifting the element at `at` (and every
    /// element after it) one index up. The cursor moves to `node`.
    ///
    /// Returns the node back as an error if `at > len`; the list is left
    /// untouched.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time for `at` near the
    /// cursor or either end, *O*(*n*) otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::{List, Node};
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    ///
    /// assert!(list.insert(Node::new(4), 2).is_ok());
    /// assert!(list.insert(Node::new(5), 4).is_ok());
    /// assert_eq!(Vec::from_iter(list.iter().copied()), vec![1, 2, 4, 3, 5]);
    ///
    /// let rejected = list.insert(Node::new(6), 9).unwrap_err();
    /// assert_eq!(rejected.into_element(), 6);
    /// ```
    pub fn insert(&mut self, node: Box<Node<T>>, at: usize) -> Result<(), Box<Node<T>>> {
        if at > self.len {
            return Err(node);
        }
        if at == 0 {
            self.link_front(node);
            return Ok(());
        }
        if at == self.len {
            self.link_back(node);
            return Ok(());
        }
        match self.resolve(at) {
            Some(resolved) => {
                // SAFETY: `resolved.node` is linked into this list at `at`.
                unsafe { self.link_before(node, resolved.node, at) };
                Ok(())
            }
            None => Err(node),
        }
    }

    /// Like [`List::insert`], but allocates the node for `element`. Returns
    /// the element back as an error if `at > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 3]);
    /// assert_eq!(list.insert_value(1, 2), Ok(()));
    /// assert_eq!(list.insert_value(7, 4), Err(4));
    /// assert_eq!(list, List::from_iter([1, 2, 3]));
    /// ```
    pub fn insert_value(&mut self, at: usize, element: T) -> Result<(), T> {
        if at > self.len {
            return Err(element);
        }
        self.insert(Node::new(element), at)
            .map_err(Node::into_element)
    }

    /// Returns a reference to the element at index `at`, or `None` if
    /// `at >= len`. The cursor moves to `at` unless `at` is an end of the
    /// list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time for `at` near the
    /// cursor or either end, *O*(*n*) otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter(0..100);
    /// // Each lookup starts from the previous one.
    /// for i in 40..60 {
    ///     assert_eq!(list.get(i), Some(&i));
    /// }
    /// assert_eq!(list.get(100), None);
    /// ```
    pub fn get(&self, at: usize) -> Option<&T> {
        let resolved = self.resolve(at)?;
        // SAFETY: the node is live while the list is borrowed.
        Some(unsafe { &(*resolved.node.as_ptr()).element })
    }

    /// Returns a mutable reference to the element at index `at`, or `None`
    /// if `at >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// if let Some(x) = list.get_mut(1) {
    ///     *x *= 10;
    /// }
    /// assert_eq!(list, List::from_iter([1, 20, 3]));
    /// ```
    pub fn get_mut(&mut self, at: usize) -> Option<&mut T> {
        let resolved = self.resolve(at)?;
        // SAFETY: the node is live and the list is borrowed mutably.
        Some(unsafe { &mut (*resolved.node.as_ptr()).element })
    }

    /// Returns a handle to the node at index `at`, or `None` if `at >= len`.
    /// The handle can later be passed to [`List::splice`].
    pub fn get_node(&self, at: usize) -> Option<NodeHandle<T>> {
        self.resolve(at).map(|resolved| NodeHandle::new(resolved.node))
    }

    /// Detaches the node named by `handle` and returns it without releasing
    /// it, so it can be linked into this or another list again.
    ///
    /// If the cursor rests on the node, it moves to the previous node, or
    /// to the next one when the node is the front. Otherwise the cursor
    /// keeps its node, except when the node's index cannot be told in *O*(1)
    /// (neither end of the list), in which case the cursor returns to the
    /// front.
    ///
    /// # Safety
    ///
    /// `handle` must name a node that is currently linked into this list.
    /// Splicing a node of another list, or one already spliced, makes both
    /// lists ill-formed.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut from = List::from_iter(['a', 'b', 'c']);
    /// let mut to = List::new();
    ///
    /// let handle = from.get_node(1).unwrap();
    /// // SAFETY: `handle` was just taken from `from`.
    /// let node = unsafe { from.splice(handle) };
    /// to.append(node);
    ///
    /// assert_eq!(from, List::from_iter(['a', 'c']));
    /// assert_eq!(to, List::from_iter(['b']));
    /// ```
    pub unsafe fn splice(&mut self, handle: NodeHandle<T>) -> Box<Node<T>> {
        let node = handle.ptr;
        let at = if self.first == Some(node) {
            Some(0)
        } else if self.last == Some(node) {
            Some(self.len - 1)
        } else {
            None
        };
        self.unlink(node, at)
    }

    /// Detaches the node at index `at` and returns it without releasing it,
    /// or returns `None` if `at >= len`.
    ///
    /// The cursor keeps its node if it rests elsewhere; if it rests on the
    /// spliced node, it moves to the previous node (or the next one, at the
    /// front).
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// let node = list.splice_at(0).unwrap();
    /// assert_eq!(node.element(), &1);
    /// assert!(list.splice_at(2).is_none());
    ///
    /// // Put it back at the end.
    /// list.append(node);
    /// assert_eq!(list, List::from_iter([2, 3, 1]));
    /// ```
    pub fn splice_at(&mut self, at: usize) -> Option<Box<Node<T>>> {
        let resolved = self.resolve(at)?;
        // SAFETY: `resolved.node` is linked into this list at `at`.
        Some(unsafe { self.unlink(resolved.node, Some(at)) })
    }

    /// Removes the element at index `at` and returns it, or returns `None`
    /// if `at >= len`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time for `at` near the
    /// cursor or either end, *O*(*n*) otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(1);
    /// list.push_front(2);
    /// list.push_front(3);
    ///
    /// assert_eq!(list.remove(1), Some(2));
    /// assert_eq!(list.remove(0), Some(3));
    /// assert_eq!(list.remove(1), None);
    /// assert_eq!(list.remove(0), Some(1));
    /// assert!(list.is_empty());
    /// ```
    pub fn remove(&mut self, at: usize) -> Option<T> {
        self.splice_at(at).map(Node::into_element)
    }

    /// Adds an element first in the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// assert_eq!(list.front().unwrap(), &2);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front().unwrap(), &1);
    /// ```
    pub fn push_front(&mut self, element: T) {
        self.link_front(Node::new(element));
    }

    /// Appends an element to the back of the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let mut list = List::new();
    /// list.push_back(1);
    /// list.push_back(3);
    /// assert_eq!(list.back().unwrap(), &3);
    /// ```
    pub fn push_back(&mut self, element: T) {
        self.link_back(Node::new(element));
    }

    /// Removes the first element and returns it, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.pop_front(), None);
    ///
    /// list.push_front(1);
    /// list.push_front(3);
    /// assert_eq!(list.pop_front(), Some(3));
    /// assert_eq!(list.pop_front(), Some(1));
    /// assert_eq!(list.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        let first = self.first?;
        // SAFETY: `first` is linked into this list at index 0.
        Some(unsafe { self.unlink(first, Some(0)) }.into_element())
    }

    /// Removes the last element and returns it, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.pop_back(), None);
    /// list.push_back(1);
    /// list.push_back(3);
    /// assert_eq!(list.pop_back(), Some(3));
    /// ```
    pub fn pop_back(&mut self) -> Option<T> {
        let last = self.last?;
        // SAFETY: `last` is linked into this list at index `len - 1`.
        Some(unsafe { self.unlink(last, Some(self.len - 1)) }.into_element())
    }

    /// Provides a forward iterator. Iterating does not move the cursor.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_back(0);
    /// list.push_back(1);
    /// list.push_back(2);
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Provides a forward iterator with mutable references.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_back(0);
    /// list.push_back(1);
    /// list.push_back(2);
    ///
    /// for element in list.iter_mut() {
    ///     *element += 10;
    /// }
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&10));
    /// assert_eq!(iter.next(), Some(&11));
    /// assert_eq!(iter.next(), Some(&12));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }
}

impl<T: Debug> Debug for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

unsafe impl<T: Send> Send for List<T> {}

// Ensure that `List` and its read-only iterators are covariant in their type parameters.
#[allow(dead_code)]
fn assert_covariance() {
    fn a<'a>(x: List<&'static str>) -> List<&'a str> {
        x
    }
    fn b<'i, 'a>(x: Iter<'i, &'static str>) -> Iter<'i, &'a str> {
        x
    }
    fn c<'a>(x: IntoIter<&'static str>) -> IntoIter<&'a str> {
        x
    }
}
