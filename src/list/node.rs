use std::alloc::{self, Layout};
use std::fmt;
use std::marker::PhantomData;
use std::ptr::NonNull;

/// A heap-allocated cell of a [`List`], carrying one element.
///
/// Nodes are created detached, handed to a list with [`List::append`],
/// [`List::prepend`] or [`List::insert`], and handed back by
/// [`List::splice`] or [`List::splice_at`]. A node belongs to at most one
/// list at a time.
///
/// While linked, `next` *owns* the successor (the list releases its nodes
/// by following `next` from the first node), and `prev` is a plain
/// back-reference. A detached node has both links cleared.
///
/// # Examples
///
/// ```
/// use cursor_list::{List, Node};
///
/// let mut list = List::new();
/// list.append(Node::new('a'));
/// list.append(Node::new('c'));
/// assert!(list.insert(Node::new('b'), 1).is_ok());
///
/// let node = list.splice_at(1).unwrap();
/// assert_eq!(node.element(), &'b');
/// assert_eq!(list.len(), 2);
/// ```
///
/// [`List`]: crate::List
/// [`List::append`]: crate::List::append
/// [`List::prepend`]: crate::List::prepend
/// [`List::insert`]: crate::List::insert
/// [`List::splice`]: crate::List::splice
/// [`List::splice_at`]: crate::List::splice_at
pub struct Node<T> {
    pub(crate) next: Option<NonNull<Node<T>>>,
    pub(crate) prev: Option<NonNull<Node<T>>>,
    pub(crate) element: T,
}

impl<T> Node<T> {
    /// Allocate a detached node holding `element`.
    ///
    /// Like any [`Box`], this aborts if the allocator is out of memory. Use
    /// [`Node::try_new`] to observe the failure instead.
    #[inline]
    pub fn new(element: T) -> Box<Self> {
        Box::new(Self::detached(element))
    }

    /// Allocate a detached node holding `element`, or return `None` if the
    /// allocation fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::Node;
    ///
    /// let node = Node::try_new(7_u64).expect("allocation failed");
    /// assert_eq!(node.into_element(), 7);
    /// ```
    #[inline]
    pub fn try_new(element: T) -> Option<Box<Self>> {
        try_box(Self::detached(element))
    }

    fn detached(element: T) -> Self {
        Self {
            next: None,
            prev: None,
            element,
        }
    }

    /// Returns a reference to the carried element.
    #[inline]
    pub fn element(&self) -> &T {
        &self.element
    }

    /// Returns a mutable reference to the carried element.
    #[inline]
    pub fn element_mut(&mut self) -> &mut T {
        &mut self.element
    }

    /// Consumes the node, returning its element.
    #[inline]
    pub fn into_element(self: Box<Self>) -> T {
        self.element
    }

    pub(crate) fn is_detached(&self) -> bool {
        self.next.is_none() && self.prev.is_none()
    }
}

impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Node").field(&self.element).finish()
    }
}

/// An opaque reference to a node that is currently linked into a list.
///
/// Obtained from [`List::get_node`] and consumed by [`List::splice`]. A
/// handle does not borrow the list, so it stays `Copy` across later
/// operations; it is only meaningful while the node it names is still
/// linked into the list it came from.
///
/// [`List::get_node`]: crate::List::get_node
/// [`List::splice`]: crate::List::splice
pub struct NodeHandle<T> {
    pub(crate) ptr: NonNull<Node<T>>,
    _marker: PhantomData<*const Node<T>>,
}

impl<T> NodeHandle<T> {
    pub(crate) fn new(ptr: NonNull<Node<T>>) -> Self {
        Self {
            ptr,
            _marker: PhantomData,
        }
    }
}

impl<T> Clone for NodeHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeHandle<T> {}

impl<T> PartialEq for NodeHandle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr == other.ptr
    }
}

impl<T> Eq for NodeHandle<T> {}

impl<T> fmt::Debug for NodeHandle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NodeHandle").field(&self.ptr).finish()
    }
}

/// Move `value` onto the heap, returning `None` instead of aborting when the
/// global allocator fails.
pub(crate) fn try_box<T>(value: T) -> Option<Box<T>> {
    let layout = Layout::new::<T>();
    if layout.size() == 0 {
        // Zero-sized boxes never touch the allocator.
        return Some(Box::new(value));
    }
    // SAFETY: `layout` has a non-zero size.
    let ptr = NonNull::new(unsafe { alloc::alloc(layout) }.cast::<T>())?;
    // SAFETY: `ptr` was just allocated with the layout of `T`, so it is valid
    // for a write, and a `Box<T>` built from it is freed with the same layout.
    unsafe {
        ptr.as_ptr().write(value);
        Some(Box::from_raw(ptr.as_ptr()))
    }
}

#[cfg(test)]
mod tests {
    use super::{try_box, Node};

    #[test]
    fn node_starts_detached() {
        let node = Node::new(5);
        assert!(node.is_detached());
        assert_eq!(node.element(), &5);

        let node = Node::try_new(String::from("five")).unwrap();
        assert!(node.is_detached());
        assert_eq!(node.into_element(), "five");
    }

    #[test]
    fn node_element_mut() {
        let mut node = Node::new(vec![1, 2]);
        node.element_mut().push(3);
        assert_eq!(node.into_element(), vec![1, 2, 3]);
    }

    #[test]
    fn try_box_zero_sized() {
        #[derive(Debug, PartialEq)]
        struct Unit;
        assert_eq!(try_box(Unit).as_deref(), Some(&Unit));
        assert_eq!(try_box([0_u8; 0]).map(|b| b.len()), Some(0));
    }

    #[test]
    fn try_box_sized() {
        let boxed = try_box([7_u64; 16]).unwrap();
        assert!(boxed.iter().all(|&x| x == 7));
    }
}
