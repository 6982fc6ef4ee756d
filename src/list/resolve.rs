use crate::list::{List, Node};
use std::ptr::NonNull;
use tracing::trace;

/// The node a resolution starts walking from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Anchor {
    Cursor,
    Front,
    Back,
}

/// The outcome of [`List::resolve`].
pub(crate) struct Resolved<T> {
    pub(crate) node: NonNull<Node<T>>,
    pub(crate) anchor: Anchor,
    /// Number of links followed from the anchor.
    pub(crate) steps: usize,
}

impl<T> Resolved<T> {
    fn at_anchor(node: NonNull<Node<T>>, anchor: Anchor) -> Self {
        Self {
            node,
            anchor,
            steps: 0,
        }
    }
}

impl<T> List<T> {
    /// Locate the node at index `at`, or return `None` if `at >= len`.
    ///
    /// The walk starts from whichever of the cursor, the front or the back
    /// is closest to `at`. Ties go to the cursor first, then to the front.
    /// A walk leaves the cursor on the resolved node, so the next access
    /// to a neighboring index costs a single step.
    ///
    /// The front and back are returned without moving the cursor.
    pub(crate) fn resolve(&self, at: usize) -> Option<Resolved<T>> {
        if at >= self.len {
            return None;
        }
        let cursor = self.cursor_node()?;
        let cursor_index = self.cursor_index.get();

        if at == cursor_index {
            return Some(Resolved::at_anchor(cursor, Anchor::Cursor));
        }
        if at == 0 {
            return Some(Resolved::at_anchor(self.first?, Anchor::Front));
        }
        if at == self.len - 1 {
            return Some(Resolved::at_anchor(self.last?, Anchor::Back));
        }

        let from_cursor = if at > cursor_index {
            at - cursor_index
        } else {
            cursor_index - at
        };
        let from_front = at;
        let from_back = self.len - 1 - at;

        let (anchor, start, steps, forward) =
            if from_cursor <= from_front && from_cursor <= from_back {
                (Anchor::Cursor, cursor, from_cursor, at > cursor_index)
            } else if from_front <= from_back {
                (Anchor::Front, self.first?, from_front, true)
            } else {
                (Anchor::Back, self.last?, from_back, false)
            };

        // SAFETY: `start` is linked into this list and `at` is in bounds, so
        // `steps` links exist in the chosen direction.
        let node = unsafe { walk(start, steps, forward)? };
        trace!(at, ?anchor, steps, "resolved");

        self.set_cursor(node, at);
        Some(Resolved {
            node,
            anchor,
            steps,
        })
    }
}

/// Follow `steps` links from `node`, forward along `next` or backward along
/// `prev`. Returns `None` if the chain ends early.
///
/// # Safety
///
/// `node` and every node reached from it must be live.
unsafe fn walk<T>(
    mut node: NonNull<Node<T>>,
    steps: usize,
    forward: bool,
) -> Option<NonNull<Node<T>>> {
    for _ in 0..steps {
        let current = node.as_ref();
        node = if forward { current.next } else { current.prev }?;
    }
    Some(node)
}
