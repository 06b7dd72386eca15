use std::fmt::{self, Debug, Formatter};

use crate::tree::error::CursorInvalidated;

use super::{AvlTree, Link};

/// A detached in-order position over an [`AvlTree`].
///
/// Unlike [`Iter`], a cursor doesn't borrow the tree, so the tree remains usable while the cursor
/// is held. The price is that every read takes the tree as an argument and re-validates it: the
/// cursor remembers which tree it was created from and how many mutations that tree had seen, and
/// refuses to read anything once either check fails. Stale cursors therefore degrade into
/// [`CursorInvalidated`] errors instead of dangling reads.
///
/// [`Iter`]: super::Iter
pub struct Cursor<T> {
    tree_id: u64,
    version: u64,
    next: Link<T>,
}

impl<T> Cursor<T> {
    pub(crate) fn new(tree: &AvlTree<T>) -> Cursor<T> {
        Cursor {
            tree_id: tree.id,
            version: tree.version,
            next: tree.root.map(|root| root.leftmost()),
        }
    }

    /// Returns the next element in ascending order, or None once every element has been read.
    ///
    /// Fails if the provided tree is not the one this cursor was created from, or if it has been
    /// structurally mutated since.
    pub fn next<'t>(&mut self, tree: &'t AvlTree<T>) -> Result<Option<&'t T>, CursorInvalidated> {
        if tree.id != self.tree_id || tree.version != self.version {
            return Err(CursorInvalidated);
        }
        match self.next {
            None => Ok(None),
            Some(node) => {
                // The id and version match, so the node is still linked into this exact tree.
                self.next = node.next_in_order();
                Ok(Some(node.element()))
            },
        }
    }
}

impl<T> Clone for Cursor<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<T> {}

impl<T> Debug for Cursor<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("tree_id", &self.tree_id)
            .field("version", &self.version)
            .finish_non_exhaustive()
    }
}
