use std::fmt::{self, Debug, Formatter, Write};

use crate::interface::{DropFn, ElementInterface};
use crate::linked::Stack;
use crate::tree::error::InsertError;
use crate::tree::traversal::Traversal;

use super::{Branch, Iter, Node};

/// An unbalanced binary search tree of unique elements, ordered by the compare callback of its
/// [`ElementInterface`].
///
/// Lookups, insertions and removals are O(log n) only while the input stays well shuffled; sorted
/// input degrades the tree into a linked list. [`AvlTree`] pays a little extra bookkeeping per
/// mutation to rule that shape out, and is the better default.
///
/// [`AvlTree`]: crate::tree::AvlTree
pub struct BinarySearchTree<T> {
    pub(crate) root: Branch<T>,
    pub(crate) len: usize,
    pub(crate) interface: ElementInterface<T>,
}

impl<T> BinarySearchTree<T> {
    /// Creates an empty tree which orders its elements through the provided interface.
    pub const fn new(interface: ElementInterface<T>) -> BinarySearchTree<T> {
        BinarySearchTree {
            root: Branch(None),
            len: 0,
            interface,
        }
    }

    /// Creates an empty tree ordered by the element type's own [`Ord`] implementation.
    pub fn ordered() -> BinarySearchTree<T>
    where
        T: Ord,
    {
        BinarySearchTree::new(ElementInterface::ordered())
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a copy of the tree's interface.
    pub const fn interface(&self) -> ElementInterface<T> {
        self.interface
    }

    /// Replaces the tree's interface, which takes effect for all subsequent operations.
    ///
    /// The new compare callback must order elements consistently with the one the tree was built
    /// with, otherwise existing elements become unreachable.
    pub fn set_interface(&mut self, interface: ElementInterface<T>) {
        self.interface = interface;
    }

    /// Inserts the provided element, rejecting it if an equal element is already present.
    ///
    /// # Panics
    ///
    /// Panics if the interface has no compare callback.
    pub fn insert(&mut self, element: T) -> Result<(), InsertError<T>> {
        let compare = self.interface.compare();
        self.root.insert(element, compare)?;
        self.len += 1;
        Ok(())
    }

    /// # Panics
    ///
    /// Panics if the interface has no compare callback.
    pub fn contains(&self, element: &T) -> bool {
        self.root.contains(element, self.interface.compare())
    }

    pub fn min(&self) -> Option<&T> {
        self.root.min()
    }

    pub fn max(&self) -> Option<&T> {
        self.root.max()
    }

    /// Removes the element equal to the provided one and destroys it, passing it to the
    /// interface's drop hook if one is set. Returns false without mutating if no equal element is
    /// present.
    ///
    /// # Panics
    ///
    /// Panics if the interface has no compare callback.
    pub fn remove(&mut self, element: &T) -> bool {
        match self.take(element) {
            Some(removed) => {
                self.release(removed);
                true
            },
            None => false,
        }
    }

    /// Removes the element equal to the provided one and hands it back untouched, bypassing the
    /// drop hook.
    ///
    /// # Panics
    ///
    /// Panics if the interface has no compare callback.
    pub fn take(&mut self, element: &T) -> Option<T> {
        let taken = self.root.take(element, self.interface.compare());
        if taken.is_some() {
            self.len -= 1;
        }
        taken
    }

    pub fn take_min(&mut self) -> Option<T> {
        let taken = self.root.take_min();
        if taken.is_some() {
            self.len -= 1;
        }
        taken
    }

    pub fn take_max(&mut self) -> Option<T> {
        let taken = self.root.take_max();
        if taken.is_some() {
            self.len -= 1;
        }
        taken
    }

    /// Removes every element, passing each to the interface's drop hook if one is set.
    pub fn clear(&mut self) {
        let hook = self.interface.try_drop().ok();
        clear_subtree(self.root.0.take(), hook);
        self.len = 0;
    }

    /// Removes every element without invoking the drop hook.
    pub fn clear_shallow(&mut self) {
        clear_subtree(self.root.0.take(), None);
        self.len = 0;
    }

    /// Calls the provided closure on a reference to every element, in the given order.
    pub fn for_each(&self, order: Traversal, mut visit: impl FnMut(&T)) {
        self.root.for_each(order, &mut visit);
    }

    /// Writes every element in the given order through the interface's display callback,
    /// space-separated.
    ///
    /// # Panics
    ///
    /// Panics if the interface has no display callback.
    pub fn write_traversal(&self, order: Traversal, out: &mut dyn Write) -> fmt::Result {
        let display = self.interface.display();
        let mut separate = false;
        self.root.write_traversal(order, display, &mut separate, out)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    fn release(&self, element: T) {
        match self.interface.try_drop() {
            Ok(hook) => hook(element),
            Err(_) => drop(element),
        }
    }
}

/// Tears the subtree down iteratively. A degenerate chain would otherwise recurse once per
/// element and overflow the call stack.
fn clear_subtree<T>(root: Option<Box<Node<T>>>, hook: Option<DropFn<T>>) {
    let mut work = Stack::new();
    if let Some(node) = root {
        work.push(node);
    }
    while let Some(node) = work.pop() {
        let mut node = *node;
        if let Some(left) = node.left.0.take() {
            work.push(left);
        }
        if let Some(right) = node.right.0.take() {
            work.push(right);
        }
        if let Some(hook) = hook {
            hook(node.element);
        }
    }
}

impl<T> Drop for BinarySearchTree<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Ord> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::ordered()
    }
}

impl<T: Ord> FromIterator<T> for BinarySearchTree<T> {
    /// Builds a tree ordered by [`Ord`], silently skipping duplicate elements.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = BinarySearchTree::ordered();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for BinarySearchTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            let _ = self.insert(element);
        }
    }
}

impl<T: PartialEq> PartialEq for BinarySearchTree<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for BinarySearchTree<T> {}

impl<T: Debug> Debug for BinarySearchTree<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "BinarySearchTree (len: {}):\n{:?}", self.len, self.root)
    }
}
