use std::iter::FusedIterator;

use crate::linked::Stack;

use super::{BinarySearchTree, Branch, Node};

impl<T> IntoIterator for BinarySearchTree<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { tree: self }
    }
}

/// A consuming in-order iterator. Pays a descent to the minimum for every element, but avoids
/// threading the tree onto an auxiliary list.
pub struct IntoIter<T> {
    tree: BinarySearchTree<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.tree.take_min()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.tree.len(), Some(self.tree.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.tree.take_max()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        // Unconsumed elements were already handed over to the iterator, so the tree's drop hook
        // no longer applies to them.
        self.tree.clear_shallow();
    }
}

impl<'a, T> IntoIterator for &'a BinarySearchTree<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        let mut iter = Iter {
            stack: Stack::new(),
            remaining: self.len(),
        };
        iter.descend_left(&self.root);
        iter
    }
}

/// A borrowed in-order iterator holding the path to the current element on an explicit stack.
pub struct Iter<'a, T> {
    stack: Stack<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    fn descend_left(&mut self, branch: &'a Branch<T>) {
        let mut branch = branch;
        while let Some(node) = branch.0.as_deref() {
            self.stack.push(node);
            branch = &node.left;
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.remaining -= 1;
        self.descend_left(&node.right);
        Some(&node.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> FusedIterator for Iter<'a, T> {}
