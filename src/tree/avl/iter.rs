use std::iter::FusedIterator;
use std::marker::PhantomData;

use super::{AvlTree, Link};

impl<T> IntoIterator for AvlTree<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            tree: self,
        }
    }
}

pub struct IntoIter<T> {
    // There is no point rewriting the removal logic when the iterator can just hold the tree and
    // take from either end.
    pub(crate) tree: AvlTree<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.tree.take_min()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.tree.take_max()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.tree.len()
    }
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        // Unconsumed elements were already handed over to the iterator, so the tree's drop hook
        // no longer applies to them.
        self.tree.clear_shallow();
    }
}

impl<'a, T> IntoIterator for &'a AvlTree<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            front: self.root.map(|root| root.leftmost()),
            back: self.root.map(|root| root.rightmost()),
            remaining: self.len,
            _phantom: PhantomData,
        }
    }
}

/// A borrowed in-order iterator which climbs between consecutive elements over the parent links.
/// `remaining` tracks how many elements are left between the two ends so that they never walk
/// past each other.
pub struct Iter<'a, T> {
    pub(crate) front: Link<T>,
    pub(crate) back: Link<T>,
    pub(crate) remaining: usize,
    pub(crate) _phantom: PhantomData<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.front?;
        self.remaining -= 1;
        if self.remaining == 0 {
            self.front = None;
            self.back = None;
        } else {
            self.front = node.next_in_order();
        }
        Some(node.element())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.back?;
        self.remaining -= 1;
        if self.remaining == 0 {
            self.front = None;
            self.back = None;
        } else {
            self.back = node.prev_in_order();
        }
        Some(node.element())
    }
}

impl<'a, T> FusedIterator for Iter<'a, T> {}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {
    fn len(&self) -> usize {
        self.remaining
    }
}
