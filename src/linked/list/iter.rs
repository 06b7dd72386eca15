use std::iter::FusedIterator;
use std::marker::PhantomData;

use ListState::*;

use super::{Link, LinkedList, ListState};

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            list: self,
        }
    }
}

pub struct IntoIter<T> {
    // There is no point rewriting all of this when the iterator can just hold the list and call
    // pop front/back.
    pub(crate) list: LinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.pop_back()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.list.len()
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        let (front, back, remaining) = ends(&self.state);
        Iter {
            front,
            back,
            remaining,
            _phantom: PhantomData,
        }
    }
}

/// Walks the nodes from `front` and `back` inwards. `remaining` counts the nodes left between the
/// two ends, inclusive, so that they never cross.
pub struct Iter<'a, T> {
    front: Link<T>,
    back: Link<T>,
    remaining: usize,
    _phantom: PhantomData<&'a T>,
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
            self.front = *node.next();
        }

        Some(node.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
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
            self.back = *node.prev();
        }

        Some(node.value())
    }
}

impl<'a, T> FusedIterator for Iter<'a, T> {}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<'a, T> IntoIterator for &'a mut LinkedList<T> {
    type Item = &'a mut T;

    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        let (front, back, remaining) = ends(&self.state);
        IterMut {
            front,
            back,
            remaining,
            _phantom: PhantomData,
        }
    }
}

/// The mutable counterpart of [`Iter`]. The ends only ever move inwards, so each node is visited
/// at most once and the yielded references never alias.
pub struct IterMut<'a, T> {
    front: Link<T>,
    back: Link<T>,
    remaining: usize,
    _phantom: PhantomData<&'a mut T>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

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
            self.front = *node.next();
        }

        Some(node.value_mut())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
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
            self.back = *node.prev();
        }

        Some(node.value_mut())
    }
}

impl<'a, T> FusedIterator for IterMut<'a, T> {}

impl<'a, T> ExactSizeIterator for IterMut<'a, T> {
    fn len(&self) -> usize {
        self.remaining
    }
}

fn ends<T>(state: &ListState<T>) -> (Link<T>, Link<T>, usize) {
    match state {
        Empty => (None, None, 0),
        Full(contents) => (
            Some(contents.head),
            Some(contents.tail),
            contents.len.get(),
        ),
    }
}
