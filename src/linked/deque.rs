use std::fmt::{self, Debug, Display, Formatter};

use super::list::{IntoIter, Iter, LinkedList};
use crate::util::error::IndexOutOfBounds;

/// A double-ended queue. Elements can be pushed and popped at either end in constant time.
///
/// The Deque is a thin adapter over [`LinkedList`]: it keeps the list's end operations and its
/// indexed reads, and drops interior insertion and removal.
#[derive(PartialEq, Eq, Hash, Default)]
pub struct Deque<T> {
    list: LinkedList<T>,
}

impl<T> Deque<T> {
    /// Creates a new Deque with no elements.
    pub const fn new() -> Deque<T> {
        Deque {
            list: LinkedList::new(),
        }
    }

    /// Returns the number of elements in the Deque.
    pub const fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns true if the Deque contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Adds the provided element to the front of the Deque.
    pub fn push_front(&mut self, value: T) {
        self.list.push_front(value);
    }

    /// Adds the provided element to the back of the Deque.
    pub fn push_back(&mut self, value: T) {
        self.list.push_back(value);
    }

    /// Removes the first element and returns it, if the Deque isn't empty.
    pub fn pop_front(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    /// Removes the last element and returns it, if the Deque isn't empty.
    pub fn pop_back(&mut self) -> Option<T> {
        self.list.pop_back()
    }

    /// Returns a reference to the first element, if it exists.
    pub fn front(&self) -> Option<&T> {
        self.list.front()
    }

    /// Returns a mutable reference to the first element, if it exists.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.list.front_mut()
    }

    /// Returns a reference to the last element, if it exists.
    pub fn back(&self) -> Option<&T> {
        self.list.back()
    }

    /// Returns a mutable reference to the last element, if it exists.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.list.back_mut()
    }

    /// Returns a reference to the element at the provided `index`, seeking from the nearer end.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the Deque.
    pub fn get(&self, index: usize) -> &T {
        self.list.get(index)
    }

    /// Returns a reference to the element at the provided `index`, returning an [`Err`] on a
    /// failure rather than panicking.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.list.try_get(index)
    }

    /// Removes every element from the Deque.
    pub fn clear(&mut self) {
        self.list.clear();
    }

    /// Returns an iterator over the Deque's elements, front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        self.list.iter()
    }
}

impl<T: Eq> Deque<T> {
    /// Returns true if any element of the Deque is equal to `item`.
    pub fn contains(&self, item: &T) -> bool {
        self.list.contains(item)
    }
}

impl<T> IntoIterator for Deque<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    /// Converts the Deque into an iterator which yields elements front to back.
    fn into_iter(self) -> Self::IntoIter {
        self.list.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Deque<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> FromIterator<T> for Deque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Deque {
            list: LinkedList::from_iter(iter),
        }
    }
}

impl<T: Debug> Debug for Deque<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Debug> Display for Deque<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.list, f)
    }
}
