use std::fmt::{self, Debug, Display, Formatter};

use super::list::{IntoIter, Iter, LinkedList};

/// A last-in first-out stack. Elements are pushed onto and popped from the top.
///
/// The stack is an adapter over [`LinkedList`] which only ever touches the front of the list, so
/// every operation other than `clear` runs in constant time.
#[derive(PartialEq, Eq, Hash, Default)]
pub struct Stack<T> {
    list: LinkedList<T>,
}

impl<T> Stack<T> {
    /// Creates a new Stack with no elements.
    pub const fn new() -> Stack<T> {
        Stack {
            list: LinkedList::new(),
        }
    }

    /// Returns the number of elements in the Stack.
    pub const fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns true if the Stack contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Pushes the provided element onto the top of the Stack.
    pub fn push(&mut self, value: T) {
        self.list.push_front(value);
    }

    /// Removes the top element and returns it, if the Stack isn't empty.
    pub fn pop(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    /// Returns a reference to the top element, if it exists.
    pub fn peek(&self) -> Option<&T> {
        self.list.front()
    }

    /// Returns a mutable reference to the top element, if it exists.
    pub fn peek_mut(&mut self) -> Option<&mut T> {
        self.list.front_mut()
    }

    /// Removes every element from the Stack.
    pub fn clear(&mut self) {
        self.list.clear();
    }

    /// Returns an iterator over the Stack's elements, from the top down.
    pub fn iter(&self) -> Iter<'_, T> {
        self.list.iter()
    }
}

impl<T> IntoIterator for Stack<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    /// Converts the Stack into an iterator which yields elements from the top down.
    fn into_iter(self) -> Self::IntoIter {
        self.list.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> FromIterator<T> for Stack<T> {
    /// Collects an iterator by pushing each element in turn, so the final element ends up on top.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Stack::new();
        for item in iter.into_iter() {
            stack.push(item);
        }
        stack
    }
}

impl<T: Debug> Debug for Stack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Debug> Display for Stack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.list, f)
    }
}
