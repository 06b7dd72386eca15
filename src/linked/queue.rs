use std::fmt::{self, Debug, Display, Formatter};

use super::list::{IntoIter, Iter, LinkedList};
use crate::interface::ElementInterface;

/// A first-in first-out queue which optionally orders its elements by priority.
///
/// A Queue carries an [`ElementInterface`]. While the interface's priority slot is unset, `push`
/// appends to the back and the Queue behaves as plain FIFO. Once the slot is set, each pushed
/// element is inserted ahead of every queued element with a strictly lower priority; elements of
/// equal priority keep their arrival order.
pub struct Queue<T> {
    list: LinkedList<T>,
    interface: ElementInterface<T>,
}

impl<T> Queue<T> {
    /// Creates a new Queue with no elements and an empty interface.
    pub const fn new() -> Queue<T> {
        Queue {
            list: LinkedList::new(),
            interface: ElementInterface::new(),
        }
    }

    /// Creates a new Queue with no elements which consults the provided interface.
    pub const fn with_interface(interface: ElementInterface<T>) -> Queue<T> {
        Queue {
            list: LinkedList::new(),
            interface,
        }
    }

    /// Returns a copy of the Queue's interface.
    pub const fn interface(&self) -> ElementInterface<T> {
        self.interface
    }

    /// Replaces the Queue's interface. The replacement applies to subsequent pushes only; the
    /// order of elements already queued is left as it is.
    pub fn set_interface(&mut self, interface: ElementInterface<T>) {
        self.interface = interface;
    }

    /// Returns the number of elements in the Queue.
    pub const fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns true if the Queue contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Adds the provided element to the Queue.
    ///
    /// Without a priority callback this appends to the back. With one, the element is inserted
    /// ahead of the first queued element whose priority is strictly lower, so equal priorities
    /// dequeue in arrival order.
    pub fn push(&mut self, value: T) {
        match self.interface.try_priority() {
            Ok(priority) => {
                let index = self.list.iter().position(|queued| priority(queued, &value).is_lt());
                match index {
                    Some(index) => self.list.insert(index, value),
                    None => self.list.push_back(value),
                }
            },
            Err(_) => self.list.push_back(value),
        }
    }

    /// Removes the element at the front of the Queue and returns it, if the Queue isn't empty.
    pub fn pop(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    /// Returns a reference to the element at the front of the Queue, if it exists.
    pub fn peek(&self) -> Option<&T> {
        self.list.front()
    }

    /// Removes every element from the Queue. The interface is retained.
    pub fn clear(&mut self) {
        self.list.clear();
    }

    /// Returns an iterator over the Queue's elements, front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        self.list.iter()
    }
}

impl<T> IntoIterator for Queue<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    /// Converts the Queue into an iterator which yields elements front to back.
    fn into_iter(self) -> Self::IntoIter {
        self.list.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Queue::new();
        for item in iter.into_iter() {
            queue.push(item);
        }
        queue
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Queue::new()
    }
}

impl<T: PartialEq> PartialEq for Queue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.list == other.list
    }
}

impl<T: Eq> Eq for Queue<T> {}

impl<T: Debug> Debug for Queue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Debug> Display for Queue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.list, f)
    }
}
