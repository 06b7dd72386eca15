use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::mem;
use std::ops::{Index, IndexMut};

use derive_more::IsVariant;

use super::{Iter, IterMut, Length, Node, NodePtr, ONE};
#[doc(inline)]
pub use crate::util::error::{CapacityOverflow, IndexOrCapOverflow, IndexOutOfBounds};
use crate::util::result::ResultExtension;

/// A list with links in both directions.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the LinkedList.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front/back` | `O(1)` |
/// | `push_front/back` | `O(1)` |
/// | `pop_front/back` | `O(1)` |
/// | `get` | `O(min(i, n-i))` |
/// | `insert` | `O(min(i, n-i))` |
/// | `remove` | `O(min(i, n-i))` |
/// | `replace` | `O(min(i, n-i))` |
/// | `append` | `O(1)` |
/// | `contains` | `O(n)` |
///
/// As a general note, modern computer architecture favours contiguous collections, so the `O(i)`
/// and `O(n)` methods here consist primarily of cache misses. This list earns its keep as the
/// substrate for [`Stack`], [`Queue`] and [`Deque`], whose operations never leave the ends.
///
/// [`Stack`]: crate::linked::Stack
/// [`Queue`]: crate::linked::Queue
/// [`Deque`]: crate::linked::Deque
#[derive(PartialEq, Eq, Hash)]
pub struct LinkedList<T> {
    pub(crate) state: ListState<T>,
    pub(crate) _phantom: PhantomData<T>,
}

#[derive(Default, PartialEq, Eq, Hash, IsVariant)]
pub(crate) enum ListState<T> {
    #[default]
    Empty,
    Full(ListContents<T>),
}

use ListState::*;

pub(crate) struct ListContents<T> {
    pub len: Length,
    pub head: NodePtr<T>,
    pub tail: NodePtr<T>,
}

impl<T> LinkedList<T> {
    /// Creates a new LinkedList with no elements.
    pub const fn new() -> LinkedList<T> {
        LinkedList {
            state: Empty,
            _phantom: PhantomData,
        }
    }

    /// Returns the length of the LinkedList.
    pub const fn len(&self) -> usize {
        self.state.len()
    }

    /// Returns true if the LinkedList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Returns a reference to the first element in the list, if it exists.
    pub fn front(&self) -> Option<&T> {
        match self.state {
            Empty => None,
            Full(ListContents { head, .. }) => Some(head.value()),
        }
    }

    /// Returns a mutable reference to the first element in the list, if it exists.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        match self.state {
            Empty => None,
            Full(ListContents { head, .. }) => Some(head.value_mut()),
        }
    }

    /// Returns a reference to the last element in the list, if it exists.
    pub fn back(&self) -> Option<&T> {
        match self.state {
            Empty => None,
            Full(ListContents { tail, .. }) => Some(tail.value()),
        }
    }

    /// Returns a mutable reference to the last element in the list, if it exists.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        match self.state {
            Empty => None,
            Full(ListContents { tail, .. }) => Some(tail.value_mut()),
        }
    }

    /// Adds the provided element to the front of the LinkedList.
    pub fn push_front(&mut self, value: T) {
        match &mut self.state {
            Empty => self.state = ListState::single(value),
            Full(contents) => contents.push_front(value),
        }
    }

    /// Adds the provided element to the back of the LinkedList.
    pub fn push_back(&mut self, value: T) {
        match &mut self.state {
            Empty => self.state = ListState::single(value),
            Full(contents) => contents.push_back(value),
        }
    }

    /// Removes the first element from the list and returns it, if the list isn't empty.
    pub fn pop_front(&mut self) -> Option<T> {
        match &mut self.state {
            Empty => None,
            Full(ListContents { len, head, .. }) => {
                let node = head.take_node();

                match len.checked_sub(1) {
                    Some(new_len) => {
                        // SAFETY: Previous length is greater than 1, so the first element is
                        // followed by at least one more.
                        let new_head = unsafe { node.next.unwrap_unchecked() };
                        *head = new_head;
                        *new_head.prev_mut() = None;
                        *len = new_len;
                    },
                    None => self.state = Empty,
                }

                Some(node.value)
            },
        }
    }

    /// Removes the last element from the list and returns it, if the list isn't empty.
    pub fn pop_back(&mut self) -> Option<T> {
        match &mut self.state {
            Empty => None,
            Full(ListContents { len, tail, .. }) => {
                let node = tail.take_node();

                match len.checked_sub(1) {
                    Some(new_len) => {
                        // SAFETY: Previous length is greater than 1, so the last element is
                        // preceded by at least one more.
                        let new_tail = unsafe { node.prev.unwrap_unchecked() };
                        *tail = new_tail;
                        *new_tail.next_mut() = None;
                        *len = new_len;
                    },
                    None => self.state = Empty,
                }

                Some(node.value)
            },
        }
    }

    /// Removes every element from the list.
    pub fn clear(&mut self) {
        match mem::take(&mut self.state) {
            Empty => {},
            Full(ListContents { head, .. }) => {
                let mut curr = Some(head);
                while let Some(ptr) = curr {
                    curr = *ptr.next();
                    // SAFETY: The walk has already moved past this node, so this is the last use
                    // of the pointer.
                    unsafe { ptr.drop_node() };
                }
            },
        }
    }

    /// Returns a reference to the element at the provided `index`, panicking on a failure.
    ///
    /// The same functionality can be achieved using the [`Index`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the LinkedList.
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    /// Returns a reference to the element at the provided `index`, returning an [`Err`] on a
    /// failure rather than panicking.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        Ok(self.checked_seek(index)?.value())
    }

    /// Returns a mutable reference to the element at the provided `index`, panicking on a failure.
    ///
    /// The same functionality can be achieved using the [`IndexMut`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the LinkedList.
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        self.try_get_mut(index).throw()
    }

    /// Returns a mutable reference to the element at the provided `index`, returning an [`Err`] on
    /// a failure rather than panicking.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        Ok(self.checked_seek(index)?.value_mut())
    }

    /// Inserts the provided element at `index`, shifting the elements after it towards the back.
    /// Inserting at `len` is equivalent to [`push_back`](LinkedList::push_back).
    ///
    /// # Panics
    /// Panics if `index` is greater than the length of the LinkedList.
    pub fn insert(&mut self, index: usize, value: T) {
        self.try_insert(index, value).throw()
    }

    /// Inserts the provided element at `index`, returning an [`Err`] on a failure rather than
    /// panicking.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), IndexOrCapOverflow> {
        match &mut self.state {
            Empty => {
                if index > 0 {
                    return Err(IndexOutOfBounds { index, len: 0 }.into());
                }
                self.state = ListState::single(value);
            },
            Full(contents) => {
                let len = contents.len.get();
                if index > len {
                    return Err(IndexOutOfBounds { index, len }.into());
                }

                if index == 0 {
                    contents.push_front(value);
                } else if index == len {
                    contents.push_back(value);
                } else {
                    let prev_node = contents.seek(index - 1);
                    contents.len = contents.len.checked_add(1).ok_or(CapacityOverflow)?;

                    let node = NodePtr::from_node(Node {
                        value,
                        prev: Some(prev_node),
                        next: *prev_node.next(),
                    });

                    // SAFETY: This branch only handles interior insertion, so the node before the
                    // given index is followed by at least one more.
                    unsafe {
                        *prev_node.next().unwrap_unchecked().prev_mut() = Some(node);
                    }
                    *prev_node.next_mut() = Some(node);
                }
            },
        }
        Ok(())
    }

    /// Removes the element at `index` and returns it, shifting the elements after it towards the
    /// front.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the LinkedList.
    pub fn remove(&mut self, index: usize) -> T {
        self.try_remove(index).throw()
    }

    /// Removes the element at `index` and returns it, returning an [`Err`] on a failure rather
    /// than panicking.
    pub fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        let contents = self.checked_contents_for_index_mut(index)?;
        match index {
            0 => {
                // SAFETY: contents was just checked to be valid for the provided index.
                Ok(unsafe { self.pop_front().unwrap_unchecked() })
            },
            val if val == contents.last_index() => {
                // SAFETY: contents was just checked to be valid for the provided index.
                Ok(unsafe { self.pop_back().unwrap_unchecked() })
            },
            val => {
                let node = contents.seek(val).take_node();

                // SAFETY: Interior nodes have both neighbours. The head and tail cases are
                // handled by the pop branches above.
                unsafe {
                    *node.prev.unwrap_unchecked().next_mut() = node.next;
                    *node.next.unwrap_unchecked().prev_mut() = node.prev;
                }
                // SAFETY: A list with one element would have matched the pop branches.
                contents.len = unsafe { contents.len.checked_sub(1).unwrap_unchecked() };

                Ok(node.value)
            },
        }
    }

    /// Replaces the element at `index` with the provided one, returning the displaced element.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the LinkedList.
    pub fn replace(&mut self, index: usize, new_value: T) -> T {
        self.try_replace(index, new_value).throw()
    }

    /// Replaces the element at `index` with the provided one, returning an [`Err`] on a failure
    /// rather than panicking.
    pub fn try_replace(&mut self, index: usize, new_value: T) -> Result<T, IndexOutOfBounds> {
        Ok(mem::replace(
            self.checked_seek(index)?.value_mut(),
            new_value,
        ))
    }

    /// Moves every element of `other` to the back of this list in constant time.
    ///
    /// # Panics
    /// Panics if the combined length overflows `usize`.
    pub fn append(&mut self, mut other: LinkedList<T>) {
        match &mut self.state {
            Empty => *self = other,
            Full(self_contents) => match mem::take(&mut other.state) {
                Empty => {},
                Full(other_contents) => {
                    self_contents.len = self_contents.len
                        .checked_add(other_contents.len.get())
                        .ok_or(CapacityOverflow)
                        .throw();

                    *self_contents.tail.next_mut() = Some(other_contents.head);
                    *other_contents.head.prev_mut() = Some(self_contents.tail);
                    self_contents.tail = other_contents.tail;
                },
            },
        }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }
}

impl<T: Eq> LinkedList<T> {
    /// Returns the index of the first element equal to `item`, if one exists.
    pub fn index_of(&self, item: &T) -> Option<usize> {
        for (index, element) in self.iter().enumerate() {
            if element == item {
                return Some(index);
            }
        }
        None
    }

    /// Returns true if any element of the list is equal to `item`.
    pub fn contains(&self, item: &T) -> bool {
        for i in self.iter() {
            if i == item {
                return true;
            }
        }
        false
    }
}

impl<T> LinkedList<T> {
    pub(crate) fn checked_seek(&self, index: usize) -> Result<NodePtr<T>, IndexOutOfBounds> {
        Ok(self.checked_contents_for_index(index)?.seek(index))
    }

    pub(crate) fn checked_contents_for_index(
        &self,
        index: usize,
    ) -> Result<&ListContents<T>, IndexOutOfBounds> {
        match &self.state {
            Empty => Err(IndexOutOfBounds { index, len: 0 }),
            Full(contents) => {
                let len = contents.len.get();
                if index < len {
                    Ok(contents)
                } else {
                    Err(IndexOutOfBounds { index, len })
                }
            },
        }
    }

    pub(crate) fn checked_contents_for_index_mut(
        &mut self,
        index: usize,
    ) -> Result<&mut ListContents<T>, IndexOutOfBounds> {
        match &mut self.state {
            Empty => Err(IndexOutOfBounds { index, len: 0 }),
            Full(contents) => {
                let len = contents.len.get();
                if index < len {
                    Ok(contents)
                } else {
                    Err(IndexOutOfBounds { index, len })
                }
            },
        }
    }

    #[allow(clippy::unwrap_used)]
    pub(crate) fn verify_double_links(&self) {
        match self.state {
            Empty => {},
            Full(ListContents { head, tail, .. }) => {
                let mut curr = head;
                while let Some(next) = curr.next() {
                    // UNWRAP: This needs to panic if prev is None.
                    assert!(next.prev().unwrap() == curr);
                    curr = *next;
                }
                assert!(tail == curr);
            },
        }
    }
}

impl<T> ListContents<T> {
    pub fn seek(&self, index: usize) -> NodePtr<T> {
        if index < self.len.get() / 2 {
            self.seek_fwd(index, self.head)
        } else {
            self.seek_bwd(self.last_index() - index, self.tail)
        }
    }

    #[allow(clippy::unwrap_used)]
    pub fn seek_fwd(&self, count: usize, mut node: NodePtr<T>) -> NodePtr<T> {
        for _ in 0..count {
            // UNWRAP: Callers never seek past the tail.
            node = node.next().unwrap();
        }
        node
    }

    #[allow(clippy::unwrap_used)]
    pub fn seek_bwd(&self, count: usize, mut node: NodePtr<T>) -> NodePtr<T> {
        for _ in 0..count {
            // UNWRAP: Callers never seek past the head.
            node = node.prev().unwrap();
        }
        node
    }

    pub fn push_front(&mut self, value: T) {
        self.len = self.len.checked_add(1).ok_or(CapacityOverflow).throw();

        let node = NodePtr::from_node(Node {
            value,
            prev: None,
            next: Some(self.head),
        });

        *self.head.prev_mut() = Some(node);
        self.head = node;
    }

    pub fn push_back(&mut self, value: T) {
        self.len = self.len.checked_add(1).ok_or(CapacityOverflow).throw();

        let node = NodePtr::from_node(Node {
            value,
            prev: Some(self.tail),
            next: None,
        });

        *self.tail.next_mut() = Some(node);
        self.tail = node;
    }

    pub fn wrap_one(value: T) -> ListContents<T> {
        let node = NodePtr::from_node(Node {
            value,
            prev: None,
            next: None,
        });

        ListContents {
            len: ONE,
            head: node,
            tail: node,
        }
    }

    pub const fn last_index(&self) -> usize {
        self.len.get() - 1
    }
}

impl<T> ListState<T> {
    pub fn single(value: T) -> ListState<T> {
        Full(ListContents::wrap_one(value))
    }

    pub const fn len(&self) -> usize {
        match self {
            Empty => 0,
            Full(ListContents { len, .. }) => len.get(),
        }
    }
}

impl<T> Index<usize> for LinkedList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index)
    }
}

impl<T> IndexMut<usize> for LinkedList<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index)
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        for item in iter.into_iter() {
            list.push_back(item);
        }
        list
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: PartialEq> PartialEq for ListContents<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.len != other.len {
            return false;
        }
        let mut node_a = self.head;
        let mut node_b = other.head;

        loop {
            if node_a.value() != node_b.value() {
                break false;
            }
            match (node_a.next(), node_b.next()) {
                (Some(next_a), Some(next_b)) => {
                    node_a = *next_a;
                    node_b = *next_b;
                },
                // Both sides have the same length, so if they aren't both Some, they are both
                // None.
                _ => break true,
            }
        }
    }
}

impl<T: Eq> Eq for ListContents<T> {}

impl<T: Hash> Hash for ListContents<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        let mut node = self.head;

        loop {
            node.value().hash(state);
            match node.next() {
                Some(next) => {
                    node = *next;
                },
                _ => break,
            }
        }

        // Terminate variable length hashing sequence.
        0xFF.hash(state);
    }
}

impl<T> Clone for ListContents<T> {
    fn clone(&self) -> Self {
        ListContents {
            len: self.len,
            head: self.head,
            tail: self.tail,
        }
    }
}

impl<T> Clone for ListState<T> {
    fn clone(&self) -> Self {
        match self {
            Empty => Empty,
            Full(contents) => Full(contents.clone()),
        }
    }
}

impl<T: Debug> Debug for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Debug> Display for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({})",
            self.iter()
                .map(|i| format!("{i:?}"))
                .collect::<Vec<String>>()
                .join(") -> (")
        )
    }
}
