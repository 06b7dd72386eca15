use std::ptr::NonNull;

pub(crate) type Link<T> = Option<NodePtr<T>>;

// NOTE: Nodes are allocated through Box<T> rather than alloc so that dereferencing the Box can
// move the value back out of the heap when a node is unlinked.

#[derive(Debug)]
pub(crate) struct NodePtr<T>(pub NonNull<Node<T>>);

impl<T> NodePtr<T> {
    pub fn value<'a>(&self) -> &'a T {
        // SAFETY: The pointer is valid for as long as the node remains linked into a list.
        unsafe { &(*self.0.as_ptr()).value }
    }

    #[allow(clippy::mut_from_ref)]
    pub fn value_mut<'a>(&self) -> &'a mut T {
        // SAFETY: The pointer is valid for as long as the node remains linked into a list.
        unsafe { &mut (*self.0.as_ptr()).value }
    }

    pub fn prev<'a>(&self) -> &'a Link<T> {
        // SAFETY: The pointer is valid for as long as the node remains linked into a list.
        unsafe { &(*self.0.as_ptr()).prev }
    }

    #[allow(clippy::mut_from_ref)]
    pub fn prev_mut<'a>(&self) -> &'a mut Link<T> {
        // SAFETY: The pointer is valid for as long as the node remains linked into a list.
        unsafe { &mut (*self.0.as_ptr()).prev }
    }

    pub fn next<'a>(&self) -> &'a Link<T> {
        // SAFETY: The pointer is valid for as long as the node remains linked into a list.
        unsafe { &(*self.0.as_ptr()).next }
    }

    #[allow(clippy::mut_from_ref)]
    pub fn next_mut<'a>(&self) -> &'a mut Link<T> {
        // SAFETY: The pointer is valid for as long as the node remains linked into a list.
        unsafe { &mut (*self.0.as_ptr()).next }
    }

    pub fn from_node(node: Node<T>) -> NodePtr<T> {
        // SAFETY: Box::into_raw never returns a null pointer.
        NodePtr(unsafe { NonNull::new_unchecked(Box::into_raw(Box::new(node))) })
    }

    /// Unboxes the node, returning it by value. The caller must hold the only remaining copy of
    /// this pointer.
    pub fn take_node(self) -> Node<T> {
        // SAFETY: The pointer was produced by Box::into_raw in from_node.
        unsafe { *Box::from_raw(self.0.as_ptr()) }
    }

    /// Releases the node without reading it.
    ///
    /// # Safety
    /// The caller must hold the only remaining copy of this pointer.
    pub unsafe fn drop_node(self) {
        // SAFETY: The pointer was produced by Box::into_raw in from_node.
        drop(unsafe { Box::from_raw(self.0.as_ptr()) });
    }
}

impl<T> Clone for NodePtr<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodePtr<T> {}

impl<T> PartialEq for NodePtr<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

pub(crate) struct Node<T> {
    pub value: T,
    pub prev: Link<T>,
    pub next: Link<T>,
}
