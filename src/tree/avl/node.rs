use std::ptr::NonNull;

pub(crate) type Link<T> = Option<NodePtr<T>>;

/// The height of the subtree hanging off a link, where a missing child counts as 0 and a leaf
/// as 1.
pub(crate) fn subtree_height<T>(link: Link<T>) -> i32 {
    match link {
        Some(node) => node.height(),
        None => 0,
    }
}

// NOTE: Nodes are allocated through Box<T> rather than alloc so that dereferencing the Box can
// move the value back out of the heap when a node is unlinked.

#[derive(Debug)]
pub(crate) struct NodePtr<T>(pub NonNull<Node<T>>);

impl<T> NodePtr<T> {
    pub fn element<'a>(&self) -> &'a T {
        // SAFETY: The pointer is valid for as long as the node remains linked into a tree.
        unsafe { &(*self.0.as_ptr()).element }
    }

    #[allow(clippy::mut_from_ref)]
    pub fn element_mut<'a>(&self) -> &'a mut T {
        // SAFETY: The pointer is valid for as long as the node remains linked into a tree.
        unsafe { &mut (*self.0.as_ptr()).element }
    }

    pub fn height(&self) -> i32 {
        // SAFETY: The pointer is valid for as long as the node remains linked into a tree.
        unsafe { (*self.0.as_ptr()).height }
    }

    #[allow(clippy::mut_from_ref)]
    pub fn height_mut<'a>(&self) -> &'a mut i32 {
        // SAFETY: The pointer is valid for as long as the node remains linked into a tree.
        unsafe { &mut (*self.0.as_ptr()).height }
    }

    pub fn parent<'a>(&self) -> &'a Link<T> {
        // SAFETY: The pointer is valid for as long as the node remains linked into a tree.
        unsafe { &(*self.0.as_ptr()).parent }
    }

    #[allow(clippy::mut_from_ref)]
    pub fn parent_mut<'a>(&self) -> &'a mut Link<T> {
        // SAFETY: The pointer is valid for as long as the node remains linked into a tree.
        unsafe { &mut (*self.0.as_ptr()).parent }
    }

    pub fn left<'a>(&self) -> &'a Link<T> {
        // SAFETY: The pointer is valid for as long as the node remains linked into a tree.
        unsafe { &(*self.0.as_ptr()).left }
    }

    #[allow(clippy::mut_from_ref)]
    pub fn left_mut<'a>(&self) -> &'a mut Link<T> {
        // SAFETY: The pointer is valid for as long as the node remains linked into a tree.
        unsafe { &mut (*self.0.as_ptr()).left }
    }

    pub fn right<'a>(&self) -> &'a Link<T> {
        // SAFETY: The pointer is valid for as long as the node remains linked into a tree.
        unsafe { &(*self.0.as_ptr()).right }
    }

    #[allow(clippy::mut_from_ref)]
    pub fn right_mut<'a>(&self) -> &'a mut Link<T> {
        // SAFETY: The pointer is valid for as long as the node remains linked into a tree.
        unsafe { &mut (*self.0.as_ptr()).right }
    }

    /// Children's heights minus each other, positive when the right side is deeper.
    pub fn balance(&self) -> i32 {
        subtree_height(*self.right()) - subtree_height(*self.left())
    }

    /// Recomputes this node's height from its children's stored heights.
    pub fn update_height(&self) {
        *self.height_mut() = 1 + subtree_height(*self.left()).max(subtree_height(*self.right()));
    }

    /// The node holding the smallest element of this node's subtree.
    pub fn leftmost(&self) -> NodePtr<T> {
        let mut current = *self;
        while let Some(left) = *current.left() {
            current = left;
        }
        current
    }

    /// The node holding the greatest element of this node's subtree.
    pub fn rightmost(&self) -> NodePtr<T> {
        let mut current = *self;
        while let Some(right) = *current.right() {
            current = right;
        }
        current
    }

    /// The node holding the next element in ascending order, either down into the right subtree
    /// or up past every ancestor this node sits right of.
    pub fn next_in_order(&self) -> Link<T> {
        match *self.right() {
            Some(right) => Some(right.leftmost()),
            None => {
                let mut current = *self;
                let mut parent = *current.parent();
                while let Some(node) = parent {
                    if *node.left() == Some(current) {
                        return Some(node);
                    }
                    current = node;
                    parent = *node.parent();
                }
                None
            },
        }
    }

    /// The node holding the previous element in ascending order.
    pub fn prev_in_order(&self) -> Link<T> {
        match *self.left() {
            Some(left) => Some(left.rightmost()),
            None => {
                let mut current = *self;
                let mut parent = *current.parent();
                while let Some(node) = parent {
                    if *node.right() == Some(current) {
                        return Some(node);
                    }
                    current = node;
                    parent = *node.parent();
                }
                None
            },
        }
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
    pub element: T,
    pub height: i32,
    pub parent: Link<T>,
    pub left: Link<T>,
    pub right: Link<T>,
}
