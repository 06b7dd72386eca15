use std::fmt::{self, Write};

use crate::interface::DisplayFn;

/// The order in which a tree traversal visits its elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Traversal {
    /// Each node before both of its subtrees.
    PreOrder,
    /// The left subtree, then the node, then the right subtree, which visits elements in
    /// ascending order.
    InOrder,
    /// Both subtrees before their node.
    PostOrder,
    /// Only the nodes without children, left to right.
    Leaves,
}

/// Writes one element through the interface's display callback, prefixed with a space for every
/// element after the first.
pub(crate) fn write_separated<T>(
    element: &T,
    display: DisplayFn<T>,
    separate: &mut bool,
    out: &mut dyn Write,
) -> fmt::Result {
    if *separate {
        out.write_char(' ')?;
    }
    *separate = true;
    display(element, out)
}
