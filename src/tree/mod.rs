//! Ordered collection types driven by an [`ElementInterface`]: the self-balancing [`AvlTree`] and
//! the plain, unbalanced [`BinarySearchTree`].
//!
//! Both trees order their elements through the interface's compare callback and reject
//! duplicates. The AVL tree is the one to reach for by default; the binary search tree exists for
//! workloads where the input is known to arrive well shuffled and the rebalancing bookkeeping
//! isn't worth carrying.
//!
//! [`ElementInterface`]: crate::interface::ElementInterface

pub mod avl;
pub mod bst;

mod error;
mod traversal;

pub use error::*;
pub use traversal::*;

#[doc(inline)]
pub use avl::AvlTree;
#[doc(inline)]
pub use bst::BinarySearchTree;
