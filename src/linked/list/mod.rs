//! A module containing [`LinkedList`] and associated types.
//!
//! [`IntoIter`], [`Iter`] and [`IterMut`] provide owned, borrowed and mutable iteration over a
//! list's elements.
//!
//! [`LinkedList`] is also re-exported under the parent module.

mod iter;
mod length;
mod linked_list;
mod node;

pub use iter::*;
pub(crate) use length::*;
pub use linked_list::*;
pub(crate) use node::*;
