//! Linked collection types. [`LinkedList`] provides the substrate, and [`Stack`], [`Queue`] and
//! [`Deque`] adapt it into the classic end-access disciplines.

pub mod list;

mod deque;
mod queue;
mod stack;

pub use deque::*;
pub use queue::*;
pub use stack::*;

#[doc(inline)]
pub use list::LinkedList;
