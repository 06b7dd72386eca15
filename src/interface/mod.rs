//! A module containing [`ElementInterface`] and its accompanying error type.
//!
//! The interface is a record of plain function pointers through which the ordered collections
//! operate on their elements. Collections which hold one expose `set_interface` so the record can
//! be replaced at runtime.

mod element_interface;
mod error;
mod tests;

pub use element_interface::*;
pub use error::*;
