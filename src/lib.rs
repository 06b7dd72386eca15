//! This crate is a set of classic collections where element behavior is supplied at runtime
//! through a record of plain function pointers instead of trait bounds.
//!
//! # Purpose
//! After writing containers against trait bounds, I wanted to try the opposite arrangement: a
//! single [`ElementInterface`](interface::ElementInterface) value carrying compare / copy /
//! display / drop / hash / priority callbacks, handed to a container at construction, with every
//! polymorphic decision routed through it at runtime. It's the style C libraries use out of
//! necessity, and it turns out to have real upsides in Rust too: the same container type can hold
//! elements ordered three different ways, ordering can be swapped on a live collection, and
//! element types need no trait implementations at all.
//!
//! The centrepiece is [`AvlTree`](tree::AvlTree), a self-balancing search tree with an optional
//! capacity limit, alongside its unbalanced sibling [`BinarySearchTree`](tree::BinarySearchTree)
//! and the linked family ([`LinkedList`](linked::LinkedList), [`Stack`](linked::Stack),
//! [`Queue`](linked::Queue), [`Deque`](linked::Deque)).
//!
//! # Method
//! Callbacks are `fn` pointers rather than closures or trait objects, which keeps the interface
//! record `Copy` and keeps containers free of lifetime or allocation baggage. Every slot is
//! optional; the common cases don't require writing any callbacks by hand because constructors
//! like [`ordered`](interface::ElementInterface::ordered) and builders like
//! [`with_debug_display`](interface::ElementInterface::with_debug_display) lift the element
//! type's own trait implementations into slots. An operation which needs a missing callback
//! panics, the same way indexing out of bounds does; `try_` accessors exist where callers want to
//! check first.
//!
//! # Error Handling
//! Recoverable failures are strongly typed: enums for errors with more than one cause, structs
//! (often ZSTs) for the rest, all implementing [`Error`](std::error::Error). Errors that reject
//! an element hand it back to the caller rather than dropping it. Where an error is realistically
//! a caller bug, methods come in panicking/`try_` pairs so that everyday code isn't forced to
//! unwrap.
//!
//! # Dependencies
//! Only `std` and some derive macros on top of it, because they remove the need for some very
//! repetitive programming. None of the containers here are built on [`Vec`] or any other std
//! collection; nodes and links are managed directly.

// #![warn(missing_docs)]
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod interface;
pub mod linked;
pub mod tree;

pub(crate) mod util;
