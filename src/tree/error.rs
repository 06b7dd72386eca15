use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};

use derive_more::{Display, Error, IsVariant};

/// The reason an insertion was rejected.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum InsertErrorKind {
    #[display("The tree already contains an equal element!")]
    Duplicate,
    #[display("The tree is at its capacity limit!")]
    AtCapacity,
}

/// An insertion which was rejected, either because an equal element is already present or because
/// the tree is full. Carries the rejected element so the caller can reclaim it.
pub struct InsertError<T> {
    element: T,
    kind: InsertErrorKind,
}

impl<T> InsertError<T> {
    pub(crate) const fn duplicate(element: T) -> InsertError<T> {
        InsertError {
            element,
            kind: InsertErrorKind::Duplicate,
        }
    }

    pub(crate) const fn at_capacity(element: T) -> InsertError<T> {
        InsertError {
            element,
            kind: InsertErrorKind::AtCapacity,
        }
    }

    /// Returns the reason for the rejection.
    pub const fn kind(&self) -> InsertErrorKind {
        self.kind
    }

    /// Returns a reference to the rejected element.
    pub const fn element(&self) -> &T {
        &self.element
    }

    /// Consumes the error, handing the rejected element back.
    pub fn into_element(self) -> T {
        self.element
    }
}

// The element itself is deliberately left out of these impls so that the error stays usable for
// element types which implement neither Debug nor Display.

impl<T> Debug for InsertError<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("InsertError")
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

impl<T> Display for InsertError<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.kind, f)
    }
}

impl<T> Error for InsertError<T> {}

/// A requested capacity limit which is below the tree's current length.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Limit {limit} is below the current length {len}!")]
pub struct InvalidLimit {
    pub limit: usize,
    pub len: usize,
}

/// An error for cursor reads made after the tree was structurally mutated.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("The tree has been mutated since this cursor last observed it!")]
pub struct CursorInvalidated;
