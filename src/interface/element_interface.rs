use std::cmp::Ordering;
use std::fmt::{self, Debug, Formatter, Write};
use std::hash::{DefaultHasher, Hash, Hasher};

use super::MissingCallback;
use crate::util::result::ResultExtension;

/// Orders two elements. Drives every search, insertion and removal in the ordered collections.
pub type CompareFn<T> = fn(&T, &T) -> Ordering;

/// Produces a duplicate of an element.
pub type CopyFn<T> = fn(&T) -> T;

/// Writes a readable representation of an element into the provided writer.
pub type DisplayFn<T> = fn(&T, &mut dyn Write) -> fmt::Result;

/// Consumes an element which its collection is destroying.
pub type DropFn<T> = fn(T);

/// Hashes an element down to a single `u64`.
pub type HashFn<T> = fn(&T) -> u64;

/// Orders two elements by priority, greatest first.
pub type PriorityFn<T> = fn(&T, &T) -> Ordering;

/// A record of the callbacks a collection may use to operate on its elements.
///
/// Every slot is optional. A collection checks for the callbacks it needs at the point of use, so
/// an interface only has to carry the slots required by the operations actually invoked. Fetching
/// a missing callback through one of the panicking accessors is treated as a programmer error.
///
/// The record holds plain function pointers rather than closures, which keeps it [`Copy`]: one
/// interface can be handed to any number of collections, and [`ordered`](ElementInterface::ordered)
/// and the other trait-backed constructors can fill slots straight from an element type's own
/// trait implementations.
pub struct ElementInterface<T> {
    compare: Option<CompareFn<T>>,
    copy: Option<CopyFn<T>>,
    display: Option<DisplayFn<T>>,
    drop: Option<DropFn<T>>,
    hash: Option<HashFn<T>>,
    priority: Option<PriorityFn<T>>,
}

impl<T> ElementInterface<T> {
    /// Creates an interface with every slot unset.
    pub const fn new() -> ElementInterface<T> {
        ElementInterface {
            compare: None,
            copy: None,
            display: None,
            drop: None,
            hash: None,
            priority: None,
        }
    }

    /// Creates an interface whose compare callback is the element type's [`Ord`] implementation.
    pub fn ordered() -> ElementInterface<T>
    where
        T: Ord,
    {
        ElementInterface::new().with_compare(T::cmp as CompareFn<T>)
    }

    /// Returns the interface with its compare slot set to the provided callback.
    pub fn with_compare(self, compare: CompareFn<T>) -> ElementInterface<T> {
        ElementInterface {
            compare: Some(compare),
            ..self
        }
    }

    /// Returns the interface with its copy slot set to the provided callback.
    pub fn with_copy(self, copy: CopyFn<T>) -> ElementInterface<T> {
        ElementInterface {
            copy: Some(copy),
            ..self
        }
    }

    /// Returns the interface with its display slot set to the provided callback.
    pub fn with_display(self, display: DisplayFn<T>) -> ElementInterface<T> {
        ElementInterface {
            display: Some(display),
            ..self
        }
    }

    /// Returns the interface with its drop slot set to the provided callback. Collections pass
    /// elements they are destroying to this callback instead of dropping them directly.
    pub fn with_drop(self, drop: DropFn<T>) -> ElementInterface<T> {
        ElementInterface {
            drop: Some(drop),
            ..self
        }
    }

    /// Returns the interface with its hash slot set to the provided callback.
    pub fn with_hash(self, hash: HashFn<T>) -> ElementInterface<T> {
        ElementInterface {
            hash: Some(hash),
            ..self
        }
    }

    /// Returns the interface with its priority slot set to the provided callback.
    pub fn with_priority(self, priority: PriorityFn<T>) -> ElementInterface<T> {
        ElementInterface {
            priority: Some(priority),
            ..self
        }
    }

    /// Returns the interface with its copy slot set to the element type's [`Clone`]
    /// implementation.
    pub fn with_clone_copy(self) -> ElementInterface<T>
    where
        T: Clone,
    {
        self.with_copy(T::clone as CopyFn<T>)
    }

    /// Returns the interface with its display slot set to the element type's [`Debug`]
    /// implementation.
    pub fn with_debug_display(self) -> ElementInterface<T>
    where
        T: Debug,
    {
        self.with_display(debug_display::<T> as DisplayFn<T>)
    }

    /// Returns the interface with its hash slot set to the element type's [`Hash`] implementation,
    /// run through [`DefaultHasher`].
    pub fn with_default_hash(self) -> ElementInterface<T>
    where
        T: Hash,
    {
        self.with_hash(default_hash::<T> as HashFn<T>)
    }

    /// Returns the interface with its priority slot set to the element type's [`Ord`]
    /// implementation, so that greater elements take priority.
    pub fn with_ord_priority(self) -> ElementInterface<T>
    where
        T: Ord,
    {
        self.with_priority(T::cmp as PriorityFn<T>)
    }

    /// Returns the compare callback, or a [`MissingCallback`] error if the slot is unset.
    pub fn try_compare(&self) -> Result<CompareFn<T>, MissingCallback> {
        self.compare.ok_or(MissingCallback { callback: "compare" })
    }

    /// Returns the copy callback, or a [`MissingCallback`] error if the slot is unset.
    pub fn try_copy(&self) -> Result<CopyFn<T>, MissingCallback> {
        self.copy.ok_or(MissingCallback { callback: "copy" })
    }

    /// Returns the display callback, or a [`MissingCallback`] error if the slot is unset.
    pub fn try_display(&self) -> Result<DisplayFn<T>, MissingCallback> {
        self.display.ok_or(MissingCallback { callback: "display" })
    }

    /// Returns the drop callback, or a [`MissingCallback`] error if the slot is unset.
    pub fn try_drop(&self) -> Result<DropFn<T>, MissingCallback> {
        self.drop.ok_or(MissingCallback { callback: "drop" })
    }

    /// Returns the hash callback, or a [`MissingCallback`] error if the slot is unset.
    pub fn try_hash(&self) -> Result<HashFn<T>, MissingCallback> {
        self.hash.ok_or(MissingCallback { callback: "hash" })
    }

    /// Returns the priority callback, or a [`MissingCallback`] error if the slot is unset.
    pub fn try_priority(&self) -> Result<PriorityFn<T>, MissingCallback> {
        self.priority.ok_or(MissingCallback { callback: "priority" })
    }

    /// Returns the compare callback.
    ///
    /// # Panics
    /// Panics if the compare slot is unset.
    pub fn compare(&self) -> CompareFn<T> {
        self.try_compare().throw()
    }

    /// Returns the copy callback.
    ///
    /// # Panics
    /// Panics if the copy slot is unset.
    pub fn copy(&self) -> CopyFn<T> {
        self.try_copy().throw()
    }

    /// Returns the display callback.
    ///
    /// # Panics
    /// Panics if the display slot is unset.
    pub fn display(&self) -> DisplayFn<T> {
        self.try_display().throw()
    }

    /// Returns the hash callback.
    ///
    /// # Panics
    /// Panics if the hash slot is unset.
    pub fn hash(&self) -> HashFn<T> {
        self.try_hash().throw()
    }

    /// Returns the priority callback.
    ///
    /// # Panics
    /// Panics if the priority slot is unset.
    pub fn priority(&self) -> PriorityFn<T> {
        self.try_priority().throw()
    }
}

fn debug_display<T: Debug>(element: &T, out: &mut dyn Write) -> fmt::Result {
    write!(out, "{element:?}")
}

fn default_hash<T: Hash>(element: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    element.hash(&mut hasher);
    hasher.finish()
}

impl<T> Clone for ElementInterface<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ElementInterface<T> {}

impl<T> Default for ElementInterface<T> {
    fn default() -> Self {
        ElementInterface::new()
    }
}

impl<T> Debug for ElementInterface<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementInterface")
            .field("compare", &self.compare.is_some())
            .field("copy", &self.copy.is_some())
            .field("display", &self.display.is_some())
            .field("drop", &self.drop.is_some())
            .field("hash", &self.hash.is_some())
            .field("priority", &self.priority.is_some())
            .finish()
    }
}
