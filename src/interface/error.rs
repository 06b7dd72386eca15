use derive_more::{Display, Error};

/// An error for operations which require a callback that the element interface does not carry.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("The element interface has no {callback} callback, which this operation requires!")]
pub struct MissingCallback {
    pub callback: &'static str,
}
