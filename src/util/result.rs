use std::error::Error;

pub(crate) trait ResultExtension<T, E: Error> {
    /// Unwraps the [`Result`] like [`Result::unwrap`], but panics with the [`Display`] message of
    /// the contained error rather than its [`Debug`] representation.
    ///
    /// [`Display`]: std::fmt::Display
    /// [`Debug`]: std::fmt::Debug
    ///
    /// # Panics
    /// Panics if the [`Result`] is an [`Err`].
    fn throw(self) -> T;
}

impl<T, E: Error> ResultExtension<T, E> for Result<T, E> {
    fn throw(self) -> T {
        match self {
            Ok(value) => value,
            Err(error) => panic!("{}", error),
        }
    }
}
