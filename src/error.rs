use trackable::error::{ErrorKind as TrackableErrorKind, ErrorKindExt};
use trackable::error::{Failure, TrackableError};

/// This crate specific `Error` type.
#[derive(Debug, Clone, TrackableError)]
pub struct Error(TrackableError<ErrorKind>);
impl From<Failure> for Error {
    fn from(f: Failure) -> Self {
        ErrorKind::Other.takes_over(f).into()
    }
}

/// Possible error kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// A dimension has an empty, inverted or non-finite interval, or its name is duplicated.
    InvalidBounds,

    /// The generator dimensionality differs from the dimension count of the parameter space.
    DimensionMismatch,

    /// A non-positive (or unrepresentable) number of samples was requested.
    InvalidCount,

    /// Invalid input was given.
    InvalidInput,

    /// Implementation bug.
    Bug,

    /// Other error.
    Other,
}
impl TrackableErrorKind for ErrorKind {}
