//! Error types for the crate

use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Error type for a failed element cast.
/// Carries the index of the offending element together with the name of its
/// runtime type and the name of the requested target type.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct CastError {
    /// Index of the first element that failed the check
    pub index: usize,
    /// Runtime type of the offending element
    pub actual: &'static str,
    /// Requested target type
    pub expected: &'static str,
}

impl Error for CastError {}

impl fmt::Display for CastError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "element at index {} has type {} and cannot be cast to {}",
            self.index, self.actual, self.expected
        )
    }
}

/// Error type for tarray
#[derive(Error, Debug)]
pub enum TArrayError {
    /// A precondition was violated by the caller
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// An element's runtime type is incompatible with the requested target type
    #[error(transparent)]
    TypeMismatch(#[from] CastError),
}
