//! Errors reported by [`AllocVec`](crate::AllocVec)

use crate::raw::AllocError;

/// Failure of a fallible [`AllocVec`](crate::AllocVec) operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A position at or past the end of the live elements was accessed, or
    /// the first/last element of an empty vector was requested
    #[error("position {index} is out of range for a vector of length {len}")]
    OutOfRange {
        /// The requested position
        index: usize,
        /// The length of the vector at the time of access
        len: usize,
    },

    /// The allocator could not provide the requested storage
    #[error("{0}")]
    Alloc(#[from] AllocError),
}

impl Error {
    pub(crate) fn out_of_range(index: usize, len: usize) -> Self { Self::OutOfRange { index, len } }
}
