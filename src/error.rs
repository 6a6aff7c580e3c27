//! Error types for ringls
//!
//! Two families:
//! - `DequeError`: raised by the queue core (allocation failure, checked
//!   access of an absent `Optional`). Popping an empty deque is not an error.
//! - `ListError`: raised by the listing driver when output cannot be written
//!   or the traversal queue cannot grow.

use std::io;
use thiserror::Error;

/// Errors produced by [`RingDeque`](crate::RingDeque) and
/// [`Optional`](crate::Optional).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DequeError {
    /// The backing buffer could not be allocated or grown.
    #[error("failed to allocate ring buffer of {requested} slots")]
    Allocation {
        /// Capacity, in slots, that was being requested.
        requested: usize,
    },

    /// The payload of an absent `Optional` was requested.
    #[error("attempted to take the value of an absent optional")]
    EmptyValue,
}

/// Errors produced while listing directories.
#[derive(Error, Debug)]
pub enum ListError {
    /// Writing the listing to the output stream failed.
    #[error("failed to write listing: {0}")]
    Output(#[from] io::Error),

    /// The traversal queue could not hold another directory.
    #[error("traversal queue error: {0}")]
    Queue(#[from] DequeError),
}

/// Result alias for the listing driver.
pub type Result<T> = std::result::Result<T, ListError>;
