//! Error taxonomy for the heap's fallible public operations.

use std::error::Error;
use std::fmt;

/// Everything that can go wrong calling into a [`crate::FibonacciHeap`].
///
/// Absent handles and empty-heap queries are not modeled here: those are
/// total operations that return `None` rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// `decrease_key` was called with a key greater than the node's current key.
    InvalidKey,
    /// The handle's id is not known to this heap: already extracted, already
    /// deleted, or issued by a heap that was never merged into this one.
    NodeNotFound,
    /// A node or degree-table allocation failed.
    AllocationFailure,
    /// `delete`'s internal postcondition (extract-min returns the
    /// just-deleted node) did not hold. Indicates a structural bug; the
    /// heap should be considered poisoned after this.
    Corruption,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            HeapError::InvalidKey => "new key is greater than the node's current key",
            HeapError::NodeNotFound => "handle is not present in this heap",
            HeapError::AllocationFailure => "node or degree-table allocation failed",
            HeapError::Corruption => "extract-min did not return the deleted node",
        };
        f.write_str(msg)
    }
}

impl Error for HeapError {}
