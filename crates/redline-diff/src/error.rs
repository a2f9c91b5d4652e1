//! Error types for the diff crate.

/// Errors that can occur while computing an edit script.
///
/// There are no partial results: a failed computation yields no script at
/// all, and callers must treat it as fatal for the request rather than
/// retrying automatically.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DiffError {
    /// The combined input size exceeds the configured ceiling.
    ///
    /// Guards against pathological inputs where the O(ND) search would be
    /// impractical.
    #[error("combined input size {size} exceeds the diff limit of {limit} bytes")]
    InputTooLarge {
        /// Combined byte length of original and revised text.
        size: usize,
        /// The configured ceiling.
        limit: usize,
    },
}

/// Convenience alias for diff results.
pub type DiffResult<T> = Result<T, DiffError>;
