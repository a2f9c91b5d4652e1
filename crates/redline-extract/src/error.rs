//! Error types for payload extraction.

use crate::scan::ContainerKind;

/// Errors that can occur while recovering a JSON payload from raw text.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// The opening or closing delimiter of the expected container was not
    /// found in the text (or the last closing delimiter precedes the first
    /// opening one, so no candidate span exists).
    #[error("no balanced '{}'..'{}' span found in response text", kind.open(), kind.close())]
    NoDelimiterFound {
        /// The container kind that was being scanned for.
        kind: ContainerKind,
    },

    /// A candidate span was found but its content is not valid JSON.
    ///
    /// Covers prose containing an unrelated closing delimiter, truncated
    /// model output, and plain garbage between the delimiters.
    #[error("candidate payload at bytes {start}..{end} is not valid JSON: {source}")]
    MalformedPayload {
        /// Byte offset of the opening delimiter in the raw text.
        start: usize,
        /// Byte offset one past the closing delimiter.
        end: usize,
        /// The underlying parse error.
        #[source]
        source: serde_json::Error,
    },
}

/// Convenience alias for extraction results.
pub type ExtractResult<T> = Result<T, ExtractError>;
