//! Balanced delimiter scan: carve the candidate JSON span out of raw text.
//!
//! Two scans cooperate here. The primary span pairs the *first* opening
//! delimiter with the *last* closing delimiter in the text; using the last
//! closer is a deliberate tie-break so nested containers of the same kind
//! (`{"a": {"b": 1}}`) are not truncated at the first inner closer. When
//! trailing prose contains an unrelated closer (so the primary span is not
//! parseable), a string-aware depth scan recovers the first balanced
//! container instead. Whether a span's content is actually valid JSON is
//! the parser's job, not the scanner's.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ExtractError, ExtractResult};

/// The kind of JSON container expected at the top level of a payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContainerKind {
    /// A JSON object, delimited by `{` and `}`.
    Object,
    /// A JSON array, delimited by `[` and `]`.
    Array,
}

impl ContainerKind {
    /// The opening delimiter character.
    pub fn open(self) -> char {
        match self {
            Self::Object => '{',
            Self::Array => '[',
        }
    }

    /// The closing delimiter character.
    pub fn close(self) -> char {
        match self {
            Self::Object => '}',
            Self::Array => ']',
        }
    }
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Object => write!(f, "object"),
            Self::Array => write!(f, "array"),
        }
    }
}

/// A candidate payload span located within raw text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CandidateSpan<'a> {
    /// The substring from the opening delimiter through the closing one.
    pub text: &'a str,
    /// Byte offset of the opening delimiter.
    pub start: usize,
    /// Byte offset one past the closing delimiter.
    pub end: usize,
}

/// Locate the primary candidate span for `kind` within `raw`: first opening
/// delimiter through last closing delimiter.
///
/// Fails with [`ExtractError::NoDelimiterFound`] when either delimiter is
/// absent or the last closer precedes the first opener (no span exists).
pub fn scan_candidate(raw: &str, kind: ContainerKind) -> ExtractResult<CandidateSpan<'_>> {
    let start = raw
        .find(kind.open())
        .ok_or(ExtractError::NoDelimiterFound { kind })?;
    let close = raw
        .rfind(kind.close())
        .ok_or(ExtractError::NoDelimiterFound { kind })?;
    if close < start {
        return Err(ExtractError::NoDelimiterFound { kind });
    }

    let end = close + kind.close().len_utf8();
    tracing::debug!(%kind, start, end, "primary candidate span located");
    Ok(CandidateSpan {
        text: &raw[start..end],
        start,
        end,
    })
}

/// Scanner state for the balanced depth scan.
enum ScanState {
    /// Outside any string literal; delimiters count toward depth.
    Value,
    /// Inside a string literal; delimiters are content.
    InString,
    /// Immediately after a backslash inside a string literal.
    Escaped,
}

/// Locate the first balanced container of `kind` starting at `start` (which
/// must be the offset of an opening delimiter in `raw`).
///
/// Tracks delimiter depth with string-literal awareness, so closers inside
/// JSON strings (`{"a": "}"}`) do not terminate the span. Returns `None`
/// when the container never closes (truncated output).
pub fn scan_balanced(raw: &str, start: usize, kind: ContainerKind) -> Option<CandidateSpan<'_>> {
    let mut depth = 0usize;
    let mut state = ScanState::Value;

    for (i, c) in raw[start..].char_indices() {
        match state {
            ScanState::Value => {
                if c == '"' {
                    state = ScanState::InString;
                } else if c == kind.open() {
                    depth += 1;
                } else if c == kind.close() {
                    depth = depth.checked_sub(1)?;
                    if depth == 0 {
                        let end = start + i + c.len_utf8();
                        tracing::debug!(%kind, start, end, "balanced span located");
                        return Some(CandidateSpan {
                            text: &raw[start..end],
                            start,
                            end,
                        });
                    }
                }
            }
            ScanState::InString => match c {
                '\\' => state = ScanState::Escaped,
                '"' => state = ScanState::Value,
                _ => {}
            },
            ScanState::Escaped => state = ScanState::InString,
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_span_covers_first_open_to_last_close() {
        let raw = "noise {\"a\": 1} more {\"b\": 2} tail";
        let span = scan_candidate(raw, ContainerKind::Object).unwrap();
        assert_eq!(span.text, "{\"a\": 1} more {\"b\": 2}");
        assert_eq!(span.start, 6);
    }

    #[test]
    fn missing_open_delimiter() {
        let err = scan_candidate("no braces here }", ContainerKind::Object).unwrap_err();
        assert!(matches!(
            err,
            ExtractError::NoDelimiterFound {
                kind: ContainerKind::Object
            }
        ));
    }

    #[test]
    fn missing_close_delimiter() {
        let err = scan_candidate("truncated { \"a\": 1", ContainerKind::Object).unwrap_err();
        assert!(matches!(err, ExtractError::NoDelimiterFound { .. }));
    }

    #[test]
    fn close_before_open_is_no_span() {
        let err = scan_candidate("] then [", ContainerKind::Array).unwrap_err();
        assert!(matches!(
            err,
            ExtractError::NoDelimiterFound {
                kind: ContainerKind::Array
            }
        ));
    }

    #[test]
    fn array_delimiters_are_independent_of_object_ones() {
        let raw = "{\"wrapper\": [1, 2, 3]}";
        let span = scan_candidate(raw, ContainerKind::Array).unwrap();
        assert_eq!(span.text, "[1, 2, 3]");
    }

    #[test]
    fn balanced_scan_stops_at_matching_close() {
        let raw = "x {\"a\": {\"b\": 1}} and {junk}";
        let span = scan_balanced(raw, 2, ContainerKind::Object).unwrap();
        assert_eq!(span.text, "{\"a\": {\"b\": 1}}");
    }

    #[test]
    fn balanced_scan_ignores_closers_inside_strings() {
        let raw = "{\"a\": \"}\"}";
        let span = scan_balanced(raw, 0, ContainerKind::Object).unwrap();
        assert_eq!(span.text, raw);
    }

    #[test]
    fn balanced_scan_handles_escaped_quotes() {
        let raw = "{\"a\": \"say \\\"hi}\\\"\"}";
        let span = scan_balanced(raw, 0, ContainerKind::Object).unwrap();
        assert_eq!(span.text, raw);
    }

    #[test]
    fn balanced_scan_reports_unclosed_container() {
        let raw = "{\"a\": {\"b\": 1}";
        assert!(scan_balanced(raw, 0, ContainerKind::Object).is_none());
    }
}
