//! Structured payload extraction for redline.
//!
//! Generative-text services are asked to answer in JSON, but their raw
//! responses are untrusted: the value may be wrapped in prose or code
//! fences, or cut off mid-output. This crate recovers the payload by
//! locating the first balanced container span and parsing it, failing with
//! a typed error rather than ever returning truncated data.
//!
//! # Key Types
//!
//! - [`ContainerKind`] — expected top-level container (`object` or `array`)
//! - [`extract_payload`] / [`extract_as`] — scan + parse entry points
//! - [`ExtractError`] — `NoDelimiterFound` / `MalformedPayload`

pub mod error;
pub mod extract;
pub mod scan;

pub use error::{ExtractError, ExtractResult};
pub use extract::{extract_array, extract_as, extract_object, extract_payload};
pub use scan::{scan_balanced, scan_candidate, CandidateSpan, ContainerKind};
