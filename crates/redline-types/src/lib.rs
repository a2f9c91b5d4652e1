//! Foundation types for redline.
//!
//! This crate defines the format-agnostic intermediate representation that
//! the renderer produces and export collaborators consume: an ordered
//! sequence of paragraphs, each an ordered sequence of styled text runs.
//!
//! # Key Types
//!
//! - [`RunStyle`] — abstract rendering intent (`plain`, `deleted`, `inserted`)
//! - [`StyledRun`] — a text fragment plus its rendering intent
//! - [`Paragraph`] — ordered runs between two line-break boundaries
//! - [`RedlineDocument`] — the final artifact, exclusively owned by the caller

pub mod document;

pub use document::{Paragraph, RedlineDocument, RunStyle, StyledRun};
