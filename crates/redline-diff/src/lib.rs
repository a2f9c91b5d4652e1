//! Diff engine and semantic cleanup for redline.
//!
//! Computes complete, lossless edit scripts between an original legal text
//! and its revised counterpart, then rechunks them for human readability.
//! Built on the `similar` crate (Myers diff algorithm).
//!
//! # Key Types
//!
//! - [`DiffOp`] / [`EditScript`] — the edit script and its reconstruction law
//! - [`diff_texts`] / [`DiffOptions`] — edit script computation
//! - [`cleanup_semantic`] — fragmentation-reducing rechunking
//! - [`DiffError`] — computation limit failures

pub mod cleanup;
pub mod engine;
pub mod error;
pub mod script;

pub use cleanup::cleanup_semantic;
pub use engine::{diff_texts, diff_texts_with, DiffGranularity, DiffOptions};
pub use error::{DiffError, DiffResult};
pub use script::{DiffOp, EditScript};
