//! Diff engine: minimal edit scripts via the `similar` crate (Myers O(ND)).
//!
//! Word granularity is the default; legal prose diffs at character level
//! produce noisy one-character runs that the cleanup pass then has to undo.

use std::time::Duration;

use similar::{Algorithm, ChangeTag, TextDiffConfig};

use crate::error::{DiffError, DiffResult};
use crate::script::{DiffOp, EditScript};

/// Token granularity for diff computation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DiffGranularity {
    /// Diff over words and whitespace runs. Recommended for prose.
    #[default]
    Word,
    /// Diff over individual characters.
    Char,
}

/// Options for a diff computation.
#[derive(Clone, Debug)]
pub struct DiffOptions {
    /// Token granularity.
    pub granularity: DiffGranularity,
    /// Ceiling on the combined byte length of both inputs. Exceeding it
    /// fails the computation; there are no partial results.
    pub max_input_len: usize,
    /// Optional deadline for the Myers search. Past the deadline `similar`
    /// degrades to a coarser but still complete and lossless script.
    pub timeout: Option<Duration>,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            granularity: DiffGranularity::Word,
            max_input_len: 1 << 20,
            timeout: None,
        }
    }
}

/// Compute a complete edit script from `original` to `revised` with default
/// options.
pub fn diff_texts(original: &str, revised: &str) -> DiffResult<EditScript> {
    diff_texts_with(original, revised, &DiffOptions::default())
}

/// Compute a complete edit script from `original` to `revised`.
///
/// The result is deterministic for identical inputs and satisfies the
/// script invariant: Equal+Delete fragments concatenate to `original`,
/// Equal+Insert fragments to `revised`.
pub fn diff_texts_with(
    original: &str,
    revised: &str,
    options: &DiffOptions,
) -> DiffResult<EditScript> {
    let size = original.len() + revised.len();
    if size > options.max_input_len {
        return Err(DiffError::InputTooLarge {
            size,
            limit: options.max_input_len,
        });
    }

    let mut config = TextDiffConfig::default();
    config.algorithm(Algorithm::Myers);
    if let Some(deadline) = options.timeout {
        config.timeout(deadline);
    }

    let mut ops: Vec<DiffOp> = Vec::new();
    match options.granularity {
        DiffGranularity::Word => {
            let diff = config.diff_words(original, revised);
            for change in diff.iter_all_changes() {
                append(&mut ops, change.tag(), change.value());
            }
        }
        DiffGranularity::Char => {
            let diff = config.diff_chars(original, revised);
            for change in diff.iter_all_changes() {
                append(&mut ops, change.tag(), change.value());
            }
        }
    }

    let script = EditScript::from(ops);
    tracing::debug!(
        ops = script.len(),
        deleted = script.deleted_len(),
        inserted = script.inserted_len(),
        "edit script computed"
    );
    Ok(script)
}

/// Append one change token, collapsing adjacent tokens with the same tag
/// into a single fragment.
fn append(ops: &mut Vec<DiffOp>, tag: ChangeTag, value: &str) {
    if let Some(last) = ops.last_mut() {
        let merged = match (last, tag) {
            (DiffOp::Equal(t), ChangeTag::Equal)
            | (DiffOp::Delete(t), ChangeTag::Delete)
            | (DiffOp::Insert(t), ChangeTag::Insert) => {
                t.push_str(value);
                true
            }
            _ => false,
        };
        if merged {
            return;
        }
    }
    ops.push(match tag {
        ChangeTag::Equal => DiffOp::Equal(value.into()),
        ChangeTag::Delete => DiffOp::Delete(value.into()),
        ChangeTag::Insert => DiffOp::Insert(value.into()),
    });
}
