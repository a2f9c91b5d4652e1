//! Edit scripts: a complete, lossless description of one text's
//! transformation into another.
//!
//! The script invariant: it is total and non-overlapping. Concatenating the
//! fragments of every Equal and Delete operation reproduces the original
//! text exactly; Equal and Insert fragments reproduce the revised text.
//! Every producer and transformer in this crate preserves that invariant.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single operation in an edit script, carrying its text fragment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", content = "text", rename_all = "lowercase")]
pub enum DiffOp {
    /// Text present in both the original and the revised document.
    Equal(String),
    /// Text present only in the original.
    Delete(String),
    /// Text present only in the revision.
    Insert(String),
}

impl DiffOp {
    /// The text fragment this operation carries.
    pub fn text(&self) -> &str {
        match self {
            Self::Equal(t) | Self::Delete(t) | Self::Insert(t) => t,
        }
    }

    /// Returns `true` for an `Equal` operation.
    pub fn is_equal(&self) -> bool {
        matches!(self, Self::Equal(_))
    }

    /// Returns `true` for a `Delete` or `Insert` operation.
    pub fn is_edit(&self) -> bool {
        !self.is_equal()
    }
}

impl fmt::Display for DiffOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Equal(t) => write!(f, "  {t:?}"),
            Self::Delete(t) => write!(f, "- {t:?}"),
            Self::Insert(t) => write!(f, "+ {t:?}"),
        }
    }
}

/// An ordered sequence of [`DiffOp`] transforming an original text into a
/// revised text.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditScript {
    /// The operations, in document order.
    pub ops: Vec<DiffOp>,
}

impl EditScript {
    /// Create an empty script (the identity transformation of `""`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of operations.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Returns `true` if the script has no operations.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Returns `true` if the script contains no Delete or Insert.
    pub fn is_identity(&self) -> bool {
        self.ops.iter().all(DiffOp::is_equal)
    }

    /// Reconstruct the original text (Equal + Delete fragments).
    pub fn reconstruct_original(&self) -> String {
        self.ops
            .iter()
            .filter(|op| !matches!(op, DiffOp::Insert(_)))
            .map(DiffOp::text)
            .collect()
    }

    /// Reconstruct the revised text (Equal + Insert fragments).
    pub fn reconstruct_revised(&self) -> String {
        self.ops
            .iter()
            .filter(|op| !matches!(op, DiffOp::Delete(_)))
            .map(DiffOp::text)
            .collect()
    }

    /// Total bytes of deleted text.
    pub fn deleted_len(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DiffOp::Delete(_)))
            .map(|op| op.text().len())
            .sum()
    }

    /// Total bytes of inserted text.
    pub fn inserted_len(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DiffOp::Insert(_)))
            .map(|op| op.text().len())
            .sum()
    }
}

impl From<Vec<DiffOp>> for EditScript {
    fn from(ops: Vec<DiffOp>) -> Self {
        Self { ops }
    }
}
