//! The redline document IR: styled runs grouped into paragraphs.
//!
//! Concrete formatting (strikethrough, underline, colors) is an export
//! concern; this IR only carries abstract style tags so it stays reusable
//! across export targets (terminal markup, word-processor formats, HTML).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Abstract rendering intent of a text run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStyle {
    /// Text present in both the original and the revised document.
    Plain,
    /// Text removed from the original (conventionally struck through).
    Deleted,
    /// Text added in the revision (conventionally underlined).
    Inserted,
}

impl fmt::Display for RunStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Deleted => write!(f, "deleted"),
            Self::Inserted => write!(f, "inserted"),
        }
    }
}

/// A text fragment plus its rendering intent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyledRun {
    /// The fragment text. Never contains line breaks; breaks are paragraph
    /// boundaries, not run content.
    pub text: String,
    /// The abstract style tag.
    pub style: RunStyle,
}

impl StyledRun {
    /// Create a run.
    pub fn new(text: impl Into<String>, style: RunStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    /// A run of unchanged text.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, RunStyle::Plain)
    }

    /// A run of deleted text.
    pub fn deleted(text: impl Into<String>) -> Self {
        Self::new(text, RunStyle::Deleted)
    }

    /// A run of inserted text.
    pub fn inserted(text: impl Into<String>) -> Self {
        Self::new(text, RunStyle::Inserted)
    }
}

/// An ordered sequence of runs between two line-break boundaries.
///
/// A paragraph with no runs represents a blank line in the source document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    /// The runs, in document order.
    pub runs: Vec<StyledRun>,
}

impl Paragraph {
    /// Create an empty paragraph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the paragraph has no runs (a blank line).
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Returns `true` if every run in the paragraph is plain.
    pub fn is_plain(&self) -> bool {
        self.runs.iter().all(|r| r.style == RunStyle::Plain)
    }
}

/// The final redline artifact: ordered paragraphs of ordered styled runs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedlineDocument {
    /// The paragraphs, in document order.
    pub paragraphs: Vec<Paragraph>,
}

impl RedlineDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of paragraphs.
    pub fn len(&self) -> usize {
        self.paragraphs.len()
    }

    /// Returns `true` if the document has no paragraphs.
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }

    /// Returns `true` if the document contains no deletions or insertions.
    pub fn is_unchanged(&self) -> bool {
        self.paragraphs.iter().all(Paragraph::is_plain)
    }

    /// Number of deleted runs across all paragraphs.
    pub fn deletions(&self) -> usize {
        self.runs_with(RunStyle::Deleted)
    }

    /// Number of inserted runs across all paragraphs.
    pub fn insertions(&self) -> usize {
        self.runs_with(RunStyle::Inserted)
    }

    fn runs_with(&self, style: RunStyle) -> usize {
        self.paragraphs
            .iter()
            .flat_map(|p| &p.runs)
            .filter(|r| r.style == style)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_display() {
        assert_eq!(RunStyle::Plain.to_string(), "plain");
        assert_eq!(RunStyle::Deleted.to_string(), "deleted");
        assert_eq!(RunStyle::Inserted.to_string(), "inserted");
    }

    #[test]
    fn style_serializes_lowercase() {
        let json = serde_json::to_string(&RunStyle::Inserted).unwrap();
        assert_eq!(json, "\"inserted\"");
    }

    #[test]
    fn run_serializes_as_text_and_tag() {
        let run = StyledRun::deleted("old clause");
        let json = serde_json::to_value(&run).unwrap();
        assert_eq!(json["text"], "old clause");
        assert_eq!(json["style"], "deleted");
    }

    #[test]
    fn document_roundtrip() {
        let doc = RedlineDocument {
            paragraphs: vec![
                Paragraph {
                    runs: vec![StyledRun::plain("Article 1"), StyledRun::inserted(" (new)")],
                },
                Paragraph::new(),
            ],
        };
        let json = serde_json::to_string(&doc).unwrap();
        let back: RedlineDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(back, doc);
    }

    #[test]
    fn change_counts() {
        let doc = RedlineDocument {
            paragraphs: vec![Paragraph {
                runs: vec![
                    StyledRun::plain("a"),
                    StyledRun::deleted("b"),
                    StyledRun::inserted("c"),
                    StyledRun::inserted("d"),
                ],
            }],
        };
        assert_eq!(doc.deletions(), 1);
        assert_eq!(doc.insertions(), 2);
        assert!(!doc.is_unchanged());
    }

    #[test]
    fn empty_paragraph_is_plain() {
        assert!(Paragraph::new().is_plain());
        assert!(RedlineDocument::new().is_unchanged());
    }
}
