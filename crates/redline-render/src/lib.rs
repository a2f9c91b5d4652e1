//! Redline renderer: edit script in, styled document out.
//!
//! Maps `Equal → Plain`, `Delete → Deleted`, `Insert → Inserted` and groups
//! the resulting runs into paragraphs on line-break boundaries, so the
//! output document's paragraph structure tracks the source text. Styling
//! stays abstract ([`RunStyle`] tags); mapping tags to strikethrough,
//! underline, or colors belongs to the export collaborator.
//!
//! Rendering is a total function: it cannot fail on a well-formed edit
//! script, and a malformed one (empty fragments) is a programming error
//! upstream, guarded by a debug assertion rather than an error path.

use redline_diff::{DiffOp, EditScript};
use redline_types::{Paragraph, RedlineDocument, RunStyle, StyledRun};

/// Render a (preferably cleaned) edit script into a [`RedlineDocument`].
///
/// Paragraph policy:
/// - line breaks in Equal and Insert fragments end the current paragraph
///   and start a new one, so the paragraph count tracks the revised
///   document's structure;
/// - line breaks in Delete fragments do not open paragraphs; deleted text
///   flows into the surrounding paragraph as separate runs;
/// - each line segment is trimmed of leading/trailing spaces and tabs, and
///   segments empty after trimming produce no run;
/// - a paragraph left without runs is kept (it represents a blank line),
///   except at the very end of the document.
pub fn render_redline(script: &EditScript) -> RedlineDocument {
    debug_assert!(
        script.ops.iter().all(|op| !op.text().is_empty()),
        "edit script contains an empty fragment"
    );

    let mut paragraphs: Vec<Paragraph> = Vec::new();
    let mut current = Paragraph::new();

    for op in &script.ops {
        let style = match op {
            DiffOp::Equal(_) => RunStyle::Plain,
            DiffOp::Delete(_) => RunStyle::Deleted,
            DiffOp::Insert(_) => RunStyle::Inserted,
        };

        for (i, segment) in op.text().split('\n').enumerate() {
            if i > 0 && style != RunStyle::Deleted {
                paragraphs.push(std::mem::take(&mut current));
            }
            let trimmed = trim_segment(segment);
            if !trimmed.is_empty() {
                current.runs.push(StyledRun::new(trimmed, style));
            }
        }
    }

    if !current.is_empty() {
        paragraphs.push(current);
    }

    tracing::debug!(paragraphs = paragraphs.len(), "redline document rendered");
    RedlineDocument { paragraphs }
}

/// Trim horizontal whitespace from both ends of a line segment. Line breaks
/// are boundaries, never run content, so they are not part of any segment.
fn trim_segment(segment: &str) -> &str {
    segment.trim_matches([' ', '\t', '\r'])
}
