//! Payload extraction: scan for a candidate span, then parse it as JSON.
//!
//! The primary first-open/last-close span handles the common case of a
//! single payload wrapped in prose or a code fence. When trailing prose
//! contains an unrelated closing delimiter (so the primary span is not
//! valid JSON), the balanced depth scan recovers the first complete
//! container instead. Either way the result is a fully parsed value;
//! truncated or garbled output fails with a typed error.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ExtractError, ExtractResult};
use crate::scan::{scan_balanced, scan_candidate, ContainerKind};

/// Extract the first balanced JSON container of `kind` from `raw`.
///
/// Succeeds only with a fully parsed value; a span that merely looks like
/// JSON fails with [`ExtractError::MalformedPayload`]. No retries happen
/// here; the caller decides whether to re-invoke the upstream generator.
pub fn extract_payload(raw: &str, kind: ContainerKind) -> ExtractResult<Value> {
    extract_as(raw, kind)
}

/// Extract a top-level JSON object (`{`..`}`) from `raw`.
pub fn extract_object(raw: &str) -> ExtractResult<Value> {
    extract_payload(raw, ContainerKind::Object)
}

/// Extract a top-level JSON array (`[`..`]`) from `raw`.
pub fn extract_array(raw: &str) -> ExtractResult<Value> {
    extract_payload(raw, ContainerKind::Array)
}

/// Extract and deserialize the payload into a typed value.
///
/// Useful when the payload schema is known up front, e.g. a revision draft
/// object or a list of risk entries.
pub fn extract_as<T: DeserializeOwned>(raw: &str, kind: ContainerKind) -> ExtractResult<T> {
    let primary = scan_candidate(raw, kind)?;
    let primary_err = match serde_json::from_str(primary.text) {
        Ok(value) => return Ok(value),
        Err(err) => err,
    };

    // The last closer may belong to unrelated trailing prose; retry with
    // the first balanced container.
    if let Some(balanced) = scan_balanced(raw, primary.start, kind) {
        if balanced.end != primary.end {
            if let Ok(value) = serde_json::from_str(balanced.text) {
                return Ok(value);
            }
        }
    }

    Err(ExtractError::MalformedPayload {
        start: primary.start,
        end: primary.end,
        source: primary_err,
    })
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    use super::*;

    #[test]
    fn extracts_object_with_nested_containers() {
        let raw = "noise {\"a\":1, \"b\":[1,2]} trailing noise";
        let value = extract_object(raw).unwrap();
        assert_eq!(value, json!({"a": 1, "b": [1, 2]}));
    }

    #[test]
    fn trailing_garbage_with_unrelated_closer_is_tolerated() {
        // The last '}' belongs to "{not json}"; the balanced scan recovers
        // the first complete object instead of failing on the wide span.
        let raw = "noise {\"a\":1, \"b\":[1,2]} trailing noise {not json}";
        let value = extract_object(raw).unwrap();
        assert_eq!(value, json!({"a": 1, "b": [1, 2]}));
    }

    #[test]
    fn nested_object_is_not_truncated_at_inner_close() {
        let raw = "{\"outer\": {\"inner\": true}}";
        let value = extract_object(raw).unwrap();
        assert_eq!(value, json!({"outer": {"inner": true}}));
    }

    #[test]
    fn closer_inside_string_is_content() {
        let raw = "note {\"brace\": \"}\"} and {more";
        let value = extract_object(raw).unwrap();
        assert_eq!(value, json!({"brace": "}"}));
    }

    #[test]
    fn tolerates_code_fence_wrapping() {
        let raw = "Here is the result:\n```json\n{\"new_rule_draft\": \"text\", \"risks_and_issues\": []}\n```\nDone.";
        let value = extract_object(raw).unwrap();
        assert_eq!(value["new_rule_draft"], "text");
    }

    #[test]
    fn no_open_delimiter_reports_not_found() {
        let err = extract_object("the model returned prose only").unwrap_err();
        assert!(matches!(err, ExtractError::NoDelimiterFound { .. }));
    }

    #[test]
    fn invalid_candidate_reports_malformed() {
        let err = extract_object("{not valid json}").unwrap_err();
        match err {
            ExtractError::MalformedPayload { start, end, .. } => {
                assert_eq!(start, 0);
                assert_eq!(end, "{not valid json}".len());
            }
            other => panic!("expected MalformedPayload, got {other:?}"),
        }
    }

    #[test]
    fn truncated_output_is_malformed_not_partial() {
        // The closing brace here belongs to an inner object; the outer one
        // was cut off, so no candidate parses and extraction must fail.
        let raw = "{\"draft\": \"long text\", \"risks\": [{\"type\": \"legal\"}";
        let err = extract_object(raw).unwrap_err();
        assert!(matches!(err, ExtractError::MalformedPayload { .. }));
    }

    #[test]
    fn extracts_bare_array() {
        let raw = "Tasks:\n[\"notify pension office\", \"collect insurance card\"]\nend";
        let value = extract_array(raw).unwrap();
        assert_eq!(
            value,
            json!(["notify pension office", "collect insurance card"])
        );
    }

    #[test]
    fn typed_extraction() {
        #[derive(Debug, Deserialize, PartialEq)]
        struct Risk {
            r#type: String,
            description: String,
        }

        let raw = "analysis done. [{\"type\": \"legal\", \"description\": \"overtime cap\"}]";
        let risks: Vec<Risk> = extract_as(raw, ContainerKind::Array).unwrap();
        assert_eq!(risks.len(), 1);
        assert_eq!(risks[0].r#type, "legal");
    }

    #[test]
    fn typed_extraction_schema_mismatch_is_malformed() {
        let raw = "[1, 2, 3]";
        let err = extract_as::<Vec<String>>(raw, ContainerKind::Array).unwrap_err();
        assert!(matches!(err, ExtractError::MalformedPayload { .. }));
    }
}
