//! Parsing and validation of the model's review response.
//!
//! Models sometimes ignore the "JSON only" instruction and wrap the
//! answer in a markdown fence, so exactly one enclosing fence layer is
//! stripped before parsing. Validation is strict: the full nested schema
//! must deserialize, so a malformed point fails here instead of at render
//! time.

use crate::error::ReviewError;
use crate::review::StructuredReview;

use super::client::truncate_str;

/// Strip a single enclosing markdown code fence, if the whole trimmed
/// input is wrapped in one. The opening fence may carry a language tag
/// (e.g. ```json). Anything else is returned trimmed, unchanged.
///
/// Plain scan, no regex: adversarial model output must not be able to
/// trigger pathological backtracking.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();

    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let Some(inner) = rest.strip_suffix("```") else {
        return trimmed;
    };

    // Drop the optional tag word on the opening fence line. Models
    // sometimes leave trailing whitespace after the tag, so the line is
    // trimmed before the check; a blank line counts as untagged.
    let inner = match inner.find('\n') {
        Some(newline_idx) => {
            let first_line = inner[..newline_idx].trim();
            if first_line.chars().all(|c| c.is_alphanumeric() || c == '_') {
                &inner[newline_idx + 1..]
            } else {
                inner
            }
        }
        // Single-line fence like ```{"a":1}``` has no tag to strip.
        None => inner,
    };

    inner.trim()
}

/// Parse the raw model response into a `StructuredReview`.
///
/// Any failure is terminal and carries a user-facing reason; the raw
/// text goes to stderr for diagnostics, never into the error message.
pub fn parse_review(raw: &str) -> Result<StructuredReview, ReviewError> {
    let clean = strip_code_fence(raw);

    let value: serde_json::Value = match serde_json::from_str(clean) {
        Ok(value) => value,
        Err(err) => {
            eprintln!(
                "  Raw response was not valid JSON ({}): {}",
                err,
                truncate_str(raw, 400)
            );
            return Err(ReviewError::MalformedResponse {
                reason: "the response was not valid JSON".to_string(),
            });
        }
    };

    // Top-level shape check before the full deserialize so the message
    // can name what is actually missing.
    let sections_ok = value
        .as_object()
        .and_then(|obj| obj.get("reviewSections"))
        .map(|sections| sections.is_array())
        .unwrap_or(false);
    if !sections_ok {
        eprintln!(
            "  Response JSON lacks a reviewSections array: {}",
            truncate_str(raw, 400)
        );
        return Err(ReviewError::MalformedResponse {
            reason: "the response did not contain a reviewSections list".to_string(),
        });
    }

    serde_json::from_value(value).map_err(|err| {
        eprintln!(
            "  Response JSON did not match the review schema ({}): {}",
            err,
            truncate_str(raw, 400)
        );
        ReviewError::MalformedResponse {
            reason: format!("the response did not match the expected review format ({})", err),
        }
    })
}
