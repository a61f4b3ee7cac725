//! Typed model of a structured review.
//!
//! Field names mirror the JSON contract with the model exactly (camelCase
//! on the wire). A `StructuredReview` is built once per request from the
//! parsed response and never mutated afterwards.

use serde::{Deserialize, Serialize};

/// Kind of an individual review remark.
///
/// Closed set: a response using any other value fails validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointKind {
    /// A problem or likely bug in the code
    Finding,
    /// A recommended change that is not strictly a bug
    Suggestion,
    /// Something the code does well
    Positive,
    /// A question back to the author
    Question,
}

impl PointKind {
    pub fn marker(&self) -> &'static str {
        match self {
            PointKind::Finding => "!",
            PointKind::Suggestion => "~",
            PointKind::Positive => "+",
            PointKind::Question => "?",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PointKind::Finding => "Finding",
            PointKind::Suggestion => "Suggestion",
            PointKind::Positive => "Positive",
            PointKind::Question => "Question",
        }
    }
}

/// One atomic review remark.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewPoint {
    #[serde(rename = "type")]
    pub kind: PointKind,
    pub description: String,
    /// The relevant snippet of the original code, if the model quoted one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_snippet: Option<String>,
    /// A suggested replacement snippet, if applicable
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_number: Option<u32>,
}

/// A titled group of review points (e.g. "Correctness & Bugs").
///
/// A section with no points is valid; the renderer skips it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewSection {
    pub title: String,
    pub points: Vec<ReviewPoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

/// The complete review returned by the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredReview {
    pub overall_summary: String,
    /// Always present, possibly empty. Its absence in a response is a
    /// validation failure.
    pub review_sections: Vec<ReviewSection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_thoughts: Option<String>,
    /// The programming language the model believes it reviewed. Echoes
    /// the prompt's language label, not the feedback language.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_detected: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_kind_wire_names_are_lowercase() {
        assert_eq!(serde_json::to_string(&PointKind::Finding).unwrap(), "\"finding\"");
        assert_eq!(serde_json::to_string(&PointKind::Question).unwrap(), "\"question\"");
    }

    #[test]
    fn test_unknown_point_kind_is_rejected() {
        let result = serde_json::from_str::<PointKind>("\"nitpick\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_review_point_wire_field_names() {
        let json = r#"{
            "type": "suggestion",
            "description": "Use a match here",
            "codeSnippet": "if x {",
            "suggestedCode": "match x {",
            "lineNumber": 12
        }"#;
        let point: ReviewPoint = serde_json::from_str(json).unwrap();
        assert_eq!(point.kind, PointKind::Suggestion);
        assert_eq!(point.code_snippet.as_deref(), Some("if x {"));
        assert_eq!(point.suggested_code.as_deref(), Some("match x {"));
        assert_eq!(point.line_number, Some(12));
    }

    #[test]
    fn test_optional_fields_default_to_none() {
        let json = r#"{"type": "positive", "description": "Nice naming"}"#;
        let point: ReviewPoint = serde_json::from_str(json).unwrap();
        assert!(point.code_snippet.is_none());
        assert!(point.suggested_code.is_none());
        assert!(point.line_number.is_none());
    }

    #[test]
    fn test_structured_review_round_trip() {
        let review = StructuredReview {
            overall_summary: "Solid overall".into(),
            review_sections: vec![ReviewSection {
                title: "Style & Formatting".into(),
                points: vec![],
                summary: None,
            }],
            final_thoughts: Some("Keep going".into()),
            language_detected: Some("Rust".into()),
        };
        let json = serde_json::to_string(&review).unwrap();
        assert!(json.contains("\"overallSummary\""));
        assert!(json.contains("\"reviewSections\""));
        assert!(json.contains("\"finalThoughts\""));
        assert!(json.contains("\"languageDetected\""));
        let back: StructuredReview = serde_json::from_str(&json).unwrap();
        assert_eq!(back, review);
    }
}
