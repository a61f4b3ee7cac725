//! Plain-text rendering of a structured review.
//!
//! Pure function of the review and the interface language; printing is
//! the caller's job. Everything below the validated schema is treated as
//! optional and skipped when absent.

use crate::i18n::{detected_language, text, Text, UiLanguage};
use crate::review::{ReviewSection, StructuredReview};

const RULE: &str = "─────────────────────────────────────────────────────────";

/// Render a review as terminal-friendly text.
pub fn render_review(review: &StructuredReview, lang: UiLanguage) -> String {
    let mut out = String::new();

    out.push_str(&format!("\n{}\n", text(lang, Text::FeedbackTitle)));
    out.push_str(RULE);
    out.push('\n');

    out.push_str(&format!("\n{}\n", text(lang, Text::OverallSummary)));
    out.push_str(&format!("  {}\n", review.overall_summary));

    for section in &review.review_sections {
        render_section(&mut out, section);
    }

    if let Some(final_thoughts) = &review.final_thoughts {
        if !final_thoughts.trim().is_empty() {
            out.push_str(&format!("\n{}\n", text(lang, Text::FinalThoughts)));
            out.push_str(&format!("  {}\n", final_thoughts));
        }
    }

    if let Some(label) = &review.language_detected {
        if !label.trim().is_empty() {
            out.push_str(&format!("\n{}\n", detected_language(lang, label)));
        }
    }

    out
}

fn render_section(out: &mut String, section: &ReviewSection) {
    // Sections without points are present in the data but not shown.
    if section.points.is_empty() {
        return;
    }

    out.push_str(&format!("\n{}\n", section.title));

    for point in &section.points {
        let line_info = point
            .line_number
            .map(|n| format!(" (line {})", n))
            .unwrap_or_default();
        out.push_str(&format!(
            "  {} [{}]{} {}\n",
            point.kind.marker(),
            point.kind.label(),
            line_info,
            point.description
        ));

        if let Some(snippet) = &point.code_snippet {
            push_snippet(out, snippet);
        }
        if let Some(suggested) = &point.suggested_code {
            out.push_str("    suggested:\n");
            push_snippet(out, suggested);
        }
    }

    if let Some(summary) = &section.summary {
        if !summary.trim().is_empty() {
            out.push_str(&format!("  » {}\n", summary));
        }
    }
}

fn push_snippet(out: &mut String, snippet: &str) {
    for line in snippet.lines() {
        out.push_str(&format!("      | {}\n", line));
    }
}
