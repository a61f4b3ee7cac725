//! Prompt construction for the review request.
//!
//! `build_review_prompt` is a pure function of its inputs plus the static
//! catalogs: same inputs, same prompt. The prompt pins down the JSON
//! contract the parser expects, so changes here and in `parse.rs` move
//! together.

/// Review dimensions the model is asked to cover, in order.
pub(crate) const REVIEW_DIMENSIONS: &[&str] = &[
    "Correctness & Bugs",
    "Best Practices & Idioms",
    "Clarity & Readability",
    "Efficiency & Performance",
    "Security Vulnerabilities",
    "Maintainability & Scalability",
    "Style & Formatting",
    "Suggestions for Improvement",
];

/// Build the full review prompt.
///
/// `language_code` tags the fenced code block (a hint for the model),
/// `programming_label` and `feedback_label` are the resolved display
/// names. Every natural-language field of the response must be written in
/// the feedback language, while `languageDetected` echoes the programming
/// language label. That asymmetry is deliberate.
pub fn build_review_prompt(
    code: &str,
    language_code: &str,
    programming_label: &str,
    feedback_label: &str,
) -> String {
    let mut prompt = format!(
        "You are an expert, meticulous, and helpful AI code reviewer.\n\
         Your task is to review the following {programming_label} code and provide comprehensive feedback.\n\
         \n\
         **IMPORTANT: All parts of your review (summaries, titles, descriptions, points, final thoughts, etc.) MUST be in {feedback_label}.**\n\
         \n\
         Please analyze the code for the following aspects and return your response STRICTLY in the specified JSON format.\n\
         Do NOT include any explanatory text or markdown before or after the JSON object.\n\
         \n\
         JSON structure to follow:\n\
         {{\n\
         \x20 \"overallSummary\": \"A brief overall summary of the code quality (2-3 sentences), in {feedback_label}.\",\n\
         \x20 \"reviewSections\": [\n"
    );

    for (i, dimension) in REVIEW_DIMENSIONS.iter().enumerate() {
        if i == 0 {
            prompt.push_str(&format!(
                "    {{\n\
                 \x20     \"title\": \"{dimension} (in {feedback_label})\",\n\
                 \x20     \"points\": [\n\
                 \x20       {{\n\
                 \x20         \"type\": \"finding\" | \"suggestion\" | \"positive\" | \"question\",\n\
                 \x20         \"description\": \"Detailed description of the point. Be specific. MUST be in {feedback_label}.\",\n\
                 \x20         \"codeSnippet\": \"Optional: the relevant snippet of the original code being discussed.\",\n\
                 \x20         \"suggestedCode\": \"Optional: a snippet of suggested code if applicable.\",\n\
                 \x20         \"lineNumber\": 1\n\
                 \x20       }}\n\
                 \x20     ],\n\
                 \x20     \"summary\": \"Optional: a brief summary for this section, in {feedback_label}.\"\n\
                 \x20   }},\n"
            ));
        } else {
            prompt.push_str(&format!(
                "    {{ \"title\": \"{dimension} (in {feedback_label})\", \"points\": [ ... ], \"summary\": \"Optional (in {feedback_label})\" }},\n"
            ));
        }
    }

    prompt.push_str(&format!(
        "  ],\n\
         \x20 \"finalThoughts\": \"Optional: concluding remarks or overall advice, in {feedback_label}.\",\n\
         \x20 \"languageDetected\": \"{programming_label}\"\n\
         }}\n\
         \n\
         You may add or remove sections based on relevance to the code.\n\
         The \"languageDetected\" field should remain the programming language, not the feedback language.\n\
         Ensure all text within description, codeSnippet, suggestedCode, and summary fields is properly escaped for JSON.\n\
         Provide constructive and actionable advice in {feedback_label}.\n\
         \n\
         Code to review:\n\
         ```{language_code}\n\
         {code}\n\
         ```\n\
         \n\
         Your JSON review (strictly in the format above, with all text in {feedback_label}):\n"
    ));

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_contains_verbatim_code_and_labels() {
        let code = "fn main() {\n    println!(\"hi\");\n}";
        let prompt = build_review_prompt(code, "rust", "Rust", "Deutsch (German)");
        assert!(prompt.contains(code));
        assert!(prompt.contains("Deutsch (German)"));
        assert!(prompt.contains("Rust"));
    }

    #[test]
    fn test_prompt_tags_code_fence_with_language_code() {
        let prompt = build_review_prompt("print('x')", "python", "Python", "English");
        assert!(prompt.contains("```python\nprint('x')\n```"));
    }

    #[test]
    fn test_prompt_lists_every_review_dimension() {
        let prompt = build_review_prompt("x = 1", "python", "Python", "English");
        for dimension in REVIEW_DIMENSIONS {
            assert!(prompt.contains(dimension), "missing dimension: {}", dimension);
        }
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let a = build_review_prompt("let x = 1;", "javascript", "JavaScript", "English");
        let b = build_review_prompt("let x = 1;", "javascript", "JavaScript", "English");
        assert_eq!(a, b);
    }

    #[test]
    fn test_prompt_has_no_option_debug_artifacts() {
        let prompt = build_review_prompt("x", "other", "code", "English");
        assert!(!prompt.contains("None"));
        assert!(!prompt.contains("null"));
        assert!(!prompt.contains("Some("));
    }

    #[test]
    fn test_detected_language_stays_programming_language() {
        // The response template must pin languageDetected to the
        // programming label even when the feedback language differs.
        let prompt = build_review_prompt("x = 1", "python", "Python", "Русский (Russian)");
        assert!(prompt.contains("\"languageDetected\": \"Python\""));
    }
}
