//! Review pipeline: prompt construction, the Gemini call, and response
//! parsing.
//!
//! `review_code` is the one operation consumers call. It performs exactly
//! one network round trip and either returns a complete
//! `StructuredReview` or a single `ReviewError`; there is no partial
//! result and nothing is retried.

pub mod client;
pub mod parse;
pub mod prompts;

pub use client::GeminiClient;
pub use parse::parse_review;
pub use prompts::build_review_prompt;

use crate::catalog::{language_label, review_language_label};
use crate::error::ReviewError;
use crate::review::StructuredReview;

/// Seam between orchestration and the HTTP client, so the pipeline can be
/// exercised with a stub.
#[allow(async_fn_in_trait)]
pub trait GenerateText {
    /// Whether a credential is available. Checked before any request.
    fn api_key_configured(&self) -> bool;

    /// Issue one generation call and return the raw response text.
    async fn generate(&self, prompt: &str) -> Result<String, ReviewError>;
}

/// Submit code for review and return the parsed, validated result.
///
/// Sequence: input check, credential check, prompt build, one generate
/// call, parse. Each step short-circuits on failure. Empty or
/// whitespace-only code and a missing credential are both rejected before
/// the network is touched.
pub async fn review_code(
    client: &impl GenerateText,
    code: &str,
    language: &str,
    review_language: &str,
) -> Result<StructuredReview, ReviewError> {
    if code.trim().is_empty() {
        return Err(ReviewError::EmptyInput);
    }
    if !client.api_key_configured() {
        return Err(ReviewError::MissingApiKey);
    }

    let programming_label = language_label(language);
    let feedback_label = review_language_label(review_language);

    let prompt = build_review_prompt(code, language, programming_label, feedback_label);
    let raw = client.generate(&prompt).await?;
    parse_review(&raw)
}
