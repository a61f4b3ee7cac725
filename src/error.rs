//! Error types for the review pipeline.
//!
//! Every failure mode a review request can hit is a distinct variant so
//! the CLI can show a precise message. All of them are terminal for the
//! request; nothing in this crate retries.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReviewError {
    /// Caller submitted empty or whitespace-only code. Checked before
    /// any network activity.
    #[error("No code to review. Paste or pipe some code first.")]
    EmptyInput,

    /// No credential configured. Checked eagerly, before any request.
    #[error(
        "Gemini API key is missing. Set the GEMINI_API_KEY environment \
         variable or run 'nebula --setup'."
    )]
    MissingApiKey,

    /// The provider rejected the credential.
    #[error("Invalid Gemini API key. Check your GEMINI_API_KEY environment variable.")]
    InvalidApiKey,

    /// The provider answered successfully but with no text.
    #[error(
        "Received an empty review from Gemini. The model might be unable \
         to process this request."
    )]
    EmptyResponse,

    /// The response text was not valid JSON, or lacked the expected shape.
    #[error("Failed to parse the review feedback: {reason}")]
    MalformedResponse { reason: String },

    /// The call itself failed: network error or a service-side failure.
    #[error("Failed to get review from Gemini: {detail}")]
    Transport { detail: String },
}
