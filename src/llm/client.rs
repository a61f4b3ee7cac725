//! HTTP client for the Gemini generate-content endpoint.
//!
//! One request per review, no retries, no streaming. The response is
//! requested as JSON via `responseMimeType` so the model is less tempted
//! to wrap its answer in prose.

use crate::config::Config;
use crate::error::ReviewError;
use serde::{Deserialize, Serialize};

use super::GenerateText;

/// Gemini REST endpoint, with the model id interpolated.
const GEMINI_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Fixed model used for reviews.
const GEMINI_MODEL: &str = "gemini-2.5-flash-preview-04-17";

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseMimeType")]
    response_mime_type: String,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

/// Client for one-shot Gemini calls.
pub struct GeminiClient {
    api_key: Option<String>,
    http: reqwest::Client,
}

impl GeminiClient {
    /// Build a client from the loaded configuration. The credential is
    /// resolved here, once; whether one exists is checked before any
    /// request is attempted.
    pub fn new(config: &Config) -> Self {
        Self {
            api_key: config.get_api_key(),
            http: reqwest::Client::new(),
        }
    }
}

impl GenerateText for GeminiClient {
    fn api_key_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn generate(&self, prompt: &str) -> Result<String, ReviewError> {
        let api_key = self.api_key.as_ref().ok_or(ReviewError::MissingApiKey)?;

        let url = format!("{}/{}:generateContent", GEMINI_URL, GEMINI_MODEL);
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
            },
        };

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| ReviewError::Transport {
                detail: e.to_string(),
            })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| ReviewError::Transport {
            detail: e.to_string(),
        })?;

        if !status.is_success() {
            // Gemini reports a bad key as 400 INVALID_ARGUMENT, other
            // auth problems as 401/403.
            return Err(match status.as_u16() {
                400 if text.contains("API key") => ReviewError::InvalidApiKey,
                401 | 403 => ReviewError::InvalidApiKey,
                _ => ReviewError::Transport {
                    detail: format!("API error {}: {}", status, truncate_str(&text, 200)),
                },
            });
        }

        let parsed: GenerateResponse =
            serde_json::from_str(&text).map_err(|e| ReviewError::Transport {
                detail: format!("unrecognized response envelope: {}", e),
            })?;

        let content = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|c| {
                c.parts
                    .into_iter()
                    .map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if content.trim().is_empty() {
            return Err(ReviewError::EmptyResponse);
        }

        Ok(content)
    }
}

/// Truncate a string for display (Unicode-safe)
pub(crate) fn truncate_str(s: &str, max_chars: usize) -> &str {
    if s.chars().count() <= max_chars {
        s
    } else {
        let byte_idx = s
            .char_indices()
            .nth(max_chars)
            .map(|(i, _)| i)
            .unwrap_or(s.len());
        &s[..byte_idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_presence_is_visible_before_any_request() {
        let config = Config::default();
        // No env var set in tests for this name pattern; if the host
        // leaks one, skip rather than fail spuriously.
        if std::env::var(crate::config::API_KEY_ENV).is_ok() {
            return;
        }
        let client = GeminiClient::new(&config);
        assert!(!client.api_key_configured());
    }

    #[test]
    fn test_generate_response_envelope_shape() {
        let json = r#"{
            "candidates": [
                { "content": { "parts": [ { "text": "{\"ok\":true}" } ] } }
            ]
        }"#;
        let parsed: GenerateResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.candidates.len(), 1);
        let text: String = parsed.candidates[0]
            .content
            .as_ref()
            .unwrap()
            .parts
            .iter()
            .map(|p| p.text.clone())
            .collect();
        assert_eq!(text, "{\"ok\":true}");
    }

    #[test]
    fn test_envelope_tolerates_missing_candidates() {
        let parsed: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.candidates.is_empty());
    }

    #[test]
    fn test_truncate_str_is_char_safe() {
        assert_eq!(truncate_str("héllo", 2), "hé");
        assert_eq!(truncate_str("hi", 10), "hi");
    }
}
