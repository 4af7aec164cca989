//! Inference client — the single point of entry for all generative calls.
//!
//! ARCHITECTURAL RULE: no other module may call the Gemini API directly.
//! The lifecycle controller depends only on the [`InferenceClient`] trait,
//! so tests substitute a mock without touching the network.
//!
//! Model: gemini-2.5-flash (hardcoded — do not make configurable to prevent
//! drift between the prompt wording and model behavior).

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::prediction::builder::PredictionPrompt;

const GEMINI_API_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent";
/// The model used for all inference calls.
pub const MODEL: &str = "gemini-2.5-flash";
/// Hard ceiling on one inference attempt. There are no retries — a stuck
/// request must resolve so the user can resubmit.
const INFER_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(60);

/// Inference failures. The lifecycle layer collapses every variant into one
/// generic user-facing message; the variants exist for logs.
#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("inference returned no text content")]
    EmptyContent,

    #[error("inference timed out after {0:?}")]
    Timeout(std::time::Duration),
}

/// The seam between the pipeline and the remote service: send one prompt,
/// get raw text back, or fail. One attempt per call — resubmission is the
/// user's retry.
#[async_trait]
pub trait InferenceClient: Send + Sync {
    async fn infer(&self, prompt: &PredictionPrompt) -> Result<String, InferenceError>;
}

#[derive(Debug, Serialize)]
struct GeminiRequest<'a> {
    contents: Vec<GeminiContent<'a>>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig<'a>,
}

#[derive(Debug, Serialize)]
struct GeminiContent<'a> {
    parts: Vec<GeminiPart<'a>>,
}

#[derive(Debug, Serialize)]
struct GeminiPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct GenerationConfig<'a> {
    #[serde(rename = "responseMimeType")]
    response_mime_type: &'a str,
    #[serde(rename = "responseSchema")]
    response_schema: &'a Value,
}

#[derive(Debug, Deserialize)]
pub struct GeminiResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: CandidateContent,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
pub struct CandidatePart {
    pub text: Option<String>,
}

impl GeminiResponse {
    /// Extracts the text of the first candidate's first text part.
    pub fn text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .parts
            .iter()
            .find_map(|p| p.text.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: String,
}

/// Production client for the Gemini `generateContent` endpoint. The prompt's
/// response schema is sent as a structural constraint, so the reply is JSON
/// matching the college contract or the call fails.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
}

impl GeminiClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(INFER_TIMEOUT)
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }

    async fn call(&self, prompt: &PredictionPrompt) -> Result<String, InferenceError> {
        let request_body = GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart {
                    text: &prompt.instruction,
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: &prompt.response_schema,
            },
        };

        let response = self
            .client
            .post(GEMINI_API_URL)
            .header("x-goog-api-key", &self.api_key)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Prefer the service's own error message when it parses
            let message = serde_json::from_str::<GeminiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(InferenceError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let reply: GeminiResponse = response.json().await?;
        let text = reply.text().ok_or(InferenceError::EmptyContent)?;

        debug!("inference reply: {} bytes", text.len());
        Ok(text.to_string())
    }
}

#[async_trait]
impl InferenceClient for GeminiClient {
    async fn infer(&self, prompt: &PredictionPrompt) -> Result<String, InferenceError> {
        tokio::time::timeout(INFER_TIMEOUT, self.call(prompt))
            .await
            .map_err(|_| InferenceError::Timeout(INFER_TIMEOUT))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_extraction_from_first_candidate() {
        let json = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "[]"}]}},
                {"content": {"parts": [{"text": "ignored"}]}}
            ]
        }"#;
        let reply: GeminiResponse = serde_json::from_str(json).unwrap();
        assert_eq!(reply.text(), Some("[]"));
    }

    #[test]
    fn test_empty_candidates_yield_no_text() {
        let reply: GeminiResponse = serde_json::from_str(r#"{"candidates": []}"#).unwrap();
        assert_eq!(reply.text(), None);

        let reply: GeminiResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(reply.text(), None);
    }

    #[test]
    fn test_skips_non_text_parts() {
        let json = r#"{
            "candidates": [
                {"content": {"parts": [{"text": null}, {"text": "[1]"}]}}
            ]
        }"#;
        let reply: GeminiResponse = serde_json::from_str(json).unwrap();
        assert_eq!(reply.text(), Some("[1]"));
    }

    #[test]
    fn test_error_body_decodes_service_message() {
        let body = r#"{"error": {"message": "API key not valid", "code": 400}}"#;
        let decoded: GeminiError = serde_json::from_str(body).unwrap();
        assert_eq!(decoded.error.message, "API key not valid");
    }

    #[test]
    fn test_request_wire_shape() {
        let prompt = PredictionPrompt {
            instruction: "find colleges".to_string(),
            response_schema: serde_json::json!({"type": "ARRAY"}),
        };
        let request = GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart {
                    text: &prompt.instruction,
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: &prompt.response_schema,
            },
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["contents"][0]["parts"][0]["text"], "find colleges");
        assert_eq!(
            value["generationConfig"]["responseMimeType"],
            "application/json"
        );
        assert_eq!(value["generationConfig"]["responseSchema"]["type"], "ARRAY");
    }
}
