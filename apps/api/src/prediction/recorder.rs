//! Best-effort submission logging.
//!
//! The recorder is an analytics sink, not part of the correctness contract:
//! it runs only after a successful prediction with at least one college, and
//! its failures are logged and swallowed at this boundary — they never reach
//! the user or roll back a Success.

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Serialize;
use tracing::warn;

use crate::models::input::{Category, IndiaState, RequestInput};

/// One-way sink for completed submissions.
#[async_trait]
pub trait SubmissionRecorder: Send + Sync {
    async fn record(&self, input: &RequestInput) -> Result<()>;
}

#[derive(Debug, Serialize)]
struct SubmissionPayload<'a> {
    score: u16,
    category: Category,
    state: IndiaState,
    mobile: &'a str,
    submitted_at: DateTime<Utc>,
}

/// POSTs the submission to a Google Apps Script webhook. The body is JSON
/// sent as `text/plain`: Apps Script only accepts simple (non-preflighted)
/// requests, and no response body is consumed.
pub struct WebhookRecorder {
    client: Client,
    url: String,
}

impl WebhookRecorder {
    pub fn new(url: String) -> Self {
        Self {
            client: Client::new(),
            url,
        }
    }
}

#[async_trait]
impl SubmissionRecorder for WebhookRecorder {
    async fn record(&self, input: &RequestInput) -> Result<()> {
        let payload = SubmissionPayload {
            score: input.score,
            category: input.category,
            state: input.state,
            mobile: &input.mobile,
            submitted_at: Utc::now(),
        };

        self.client
            .post(&self.url)
            .header("content-type", "text/plain")
            .body(serde_json::to_string(&payload)?)
            .send()
            .await?;

        Ok(())
    }
}

/// Used when no webhook URL is configured: warns and drops the submission,
/// keeping the rest of the pipeline identical.
pub struct NoopRecorder;

#[async_trait]
impl SubmissionRecorder for NoopRecorder {
    async fn record(&self, _input: &RequestInput) -> Result<()> {
        warn!("submission log URL is not configured — skipping data save");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_carries_the_four_form_fields() {
        let payload = SubmissionPayload {
            score: 580,
            category: Category::Obc,
            state: IndiaState::UttarPradesh,
            mobile: "9876543210",
            submitted_at: Utc::now(),
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["score"], 580);
        assert_eq!(value["category"], "OBC");
        assert_eq!(value["state"], "Uttar Pradesh");
        assert_eq!(value["mobile"], "9876543210");
        assert!(value.get("submitted_at").is_some());
    }

    #[tokio::test]
    async fn test_noop_recorder_always_succeeds() {
        let input = RequestInput {
            score: 450,
            category: Category::Sc,
            state: IndiaState::Rajasthan,
            mobile: "9876543210".to_string(),
        };
        assert!(NoopRecorder.record(&input).await.is_ok());
    }
}
