//! HTTP client for the recommendation webhook
//!
//! Posts the business profile as JSON and classifies the outcome into a
//! [`Recommendation`] or a [`RecommendationError`].

use super::{RecommendationClientTrait, RecommendationError};
use crate::state::{FormInput, Recommendation};
use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

/// Default webhook address
pub const DEFAULT_WEBHOOK_URL: &str = "http://127.0.0.1:5678/webhook/recommendations";

/// Environment variable overriding the configured webhook address
pub const WEBHOOK_URL_ENV: &str = "SYNKRONE_WEBHOOK_URL";

const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Webhook response body. Both fields are optional here so that a partial
/// body is classified as incomplete rather than as a decode failure.
#[derive(Debug, Deserialize)]
struct RecommendationBody {
    #[serde(default)]
    strategic: Option<String>,
    #[serde(default)]
    bpa: Option<String>,
}

/// Client for the recommendation webhook
pub struct WebhookClient {
    http: reqwest::Client,
    url: String,
}

impl WebhookClient {
    /// Create a new webhook client for `url`
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            http,
            url: url.into(),
        })
    }

    /// The webhook address this client posts to
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl RecommendationClientTrait for WebhookClient {
    async fn fetch_recommendation(
        &self,
        input: &FormInput,
    ) -> Result<Recommendation, RecommendationError> {
        let response = self
            .http
            .post(&self.url)
            .json(input)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("Webhook request failed: {e}");
                RecommendationError::Connectivity {
                    detail: e.to_string(),
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Webhook returned status {status}");
            return Err(RecommendationError::Service {
                status: status.as_u16(),
            });
        }

        let body: RecommendationBody = response.json().await.map_err(|e| {
            if e.is_decode() {
                tracing::warn!("Webhook body could not be parsed: {e}");
                RecommendationError::Incomplete
            } else {
                tracing::warn!("Webhook body could not be read: {e}");
                RecommendationError::Connectivity {
                    detail: e.to_string(),
                }
            }
        })?;

        Recommendation::from_parts(body.strategic, body.bpa).ok_or_else(|| {
            tracing::warn!("Webhook body is missing strategic or bpa");
            RecommendationError::Incomplete
        })
    }
}
