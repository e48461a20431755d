//! Webhook client module for the recommendation service

mod client;
mod error;
mod traits;

pub use client::{WebhookClient, DEFAULT_WEBHOOK_URL, WEBHOOK_URL_ENV};
pub use error::RecommendationError;
pub use traits::RecommendationClientTrait;

#[cfg(test)]
pub use traits::MockRecommendationClientTrait;
