//! Trait abstraction for the recommendation client to enable mocking in tests

use super::RecommendationError;
use crate::state::{FormInput, Recommendation};
use async_trait::async_trait;

/// Trait for recommendation service operations, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecommendationClientTrait: Send + Sync {
    /// Post the business profile and return the recommendation pair
    async fn fetch_recommendation(
        &self,
        input: &FormInput,
    ) -> Result<Recommendation, RecommendationError>;
}
