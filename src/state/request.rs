//! Recommendation request data model

use crate::webhook::RecommendationError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Business profile submitted to the recommendation webhook
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormInput {
    pub industry: String,
    pub company_size: String,
    #[serde(default)]
    pub business_context: String,
    pub problem: String,
}

impl FormInput {
    pub fn new(
        industry: impl Into<String>,
        company_size: impl Into<String>,
        business_context: impl Into<String>,
        problem: impl Into<String>,
    ) -> Self {
        Self {
            industry: industry.into(),
            company_size: company_size.into(),
            business_context: business_context.into(),
            problem: problem.into(),
        }
    }

    /// Required fields are all non-empty after trimming
    pub fn is_complete(&self) -> bool {
        !self.industry.trim().is_empty()
            && !self.company_size.trim().is_empty()
            && !self.problem.trim().is_empty()
    }
}

/// Recommendation returned by the webhook
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendation {
    pub strategic: String,
    pub bpa: String,
}

impl Recommendation {
    /// Build a recommendation only when both parts are present and non-empty.
    /// Values are kept verbatim.
    pub fn from_parts(strategic: Option<String>, bpa: Option<String>) -> Option<Self> {
        match (strategic, bpa) {
            (Some(strategic), Some(bpa))
                if !strategic.is_empty() && !bpa.is_empty() =>
            {
                Some(Self { strategic, bpa })
            }
            _ => None,
        }
    }

    /// Plain-text rendition used for the clipboard
    pub fn to_plain_text(&self) -> String {
        format!(
            "Strategic Recommendation\n{}\n\nBPA Opportunity\n{}\n",
            self.strategic, self.bpa
        )
    }
}

/// Lifecycle of the recommendation request
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    /// A request is in flight; completions for any other id are stale
    Loading { request_id: Uuid },
    Success(Recommendation),
    Error(RecommendationError),
}

impl RequestState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    pub fn recommendation(&self) -> Option<&Recommendation> {
        match self {
            Self::Success(recommendation) => Some(recommendation),
            _ => None,
        }
    }

    /// Short label for the status bar
    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "Ready",
            Self::Loading { .. } => "Analyzing...",
            Self::Success(_) => "Recommendations ready",
            Self::Error(_) => "Request failed",
        }
    }
}
