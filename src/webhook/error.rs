//! Error taxonomy for recommendation requests

use thiserror::Error;

/// Why a recommendation request failed.
///
/// The `Display` text is the user-facing message shown in the alert and the
/// notification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecommendationError {
    /// Network unreachable, DNS, refused connection
    #[error("Unable to reach the recommendation service. Please check your connection.")]
    Connectivity { detail: String },
    /// No response within the request timeout
    #[error("The request timed out. Please try again.")]
    Timeout,
    /// Response received with a non-success status
    #[error("The recommendation service is temporarily unavailable.")]
    Service { status: u16 },
    /// Response body lacked a usable `strategic` or `bpa`
    #[error("Received incomplete recommendations. Please try again.")]
    Incomplete,
}

impl RecommendationError {
    /// Notification title for this error kind
    pub fn title(&self) -> &'static str {
        match self {
            Self::Connectivity { .. } => "Connection Error",
            Self::Timeout => "Request Timeout",
            Self::Service { .. } => "Service Unavailable",
            Self::Incomplete => "Incomplete Response",
        }
    }

    /// Stable message class used in logs
    pub fn class(&self) -> &'static str {
        match self {
            Self::Connectivity { .. } => "connectivity",
            Self::Timeout => "timeout",
            Self::Service { .. } => "service unavailable",
            Self::Incomplete => "incomplete data",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_distinct() {
        let errors = [
            RecommendationError::Connectivity {
                detail: "dns".to_string(),
            },
            RecommendationError::Timeout,
            RecommendationError::Service { status: 500 },
            RecommendationError::Incomplete,
        ];
        let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
        for (i, a) in messages.iter().enumerate() {
            for b in messages.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_connectivity_message_hides_detail() {
        let error = RecommendationError::Connectivity {
            detail: "tcp connect error: Connection refused".to_string(),
        };
        assert!(error.to_string().contains("check your connection"));
        assert!(!error.to_string().contains("refused"));
    }

    #[test]
    fn test_classes() {
        assert_eq!(RecommendationError::Timeout.class(), "timeout");
        assert_eq!(
            RecommendationError::Service { status: 503 }.class(),
            "service unavailable"
        );
        assert_eq!(RecommendationError::Incomplete.class(), "incomplete data");
    }

    #[test]
    fn test_titles() {
        assert_eq!(RecommendationError::Timeout.title(), "Request Timeout");
        assert_eq!(
            RecommendationError::Service { status: 500 }.title(),
            "Service Unavailable"
        );
    }
}
