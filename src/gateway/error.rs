//! Gateway failure type

use thiserror::Error;

/// Shown when a failure carries no message of its own
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred. Please try again.";

/// Why a sign-up did not produce an account
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// The gateway refused the request, optionally saying why
    #[error("{}", .message.as_deref().unwrap_or(UNEXPECTED_ERROR_MESSAGE))]
    Rejected { message: Option<String> },
    /// The submission task ended without a response
    #[error("sign-up task ended unexpectedly: {0}")]
    Interrupted(String),
}

impl GatewayError {
    pub fn rejected(message: impl Into<String>) -> Self {
        GatewayError::Rejected {
            message: Some(message.into()),
        }
    }

    /// Message to show the user. Falls back to the generic text when the
    /// failure has nothing human-readable to say.
    pub fn user_message(&self) -> String {
        match self {
            GatewayError::Rejected {
                message: Some(message),
            } if !message.trim().is_empty() => message.clone(),
            _ => UNEXPECTED_ERROR_MESSAGE.to_string(),
        }
    }
}
