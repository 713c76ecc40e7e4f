//! Trait abstraction for the sign-up gateway to enable mocking in tests

use crate::state::Account;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::GatewayError;

/// Data forwarded to the gateway. The confirmation and terms fields stay local.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

impl fmt::Debug for SignUpRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignUpRequest")
            .field("full_name", &self.full_name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Successful gateway reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignUpResponse {
    /// Optional confirmation text from the gateway
    #[serde(default)]
    pub message: Option<String>,
    pub user: Account,
}

/// Trait for account creation, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SignUpGateway: Send + Sync {
    /// Create an account, resolving with the new record or rejecting
    async fn sign_up(&self, request: SignUpRequest) -> Result<SignUpResponse, GatewayError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> SignUpRequest {
        SignUpRequest {
            full_name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            password: "Secret123".to_string(),
        }
    }

    #[test]
    fn test_request_serializes_only_forwarded_fields() {
        let json = serde_json::to_value(request()).unwrap();
        let mut keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(keys, vec!["email", "fullName", "password"]);
    }

    #[test]
    fn test_request_debug_redacts_password() {
        let debug_str = format!("{:?}", request());
        assert!(debug_str.contains("jane@example.com"));
        assert!(!debug_str.contains("Secret123"));
    }

    #[test]
    fn test_response_message_is_optional() {
        let json = r#"{"user":{"id":"x","name":"Al","email":"a@b.com","createdAt":"2024-01-01T00:00:00Z"}}"#;
        let parsed: SignUpResponse = serde_json::from_str(json).unwrap();
        assert!(parsed.message.is_none());
        assert_eq!(parsed.user.id, "x");
    }
}
