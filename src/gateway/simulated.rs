//! In-process gateway that simulates a remote sign-up service
//!
//! Waits a fixed delay, then accepts or rejects the request at random.

use crate::state::Account;
use async_trait::async_trait;
use chrono::Utc;
use rand::Rng;
use std::time::Duration;
use uuid::Uuid;

use super::{GatewayError, SignUpGateway, SignUpRequest, SignUpResponse};

/// Default simulated network delay
pub const DEFAULT_DELAY: Duration = Duration::from_millis(1500);

/// Default share of requests that are rejected
pub const DEFAULT_FAILURE_RATE: f64 = 0.1;

const SUCCESS_MESSAGE: &str = "Account created successfully!";
const DUPLICATE_EMAIL_MESSAGE: &str =
    "This email address is already registered. Please use a different email.";

/// Length of the generated account id
const ID_LEN: usize = 9;

/// Simulated sign-up service
#[derive(Debug, Clone)]
pub struct SimulatedGateway {
    delay: Duration,
    failure_rate: f64,
}

impl SimulatedGateway {
    /// Create a gateway with the given delay and rejection probability.
    /// The probability is clamped to `0.0..=1.0`.
    pub fn new(delay: Duration, failure_rate: f64) -> Self {
        let failure_rate = if failure_rate.is_nan() {
            DEFAULT_FAILURE_RATE
        } else {
            failure_rate.clamp(0.0, 1.0)
        };
        Self {
            delay,
            failure_rate,
        }
    }

    pub fn failure_rate(&self) -> f64 {
        self.failure_rate
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    fn roll_rejection(&self) -> bool {
        rand::thread_rng().gen_bool(self.failure_rate)
    }
}

impl Default for SimulatedGateway {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY, DEFAULT_FAILURE_RATE)
    }
}

#[async_trait]
impl SignUpGateway for SimulatedGateway {
    async fn sign_up(&self, request: SignUpRequest) -> Result<SignUpResponse, GatewayError> {
        let delay_ms = self.delay.as_millis() as u64;
        tracing::debug!(email = %request.email, delay_ms, "simulating sign-up");
        tokio::time::sleep(self.delay).await;

        if self.roll_rejection() {
            tracing::warn!(email = %request.email, "simulated sign-up rejected");
            return Err(GatewayError::rejected(DUPLICATE_EMAIL_MESSAGE));
        }

        let user = Account {
            id: generate_id(),
            name: request.full_name,
            email: request.email,
            created_at: Utc::now(),
        };
        tracing::info!(account_id = %user.id, "simulated sign-up accepted");

        Ok(SignUpResponse {
            message: Some(SUCCESS_MESSAGE.to_string()),
            user,
        })
    }
}

/// Short opaque id taken from a random UUID
fn generate_id() -> String {
    Uuid::new_v4().simple().to_string()[..ID_LEN].to_string()
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
    fn test_default_delay_and_failure_rate() {
        let gateway = SimulatedGateway::default();
        assert_eq!(gateway.delay(), Duration::from_millis(1500));
        assert_eq!(gateway.failure_rate(), 0.1);
    }

    #[test]
    fn test_failure_rate_is_clamped() {
        assert_eq!(SimulatedGateway::new(Duration::ZERO, 4.0).failure_rate(), 1.0);
        assert_eq!(SimulatedGateway::new(Duration::ZERO, -1.0).failure_rate(), 0.0);
        assert_eq!(
            SimulatedGateway::new(Duration::ZERO, f64::NAN).failure_rate(),
            DEFAULT_FAILURE_RATE
        );
    }

    #[test]
    fn test_generated_ids_are_short_and_distinct() {
        let a = generate_id();
        let b = generate_id();
        assert_eq!(a.len(), ID_LEN);
        assert!(a.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn test_never_failing_gateway_creates_account() {
        let gateway = SimulatedGateway::new(Duration::ZERO, 0.0);
        let response = gateway.sign_up(request()).await.unwrap();
        assert_eq!(response.user.name, "Jane Doe");
        assert_eq!(response.user.email, "jane@example.com");
        assert_eq!(response.message.as_deref(), Some(SUCCESS_MESSAGE));
    }

    #[tokio::test]
    async fn test_always_failing_gateway_rejects_with_message() {
        let gateway = SimulatedGateway::new(Duration::ZERO, 1.0);
        let err = gateway.sign_up(request()).await.unwrap_err();
        assert_eq!(err, GatewayError::rejected(DUPLICATE_EMAIL_MESSAGE));
    }
}
