//! Sign-up gateway: the asynchronous service that creates accounts

mod error;
mod simulated;
mod traits;

pub use error::{GatewayError, UNEXPECTED_ERROR_MESSAGE};
pub use simulated::{SimulatedGateway, DEFAULT_DELAY, DEFAULT_FAILURE_RATE};
pub use traits::{SignUpGateway, SignUpRequest, SignUpResponse};

#[cfg(test)]
pub use traits::MockSignUpGateway;
