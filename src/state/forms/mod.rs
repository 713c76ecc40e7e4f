//! Form domain layer
//!
//! Field model and the sign-up form state machine.

mod field;
mod form_state;

pub use field::{mask, FieldName, FieldValue};
pub use form_state::{
    FieldErrors, FormValues, FormView, SignUpForm, SubmissionStatus, SubmitAttempt,
    SubmitOutcome,
};
