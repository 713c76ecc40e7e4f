//! Sign-up form state machine
//!
//! `SignUpForm` owns the field values, per-field errors and submission
//! status. Input reaches it only through the operations below, so each
//! instance is self-contained and several can coexist.

use super::field::{FieldName, FieldValue};
use crate::gateway::{GatewayError, SignUpGateway, SignUpRequest, SignUpResponse};
use crate::state::validation::validate_all;
use crate::state::Account;

/// Raw values of the five inputs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub accept_terms: bool,
}

impl FormValues {
    /// Text of a text field; empty for the toggle field
    pub fn text(&self, field: FieldName) -> &str {
        match field {
            FieldName::FullName => &self.full_name,
            FieldName::Email => &self.email,
            FieldName::Password => &self.password,
            FieldName::ConfirmPassword => &self.confirm_password,
            FieldName::AcceptTerms => "",
        }
    }

    /// Store `value`; the caller checks it with `FieldValue::fits` first
    fn set(&mut self, field: FieldName, value: FieldValue) {
        match (field, value) {
            (FieldName::FullName, FieldValue::Text(v)) => self.full_name = v,
            (FieldName::Email, FieldValue::Text(v)) => self.email = v,
            (FieldName::Password, FieldValue::Text(v)) => self.password = v,
            (FieldName::ConfirmPassword, FieldValue::Text(v)) => self.confirm_password = v,
            (FieldName::AcceptTerms, FieldValue::Toggle(v)) => self.accept_terms = v,
            _ => {}
        }
    }

    /// Payload forwarded to the gateway
    pub fn to_request(&self) -> SignUpRequest {
        SignUpRequest {
            full_name: self.full_name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }
}

/// Per-field error messages. An empty string means valid or not yet validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub accept_terms: String,
}

impl FieldErrors {
    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::FullName => &self.full_name,
            FieldName::Email => &self.email,
            FieldName::Password => &self.password,
            FieldName::ConfirmPassword => &self.confirm_password,
            FieldName::AcceptTerms => &self.accept_terms,
        }
    }

    fn slot_mut(&mut self, field: FieldName) -> &mut String {
        match field {
            FieldName::FullName => &mut self.full_name,
            FieldName::Email => &mut self.email,
            FieldName::Password => &mut self.password,
            FieldName::ConfirmPassword => &mut self.confirm_password,
            FieldName::AcceptTerms => &mut self.accept_terms,
        }
    }

    pub fn clear(&mut self, field: FieldName) {
        self.slot_mut(field).clear();
    }

    /// True when no field has a message
    pub fn is_clear(&self) -> bool {
        FieldName::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    /// Fields that currently fail validation
    pub fn failing(&self) -> Vec<FieldName> {
        FieldName::ALL
            .into_iter()
            .filter(|f| !self.get(*f).is_empty())
            .collect()
    }
}

/// Where the form is in its submission lifecycle
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Pending,
    Failed(String),
    Succeeded(Account),
}

/// Result of asking the form to start a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitAttempt {
    /// Validation passed; the request must be sent and its result passed to `finish_submit`
    Started(SignUpRequest),
    /// At least one field failed; errors are stored and the gateway is not contacted
    Invalid,
    /// A submission is already in flight, or the form has already succeeded
    Ignored,
}

/// Final outcome of `SignUpForm::submit`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Invalid,
    Ignored,
    Succeeded,
    Failed,
}

/// What the view layer should render
#[derive(Debug, Clone, Copy)]
pub enum FormView<'a> {
    Editing {
        values: &'a FormValues,
        errors: &'a FieldErrors,
        submit_error: Option<&'a str>,
        is_submitting: bool,
    },
    Success {
        account: &'a Account,
    },
}

/// The sign-up form and its transition rules
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignUpForm {
    values: FormValues,
    errors: FieldErrors,
    status: SubmissionStatus,
}

impl SignUpForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.status, SubmissionStatus::Pending)
    }

    pub fn submit_error(&self) -> Option<&str> {
        match &self.status {
            SubmissionStatus::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn account(&self) -> Option<&Account> {
        match &self.status {
            SubmissionStatus::Succeeded(account) => Some(account),
            _ => None,
        }
    }

    pub fn view(&self) -> FormView<'_> {
        match &self.status {
            SubmissionStatus::Succeeded(account) => FormView::Success { account },
            _ => FormView::Editing {
                values: &self.values,
                errors: &self.errors,
                submit_error: self.submit_error(),
                is_submitting: self.is_submitting(),
            },
        }
    }

    /// Set one field's value.
    ///
    /// Clears that field's error and any submission-level error. No validation
    /// happens here; it is deferred to the next submit.
    pub fn update_field(&mut self, field: FieldName, value: FieldValue) {
        if matches!(self.status, SubmissionStatus::Succeeded(_)) {
            tracing::debug!(field = field.key(), "ignoring edit on completed form");
            return;
        }
        if !value.fits(field) {
            tracing::warn!(field = field.key(), "value kind does not fit field");
            return;
        }
        self.values.set(field, value);
        tracing::debug!(field = field.key(), "field updated");

        if !self.errors.get(field).is_empty() {
            self.errors.clear(field);
        }
        if matches!(self.status, SubmissionStatus::Failed(_)) {
            self.status = SubmissionStatus::Idle;
        }
    }

    /// Validate the current values and, when they pass, move to `Pending`.
    pub fn begin_submit(&mut self) -> SubmitAttempt {
        match self.status {
            SubmissionStatus::Pending => {
                tracing::debug!("submit ignored: submission already in flight");
                return SubmitAttempt::Ignored;
            }
            SubmissionStatus::Succeeded(_) => {
                tracing::debug!("submit ignored: form already succeeded");
                return SubmitAttempt::Ignored;
            }
            _ => {}
        }

        let (errors, is_valid) = validate_all(&self.values);
        self.errors = errors;
        if !is_valid {
            let failing: Vec<_> = self.errors.failing().iter().map(|f| f.key()).collect();
            tracing::info!(?failing, "submit blocked by validation");
            return SubmitAttempt::Invalid;
        }

        tracing::info!(email = %self.values.email, "submitting sign-up");
        self.status = SubmissionStatus::Pending;
        SubmitAttempt::Started(self.values.to_request())
    }

    /// Leave `Pending` with the gateway's result.
    ///
    /// Must be called exactly once for every `SubmitAttempt::Started`.
    pub fn finish_submit(&mut self, result: Result<SignUpResponse, GatewayError>) -> SubmitOutcome {
        if !self.is_submitting() {
            tracing::warn!("submission result arrived while no submission was pending");
            return SubmitOutcome::Ignored;
        }

        match result {
            Ok(response) => {
                tracing::info!(account_id = %response.user.id, "sign-up succeeded");
                self.status = SubmissionStatus::Succeeded(response.user);
                SubmitOutcome::Succeeded
            }
            Err(err) => {
                tracing::warn!(error = %err, "sign-up failed");
                self.status = SubmissionStatus::Failed(err.user_message());
                SubmitOutcome::Failed
            }
        }
    }

    /// Validate, call the gateway and apply its result in one step
    pub async fn submit<G>(&mut self, gateway: &G) -> SubmitOutcome
    where
        G: SignUpGateway + ?Sized,
    {
        match self.begin_submit() {
            SubmitAttempt::Started(request) => {
                let result = gateway.sign_up(request).await;
                self.finish_submit(result)
            }
            SubmitAttempt::Invalid => SubmitOutcome::Invalid,
            SubmitAttempt::Ignored => SubmitOutcome::Ignored,
        }
    }

    /// Clear the submission-level error only
    pub fn dismiss_submit_error(&mut self) {
        if matches!(self.status, SubmissionStatus::Failed(_)) {
            self.status = SubmissionStatus::Idle;
        }
    }

    /// Discard everything and return to the initial state
    pub fn restart(&mut self) {
        tracing::info!("form restarted");
        *self = Self::default();
    }
}
