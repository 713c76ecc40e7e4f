//! Application state and core logic

use crate::gateway::{GatewayError, SignUpGateway, SignUpResponse};
use crate::state::{AppState, FieldName, Focus, SubmitAttempt, SubmitOutcome, View};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::task::JoinHandle;

type SubmissionTask = JoinHandle<Result<SignUpResponse, GatewayError>>;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Gateway used to create accounts
    gateway: Arc<dyn SignUpGateway>,
    /// In-flight gateway call, at most one
    submission: Option<SubmissionTask>,
    /// Whether the app should quit
    quit: bool,
    /// Status line feedback (gateway confirmation, clipboard)
    pub status_message: Option<String>,
    /// Animation frame counter for the submit spinner
    pub tick: usize,
}

impl App {
    /// Create a new App instance
    pub fn new(gateway: Arc<dyn SignUpGateway>, reveal_passwords: bool) -> Self {
        Self {
            state: AppState::new(reveal_passwords),
            gateway,
            submission: None,
            quit: false,
            status_message: None,
            tick: 0,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn is_submitting(&self) -> bool {
        self.state.form.is_submitting()
    }

    /// Advance animation state
    pub fn on_tick(&mut self) {
        if self.is_submitting() {
            self.tick = self.tick.wrapping_add(1);
        }
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.state.current_view() {
            View::SignUp => self.handle_sign_up_key(key),
            View::Success => self.handle_success_key(key),
        }
    }

    /// Handle keys in the sign-up view
    fn handle_sign_up_key(&mut self, key: KeyEvent) {
        let focus = self.state.focus;
        let on_button = focus == Focus::SubmitButton;
        let on_terms = focus == Focus::Field(FieldName::AcceptTerms);

        match key.code {
            KeyCode::Tab | KeyCode::Down => self.state.next_form_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.prev_form_field(),
            // Keyboard shortcuts (work from anywhere)
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.start_submit();
            }
            KeyCode::Char('w') if key.modifiers.contains(crate::platform::SUBMIT_MODIFIER) => {
                self.start_submit();
            }
            KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.toggle_reveal();
            }
            KeyCode::Esc => self.state.form.dismiss_submit_error(),
            KeyCode::Enter if on_button => self.start_submit(),
            KeyCode::Enter if on_terms => self.state.toggle_terms(),
            KeyCode::Enter => self.state.next_form_field(),
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER) =>
            {
                self.state.form_input_char(c);
            }
            KeyCode::Backspace => self.state.form_backspace(),
            _ => {}
        }
    }

    /// Handle keys in the success view
    fn handle_success_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Char('r') => {
                self.state.clear_form();
                self.status_message = None;
            }
            KeyCode::Char('c') => self.copy_account_id(),
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            _ => {}
        }
    }

    /// Validate and, when valid, send the form to the gateway on a background task
    fn start_submit(&mut self) {
        if self.submission.is_some() {
            tracing::debug!("submit ignored: gateway call outstanding");
            return;
        }
        self.status_message = None;

        match self.state.form.begin_submit() {
            SubmitAttempt::Started(request) => {
                let gateway = Arc::clone(&self.gateway);
                self.tick = 0;
                self.submission = Some(tokio::spawn(async move { gateway.sign_up(request).await }));
            }
            SubmitAttempt::Invalid => {
                // Jump to the first field that needs attention
                if let Some(field) = self.state.form.errors().failing().first() {
                    self.state.focus = Focus::Field(*field);
                }
            }
            SubmitAttempt::Ignored => {}
        }
    }

    /// Apply the gateway result once the background call has finished
    pub async fn poll_submission(&mut self) {
        let finished = self
            .submission
            .as_ref()
            .is_some_and(|task| task.is_finished());
        if finished {
            self.settle_submission().await;
        }
    }

    /// Wait for the outstanding gateway call and apply its result.
    ///
    /// A task that panicked or was cancelled still ends the submission.
    pub async fn settle_submission(&mut self) {
        let Some(task) = self.submission.take() else {
            return;
        };
        let result = match task.await {
            Ok(result) => result,
            Err(err) => {
                tracing::error!(error = %err, "sign-up task failed");
                Err(GatewayError::Interrupted(err.to_string()))
            }
        };
        let message = result.as_ref().ok().and_then(|r| r.message.clone());

        if self.state.form.finish_submit(result) == SubmitOutcome::Succeeded {
            self.status_message = message;
        }
    }

    fn copy_account_id(&mut self) {
        let Some(id) = self.state.form.account().map(|a| a.id.clone()) else {
            return;
        };
        self.status_message = Some(match self.copy_to_clipboard(&id) {
            Ok(()) => "Copied account ID".to_string(),
            Err(err) => {
                tracing::warn!(error = %err, "clipboard unavailable");
                "Clipboard unavailable".to_string()
            }
        });
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }
}
