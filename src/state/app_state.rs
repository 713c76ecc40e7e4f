//! Application state definitions

use super::forms::{FieldName, FieldValue, SignUpForm};

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    SignUp,
    Success,
}

/// Which element of the sign-up view has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(FieldName),
    SubmitButton,
}

impl Default for Focus {
    fn default() -> Self {
        Focus::Field(FieldName::FullName)
    }
}

impl Focus {
    /// Number of focusable elements: five fields plus the submit button
    pub const COUNT: usize = FieldName::ALL.len() + 1;

    pub fn index(&self) -> usize {
        match self {
            Focus::Field(field) => field.index(),
            Focus::SubmitButton => FieldName::ALL.len(),
        }
    }

    pub fn from_index(index: usize) -> Self {
        FieldName::from_index(index)
            .map(Focus::Field)
            .unwrap_or(Focus::SubmitButton)
    }

    pub fn next(&self) -> Self {
        Self::from_index((self.index() + 1) % Self::COUNT)
    }

    pub fn prev(&self) -> Self {
        if self.index() == 0 {
            Self::from_index(Self::COUNT - 1)
        } else {
            Self::from_index(self.index() - 1)
        }
    }

    pub fn field(&self) -> Option<FieldName> {
        match self {
            Focus::Field(field) => Some(*field),
            Focus::SubmitButton => None,
        }
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    /// The form state machine
    pub form: SignUpForm,
    pub focus: Focus,
    /// Secret fields currently shown in plain text
    pub revealed_fields: Vec<FieldName>,
    /// Start with secrets revealed (restored on restart)
    pub reveal_by_default: bool,
}

impl AppState {
    pub fn new(reveal_by_default: bool) -> Self {
        let mut state = Self {
            reveal_by_default,
            ..Default::default()
        };
        state.reset_reveal();
        state
    }

    /// View derived from the submission status
    pub fn current_view(&self) -> View {
        if self.form.account().is_some() {
            View::Success
        } else {
            View::SignUp
        }
    }

    /// Move to next form element
    pub fn next_form_field(&mut self) {
        self.focus = self.focus.next();
    }

    /// Move to previous form element
    pub fn prev_form_field(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Handle character input in the focused text field
    pub fn form_input_char(&mut self, c: char) {
        let Some(field) = self.focus.field() else {
            return;
        };
        if field.is_toggle() {
            if c == ' ' {
                self.toggle_terms();
            }
            return;
        }
        let mut text = self.form.values().text(field).to_string();
        text.push(c);
        self.form.update_field(field, FieldValue::Text(text));
    }

    /// Handle backspace in the focused text field
    pub fn form_backspace(&mut self) {
        let Some(field) = self.focus.field() else {
            return;
        };
        if field.is_toggle() {
            return;
        }
        let mut text = self.form.values().text(field).to_string();
        if text.pop().is_some() {
            self.form.update_field(field, FieldValue::Text(text));
        }
    }

    /// Flip the terms checkbox
    pub fn toggle_terms(&mut self) {
        let accepted = self.form.values().accept_terms;
        self.form
            .update_field(FieldName::AcceptTerms, FieldValue::Toggle(!accepted));
    }

    /// Show or hide the focused secret field
    pub fn toggle_reveal(&mut self) {
        let Some(field) = self.focus.field().filter(|f| f.is_secret()) else {
            return;
        };
        if let Some(pos) = self.revealed_fields.iter().position(|f| *f == field) {
            self.revealed_fields.remove(pos);
        } else {
            self.revealed_fields.push(field);
        }
    }

    pub fn is_revealed(&self, field: FieldName) -> bool {
        self.revealed_fields.contains(&field)
    }

    /// Restart the form and put focus back on the first field
    pub fn clear_form(&mut self) {
        self.form.restart();
        self.focus = Focus::default();
        self.reset_reveal();
    }

    fn reset_reveal(&mut self) {
        self.revealed_fields = if self.reveal_by_default {
            vec![FieldName::Password, FieldName::ConfirmPassword]
        } else {
            Vec::new()
        };
    }
}
