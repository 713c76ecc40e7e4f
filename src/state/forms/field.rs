//! Form field value objects

/// The five inputs of the sign-up form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    FullName,
    Email,
    Password,
    ConfirmPassword,
    AcceptTerms,
}

impl FieldName {
    pub const ALL: [FieldName; 5] = [
        FieldName::FullName,
        FieldName::Email,
        FieldName::Password,
        FieldName::ConfirmPassword,
        FieldName::AcceptTerms,
    ];

    /// Wire key used by the gateway payload and in logs
    pub fn key(&self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::Email => "email",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
            Self::AcceptTerms => "acceptTerms",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::FullName => "Full Name",
            Self::Email => "Email Address",
            Self::Password => "Password",
            Self::ConfirmPassword => "Confirm Password",
            Self::AcceptTerms => "I accept the Terms and Conditions and Privacy Policy",
        }
    }

    /// Hint shown while a text field is empty
    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::FullName => "Enter your full name",
            Self::Email => "Enter your email address",
            Self::Password => "Create a strong password",
            Self::ConfirmPassword => "Confirm your password",
            Self::AcceptTerms => "",
        }
    }

    /// Secret fields are masked unless revealed
    pub fn is_secret(&self) -> bool {
        matches!(self, Self::Password | Self::ConfirmPassword)
    }

    /// Toggle fields hold a boolean instead of text
    pub fn is_toggle(&self) -> bool {
        matches!(self, Self::AcceptTerms)
    }

    pub fn index(&self) -> usize {
        match self {
            Self::FullName => 0,
            Self::Email => 1,
            Self::Password => 2,
            Self::ConfirmPassword => 3,
            Self::AcceptTerms => 4,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Toggle(bool),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    /// Whether this value kind can be stored in `field`
    pub fn fits(&self, field: FieldName) -> bool {
        match self {
            FieldValue::Text(_) => !field.is_toggle(),
            FieldValue::Toggle(_) => field.is_toggle(),
        }
    }
}

/// Mask a secret value for display, one bullet per character
pub fn mask(value: &str) -> String {
    "•".repeat(value.chars().count())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trips_in_display_order() {
        for (i, field) in FieldName::ALL.iter().enumerate() {
            assert_eq!(field.index(), i);
            assert_eq!(FieldName::from_index(i), Some(*field));
        }
        assert_eq!(FieldName::from_index(5), None);
    }

    #[test]
    fn test_keys_match_payload_names() {
        let keys: Vec<_> = FieldName::ALL.iter().map(|f| f.key()).collect();
        assert_eq!(
            keys,
            vec!["fullName", "email", "password", "confirmPassword", "acceptTerms"]
        );
    }

    #[test]
    fn test_only_password_fields_are_secret() {
        assert!(FieldName::Password.is_secret());
        assert!(FieldName::ConfirmPassword.is_secret());
        assert!(!FieldName::FullName.is_secret());
        assert!(!FieldName::Email.is_secret());
        assert!(!FieldName::AcceptTerms.is_secret());
    }

    #[test]
    fn test_value_kind_must_fit_field() {
        assert!(FieldValue::text("x").fits(FieldName::Email));
        assert!(!FieldValue::text("x").fits(FieldName::AcceptTerms));
        assert!(FieldValue::Toggle(true).fits(FieldName::AcceptTerms));
        assert!(!FieldValue::Toggle(true).fits(FieldName::Password));
    }

    #[test]
    fn test_mask_counts_chars_not_bytes() {
        assert_eq!(mask(""), "");
        assert_eq!(mask("abc"), "•••");
        assert_eq!(mask("é1"), "••");
    }
}
