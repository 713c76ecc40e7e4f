//! Field validators
//!
//! Every validator is pure and returns an empty string when the value is
//! valid, otherwise the message to show under the field.

use super::forms::{FieldErrors, FormValues};

const NAME_MIN_LEN: usize = 2;
const PASSWORD_MIN_LEN: usize = 8;

/// Validate a full name: at least 2 characters after trimming, letters and spaces only
pub fn validate_name(name: &str) -> String {
    if name.trim().chars().count() < NAME_MIN_LEN {
        return "Name must be at least 2 characters long".to_string();
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_alphabetic() || c.is_whitespace())
    {
        return "Name can only contain letters and spaces".to_string();
    }
    String::new()
}

/// Validate an email of the shape `local@domain.tld`
pub fn validate_email(email: &str) -> String {
    if email.is_empty() {
        return "Email is required".to_string();
    }
    if !is_email_shape(email) {
        return "Please enter a valid email address".to_string();
    }
    String::new()
}

/// Validate password strength, reporting only the first violated rule.
///
/// Rules are checked in a fixed order: length, uppercase, lowercase, digit.
pub fn validate_password(password: &str) -> String {
    if password.is_empty() {
        return "Password is required".to_string();
    }
    if password.chars().count() < PASSWORD_MIN_LEN {
        return "Password must be at least 8 characters long".to_string();
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return "Password must contain at least one uppercase letter".to_string();
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return "Password must contain at least one lowercase letter".to_string();
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return "Password must contain at least one number".to_string();
    }
    String::new()
}

/// Validate that the confirmation is present and equals the password exactly
pub fn validate_password_match(password: &str, confirm_password: &str) -> String {
    if confirm_password.is_empty() {
        return "Please confirm your password".to_string();
    }
    if password != confirm_password {
        return "Passwords do not match".to_string();
    }
    String::new()
}

pub fn validate_terms(accepted: bool) -> String {
    if !accepted {
        return "You must accept the terms and conditions".to_string();
    }
    String::new()
}

/// Run every validator against `values`.
///
/// Returns the full error record (all five entries, empty when valid) and
/// whether every entry is empty.
pub fn validate_all(values: &FormValues) -> (FieldErrors, bool) {
    let errors = FieldErrors {
        full_name: validate_name(&values.full_name),
        email: validate_email(&values.email),
        password: validate_password(&values.password),
        confirm_password: validate_password_match(&values.password, &values.confirm_password),
        accept_terms: validate_terms(values.accept_terms),
    };
    let is_valid = errors.is_clear();
    (errors, is_valid)
}

/// One `@`, non-empty local and domain parts without whitespace or `@`,
/// and a `.` inside the domain with something on both sides of it.
fn is_email_shape(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    // Any dot with a non-empty host before it and a non-empty tld after it
    domain
        .char_indices()
        .filter(|(_, c)| *c == '.')
        .any(|(i, _)| i > 0 && i + 1 < domain.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    mod name {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_empty_and_single_char_are_too_short() {
            assert_eq!(validate_name(""), "Name must be at least 2 characters long");
            assert_eq!(validate_name("A"), "Name must be at least 2 characters long");
            assert_eq!(validate_name("  A  "), "Name must be at least 2 characters long");
        }

        #[test]
        fn test_valid_names() {
            assert_eq!(validate_name("Al"), "");
            assert_eq!(validate_name("Jane Doe"), "");
        }

        #[test]
        fn test_digits_and_symbols_rejected() {
            assert_eq!(validate_name("Al3x"), "Name can only contain letters and spaces");
            assert_eq!(validate_name("O'Brien"), "Name can only contain letters and spaces");
        }

        #[test]
        fn test_non_ascii_length_and_letters() {
            // One character even though it is two bytes
            assert_eq!(validate_name("É"), "Name must be at least 2 characters long");
            assert_eq!(validate_name("Zoë"), "Name can only contain letters and spaces");
        }
    }

    mod email {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_empty_is_required() {
            assert_eq!(validate_email(""), "Email is required");
        }

        #[test]
        fn test_missing_tld_dot_is_invalid() {
            assert_eq!(validate_email("a@b"), "Please enter a valid email address");
        }

        #[test]
        fn test_malformed_shapes_are_invalid() {
            for email in ["ab.com", "@b.com", "a@.com", "a@b.", "a b@c.com", "a@b@c.com"] {
                assert_eq!(
                    validate_email(email),
                    "Please enter a valid email address",
                    "{email}"
                );
            }
        }

        #[test]
        fn test_valid_emails() {
            assert_eq!(validate_email("a@b.com"), "");
            assert_eq!(validate_email("jane@mail.example.co"), "");
        }
    }

    mod password {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_empty_is_required() {
            assert_eq!(validate_password(""), "Password is required");
        }

        #[test]
        fn test_rules_are_reported_in_order() {
            assert_eq!(
                validate_password("short1A"),
                "Password must be at least 8 characters long"
            );
            assert_eq!(
                validate_password("longenough"),
                "Password must contain at least one uppercase letter"
            );
            assert_eq!(
                validate_password("LONGENOUGH"),
                "Password must contain at least one lowercase letter"
            );
            assert_eq!(
                validate_password("LongEnough"),
                "Password must contain at least one number"
            );
            assert_eq!(validate_password("LongEnough1"), "");
        }

        #[test]
        fn test_length_counts_characters_not_bytes() {
            // Six characters, eighteen bytes
            assert_eq!(
                validate_password("Aa1😀😀😀"),
                "Password must be at least 8 characters long"
            );
            assert_eq!(validate_password("Aa1😀😀😀😀😀"), "");
        }

        #[test]
        fn test_only_first_violation_is_reported() {
            // Violates every rule, only length is shown
            assert_eq!(
                validate_password("!!"),
                "Password must be at least 8 characters long"
            );
        }
    }

    mod password_match {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_match_rules() {
            assert_eq!(validate_password_match("x", "y"), "Passwords do not match");
            assert_eq!(validate_password_match("x", "x"), "");
            assert_eq!(validate_password_match("x", ""), "Please confirm your password");
        }

        #[test]
        fn test_comparison_is_exact() {
            assert_eq!(validate_password_match("Secret1", "secret1"), "Passwords do not match");
            assert_eq!(validate_password_match("Secret1", "Secret1 "), "Passwords do not match");
        }
    }

    mod terms {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_terms() {
            assert_eq!(validate_terms(false), "You must accept the terms and conditions");
            assert_eq!(validate_terms(true), "");
        }
    }

    mod all {
        use super::*;
        use pretty_assertions::assert_eq;

        fn valid_values() -> FormValues {
            FormValues {
                full_name: "Jane Doe".to_string(),
                email: "jane@example.com".to_string(),
                password: "Secret123".to_string(),
                confirm_password: "Secret123".to_string(),
                accept_terms: true,
            }
        }

        #[test]
        fn test_valid_scenario_has_all_empty_errors() {
            let (errors, is_valid) = validate_all(&valid_values());
            assert!(is_valid);
            assert_eq!(errors, FieldErrors::default());
        }

        #[test]
        fn test_initial_values_fail_every_field() {
            let (errors, is_valid) = validate_all(&FormValues::default());
            assert!(!is_valid);
            assert_eq!(errors.full_name, "Name must be at least 2 characters long");
            assert_eq!(errors.email, "Email is required");
            assert_eq!(errors.password, "Password is required");
            assert_eq!(errors.confirm_password, "Please confirm your password");
            assert_eq!(errors.accept_terms, "You must accept the terms and conditions");
        }

        #[test]
        fn test_single_failure_makes_form_invalid() {
            let mut values = valid_values();
            values.accept_terms = false;
            let (errors, is_valid) = validate_all(&values);
            assert!(!is_valid);
            assert_eq!(errors.full_name, "");
            assert_eq!(errors.accept_terms, "You must accept the terms and conditions");
        }

        #[test]
        fn test_is_idempotent() {
            let mut values = valid_values();
            values.email = "nope".to_string();
            assert_eq!(validate_all(&values), validate_all(&values));
        }
    }
}
