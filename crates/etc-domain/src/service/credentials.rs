//! Sign-up / sign-in form validation

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Field name to validation messages
pub type FieldErrors = BTreeMap<String, Vec<String>>;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));
static LETTER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[a-zA-Z]").expect("valid regex"));
static DIGIT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]").expect("valid regex"));
static SPECIAL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9]").expect("valid regex"));

/// Raw form input
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CredentialsForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Trimmed input that passed every rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidCredentials {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Check every field and collect all failures
pub fn validate_credentials(form: &CredentialsForm) -> Result<ValidCredentials, FieldErrors> {
    let name = form.name.trim();
    let email = form.email.trim();
    let password = form.password.trim();
    let mut errors = FieldErrors::new();

    if name.chars().count() < 2 {
        push(&mut errors, "name", "Name must be at least 2 characters long.");
    }
    if !EMAIL_RE.is_match(email) {
        push(&mut errors, "email", "Please enter a valid email.");
    }
    if password.chars().count() < 8 {
        push(&mut errors, "password", "Be at least 8 characters long");
    }
    if !LETTER_RE.is_match(password) {
        push(&mut errors, "password", "Contain at least one letter.");
    }
    if !DIGIT_RE.is_match(password) {
        push(&mut errors, "password", "Contain at least one number.");
    }
    if !SPECIAL_RE.is_match(password) {
        push(&mut errors, "password", "Contain at least one special character.");
    }

    if errors.is_empty() {
        Ok(ValidCredentials {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        })
    } else {
        Err(errors)
    }
}

fn push(errors: &mut FieldErrors, field: &str, message: &str) {
    errors.entry(field.to_string()).or_default().push(message.to_string());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, password: &str) -> CredentialsForm {
        CredentialsForm {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_valid_input_is_trimmed() {
        let valid = validate_credentials(&form("  Ann ", " ann@example.com ", "s3cret!pw")).unwrap();
        assert_eq!(valid.name, "Ann");
        assert_eq!(valid.email, "ann@example.com");
    }

    #[test]
    fn test_every_failure_is_reported() {
        let errors = validate_credentials(&form("A", "not-an-email", "abc")).unwrap_err();
        assert_eq!(errors["name"], vec!["Name must be at least 2 characters long."]);
        assert_eq!(errors["email"], vec!["Please enter a valid email."]);
        assert_eq!(
            errors["password"],
            vec![
                "Be at least 8 characters long",
                "Contain at least one number.",
                "Contain at least one special character.",
            ]
        );
    }

    #[test]
    fn test_password_rules_independent() {
        let errors = validate_credentials(&form("Ann", "ann@example.com", "12345678!")).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors["password"], vec!["Contain at least one letter."]);
    }
}
