//! Sign-up and sign-in actions
//!
//! Sign-up validates, hashes and stores the credential. Sign-in only
//! validates the form: there is no password check, session or redirect.

use etc_domain::repository::{PasswordHasher, UserRepository};
use etc_domain::service::{validate_credentials, CredentialsForm, FieldErrors};
use etc_types::UserAccount;
use serde::Serialize;
use tracing::{info, warn};

/// Message shown when an account cannot be stored
pub const SIGNUP_FAILED_MESSAGE: &str = "An error occurred while creating your account.";

/// Outcome of submitting an auth form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "data", rename_all = "camelCase")]
pub enum FormState {
    /// Field-level validation failures
    Errors(FieldErrors),
    /// Single user-facing failure message
    Message(String),
    /// Account stored
    #[serde(rename_all = "camelCase")]
    Created { user_id: String },
    /// Sign-in form passed validation
    Validated,
}

pub struct AuthService<R, H> {
    users: R,
    hasher: H,
}

impl<R: UserRepository, H: PasswordHasher> AuthService<R, H> {
    pub fn new(users: R, hasher: H) -> Self {
        Self { users, hasher }
    }

    pub fn users(&self) -> &R {
        &self.users
    }

    pub fn signup(&mut self, form: &CredentialsForm) -> FormState {
        let valid = match validate_credentials(form) {
            Ok(valid) => valid,
            Err(errors) => return FormState::Errors(errors),
        };

        let stored = self
            .hasher
            .hash(&valid.password)
            .and_then(|hash| self.users.insert(UserAccount::new(valid.name, valid.email, hash)));

        match stored {
            Ok(user_id) => {
                info!(%user_id, "account created");
                FormState::Created { user_id }
            }
            Err(e) => {
                warn!(error = %e, "signup failed");
                FormState::Message(SIGNUP_FAILED_MESSAGE.to_string())
            }
        }
    }

    pub fn signin(&self, form: &CredentialsForm) -> FormState {
        match validate_credentials(form) {
            Ok(_) => FormState::Validated,
            Err(errors) => FormState::Errors(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use etc_types::{Error, Result};

    #[derive(Default)]
    struct MemoryUsers(Vec<UserAccount>);

    impl UserRepository for MemoryUsers {
        fn insert(&mut self, user: UserAccount) -> Result<String> {
            let id = user.id.clone();
            self.0.push(user);
            Ok(id)
        }
    }

    struct PlainHasher;

    impl PasswordHasher for PlainHasher {
        fn hash(&self, password: &str) -> Result<String> {
            Ok(format!("plain:{password}"))
        }
    }

    struct BrokenHasher;

    impl PasswordHasher for BrokenHasher {
        fn hash(&self, _password: &str) -> Result<String> {
            Err(Error::PasswordHash("unavailable".to_string()))
        }
    }

    fn form(password: &str) -> CredentialsForm {
        CredentialsForm {
            name: "Kim".to_string(),
            email: "kim@example.com".to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_signup_stores_hash_not_password() {
        let mut auth = AuthService::new(MemoryUsers::default(), PlainHasher);
        let state = auth.signup(&form("tollgate#1"));
        let FormState::Created { user_id } = &state else {
            panic!("expected Created, got {state:?}");
        };
        let stored = &auth.users().0[0];
        assert_eq!(&stored.id, user_id);
        assert_eq!(stored.password_hash, "plain:tollgate#1");
    }

    #[test]
    fn test_signup_validation_errors_are_returned() {
        let mut auth = AuthService::new(MemoryUsers::default(), PlainHasher);
        let state = auth.signup(&form("short"));
        assert!(matches!(state, FormState::Errors(ref e) if e.contains_key("password")));
        assert!(auth.users().0.is_empty());
    }

    #[test]
    fn test_signup_hash_failure_is_single_message() {
        let mut auth = AuthService::new(MemoryUsers::default(), BrokenHasher);
        assert_eq!(
            auth.signup(&form("tollgate#1")),
            FormState::Message(SIGNUP_FAILED_MESSAGE.to_string())
        );
    }

    #[test]
    fn test_signin_only_validates() {
        let auth = AuthService::new(MemoryUsers::default(), PlainHasher);
        assert_eq!(auth.signin(&form("tollgate#1")), FormState::Validated);
        assert!(matches!(auth.signin(&form("x")), FormState::Errors(_)));
    }
}
