//! Sign-up against the real file store and Argon2 hasher

use etc_app::auth::{AuthService, FormState, SIGNUP_FAILED_MESSAGE};
use etc_app::config::Config;
use etc_app::repository::{open_user_repo, open_user_repo_at};
use etc_domain::service::CredentialsForm;
use etc_infra::Argon2Hasher;
use tempfile::tempdir;

fn form(email: &str) -> CredentialsForm {
    CredentialsForm {
        name: "Operator".to_string(),
        email: email.to_string(),
        password: "Lane-07-open".to_string(),
    }
}

#[test]
fn test_signup_persists_verifiable_hash() {
    let dir = tempdir().unwrap();
    let repo = open_user_repo_at(dir.path().to_path_buf()).unwrap();
    let mut auth = AuthService::new(repo, Argon2Hasher::new());

    let state = auth.signup(&form("ops@etc.example"));
    assert!(matches!(state, FormState::Created { .. }), "got {state:?}");

    let reopened = open_user_repo_at(dir.path().to_path_buf()).unwrap();
    let account = reopened.store().get_by_email("ops@etc.example").unwrap();
    assert_ne!(account.password_hash, "Lane-07-open");
    assert!(Argon2Hasher::new()
        .verify("Lane-07-open", &account.password_hash)
        .unwrap());
}

#[test]
fn test_duplicate_email_reports_message() {
    let dir = tempdir().unwrap();
    let config = Config {
        store_dir: Some(dir.path().to_path_buf()),
        ..Config::default()
    };
    let mut auth = AuthService::new(open_user_repo(&config).unwrap(), Argon2Hasher::new());

    assert!(matches!(auth.signup(&form("ops@etc.example")), FormState::Created { .. }));
    assert_eq!(
        auth.signup(&form("OPS@etc.example")),
        FormState::Message(SIGNUP_FAILED_MESSAGE.to_string())
    );
    assert_eq!(auth.users().store().count(), 1);
}
