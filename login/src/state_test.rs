use super::*;
use crate::types::TRANSPORT_ERROR_MESSAGE;

fn admin() -> User {
    User {
        id: 1,
        name: "Admin".to_owned(),
        email: "admin@example.com".to_owned(),
    }
}

fn success() -> AuthResult {
    AuthResult::Success {
        user: admin(),
        message: Some("Welcome".to_owned()),
    }
}

// =============================================================
// validate_credentials
// =============================================================

#[test]
fn validate_accepts_non_blank_fields_untrimmed() {
    let credentials = validate_credentials(" admin ", " pw ").expect("valid");
    assert_eq!(credentials.username(), " admin ");
    assert_eq!(credentials.password(), " pw ");
}

#[test]
fn validate_rejects_empty_username() {
    assert_eq!(
        validate_credentials("", "password"),
        Err(SubmitError::Validation(VALIDATION_MESSAGE))
    );
}

#[test]
fn validate_rejects_whitespace_password() {
    assert_eq!(
        validate_credentials("admin@example.com", " \t "),
        Err(SubmitError::Validation(VALIDATION_MESSAGE))
    );
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn default_state_is_idle_and_blank() {
    let state = LoginState::default();
    assert_eq!(state, LoginState::Idle);
    assert!(!state.is_busy());
    assert_eq!(state.error(), None);
    assert_eq!(state.message(), None);
    assert_eq!(state.user(), None);
}

#[test]
fn begin_moves_to_submitting() {
    let mut state = LoginState::default();
    state.begin("admin@example.com", "password").expect("begin");
    assert!(state.is_busy());
}

#[test]
fn begin_clears_previous_result() {
    let mut state = LoginState::Completed(success());
    state.begin("admin@example.com", "password").expect("begin");
    assert_eq!(state.user(), None);
    assert_eq!(state.message(), None);
    assert_eq!(state.error(), None);
}

#[test]
fn begin_with_blank_field_is_rejected_and_clears_user() {
    let mut state = LoginState::Completed(success());
    let err = state.begin("", "password").expect_err("should reject");
    assert_eq!(err, SubmitError::Validation(VALIDATION_MESSAGE));
    assert_eq!(state, LoginState::Rejected(VALIDATION_MESSAGE));
    assert_eq!(state.error(), Some(VALIDATION_MESSAGE));
    assert_eq!(state.user(), None);
    assert_eq!(state.message(), None);
    assert!(!state.is_busy());
}

#[test]
fn begin_while_submitting_is_in_flight_and_leaves_state() {
    let mut state = LoginState::Submitting;
    assert_eq!(state.begin("a", "b"), Err(SubmitError::InFlight));
    assert_eq!(state.begin("", ""), Err(SubmitError::InFlight));
    assert_eq!(state, LoginState::Submitting);
}

#[test]
fn finish_success_exposes_user_and_message_only() {
    let mut state = LoginState::Submitting;
    state.finish(success());
    assert!(!state.is_busy());
    assert_eq!(state.user(), Some(&admin()));
    assert_eq!(state.message(), Some("Welcome"));
    assert_eq!(state.error(), None);
}

#[test]
fn finish_transport_error_exposes_error_only() {
    let mut state = LoginState::Submitting;
    state.finish(AuthResult::transport());
    assert!(!state.is_busy());
    assert_eq!(state.error(), Some(TRANSPORT_ERROR_MESSAGE));
    assert_eq!(state.user(), None);
    assert_eq!(state.message(), None);
}

#[test]
fn release_only_affects_submitting() {
    let mut state = LoginState::Submitting;
    state.release();
    assert_eq!(state, LoginState::Idle);

    let mut state = LoginState::Completed(success());
    state.release();
    assert_eq!(state, LoginState::Completed(success()));
}
