//! Terminal rendering of a [`LoginState`].
//!
//! Mirrors the browser page: a message panel, an error panel, and a user
//! panel, at most one of which (message + user together) is ever shown.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use login::{AuthResult, LoginState, User};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct Report<'a> {
    outcome: &'static str,
    busy: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    user: Option<&'a User>,
}

fn outcome_label(state: &LoginState) -> &'static str {
    match state {
        LoginState::Idle => "idle",
        LoginState::Submitting => "submitting",
        LoginState::Rejected(_) => "invalid",
        LoginState::Completed(AuthResult::Success { .. }) => "success",
        LoginState::Completed(AuthResult::ApplicationError { .. }) => "application_error",
        LoginState::Completed(AuthResult::TransportError { .. }) => "transport_error",
    }
}

/// Human-readable panels, one block per visible field.
pub fn panels(state: &LoginState) -> String {
    if state.is_busy() {
        return "Logging in...".to_owned();
    }

    let mut blocks = Vec::new();
    if let Some(message) = state.message() {
        blocks.push(message.to_owned());
    }
    if let Some(error) = state.error() {
        blocks.push(format!("Error:\n  {error}"));
    }
    if let Some(user) = state.user() {
        blocks.push(format!(
            "Login Successful!\n  ID:    {}\n  Name:  {}\n  Email: {}",
            user.id, user.name, user.email
        ));
    }
    blocks.join("\n\n")
}

/// JSON report of the same fields, for scripting.
///
/// # Errors
///
/// Propagates `serde_json` serialization failures.
pub fn json(state: &LoginState) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&Report {
        outcome: outcome_label(state),
        busy: state.is_busy(),
        message: state.message(),
        error: state.error(),
        user: state.user(),
    })
}
