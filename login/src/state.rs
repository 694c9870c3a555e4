//! Login view state machine.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser page keeps a [`LoginState`] in a signal and the terminal front
//! end keeps one inside [`crate::LoginView`]. Both derive every displayed
//! field (busy, error, message, user) from this one value, so the panels stay
//! mutually exclusive.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use crate::types::{AuthResult, Credentials, User};

/// Shown when either field is blank.
pub const VALIDATION_MESSAGE: &str = "Please enter both username and password";

/// Why a submission never reached the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("{0}")]
    Validation(&'static str),
    #[error("a login attempt is already in flight")]
    InFlight,
}

/// Check that both fields are non-empty after trimming.
///
/// # Errors
///
/// Returns [`SubmitError::Validation`] with [`VALIDATION_MESSAGE`] if either
/// field is blank.
pub fn validate_credentials(username: &str, password: &str) -> Result<Credentials, SubmitError> {
    if username.trim().is_empty() || password.trim().is_empty() {
        return Err(SubmitError::Validation(VALIDATION_MESSAGE));
    }
    Ok(Credentials::new(username, password))
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoginState {
    #[default]
    Idle,
    Submitting,
    /// Local validation failed; nothing was sent.
    Rejected(&'static str),
    Completed(AuthResult),
}

impl LoginState {
    /// Start a submission.
    ///
    /// On success the state is `Submitting` and the prior result is gone. On
    /// a validation failure the state is `Rejected`.
    ///
    /// # Errors
    ///
    /// [`SubmitError::InFlight`] if a submission is already running (state is
    /// left untouched), or [`SubmitError::Validation`] for blank fields.
    pub fn begin(&mut self, username: &str, password: &str) -> Result<Credentials, SubmitError> {
        if self.is_busy() {
            return Err(SubmitError::InFlight);
        }
        match validate_credentials(username, password) {
            Ok(credentials) => {
                *self = Self::Submitting;
                Ok(credentials)
            }
            Err(SubmitError::Validation(message)) => {
                *self = Self::Rejected(message);
                Err(SubmitError::Validation(message))
            }
            Err(err) => Err(err),
        }
    }

    /// Record the outcome of the running submission.
    pub fn finish(&mut self, result: AuthResult) {
        *self = Self::Completed(result);
    }

    /// Drop back to `Idle` if a submission was abandoned before finishing.
    pub fn release(&mut self) {
        if self.is_busy() {
            *self = Self::Idle;
        }
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    #[must_use]
    pub fn result(&self) -> Option<&AuthResult> {
        match self {
            Self::Completed(result) => Some(result),
            _ => None,
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Rejected(message) => Some(*message),
            Self::Completed(result) => result.error(),
            Self::Idle | Self::Submitting => None,
        }
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.result().and_then(AuthResult::message)
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.result().and_then(AuthResult::user)
    }
}
