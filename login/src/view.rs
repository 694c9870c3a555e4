//! Login submission driver.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`AuthService`] is the seam between the shared state machine and each
//! front end's HTTP stack (`gloo-net` in the browser, `reqwest` in the
//! terminal). [`attempt`] turns one request into exactly one [`AuthResult`];
//! [`LoginView`] wraps it with the busy flag.
//!
//! CONCURRENCY
//! ===========
//! Single actor, cooperative suspension. `LoginView` is `!Sync` and never
//! holds a `RefCell` borrow across an `.await`. A second `submit` while one
//! is in flight is rejected with [`SubmitError::InFlight`].

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use std::cell::RefCell;
use std::future::Future;

use crate::state::{LoginState, SubmitError};
use crate::types::{AuthResult, Credentials, LoginRequest, LoginResponse};

/// Why a request produced no usable response body.
///
/// Only logged; users always see [`crate::TRANSPORT_ERROR_MESSAGE`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportFailure {
    #[error("login request failed: {0}")]
    Request(String),
    #[error("login response was not valid JSON: {0}")]
    Decode(String),
}

/// Remote endpoint that checks credentials.
///
/// Implementations must POST `request` as JSON and decode the body whatever
/// the HTTP status; the status code carries no meaning of its own.
pub trait AuthService {
    fn login(
        &self,
        request: &LoginRequest<'_>,
    ) -> impl Future<Output = Result<LoginResponse, TransportFailure>>;
}

/// Run one login request and interpret the result.
pub async fn attempt<S>(service: &S, credentials: &Credentials) -> AuthResult
where
    S: AuthService,
{
    tracing::debug!(username = credentials.username(), "login attempt started");
    match service.login(&credentials.to_request()).await {
        Ok(response) => {
            let result = AuthResult::from_response(response);
            match &result {
                AuthResult::Success { user, .. } => {
                    tracing::info!(user_id = user.id, "login succeeded");
                }
                AuthResult::ApplicationError { message } => {
                    tracing::debug!(%message, "login refused");
                }
                AuthResult::TransportError { .. } => {
                    tracing::debug!("login response missing user");
                }
            }
            result
        }
        Err(failure) => {
            tracing::debug!(error = %failure, "login transport failed");
            AuthResult::transport()
        }
    }
}

/// Login view: owns the state and the service it submits to.
pub struct LoginView<S> {
    service: S,
    state: RefCell<LoginState>,
}

impl<S> LoginView<S>
where
    S: AuthService,
{
    #[must_use]
    pub fn new(service: S) -> Self {
        Self {
            service,
            state: RefCell::new(LoginState::default()),
        }
    }

    #[cfg(test)]
    pub(crate) fn service(&self) -> &S {
        &self.service
    }

    /// Snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> LoginState {
        self.state.borrow().clone()
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.state.borrow().is_busy()
    }

    /// Validate, submit, and record the outcome.
    ///
    /// The busy flag is cleared on every exit path, including when the
    /// returned future is dropped before it resolves.
    ///
    /// # Errors
    ///
    /// [`SubmitError::Validation`] for blank fields (no request is sent) and
    /// [`SubmitError::InFlight`] while another submission is running.
    pub async fn submit(&self, username: &str, password: &str) -> Result<AuthResult, SubmitError> {
        let credentials = self.state.borrow_mut().begin(username, password)?;
        let guard = BusyGuard { state: &self.state };
        let result = attempt(&self.service, &credentials).await;
        guard.finish(result.clone());
        Ok(result)
    }
}

/// Releases the busy flag when dropped unless the attempt finished first.
struct BusyGuard<'a> {
    state: &'a RefCell<LoginState>,
}

impl BusyGuard<'_> {
    fn finish(self, result: AuthResult) {
        self.state.borrow_mut().finish(result);
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.state.borrow_mut().release();
    }
}
