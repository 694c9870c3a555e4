//! Wire DTOs for `POST /api/login` and the outcome they resolve to.
//!
//! DESIGN
//! ======
//! Any JSON body decodes into a [`LoginResponse`]. `success` follows
//! JavaScript truthiness, so a scalar body or a missing flag reads as a
//! refusal; `error`/`message` keep strings and numbers only; a malformed
//! `user` reads as absent. Whether that makes the attempt a failure is decided
//! once, in [`AuthResult::from_response`].

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;
use std::num::FpCategory;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Path of the login endpoint on the auth service.
pub const LOGIN_PATH: &str = "/api/login";

/// Auth service origin used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5001";

/// Shown when the server rejects a login without saying why.
pub const LOGIN_FAILED_MESSAGE: &str = "Login failed";

/// Shown for every failure that prevented a usable response.
pub const TRANSPORT_ERROR_MESSAGE: &str = "Failed to connect to the server";

/// Join a base URL and [`LOGIN_PATH`], tolerating a trailing slash.
#[must_use]
pub fn login_endpoint(base_url: &str) -> String {
    format!("{}{LOGIN_PATH}", base_url.trim_end_matches('/'))
}

/// Username/password pair for a single submission.
///
/// Values are kept exactly as entered; trimming only applies to the
/// emptiness check.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    pub(crate) fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.to_owned(),
            password: password.to_owned(),
        }
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    #[cfg(test)]
    pub(crate) fn password(&self) -> &str {
        &self.password
    }

    /// Borrow the credentials as the JSON request body.
    #[must_use]
    pub fn to_request(&self) -> LoginRequest<'_> {
        LoginRequest {
            username: &self.username,
            password: &self.password,
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// JSON body of `POST /api/login`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Profile returned by the auth service on success.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// JSON body returned by the auth service, whatever the HTTP status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginResponse {
    pub success: bool,
    pub user: Option<User>,
    pub message: Option<String>,
    pub error: Option<String>,
}

impl LoginResponse {
    /// Read the fields out of an arbitrary JSON value.
    #[must_use]
    pub fn from_value(body: &Value) -> Self {
        Self {
            success: body.get("success").is_some_and(is_truthy),
            user: body
                .get("user")
                .and_then(|user| User::deserialize(user).ok()),
            message: body.get("message").and_then(text_field),
            error: body.get("error").and_then(text_field),
        }
    }
}

impl<'de> Deserialize<'de> for LoginResponse {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Self::from_value(&Value::deserialize(deserializer)?))
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number
            .as_f64()
            .is_some_and(|n| n.classify() != FpCategory::Zero),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn text_field(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

/// Outcome of one completed login attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthResult {
    /// The server accepted the credentials.
    Success { user: User, message: Option<String> },
    /// The server answered but refused the login.
    ApplicationError { message: String },
    /// No usable answer arrived. `message` is always [`TRANSPORT_ERROR_MESSAGE`].
    TransportError { message: String },
}

impl AuthResult {
    #[must_use]
    pub fn transport() -> Self {
        Self::TransportError {
            message: TRANSPORT_ERROR_MESSAGE.to_owned(),
        }
    }

    /// Interpret a decoded response body.
    ///
    /// `success: true` without a well-formed user counts as a malformed
    /// response. Otherwise the error text falls back from `error` to
    /// `message` to [`LOGIN_FAILED_MESSAGE`], skipping empty strings.
    #[must_use]
    pub fn from_response(response: LoginResponse) -> Self {
        if response.success {
            return match response.user {
                Some(user) => Self::Success {
                    user,
                    message: non_empty(response.message),
                },
                None => Self::transport(),
            };
        }

        let message = non_empty(response.error)
            .or_else(|| non_empty(response.message))
            .unwrap_or_else(|| LOGIN_FAILED_MESSAGE.to_owned());
        Self::ApplicationError { message }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Success { user, .. } => Some(user),
            _ => None,
        }
    }

    /// Success message, if the server sent one.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Success { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::ApplicationError { message } | Self::TransportError { message } => {
                Some(message.as_str())
            }
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.is_empty())
}
