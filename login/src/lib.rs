//! Shared login model for the browser and terminal front ends.
//!
//! This crate owns the wire representation of `POST /api/login`, the
//! validation and response-interpretation rules, and the [`LoginState`]
//! machine that both front ends render. It performs no I/O itself: each front
//! end plugs its HTTP stack in through [`AuthService`].
//!
//! ```text
//! Idle ──submit──▶ Submitting ──▶ Completed(Success | AppError | TransportError)
//!   │                                   │
//!   └──invalid──▶ Rejected ◀──invalid───┘
//! ```

pub mod state;
pub mod types;
pub mod view;

pub use state::{LoginState, SubmitError, VALIDATION_MESSAGE, validate_credentials};
pub use types::{
    AuthResult, Credentials, DEFAULT_BASE_URL, LOGIN_FAILED_MESSAGE, LOGIN_PATH, LoginRequest,
    LoginResponse, TRANSPORT_ERROR_MESSAGE, User, login_endpoint,
};
pub use view::{AuthService, LoginView, TransportFailure, attempt};
