//! Browser implementation of [`AuthService`].
//!
//! Browser (`csr`): real HTTP calls via `gloo-net`.
//! Native builds: a stub that always fails, since logging in is only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is reported as a [`TransportFailure`]; the login view turns
//! it into the fixed transport message, so nothing here reaches the user
//! verbatim.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use login::{
    AuthService, DEFAULT_BASE_URL, LoginRequest, LoginResponse, TransportFailure, login_endpoint,
};

/// Auth service origin, fixed at build time through `LOGIN_API_BASE`.
#[must_use]
pub fn api_base() -> &'static str {
    option_env!("LOGIN_API_BASE").unwrap_or(DEFAULT_BASE_URL)
}

/// Posts to `{api_base()}/api/login` with `gloo-net`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BrowserAuthService {
    endpoint: String,
}

impl Default for BrowserAuthService {
    fn default() -> Self {
        Self::new(api_base())
    }
}

impl BrowserAuthService {
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            endpoint: login_endpoint(base_url),
        }
    }

    #[cfg(test)]
    fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl AuthService for BrowserAuthService {
    async fn login(&self, request: &LoginRequest<'_>) -> Result<LoginResponse, TransportFailure> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(&self.endpoint)
                .json(request)
                .map_err(|e| TransportFailure::Request(e.to_string()))?
                .send()
                .await
                .map_err(|e| TransportFailure::Request(e.to_string()))?;
            log::debug!("login response status {}", resp.status());
            resp.json::<LoginResponse>()
                .await
                .map_err(|e| TransportFailure::Decode(e.to_string()))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            Err(TransportFailure::Request("not available outside the browser".to_owned()))
        }
    }
}
