//! `reqwest` implementation of [`AuthService`].

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use login::{AuthService, LoginRequest, LoginResponse, TransportFailure, login_endpoint};
use reqwest::Url;

use crate::cli::CliError;

pub struct HttpAuthService {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpAuthService {
    /// Build a service posting to `{base_url}/api/login`.
    ///
    /// # Errors
    ///
    /// [`CliError::InvalidBaseUrl`] if `base_url` is not an `http`/`https`
    /// URL, or [`CliError::Client`] if the HTTP client cannot be built.
    pub fn new(base_url: &str) -> Result<Self, CliError> {
        let endpoint = Url::parse(&login_endpoint(base_url))
            .map_err(|error| CliError::InvalidBaseUrl(format!("{base_url}: {error}")))?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(CliError::InvalidBaseUrl(format!(
                "{base_url}: unsupported scheme `{}`",
                endpoint.scheme()
            )));
        }
        let client = reqwest::Client::builder()
            .user_agent(concat!("login-form/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, endpoint })
    }

    #[cfg(test)]
    fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl AuthService for HttpAuthService {
    async fn login(&self, request: &LoginRequest<'_>) -> Result<LoginResponse, TransportFailure> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await
            .map_err(|error| TransportFailure::Request(error.to_string()))?;
        let status = response.status();
        tracing::debug!(status = status.as_u16(), "login response received");
        response
            .json::<LoginResponse>()
            .await
            .map_err(|error| TransportFailure::Decode(error.to_string()))
    }
}
