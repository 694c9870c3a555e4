//! Flags, env fallbacks, and the binary's own error type.

#[cfg(test)]
#[path = "cli_test.rs"]
mod cli_test;

use std::io::{self, BufRead};

use clap::Parser;
use login::DEFAULT_BASE_URL;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
    #[error("failed to read password from stdin: {0}")]
    Stdin(#[from] io::Error),
    #[error("http client setup failed: {0}")]
    Client(#[from] reqwest::Error),
    #[error("failed to encode JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(
    name = "login-form",
    about = "Submit credentials to a login endpoint and show the result"
)]
pub struct Cli {
    /// Origin of the auth service; `/api/login` is appended.
    #[arg(long, env = "LOGIN_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    #[arg(long, short = 'u', env = "LOGIN_USERNAME", default_value = "")]
    pub username: String,

    #[arg(
        long,
        short = 'p',
        env = "LOGIN_PASSWORD",
        hide_env_values = true,
        conflicts_with = "password_stdin"
    )]
    pub password: Option<String>,

    /// Read the password from the first line of stdin.
    #[arg(long, default_value_t = false)]
    pub password_stdin: bool,

    /// Print the outcome as JSON.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

impl Cli {
    /// Resolve the password from `--password`/`LOGIN_PASSWORD` or stdin.
    ///
    /// A missing password resolves to an empty string so the login view
    /// reports it as a validation error.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Stdin`] if `--password-stdin` is set and stdin
    /// cannot be read.
    pub fn password(&self, input: &mut impl BufRead) -> Result<String, CliError> {
        if !self.password_stdin {
            return Ok(self.password.clone().unwrap_or_default());
        }
        let mut line = String::new();
        input.read_line(&mut line)?;
        Ok(line.trim_end_matches(['\r', '\n']).to_owned())
    }
}
