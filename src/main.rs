//! Terminal front end for the login form.
//!
//! Reads credentials from flags, env vars, or stdin, submits them once through
//! [`login::LoginView`], and prints the same panels the browser page shows.
//! Exit status is 0 only for a successful login.

mod cli;
mod http;
mod render;

use std::io;
use std::process::ExitCode;

use clap::Parser;
use login::{AuthResult, LoginView};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, CliError};
use crate::http::HttpAuthService;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode, CliError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let password = cli.password(&mut io::stdin().lock())?;
    let view = LoginView::new(HttpAuthService::new(&cli.base_url)?);

    if let Err(err) = view.submit(&cli.username, &password).await {
        tracing::debug!(error = %err, "login not submitted");
    }

    let state = view.state();
    if cli.json {
        println!("{}", render::json(&state)?);
    } else {
        println!("{}", render::panels(&state));
    }

    if state.result().is_some_and(AuthResult::is_success) {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
