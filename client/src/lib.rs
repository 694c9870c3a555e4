//! # client
//!
//! Leptos + WASM front end for the login form, rendered client-side.
//!
//! The page keeps a [`login::LoginState`] in a signal and submits through
//! [`net::api::BrowserAuthService`], so validation, response interpretation,
//! and panel exclusivity are shared with the terminal front end.
//!
//! Build and serve with `trunk serve --features csr` from this directory;
//! `index.html` pulls in the `client` binary.

pub mod app;
pub mod net;
pub mod pages;

/// Install the panic hook and console logger, then mount [`app::App`] on
/// `<body>`.
#[cfg(feature = "csr")]
pub fn mount() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
