//! WASM entry point for the client-side rendered page.

#[cfg(feature = "csr")]
fn main() {
    client::mount();
}

// Native builds (tests, `cargo check`) have no DOM to mount on.
#[cfg(not(feature = "csr"))]
fn main() {}
