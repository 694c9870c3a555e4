//! Route-level screens.

pub mod login;
