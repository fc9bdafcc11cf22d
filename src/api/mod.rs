//! REST client module for the SIGO authentication endpoint.
//!
//! `HttpAuthClient` performs the single login POST against `ws/rest/auth`;
//! the `AuthClient` trait is the seam the session controller depends on so
//! the network can be substituted in tests.

pub mod client;
pub mod error;

pub use client::{AuthClient, HttpAuthClient};
pub use error::AuthError;
