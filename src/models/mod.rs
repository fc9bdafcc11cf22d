//! Data models for the SIGO authentication exchange.
//!
//! - `Credentials`: the login request body
//! - `UserProfile`: the authenticated user's profile as returned by
//!   `ws/rest/auth`, including the bearer token

pub mod user;

pub use user::{Credentials, UserProfile};
