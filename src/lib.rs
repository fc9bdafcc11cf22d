//! Login session flow for the SIGO REST service.
//!
//! The crate is CRUD glue over a single HTTP endpoint and a key-value local
//! store, organized around three injected components:
//!
//! - [`api::HttpAuthClient`]: POSTs credentials to `ws/rest/auth` and
//!   strictly decodes the returned profile
//! - [`auth::TokenStore`]: persists the returned bearer token under a stable
//!   key, with file, keychain and in-memory backends
//! - [`session::SessionController`]: owns the observable login state and
//!   orchestrates validation, the network call and token persistence
//!
//! Presentation code consumes `LoginState` snapshots from
//! `SessionController::subscribe` and feeds intents back in; the `sigo-login`
//! binary is a minimal terminal example of that role.

pub mod api;
pub mod auth;
pub mod config;
pub mod models;
pub mod session;

pub use api::{AuthClient, AuthError, HttpAuthClient};
pub use auth::{FileTokenStore, KeyringTokenStore, MemoryTokenStore, TokenStore};
pub use config::Config;
pub use models::{Credentials, UserProfile};
pub use session::{LoginState, SessionController};
