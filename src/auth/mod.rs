//! Local persistence for the bearer token.
//!
//! This module provides:
//! - `TokenStore`: the async save/load/clear contract the session controller
//!   depends on
//! - `FileTokenStore`: JSON file in the app data directory (default backend)
//! - `KeyringTokenStore`: OS keychain entry via keyring
//! - `MemoryTokenStore`: in-process store for tests and ephemeral sessions
//!
//! At most one token is held at a time; the key name is stable across
//! versions. Clearing removes the entry entirely rather than writing an
//! empty string.

pub mod file;
pub mod keyring;
pub mod memory;
pub mod store;

pub use self::keyring::KeyringTokenStore;
pub use file::FileTokenStore;
pub use memory::MemoryTokenStore;
pub use store::{TokenStore, TOKEN_KEY};
