//! Login session orchestration.
//!
//! `SessionController` is the single owner of `LoginState`: it receives
//! intents (field edits, submit, reset), drives the auth client and token
//! store, and publishes state snapshots through a watch channel. All state
//! changes go through the pure `reduce` function in `state`, which keeps the
//! transition table testable without any collaborators.

pub mod controller;
pub mod state;

pub use controller::SessionController;
pub use state::{reduce, LoginEvent, LoginState, VALIDATION_MESSAGE};
