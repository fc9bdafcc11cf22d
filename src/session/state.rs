use std::fmt;

use crate::models::UserProfile;

/// Message shown when submit is attempted with empty fields.
pub const VALIDATION_MESSAGE: &str = "Username and password must not be empty.";

/// Observable UI state for the login screen.
///
/// Invariants, maintained by `reduce`:
/// - `login_success` implies `user` is set and `error_message` is clear
/// - `is_loading` implies `login_success` is false
#[derive(Clone, Default, PartialEq)]
pub struct LoginState {
    pub username: String,
    pub password: String,
    pub is_loading: bool,
    pub login_success: bool,
    pub error_message: Option<String>,
    pub user: Option<UserProfile>,
}

impl fmt::Debug for LoginState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginState")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("is_loading", &self.is_loading)
            .field("login_success", &self.login_success)
            .field("error_message", &self.error_message)
            .field("user", &self.user)
            .finish()
    }
}

/// State transition events. Intents from the presentation layer map onto
/// these, as do the outcomes of the in-flight login call.
#[derive(Debug)]
pub enum LoginEvent {
    UsernameChanged(String),
    PasswordChanged(String),
    /// The submit passed validation and the network call is in flight.
    SubmitStarted,
    SubmitSucceeded(Box<UserProfile>),
    /// Carries the user-facing message; covers validation, HTTP and
    /// transport failures alike.
    SubmitFailed(String),
    Reset,
}

/// Pure transition function: `(state, event) -> state`.
pub fn reduce(state: LoginState, event: LoginEvent) -> LoginState {
    match event {
        LoginEvent::UsernameChanged(username) => LoginState {
            username,
            error_message: None,
            ..state
        },
        LoginEvent::PasswordChanged(password) => LoginState {
            password,
            error_message: None,
            ..state
        },
        LoginEvent::SubmitStarted => LoginState {
            is_loading: true,
            login_success: false,
            error_message: None,
            ..state
        },
        LoginEvent::SubmitSucceeded(user) => LoginState {
            is_loading: false,
            login_success: true,
            error_message: None,
            user: Some(*user),
            ..state
        },
        LoginEvent::SubmitFailed(message) => LoginState {
            is_loading: false,
            login_success: false,
            error_message: Some(message),
            ..state
        },
        LoginEvent::Reset => LoginState::default(),
    }
}
