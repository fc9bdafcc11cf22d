use thiserror::Error;

/// Classified failures from the authentication endpoint.
///
/// Validation of empty fields happens in the session controller before any
/// network attempt, so it never appears here. None of these are retried and
/// none are fatal; the controller folds them into the UI error message.
#[derive(Error, Debug)]
pub enum AuthError {
    /// The server answered outside the 2xx range.
    #[error("login failed with status {0}")]
    Http(u16),

    /// Connectivity-level failure: no connection, timeout, broken transfer.
    #[error("connection error: {0}")]
    Network(String),

    /// A 2xx response whose body was empty or did not match the profile shape.
    #[error("invalid login response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for AuthError {
    fn from(err: reqwest::Error) -> Self {
        // Prefer the root cause ("connection refused", "timed out") over
        // reqwest's outer wrapper text; fall back to a generic message when
        // no description is available at all.
        let cause = std::error::Error::source(&err)
            .map(|source| source.to_string())
            .filter(|text| !text.is_empty())
            .unwrap_or_else(|| err.to_string());

        if cause.is_empty() {
            AuthError::Network("unknown connection error".to_string())
        } else {
            AuthError::Network(cause)
        }
    }
}

impl AuthError {
    pub fn from_status(status: reqwest::StatusCode) -> Self {
        AuthError::Http(status.as_u16())
    }
}
