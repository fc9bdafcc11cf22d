use anyhow::Result;
use async_trait::async_trait;

/// Key under which the bearer token is stored.
/// Stable across versions; renaming it orphans previously saved tokens.
pub const TOKEN_KEY: &str = "access_token";

/// Async persistence contract for the single bearer token.
///
/// Each operation is individually atomic - a load never observes a partially
/// written token - but there is no transaction across calls: last writer
/// wins. Absence is reported as `Ok(None)`, never as an error.
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Store the token, overwriting any previous one.
    async fn save(&self, token: &str) -> Result<()>;

    /// Retrieve the stored token, or `None` if nothing is stored.
    async fn load(&self) -> Result<Option<String>>;

    /// Remove the stored token. Clearing an empty store is not an error.
    async fn clear(&self) -> Result<()>;
}
