use anyhow::{Context, Result};
use async_trait::async_trait;
use keyring::Entry;

use super::store::{TokenStore, TOKEN_KEY};

const SERVICE_NAME: &str = "sigo-auth";

/// `TokenStore` backed by the OS keychain.
///
/// The keyring API is blocking, so calls are moved off the async runtime
/// with `spawn_blocking`.
pub struct KeyringTokenStore {
    service: String,
}

impl KeyringTokenStore {
    pub fn new() -> Self {
        Self::with_service(SERVICE_NAME)
    }

    pub fn with_service(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
        }
    }

    fn entry(service: &str) -> Result<Entry> {
        Entry::new(service, TOKEN_KEY).context("Failed to create keyring entry")
    }
}

impl Default for KeyringTokenStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TokenStore for KeyringTokenStore {
    async fn save(&self, token: &str) -> Result<()> {
        let service = self.service.clone();
        let token = token.to_string();
        tokio::task::spawn_blocking(move || {
            Self::entry(&service)?
                .set_password(&token)
                .context("Failed to store token in keychain")
        })
        .await
        .context("Keyring task failed")?
    }

    async fn load(&self) -> Result<Option<String>> {
        let service = self.service.clone();
        tokio::task::spawn_blocking(move || {
            match Self::entry(&service)?.get_password() {
                Ok(token) => Ok(Some(token)),
                Err(keyring::Error::NoEntry) => Ok(None),
                Err(e) => Err(e).context("Failed to read token from keychain"),
            }
        })
        .await
        .context("Keyring task failed")?
    }

    async fn clear(&self) -> Result<()> {
        let service = self.service.clone();
        tokio::task::spawn_blocking(move || {
            match Self::entry(&service)?.delete_credential() {
                Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
                Err(e) => Err(e).context("Failed to delete token from keychain"),
            }
        })
        .await
        .context("Keyring task failed")?
    }
}
