use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::fs;

use super::store::TokenStore;

/// Token file name in the app data directory
const TOKEN_FILE: &str = "auth_prefs.json";

/// On-disk shape of the token file. No schema version field: if the format
/// ever changes, old files read as "no token present" rather than erroring.
#[derive(Debug, Serialize, Deserialize)]
struct TokenFile {
    access_token: String,
}

/// `TokenStore` backed by a JSON file.
///
/// Writes go to a temp file which is then renamed over the target, so a
/// concurrent load never observes a half-written token.
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            path: data_dir.join(TOKEN_FILE),
        }
    }
}

#[async_trait]
impl TokenStore for FileTokenStore {
    async fn save(&self, token: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .context("Failed to create token directory")?;
        }

        let contents = serde_json::to_string_pretty(&TokenFile {
            access_token: token.to_string(),
        })?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, contents)
            .await
            .context("Failed to write token file")?;
        fs::rename(&tmp, &self.path)
            .await
            .context("Failed to move token file into place")?;
        Ok(())
    }

    async fn load(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path).await {
            Ok(contents) => {
                // Unreadable or old-format contents count as no token.
                let file: Option<TokenFile> = serde_json::from_str(&contents).ok();
                Ok(file.map(|f| f.access_token))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).context("Failed to read token file"),
        }
    }

    async fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).context("Failed to remove token file"),
        }
    }
}
