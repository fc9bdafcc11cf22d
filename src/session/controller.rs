use std::sync::Arc;

use anyhow::Result;
use tokio::sync::watch;
use tracing::{debug, error, info, warn};

use crate::api::AuthClient;
use crate::auth::TokenStore;

use super::state::{reduce, LoginEvent, LoginState, VALIDATION_MESSAGE};

/// Orchestrates the login flow: validation, the authentication call, token
/// persistence, and projection of the outcome into `LoginState`.
///
/// Collaborators arrive by constructor injection; there is no ambient
/// client or container. The controller owns the state exclusively and
/// readers observe it as complete snapshots through `subscribe`.
pub struct SessionController {
    client: Arc<dyn AuthClient>,
    store: Arc<dyn TokenStore>,
    tx: watch::Sender<LoginState>,
}

impl SessionController {
    pub fn new(client: Arc<dyn AuthClient>, store: Arc<dyn TokenStore>) -> Self {
        let (tx, _rx) = watch::channel(LoginState::default());
        Self { client, store, tx }
    }

    /// Receiver of state snapshots. Every published state is a complete,
    /// consistent value; readers never see a partial update.
    pub fn subscribe(&self) -> watch::Receiver<LoginState> {
        self.tx.subscribe()
    }

    /// Current state snapshot.
    pub fn state(&self) -> LoginState {
        self.tx.borrow().clone()
    }

    /// Apply an event atomically and publish the resulting snapshot.
    fn apply(&self, event: LoginEvent) {
        self.tx.send_modify(|state| {
            let previous = std::mem::take(state);
            *state = reduce(previous, event);
        });
    }

    pub fn set_username(&self, text: &str) {
        self.apply(LoginEvent::UsernameChanged(text.to_string()));
    }

    pub fn set_password(&self, text: &str) {
        self.apply(LoginEvent::PasswordChanged(text.to_string()));
    }

    /// Run one login attempt with the current form fields.
    ///
    /// Empty or whitespace-only fields fail locally without touching the
    /// network. On success the bearer token is persisted to completion
    /// before the success snapshot becomes visible. A second submit while
    /// one is already in flight is ignored.
    pub async fn submit(&self) {
        let current = self.state();

        if current.is_loading {
            debug!("submit ignored while a login is in flight");
            return;
        }

        if current.username.trim().is_empty() || current.password.trim().is_empty() {
            self.apply(LoginEvent::SubmitFailed(VALIDATION_MESSAGE.to_string()));
            return;
        }

        self.apply(LoginEvent::SubmitStarted);

        match self
            .client
            .authenticate(&current.username, &current.password)
            .await
        {
            Ok(profile) => {
                // Awaited before the success snapshot so observers can rely
                // on the token being durably stored once login_success is
                // visible. A failed save does not fail the login.
                if let Err(e) = self.store.save(&profile.bearer).await {
                    warn!(error = %e, "failed to persist bearer token; session will not survive restart");
                }
                info!(username = %current.username, "login successful");
                self.apply(LoginEvent::SubmitSucceeded(Box::new(profile)));
            }
            Err(e) => {
                error!(error = %e, "login failed");
                self.apply(LoginEvent::SubmitFailed(e.to_string()));
            }
        }
    }

    /// Restore the all-defaults state, discarding fields, errors and the
    /// loaded profile. Valid at any time, including mid-submit.
    pub fn reset(&self) {
        self.apply(LoginEvent::Reset);
    }

    /// Clear the persisted token and reset the state.
    pub async fn logout(&self) -> Result<()> {
        self.store.clear().await?;
        self.reset();
        info!("logged out");
        Ok(())
    }

    /// Token left behind by a previous successful login, if any.
    pub async fn saved_token(&self) -> Result<Option<String>> {
        self.store.load().await
    }
}
