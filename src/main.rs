//! sigo-login - interactive terminal login for the SIGO service.
//!
//! Plays the presentation-layer role: collects credentials, feeds intents
//! into the session controller, and renders the resulting profile. The
//! bearer token and the echoed password are never printed.

use std::io::{self, Write};
use std::sync::Arc;

use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use sigo_auth::api::HttpAuthClient;
use sigo_auth::auth::FileTokenStore;
use sigo_auth::config::Config;
use sigo_auth::models::UserProfile;
use sigo_auth::session::SessionController;

/// Initialize the tracing subscriber for logging
fn init_tracing() {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    init_tracing();
    info!("sigo-login starting");

    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            warn!(error = %e, "Failed to load config, using defaults");
            Config::default()
        }
    };

    let client = Arc::new(HttpAuthClient::from_config(&config)?);
    let store = Arc::new(FileTokenStore::new(config.data_dir()?));
    let controller = SessionController::new(client, store);

    if controller.saved_token().await?.is_some() {
        println!("A saved session exists; logging in again will replace it.");
    }

    let username = prompt_username()?;
    let password = rpassword::prompt_password("Password: ")?;

    controller.set_username(username.trim());
    controller.set_password(&password);

    println!("\nAuthenticating...");
    controller.submit().await;

    let state = controller.state();
    if let Some(user) = state.user.filter(|_| state.login_success) {
        println!("Login successful!\n");
        render_profile(&user);
        Ok(())
    } else {
        let message = state
            .error_message
            .unwrap_or_else(|| "unknown connection error".to_string());
        eprintln!("Login failed: {}", message);
        std::process::exit(1);
    }
}

fn prompt_username() -> Result<String> {
    print!("Username: ");
    io::stdout().flush()?;

    let mut username = String::new();
    io::stdin().read_line(&mut username)?;
    Ok(username.trim().to_string())
}

/// Print the profile fields. Deliberately omits `bearer` and the echoed
/// `password` field.
fn render_profile(user: &UserProfile) {
    println!("=== {} ===", user.person_full_name);
    println!("Username:    {}", user.username);
    println!("Email:       {}", user.email);
    println!("Profile:     {}", user.profile_name);
    println!("Access:      {}", user.access_module);
    println!(
        "Roles:       {}",
        if user.roles.is_empty() {
            "(none)".to_string()
        } else {
            user.roles.join(", ")
        }
    );
    println!("Active:      {}", if user.active { "yes" } else { "no" });
    println!(
        "Terms:       {}",
        if user.terms_conditions {
            "accepted"
        } else {
            "not accepted"
        }
    );
    println!("Registered:  {} (by {})", user.register, user.register_user);
    println!("Ids:         user {} / person {}", user.id, user.person_id);
    if !user.message_control.is_empty() {
        println!("\nNotice: {}", user.message_control);
    }
}
