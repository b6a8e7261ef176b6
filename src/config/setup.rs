//! Interactive setup wizard for first-time configuration
//!
//! Prompts for the search service access key when imgseek is run for the
//! first time.

use super::{ACCESS_KEY_ENV, ImgseekConfig};
use config::ConfigError;
use dialoguer::{Input, Password, theme::ColorfulTheme};

/// Interactive first-time setup - prompts for the access key and endpoint
///
/// Guides the user through creating their configuration:
/// 1. Prompts for the access key (skipped if `IMGSEEK_ACCESS_KEY` is set)
/// 2. Prompts for the service base URL (default: the public API)
/// 3. Saves the configuration
///
/// # Errors
///
/// Returns `ConfigError` if:
/// - User input cannot be read
/// - The configuration cannot be saved
pub fn first_time_setup() -> Result<ImgseekConfig, ConfigError> {
    println!("Welcome to imgseek! Let's connect to the image search service.\n");

    let mut config = ImgseekConfig::default();

    if std::env::var(ACCESS_KEY_ENV).is_ok_and(|key| !key.trim().is_empty()) {
        println!("Using access key from {ACCESS_KEY_ENV}.");
    } else {
        let key: String = Password::with_theme(&ColorfulTheme::default())
            .with_prompt("Access key (leave empty to set later)")
            .allow_empty_password(true)
            .interact()
            .map_err(|e| ConfigError::Message(format!("Failed to read input: {e}")))?;
        config.set_value("api.access_key", &key)?;
    }

    let base_url: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Service URL")
        .default(config.api.base_url.clone())
        .interact_text()
        .map_err(|e| ConfigError::Message(format!("Failed to read input: {e}")))?;
    config.set_value("api.base_url", &base_url)?;

    config.save()?;

    println!("\nConfiguration saved successfully!");
    Ok(config)
}
