//! Configuration commands
//!
//! - `config show`: Display the effective configuration
//! - `config set-key`: Store the OMDb API key

use std::path::Path;

use owo_colors::OwoColorize;
use serde_json::json;

use super::{CommandOutput, load_config};
use crate::config::{API_KEY_ENV, BASE_URL_ENV, Config};
use crate::error::{MarqueeError, Result};

/// Mask a sensitive value by showing only the first 2 and last 2 characters
pub fn mask_sensitive_value(value: &str) -> String {
    let char_count = value.chars().count();
    if char_count > 4 {
        let first: String = value.chars().take(2).collect();
        let last: String = value.chars().skip(char_count - 2).collect();
        format!("{first}...{last}")
    } else {
        "****".to_string()
    }
}

/// Show current configuration
pub fn cmd_config_show(config_path: Option<&Path>, output_json: bool) -> Result<()> {
    let (config, path) = load_config(config_path)?;
    show_output(&config, &path)?.print(output_json)
}

pub(crate) fn show_output(config: &Config, path: &Path) -> Result<CommandOutput> {
    let masked_key = config.api_key().as_deref().map(mask_sensitive_value);
    let favorites_path = config.favorites_path()?;

    let json_output = json!({
        "omdb": {
            "base_url": config.base_url(),
            "api_key": masked_key,
        },
        "request_timeout": config.request_timeout().as_secs(),
        "connect_timeout": config.connect_timeout().as_secs(),
        "favorites_path": favorites_path.to_string_lossy(),
        "config_file": path.to_string_lossy(),
    });

    let mut text = String::new();
    text.push_str(&format!("{}\n\n", "Configuration:".cyan().bold()));

    text.push_str(&format!("{}:\n", "omdb".cyan()));
    text.push_str(&format!("  base_url: {}\n", config.base_url()));
    let key_status = match &masked_key {
        Some(masked) => masked.green().to_string(),
        None => format!("not configured (set {API_KEY_ENV} or run 'marquee config set-key')")
            .dimmed()
            .to_string(),
    };
    text.push_str(&format!("  api_key: {key_status}\n\n"));

    text.push_str(&format!(
        "{}: {}s\n",
        "request_timeout".cyan(),
        config.request_timeout().as_secs()
    ));
    text.push_str(&format!(
        "{}: {}s\n",
        "connect_timeout".cyan(),
        config.connect_timeout().as_secs()
    ));
    text.push_str(&format!(
        "{}: {}\n\n",
        "favorites_path".cyan(),
        favorites_path.display()
    ));

    text.push_str(&format!(
        "{}",
        format!(
            "Config file: {} ({BASE_URL_ENV} and {API_KEY_ENV} override it)",
            path.display()
        )
        .dimmed()
    ));

    Ok(CommandOutput::new(json_output).with_text(text))
}

/// Persist the OMDb API key
pub fn cmd_config_set_key(config_path: Option<&Path>, key: &str, output_json: bool) -> Result<()> {
    let (config, path) = load_config(config_path)?;
    set_key_output(config, &path, key)?.print(output_json)
}

pub(crate) fn set_key_output(mut config: Config, path: &Path, key: &str) -> Result<CommandOutput> {
    let key = key.trim();
    if key.is_empty() {
        return Err(MarqueeError::Config("API key cannot be empty".to_string()));
    }

    config.set_api_key(key.to_string());
    config.save_to(path)?;
    tracing::debug!(path = %path.display(), "saved api key");

    Ok(CommandOutput::new(json!({
        "action": "config_set",
        "key": "omdb.api_key",
        "success": true,
    }))
    .with_text(format!("Set {}", "omdb.api_key".cyan())))
}
