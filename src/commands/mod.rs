//! One-shot CLI commands and the interactive browser entry point

mod browse;
mod config;
mod favorites;
mod search;
mod show;

use std::path::{Path, PathBuf};

pub use browse::cmd_browse;
pub use config::{cmd_config_set_key, cmd_config_show, mask_sensitive_value};
pub use favorites::{cmd_fav, cmd_favorites};
pub use search::{SearchOptions, cmd_search};
pub use show::cmd_show;

use crate::config::Config;
use crate::error::Result;
use crate::favorites::{FavoriteStore, FileStore};

/// Output of a command in both machine and human form
pub struct CommandOutput {
    json: serde_json::Value,
    text: Option<String>,
}

impl CommandOutput {
    pub fn new(json: serde_json::Value) -> Self {
        Self { json, text: None }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn json(&self) -> &serde_json::Value {
        &self.json
    }

    /// Text form, falling back to pretty JSON when no text was given
    pub fn render(&self, output_json: bool) -> Result<String> {
        match (&self.text, output_json) {
            (Some(text), false) => Ok(text.clone()),
            _ => Ok(serde_json::to_string_pretty(&self.json)?),
        }
    }

    pub fn print(self, output_json: bool) -> Result<()> {
        let rendered = self.render(output_json)?;
        println!("{}", rendered.trim_end());
        Ok(())
    }
}

/// Load the config from `path`, or from the default location
pub(crate) fn load_config(path: Option<&Path>) -> Result<(Config, PathBuf)> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => Config::config_path()?,
    };
    let config = Config::load_from(&path)?;
    Ok((config, path))
}

pub(crate) fn open_favorites(config: &Config) -> Result<FavoriteStore<FileStore>> {
    Ok(FavoriteStore::new(FileStore::new(config.favorites_path()?)))
}
