use std::path::Path;
use std::sync::Arc;

use owo_colors::OwoColorize;

use super::{load_config, open_favorites};
use crate::app::App;
use crate::error::Result;
use crate::remote::OmdbClient;

/// Start the interactive browser on stdin/stdout
pub async fn cmd_browse(config_path: Option<&Path>) -> Result<()> {
    let (config, _) = load_config(config_path)?;
    let client = OmdbClient::from_config(&config)?;
    let favorites = open_favorites(&config)?;

    println!(
        "{} {}",
        "marquee".cyan().bold(),
        "type 'help' for commands, 'quit' to exit".dimmed()
    );

    let (app, events) = App::new(Arc::new(client), favorites);
    app.run(events).await
}
