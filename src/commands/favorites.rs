use std::path::Path;

use owo_colors::OwoColorize;
use serde_json::json;

use super::{CommandOutput, load_config, open_favorites};
use crate::display::render_favorites;
use crate::error::Result;
use crate::favorites::{FavoriteStore, KeyValueStore};
use crate::remote;

/// List favorite identifiers
pub fn cmd_favorites(config_path: Option<&Path>, output_json: bool) -> Result<()> {
    let (config, _) = load_config(config_path)?;
    list_output(&open_favorites(&config)?)?.print(output_json)
}

/// Flip the favorite flag for `id`
pub fn cmd_fav(config_path: Option<&Path>, id: &str, output_json: bool) -> Result<()> {
    let (config, _) = load_config(config_path)?;
    toggle_output(&open_favorites(&config)?, id)?.print(output_json)
}

pub(crate) fn list_output<S: KeyValueStore>(favorites: &FavoriteStore<S>) -> Result<CommandOutput> {
    let ids = favorites.list()?;
    Ok(CommandOutput::new(json!({ "favorites": ids })).with_text(render_favorites(&ids)))
}

pub(crate) fn toggle_output<S: KeyValueStore>(
    favorites: &FavoriteStore<S>,
    id: &str,
) -> Result<CommandOutput> {
    let id = remote::validate_id(id)?;
    let favorite = favorites.toggle(id)?;

    let text = if favorite {
        format!("Added {} to favorites", id.cyan())
    } else {
        format!("Removed {} from favorites", id.cyan())
    };
    Ok(CommandOutput::new(json!({
        "action": "fav",
        "id": id,
        "favorite": favorite,
    }))
    .with_text(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::favorites::MemoryStore;

    #[test]
    fn test_toggle_then_list() {
        let favorites = FavoriteStore::new(MemoryStore::new());

        let added = toggle_output(&favorites, "tt0133093").unwrap();
        assert_eq!(added.json()["favorite"], true);
        assert!(added.render(false).unwrap().contains("Added"));

        let listed = list_output(&favorites).unwrap();
        assert_eq!(listed.json()["favorites"][0], "tt0133093");

        let removed = toggle_output(&favorites, "tt0133093").unwrap();
        assert_eq!(removed.json()["favorite"], false);
        assert!(list_output(&favorites).unwrap().render(false).unwrap().contains("No favorites yet"));
    }

    #[test]
    fn test_toggle_rejects_blank_id() {
        let favorites = FavoriteStore::new(MemoryStore::new());
        assert!(toggle_output(&favorites, " ").is_err());
    }
}
