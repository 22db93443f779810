use std::path::Path;

use serde_json::json;

use super::{CommandOutput, load_config, open_favorites};
use crate::display::render_record;
use crate::error::Result;
use crate::favorites::{FavoriteStore, KeyValueStore};
use crate::remote::{self, MovieLookup, OmdbClient};

/// Display the full record for one identifier
pub async fn cmd_show(config_path: Option<&Path>, id: &str, output_json: bool) -> Result<()> {
    let (config, _) = load_config(config_path)?;
    let client = OmdbClient::from_config(&config)?;
    let favorites = open_favorites(&config)?;
    show_output(&client, &favorites, id).await?.print(output_json)
}

pub(crate) async fn show_output<L: MovieLookup, S: KeyValueStore>(
    lookup: &L,
    favorites: &FavoriteStore<S>,
    id: &str,
) -> Result<CommandOutput> {
    let id = remote::validate_id(id)?;
    let record = lookup.fetch_by_id(id).await?;
    let favorite = favorites.is_favorite(&record.id)?;

    let text = render_record(&record, Some(favorite));
    let mut json_output = serde_json::to_value(&record)?;
    json_output["favorite"] = json!(favorite);

    Ok(CommandOutput::new(json_output).with_text(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::favorites::MemoryStore;
    use crate::remote::fake::{FakeLookup, Reply, record};

    #[tokio::test]
    async fn test_show_output_includes_favorite_flag() {
        let lookup = FakeLookup::new().on_detail("tt1375666", Reply::Ok(record("tt1375666", "Inception")));
        let favorites = FavoriteStore::new(MemoryStore::new());
        favorites.toggle("tt1375666").unwrap();

        let output = show_output(&lookup, &favorites, "tt1375666").await.unwrap();
        assert_eq!(output.json()["favorite"], true);
        assert_eq!(output.json()["title"], "Inception");
        assert!(output.render(false).unwrap().contains("Action · Sci-Fi"));
    }

    #[tokio::test]
    async fn test_show_output_unknown_id() {
        let favorites = FavoriteStore::new(MemoryStore::new());
        let err = show_output(&FakeLookup::new(), &favorites, "nope")
            .await
            .err()
            .unwrap();
        assert_eq!(err.to_string(), "Incorrect IMDb ID.");
    }
}
