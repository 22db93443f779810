use std::path::Path;

use owo_colors::OwoColorize;
use serde_json::json;

use super::{CommandOutput, load_config};
use crate::display::format_item_line;
use crate::error::{MarqueeError, Result};
use crate::remote::{self, MovieLookup, OmdbClient};
use crate::session::YearFilter;

pub struct SearchOptions {
    pub title: String,
    pub page: u32,
    pub year: Option<String>,
}

/// Search once and print one page of results
pub async fn cmd_search(
    config_path: Option<&Path>,
    options: SearchOptions,
    output_json: bool,
) -> Result<()> {
    let (config, _) = load_config(config_path)?;
    let client = OmdbClient::from_config(&config)?;
    search_output(&client, &options).await?.print(output_json)
}

pub(crate) async fn search_output<L: MovieLookup>(
    lookup: &L,
    options: &SearchOptions,
) -> Result<CommandOutput> {
    let query = remote::validate_query(&options.title)?;
    if options.page == 0 {
        return Err(MarqueeError::Validation(
            "Page numbers start at 1".to_string(),
        ));
    }

    let page = lookup.search(query, options.page).await?;
    let pages = remote::total_pages(page.total_results);
    let filter = options
        .year
        .as_deref()
        .map(YearFilter::parse)
        .unwrap_or_default();
    let shown = filter.apply(&page.items);

    let json_output = json!({
        "query": query,
        "page": options.page,
        "total_pages": pages,
        "total_results": page.total_results,
        "year": filter.to_string(),
        "results": shown,
    });

    let mut text = format!(
        "{} {}  page {}/{}  {} results\n",
        "Search:".cyan().bold(),
        query,
        options.page,
        pages,
        page.total_results
    );
    if shown.is_empty() {
        text.push_str(&format!(
            "{}\n",
            format!("No results from {filter} on this page").dimmed()
        ));
    }
    for (i, item) in shown.iter().enumerate() {
        text.push_str(&format_item_line(i + 1, item));
        text.push('\n');
    }

    Ok(CommandOutput::new(json_output).with_text(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::fake::{FakeLookup, Reply, item, page};

    fn options(title: &str, page: u32, year: Option<&str>) -> SearchOptions {
        SearchOptions {
            title: title.to_string(),
            page,
            year: year.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_search_output_filters_by_year() {
        let lookup = FakeLookup::new().on_search(
            "Batman",
            2,
            Reply::Ok(page(
                vec![
                    item("tt0372784", "Batman Begins", "2005"),
                    item("tt1877830", "The Batman", "2022"),
                ],
                57,
                2,
            )),
        );

        let output = search_output(&lookup, &options(" Batman ", 2, Some("2005")))
            .await
            .unwrap();
        let json = output.json();
        assert_eq!(json["total_pages"], 6);
        assert_eq!(json["results"].as_array().unwrap().len(), 1);
        assert_eq!(json["results"][0]["id"], "tt0372784");
        assert!(output.render(false).unwrap().contains("Batman Begins"));
    }

    #[tokio::test]
    async fn test_search_output_propagates_service_message() {
        let err = search_output(&FakeLookup::new(), &options("zzzz", 1, None))
            .await
            .err()
            .unwrap();
        assert_eq!(err.to_string(), "Movie not found!");
    }

    #[tokio::test]
    async fn test_search_output_validates_before_calling() {
        let lookup = FakeLookup::new();
        assert!(search_output(&lookup, &options("  ", 1, None)).await.is_err());
        assert!(search_output(&lookup, &options("Batman", 0, None)).await.is_err());
        assert_eq!(lookup.search_call_count(), 0);
    }
}
