//! Terminal rendering for the search and detail screens

use owo_colors::OwoColorize;

use crate::detail::{DetailState, DetailView};
use crate::remote::{DetailRecord, Poster, ResultItem};
use crate::session::{SearchSession, SessionStatus, YearFilter};
use crate::suggestions::SuggestionPanel;

pub const HELP_TEXT: &str = "\
Commands:
  /<title>, search <title>   search by title
  n, next                    next page
  p, prev                    previous page
  page <n>                   jump to page n
  year <yyyy|All>            filter the shown list by year
  open <n|id>                show details for entry n or an IMDb id
  fav                        toggle favorite on the open title
  back                       return to search
  help                       show this help
  quit                       exit";

fn poster_badge(poster: &Poster) -> String {
    match poster {
        Poster::Url(_) => String::new(),
        Poster::Missing => format!(" {}", "[no poster]".dimmed()),
    }
}

/// Format a result for single-line display; `index` is 1-based
pub fn format_item_line(index: usize, item: &ResultItem) -> String {
    format!(
        "{:>3}. {} ({}) {}{}",
        index,
        item.title.bold(),
        item.year,
        item.id.cyan(),
        poster_badge(&item.poster)
    )
}

fn format_years(filter: &YearFilter, years: &[String]) -> String {
    let mut labels = vec![YearFilter::All.to_string()];
    labels.extend(years.iter().cloned());
    labels
        .into_iter()
        .map(|label| {
            if YearFilter::parse(&label) == *filter {
                format!("[{label}]").green().to_string()
            } else {
                label
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render the search screen: status line, result list or popular picks
pub fn render_search(session: &SearchSession, suggestions: &SuggestionPanel) -> String {
    let mut out = String::new();

    if !session.query().is_empty() {
        out.push_str(&format!(
            "{} {}  page {}/{}  {} results\n",
            "Search:".cyan().bold(),
            session.query(),
            session.current_page(),
            session.total_pages(),
            session.total_results()
        ));
    }

    match session.status() {
        SessionStatus::Loading => out.push_str(&format!("{}\n", "Searching...".dimmed())),
        SessionStatus::Failed => {
            if let Some(error) = session.last_error() {
                out.push_str(&format!("{}\n", error.red()));
            }
        }
        SessionStatus::Idle | SessionStatus::Ready => {}
    }

    let years = session.available_years(suggestions.items());
    if !years.is_empty() {
        out.push_str(&format!(
            "{} {}\n",
            "Year:".cyan(),
            format_years(session.year_filter(), &years)
        ));
    }

    if session.needs_suggestions() {
        out.push_str(&format!("\n{}\n", "Popular picks".bold()));
        if suggestions.is_loading() && suggestions.is_empty() {
            out.push_str(&format!("{}\n", "Loading...".dimmed()));
        }
        for (i, item) in session
            .displayed_suggestions(suggestions.items())
            .into_iter()
            .enumerate()
        {
            out.push_str(&format_item_line(i + 1, item));
            out.push('\n');
        }
    } else {
        let shown = session.displayed_items();
        if shown.is_empty() {
            out.push_str(&format!(
                "{}\n",
                format!("No results from {} on this page", session.year_filter()).dimmed()
            ));
        }
        for (i, item) in shown.into_iter().enumerate() {
            out.push_str(&format_item_line(i + 1, item));
            out.push('\n');
        }
    }

    out
}

/// Render a full record
pub fn render_record(record: &DetailRecord, favorite: Option<bool>) -> String {
    let heart = match favorite {
        Some(true) => format!(" {}", "♥ favorite".red()),
        Some(false) => format!(" {}", "♡".dimmed()),
        None => String::new(),
    };

    let mut out = format!(
        "{} ({}){}\n{}\n\n",
        record.title.bold(),
        record.year,
        heart,
        record.id.cyan()
    );

    let genres = if record.genres.is_empty() {
        crate::remote::NOT_APPLICABLE.to_string()
    } else {
        record.genres.join(" · ")
    };

    let rows = [
        ("Rating", record.rating.as_str()),
        ("Runtime", record.runtime.as_str()),
        ("Genres", genres.as_str()),
        ("Director", record.director.as_str()),
        ("Writer", record.writer.as_str()),
        ("Actors", record.actors.as_str()),
        ("Language", record.language.as_str()),
        ("Country", record.country.as_str()),
        ("Awards", record.awards.as_str()),
    ];
    for (label, value) in rows {
        out.push_str(&format!("{:>9}: {}\n", label.cyan(), value));
    }

    out.push_str(&format!("\n{}\n", record.plot));
    match &record.poster {
        Poster::Url(url) => out.push_str(&format!("\nPoster: {}\n", url.dimmed())),
        Poster::Missing => out.push_str(&format!("\n{}\n", "No poster available".dimmed())),
    }
    out
}

/// Render the detail screen for whatever state the loader is in
pub fn render_detail(view: &DetailView, favorite: Option<bool>) -> String {
    match view.state() {
        DetailState::Idle => String::new(),
        DetailState::Loading => format!("{}\n", "Loading details...".dimmed()),
        DetailState::Ready(record) => render_record(record, favorite),
        DetailState::Failed(message) => format!(
            "{}\n{}\n",
            message.red(),
            "Type 'back' to return to search".dimmed()
        ),
    }
}

pub fn render_favorites(ids: &[String]) -> String {
    if ids.is_empty() {
        return format!("{}\n", "No favorites yet".dimmed());
    }
    ids.iter().map(|id| format!("{}\n", id.cyan())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::fake::{item, record};

    #[test]
    fn test_missing_poster_uses_placeholder() {
        let line = format_item_line(1, &item("tt1", "Stub", "2001"));
        assert!(line.contains("[no poster]"));

        let mut with_poster = item("tt2", "Real", "2002");
        with_poster.poster = Poster::Url("https://img.example/p.jpg".to_string());
        assert!(!format_item_line(2, &with_poster).contains("[no poster]"));
    }

    #[test]
    fn test_render_idle_session_shows_suggestions() {
        let session = SearchSession::new();
        let mut panel = SuggestionPanel::new();
        let ticket = panel.begin();
        panel.complete(ticket, vec![item("tt1375666", "Inception", "2010")], false);

        let out = render_search(&session, &panel);
        assert!(out.contains("Popular picks"));
        assert!(out.contains("Inception"));
        assert!(out.contains("2010"));
    }

    #[test]
    fn test_render_record_lists_genres_and_sentinel() {
        let out = render_record(&record("tt1375666", "Inception"), Some(true));
        assert!(out.contains("Action · Sci-Fi"));
        assert!(out.contains("No poster available"));
        assert!(out.contains("favorite"));
    }

    #[test]
    fn test_render_failed_detail_shows_message() {
        let mut view = DetailView::new();
        let request = view.open(Some("bad")).unwrap();
        view.apply(
            &request,
            Err(crate::error::MarqueeError::NotFound(
                "Incorrect IMDb ID.".to_string(),
            )),
        );
        let out = render_detail(&view, None);
        assert!(out.contains("Incorrect IMDb ID."));
        assert!(out.contains("back"));
    }

    #[test]
    fn test_render_favorites() {
        assert!(render_favorites(&[]).contains("No favorites yet"));
        let out = render_favorites(&["tt1".to_string(), "tt2".to_string()]);
        assert!(out.contains("tt1") && out.contains("tt2"));
    }
}
