//! Interactive browser
//!
//! [`App`] is the single owner of the search session, the detail view, the
//! suggestion panel and the favorite flag. Remote calls are spawned onto the
//! runtime and report back as [`AppEvent`]s, which are applied on the owning
//! task; the sequence fences on each slot drop superseded results.

mod command;

use std::io::Write;
use std::sync::Arc;

use owo_colors::OwoColorize;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::detail::{DetailRequest, DetailView};
use crate::display::{HELP_TEXT, render_detail, render_search};
use crate::error::{MarqueeError, Result};
use crate::favorites::{FavoriteStore, KeyValueStore};
use crate::remote::{DetailRecord, MovieLookup, ResultItem, ResultPage};
use crate::session::{Applied, SearchRequest, SearchSession};
use crate::suggestions::{SuggestionPanel, SuggestionTicket, load_suggestions};

pub use command::{Command, OpenTarget, parse_command};

/// Completion of a spawned remote call
#[derive(Debug)]
pub enum AppEvent {
    Search {
        request: SearchRequest,
        result: Result<ResultPage>,
    },
    Detail {
        request: DetailRequest,
        result: Result<DetailRecord>,
    },
    Suggestions {
        ticket: SuggestionTicket,
        items: Vec<ResultItem>,
    },
}

/// What the input loop should do after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Help,
    Quit,
}

pub struct App<L, S> {
    lookup: Arc<L>,
    favorites: FavoriteStore<S>,
    session: SearchSession,
    suggestions: SuggestionPanel,
    detail: DetailView,
    /// Persisted flag of the open title, read when the detail view opens
    favorite: Option<bool>,
    events: UnboundedSender<AppEvent>,
}

impl<L, S> App<L, S>
where
    L: MovieLookup + 'static,
    S: KeyValueStore,
{
    pub fn new(lookup: Arc<L>, favorites: FavoriteStore<S>) -> (Self, UnboundedReceiver<AppEvent>) {
        let (events, receiver) = mpsc::unbounded_channel();
        let app = Self {
            lookup,
            favorites,
            session: SearchSession::new(),
            suggestions: SuggestionPanel::new(),
            detail: DetailView::new(),
            favorite: None,
            events,
        };
        (app, receiver)
    }

    /// Kick off the popular picks load for the empty session
    pub fn start(&mut self) {
        self.refresh_suggestions();
    }

    fn refresh_suggestions(&mut self) {
        if !self.session.needs_suggestions()
            || !self.suggestions.is_empty()
            || self.suggestions.is_loading()
        {
            return;
        }

        let ticket = self.suggestions.begin();
        let lookup = Arc::clone(&self.lookup);
        let events = self.events.clone();
        tokio::spawn(async move {
            let items = load_suggestions(lookup.as_ref()).await;
            deliver(&events, AppEvent::Suggestions { ticket, items });
        });
    }

    fn spawn_search(&self, request: SearchRequest) {
        tracing::debug!(query = %request.query, page = request.page, seq = request.seq, "dispatching search");
        let lookup = Arc::clone(&self.lookup);
        let events = self.events.clone();
        tokio::spawn(async move {
            let result = lookup.search(&request.query, request.page).await;
            deliver(&events, AppEvent::Search { request, result });
        });
    }

    fn spawn_detail(&self, request: DetailRequest) {
        tracing::debug!(id = %request.id, seq = request.seq, "dispatching detail lookup");
        let lookup = Arc::clone(&self.lookup);
        let events = self.events.clone();
        tokio::spawn(async move {
            let result = lookup.fetch_by_id(&request.id).await;
            deliver(&events, AppEvent::Detail { request, result });
        });
    }

    /// Parse and run one input line
    pub fn handle_line(&mut self, line: &str) -> Result<Flow> {
        match parse_command(line)? {
            Some(command) => self.handle_command(command),
            None => Ok(Flow::Continue),
        }
    }

    pub fn handle_command(&mut self, command: Command) -> Result<Flow> {
        match command {
            Command::Search(raw) => {
                let request = self.session.submit(&raw)?;
                self.close_detail();
                self.spawn_search(request);
            }
            Command::Next => {
                if let Some(request) = self.session.next_page() {
                    self.spawn_search(request);
                }
            }
            Command::Prev => {
                if let Some(request) = self.session.prev_page() {
                    self.spawn_search(request);
                }
            }
            Command::Page(n) => {
                if let Some(request) = self.session.go_to_page(n) {
                    self.spawn_search(request);
                }
            }
            Command::Year(value) => self.session.set_year_filter(&value),
            Command::Open(target) => {
                let id = self.resolve_target(target)?;
                // Read the flag first so a storage error leaves the view as it was
                let favorite = self.favorites.is_favorite(id.trim())?;
                if let Some(request) = self.detail.open(Some(&id)) {
                    self.favorite = Some(favorite);
                    self.spawn_detail(request);
                }
            }
            Command::Fav => {
                let Some(id) = self.detail.id() else {
                    return Err(MarqueeError::Validation(
                        "Open a title before marking it as a favorite".to_string(),
                    ));
                };
                self.favorite = Some(self.favorites.toggle(id)?);
            }
            Command::Back => {
                self.close_detail();
                self.refresh_suggestions();
            }
            Command::Help => return Ok(Flow::Help),
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn close_detail(&mut self) {
        self.detail.close();
        self.favorite = None;
    }

    /// Map an `open` argument to an identifier from the list on screen
    fn resolve_target(&self, target: OpenTarget) -> Result<String> {
        match target {
            OpenTarget::Id(id) => Ok(id),
            OpenTarget::Index(index) => {
                let shown = if self.session.needs_suggestions() {
                    self.session.displayed_suggestions(self.suggestions.items())
                } else {
                    self.session.displayed_items()
                };
                index
                    .checked_sub(1)
                    .and_then(|i| shown.get(i))
                    .map(|item| item.id.clone())
                    .ok_or_else(|| {
                        MarqueeError::Validation(format!("No entry {index} in the list"))
                    })
            }
        }
    }

    /// Apply a finished remote call; returns true if the screen changed
    pub fn handle_event(&mut self, event: AppEvent) -> bool {
        match event {
            AppEvent::Search { request, result } => {
                if self.session.apply(&request, result) == Applied::Stale {
                    return false;
                }
                if self.session.needs_suggestions() {
                    self.refresh_suggestions();
                } else {
                    self.suggestions.supersede();
                }
                true
            }
            AppEvent::Detail { request, result } => self.detail.apply(&request, result),
            AppEvent::Suggestions { ticket, items } => {
                let has_items = !self.session.needs_suggestions();
                self.suggestions.complete(ticket, items, has_items)
            }
        }
    }

    pub fn render(&self) -> String {
        if self.detail.is_open() {
            render_detail(&self.detail, self.favorite)
        } else {
            render_search(&self.session, &self.suggestions)
        }
    }

    pub fn session(&self) -> &SearchSession {
        &self.session
    }

    pub fn detail(&self) -> &DetailView {
        &self.detail
    }

    pub fn suggestions(&self) -> &SuggestionPanel {
        &self.suggestions
    }

    pub fn favorite(&self) -> Option<bool> {
        self.favorite
    }

    /// Read commands from stdin until `quit` or end of input
    pub async fn run(mut self, mut events: UnboundedReceiver<AppEvent>) -> Result<()> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        self.start();
        print_screen(&self.render())?;

        loop {
            tokio::select! {
                line = lines.next_line() => {
                    let Some(line) = line? else { break };
                    match self.handle_line(&line) {
                        Ok(Flow::Quit) => break,
                        Ok(Flow::Help) => println!("{HELP_TEXT}"),
                        Ok(Flow::Continue) => print_screen(&self.render())?,
                        Err(e) => eprintln!("{}", e.to_string().red()),
                    }
                }
                Some(event) = events.recv() => {
                    if self.handle_event(event) {
                        print_screen(&self.render())?;
                    }
                }
            }
        }

        Ok(())
    }
}

/// Hand a finished call back to the owning task
fn deliver(events: &UnboundedSender<AppEvent>, event: AppEvent) {
    // The receiver only goes away on shutdown
    if events.send(event).is_err() {
        tracing::debug!("browser closed before a remote call finished");
    }
}

fn print_screen(screen: &str) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout)?;
    write!(stdout, "{screen}")?;
    write!(stdout, "{} ", ">".cyan())?;
    stdout.flush()?;
    Ok(())
}
