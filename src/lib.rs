pub mod app;
pub mod commands;
pub mod config;
pub mod detail;
pub mod display;
pub mod error;
pub mod favorites;
pub mod remote;
pub mod session;
pub mod suggestions;

pub use app::{App, AppEvent, Command, Flow};
pub use config::Config;
pub use detail::{DetailState, DetailView};
pub use error::{MarqueeError, Result};
pub use favorites::{FavoriteStore, FileStore, KeyValueStore, MemoryStore};
pub use remote::{DetailRecord, MovieLookup, OmdbClient, Poster, ResultItem, ResultPage};
pub use session::{SearchSession, SessionStatus, YearFilter};
pub use suggestions::{SuggestionPanel, load_suggestions};
