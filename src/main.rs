use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use marquee::commands::{
    SearchOptions, cmd_browse, cmd_config_set_key, cmd_config_show, cmd_fav, cmd_favorites,
    cmd_search, cmd_show,
};

/// Environment variable holding the log filter directive
const LOG_ENV: &str = "MARQUEE_LOG";

#[derive(Parser)]
#[command(name = "marquee")]
#[command(about = "Search the OMDb movie catalogue from the terminal")]
#[command(version)]
struct Cli {
    /// Path to the config file (default: platform config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive search and detail browser (default)
    #[command(visible_alias = "b")]
    Browse,

    /// Search titles and print one page of results
    #[command(visible_alias = "s")]
    Search {
        /// Movie title to search for
        title: String,

        /// Result page (10 results per page)
        #[arg(short, long, default_value = "1")]
        page: u32,

        /// Only show results from this year
        #[arg(short, long)]
        year: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show full details for an IMDb id
    Show {
        /// IMDb identifier (e.g. tt1375666)
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List favorite titles
    Favorites {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Toggle the favorite flag for an IMDb id
    Fav {
        /// IMDb identifier
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show the effective configuration
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Store the OMDb API key in the config file
    SetKey {
        /// API key issued by omdbapi.com
        key: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();
    let config = cli.config.as_deref();

    let result = match cli.command.unwrap_or(Commands::Browse) {
        Commands::Browse => cmd_browse(config).await,
        Commands::Search {
            title,
            page,
            year,
            json,
        } => cmd_search(config, SearchOptions { title, page, year }, json).await,
        Commands::Show { id, json } => cmd_show(config, &id, json).await,
        Commands::Favorites { json } => cmd_favorites(config, json),
        Commands::Fav { id, json } => cmd_fav(config, &id, json),
        Commands::Config { action } => match action {
            ConfigAction::Show { json } => cmd_config_show(config, json),
            ConfigAction::SetKey { key, json } => cmd_config_set_key(config, &key, json),
        },
    };

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
