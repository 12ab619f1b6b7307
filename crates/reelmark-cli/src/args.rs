use crate::types::{LogLevel, OutputFormat};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "reelmark")]
#[command(about = "Search movies, keep favorites and rate them", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory (defaults to $REELMARK_PATH, then the XDG data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    /// OMDb API key (overrides $REELMARK_OMDB_API_KEY and the config file)
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive browser
    Browse {
        /// Search for this term on start
        #[arg(long, short)]
        query: Option<String>,
    },

    /// Search titles and list them with details
    Search {
        #[arg(required = true, num_args = 1..)]
        term: Vec<String>,
    },

    /// Show the full record of one movie
    Show { id: String },

    /// List favorite movies
    Favorites,

    /// Toggle the favorite flag of a movie
    Favorite { id: String },

    /// Rate a movie from 1 to 5 stars
    Rate {
        id: String,

        #[arg(value_parser = clap::value_parser!(u8).range(1..=5))]
        stars: u8,
    },

    /// Create the data directory and config file; stores `--api-key` when given
    Init,
}
