use std::path::PathBuf;

use clap::{ArgAction, Parser};

/// Live-filter a JSON record list the way a search box would.
#[derive(Debug, Parser)]
#[command(
    name = "sift",
    version,
    about = "Filter a JSON array of records by one field, ignoring case, accents and punctuation"
)]
pub struct Args {
    /// Path to a JSON file whose root is an array of records
    #[arg(short = 'i', long = "input")]
    pub input: PathBuf,

    /// Field to match on, as a dotted path (e.g. name, address.city, tags.0)
    #[arg(short = 'k', long = "key", default_value = "name")]
    pub key: String,

    /// Text shown when a query matches nothing
    #[arg(short = 'f', long = "fallback", default_value = "No results found")]
    pub fallback: String,

    /// Query to apply; repeat to simulate typing. Without it, each stdin line is a query
    #[arg(short = 'q', long = "query")]
    pub query: Vec<String>,

    /// Rescan the records on every read instead of caching the view
    #[arg(long = "eager")]
    pub eager: bool,

    /// Increase log verbosity (-v debug, -vv trace); SIFT_LOG overrides
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}
