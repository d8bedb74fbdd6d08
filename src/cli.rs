//! Command-line interface definitions for Telex News.
//!
//! All options come from command-line flags; only `RUST_LOG` is read from
//! the environment, for log filtering.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use telex_news::DEFAULT_MAX_RESULTS;
use url::Url;

/// Check that `raw` parses as a URL, keeping the caller's exact spelling.
fn parse_article_url(raw: &str) -> Result<String, url::ParseError> {
    Url::parse(raw)?;
    Ok(raw.to_string())
}

/// Command-line arguments for the Telex News tool.
///
/// # Examples
///
/// ```sh
/// # Five newest archive entries matching a term
/// telex_news search "orbán viktor"
///
/// # Structured query, more results, pretty JSON into a file
/// telex_news --pretty -o out/search.json search --json '{"query": "árvíz"}' -n 20
///
/// # Article text
/// telex_news article https://telex.hu/belfold/2024/05/01/cikk
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Write JSON to this file instead of stdout
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Search the archive RSS feed
    Search {
        /// Search text; may embed query="..."
        query: String,

        /// Maximum number of results
        #[arg(short = 'n', long, default_value_t = DEFAULT_MAX_RESULTS)]
        max_results: usize,

        /// Interpret QUERY as a JSON value (objects use their "query" field)
        #[arg(long)]
        json: bool,
    },

    /// Fetch one article and extract its text
    Article {
        /// Article page URL
        #[arg(value_parser = parse_article_url)]
        url: String,
    },
}
