//! # Telex News
//!
//! Command-line front end for the `telex_news` library: searches the Telex
//! archive feed or extracts a single article, and prints the result as JSON.
//!
//! ## Usage
//!
//! ```sh
//! telex_news search "orbán viktor" -n 10
//! telex_news article https://telex.hu/belfold/2024/05/01/cikk
//! ```
//!
//! Logs go to stderr; set `RUST_LOG` to change verbosity.

use clap::Parser;
use std::error::Error;
use telex_news::{HttpFetcher, Query, fetch_article_content, output, search_articles};
use tracing::{debug, info, warn};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;

use cli::{Cli, Command};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    let fetcher = HttpFetcher::new();

    let json = match args.command {
        Command::Search {
            query,
            max_results,
            json,
        } => {
            let query = if json {
                Query::from(serde_json::from_str::<serde_json::Value>(&query)?)
            } else {
                Query::free_text(query)
            };

            let outcome = search_articles(&fetcher, &query, max_results).await?;
            if let Some(e) = outcome.failure() {
                warn!(error = %e, count = outcome.articles.len(), "Search ended early; returning partial results");
            }
            output::to_json(&outcome.articles, args.pretty)?
        }
        Command::Article { url } => {
            let article = fetch_article_content(&fetcher, &url).await;
            output::to_json(&article, args.pretty)?
        }
    };

    output::emit(&json, args.output.as_deref()).await?;

    let elapsed = start_time.elapsed();
    info!(?elapsed, "Execution complete");
    Ok(())
}
