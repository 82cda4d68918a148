//! # Article Scraper
//!
//! Fetches one news-article web page and extracts four fields (title,
//! author, publication date, body text) using generic HTML heuristics, then
//! prints them with fixed labels or as JSON.
//!
//! ## Usage
//!
//! ```sh
//! article_scraper https://example.com/story
//! ```
//!
//! With no URL argument the program prompts for one on stdin.
//!
//! ## Architecture
//!
//! One pass, no state: the URL goes to [`extractor::extract`], which fetches
//! the page and applies the four heuristics, and the resulting record (or
//! fetch failure) is rendered by [`output`] and written through the
//! [`console::Console`] seam. A missing title/author/date/paragraph is never
//! an error; only a failed fetch is.

use clap::Parser;
use std::error::Error;
use std::time::Duration;
use tracing::{debug, error, info};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

mod cli;
mod console;
mod extractor;
mod models;
mod output;

use cli::Cli;
use console::{Console, StdConsole};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    let mut console = StdConsole;
    run(args, &mut console).await
}

/// Drive one prompt-fetch-print cycle against the given console.
///
/// Both outcomes end with a normal exit: a fetch failure is reported on the
/// console (error line plus an `N/A`-filled details block, or `{"error"}` in
/// JSON mode), not surfaced as a process error.
async fn run(args: Cli, console: &mut impl Console) -> Result<(), Box<dyn Error>> {
    let url = match args.url {
        Some(url) => url,
        None => console.read_line("Enter the news article URL: ")?,
    };

    let client = extractor::http_client(args.timeout.map(Duration::from_secs))?;

    match extractor::extract(&client, &url).await {
        Ok(record) => {
            info!(title = %record.title, bytes = record.content.len(), "Article extracted");
            if args.json {
                console.write_line(&output::render_json(&record)?)?;
            } else {
                console.write_line("")?;
                console.write_line(&output::render_text(&record))?;
            }
        }
        Err(fetch_error) => {
            error!(error = %fetch_error, %url, "Article extraction failed");
            if args.json {
                console.write_line(&output::error_json(&fetch_error)?)?;
            } else {
                console.write_line(&fetch_error.to_string())?;
                console.write_line("")?;
                console.write_line(&output::render_missing())?;
            }
        }
    }

    Ok(())
}
