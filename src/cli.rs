//! Command-line interface definitions.
//!
//! This module defines the CLI arguments using the `clap` crate. The URL is
//! an optional positional argument; when it is omitted the wrapper prompts
//! for it interactively.

use clap::Parser;

/// Command-line arguments for the article scraper.
///
/// # Examples
///
/// ```sh
/// # Prompt for the URL interactively
/// article_scraper
///
/// # Non-interactive, JSON output, 10 second timeout
/// article_scraper https://example.com/story --json --timeout 10
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Article URL to fetch; prompted for on stdin when omitted
    pub url: Option<String>,

    /// Print the extracted record as JSON instead of labeled text
    #[arg(long)]
    pub json: bool,

    /// Request timeout in seconds (transport default when omitted)
    #[arg(long, env = "ARTICLE_SCRAPER_TIMEOUT")]
    pub timeout: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_defaults() {
        let cli = Cli::parse_from(["article_scraper"]);
        assert_eq!(cli.url, None);
        assert!(!cli.json);
        assert_eq!(cli.timeout, None);
    }

    #[test]
    fn test_cli_parsing_positional_url() {
        let cli = Cli::parse_from(["article_scraper", "https://example.com/story"]);
        assert_eq!(cli.url.as_deref(), Some("https://example.com/story"));
    }

    #[test]
    fn test_cli_parsing_flags() {
        let cli = Cli::parse_from([
            "article_scraper",
            "https://example.com/story",
            "--json",
            "--timeout",
            "10",
        ]);
        assert!(cli.json);
        assert_eq!(cli.timeout, Some(10));
    }
}
