//! Data models for extracted articles and fetch failures.
//!
//! This module defines the two possible outcomes of an extraction:
//! - [`ArticleRecord`]: the four extracted fields, always fully populated
//!   (sentinel values stand in when a heuristic finds nothing)
//! - [`FetchError`]: the single failure shape, produced only when the HTTP
//!   fetch itself fails
//!
//! The sentinel mapping lives here so the "absent element" rules are in one
//! place rather than scattered through the extraction code.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

/// Sentinel used when the document has no `<h1>` element.
pub const TITLE_NOT_FOUND: &str = "Title not found";
/// Sentinel used when the document has no `<meta name="author">` element.
pub const AUTHOR_NOT_FOUND: &str = "Author not found";
/// Sentinel used when the document has no `<meta property="article:published_time">` element.
pub const DATE_NOT_FOUND: &str = "Date not found";

/// The four fields extracted from a news article page.
///
/// Exactly one `ArticleRecord` or one [`FetchError`] is produced per
/// extraction. A record is never partially constructed: every field is
/// populated, with the sentinel constants above substituted when a heuristic
/// lookup misses. `content` uses the empty string as its "nothing found"
/// value instead of a sentinel.
///
/// # Fields
///
/// * `title` - Trimmed text of the first `<h1>`, or [`TITLE_NOT_FOUND`]
/// * `author` - Raw `content` attribute of the author meta tag, or [`AUTHOR_NOT_FOUND`]
/// * `publication_date` - Raw published-time attribute value as published
///   (not parsed or normalized), or [`DATE_NOT_FOUND`]
/// * `content` - Trimmed text of every `<p>` in document order, joined with
///   single newlines; empty when the page has no paragraphs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleRecord {
    /// The article title/headline.
    pub title: String,
    /// The author name as declared in page metadata.
    pub author: String,
    /// The publication date string as declared in page metadata.
    pub publication_date: String,
    /// The article body text, one paragraph per line.
    pub content: String,
}

/// A failed fetch, the only error the extractor produces.
///
/// Covers transport-level failures (DNS, connection refused, timeout) and
/// HTTP responses with client or server error statuses. Missing page
/// elements are never errors; they fall back to sentinels instead.
///
/// Serializes as `{"error": "..."}` for JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchError {
    /// Human-readable failure description, underlying cause included.
    pub error: String,
}

impl FetchError {
    /// Wrap an underlying transport/HTTP failure in the fixed description.
    pub fn new(cause: impl fmt::Display) -> Self {
        FetchError {
            error: format!("Failed to fetch article: {cause}"),
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl Error for FetchError {}
