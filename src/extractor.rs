//! Generic news article extraction.
//!
//! This module fetches a single article page and derives an
//! [`ArticleRecord`] from its markup using generic heuristics rather than
//! site-specific selectors:
//!
//! | Field | Heuristic |
//! |-------|-----------|
//! | title | First `<h1>` in the document, text trimmed |
//! | author | `<meta name="author">`, `content` attribute verbatim |
//! | publication date | `<meta property="article:published_time">`, `content` attribute verbatim |
//! | content | Every `<p>` in document order, trimmed, newline-joined |
//!
//! The fetch is the only thing that can fail. A missing element is an
//! expected heuristic miss and falls back to the sentinel values defined in
//! [`crate::models`], so [`extract_fields`] is infallible and usable without
//! any network access.

use crate::models::{
    ArticleRecord, FetchError, AUTHOR_NOT_FOUND, DATE_NOT_FOUND, TITLE_NOT_FOUND,
};
use once_cell::sync::Lazy;
use reqwest::Client;
use scraper::{Html, Selector};
use std::time::Duration;
use tracing::{debug, error, info, instrument};
use url::Url;

static H1_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("h1").unwrap());
static AUTHOR_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"meta[name="author"]"#).unwrap());
static DATE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"meta[property="article:published_time"]"#).unwrap());
static PARAGRAPH_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("p").unwrap());

/// Build the HTTP client used for article fetches.
///
/// The transport's own default timeout behavior applies unless `timeout` is
/// given.
pub fn http_client(timeout: Option<Duration>) -> reqwest::Result<Client> {
    let mut builder = Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder.build()
}

/// Fetch an article page and extract its fields.
///
/// Performs one GET request against `url`. A transport failure or a
/// client/server error status aborts the call with a [`FetchError`]; this is
/// the only error path. Everything after the fetch is best-effort and never
/// fails.
///
/// # Arguments
///
/// * `client` - The HTTP client to fetch with (see [`http_client`])
/// * `url` - The article URL; syntax is not validated here, a malformed URL
///   simply fails at the fetch step
///
/// # Returns
///
/// The extracted [`ArticleRecord`], or a [`FetchError`] describing the
/// failed fetch.
#[instrument(level = "info", skip_all, fields(%url))]
pub async fn extract(client: &Client, url: &str) -> Result<ArticleRecord, FetchError> {
    if let Ok(parsed) = Url::parse(url) {
        if let Some(host) = parsed.host_str() {
            debug!(host, "Fetching article page");
        }
    }

    let response = client
        .get(url)
        .send()
        .await
        .and_then(|response| response.error_for_status())
        .map_err(|e| {
            error!(error = %e, "Article fetch failed");
            FetchError::new(e)
        })?;

    let body = response.text().await.map_err(|e| {
        error!(error = %e, "Failed to read article response body");
        FetchError::new(e)
    })?;
    info!(bytes = body.len(), "Fetched article page");

    Ok(extract_fields(&body))
}

/// Extract the four article fields from raw HTML.
///
/// Infallible: the parser tolerates malformed markup, and each heuristic
/// miss is replaced by its documented sentinel (empty string for content).
pub fn extract_fields(html: &str) -> ArticleRecord {
    let document = Html::parse_document(html);

    let title = document
        .select(&H1_SELECTOR)
        .next()
        .map(|h1| h1.text().collect::<String>().trim().to_string())
        .unwrap_or_else(|| TITLE_NOT_FOUND.to_string());

    // Attribute values are taken verbatim; only element text is trimmed.
    let author = document
        .select(&AUTHOR_SELECTOR)
        .next()
        .and_then(|meta| meta.value().attr("content"))
        .map(str::to_string)
        .unwrap_or_else(|| AUTHOR_NOT_FOUND.to_string());

    let publication_date = document
        .select(&DATE_SELECTOR)
        .next()
        .and_then(|meta| meta.value().attr("content"))
        .map(str::to_string)
        .unwrap_or_else(|| DATE_NOT_FOUND.to_string());

    let paragraphs: Vec<String> = document
        .select(&PARAGRAPH_SELECTOR)
        .map(|p| p.text().collect::<String>().trim().to_string())
        .collect();
    let content = paragraphs.join("\n");

    debug!(
        title = %title,
        paragraphs = paragraphs.len(),
        "Extracted article fields"
    );

    ArticleRecord {
        title,
        author,
        publication_date,
        content,
    }
}
