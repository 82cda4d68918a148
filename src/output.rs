//! Rendering of extraction results for the CLI.
//!
//! Rendering is kept separate from printing: these functions only build
//! strings, and the caller decides where they go. Two formats are supported:
//!
//! - a labeled text block (`--- Article Details ---` / `--- Content ---`)
//! - JSON via serde, for piping into other tools

use crate::models::{ArticleRecord, FetchError};

/// Placeholder printed for fields that are unavailable on the error path.
const FIELD_UNAVAILABLE: &str = "N/A";

/// Render a record as the labeled text block.
pub fn render_text(record: &ArticleRecord) -> String {
    render_block(
        &record.title,
        &record.author,
        &record.publication_date,
        &record.content,
    )
}

/// Render the text block for a failed fetch: every field falls back to
/// `N/A` since no article fields exist.
pub fn render_missing() -> String {
    render_block(
        FIELD_UNAVAILABLE,
        FIELD_UNAVAILABLE,
        FIELD_UNAVAILABLE,
        FIELD_UNAVAILABLE,
    )
}

fn render_block(title: &str, author: &str, publication_date: &str, content: &str) -> String {
    format!(
        "--- Article Details ---\n\
         Title: {title}\n\
         Author: {author}\n\
         Publication Date: {publication_date}\n\
         \n\
         --- Content ---\n\
         {content}"
    )
}

/// Render a record as pretty-printed JSON.
pub fn render_json(record: &ArticleRecord) -> serde_json::Result<String> {
    serde_json::to_string_pretty(record)
}

/// Render a fetch failure as pretty-printed JSON (`{"error": "..."}`).
pub fn error_json(error: &FetchError) -> serde_json::Result<String> {
    serde_json::to_string_pretty(error)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> ArticleRecord {
        ArticleRecord {
            title: "Test Title".to_string(),
            author: "Jane Doe".to_string(),
            publication_date: "2024-01-01".to_string(),
            content: "Para one.\nPara two.".to_string(),
        }
    }

    #[test]
    fn test_render_text_labels() {
        let text = render_text(&sample_record());
        assert_eq!(
            text,
            "--- Article Details ---\n\
             Title: Test Title\n\
             Author: Jane Doe\n\
             Publication Date: 2024-01-01\n\
             \n\
             --- Content ---\n\
             Para one.\nPara two."
        );
    }

    #[test]
    fn test_render_text_empty_content() {
        let mut record = sample_record();
        record.content = String::new();
        let text = render_text(&record);
        assert!(text.ends_with("--- Content ---\n"));
    }

    #[test]
    fn test_render_missing_uses_na_everywhere() {
        let text = render_missing();
        assert!(text.contains("Title: N/A"));
        assert!(text.contains("Author: N/A"));
        assert!(text.contains("Publication Date: N/A"));
        assert!(text.ends_with("--- Content ---\nN/A"));
    }

    #[test]
    fn test_render_json_round_trips() {
        let json = render_json(&sample_record()).unwrap();
        let back: ArticleRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sample_record());
    }

    #[test]
    fn test_error_json_shape() {
        let err = FetchError::new("boom");
        let json = error_json(&err).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["error"], "Failed to fetch article: boom");
    }
}
