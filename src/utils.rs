//! Utility functions for text cleanup, previews and file system checks.
//!
//! - Reducing feed descriptions from HTML fragments to plain text
//! - Character-safe truncation for report previews and log lines
//! - Output directory validation before any source is contacted

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::Html;
use std::error::Error;
use std::path::Path;
use tokio::fs;
use tracing::{info, instrument, warn};

const WRITE_CHECK_FILE: &str = ".topic_news_collector_write_check";

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Collapse runs of whitespace to single spaces and trim the ends.
pub fn collapse_whitespace(s: &str) -> String {
    WHITESPACE.replace_all(s.trim(), " ").into_owned()
}

/// Reduce an HTML fragment to its visible text.
///
/// Feed descriptions are frequently markup (`<a href=..>headline</a>&nbsp;...`).
/// Plain text passes through with only whitespace normalized.
pub fn html_to_text(fragment: &str) -> String {
    if !fragment.contains('<') && !fragment.contains('&') {
        return collapse_whitespace(fragment);
    }
    let parsed = Html::parse_fragment(fragment);
    let text = parsed.root_element().text().collect::<Vec<_>>().join(" ");
    collapse_whitespace(&text.replace('\u{a0}', " "))
}

/// Preview of at most `max` characters, with `...` appended when cut.
///
/// Counts characters rather than bytes so multi-byte text is never split.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(preview("short", 150), "short");
/// assert_eq!(preview("abcdef", 3), "abc...");
/// ```
pub fn preview(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &s[..cut]),
        None => s.to_string(),
    }
}

/// Truncate a string for logging purposes.
///
/// Long strings are truncated to `max` characters with an ellipsis and
/// byte count indicator appended.
pub fn truncate_for_log(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((cut, _)) => format!("{}…(+{} bytes)", &s[..cut], s.len() - cut),
        None => s.to_string(),
    }
}

/// Ensure the output directory exists and accepts new files.
///
/// Creates the directory when missing, then writes and removes an empty
/// marker file so permission problems surface before any source is
/// contacted.
#[instrument(level = "info", skip_all, fields(path = %path))]
pub async fn ensure_writable_dir(path: &str) -> Result<(), Box<dyn Error>> {
    fs::create_dir_all(path).await?;
    let marker = Path::new(path).join(WRITE_CHECK_FILE);
    fs::write(&marker, b"").await?;
    if let Err(e) = fs::remove_file(&marker).await {
        warn!(marker = %marker.display(), error = %e, "Could not remove write-check file");
    }
    info!("Output directory is writable");
    Ok(())
}
