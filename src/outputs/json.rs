//! JSON artifact for a single run.
//!
//! One file per invocation, named after the local date and time to the
//! minute:
//! ```text
//! output_dir/
//! └── result_06_05_2025_09_15.json
//! ```
//!
//! The file holds a pretty-printed array of ranked records. Non-ASCII text is
//! written as-is (UTF-8), never escaped.

use crate::models::NewsRecord;
use chrono::{DateTime, TimeZone};
use std::error::Error;
use std::fmt::Display;
use std::path::PathBuf;
use tokio::fs;
use tracing::{error, info, instrument};

/// File name for a run started at `now`: `result_DD_MM_YYYY_HH_MM.json`.
pub fn result_filename<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    format!("result_{}.json", now.format("%d_%m_%Y_%H_%M"))
}

/// Serialize the ranking to `{output_dir}/result_....json` and return the
/// written path. An empty ranking is written as `[]`.
#[instrument(level = "info", skip_all, fields(%output_dir, count = records.len()))]
pub async fn write_results<Tz: TimeZone>(
    records: &[NewsRecord],
    output_dir: &str,
    now: &DateTime<Tz>,
) -> Result<PathBuf, Box<dyn Error>>
where
    Tz::Offset: Display,
{
    let json = serde_json::to_string_pretty(records)?;
    let path = PathBuf::from(output_dir).join(result_filename(now));

    info!(path = %path.display(), "Writing JSON");
    if let Err(e) = fs::write(&path, json).await {
        error!(path = %path.display(), error = %e, "Failed to write JSON");
        return Err(e.into());
    }
    info!(path = %path.display(), "Wrote results file");

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, NewsRecord};
    use chrono::{Local, Utc};

    fn scratch_dir(tag: &str) -> String {
        let dir = std::env::temp_dir().join(format!(
            "topic_news_collector_{}_{}",
            tag,
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).unwrap();
        dir.to_string_lossy().to_string()
    }

    #[test]
    fn test_result_filename_pattern() {
        let at = Local.with_ymd_and_hms(2025, 5, 6, 9, 5, 59).unwrap();
        assert_eq!(result_filename(&at), "result_06_05_2025_09_05.json");
    }

    #[tokio::test]
    async fn test_write_empty_results() {
        let dir = scratch_dir("empty");
        let at = Local.with_ymd_and_hms(2025, 1, 2, 3, 4, 0).unwrap();
        let path = write_results(&[], &dir, &at).await.unwrap();

        assert!(path.ends_with("result_02_01_2025_03_04.json"));
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "[]");
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn test_write_preserves_non_ascii_and_indents() {
        let dir = scratch_dir("utf8");
        let mut record = NewsRecord::new(
            "Aprendizaje automático en América Latina",
            "Ñandú",
            "https://example.com",
            "Google News - IA Español",
            Utc::now(),
            Category::AiNews,
            2.0,
        );
        record.rank = Some(1);
        let at = Local.with_ymd_and_hms(2025, 5, 6, 18, 40, 0).unwrap();
        let path = write_results(&[record.clone()], &dir, &at).await.unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("Aprendizaje automático en América Latina"));
        assert!(written.contains("\n  {\n    \"title\""));
        let parsed: Vec<NewsRecord> = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed, vec![record]);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn test_write_into_missing_dir_fails() {
        let at = Local::now();
        let missing = "/nonexistent/definitely/not/here";
        assert!(write_results(&[], missing, &at).await.is_err());
    }
}
