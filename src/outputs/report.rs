//! Console report for a finished ranking.

use crate::models::NewsRecord;
use crate::utils::preview;
use chrono::Local;
use std::fmt::Write;

/// Content previews are cut to this many characters.
pub const PREVIEW_CHARS: usize = 150;

const RULE_WIDTH: usize = 80;

/// Render the ranking as plain text for the operator.
///
/// Timestamps are shown in local time as `DD/MM/YYYY HH:MM`.
pub fn render_report(records: &[NewsRecord]) -> String {
    let heavy = "=".repeat(RULE_WIDTH);
    let light = "-".repeat(RULE_WIDTH);
    let mut out = String::new();

    writeln!(out, "{heavy}").unwrap();
    writeln!(out, "NEWS SUMMARY").unwrap();
    writeln!(out, "{heavy}").unwrap();

    for (i, record) in records.iter().enumerate() {
        let position = record.rank.unwrap_or(i as u32 + 1);
        writeln!(out, "\n{}. {}", position, record.title).unwrap();
        writeln!(
            out,
            "   Date: {}",
            record.published_at.with_timezone(&Local).format("%d/%m/%Y %H:%M")
        )
        .unwrap();
        writeln!(out, "   Source: {}", record.source).unwrap();
        writeln!(out, "   Score: {:.1}", record.score).unwrap();
        writeln!(out, "   Link: {}", record.url).unwrap();
        writeln!(out, "   Content: {}", preview(&record.content, PREVIEW_CHARS)).unwrap();
        writeln!(out, "{light}").unwrap();
    }

    writeln!(out, "\nTotal news found: {}", records.len()).unwrap();
    writeln!(out, "Copy the links to review and publish manually").unwrap();
    writeln!(out, "{heavy}").unwrap();
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use chrono::{TimeZone, Utc};

    fn ranked(title: &str, content: &str, score: f64, rank: u32) -> NewsRecord {
        let mut r = NewsRecord::new(
            title,
            content,
            "https://example.com/story",
            "Example Source",
            Utc.with_ymd_and_hms(2025, 5, 6, 14, 30, 0).unwrap(),
            Category::Ai,
            score,
        );
        r.rank = Some(rank);
        r
    }

    #[test]
    fn test_report_lists_record_fields() {
        let report = render_report(&[ranked("First headline of the day", "Body", 136.5, 1)]);
        let local = Utc
            .with_ymd_and_hms(2025, 5, 6, 14, 30, 0)
            .unwrap()
            .with_timezone(&Local)
            .format("%d/%m/%Y %H:%M")
            .to_string();

        assert!(report.contains("1. First headline of the day"));
        assert!(report.contains(&format!("Date: {local}")));
        assert!(report.contains("Source: Example Source"));
        assert!(report.contains("Score: 136.5"));
        assert!(report.contains("Link: https://example.com/story"));
        assert!(report.contains("Content: Body"));
        assert!(report.contains("Total news found: 1"));
    }

    #[test]
    fn test_score_has_one_decimal() {
        let report = render_report(&[ranked("Keyword scored headline", "", 3.0, 1)]);
        assert!(report.contains("Score: 3.0"));
    }

    #[test]
    fn test_long_content_is_previewed() {
        let long = "z".repeat(400);
        let report = render_report(&[ranked("Headline with long body", &long, 1.0, 1)]);
        assert!(report.contains(&format!("Content: {}...", "z".repeat(PREVIEW_CHARS))));
        assert!(!report.contains(&"z".repeat(PREVIEW_CHARS + 1)));
    }

    #[test]
    fn test_empty_report() {
        let report = render_report(&[]);
        assert!(report.contains("Total news found: 0"));
    }
}
