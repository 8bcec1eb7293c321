//! Syndication feed adapter (RSS 2.0 search feeds such as Google News).
//!
//! Only the first `max_entries` items are kept. Descriptions are reduced from
//! HTML to plain text before scoring.

use crate::config::FeedSource;
use crate::models::{Category, NewsRecord};
use crate::scoring::relevance_score;
use crate::utils::html_to_text;
use chrono::{DateTime, Utc};
use quick_xml::de::from_str;
use reqwest::Client;
use serde::Deserialize;
use std::error::Error;
use tracing::{debug, info, instrument};
use urlencoding::encode;

#[derive(Debug, Deserialize)]
struct Rss {
    channel: Channel,
}

/// `item` elements may be interleaved with other channel elements; the
/// `overlapped-lists` feature of quick-xml collects all of them.
#[derive(Debug, Deserialize)]
struct Channel {
    #[serde(rename = "item", default)]
    items: Vec<Item>,
}

#[derive(Debug, Deserialize)]
struct Item {
    title: Option<String>,
    link: Option<String>,
    description: Option<String>,
    #[serde(rename = "pubDate")]
    pub_date: Option<String>,
}

/// Search URL for the feed's query, language and region.
pub fn feed_url(source: &FeedSource) -> String {
    format!(
        "{}?q={}&hl={}&gl={}",
        source.url,
        encode(&source.query),
        encode(&source.language),
        encode(&source.region)
    )
}

/// Parse an RSS document into keyword-scored records attributed to
/// `source_name`.
pub fn parse_feed(
    xml: &str,
    source_name: &str,
    max_entries: usize,
    now: DateTime<Utc>,
) -> Result<Vec<NewsRecord>, quick_xml::DeError> {
    let rss: Rss = from_str(xml)?;

    Ok(rss
        .channel
        .items
        .into_iter()
        .take(max_entries)
        .map(|it| {
            let title = it.title.map(|t| t.trim().to_string()).unwrap_or_default();
            let content = it.description.as_deref().map(html_to_text).unwrap_or_default();
            let published_at = it
                .pub_date
                .as_deref()
                .and_then(|ts| DateTime::parse_from_rfc2822(ts.trim()).ok())
                .map(|dt| dt.with_timezone(&Utc))
                .unwrap_or(now);
            let score = relevance_score(&title, &content) as f64;

            NewsRecord::new(
                title,
                content,
                it.link.unwrap_or_default(),
                source_name,
                published_at,
                Category::AiNews,
                score,
            )
        })
        .collect())
}

/// Fetch and parse the search feed.
#[instrument(level = "info", skip_all, fields(source = %source.name, query = %source.query))]
pub async fn fetch(client: &Client, source: &FeedSource) -> Result<Vec<NewsRecord>, Box<dyn Error>> {
    let url = feed_url(source);
    debug!(%url, "Requesting feed");

    let xml = client
        .get(&url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;

    let records = parse_feed(&xml, &source.name, source.max_entries, Utc::now())?;
    info!(count = records.len(), "Parsed feed entries");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const GOOGLE_NEWS_FIXTURE: &str = r##"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<rss xmlns:media="http://search.yahoo.com/mrss/" version="2.0">
  <channel>
    <generator>NFE/5.0</generator>
    <title>"inteligencia artificial" - Google Noticias</title>
    <link>https://news.google.com/search?q=inteligencia+artificial</link>
    <language>es-419</language>
    <description>Google Noticias</description>
    <item>
      <title>La inteligencia artificial llega a los hospitales - El País</title>
      <link>https://news.google.com/rss/articles/abc</link>
      <guid isPermaLink="false">abc</guid>
      <pubDate>Tue, 06 May 2025 14:30:00 GMT</pubDate>
      <description>&lt;a href="https://news.google.com/rss/articles/abc" target="_blank"&gt;Una red neuronal diagnostica&lt;/a&gt;&amp;nbsp;&amp;nbsp;&lt;font color="#6f6f6f"&gt;El País&lt;/font&gt;</description>
      <source url="https://elpais.com">El País</source>
    </item>
    <item>
      <title>Sin fecha</title>
      <link>https://news.google.com/rss/articles/def</link>
    </item>
  </channel>
</rss>"##;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 5, 7, 9, 0, 0).unwrap()
    }

    #[test]
    fn test_feed_url_encodes_query() {
        let source = FeedSource {
            name: "Google News".into(),
            url: "https://news.google.com/rss/search".into(),
            query: "inteligencia artificial".into(),
            language: "es-419".into(),
            region: "ES".into(),
            max_entries: 15,
        };
        assert_eq!(
            feed_url(&source),
            "https://news.google.com/rss/search?q=inteligencia%20artificial&hl=es-419&gl=ES"
        );
    }

    #[test]
    fn test_parse_google_news_feed() {
        let records = parse_feed(GOOGLE_NEWS_FIXTURE, "Google News - ES", 15, now()).unwrap();
        assert_eq!(records.len(), 2);

        let first = &records[0];
        assert_eq!(first.source, "Google News - ES");
        assert_eq!(first.category, Category::AiNews);
        assert_eq!(first.content, "Una red neuronal diagnostica El País");
        assert_eq!(
            first.published_at,
            Utc.with_ymd_and_hms(2025, 5, 6, 14, 30, 0).unwrap()
        );
        // inteligencia artificial, red neuronal
        assert_eq!(first.score, 2.0);

        let second = &records[1];
        assert_eq!(second.published_at, now());
        assert_eq!(second.content, "");
    }

    #[test]
    fn test_parse_feed_respects_max_entries() {
        let records = parse_feed(GOOGLE_NEWS_FIXTURE, "G", 1, now()).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_parse_feed_without_items() {
        let xml = r#"<rss version="2.0"><channel><title>empty</title></channel></rss>"#;
        assert!(parse_feed(xml, "G", 15, now()).unwrap().is_empty());
    }

    #[test]
    fn test_items_split_by_channel_elements_are_all_kept() {
        let xml = r#"<rss version="2.0"><channel>
            <item><title>First headline in the feed</title></item>
            <title>channel title</title>
            <item><title>Second headline in the feed</title></item>
        </channel></rss>"#;
        let records = parse_feed(xml, "G", 15, now()).unwrap();
        let titles: Vec<&str> = records.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["First headline in the feed", "Second headline in the feed"]
        );
    }

    #[test]
    fn test_item_with_only_link_gets_defaults() {
        let xml = r#"<rss version="2.0"><channel>
            <item><link>https://example.com/a</link></item>
        </channel></rss>"#;
        let records = parse_feed(xml, "G", 15, now()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "");
        assert_eq!(records[0].url, "https://example.com/a");
        assert_eq!(records[0].published_at, now());
    }

    #[test]
    fn test_parse_feed_rejects_non_rss() {
        assert!(parse_feed("<html><body>nope</body></html>", "G", 15, now()).is_err());
    }
}
