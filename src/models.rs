//! Data models for collected news records.
//!
//! Every source adapter produces [`NewsRecord`]s with the same fixed schema.
//! Source-specific extras (`upvotes`, `commentCount`, `image`) are explicit
//! optional fields and are left out of the JSON output when absent.
//!
//! Field names are serialized in camelCase to keep the output artifact
//! compatible with consumers of earlier result files.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Label assigned to a record by the kind of adapter that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum Category {
    /// Articles from the news aggregation API.
    #[serde(rename = "IA")]
    Ai,
    /// Posts from discussion boards.
    #[serde(rename = "IA Comunidad")]
    AiCommunity,
    /// Entries from syndication feeds.
    #[serde(rename = "IA Noticias")]
    AiNews,
}

/// A single normalized news item.
///
/// `score` is always non-negative. Its unit depends on the adapter: a
/// keyword count for articles and feeds, an engagement sum for discussions.
///
/// `rank` stays `None` until [`crate::pipeline::aggregate`] assigns it.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsRecord {
    /// Headline. Empty when the source omitted it.
    pub title: String,
    /// Body, description or placeholder text.
    pub content: String,
    /// Link to the item.
    pub url: String,
    /// Human-readable origin name.
    pub source: String,
    /// Publication time, or collection time when the source omitted it.
    pub published_at: DateTime<Utc>,
    pub category: Category,
    pub score: f64,
    /// Lead image, when the source provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Discussion sources only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upvotes: Option<u64>,
    /// Discussion sources only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment_count: Option<u64>,
    /// 1-based position in the final ranking.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<u32>,
}

impl NewsRecord {
    /// Build an unranked record with no source-specific extras.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        url: impl Into<String>,
        source: impl Into<String>,
        published_at: DateTime<Utc>,
        category: Category,
        score: f64,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            url: url.into(),
            source: source.into(),
            published_at,
            category,
            score: score.max(0.0),
            image: None,
            upvotes: None,
            comment_count: None,
            rank: None,
        }
    }

    /// Attach discussion engagement counters.
    pub fn with_engagement(mut self, upvotes: u64, comment_count: u64) -> Self {
        self.upvotes = Some(upvotes);
        self.comment_count = Some(comment_count);
        self
    }

    /// Attach a lead image URL, ignoring empty strings.
    pub fn with_image(mut self, image: Option<String>) -> Self {
        self.image = image.filter(|s| !s.is_empty());
        self
    }
}
