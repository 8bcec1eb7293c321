//! Source configuration for a single collection run.
//!
//! Each source is a [`SourceConfig`] variant carrying only the fields its
//! adapter needs. The list for a run is built once from the user's topic and
//! never mutated afterwards; adapters receive each entry by reference.
//!
//! The built-in list can be replaced by a YAML file:
//!
//! ```yaml
//! - kind: news_api
//!   name: NewsAPI - AI
//!   url: https://newsapi.org/v2/everything
//!   page_size: 20
//! - kind: discussion
//!   name: Reddit r/artificial
//!   subreddit: artificial
//! - kind: feed
//!   name: Google News - ES
//!   url: https://news.google.com/rss/search
//!   language: es-419
//!   region: ES
//! ```
//!
//! Credentials are never read from this file.

use serde::{Deserialize, Serialize};
use std::error::Error;
use tracing::{info, instrument};

/// Query used by sources before a topic is applied.
pub const DEFAULT_QUERY: &str = "artificial intelligence AI machine learning";

/// A news aggregation API queried with a free-text search.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ApiQuerySource {
    pub name: String,
    pub url: String,
    #[serde(default = "default_query")]
    pub query: String,
    #[serde(default = "default_sort_by")]
    pub sort_by: String,
    #[serde(default = "default_api_language")]
    pub language: String,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    #[serde(skip)]
    pub api_key: Option<String>,
}

/// A discussion board listing. Does not take a search query.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DiscussionSource {
    pub name: String,
    pub subreddit: String,
    #[serde(default = "default_listing_limit")]
    pub limit: u32,
}

/// An RSS search feed.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FeedSource {
    pub name: String,
    pub url: String,
    #[serde(default = "default_query")]
    pub query: String,
    pub language: String,
    pub region: String,
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
}

fn default_query() -> String {
    DEFAULT_QUERY.to_string()
}

fn default_sort_by() -> String {
    "publishedAt".to_string()
}

fn default_api_language() -> String {
    "en".to_string()
}

fn default_page_size() -> u32 {
    20
}

fn default_listing_limit() -> u32 {
    15
}

fn default_max_entries() -> usize {
    15
}

/// One configured source, tagged by adapter kind.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SourceConfig {
    NewsApi(ApiQuerySource),
    Discussion(DiscussionSource),
    Feed(FeedSource),
}

impl SourceConfig {
    /// Human-readable name used in logs and console messages.
    pub fn name(&self) -> &str {
        match self {
            SourceConfig::NewsApi(s) => &s.name,
            SourceConfig::Discussion(s) => &s.name,
            SourceConfig::Feed(s) => &s.name,
        }
    }

    /// Return a copy searching for `topic`. Sources without a query are
    /// returned unchanged.
    pub fn with_topic(&self, topic: &str) -> Self {
        match self {
            SourceConfig::NewsApi(s) => SourceConfig::NewsApi(ApiQuerySource {
                query: topic.to_string(),
                ..s.clone()
            }),
            SourceConfig::Feed(s) => SourceConfig::Feed(FeedSource {
                query: topic.to_string(),
                ..s.clone()
            }),
            SourceConfig::Discussion(_) => self.clone(),
        }
    }

    /// Return a copy carrying the aggregation API credential.
    pub fn with_api_key(&self, api_key: Option<&str>) -> Self {
        match self {
            SourceConfig::NewsApi(s) => SourceConfig::NewsApi(ApiQuerySource {
                api_key: api_key.map(str::to_string),
                ..s.clone()
            }),
            _ => self.clone(),
        }
    }
}

/// The built-in source list.
pub fn default_sources() -> Vec<SourceConfig> {
    vec![
        SourceConfig::NewsApi(ApiQuerySource {
            name: "NewsAPI - IA General".to_string(),
            url: "https://newsapi.org/v2/everything".to_string(),
            query: default_query(),
            sort_by: default_sort_by(),
            language: default_api_language(),
            page_size: default_page_size(),
            api_key: None,
        }),
        SourceConfig::Discussion(DiscussionSource {
            name: "Reddit r/artificial".to_string(),
            subreddit: "artificial".to_string(),
            limit: 15,
        }),
        SourceConfig::Discussion(DiscussionSource {
            name: "Reddit r/MachineLearning".to_string(),
            subreddit: "MachineLearning".to_string(),
            limit: 15,
        }),
        SourceConfig::Feed(FeedSource {
            name: "Google News - IA Español".to_string(),
            url: "https://news.google.com/rss/search".to_string(),
            query: "inteligencia artificial".to_string(),
            language: "es-419".to_string(),
            region: "ES".to_string(),
            max_entries: 15,
        }),
    ]
}

/// Parse a YAML list of sources.
pub fn parse_sources(yaml: &str) -> Result<Vec<SourceConfig>, Box<dyn Error>> {
    let sources: Vec<SourceConfig> = serde_yaml::from_str(yaml)?;
    Ok(sources)
}

/// Build the immutable source list for one run.
///
/// Starts from `sources_file` when given, otherwise from
/// [`default_sources`], then applies the topic and the API credential. A
/// blank topic keeps each source's own query.
#[instrument(level = "info", skip(api_key))]
pub async fn sources_for_run(
    topic: &str,
    api_key: Option<&str>,
    sources_file: Option<&str>,
) -> Result<Vec<SourceConfig>, Box<dyn Error>> {
    let base = match sources_file {
        Some(path) => {
            let yaml = tokio::fs::read_to_string(path).await?;
            let sources = parse_sources(&yaml)?;
            info!(path, count = sources.len(), "Loaded sources file");
            sources
        }
        None => default_sources(),
    };

    let topic = topic.trim();
    Ok(base
        .iter()
        .map(|s| {
            let s = if topic.is_empty() { s.clone() } else { s.with_topic(topic) };
            s.with_api_key(api_key)
        })
        .collect())
}
