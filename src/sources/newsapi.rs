//! News aggregation API adapter (NewsAPI `everything` endpoint).
//!
//! Requires an API key. A missing key fails this source only.

use crate::config::ApiQuerySource;
use crate::models::{Category, NewsRecord};
use crate::scoring::relevance_score;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use std::error::Error;
use tracing::{debug, info, instrument};

#[derive(Debug, Deserialize)]
struct NewsApiResponse {
    #[serde(default)]
    articles: Vec<Article>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Article {
    title: Option<String>,
    description: Option<String>,
    content: Option<String>,
    url: Option<String>,
    source: Option<ArticleSource>,
    url_to_image: Option<String>,
    published_at: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ArticleSource {
    name: Option<String>,
}

fn non_empty(s: Option<String>) -> Option<String> {
    s.filter(|v| !v.is_empty())
}

/// Parse a NewsAPI response body into keyword-scored records.
///
/// `now` stands in for articles without a usable `publishedAt`.
pub fn parse_articles(
    body: &str,
    now: DateTime<Utc>,
) -> Result<Vec<NewsRecord>, serde_json::Error> {
    let response: NewsApiResponse = serde_json::from_str(body)?;

    Ok(response
        .articles
        .into_iter()
        .map(|a| {
            let title = a.title.unwrap_or_default();
            let content = non_empty(a.description)
                .or_else(|| non_empty(a.content))
                .unwrap_or_default();
            let source = a
                .source
                .and_then(|s| s.name)
                .unwrap_or_else(|| "Unknown".to_string());
            let published_at = a
                .published_at
                .as_deref()
                .and_then(|ts| DateTime::parse_from_rfc3339(ts).ok())
                .map(|dt| dt.with_timezone(&Utc))
                .unwrap_or(now);
            let score = relevance_score(&title, &content) as f64;

            NewsRecord::new(
                title,
                content,
                a.url.unwrap_or_default(),
                source,
                published_at,
                Category::Ai,
                score,
            )
            .with_image(a.url_to_image)
        })
        .collect())
}

/// Query the API for the source's topic.
#[instrument(level = "info", skip_all, fields(source = %source.name, query = %source.query))]
pub async fn fetch(
    client: &Client,
    source: &ApiQuerySource,
) -> Result<Vec<NewsRecord>, Box<dyn Error>> {
    let api_key = source
        .api_key
        .as_deref()
        .filter(|k| !k.is_empty())
        .ok_or("missing NewsAPI key (set NEWSAPI_KEY)")?;
    let page_size = source.page_size.to_string();

    let body = client
        .get(&source.url)
        .query(&[
            ("q", source.query.as_str()),
            ("sortBy", source.sort_by.as_str()),
            ("language", source.language.as_str()),
            ("pageSize", page_size.as_str()),
            ("apiKey", api_key),
        ])
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;
    debug!(bytes = body.len(), "Received NewsAPI response");

    let records = parse_articles(&body, Utc::now())?;
    info!(count = records.len(), "Parsed NewsAPI articles");
    Ok(records)
}
