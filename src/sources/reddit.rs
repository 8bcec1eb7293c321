//! Discussion board adapter (Reddit subreddit JSON listings).
//!
//! Posts are scored by engagement, not by keywords.

use crate::config::DiscussionSource;
use crate::models::{Category, NewsRecord};
use crate::scoring::engagement_score;
use chrono::{DateTime, Utc};
use reqwest::Client;
use reqwest::header::USER_AGENT;
use serde::Deserialize;
use std::error::Error;
use tracing::{debug, info, instrument};
use url::Url;

const USER_AGENT_VALUE: &str = "AINewsCollector/1.0";
const PERMALINK_BASE: &str = "https://reddit.com";

/// Content used for link posts that carry no self text.
pub const NO_CONTENT_PLACEHOLDER: &str = "See link for more details";

#[derive(Debug, Default, Deserialize)]
struct Listing {
    #[serde(default)]
    data: ListingData,
}

#[derive(Debug, Default, Deserialize)]
struct ListingData {
    #[serde(default)]
    children: Vec<Child>,
}

#[derive(Debug, Deserialize)]
struct Child {
    #[serde(default)]
    data: Post,
}

#[derive(Debug, Default, Deserialize)]
struct Post {
    title: Option<String>,
    selftext: Option<String>,
    permalink: Option<String>,
    subreddit: Option<String>,
    created_utc: Option<f64>,
    ups: Option<i64>,
    num_comments: Option<i64>,
}

fn listing_url(source: &DiscussionSource) -> Result<Url, url::ParseError> {
    Url::parse_with_params(
        &format!("https://www.reddit.com/r/{}/.json", source.subreddit),
        &[("limit", source.limit.to_string())],
    )
}

/// Parse a subreddit listing into engagement-scored records.
pub fn parse_listing(body: &str, now: DateTime<Utc>) -> Result<Vec<NewsRecord>, serde_json::Error> {
    let listing: Listing = serde_json::from_str(body)?;

    Ok(listing
        .data
        .children
        .into_iter()
        .map(|child| {
            let post = child.data;
            let upvotes = post.ups.unwrap_or(0).max(0) as u64;
            let comments = post.num_comments.unwrap_or(0).max(0) as u64;
            let content = post
                .selftext
                .filter(|t| !t.trim().is_empty())
                .unwrap_or_else(|| NO_CONTENT_PLACEHOLDER.to_string());
            let published_at = post
                .created_utc
                .and_then(|secs| DateTime::from_timestamp(secs as i64, 0))
                .unwrap_or(now);

            NewsRecord::new(
                post.title.unwrap_or_default(),
                content,
                format!("{}{}", PERMALINK_BASE, post.permalink.unwrap_or_default()),
                format!("Reddit - {}", post.subreddit.unwrap_or_default()),
                published_at,
                Category::AiCommunity,
                engagement_score(upvotes, comments),
            )
            .with_engagement(upvotes, comments)
        })
        .collect())
}

/// Fetch the subreddit's front listing.
#[instrument(level = "info", skip_all, fields(source = %source.name, subreddit = %source.subreddit))]
pub async fn fetch(
    client: &Client,
    source: &DiscussionSource,
) -> Result<Vec<NewsRecord>, Box<dyn Error>> {
    let url = listing_url(source)?;
    debug!(%url, "Requesting listing");

    let body = client
        .get(url)
        .header(USER_AGENT, USER_AGENT_VALUE)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;

    let records = parse_listing(&body, Utc::now())?;
    info!(count = records.len(), "Parsed discussion posts");
    Ok(records)
}
