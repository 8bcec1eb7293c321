//! Source adapters and the sequential collection loop.
//!
//! Each adapter turns one source's wire format into [`NewsRecord`]s and
//! scores them with the policy that fits its kind:
//!
//! | Source kind | Module | Wire format | Score |
//! |-------------|--------|-------------|-------|
//! | News aggregation API | [`newsapi`] | JSON | keyword count |
//! | Discussion board | [`reddit`] | JSON listing | upvotes + comments / 2 |
//! | Search feed | [`feed`] | RSS 2.0 | keyword count |
//!
//! # Common Patterns
//!
//! Each adapter module exports:
//! - a pure `parse_*` function from response body to records, applying field
//!   defaults (missing title is empty, missing date is "now")
//! - `fetch(client, source)`, which performs the request and returns an error
//!   on network failure, non-success status or malformed payload
//!
//! [`fetch_source`] is the fail-soft boundary: adapter errors are logged with
//! the source name and turned into an empty contribution, so one broken
//! source never affects the others.

pub mod feed;
pub mod newsapi;
pub mod reddit;

use crate::config::SourceConfig;
use crate::models::NewsRecord;
use futures::stream::{self, StreamExt};
use reqwest::Client;
use std::error::Error;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{error, info, instrument};

/// Build the HTTP client shared by every adapter in a run.
///
/// Requests exceeding `timeout` fail and count as a failed fetch for that
/// source.
pub fn build_client(timeout: Duration) -> Result<Client, Box<dyn Error>> {
    let client = Client::builder().timeout(timeout).build()?;
    Ok(client)
}

/// Fetch one source, absorbing any failure into an empty result.
#[instrument(level = "info", skip_all, fields(source = %source.name()))]
pub async fn fetch_source(client: &Client, source: &SourceConfig) -> Vec<NewsRecord> {
    let result = match source {
        SourceConfig::NewsApi(s) => newsapi::fetch(client, s).await,
        SourceConfig::Discussion(s) => reddit::fetch(client, s).await,
        SourceConfig::Feed(s) => feed::fetch(client, s).await,
    };

    match result {
        Ok(records) => records,
        Err(e) => {
            error!(source = %source.name(), error = %e, "Source fetch failed; contributing no records");
            println!("Error with {}: {}", source.name(), e);
            Vec::new()
        }
    }
}

/// Contact every source in order, pausing between calls, and concatenate
/// their records.
#[instrument(level = "info", skip_all, fields(sources = sources.len()))]
pub async fn collect_all(
    client: &Client,
    sources: &[SourceConfig],
    pause: Duration,
) -> Vec<NewsRecord> {
    let batches: Vec<Vec<NewsRecord>> = stream::iter(sources.iter().enumerate())
        .then(|(i, source)| async move {
            if i > 0 {
                sleep(pause).await;
            }
            println!("Connecting to: {}", source.name());
            let records = fetch_source(client, source).await;
            println!("Got {} items from {}\n", records.len(), source.name());
            info!(source = %source.name(), count = records.len(), "Collected source");
            records
        })
        .collect()
        .await;

    let records: Vec<NewsRecord> = batches.into_iter().flatten().collect();
    info!(count = records.len(), "Collected records from all sources");
    records
}
