//! # Topic News Collector
//!
//! Collects short news items about one topic from several heterogeneous
//! sources, scores and ranks them, prints a report and saves the ranking as
//! JSON.
//!
//! ## Usage
//!
//! ```sh
//! NEWSAPI_KEY=... topic_news_collector --topic "machine learning" -o ./results
//! ```
//!
//! ## Architecture
//!
//! One run is a straight pipeline:
//! 1. **Configuration**: build the immutable source list for the topic
//! 2. **Collection**: contact each source in turn, pausing between calls;
//!    a failing source contributes nothing
//! 3. **Aggregation**: filter, sort, keep the top 30 and assign ranks
//! 4. **Output**: print the report and write `result_<date>_<time>.json`

use chrono::Local;
use clap::Parser;
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod config;
mod models;
mod outputs;
mod pipeline;
mod scoring;
mod sources;
mod utils;

use cli::Cli;
use outputs::{json, report};
use utils::{ensure_writable_dir, truncate_for_log};

/// Ask the operator for the search topic on stdin.
fn prompt_topic() -> io::Result<String> {
    print!("Enter the topic to search: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    if let Err(e) = dotenvy::dotenv() {
        debug!(error = %e, "No .env file loaded");
    }

    let start_time = std::time::Instant::now();
    info!("topic_news_collector starting up");

    let args = Cli::parse();
    debug!(?args.output_dir, ?args.sources, ?args.topic, "Parsed CLI arguments");

    // Early check: ensure output dir is writable
    if let Err(e) = ensure_writable_dir(&args.output_dir).await {
        error!(
            path = %args.output_dir,
            error = %e,
            "Output directory is not writable (fix perms or choose a different path)"
        );
        return Err(e);
    }

    if args.newsapi_key.is_none() {
        warn!("NEWSAPI_KEY is not set; the NewsAPI source will contribute no records");
    }

    let topic = match args.topic.clone() {
        Some(topic) => topic,
        None => prompt_topic()?,
    };
    println!("Searching news about '{}'...\n", topic);

    // ---- Configuration ----
    let sources = config::sources_for_run(
        &topic,
        args.newsapi_key.as_deref(),
        args.sources.as_deref(),
    )
    .await?;
    info!(count = sources.len(), topic = %truncate_for_log(&topic, 80), "Source list ready");

    // ---- Collection ----
    let client = sources::build_client(Duration::from_secs(args.timeout_secs))?;
    let collected =
        sources::collect_all(&client, &sources, Duration::from_millis(args.pause_ms)).await;

    // ---- Aggregation ----
    let ranked = pipeline::aggregate(collected);
    info!(count = ranked.len(), "Ranking complete");

    // ---- Output ----
    print!("{}", report::render_report(&ranked));

    let path = json::write_results(&ranked, &args.output_dir, &Local::now()).await?;
    println!("News saved to '{}'", path.display());

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    Ok(())
}
