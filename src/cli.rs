//! Command-line interface definitions.
//!
//! All options can be provided via command-line flags; the API key and
//! output directory also fall back to environment variables (a `.env` file
//! is loaded at startup).

use clap::Parser;

/// Command-line arguments for a collection run.
///
/// # Examples
///
/// ```sh
/// # Prompt for the topic, write next to the current directory
/// topic_news_collector
///
/// # Non-interactive, custom output directory
/// topic_news_collector --topic "robótica" -o ./results
///
/// # Custom source list
/// topic_news_collector --topic "LLM" --sources ./sources.yaml
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Search topic. Prompted for on stdin when omitted
    #[arg(short, long)]
    pub topic: Option<String>,

    /// Output directory for the JSON results file
    #[arg(short, long, env = "NEWS_OUTPUT_DIR", default_value = ".")]
    pub output_dir: String,

    /// Optional YAML file replacing the built-in source list
    #[arg(short, long)]
    pub sources: Option<String>,

    /// NewsAPI key
    #[arg(long, env = "NEWSAPI_KEY", hide_env_values = true)]
    pub newsapi_key: Option<String>,

    /// Pause between source calls, in milliseconds
    #[arg(long, default_value_t = 1000)]
    pub pause_ms: u64,

    /// Per-request timeout, in seconds
    #[arg(long, default_value_t = 10)]
    pub timeout_secs: u64,
}
