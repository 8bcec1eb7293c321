//! Aggregation pipeline: filter, order, truncate and rank.
//!
//! Input is the concatenation of every adapter's output. The pipeline has no
//! failure mode; an empty input yields an empty ranking.

use crate::models::NewsRecord;
use itertools::Itertools;
use std::cmp::Ordering;
use tracing::{debug, instrument};

/// Maximum number of records kept after ranking.
pub const MAX_RESULTS: usize = 30;

/// Titles must be strictly longer than this many characters.
const MIN_TITLE_CHARS: usize = 10;

/// Lower-case title fragments that mark gated or promotional items.
const BLOCKED_TITLE_TERMS: &[&str] = &["subscription", "paywall"];

/// Whether a title is good enough to appear in the ranking.
pub fn is_publishable(title: &str) -> bool {
    if title.is_empty() || title.chars().count() <= MIN_TITLE_CHARS {
        return false;
    }
    let lower = title.to_lowercase();
    !BLOCKED_TITLE_TERMS.iter().any(|term| lower.contains(term))
}

/// Descending score, then descending publication time.
fn by_score_then_recency(a: &NewsRecord, b: &NewsRecord) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| b.published_at.cmp(&a.published_at))
}

/// Filter and order records without truncating or ranking them.
///
/// The sort is stable, so applying this twice gives the same order.
pub fn rank_order(records: Vec<NewsRecord>) -> Vec<NewsRecord> {
    records
        .into_iter()
        .filter(|r| is_publishable(&r.title))
        .sorted_by(by_score_then_recency)
        .collect()
}

/// Produce the final ranking: at most [`MAX_RESULTS`] records with ranks
/// `1..=n` in order.
#[instrument(level = "info", skip_all, fields(input = records.len()))]
pub fn aggregate(records: Vec<NewsRecord>) -> Vec<NewsRecord> {
    let total = records.len();
    let ordered = rank_order(records);
    let kept = ordered.len();

    let ranked: Vec<NewsRecord> = ordered
        .into_iter()
        .take(MAX_RESULTS)
        .zip(1u32..)
        .map(|(mut record, rank)| {
            record.rank = Some(rank);
            record
        })
        .collect();

    debug!(
        total,
        filtered_out = total - kept,
        ranked = ranked.len(),
        "Aggregated records"
    );
    ranked
}
