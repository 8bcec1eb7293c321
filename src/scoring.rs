//! Scoring rules for collected records.
//!
//! Two policies exist and are picked by the adapter that builds the record:
//!
//! - **Keyword policy** ([`relevance_score`]): article and feed sources count
//!   how many topical keywords appear in the title and content.
//! - **Engagement policy** ([`engagement_score`]): discussion sources weigh
//!   upvotes and comments.
//!
//! The two scales are not comparable but share one sort key downstream.

/// Topical keywords matched case-insensitively as substrings.
///
/// English and Spanish variants are both listed so that feeds in either
/// language score the same way.
pub const KEYWORDS: &[&str] = &[
    "ai",
    "artificial intelligence",
    "machine learning",
    "deep learning",
    "neural network",
    "llm",
    "gpt",
    "openai",
    "chatgpt",
    "inteligencia artificial",
    "aprendizaje automático",
    "red neuronal",
    "modelo de lenguaje",
];

/// Count the distinct [`KEYWORDS`] found in `title` and `content`.
///
/// Matching is a plain substring test on the lower-cased concatenation, so
/// short keywords such as `"ai"` also match inside longer words. The result
/// is always in `0..=KEYWORDS.len()`.
pub fn relevance_score(title: &str, content: &str) -> u32 {
    let text = format!("{title} {content}").to_lowercase();
    KEYWORDS.iter().filter(|kw| text.contains(*kw)).count() as u32
}

/// Engagement score for discussion posts: `upvotes + 0.5 * comments`.
pub fn engagement_score(upvotes: u64, comments: u64) -> f64 {
    upvotes as f64 + comments as f64 * 0.5
}
