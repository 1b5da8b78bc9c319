//! Word-level text similarity
//!
//! The similarity primitive is deliberately loose: query and target are
//! lowercased and split on whitespace, and a query word matches when any
//! target word contains it or is contained by it. The score is the
//! fraction of query words with at least one match.

use crate::config::RankingConfig;
use crate::post::Post;

/// Fraction of query words matched in `text` (0.0 to 1.0)
pub fn similarity(query: &str, text: &str) -> f64 {
    if query.is_empty() || text.is_empty() {
        return 0.0;
    }

    let query_words: Vec<String> = query
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect();
    if query_words.is_empty() {
        return 0.0;
    }

    let text_words: Vec<String> = text
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect();

    let matched = query_words
        .iter()
        .filter(|qw| {
            text_words
                .iter()
                .any(|tw| tw.contains(qw.as_str()) || qw.contains(tw.as_str()))
        })
        .count();

    matched as f64 / query_words.len() as f64
}

/// Weighted blend of per-field similarities, capped at 1.0.
///
/// The divisor is `text_normalizer`, NOT the number of populated fields:
/// a post without a jurisdiction is under-normalized relative to one
/// with. This matches the deployed rankings and must not be "fixed"
/// without re-ranking every existing corpus.
pub fn field_blend(query: &str, post: &Post, config: &RankingConfig) -> f64 {
    let mut sum = similarity(query, &post.title) * config.title_boost
        + similarity(query, &post.summary) * config.summary_boost
        + similarity(query, &post.content) * config.content_boost
        + similarity(query, &post.author) * config.author_boost;

    if let Some(jurisdiction) = &post.jurisdiction {
        sum += similarity(query, jurisdiction) * config.jurisdiction_boost;
    }

    (sum / config.text_normalizer).min(1.0)
}
