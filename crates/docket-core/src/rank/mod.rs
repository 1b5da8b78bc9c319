//! Relevance ranking engine for posts
//!
//! Ranking is a sort, not a query: every post in the input collection
//! receives a score and is returned, merely reordered. Three factors
//! combine additively into the relevance score:
//!
//! - text similarity against title/summary/content/author/jurisdiction,
//!   weighted by `text_weight`
//! - case-insensitive tag Intersection-over-Union against the selected
//!   tag set, weighted by `tag_weight`
//! - a recency bonus decaying linearly over `recency_window_days`,
//!   applied to every post whether or not a query is present
//!
//! The same function backs every front end presenting the corpus, so
//! identical inputs always produce identical orderings.

pub mod tags;
pub mod text;

#[cfg(test)]
mod tests;

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::RankingConfig;
use crate::error::DocketError;
use crate::post::Post;

/// Which scoring paths a query activates.
///
/// Derived from the query content rather than supplied independently;
/// an externally supplied mode is only a hint and never overrides the
/// derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// No text and no tags: recency-only ordering
    All,
    /// Tags only
    Tag,
    /// Text only
    Keyword,
    /// Text and tags
    Combined,
}

impl FromStr for SearchMode {
    type Err = DocketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(SearchMode::All),
            "tag" => Ok(SearchMode::Tag),
            "keyword" => Ok(SearchMode::Keyword),
            "combined" => Ok(SearchMode::Combined),
            other => Err(DocketError::UnknownMode(other.to_string())),
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchMode::All => write!(f, "all"),
            SearchMode::Tag => write!(f, "tag"),
            SearchMode::Keyword => write!(f, "keyword"),
            SearchMode::Combined => write!(f, "combined"),
        }
    }
}

/// A free-text query and/or a set of selected tags
#[derive(Debug, Clone, Default)]
pub struct QuerySpec {
    text: Option<String>,
    tags: Vec<String>,
}

impl QuerySpec {
    /// Build a query; whitespace-only text is treated as absent
    pub fn new(text: Option<String>, tags: Vec<String>) -> Self {
        let text = text
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());
        QuerySpec { text, tags }
    }

    /// The free-text query, if present
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// The selected tag set
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Mode derived from which inputs are present
    pub fn mode(&self) -> SearchMode {
        match (self.text.is_some(), !self.tags.is_empty()) {
            (false, false) => SearchMode::All,
            (false, true) => SearchMode::Tag,
            (true, false) => SearchMode::Keyword,
            (true, true) => SearchMode::Combined,
        }
    }
}

/// A post with its derived relevance and the tags that matched the query
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredPost {
    #[serde(flatten)]
    pub post: Post,
    /// Subset of the post's tags matching the query's tag set, in the
    /// post's original casing. Display-only.
    pub matched_tags: Vec<String>,
    /// Combined relevance score; intermediate, not part of the wire shape
    #[serde(skip)]
    pub relevance: f64,
}

/// Echo of the query that produced a result set
#[derive(Debug, Clone, Serialize)]
pub struct SearchInfo {
    pub mode: SearchMode,
    pub query: String,
    pub tags: Vec<String>,
}

/// The result envelope shared by every call site
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults {
    pub posts: Vec<ScoredPost>,
    pub total: usize,
    pub search_info: SearchInfo,
}

/// Score every post against the query and return the full collection in
/// descending relevance order.
///
/// Total and pure: no post is dropped, inputs are not mutated, and equal
/// scores preserve input order (stable sort).
pub fn rank(
    posts: &[Post],
    query: &QuerySpec,
    config: &RankingConfig,
    now: DateTime<Utc>,
) -> Vec<ScoredPost> {
    let mut scored: Vec<ScoredPost> = posts
        .iter()
        .map(|post| score_post(post, query, config, now))
        .collect();

    // Vec::sort_by is stable, which is what keeps ties deterministic
    scored.sort_by(|a, b| {
        b.relevance
            .partial_cmp(&a.relevance)
            .unwrap_or(Ordering::Equal)
    });

    scored
}

/// Rank and wrap in the shared result envelope
pub fn search(
    posts: &[Post],
    query: &QuerySpec,
    config: &RankingConfig,
    now: DateTime<Utc>,
) -> SearchResults {
    let ranked = rank(posts, query, config, now);
    let total = ranked.len();

    SearchResults {
        posts: ranked,
        total,
        search_info: SearchInfo {
            mode: query.mode(),
            query: query.text().unwrap_or("").to_string(),
            tags: query.tags().to_vec(),
        },
    }
}

fn score_post(
    post: &Post,
    query: &QuerySpec,
    config: &RankingConfig,
    now: DateTime<Utc>,
) -> ScoredPost {
    let text_score = query
        .text()
        .map_or(0.0, |q| text::field_blend(q, post, config));

    let tag_score = if query.tags().is_empty() {
        0.0
    } else {
        tags::iou(&post.tags, query.tags())
    };

    let recency = recency_score(post, config, now);

    let relevance = text_score * config.text_weight + tag_score * config.tag_weight + recency;

    ScoredPost {
        post: post.clone(),
        matched_tags: tags::matched(&post.tags, query.tags()),
        relevance,
    }
}

/// Linear decay from `recency_max` at publication to zero at the window
/// edge. Posts outside the window, or with an unparseable date, get 0.
fn recency_score(post: &Post, config: &RankingConfig, now: DateTime<Utc>) -> f64 {
    let Some(published) = post.published_at() else {
        return 0.0;
    };

    let days = (now - published).num_seconds() as f64 / 86_400.0;
    if days <= config.recency_window_days {
        config.recency_max * (1.0 - days / config.recency_window_days)
    } else {
        0.0
    }
}
