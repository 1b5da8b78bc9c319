use chrono::{DateTime, Duration, Utc};

use super::{rank, search, QuerySpec, SearchMode};
use crate::config::RankingConfig;
use crate::post::Post;

fn fixed_now() -> DateTime<Utc> {
    "2026-06-01T12:00:00Z".parse().unwrap()
}

fn post(id: &str, title: &str, tags: &[&str], date: &str) -> Post {
    Post {
        id: id.to_string(),
        title: title.to_string(),
        date: date.to_string(),
        author: "A. Counsel".to_string(),
        summary: format!("Summary of {}", title),
        content: format!("Content of {}", title),
        image: None,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        citation: None,
        jurisdiction: None,
        attachments: Vec::new(),
    }
}

fn days_ago(days: i64) -> String {
    (fixed_now() - Duration::days(days))
        .format("%Y-%m-%dT%H:%M:%S+00:00")
        .to_string()
}

fn query(text: Option<&str>, tags: &[&str]) -> QuerySpec {
    QuerySpec::new(
        text.map(str::to_string),
        tags.iter().map(|t| t.to_string()).collect(),
    )
}

#[test]
fn test_totality() {
    let posts = vec![
        post("a", "Alpha", &["X"], &days_ago(10)),
        post("b", "Beta", &[], "garbage-date"),
        post("c", "Gamma", &["Y"], &days_ago(400)),
    ];

    for q in [
        query(None, &[]),
        query(Some("alpha"), &[]),
        query(None, &["X"]),
        query(Some("alpha"), &["X", "Z"]),
    ] {
        let ranked = rank(&posts, &q, &RankingConfig::default(), fixed_now());
        assert_eq!(ranked.len(), posts.len());
    }
}

#[test]
fn test_empty_collection() {
    let ranked = rank(&[], &query(Some("anything"), &["X"]), &RankingConfig::default(), fixed_now());
    assert!(ranked.is_empty());
}

#[test]
fn test_idempotence() {
    let posts = vec![
        post("a", "Data Privacy Act", &["Privacy Law"], &days_ago(30)),
        post("b", "Antitrust Brief", &["Antitrust"], &days_ago(5)),
        post("c", "Old Opinion", &[], &days_ago(500)),
    ];
    let q = query(Some("privacy"), &["Privacy Law"]);
    let config = RankingConfig::default();

    let first = rank(&posts, &q, &config, fixed_now());
    let reordered: Vec<Post> = first.iter().map(|sp| sp.post.clone()).collect();
    let second = rank(&reordered, &q, &config, fixed_now());

    let ids_first: Vec<&str> = first.iter().map(|sp| sp.post.id.as_str()).collect();
    let ids_second: Vec<&str> = second.iter().map(|sp| sp.post.id.as_str()).collect();
    assert_eq!(ids_first, ids_second);
}

#[test]
fn test_pure_recency_ordering() {
    let posts = vec![
        post("oldest", "Oldest", &[], &days_ago(60)),
        post("newest", "Newest", &[], &days_ago(1)),
        post("middle", "Middle", &[], &days_ago(30)),
    ];

    let ranked = rank(&posts, &query(None, &[]), &RankingConfig::default(), fixed_now());
    let ids: Vec<&str> = ranked.iter().map(|sp| sp.post.id.as_str()).collect();
    assert_eq!(ids, vec!["newest", "middle", "oldest"]);
}

#[test]
fn test_stale_posts_preserve_input_order() {
    // Both outside the 90-day window, both score exactly zero
    let posts = vec![
        post("first", "First", &[], &days_ago(200)),
        post("second", "Second", &[], &days_ago(100)),
    ];

    let ranked = rank(&posts, &query(None, &[]), &RankingConfig::default(), fixed_now());
    assert_eq!(ranked[0].post.id, "first");
    assert_eq!(ranked[1].post.id, "second");
    assert_eq!(ranked[0].relevance, 0.0);
    assert_eq!(ranked[1].relevance, 0.0);
}

#[test]
fn test_tag_dominance_over_recency() {
    // A perfect tag match on a stale post beats a fresh post with no
    // match: IoU 1.0 x 70 vastly exceeds the recency ceiling of 5.
    let posts = vec![
        post("fresh", "Fresh", &[], &days_ago(0)),
        post("stale", "Stale", &["Privacy Law"], &days_ago(365)),
    ];

    let ranked = rank(&posts, &query(None, &["Privacy Law"]), &RankingConfig::default(), fixed_now());
    assert_eq!(ranked[0].post.id, "stale");
    assert!(ranked[0].relevance > 65.0);
    assert!(ranked[1].relevance <= 5.0);
}

#[test]
fn test_title_outweighs_content() {
    let mut in_title = post("in-title", "Data Privacy Act", &[], "garbage");
    in_title.content = "Unrelated body".to_string();
    in_title.summary = "Unrelated".to_string();

    let mut in_content = post("in-content", "Unrelated Title", &[], "garbage");
    in_content.content = "privacy considerations".to_string();
    in_content.summary = "Unrelated".to_string();

    let ranked = rank(
        &[in_content, in_title],
        &query(Some("privacy"), &[]),
        &RankingConfig::default(),
        fixed_now(),
    );
    assert_eq!(ranked[0].post.id, "in-title");
    assert!(ranked[0].relevance > ranked[1].relevance);
}

#[test]
fn test_iou_boundary() {
    let posts = vec![post("p", "P", &["X"], "garbage")];
    let ranked = rank(&posts, &query(None, &["X", "Y"]), &RankingConfig::default(), fixed_now());
    // tagScore 0.5 x weight 70, no text, no recency
    assert!((ranked[0].relevance - 35.0).abs() < 1e-9);
}

#[test]
fn test_case_insensitive_tag_match() {
    let posts = vec![post("p", "P", &["Privacy Law"], "garbage")];
    let ranked = rank(&posts, &query(None, &["privacy law"]), &RankingConfig::default(), fixed_now());
    assert!((ranked[0].relevance - 70.0).abs() < 1e-9);
    assert_eq!(ranked[0].matched_tags, vec!["Privacy Law"]);
}

#[test]
fn test_unparseable_date_zero_recency() {
    let posts = vec![
        post("dated", "Dated", &[], &days_ago(10)),
        post("undated", "Undated", &[], "not a date"),
    ];
    let ranked = rank(&posts, &query(None, &[]), &RankingConfig::default(), fixed_now());
    assert_eq!(ranked[0].post.id, "dated");
    assert_eq!(ranked[1].relevance, 0.0);
}

#[test]
fn test_recency_linear_decay() {
    let config = RankingConfig::default();
    let posts = vec![post("p", "P", &[], &days_ago(45))];
    let ranked = rank(&posts, &query(None, &[]), &config, fixed_now());
    // Halfway through the window earns half the maximum bonus
    assert!((ranked[0].relevance - 2.5).abs() < 1e-6);
}

#[test]
fn test_whitespace_query_is_absent() {
    let q = query(Some("   "), &[]);
    assert!(q.text().is_none());
    assert_eq!(q.mode(), SearchMode::All);
}

#[test]
fn test_mode_derivation() {
    assert_eq!(query(None, &[]).mode(), SearchMode::All);
    assert_eq!(query(None, &["X"]).mode(), SearchMode::Tag);
    assert_eq!(query(Some("q"), &[]).mode(), SearchMode::Keyword);
    assert_eq!(query(Some("q"), &["X"]).mode(), SearchMode::Combined);
}

#[test]
fn test_weights_are_configurable() {
    // With the tag weight zeroed, recency decides instead
    let config = RankingConfig {
        tag_weight: 0.0,
        ..RankingConfig::default()
    };
    let posts = vec![
        post("fresh", "Fresh", &[], &days_ago(0)),
        post("stale", "Stale", &["Privacy Law"], &days_ago(365)),
    ];
    let ranked = rank(&posts, &query(None, &["Privacy Law"]), &config, fixed_now());
    assert_eq!(ranked[0].post.id, "fresh");
}

#[test]
fn test_search_envelope() {
    let posts = vec![
        post("a", "Alpha", &["X"], &days_ago(10)),
        post("b", "Beta", &[], &days_ago(20)),
    ];
    let results = search(&posts, &query(Some("alpha"), &["X"]), &RankingConfig::default(), fixed_now());

    assert_eq!(results.total, 2);
    assert_eq!(results.posts.len(), 2);
    assert_eq!(results.search_info.mode, SearchMode::Combined);
    assert_eq!(results.search_info.query, "alpha");
    assert_eq!(results.search_info.tags, vec!["X"]);
}

#[test]
fn test_envelope_serialization_shape() {
    let posts = vec![post("a", "Alpha", &["X"], &days_ago(10))];
    let results = search(&posts, &query(None, &["x"]), &RankingConfig::default(), fixed_now());
    let json = serde_json::to_value(&results).unwrap();

    assert_eq!(json["total"], 1);
    assert_eq!(json["searchInfo"]["mode"], "tag");
    assert_eq!(json["posts"][0]["matchedTags"][0], "X");
    // Raw scores stay internal
    assert!(json["posts"][0].get("relevance").is_none());
}

#[test]
fn test_inputs_not_mutated() {
    let posts = vec![
        post("b", "Beta", &[], &days_ago(20)),
        post("a", "Alpha", &["X"], &days_ago(10)),
    ];
    let snapshot = posts.clone();
    let _ = rank(&posts, &query(Some("alpha"), &["X"]), &RankingConfig::default(), fixed_now());
    assert_eq!(posts, snapshot);
}
