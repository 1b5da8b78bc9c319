//! Tag matching: case-insensitive exact match over lowercased tag sets

use std::collections::BTreeSet;

fn lowered(tags: &[String]) -> BTreeSet<String> {
    tags.iter().map(|t| t.to_lowercase()).collect()
}

/// Intersection-over-Union between a post's tags and the selected tags.
///
/// Matching is exact at tag granularity (no partial matching) but
/// case-insensitive. Returns 0.0 when both sets are empty.
pub fn iou(post_tags: &[String], selected: &[String]) -> f64 {
    let post_set = lowered(post_tags);
    let query_set = lowered(selected);

    let union = post_set.union(&query_set).count();
    if union == 0 {
        return 0.0;
    }

    let intersection = post_set.intersection(&query_set).count();
    intersection as f64 / union as f64
}

/// The post's tags that appear in the selected set, in the post's
/// original casing. Display-only; does not feed the score.
pub fn matched(post_tags: &[String], selected: &[String]) -> Vec<String> {
    if selected.is_empty() {
        return Vec::new();
    }

    let query_set = lowered(selected);
    post_tags
        .iter()
        .filter(|t| query_set.contains(&t.to_lowercase()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strs(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_iou_identical_sets() {
        let tags = strs(&["Privacy Law"]);
        assert_eq!(iou(&tags, &tags), 1.0);
    }

    #[test]
    fn test_iou_partial_overlap() {
        // intersection 1, union 2
        assert_eq!(iou(&strs(&["X"]), &strs(&["X", "Y"])), 0.5);
    }

    #[test]
    fn test_iou_case_insensitive() {
        assert_eq!(iou(&strs(&["Privacy Law"]), &strs(&["privacy law"])), 1.0);
    }

    #[test]
    fn test_iou_empty_sets() {
        assert_eq!(iou(&[], &[]), 0.0);
        assert_eq!(iou(&strs(&["X"]), &[]), 0.0);
    }

    #[test]
    fn test_matched_preserves_post_casing() {
        let matched = matched(&strs(&["Privacy Law", "Antitrust"]), &strs(&["privacy law"]));
        assert_eq!(matched, strs(&["Privacy Law"]));
    }

    #[test]
    fn test_matched_empty_selection() {
        assert!(matched(&strs(&["Privacy Law"]), &[]).is_empty());
    }
}
