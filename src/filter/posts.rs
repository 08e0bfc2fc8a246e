//! Explore feed selection.

use std::collections::BTreeMap;

use crate::model::post::Post;

/// Positions in `posts` carrying `tag` (all posts for `None`), newest first.
///
/// Posts with equal timestamps keep their input order.
pub fn select_post_indices(posts: &[Post], tag: Option<&str>) -> Vec<usize> {
    let mut indices: Vec<usize> = posts
        .iter()
        .enumerate()
        .filter(|(_, p)| tag.is_none_or(|t| p.has_tag(t)))
        .map(|(i, _)| i)
        .collect();
    indices.sort_by(|&a, &b| posts[b].timestamp.cmp(&posts[a].timestamp));
    indices
}

/// Posts carrying `tag` (all posts for `None`), newest first.
pub fn select_posts<'a>(posts: &'a [Post], tag: Option<&str>) -> Vec<&'a Post> {
    select_post_indices(posts, tag)
        .into_iter()
        .map(|i| &posts[i])
        .collect()
}

/// Every tag in the feed (lowercased) with its post count, alphabetically.
pub fn tag_counts(posts: &[Post]) -> Vec<(String, usize)> {
    let mut map: BTreeMap<String, usize> = BTreeMap::new();
    for post in posts {
        for tag in &post.tags {
            *map.entry(tag.to_lowercase()).or_insert(0) += 1;
        }
    }
    map.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn post(id: u64, hour: u32, tags: &[&str]) -> Post {
        Post {
            id,
            author: 1,
            body: String::new(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            timestamp: Utc.with_ymd_and_hms(2026, 8, 1, hour, 0, 0).unwrap(),
            likes: 0,
        }
    }

    #[test]
    fn test_newest_first() {
        let posts = vec![post(1, 8, &[]), post(2, 12, &[]), post(3, 10, &[])];
        let ids: Vec<u64> = select_posts(&posts, None).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn test_tag_filter_case_insensitive() {
        let posts = vec![post(1, 8, &["Events"]), post(2, 9, &["clubs"])];
        let ids: Vec<u64> = select_posts(&posts, Some("events"))
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn test_tag_counts() {
        let posts = vec![post(1, 8, &["Events", "clubs"]), post(2, 9, &["events"])];
        assert_eq!(
            tag_counts(&posts),
            vec![("clubs".to_string(), 1), ("events".to_string(), 2)]
        );
    }

    #[test]
    fn test_empty() {
        assert!(select_posts(&[], Some("x")).is_empty());
        assert!(tag_counts(&[]).is_empty());
    }
}
