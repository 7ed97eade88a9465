//! Global search over the resource index.

use serde::Serialize;
use strum::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ResourceKind {
    Link,
    Article,
    File,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchEntry {
    pub id: u32,
    pub title: &'static str,
    pub category: &'static str,
    pub kind: ResourceKind,
    /// Path navigated to when the result is picked.
    pub path: &'static str,
}

#[must_use]
pub fn index() -> Vec<SearchEntry> {
    vec![
        SearchEntry {
            id: 1,
            title: "Exam Timetable Sem 1",
            category: "Admin",
            kind: ResourceKind::Link,
            path: "/topic/timetable",
        },
        SearchEntry {
            id: 2,
            title: "Library Opening Hours",
            category: "Library",
            kind: ResourceKind::Link,
            path: "/topic/library",
        },
        SearchEntry {
            id: 3,
            title: "How to apply for extension",
            category: "Support",
            kind: ResourceKind::Article,
            path: "/topic/support",
        },
        SearchEntry {
            id: 4,
            title: "Campus Map PDF",
            category: "Campus",
            kind: ResourceKind::File,
            path: "/topic/map",
        },
    ]
}

/// Case-insensitive substring match on titles. An empty query matches
/// nothing.
#[must_use]
pub fn search(query: &str) -> Vec<SearchEntry> {
    if query.is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    index()
        .into_iter()
        .filter(|entry| entry.title.to_lowercase().contains(&needle))
        .collect()
}

#[must_use]
pub const fn placeholder(authenticated: bool) -> &'static str {
    if authenticated {
        "Search resources..."
    } else {
        "Search public resources..."
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("", &[] ; "empty query")]
    #[test_case("LIBRARY", &[2] ; "case insensitive")]
    #[test_case("map", &[4] ; "substring")]
    #[test_case("a", &[1, 2, 3, 4] ; "broad")]
    #[test_case("e", &[1, 2, 3] ; "common letter")]
    #[test_case("zebra", &[] ; "no match")]
    fn test_search(query: &str, expected: &[u32]) {
        let ids: Vec<_> = search(query).iter().map(|e| e.id).collect();
        assert_eq!(ids, expected);
    }
}
