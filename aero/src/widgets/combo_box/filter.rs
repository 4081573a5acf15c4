//! Option filtering for the combo box.

use nucleo_matcher::pattern::{AtomKind, CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};

/// Result of a filter operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterMatch {
    /// Index of the matched item in the original list.
    pub index: usize,
    /// Match score (higher is better). Always 0 for substring matches.
    pub score: u32,
}

/// Case-insensitive substring filter.
///
/// Keeps the original order. An empty query matches every item.
pub fn substring_filter(query: &str, items: &[String]) -> Vec<FilterMatch> {
    let needle = query.to_lowercase();
    items
        .iter()
        .enumerate()
        .filter(|(_, text)| text.to_lowercase().contains(&needle))
        .map(|(index, _)| FilterMatch { index, score: 0 })
        .collect()
}

/// Fuzzy filter using nucleo-matcher.
///
/// Returns matches sorted by score (highest first).
/// Empty query returns all items with score 0.
///
/// # Example
///
/// ```ignore
/// let labels: Vec<String> = ["apple", "banana", "apricot"].map(String::from).into();
/// let matches = fuzzy_filter("ap", &labels);
/// // Returns: apricot, apple
/// ```
pub fn fuzzy_filter(query: &str, items: &[String]) -> Vec<FilterMatch> {
    if query.is_empty() {
        return items
            .iter()
            .enumerate()
            .map(|(index, _)| FilterMatch { index, score: 0 })
            .collect();
    }

    let mut matcher = Matcher::new(Config::DEFAULT);
    let pattern = Pattern::new(
        query,
        CaseMatching::Ignore,
        Normalization::Smart,
        AtomKind::Fuzzy,
    );

    let mut matches: Vec<FilterMatch> = items
        .iter()
        .enumerate()
        .filter_map(|(index, label)| {
            let mut buf = Vec::new();
            let haystack = Utf32Str::new(label, &mut buf);
            pattern
                .score(haystack, &mut matcher)
                .map(|score| FilterMatch { index, score })
        })
        .collect();

    // Stable, so equal scores keep list order
    matches.sort_by(|a, b| b.score.cmp(&a.score));

    matches
}
