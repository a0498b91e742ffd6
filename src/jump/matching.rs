use crate::scoring::Entry;
use std::path::MAIN_SEPARATOR;

/// Filter a ranked list down to the entries matching `term`.
///
/// Matching is case-insensitive. The term is split on whitespace and every word
/// has to appear in the path, each one after the previous. Entries whose last
/// path segment contains the final word come first; frecency order is kept
/// within both groups.
pub fn filter(entries: &[Entry], term: &str) -> Vec<Entry> {
    let words: Vec<String> = term.split_whitespace().map(str::to_lowercase).collect();
    let Some(last_word) = words.last() else {
        return Vec::new();
    };

    let (mut preferred, rest): (Vec<Entry>, Vec<Entry>) = entries
        .iter()
        .filter(|entry| matches_in_order(&entry.path.to_lowercase(), &words))
        .cloned()
        .partition(|entry| base_name(&entry.path).to_lowercase().contains(last_word));

    preferred.extend(rest);
    preferred
}

fn matches_in_order(haystack: &str, words: &[String]) -> bool {
    let mut rest = haystack;
    for word in words {
        match rest.find(word.as_str()) {
            Some(pos) => rest = &rest[pos + word.len()..],
            None => return false,
        }
    }
    true
}

fn base_name(path: &str) -> &str {
    path.trim_end_matches(['/', MAIN_SEPARATOR])
        .rsplit(['/', MAIN_SEPARATOR])
        .next()
        .unwrap_or(path)
}
