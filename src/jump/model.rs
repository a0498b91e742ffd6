use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Pin name to absolute directory path.
pub type Pins = BTreeMap<String, String>;

/// The most recent interactive query and how many times in a row it was issued.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Search {
    pub query: String,
    pub count: i64,
}

impl Search {
    pub fn new(query: impl Into<String>, count: i64) -> Self {
        Self {
            query: query.into(),
            count,
        }
    }

    /// The record that follows this one once `query` is issued.
    ///
    /// Repeating the previous query bumps the counter; anything else starts over.
    pub fn next(&self, query: &str) -> Self {
        if !self.query.is_empty() && self.query == query {
            Self::new(query, self.count.saturating_add(1))
        } else {
            Self::new(query, 0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_query_bumps_count() {
        let search = Search::new("proj", 0);
        assert_eq!(search.next("proj"), Search::new("proj", 1));
        assert_eq!(search.next("proj").next("proj").count, 2);
    }

    #[test]
    fn repeated_query_at_max_count_does_not_overflow() {
        let search = Search::new("proj", i64::MAX);
        assert_eq!(search.next("proj"), Search::new("proj", i64::MAX));
    }

    #[test]
    fn new_query_resets_count() {
        let search = Search::new("proj", 4);
        assert_eq!(search.next("docs"), Search::new("docs", 0));
    }

    #[test]
    fn empty_record_starts_at_zero() {
        assert_eq!(Search::default().next(""), Search::new("", 0));
    }
}
