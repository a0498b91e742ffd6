//! # Frecency Scoring
//!
//! Every tracked directory carries a [`Score`]: an ever-growing visit weight and
//! the time of the last visit. The final, sortable value is
//!
//! ```text
//! calculate = weight * ln(1 + age / now)
//! ```
//!
//! with both times taken as Unix seconds. Because `age` stays put while `now`
//! moves forward, the logarithm slides towards `ln(1) = 0` for directories that
//! are no longer visited. Decay is therefore recomputed on every read and no
//! background job is ever needed.
//!
//! All time-dependent functions take the reference instant explicitly. Callers
//! capture it once per invocation (see [`crate::api::JumpApi`]) so that a whole
//! ranking pass is computed against the same clock.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

/// Weight and last-visit time of a single directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub weight: i64,
    pub age: DateTime<Utc>,
}

impl Score {
    /// A fresh score: weight of 1, aged at `now`.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { weight: 1, age: now }
    }

    pub fn update(&mut self, delta: i64, now: DateTime<Utc>) {
        self.weight = self.weight.saturating_add(delta);
        self.age = now;
    }

    /// Quotient of the score age and the reference time, shifted by one.
    ///
    /// Lies in `(1, 2]` for ages at or before `now`. Ages in the future push it
    /// above 2, which is tolerated. A reference time at or before the Unix epoch
    /// yields 1, making the final score 0.
    pub fn relevance(&self, now: DateTime<Utc>) -> f64 {
        let now_secs = now.timestamp();
        if now_secs <= 0 {
            return 1.0;
        }
        1.0 + self.age.timestamp() as f64 / now_secs as f64
    }

    pub fn calculate(&self, now: DateTime<Utc>) -> f64 {
        self.weight as f64 * self.relevance(now).ln()
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{{} {}}}",
            self.weight,
            self.age.to_rfc3339_opts(SecondsFormat::Secs, true)
        )
    }
}

/// A tracked directory paired with its score, as handed to matchers.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub path: String,
    pub score: Score,
}

impl Entry {
    pub fn new(path: impl Into<String>, score: Score) -> Self {
        Self {
            path: path.into(),
            score,
        }
    }
}

/// All tracked directories, keyed by absolute path.
///
/// Backed by an ordered map so the persisted file is stable between writes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Entries(BTreeMap<String, Score>);

impl Entries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a visit to `path`.
    ///
    /// An unknown path is created with a fresh score, which counts as its first
    /// visit. A known path gets `delta` added to its weight.
    pub fn visit(&mut self, path: &str, delta: i64, now: DateTime<Utc>) -> Score {
        let score = self
            .0
            .entry(path.to_string())
            .and_modify(|score| score.update(delta, now))
            .or_insert_with(|| Score::new(now));
        *score
    }

    pub fn get(&self, path: &str) -> Option<&Score> {
        self.0.get(path)
    }

    pub fn insert(&mut self, path: impl Into<String>, score: Score) -> Option<Score> {
        self.0.insert(path.into(), score)
    }

    pub fn remove(&mut self, path: &str) -> Option<Score> {
        self.0.remove(path)
    }

    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&str, &Score) -> bool,
    {
        self.0.retain(|path, score| keep(path, score));
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries sorted by final score, best first. Equal scores fall back to
    /// path order so the output is deterministic.
    pub fn ranked(&self, now: DateTime<Utc>) -> Vec<Entry> {
        let mut scored: Vec<(f64, Entry)> = self
            .0
            .iter()
            .map(|(path, score)| (score.calculate(now), Entry::new(path.clone(), *score)))
            .collect();

        scored.sort_by(|(a_val, a), (b_val, b)| {
            match b_val.partial_cmp(a_val).unwrap_or(Ordering::Equal) {
                Ordering::Equal => a.path.cmp(&b.path),
                ord => ord,
            }
        });

        scored.into_iter().map(|(_, entry)| entry).collect()
    }
}
