use crate::commands::CmdResult;
use crate::error::Result;
use crate::scoring::Entry;
use crate::store::FileStore;
use chrono::{DateTime, Utc};
use tracing::debug;

use super::helpers::normalize_dir;

/// Weight added for each visit.
pub const VISIT_WEIGHT: i64 = 1;

/// Record that the shell entered `dir`.
pub fn run(store: &FileStore, dir: &str, now: DateTime<Utc>) -> Result<CmdResult> {
    let path = normalize_dir(dir)?;

    let mut entries = store.read_entries()?;
    let score = entries.visit(&path, VISIT_WEIGHT, now);
    store.write_entries(&entries)?;

    debug!(path = %path, weight = score.weight, "recorded visit");
    Ok(CmdResult::default().with_entries(vec![Entry::new(path, score)]))
}
