use crate::commands::{CmdMessage, CmdResult};
use crate::error::{JumpError, Result};
use crate::matching;
use crate::store::FileStore;
use chrono::{DateTime, Utc};
use tracing::debug;

/// Resolve `term` to a directory to jump to.
///
/// A pin with that exact name wins outright. Otherwise the frecency-ranked
/// entries are matched against the term. Issuing the same term again moves on to
/// the next match, wrapping around at the end of the list.
pub fn run(store: &FileStore, term: &str, now: DateTime<Utc>) -> Result<CmdResult> {
    let term = term.trim();
    if term.is_empty() {
        return Err(JumpError::Api("Search term cannot be empty".into()));
    }

    if let Some(path) = store.find_pin(term) {
        debug!(pin = term, path = %path, "resolved pin");
        return Ok(CmdResult::default().with_target(path));
    }

    let ranked = store.read_entries()?.ranked(now);
    let matches = matching::filter(&ranked, term);

    let search = store.read_search().next(term);
    if let Err(e) = store.write_search(&search.query, search.count) {
        debug!(error = %e, "could not record search");
    }

    if matches.is_empty() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::warning(format!("No match for \"{}\"", term)));
        return Ok(result);
    }

    let index = search.count.rem_euclid(matches.len() as i64) as usize;
    let target = matches[index].path.clone();
    debug!(term, index, candidates = matches.len(), target = %target, "resolved search");

    Ok(CmdResult::default()
        .with_target(target)
        .with_entries(matches))
}
