use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::FileStore;
use chrono::{DateTime, Utc};

pub fn run(store: &FileStore, now: DateTime<Utc>) -> Result<CmdResult> {
    let entries = store.read_entries()?;
    Ok(CmdResult::default().with_entries(entries.ranked(now)))
}
