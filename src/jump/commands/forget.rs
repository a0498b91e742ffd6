use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::scoring::Entry;
use crate::store::FileStore;

use super::helpers::normalize_dir;

/// Stop tracking `dir`. Unknown directories are reported, not rejected.
pub fn run(store: &FileStore, dir: &str) -> Result<CmdResult> {
    let path = normalize_dir(dir)?;

    let mut entries = store.read_entries()?;
    let mut result = CmdResult::default();
    match entries.remove(&path) {
        Some(score) => {
            store.write_entries(&entries)?;
            result.add_message(CmdMessage::success(format!("Forgot {}", path)));
            result.entries.push(Entry::new(path, score));
        }
        None => result.add_message(CmdMessage::info(format!("{} is not tracked", path))),
    }
    Ok(result)
}
