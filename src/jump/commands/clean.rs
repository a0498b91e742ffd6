use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::scoring::Entry;
use crate::store::FileStore;
use std::path::Path;
use tracing::debug;

/// Drop entries for directories that no longer exist.
pub fn run(store: &FileStore) -> Result<CmdResult> {
    let mut entries = store.read_entries()?;
    let mut removed = Vec::new();

    entries.retain(|path, score| {
        let keep = Path::new(path).is_dir();
        if !keep {
            removed.push(Entry::new(path, *score));
        }
        keep
    });

    let mut result = CmdResult::default();
    if removed.is_empty() {
        result.add_message(CmdMessage::info("Nothing to clean"));
        return Ok(result);
    }

    store.write_entries(&entries)?;
    for entry in &removed {
        debug!(path = %entry.path, "cleaned missing directory");
    }
    result.add_message(CmdMessage::success(format!(
        "Removed {} missing director{}",
        removed.len(),
        if removed.len() == 1 { "y" } else { "ies" }
    )));
    Ok(result.with_entries(removed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{test_support::TestEnv, visit};
    use tempfile::TempDir;

    #[test]
    fn removes_only_missing_directories() {
        let env = TestEnv::new();
        let real = TempDir::new().unwrap();
        let real_path = real.path().to_str().unwrap().to_string();
        let gone_path = real.path().join("gone").to_str().unwrap().to_string();

        visit::run(&env.store, &real_path, env.now).unwrap();
        visit::run(&env.store, &gone_path, env.now).unwrap();

        let result = run(&env.store).unwrap();
        assert_eq!(result.entries.len(), 1);
        assert_eq!(result.entries[0].path, gone_path);

        let entries = env.store.read_entries().unwrap();
        assert!(entries.get(&real_path).is_some());
        assert!(entries.get(&gone_path).is_none());
    }

    #[test]
    fn clean_store_is_untouched() {
        let env = TestEnv::new();
        let result = run(&env.store).unwrap();
        assert!(result.entries.is_empty());
        assert!(!env.store.dir().join(crate::store::SCORES_FILE).exists());
    }
}
