use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::FileStore;

use super::helpers::{normalize_dir, validate_pin_name};

pub fn pin(store: &FileStore, name: &str, dir: &str) -> Result<CmdResult> {
    let name = validate_pin_name(name)?;
    let path = normalize_dir(dir)?;
    store.write_pin(name, &path)?;

    let mut result = CmdResult::default().with_pins(vec![(name.to_string(), path.clone())]);
    result.add_message(CmdMessage::success(format!("Pinned {} -> {}", name, path)));
    Ok(result)
}

pub fn unpin(store: &FileStore, name: &str) -> Result<CmdResult> {
    let name = validate_pin_name(name)?;
    let existing = store.find_pin(name);
    store.remove_pin(name)?;

    let mut result = CmdResult::default();
    match existing {
        Some(path) => {
            result.add_message(CmdMessage::success(format!("Unpinned {} ({})", name, path)));
        }
        None => result.add_message(CmdMessage::info(format!("No pin named {}", name))),
    }
    Ok(result)
}

pub fn list(store: &FileStore) -> Result<CmdResult> {
    let pins = store.read_pins()?.into_iter().collect();
    Ok(CmdResult::default().with_pins(pins))
}
