use crate::error::{JumpError, Result};
use std::path::{Path, MAIN_SEPARATOR};

/// Validate a directory argument and bring it to the form used as a key.
///
/// Paths must be absolute. Trailing separators are dropped, except for the
/// root itself, so `/tmp/` and `/tmp` name the same entry.
pub fn normalize_dir(dir: &str) -> Result<String> {
    if !Path::new(dir).is_absolute() {
        return Err(JumpError::Api(format!(
            "Directory must be an absolute path: {}",
            dir
        )));
    }

    let trimmed = dir.trim_end_matches(['/', MAIN_SEPARATOR]);
    if trimmed.is_empty() {
        Ok(dir[..1].to_string())
    } else {
        Ok(trimmed.to_string())
    }
}

pub fn validate_pin_name(name: &str) -> Result<&str> {
    let name = name.trim();
    if name.is_empty() {
        return Err(JumpError::Api("Pin name cannot be empty".into()));
    }
    Ok(name)
}
