use super::{PINS_FILE, SCORES_FILE, SEARCH_FILE};
use crate::config::find_config_dir;
use crate::error::{JumpError, Result};
use crate::model::{Pins, Search};
use crate::scoring::Entries;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

/// File backed store for entries, pins and the search record.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
    scores: PathBuf,
    search: PathBuf,
    pins: PathBuf,
}

impl FileStore {
    /// Use `dir` as the state directory, creating it and any missing parents.
    pub fn setup<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir).map_err(|e| {
            JumpError::Config(format!(
                "cannot create state directory {}: {}",
                dir.display(),
                e
            ))
        })?;

        Ok(Self {
            dir: dir.to_path_buf(),
            scores: dir.join(SCORES_FILE),
            search: dir.join(SEARCH_FILE),
            pins: dir.join(PINS_FILE),
        })
    }

    /// Like [`FileStore::setup`], guessing the directory when none is given.
    pub fn setup_default(dir: Option<&Path>) -> Result<Self> {
        let dir = find_config_dir(dir)?;
        debug!(dir = %dir.display(), "using state directory");
        Self::setup(dir)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn read_entries(&self) -> Result<Entries> {
        read_json(&self.scores)
    }

    pub fn write_entries(&self, entries: &Entries) -> Result<()> {
        write_json(&self.scores, entries)
    }

    /// Best effort: anything short of a valid document reads as the empty record.
    pub fn read_search(&self) -> Search {
        match read_json(&self.search) {
            Ok(search) => search,
            Err(e) => {
                debug!(error = %e, "ignoring unreadable search record");
                Search::default()
            }
        }
    }

    pub fn write_search(&self, query: &str, count: i64) -> Result<()> {
        write_json(&self.search, &Search::new(query, count))
    }

    pub fn read_pins(&self) -> Result<Pins> {
        read_json(&self.pins)
    }

    pub fn find_pin(&self, name: &str) -> Option<String> {
        match self.read_pins() {
            Ok(mut pins) => pins.remove(name),
            Err(e) => {
                debug!(error = %e, "cannot read pins");
                None
            }
        }
    }

    pub fn write_pin(&self, name: &str, path: &str) -> Result<()> {
        let mut pins = self.read_pins()?;
        pins.insert(name.to_string(), path.to_string());
        write_json(&self.pins, &pins)
    }

    /// Removing an unknown pin is a no-op.
    pub fn remove_pin(&self, name: &str) -> Result<()> {
        let mut pins = self.read_pins()?;
        if pins.remove(name).is_none() {
            return Ok(());
        }
        write_json(&self.pins, &pins)
    }
}

fn read_json<T: DeserializeOwned + Default>(path: &Path) -> Result<T> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(T::default()),
        Err(e) => return Err(JumpError::Io(e)),
    };
    let value = serde_json::from_str(&content).map_err(JumpError::Serialization)?;
    Ok(value)
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let content = serde_json::to_string_pretty(value).map_err(JumpError::Serialization)?;

    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("state");

    // Atomic write
    let tmp_path = dir.join(format!(".{}-{}.tmp", stem, Uuid::new_v4()));
    fs::write(&tmp_path, content).map_err(JumpError::Io)?;
    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(JumpError::Io(e));
    }

    debug!(path = %path.display(), "wrote state file");
    Ok(())
}
