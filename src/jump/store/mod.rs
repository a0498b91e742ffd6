//! # Storage Layer
//!
//! All persisted state lives in a single directory holding three independent
//! JSON documents. [`fs::FileStore`] is the only thing that touches them; the
//! command layer asks it for whole collections, mutates them in memory and hands
//! them back.
//!
//! ## Storage Layout
//!
//! ```text
//! ~/.jump/                 (or $XDG_CONFIG_HOME/jump, see config.rs)
//! ├── scores.json          # path -> { weight, age }
//! ├── pins.json            # name -> path
//! └── search.json          # { query, count }
//! ```
//!
//! ## Failure Policy
//!
//! - Missing files are a first run, never an error: empty collections come back.
//! - Entries and pins are user data. Read, parse and write failures propagate.
//! - The search record is a ranking hint. Reading it never fails; a broken or
//!   missing file reads as the empty record.
//!
//! ## No Caching
//!
//! Nothing is held between calls. Every read hits the disk and every write
//! replaces the whole file through a temp file and a rename, so a concurrent
//! reader in another shell sees the old document or the new one, never half of
//! each. Concurrent writers may still lose updates; that is accepted.

pub mod fs;

pub use fs::FileStore;

pub const SCORES_FILE: &str = "scores.json";
pub const SEARCH_FILE: &str = "search.json";
pub const PINS_FILE: &str = "pins.json";
