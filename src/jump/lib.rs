//! # Jump
//!
//! Jump remembers the directories you visit and ranks them by *frecency*, a
//! blend of how often and how recently each was entered, so that a shell
//! integration can take you to `~/work/project/api` from a query like `api`.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs)                               │
//! │  - Parses arguments, prints results, owns exit codes        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the store and the reference time for this run       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - visit, top, cd, pin/unpin, forget, clean                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Scoring (scoring.rs) and Storage (store/)                  │
//! │  - Pure frecency arithmetic, JSON files on disk             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward nothing prints, exits or reads the clock on its own.
//! The shell integration only ever needs stdout of `jump cd`.
//!
//! ## Module Overview
//!
//! - [`api`]: The facade every operation goes through
//! - [`commands`]: One module per user-facing operation
//! - [`scoring`]: `Score`, `Entries` and the frecency formula
//! - [`matching`]: Turning a query into candidates from the ranked list
//! - [`store`]: The file-backed store for entries, pins and the search record
//! - [`config`]: Locating the state directory
//! - [`model`]: Pins and the search record
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod matching;
pub mod model;
pub mod scoring;
pub mod store;
