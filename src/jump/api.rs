//! # API Facade
//!
//! [`JumpApi`] is the single entry point a UI uses. It owns the store and the
//! reference instant for this invocation, and forwards to `commands/*.rs`.
//!
//! The reference time is captured once, when the facade is built, so that every
//! score computed during one run is measured against the same "now".

use crate::commands::{self, CmdResult};
use crate::error::Result;
use crate::store::FileStore;
use chrono::{DateTime, Utc};

pub use crate::commands::{CmdMessage, MessageLevel};

pub struct JumpApi {
    store: FileStore,
    now: DateTime<Utc>,
}

impl JumpApi {
    pub fn new(store: FileStore) -> Self {
        Self::at(store, Utc::now())
    }

    /// Build a facade with a fixed reference time.
    pub fn at(store: FileStore, now: DateTime<Utc>) -> Self {
        Self { store, now }
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }

    pub fn visit(&self, dir: &str) -> Result<CmdResult> {
        commands::visit::run(&self.store, dir, self.now)
    }

    pub fn top(&self) -> Result<CmdResult> {
        commands::top::run(&self.store, self.now)
    }

    pub fn cd(&self, term: &str) -> Result<CmdResult> {
        commands::cd::run(&self.store, term, self.now)
    }

    pub fn pin(&self, name: &str, dir: &str) -> Result<CmdResult> {
        commands::pinning::pin(&self.store, name, dir)
    }

    pub fn unpin(&self, name: &str) -> Result<CmdResult> {
        commands::pinning::unpin(&self.store, name)
    }

    pub fn pins(&self) -> Result<CmdResult> {
        commands::pinning::list(&self.store)
    }

    pub fn forget(&self, dir: &str) -> Result<CmdResult> {
        commands::forget::run(&self.store, dir)
    }

    pub fn clean(&self) -> Result<CmdResult> {
        commands::clean::run(&self.store)
    }
}
