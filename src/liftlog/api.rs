//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every liftlog operation, whatever the UI.
//!
//! The facade dispatches to the matching command and returns structured
//! `Result<CmdResult>` values. It never prints, never exits, and holds no
//! business logic of its own.
//!
//! `LiftlogApi<S: DocumentStore>` is generic over the storage backend:
//! - Production: `LiftlogApi<FileStore>`
//! - Testing: `LiftlogApi<InMemoryStore>`

use crate::commands;
use crate::config::LogConfig;
use crate::error::Result;
use crate::store::DocumentStore;
use chrono::NaiveDate;

pub struct LiftlogApi<S: DocumentStore> {
    store: S,
    config: LogConfig,
}

impl<S: DocumentStore> LiftlogApi<S> {
    pub fn new(store: S, config: LogConfig) -> Self {
        Self { store, config }
    }

    pub fn ensure_storage(&mut self) -> Result<commands::CmdResult> {
        commands::init::run(&mut self.store)
    }

    pub fn list_actions(&self) -> Result<commands::CmdResult> {
        commands::actions::list(&self.store)
    }

    pub fn add_action(&mut self, name: &str) -> Result<commands::CmdResult> {
        commands::actions::add(&mut self.store, name)
    }

    /// Records a workout dated `today`. `sets` falls back to the configured default.
    pub fn record(
        &mut self,
        query: &str,
        reps: u32,
        weight: f64,
        sets: Option<u32>,
        today: NaiveDate,
    ) -> Result<commands::CmdResult> {
        let sets = sets.unwrap_or_else(|| self.config.default_sets());
        commands::record::run(&mut self.store, query, reps, weight, sets, today)
    }

    pub fn history(&self, action_filter: Option<&str>) -> Result<commands::CmdResult> {
        commands::history::run(&self.store, action_filter)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use commands::{CmdMessage, CmdResult, History, MessageLevel};
