//! # Liftlog Architecture
//!
//! Liftlog keeps a workout log in one human-readable Markdown file. The file
//! holds a registry of known actions (exercises), a goals section, and one
//! section per training day with a table of entries.
//!
//! As with any tool that should outlive its first UI, the core is a library
//! and the CLI is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders tables and colored messages    │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, applies configuration         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - init, actions, record, history                           │
//! │  - Returns `CmdResult` with data plus leveled messages      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Document grammar (document.rs) + Storage (store/)          │
//! │  - Line classification, registry and table parsing          │
//! │  - DocumentStore trait: FileStore, InMemoryStore            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never calls
//! `std::process::exit`. The current date is an argument, not a clock read,
//! so every command is testable against an [`store::memory::InMemoryStore`].
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each command
//! - [`document`]: The log file grammar
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Workout entries and record outcomes
//! - [`config`]: `liftlog.json` configuration
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod document;
pub mod error;
pub mod model;
pub mod store;
