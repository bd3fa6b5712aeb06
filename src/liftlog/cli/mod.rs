//! # CLI Layer
//!
//! This module is **one possible UI client** for liftlog. It is the only code
//! that knows about stdout/stderr, exit codes and argument parsing:
//!
//! - `setup.rs`: clap definitions and argument validation
//! - `commands.rs`: context wiring, storage bootstrap, per-command handlers
//! - `render.rs`: tables and colored messages
//!
//! Handlers write to any `io::Write` and work with any `DocumentStore`, so
//! tests drive them with an in-memory log and a byte buffer.

mod commands;
mod render;
pub mod setup;

pub use commands::{report_error, run};
