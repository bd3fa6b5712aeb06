//! # Storage Layer
//!
//! The log is a single text document. [`DocumentStore`] abstracts where that
//! document lives so command logic never touches the filesystem directly.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage backed by one Markdown file.
//!   Every call opens, operates and closes the file; no handle outlives a call.
//! - [`memory::InMemoryStore`]: In-memory document for testing.
//!
//! ## Limitations
//!
//! There is no locking. Two processes writing at once can interleave appends
//! or lose an update, and a crash mid-write can leave a truncated file.

use crate::error::Result;

pub mod fs;
pub mod memory;

/// Abstract interface for the backing document.
pub trait DocumentStore {
    /// Whether the document has been created
    fn exists(&self) -> bool;

    /// Read the full document. Fails if it does not exist.
    fn read(&self) -> Result<String>;

    /// Replace the full document
    fn write(&mut self, content: &str) -> Result<()>;

    /// Append text to the end of the document
    fn append(&mut self, text: &str) -> Result<()>;

    /// Human readable location, used in messages
    fn location(&self) -> String;
}
