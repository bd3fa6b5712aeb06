use super::DocumentStore;
use crate::error::{LiftlogError, Result};
use std::io;

/// In-memory document for testing and development.
/// Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    content: Option<String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
        }
    }

    /// Current document, if created
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    fn missing() -> LiftlogError {
        LiftlogError::Io(io::Error::new(
            io::ErrorKind::NotFound,
            "in-memory document has not been created",
        ))
    }
}

impl DocumentStore for InMemoryStore {
    fn exists(&self) -> bool {
        self.content.is_some()
    }

    fn read(&self) -> Result<String> {
        self.content.clone().ok_or_else(Self::missing)
    }

    fn write(&mut self, content: &str) -> Result<()> {
        self.content = Some(content.to_string());
        Ok(())
    }

    fn append(&mut self, text: &str) -> Result<()> {
        self.content
            .as_mut()
            .ok_or_else(Self::missing)?
            .push_str(text);
        Ok(())
    }

    fn location(&self) -> String {
        "<memory>".to_string()
    }
}

// --- Test Fixtures ---
