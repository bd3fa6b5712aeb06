use super::DocumentStore;
use crate::error::{LiftlogError, Result};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(LiftlogError::Io)?;
            }
        }
        Ok(())
    }
}

impl DocumentStore for FileStore {
    fn exists(&self) -> bool {
        self.path.exists()
    }

    fn read(&self) -> Result<String> {
        let content = fs::read_to_string(&self.path).map_err(LiftlogError::Io)?;
        tracing::debug!(path = %self.path.display(), bytes = content.len(), "read document");
        Ok(content)
    }

    fn write(&mut self, content: &str) -> Result<()> {
        self.ensure_parent()?;
        fs::write(&self.path, content).map_err(LiftlogError::Io)?;
        tracing::debug!(path = %self.path.display(), bytes = content.len(), "wrote document");
        Ok(())
    }

    fn append(&mut self, text: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .map_err(LiftlogError::Io)?;
        file.write_all(text.as_bytes()).map_err(LiftlogError::Io)?;
        tracing::debug!(path = %self.path.display(), bytes = text.len(), "appended to document");
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn write_then_read() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStore::new(temp.path().join("log.md"));
        assert!(!store.exists());

        store.write("# title\n").unwrap();
        assert!(store.exists());
        assert_eq!(store.read().unwrap(), "# title\n");
    }

    #[test]
    fn write_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStore::new(temp.path().join("nested").join("log.md"));
        store.write("x").unwrap();
        assert!(temp.path().join("nested").join("log.md").exists());
    }

    #[test]
    fn append_adds_to_tail() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStore::new(temp.path().join("log.md"));
        store.write("a").unwrap();
        store.append("\nb").unwrap();
        store.append("\nc").unwrap();
        assert_eq!(store.read().unwrap(), "a\nb\nc");
    }

    #[test]
    fn reading_missing_file_is_an_io_error() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path().join("missing.md"));
        assert!(matches!(store.read(), Err(LiftlogError::Io(_))));
    }

    #[test]
    fn appending_to_missing_file_fails() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStore::new(temp.path().join("missing.md"));
        assert!(store.append("x").is_err());
        assert!(!store.exists());
    }
}
