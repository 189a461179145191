use super::backend::StorageBackend;
use crate::error::{Result, ZettelError};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since the engine is single-threaded.
/// This keeps the `StorageBackend` trait on `&self` for all methods.
#[derive(Default)]
pub struct MemBackend {
    files: RefCell<BTreeMap<PathBuf, String>>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Test helper to put a file in place, replacing any previous content.
    pub fn insert(&self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.files.borrow_mut().insert(path.into(), content.into());
    }
}

impl StorageBackend for MemBackend {
    fn list_note_files(&self) -> Result<Vec<PathBuf>> {
        Ok(self.files.borrow().keys().cloned().collect())
    }

    fn read_note(&self, path: &Path) -> Result<Option<String>> {
        Ok(self.files.borrow().get(path).cloned())
    }

    fn create_note_file(&self, path: &Path, content: &str) -> Result<()> {
        let mut files = self.files.borrow_mut();
        if files.contains_key(path) {
            return Err(ZettelError::Store(format!(
                "Note already exists: {}",
                path.display()
            )));
        }
        files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn note_location(&self, path: &Path) -> PathBuf {
        path.to_path_buf()
    }

    fn file_ext(&self) -> &str {
        ".md"
    }
}
