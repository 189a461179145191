use super::backend::StorageBackend;
use crate::error::{Result, ZettelError};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::warn;
use walkdir::{DirEntry, WalkDir};

/// Notes as files in a folder tree.
///
/// Every file with the configured extension below `root` is a note. Directories whose
/// name starts with a dot (`.git`, `.zettel`, `.obsidian`) are skipped. Symlinks are
/// not followed, so each note is listed once under its real path.
pub struct FsBackend {
    root: PathBuf,
    file_ext: String,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            file_ext: ".md".to_string(),
        }
    }

    pub fn with_file_ext(mut self, ext: &str) -> Self {
        if ext.starts_with('.') {
            self.file_ext = ext.to_string();
        } else {
            self.file_ext = format!(".{}", ext);
        }
        self
    }

    fn is_note_file(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|s| s.to_str())
            .is_some_and(|name| name.ends_with(&self.file_ext) && name.len() > self.file_ext.len())
    }
}

/// Dot-directories below the root (`.git`, `.zettel`) hold no notes.
fn is_hidden_dir(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry.file_name().to_str().is_some_and(|n| n.starts_with('.'))
}

impl StorageBackend for FsBackend {
    fn list_note_files(&self) -> Result<Vec<PathBuf>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }
        let mut files: Vec<PathBuf> = WalkDir::new(&self.root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|entry| !is_hidden_dir(entry))
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!(error = %e, "skipping unreadable entry");
                    None
                }
            })
            .filter(|entry| entry.file_type().is_file() && self.is_note_file(entry.path()))
            .filter_map(|entry| {
                entry
                    .path()
                    .strip_prefix(&self.root)
                    .ok()
                    .map(Path::to_path_buf)
            })
            .collect();
        files.sort();
        Ok(files)
    }

    fn read_note(&self, path: &Path) -> Result<Option<String>> {
        match fs::read_to_string(self.root.join(path)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ZettelError::Io(e)),
        }
    }

    fn create_note_file(&self, path: &Path, content: &str) -> Result<()> {
        let target = self.root.join(path);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(ZettelError::Io)?;
        }

        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&target)
            .map_err(|e| match e.kind() {
                ErrorKind::AlreadyExists => {
                    ZettelError::Store(format!("Note already exists: {}", path.display()))
                }
                _ => ZettelError::Io(e),
            })?;
        file.write_all(content.as_bytes()).map_err(ZettelError::Io)?;
        Ok(())
    }

    fn note_location(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }

    fn file_ext(&self) -> &str {
        &self.file_ext
    }
}
