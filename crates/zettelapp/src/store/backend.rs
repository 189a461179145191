use crate::error::Result;
use std::path::{Path, PathBuf};

/// Abstract interface for raw note I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while [`super::NoteStore`] handles the "what" (frontmatter, titles, naming).
///
/// All paths crossing this trait are relative to the notes root.
pub trait StorageBackend {
    /// List every note file below the root.
    fn list_note_files(&self) -> Result<Vec<PathBuf>>;

    /// Read raw note content.
    /// Returns Ok(None) if the file does not exist (it may have vanished since listing).
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn read_note(&self, path: &Path) -> Result<Option<String>>;

    /// Write a new note file.
    /// MUST fail instead of overwriting an existing file.
    fn create_note_file(&self, path: &Path, content: &str) -> Result<()>;

    /// The location a relative note path refers to.
    /// For FsBackend, this is the real path. For MemBackend, the path itself.
    fn note_location(&self, path: &Path) -> PathBuf;

    /// Extension of note files, with leading dot.
    fn file_ext(&self) -> &str;
}
