//! # Storage Layer
//!
//! This module defines the storage abstraction for zettel. The [`DataStore`] trait
//! allows the application to work with different storage backends.
//!
//! ## Files are Truth
//!
//! There is no index or cache. Every read lists the note files and parses their
//! frontmatter again, so edits made by other programs (an editor, a sync client) are
//! always picked up on the next call. The engine rebuilds its collection from that
//! fresh snapshot every time.
//!
//! ## Layers
//!
//! - [`backend::StorageBackend`]: raw file I/O (list, read, create-new).
//! - [`NoteStore`]: turns files into [`NoteMeta`] (title from the file stem, identifier
//!   and display title from frontmatter) and renders new notes.
//!
//! ## Storage Layout
//!
//! ```text
//! <root>/
//! ├── .zettel/
//! │   └── zettel.toml     # Configuration (also marks the notes root)
//! ├── Some note.md        # Notes, in any sub-folder structure
//! └── topic/Other note.md
//! ```
//!
//! ## Implementations
//!
//! - [`FolderStore`]: production store over a folder tree.
//! - [`InMemoryStore`]: for testing logic without filesystem I/O.

use crate::error::Result;
use crate::model::NoteMeta;
use std::path::{Path, PathBuf};

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;
pub mod note_store;

pub use note_store::NoteStore;

pub type FolderStore = NoteStore<fs_backend::FsBackend>;
pub type InMemoryStore = NoteStore<mem_backend::MemBackend>;

/// Abstract interface for note storage.
pub trait DataStore {
    /// Load every note currently in the store.
    fn list_notes(&self) -> Result<Vec<NoteMeta>>;

    /// Create a note titled `title` carrying `id`, in folder `dir` (relative to the
    /// root). Returns the new note's relative path.
    fn create_note(&mut self, dir: &Path, title: &str, id: &str) -> Result<PathBuf>;

    /// Where a relative note path lives (the real file for file-based stores).
    fn note_location(&self, path: &Path) -> PathBuf;
}
