use super::backend::StorageBackend;
use super::fs_backend::FsBackend;
use super::mem_backend::MemBackend;
use super::{DataStore, FolderStore, InMemoryStore};
use crate::error::{Result, ZettelError};
use crate::frontmatter::{read_fields, render_new_note, FieldNames, NoteFields};
use crate::model::NoteMeta;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub struct NoteStore<B: StorageBackend> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
    fields: FieldNames,
}

impl<B: StorageBackend> NoteStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self {
            backend,
            fields: FieldNames::default(),
        }
    }

    /// Use custom frontmatter keys for the identifier and display title.
    pub fn with_fields(mut self, fields: FieldNames) -> Self {
        self.fields = fields;
        self
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn load_note(&self, path: &Path, content: &str) -> NoteMeta {
        let fields = read_fields(content, &self.fields).unwrap_or_else(|e| {
            warn!(path = %path.display(), error = %e, "unreadable frontmatter, loading without identifier");
            NoteFields::default()
        });

        NoteMeta {
            path: path.to_path_buf(),
            title: note_title(path, self.backend.file_ext()),
            toc_title: fields.toc_title,
            id: fields.id,
        }
    }
}

impl FolderStore {
    pub fn new(root: PathBuf) -> Self {
        NoteStore::with_backend(FsBackend::new(root))
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        NoteStore::with_backend(MemBackend::new())
    }

    /// Test helper: adds a note file with the given identifier (if any) in frontmatter.
    pub fn with_note(self, path: &str, id: Option<&str>) -> Self {
        let content = match id {
            Some(id) => format!("---\n{}: \"{}\"\n---\n", self.fields.id, id),
            None => String::new(),
        };
        self.backend.insert(path, content);
        self
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: StorageBackend> DataStore for NoteStore<B> {
    fn list_notes(&self) -> Result<Vec<NoteMeta>> {
        let mut notes = Vec::new();
        for path in self.backend.list_note_files()? {
            // Best effort read: a file removed since listing is simply skipped
            if let Some(content) = self.backend.read_note(&path)? {
                notes.push(self.load_note(&path, &content));
            }
        }
        debug!(count = notes.len(), "loaded notes");
        Ok(notes)
    }

    fn create_note(&mut self, dir: &Path, title: &str, id: &str) -> Result<PathBuf> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ZettelError::Api("Title cannot be empty".to_string()));
        }
        if title.contains(['/', '\\']) || title.starts_with('.') {
            return Err(ZettelError::Api(format!(
                "Title cannot be used as a file name: {}",
                title
            )));
        }

        let path = dir.join(format!("{}{}", title, self.backend.file_ext()));
        let content = render_new_note(&self.fields, id, title).map_err(|source| {
            ZettelError::Frontmatter {
                path: path.clone(),
                source,
            }
        })?;
        self.backend.create_note_file(&path, &content)?;
        debug!(path = %path.display(), id, "created note");
        Ok(path)
    }

    fn note_location(&self, path: &Path) -> PathBuf {
        self.backend.note_location(path)
    }
}

/// File name without the note extension.
fn note_title(path: &Path, ext: &str) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    match name.strip_suffix(ext) {
        Some(stem) if !stem.is_empty() => stem.to_string(),
        _ => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_notes_reads_frontmatter() {
        let store = InMemoryStore::new()
            .with_note("one.md", Some("1"))
            .with_note("loose.md", None);
        store
            .backend()
            .insert("short.md", "---\nid: 1a\ntocTitle: Tiny\n---\nbody");

        let mut notes = store.list_notes().unwrap();
        notes.sort_by(|a, b| a.path.cmp(&b.path));
        assert_eq!(notes.len(), 3);
        assert_eq!(notes[0].title, "loose");
        assert_eq!(notes[0].id, None);
        assert_eq!(notes[1].title, "one");
        assert_eq!(notes[1].id.as_deref(), Some("1"));
        assert_eq!(notes[2].title, "short");
        assert_eq!(notes[2].toc_title.as_deref(), Some("Tiny"));
    }

    #[test]
    fn test_bad_frontmatter_loads_without_identifier() {
        let store = InMemoryStore::new();
        store.backend().insert("broken.md", "---\nid: [oops\n---\n");
        let notes = store.list_notes().unwrap();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].title, "broken");
        assert_eq!(notes[0].id, None);
    }

    #[test]
    fn test_custom_id_field() {
        let store = InMemoryStore::new().with_fields(FieldNames {
            id: "zid".to_string(),
            toc_title: "tocTitle".to_string(),
        });
        store.backend().insert("a.md", "---\nzid: 4b\nid: 9\n---\n");
        let notes = store.list_notes().unwrap();
        assert_eq!(notes[0].id.as_deref(), Some("4b"));
    }

    #[test]
    fn test_create_note_round_trips_identifier() {
        let mut store = InMemoryStore::new();
        let path = store
            .create_note(Path::new("topic"), "New idea", "1a1")
            .unwrap();
        assert_eq!(path, Path::new("topic").join("New idea.md"));

        let notes = store.list_notes().unwrap();
        assert_eq!(notes[0].title, "New idea");
        assert_eq!(notes[0].id.as_deref(), Some("1a1"));
    }

    #[test]
    fn test_create_note_rejects_bad_titles() {
        let mut store = InMemoryStore::new();
        for title in ["", "   ", "a/b", ".hidden"] {
            let res = store.create_note(Path::new(""), title, "1");
            assert!(matches!(res, Err(ZettelError::Api(_))), "title {title:?}");
        }
    }

    #[test]
    fn test_create_note_never_overwrites() {
        let mut store = InMemoryStore::new();
        store.create_note(Path::new(""), "Same", "1").unwrap();
        let res = store.create_note(Path::new(""), "Same", "2");
        assert!(matches!(res, Err(ZettelError::Store(_))));
    }

    #[test]
    fn test_note_title_strips_extension_only() {
        assert_eq!(note_title(Path::new("dir/a.b.md"), ".md"), "a.b");
        assert_eq!(note_title(Path::new(".md"), ".md"), ".md");
    }
}
