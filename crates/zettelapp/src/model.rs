//! # Domain Model
//!
//! [`NoteMeta`] is what the engine knows about a note: the file it lives in, its title,
//! an optional display title and an optional outline identifier. Notes come from a
//! [`crate::store::NoteStore`]; the engine never modifies them.
//!
//! The file path is the key. Two notes may (by mistake) share an identifier, but never
//! a path.

use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteMeta {
    pub path: PathBuf,
    pub title: String,
    /// Alternative title shown in the outline instead of `title`.
    pub toc_title: Option<String>,
    pub id: Option<String>,
}

impl NoteMeta {
    pub fn new(path: impl Into<PathBuf>, title: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            title: title.into(),
            toc_title: None,
            id: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_toc_title(mut self, toc_title: impl Into<String>) -> Self {
        self.toc_title = Some(toc_title.into());
        self
    }

    /// The title to show in the outline.
    pub fn display_title(&self, prefer_toc_title: bool) -> &str {
        match (&self.toc_title, prefer_toc_title) {
            (Some(toc), true) => toc,
            _ => &self.title,
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_title_prefers_toc_title_when_asked() {
        let note = NoteMeta::new("a.md", "Long file name").with_toc_title("Short");
        assert_eq!(note.display_title(true), "Short");
        assert_eq!(note.display_title(false), "Long file name");
    }

    #[test]
    fn test_display_title_without_toc_title() {
        let note = NoteMeta::new("a.md", "Plain").with_id("1");
        assert_eq!(note.display_title(true), "Plain");
        assert_eq!(note.id(), Some("1"));
    }
}
