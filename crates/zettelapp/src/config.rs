//! # Configuration
//!
//! Zettel configuration is managed by [`confique`], which handles layered loading
//! from a TOML file and environment variables on top of compiled defaults.
//!
//! ## Storage Hierarchy
//!
//! Configuration is resolved in priority order:
//! 1. **Environment variables**: `ZETTEL_ID_FIELD`, `ZETTEL_MAX_ATTEMPTS`, etc.
//! 2. **Root Config**: `<root>/.zettel/zettel.toml`.
//! 3. **Compiled Defaults**: Built-in fallbacks via `#[config(default = ...)]`.
//!
//! A missing file is not an error. A file that does not parse is.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `id_field` | `id` | Frontmatter key holding the outline identifier |
//! | `toc_title_field` | `tocTitle` | Frontmatter key holding the display title |
//! | `file_ext` | `.md` | Extension of note files |
//! | `max_attempts` | `50` | Sibling steps tried when looking for a free identifier |
//! | `use_toc_title` | `true` | Show the display title instead of the file title |

use crate::alloc::DEFAULT_MAX_ATTEMPTS;
use crate::error::Result;
use crate::frontmatter::FieldNames;
use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_DIR: &str = ".zettel";
pub const CONFIG_FILENAME: &str = "zettel.toml";

/// Configuration for zettel, stored in `.zettel/zettel.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ZettelConfig {
    /// Frontmatter key holding a note's outline identifier (e.g. "id", "zettel").
    #[config(default = "id", env = "ZETTEL_ID_FIELD")]
    pub id_field: String,

    /// Frontmatter key holding a shorter title to show in the outline.
    #[config(default = "tocTitle", env = "ZETTEL_TOC_TITLE_FIELD")]
    pub toc_title_field: String,

    /// Extension of note files (e.g. ".md", ".txt").
    #[config(default = ".md", env = "ZETTEL_FILE_EXT")]
    pub file_ext: String,

    /// How many sibling identifiers to try before giving up on a new identifier.
    #[config(default = 50, env = "ZETTEL_MAX_ATTEMPTS")]
    pub max_attempts: usize,

    /// Show the display title (when a note has one) instead of the file title.
    #[config(default = true, env = "ZETTEL_USE_TOC_TITLE")]
    pub use_toc_title: bool,
}

impl Default for ZettelConfig {
    fn default() -> Self {
        Self {
            id_field: "id".to_string(),
            toc_title_field: "tocTitle".to_string(),
            file_ext: ".md".to_string(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            use_toc_title: true,
        }
    }
}

impl ZettelConfig {
    /// Load configuration for the notes root at `root`.
    pub fn load(root: &Path) -> Result<Self> {
        let config = ZettelConfig::builder()
            .env()
            .file(config_path(root))
            .load()?;
        Ok(config)
    }

    /// A commented TOML file listing every setting with its default.
    pub fn template() -> String {
        confique::toml::template::<ZettelConfig>(confique::toml::FormatOptions::default())
    }

    /// Get the file extension, normalized to start with a dot.
    pub fn file_ext(&self) -> String {
        if self.file_ext.starts_with('.') {
            self.file_ext.clone()
        } else {
            format!(".{}", self.file_ext)
        }
    }

    pub fn field_names(&self) -> FieldNames {
        FieldNames {
            id: self.id_field.clone(),
            toc_title: self.toc_title_field.clone(),
        }
    }
}

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_DIR).join(CONFIG_FILENAME)
}
