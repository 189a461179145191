//! # Notes Root Discovery
//!
//! A notes root is a folder holding a `.zettel/` directory (created by `zettel init`).
//! Every note below it belongs to one outline.
//!
//! ## Detection Algorithm
//!
//! [`find_notes_root`] works like `git` finding its repository:
//!
//! 1. Start at `CWD`.
//! 2. Check: does this directory have `.zettel`?
//! 3. **Match**: this is the notes root.
//! 4. **No Match**: move to the parent directory.
//! 5. **Stop**: at `HOME` or the filesystem root, return `None`.
//!
//! Nested roots are allowed; the innermost one wins.
//!
//! ## Resolution Flow
//!
//! [`initialize`] picks the root in this order:
//! 1. An explicit override (`--root` / `ZETTEL_ROOT`), used as is.
//! 2. [`find_notes_root`] from the current directory.
//! 3. The current directory itself (`zettel init` will mark it).

use crate::api::ZettelApi;
use crate::config::{ZettelConfig, CONFIG_DIR};
use crate::error::Result;
use crate::store::fs_backend::FsBackend;
use crate::store::{FolderStore, NoteStore};
use directories::BaseDirs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct ZettelContext {
    pub api: ZettelApi<FolderStore>,
    pub root: PathBuf,
    pub config: ZettelConfig,
}

/// Walks up from `cwd` looking for a directory containing `.zettel`.
/// Returns None if none is found before reaching home or the filesystem root.
pub fn find_notes_root(cwd: &Path) -> Option<PathBuf> {
    let home_dir = BaseDirs::new().map(|bd| bd.home_dir().to_path_buf());
    let mut current = cwd.to_path_buf();

    loop {
        if current.join(CONFIG_DIR).is_dir() {
            return Some(current);
        }

        if let Some(ref home) = home_dir {
            if &current == home {
                return None;
            }
        }

        match current.parent() {
            Some(parent) if parent != current => {
                current = parent.to_path_buf();
            }
            _ => return None,
        }
    }
}

/// Resolves the notes root, loads its configuration and opens the folder store.
pub fn initialize(cwd: &Path, root_override: Option<PathBuf>) -> Result<ZettelContext> {
    let root = match root_override {
        Some(path) => path,
        None => find_notes_root(cwd).unwrap_or_else(|| cwd.to_path_buf()),
    };
    debug!(root = %root.display(), "resolved notes root");

    let config = ZettelConfig::load(&root)?;
    let backend = FsBackend::new(root.clone()).with_file_ext(&config.file_ext());
    let store = NoteStore::with_backend(backend).with_fields(config.field_names());
    let api = ZettelApi::new(store, config.clone(), root.clone())?;

    Ok(ZettelContext { api, root, config })
}
