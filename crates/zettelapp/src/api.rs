//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It serves as the single
//! entry point for all zettel operations, regardless of the UI being used.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns the current snapshot**: the [`NoteCollection`] built from the store
//! - **Dispatches** to the appropriate command function
//! - **Applies configuration** (allocation budget)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **Terminal I/O**: No stdout, stderr, or formatting
//!
//! ## Snapshots
//!
//! The collection is rebuilt from the store on [`ZettelApi::new`], after every note it
//! creates, and whenever the host calls [`ZettelApi::refresh`]. Between those calls it is
//! an immutable snapshot; edits made behind its back show up on the next refresh.
//!
//! ## Generic Over DataStore
//!
//! `ZettelApi<S: DataStore>` is generic over the storage backend:
//! - Production: `ZettelApi<FolderStore>`
//! - Testing: `ZettelApi<InMemoryStore>`

use crate::collection::NoteCollection;
use crate::commands;
use crate::config::ZettelConfig;
use crate::error::Result;
use crate::store::DataStore;
use std::path::{Path, PathBuf};

/// The main API facade for zettel operations.
pub struct ZettelApi<S: DataStore> {
    store: S,
    config: ZettelConfig,
    root: PathBuf,
    collection: NoteCollection,
}

impl<S: DataStore> ZettelApi<S> {
    pub fn new(store: S, config: ZettelConfig, root: PathBuf) -> Result<Self> {
        let collection = NoteCollection::annotate(store.list_notes()?);
        Ok(Self {
            store,
            config,
            root,
            collection,
        })
    }

    /// The current snapshot.
    pub fn collection(&self) -> &NoteCollection {
        &self.collection
    }

    pub fn list(&self, filter: Option<&str>) -> Result<commands::CmdResult> {
        commands::list::run(&self.collection, filter)
    }

    pub fn next_id(&self, selector: &str, want_child: bool) -> Result<commands::CmdResult> {
        commands::next_id::run(
            &self.collection,
            selector,
            want_child,
            self.config.max_attempts,
        )
    }

    /// Creates a note next to (or below) the selected note and reloads the snapshot.
    pub fn create_note(
        &mut self,
        selector: &str,
        want_child: bool,
        title: &str,
    ) -> Result<commands::CmdResult> {
        let mut result = commands::create::run(
            &mut self.store,
            &self.collection,
            selector,
            want_child,
            title,
            self.config.max_attempts,
        )?;

        if !result.note_paths.is_empty() {
            self.reload()?;
            result.affected_notes = result
                .note_paths
                .iter()
                .filter_map(|p| self.collection.get(p).cloned())
                .collect();
        }
        Ok(result)
    }

    /// Rebuilds the snapshot and reports the rows whose layout changed, merged with
    /// `flagged` (paths the host knows were edited).
    pub fn refresh(&mut self, flagged: &[PathBuf]) -> Result<commands::CmdResult> {
        let previous = self.reload()?;
        commands::refresh::run(&previous, &self.collection, flagged)
    }

    pub fn init(&self) -> Result<commands::CmdResult> {
        commands::init::run(&self.root)
    }

    pub fn note_location(&self, path: &Path) -> PathBuf {
        self.store.note_location(path)
    }

    /// Replaces the snapshot, handing back the previous one.
    fn reload(&mut self) -> Result<NoteCollection> {
        let fresh = NoteCollection::annotate(self.store.list_notes()?);
        Ok(std::mem::replace(&mut self.collection, fresh))
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};
