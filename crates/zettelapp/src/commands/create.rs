use crate::collection::NoteCollection;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;
use std::path::Path;

use super::helpers::resolve_selector;
use super::next_id::{propose, Proposal};

/// Creates a note titled `title` next to the selected note, carrying a freshly
/// allocated sibling (or child) identifier.
///
/// When no identifier can be allocated nothing is created and the result carries a
/// warning instead.
pub fn run<S: DataStore>(
    store: &mut S,
    collection: &NoteCollection,
    selector: &str,
    want_child: bool,
    title: &str,
    max_attempts: usize,
) -> Result<CmdResult> {
    let source = resolve_selector(collection, selector)?;
    let proposal = propose(collection, source, want_child, max_attempts);

    let mut result = CmdResult::default();
    let id = match proposal {
        Proposal::Allocated(id) => id,
        other => {
            if let Some(warning) = other.warning(source, max_attempts) {
                result.add_message(warning);
            }
            result.add_message(CmdMessage::info("No note was created"));
            return Ok(result);
        }
    };

    let dir = source.note.path.parent().unwrap_or(Path::new(""));
    let path = store.create_note(dir, title, &id)?;

    result.add_message(CmdMessage::success(format!(
        "Note created: {} ({})",
        path.display(),
        id
    )));
    result.allocated_id = Some(id);
    Ok(result.with_note_paths(vec![path]))
}
