use crate::collection::NoteCollection;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

/// Lists the annotated outline, optionally narrowed to notes matching `filter`.
///
/// Filtering never re-annotates: rows keep the split-levels they have in the full
/// outline.
pub fn run(collection: &NoteCollection, filter: Option<&str>) -> Result<CmdResult> {
    let notes: Vec<_> = match filter {
        Some(query) if !query.trim().is_empty() => {
            collection.filter(query.trim()).into_iter().cloned().collect()
        }
        _ => collection.notes().to_vec(),
    };

    let mut result = CmdResult::default();
    if notes.is_empty() {
        result.add_message(CmdMessage::info("No notes found."));
    }
    Ok(result.with_listed_notes(notes))
}
