use crate::collection::{AnnotatedNote, NoteCollection};
use crate::error::{Result, ZettelError};
use std::path::Path;

/// Finds the note a user-supplied selector refers to.
///
/// Tried in order, first hit wins:
/// 1. Exact relative path (`topic/Carry.md`)
/// 2. Exact identifier (`1a2`)
/// 3. Case-insensitive exact title (`carry`)
///
/// A selector matching several notes by identifier or title is rejected rather than
/// guessed; the caller can always fall back to the unique path.
pub fn resolve_selector<'a>(
    collection: &'a NoteCollection,
    selector: &str,
) -> Result<&'a AnnotatedNote> {
    let selector = selector.trim();
    if let Some(note) = collection.get(Path::new(selector)) {
        return Ok(note);
    }

    let by_id: Vec<_> = collection
        .iter()
        .filter(|n| n.note.id() == Some(selector))
        .collect();
    if let Some(note) = single(by_id, selector, "identifier")? {
        return Ok(note);
    }

    let lower = selector.to_lowercase();
    let by_title: Vec<_> = collection
        .iter()
        .filter(|n| n.note.title.to_lowercase() == lower)
        .collect();
    if let Some(note) = single(by_title, selector, "title")? {
        return Ok(note);
    }

    Err(ZettelError::NoteNotFound(selector.to_string()))
}

fn single<'a>(
    matches: Vec<&'a AnnotatedNote>,
    selector: &str,
    kind: &str,
) -> Result<Option<&'a AnnotatedNote>> {
    match matches.len() {
        0 => Ok(None),
        1 => Ok(matches.into_iter().next()),
        n => {
            let paths: Vec<String> = matches
                .iter()
                .map(|m| m.note.path.display().to_string())
                .collect();
            Err(ZettelError::Api(format!(
                "{} notes share the {} {}: {}",
                n,
                kind,
                selector,
                paths.join(", ")
            )))
        }
    }
}
