use crate::collection::{AnnotatedNote, NoteCollection};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::id::{first_child, next_sibling};

use super::helpers::resolve_selector;

/// Outcome of asking for a new identifier next to (or below) a note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Proposal {
    Allocated(String),
    NoIdentifier,
    Exhausted { candidate: String },
}

impl Proposal {
    pub(crate) fn warning(&self, note: &AnnotatedNote, max_attempts: usize) -> Option<CmdMessage> {
        match self {
            Proposal::Allocated(_) => None,
            Proposal::NoIdentifier => Some(CmdMessage::warning(format!(
                "Note {} has no identifier to derive from",
                note.note.title
            ))),
            Proposal::Exhausted { candidate } => Some(CmdMessage::warning(format!(
                "No free identifier found within {} attempts starting at {}",
                max_attempts, candidate
            ))),
        }
    }
}

pub(crate) fn propose(
    collection: &NoteCollection,
    note: &AnnotatedNote,
    want_child: bool,
    max_attempts: usize,
) -> Proposal {
    let Some(id) = note.note.id() else {
        return Proposal::NoIdentifier;
    };
    match collection.next_id_for_note(&note.note.path, want_child, max_attempts) {
        Some(allocated) => Proposal::Allocated(allocated),
        None => Proposal::Exhausted {
            candidate: if want_child {
                first_child(id)
            } else {
                next_sibling(id)
            },
        },
    }
}

/// Proposes the next sibling (or first child) identifier for the selected note.
pub fn run(
    collection: &NoteCollection,
    selector: &str,
    want_child: bool,
    max_attempts: usize,
) -> Result<CmdResult> {
    let note = resolve_selector(collection, selector)?;
    let proposal = propose(collection, note, want_child, max_attempts);

    let mut result = CmdResult::default().with_affected_notes(vec![note.clone()]);
    if let Some(warning) = proposal.warning(note, max_attempts) {
        result.add_message(warning);
    }
    if let Proposal::Allocated(id) = proposal {
        result.allocated_id = Some(id);
    }
    Ok(result)
}
