use crate::collection::{diff_split_levels, NoteCollection};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Reports which rows must be re-measured after the collection was rebuilt.
///
/// That is every row whose split-level changed, plus every row the host flagged as
/// changed on its own (an external edit can change a row's height without touching its
/// identifier). Flagged paths no longer in the collection are dropped.
pub fn run(
    previous: &NoteCollection,
    current: &NoteCollection,
    flagged: &[PathBuf],
) -> Result<CmdResult> {
    let mut paths: BTreeSet<PathBuf> = diff_split_levels(previous, current);
    paths.extend(
        flagged
            .iter()
            .filter(|p| current.get(p).is_some())
            .cloned(),
    );

    let mut result = CmdResult::default().with_listed_notes(current.notes().to_vec());
    if !paths.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "{} notes need re-measuring",
            paths.len()
        )));
    }
    Ok(result.with_note_paths(paths.into_iter().collect()))
}
