//! # Note Collection
//!
//! The outline view needs every note in outline order, plus a hint of how strongly
//! each row is separated from the row above it. [`NoteCollection`] owns that sequence.
//!
//! ## Ordering
//!
//! [`NoteCollection::annotate`] sorts raw notes with three rules:
//! 1. Two notes with identifiers: [`compare_ids`].
//! 2. Exactly one identifier: the note holding it comes first.
//! 3. No identifiers: case-insensitive title order.
//!
//! Remaining ties (duplicate identifiers, equal titles) fall back to title and then
//! path so the result never depends on input order.
//!
//! ## Split-levels
//!
//! Each note gets the depth at which it leaves the previous note's branch:
//!
//! ```text
//! id     split
//! 1      None      first note holding an identifier
//! 1a     Some(2)
//! 1a1    Some(3)
//! 1b     Some(2)
//! 2      Some(1)
//! (none) Some(1)   identifiers end here
//! (none) None      same block as the row above
//! ```
//!
//! A note without an identifier that opens the list gets `Some(1)`.
//!
//! ## Lifecycle
//!
//! A collection is never edited in place. Each new snapshot of raw notes produces a new
//! collection, and [`diff_split_levels`] tells the view which rows changed their
//! separation and must be measured again.

use crate::alloc::allocate;
use crate::id::{first_child, next_sibling};
use crate::model::NoteMeta;
use crate::order::{compare_ids, split_level};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap, HashSet};
use std::path::{Path, PathBuf};
use tracing::debug;

/// A note with its position relative to the note above it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnotatedNote {
    #[serde(flatten)]
    pub note: NoteMeta,
    pub split_level: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NoteCollection {
    notes: Vec<AnnotatedNote>,
}

impl NoteCollection {
    /// Sorts `raw` into outline order and computes every split-level.
    pub fn annotate(mut raw: Vec<NoteMeta>) -> Self {
        raw.sort_by(compare_notes);

        let mut notes: Vec<AnnotatedNote> = Vec::with_capacity(raw.len());
        for note in raw {
            let split_level = match notes.last() {
                Some(prev) => pair_split_level(prev.note.id(), note.id()),
                None if note.id.is_none() => Some(1),
                None => None,
            };
            notes.push(AnnotatedNote { note, split_level });
        }

        debug!(notes = notes.len(), "annotated note collection");
        Self { notes }
    }

    pub fn notes(&self) -> &[AnnotatedNote] {
        &self.notes
    }

    pub fn iter(&self) -> impl Iterator<Item = &AnnotatedNote> {
        self.notes.iter()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Looks a note up by its path.
    pub fn get(&self, path: &Path) -> Option<&AnnotatedNote> {
        self.notes.iter().find(|n| n.note.path == path)
    }

    /// Every identifier currently in use.
    pub fn ids(&self) -> HashSet<String> {
        self.notes.iter().filter_map(|n| n.note.id.clone()).collect()
    }

    /// Notes whose title, display title or identifier contains `query`
    /// (case-insensitive), in collection order with their original split-levels.
    pub fn filter(&self, query: &str) -> Vec<&AnnotatedNote> {
        let needle = query.to_lowercase();
        self.notes
            .iter()
            .filter(|n| {
                let note = &n.note;
                note.title.to_lowercase().contains(&needle)
                    || note
                        .toc_title
                        .as_deref()
                        .is_some_and(|t| t.to_lowercase().contains(&needle))
                    || note
                        .id
                        .as_deref()
                        .is_some_and(|id| id.to_lowercase().contains(&needle))
            })
            .collect()
    }

    /// Path → split-level lookup for every note.
    pub fn split_levels(&self) -> HashMap<&Path, Option<usize>> {
        self.notes
            .iter()
            .map(|n| (n.note.path.as_path(), n.split_level))
            .collect()
    }

    /// Proposes a fresh identifier for a new note next to (or below) the note at `path`.
    ///
    /// Returns `None` when the note is unknown, has no identifier, or no free identifier
    /// is found within `max_attempts` sibling steps.
    pub fn next_id_for_note(
        &self,
        path: &Path,
        want_child: bool,
        max_attempts: usize,
    ) -> Option<String> {
        let id = self.get(path)?.note.id()?;
        let candidate = if want_child {
            first_child(id)
        } else {
            next_sibling(id)
        };
        allocate(&candidate, &self.ids(), max_attempts)
    }
}

/// Paths whose split-level in `new` differs from `old`.
///
/// Notes that only exist in `new` count as changed when they have a split-level. Notes
/// that disappeared are not reported; there is no row left to measure.
pub fn diff_split_levels(old: &NoteCollection, new: &NoteCollection) -> BTreeSet<PathBuf> {
    let before = old.split_levels();
    new.notes
        .iter()
        .filter(|n| before.get(n.note.path.as_path()).copied().flatten() != n.split_level)
        .map(|n| n.note.path.clone())
        .collect()
}

fn pair_split_level(prev: Option<&str>, curr: Option<&str>) -> Option<usize> {
    match (prev, curr) {
        (Some(a), Some(b)) => split_level(a, b),
        (None, None) => None,
        _ => Some(1),
    }
}

fn compare_notes(a: &NoteMeta, b: &NoteMeta) -> Ordering {
    let primary = match (a.id(), b.id()) {
        (Some(x), Some(y)) => compare_ids(x, y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };
    primary
        .then_with(|| a.title.to_lowercase().cmp(&b.title.to_lowercase()))
        .then_with(|| a.path.cmp(&b.path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alloc::DEFAULT_MAX_ATTEMPTS;

    fn note(path: &str, title: &str, id: Option<&str>) -> NoteMeta {
        let n = NoteMeta::new(path, title);
        match id {
            Some(id) => n.with_id(id),
            None => n,
        }
    }

    fn ids_and_splits(c: &NoteCollection) -> Vec<(Option<&str>, Option<usize>)> {
        c.iter().map(|n| (n.note.id(), n.split_level)).collect()
    }

    #[test]
    fn test_annotate_orders_and_splits() {
        let raw = vec![
            note("c.md", "C", Some("2")),
            note("e.md", "Loose", None),
            note("b.md", "B", Some("1a1")),
            note("a.md", "A", Some("1")),
            note("d.md", "D", Some("1a")),
            note("f.md", "another", None),
            note("g.md", "G", Some("1b")),
        ];
        let c = NoteCollection::annotate(raw);
        assert_eq!(
            ids_and_splits(&c),
            vec![
                (Some("1"), None),
                (Some("1a"), Some(2)),
                (Some("1a1"), Some(3)),
                (Some("1b"), Some(2)),
                (Some("2"), Some(1)),
                (None, Some(1)),
                (None, None),
            ]
        );
        let titles: Vec<_> = c.iter().map(|n| n.note.title.as_str()).collect();
        assert_eq!(titles[5..], ["another", "Loose"]);
    }

    #[test]
    fn test_identifier_holder_sorts_first() {
        let raw = vec![note("b.md", "B", None), note("a.md", "A", Some("1"))];
        let c = NoteCollection::annotate(raw);
        assert_eq!(c.notes()[0].note.title, "A");
        assert_eq!(c.notes()[0].split_level, None);
        assert_eq!(c.notes()[1].note.title, "B");
        assert_eq!(c.notes()[1].split_level, Some(1));
    }

    #[test]
    fn test_leading_note_without_identifier() {
        let c = NoteCollection::annotate(vec![note("x.md", "X", None), note("y.md", "Y", None)]);
        assert_eq!(ids_and_splits(&c), vec![(None, Some(1)), (None, None)]);
    }

    #[test]
    fn test_duplicate_identifiers_are_stable() {
        let raw = vec![note("b.md", "Same", Some("1")), note("a.md", "Same", Some("1"))];
        let c = NoteCollection::annotate(raw);
        assert_eq!(c.notes()[0].note.path, PathBuf::from("a.md"));
        assert_eq!(c.notes()[1].split_level, None);
    }

    #[test]
    fn test_empty_collection() {
        let c = NoteCollection::annotate(Vec::new());
        assert!(c.is_empty());
        assert!(diff_split_levels(&c, &c).is_empty());
    }

    #[test]
    fn test_filter_keeps_order_and_split_levels() {
        let c = NoteCollection::annotate(vec![
            note("a.md", "Alpha", Some("1")),
            note("b.md", "Beta", Some("1a")),
            note("c.md", "alphabet", Some("2")).with_toc_title("ABC"),
        ]);
        let hits: Vec<_> = c.filter("ALPHA").iter().map(|n| n.note.id()).collect();
        assert_eq!(hits, vec![Some("1"), Some("2")]);
        assert_eq!(c.filter("abc")[0].split_level, Some(1));
        assert_eq!(c.filter("1a").len(), 1);
    }

    #[test]
    fn test_diff_identical_is_empty() {
        let raw = vec![note("a.md", "A", Some("1")), note("b.md", "B", Some("1a"))];
        let old = NoteCollection::annotate(raw.clone());
        let new = NoteCollection::annotate(raw);
        assert!(diff_split_levels(&old, &new).is_empty());
    }

    #[test]
    fn test_diff_reports_changed_rows() {
        let old = NoteCollection::annotate(vec![
            note("a.md", "A", Some("1")),
            note("b.md", "B", Some("1a")),
            note("c.md", "C", Some("2")),
        ]);
        // a.md renumbered 1 -> 3 and d.md added as 1a1: b.md now opens the list,
        // c.md still splits at level 1.
        let new = NoteCollection::annotate(vec![
            note("a.md", "A", Some("3")),
            note("b.md", "B", Some("1a")),
            note("d.md", "D", Some("1a1")),
            note("c.md", "C", Some("2")),
        ]);
        assert_eq!(
            ids_and_splits(&new),
            vec![
                (Some("1a"), None),
                (Some("1a1"), Some(3)),
                (Some("2"), Some(1)),
                (Some("3"), Some(1)),
            ]
        );
        let changed = diff_split_levels(&old, &new);
        let expected: BTreeSet<PathBuf> = ["a.md", "b.md", "d.md"].iter().map(PathBuf::from).collect();
        assert_eq!(changed, expected);
    }

    #[test]
    fn test_diff_ignores_removed_rows_and_unsplit_new_rows() {
        let old = NoteCollection::annotate(vec![
            note("a.md", "A", Some("1")),
            note("b.md", "B", Some("1a")),
            note("c.md", "C", Some("2")),
        ]);
        // c.md removed, z.md takes the head of the list with no split of its own
        let new = NoteCollection::annotate(vec![
            note("z.md", "Z", Some("0")),
            note("a.md", "A", Some("1")),
            note("b.md", "B", Some("1a")),
        ]);
        assert_eq!(
            ids_and_splits(&new),
            vec![(Some("0"), None), (Some("1"), Some(1)), (Some("1a"), Some(2))]
        );
        let changed = diff_split_levels(&old, &new);
        assert_eq!(changed, BTreeSet::from([PathBuf::from("a.md")]));
    }

    #[test]
    fn test_next_id_for_note() {
        let c = NoteCollection::annotate(vec![
            note("a.md", "A", Some("1")),
            note("b.md", "B", Some("1a")),
            note("c.md", "C", Some("2")),
            note("d.md", "D", None),
        ]);
        let n = DEFAULT_MAX_ATTEMPTS;
        assert_eq!(c.next_id_for_note(Path::new("a.md"), false, n).as_deref(), Some("3"));
        assert_eq!(c.next_id_for_note(Path::new("a.md"), true, n).as_deref(), Some("1b"));
        assert_eq!(c.next_id_for_note(Path::new("b.md"), true, n).as_deref(), Some("1a1"));
        assert_eq!(c.next_id_for_note(Path::new("d.md"), false, n), None);
        assert_eq!(c.next_id_for_note(Path::new("missing.md"), false, n), None);
    }

    #[test]
    fn test_next_id_for_note_respects_budget() {
        let mut raw = vec![note("root.md", "Root", Some("1"))];
        let mut id = "1a".to_string();
        for i in 0..52 {
            raw.push(note(&format!("n{i}.md"), "N", Some(&id)));
            id = next_sibling(&id);
        }
        let c = NoteCollection::annotate(raw);
        assert_eq!(c.next_id_for_note(Path::new("root.md"), true, 50), None);
        assert_eq!(
            c.next_id_for_note(Path::new("root.md"), true, 100).as_deref(),
            Some("1ba")
        );
    }
}
