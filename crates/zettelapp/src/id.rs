//! # Sibling and Child Identifiers
//!
//! Derives new identifiers from an existing one:
//!
//! | Operation         | `"1"`  | `"1a"`  | `"1a9"`  | `"1z"`  | `"1-"` |
//! |-------------------|--------|---------|----------|---------|--------|
//! | [`next_sibling`]  | `"2"`  | `"1b"`  | `"1a10"` | `"1aa"` | `"1-"` |
//! | [`first_child`]   | `"1a"` | `"1a1"` | `"1a9a"` | `"1z1"` | `"1-"` |
//!
//! Only the trailing segment is ever mutated, so a sibling always keeps its depth and
//! a child is always exactly one level deeper. Children alternate segment type with
//! their parent so the new level stays a separate segment. Identifiers ending in an
//! Other segment (or empty ones) are returned unchanged by both operations.

use crate::increment::increment;
use crate::segment::{segments, split_last_segment, Classification};

/// Returns the identifier of the next sibling of `id`.
///
/// When the trailing segment has no successor the identifier is returned unchanged.
pub fn next_sibling(id: &str) -> String {
    let (prefix, trailing, class) = split_last_segment(id);
    match increment(trailing, class) {
        Some(next) => format!("{prefix}{next}"),
        None => id.to_string(),
    }
}

/// Returns the identifier of the first child of `id`.
pub fn first_child(id: &str) -> String {
    let (_, _, class) = split_last_segment(id);
    match class {
        Classification::Digit => format!("{id}a"),
        Classification::Letter => format!("{id}1"),
        Classification::Other => id.to_string(),
    }
}

/// Nesting depth of `id`: its number of segments.
pub fn level(id: &str) -> usize {
    segments(id).len()
}
