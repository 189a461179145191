//! # Outline Ordering
//!
//! [`compare_ids`] puts identifiers in outline order by walking their segments left to
//! right and deciding at the first segment that differs:
//!
//! - **Digit vs Digit**: numeric value (`"2"` < `"10"`), arbitrarily long runs included.
//! - **Letter vs Letter**: shorter run first (counted in characters), then alphabetical
//!   (`"z"` < `"aa"`), which is the same order the incrementer produces them in.
//! - **Other vs Other**: plain string order.
//! - **Different classifications**: Digit < Letter < Other.
//!
//! When every shared segment is equal, the identifier with fewer segments sorts first,
//! so a parent always precedes its children:
//!
//! ```text
//! 1  <  1a  <  1a1  <  1a2  <  1b  <  1z  <  1aa  <  2  <  10
//! ```
//!
//! Two identifiers compare `Equal` only when they are the same string, which keeps the
//! order total.
//!
//! [`split_level`] answers where two neighbours in that order part ways; the view uses
//! it to decide how strong a visual break goes between them.

use crate::segment::{segments, Classification, Segment};
use std::cmp::Ordering;

/// Compares two identifiers in outline order.
pub fn compare_ids(a: &str, b: &str) -> Ordering {
    let left = segments(a);
    let right = segments(b);

    for (x, y) in left.iter().zip(right.iter()) {
        let ord = compare_segments(x, y);
        if ord != Ordering::Equal {
            return ord;
        }
    }

    left.len().cmp(&right.len())
}

fn compare_segments(x: &Segment<'_>, y: &Segment<'_>) -> Ordering {
    if x.class != y.class {
        return x.class.cmp(&y.class);
    }
    match x.class {
        Classification::Digit => compare_numeric(x.text, y.text),
        Classification::Letter => x
            .text
            .chars()
            .count()
            .cmp(&y.text.chars().count())
            .then_with(|| x.text.cmp(y.text)),
        Classification::Other => x.text.cmp(y.text),
    }
}

/// Numeric order on digit runs without parsing, so no run is too long to compare.
/// Equal values with different spellings (`"7"`, `"07"`) fall back to the shorter text
/// first.
fn compare_numeric(x: &str, y: &str) -> Ordering {
    let xs = x.trim_start_matches('0');
    let ys = y.trim_start_matches('0');
    xs.len()
        .cmp(&ys.len())
        .then_with(|| xs.cmp(ys))
        .then_with(|| x.len().cmp(&y.len()))
}

/// Returns the 1-based segment index at which `prev` and `curr` diverge.
///
/// Running out of segments counts as diverging at that index (`"1"` vs `"1a"` is `2`).
/// Segment-wise identical identifiers have no split and yield `None`.
pub fn split_level(prev: &str, curr: &str) -> Option<usize> {
    let left = segments(prev);
    let right = segments(curr);
    let depth = left.len().max(right.len());

    (0..depth)
        .find(|&i| left.get(i) != right.get(i))
        .map(|i| i + 1)
}
