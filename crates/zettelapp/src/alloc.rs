//! # Unique Identifier Allocation
//!
//! A proposed identifier (a sibling or child of an existing note) may already be in
//! use. [`allocate`] walks forward through next siblings until it finds one that is
//! free, giving up after a bounded number of steps.
//!
//! Uniqueness is only checked against the set handed in by the caller; nothing here
//! coordinates with other writers.

use crate::id::next_sibling;
use std::collections::HashSet;
use tracing::debug;

/// Default number of sibling steps taken before giving up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 50;

/// Returns the first identifier at or after `candidate` (in sibling order) that is not
/// in `taken`.
///
/// `max_attempts` bounds how many times the candidate is advanced. A candidate whose
/// trailing segment has no successor cannot be advanced at all, so allocation fails as
/// soon as it is found taken.
pub fn allocate(candidate: &str, taken: &HashSet<String>, max_attempts: usize) -> Option<String> {
    let mut current = candidate.to_string();
    let mut remaining = max_attempts;

    loop {
        if !taken.contains(&current) {
            return Some(current);
        }
        if remaining == 0 {
            debug!(candidate, max_attempts, "allocation budget exhausted");
            return None;
        }

        let next = next_sibling(&current);
        if next == current {
            debug!(candidate = %current, "identifier has no successor");
            return None;
        }
        debug!(taken = %current, next = %next, "identifier in use, advancing");
        current = next;
        remaining -= 1;
    }
}
