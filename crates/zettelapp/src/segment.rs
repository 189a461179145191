//! # Identifier Segments
//!
//! An outline identifier such as `1a12b` is a sequence of **segments**: maximal runs of
//! characters sharing one [`Classification`]. Segments alternate in practice (`1`, `a`,
//! `12`, `b`), and each segment is one level of the outline.
//!
//! ```text
//! "1a12b"  ->  ["1", "a", "12", "b"]   level 4
//! "3"      ->  ["3"]                   level 1
//! "1-a"    ->  ["1", "-", "a"]         level 3 ("-" is Other)
//! ```
//!
//! Two views are needed by the rest of the engine:
//! - [`segments`]: the full sequence, used by comparison and level counting.
//! - [`last_segment`]: only the trailing run, which is what increments mutate.
//!
//! Concatenating the segments of an identifier always reproduces it exactly.

/// How a character (and therefore a segment) is treated by the engine.
///
/// The derived ordering is the tie-break used when two identifiers hold segments of
/// different classifications at the same position: numbers before letters before
/// anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Classification {
    Digit,
    Letter,
    Other,
}

/// Classifies a single character.
///
/// Digits are ASCII decimal digits only. Letters are any alphabetic character; note
/// that only ASCII letters have a successor (see [`crate::increment`]).
pub fn classify(c: char) -> Classification {
    if c.is_ascii_digit() {
        Classification::Digit
    } else if c.is_alphabetic() {
        Classification::Letter
    } else {
        Classification::Other
    }
}

/// A maximal run of same-classified characters, borrowed from its identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub class: Classification,
}

/// Splits an identifier into its segments, left to right.
pub fn segments(id: &str) -> Vec<Segment<'_>> {
    let mut result = Vec::new();
    let mut start = 0;
    let mut current: Option<Classification> = None;

    for (pos, c) in id.char_indices() {
        let class = classify(c);
        match current {
            Some(prev) if prev == class => {}
            Some(prev) => {
                result.push(Segment {
                    text: &id[start..pos],
                    class: prev,
                });
                start = pos;
                current = Some(class);
            }
            None => current = Some(class),
        }
    }

    if let Some(class) = current {
        result.push(Segment {
            text: &id[start..],
            class,
        });
    }

    result
}

/// Returns the trailing segment of `id` and its classification.
///
/// Scans backward from the last character while the classification matches the
/// first character scanned. An empty identifier yields `("", Other)`.
pub fn last_segment(id: &str) -> (&str, Classification) {
    let split = split_last_segment(id);
    (split.1, split.2)
}

/// Splits `id` into `(prefix, trailing run, classification)`.
///
/// The prefix is everything before the trailing run, kept verbatim.
pub fn split_last_segment(id: &str) -> (&str, &str, Classification) {
    let mut chars = id.char_indices().rev();
    let Some((last_pos, last_char)) = chars.next() else {
        return ("", "", Classification::Other);
    };

    let class = classify(last_char);
    let mut start = last_pos;
    for (pos, c) in chars {
        if classify(c) != class {
            break;
        }
        start = pos;
    }

    (&id[..start], &id[start..], class)
}
