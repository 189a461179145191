//! # Carry-Propagating Increment
//!
//! Computes the successor of a single segment. This is the arithmetic under every
//! "next sibling" identifier.
//!
//! - **Digit runs** are decimal integers: `"9"` → `"10"`, `"09"` → `"10"`. Leading zeros
//!   are not preserved.
//! - **Letter runs** are spreadsheet-column counters: the rightmost letter moves one
//!   step, `z` rolls over to `a` and carries left, and a carry out of the leftmost
//!   letter grows the run: `"z"` → `"aa"`, `"az"` → `"ba"`, `"zz"` → `"aaa"`.
//! - **Other runs** have no successor.
//!
//! Uppercase and lowercase are two separate alphabets: `Z` rolls over to `A`, never to
//! `a`, and the letter prepended on overflow takes the case of the leftmost letter
//! (`"Z"` → `"AA"`). A carry still moves between neighbouring letters of different case
//! (`"aZ"` → `"bA"`).
//!
//! `None` means "no defined successor". Callers decide what that means for them; the
//! identifier generator keeps the segment unchanged.

use crate::segment::Classification;

/// Returns the successor of `segment`, or `None` when it has none.
pub fn increment(segment: &str, class: Classification) -> Option<String> {
    match class {
        Classification::Digit => increment_digits(segment),
        Classification::Letter => increment_letters(segment),
        Classification::Other => None,
    }
}

fn increment_digits(segment: &str) -> Option<String> {
    let value: u64 = segment.parse().ok()?;
    value.checked_add(1).map(|next| next.to_string())
}

fn increment_letters(segment: &str) -> Option<String> {
    if segment.is_empty() || !segment.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }

    // Work right to left on a byte copy; ASCII-only was checked above.
    let mut bytes = segment.as_bytes().to_vec();
    let mut carry = true;
    for b in bytes.iter_mut().rev() {
        if !carry {
            break;
        }
        match *b {
            b'z' => *b = b'a',
            b'Z' => *b = b'A',
            _ => {
                *b += 1;
                carry = false;
            }
        }
    }

    if carry {
        let lead = if bytes[0].is_ascii_uppercase() {
            b'A'
        } else {
            b'a'
        };
        bytes.insert(0, lead);
    }

    String::from_utf8(bytes).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letters(s: &str) -> Option<String> {
        increment(s, Classification::Letter)
    }

    fn digits(s: &str) -> Option<String> {
        increment(s, Classification::Digit)
    }

    #[test]
    fn test_letter_increment() {
        assert_eq!(letters("a").as_deref(), Some("b"));
        assert_eq!(letters("y").as_deref(), Some("z"));
        assert_eq!(letters("z").as_deref(), Some("aa"));
        assert_eq!(letters("az").as_deref(), Some("ba"));
        assert_eq!(letters("zz").as_deref(), Some("aaa"));
        assert_eq!(letters("abz").as_deref(), Some("aca"));
    }

    #[test]
    fn test_uppercase_is_its_own_alphabet() {
        assert_eq!(letters("A").as_deref(), Some("B"));
        assert_eq!(letters("Z").as_deref(), Some("AA"));
        assert_eq!(letters("AZ").as_deref(), Some("BA"));
        assert_eq!(letters("ZZ").as_deref(), Some("AAA"));
    }

    #[test]
    fn test_mixed_case_run_keeps_case_per_character() {
        assert_eq!(letters("aZ").as_deref(), Some("bA"));
        assert_eq!(letters("Az").as_deref(), Some("Ba"));
        assert_eq!(letters("Zz").as_deref(), Some("AAa"));
        assert_eq!(letters("zZ").as_deref(), Some("aaA"));
    }

    #[test]
    fn test_long_letter_run_carries_all_the_way() {
        let run = "z".repeat(10_000);
        let next = letters(&run).unwrap();
        assert_eq!(next.len(), 10_001);
        assert!(next.chars().all(|c| c == 'a'));
    }

    #[test]
    fn test_non_ascii_letters_have_no_successor() {
        assert_eq!(letters("é"), None);
        assert_eq!(letters("aé"), None);
        assert_eq!(letters(""), None);
    }

    #[test]
    fn test_digit_increment() {
        assert_eq!(digits("1").as_deref(), Some("2"));
        assert_eq!(digits("9").as_deref(), Some("10"));
        assert_eq!(digits("09").as_deref(), Some("10"));
        assert_eq!(digits("0").as_deref(), Some("1"));
        assert_eq!(digits("199").as_deref(), Some("200"));
    }

    #[test]
    fn test_digit_guards() {
        assert_eq!(digits(""), None);
        assert_eq!(digits("abc"), None);
        assert_eq!(digits(&u64::MAX.to_string()), None);
        assert_eq!(digits("99999999999999999999999"), None);
    }

    #[test]
    fn test_other_has_no_successor() {
        assert_eq!(increment("-", Classification::Other), None);
        assert_eq!(increment("", Classification::Other), None);
    }
}
