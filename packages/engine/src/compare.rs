//! Digit-string comparison primitives
//!
//! Digit strings order by digit count first ("99" < "100", but also
//! "0500" > "099"), then lexicographically, which for equal-length ASCII
//! digit strings coincides with numeric order. The pattern compiler
//! additionally needs to know *where* two equal-length strings first
//! diverge and how far a run of a given digit extends, so those scans
//! live here next to the ordering.

use std::cmp::Ordering;

/// Compare two digit strings numerically, digit count first.
///
/// Both inputs must already be validated digit strings; this function
/// performs no validation of its own.
pub fn numeric_cmp(a: &str, b: &str) -> Ordering {
    match a.len().cmp(&b.len()) {
        Ordering::Equal => a.cmp(b),
        other => other,
    }
}

/// First position at which two equal-length digit strings differ.
///
/// Returns `None` when the strings are identical. Callers guarantee equal
/// length; trailing positions of the longer string are never inspected.
pub fn first_diverging_index(a: &str, b: &str) -> Option<usize> {
    debug_assert_eq!(a.len(), b.len(), "divergence scan requires equal length");
    a.bytes().zip(b.bytes()).position(|(x, y)| x != y)
}

/// Length of the run of `digit` starting at byte index `from`, scanning
/// forward. Returns 0 when `from` is out of bounds.
pub fn leading_run(digit: char, s: &str, from: usize) -> usize {
    s.as_bytes()
        .get(from..)
        .map_or(0, |tail| tail.iter().take_while(|&&b| b == digit as u8).count())
}

/// Length of the run of `digit` ending at byte index `from` (inclusive),
/// scanning backward. Returns 0 when `from` is out of bounds.
pub fn trailing_run(digit: char, s: &str, from: usize) -> usize {
    s.as_bytes()
        .get(..=from)
        .map_or(0, |head| head.iter().rev().take_while(|&&b| b == digit as u8).count())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_cmp_by_length() {
        assert_eq!(numeric_cmp("99", "100"), Ordering::Less);
        assert_eq!(numeric_cmp("100", "99"), Ordering::Greater);
        // Leading zeros count as digits: "0500" is a 4-digit string.
        assert_eq!(numeric_cmp("0500", "099"), Ordering::Greater);
    }

    #[test]
    fn test_numeric_cmp_same_length() {
        assert_eq!(numeric_cmp("123", "124"), Ordering::Less);
        assert_eq!(numeric_cmp("123", "123"), Ordering::Equal);
        assert_eq!(numeric_cmp("900", "123"), Ordering::Greater);
        assert_eq!(numeric_cmp("0050", "0049"), Ordering::Greater);
    }

    #[test]
    fn test_first_diverging_index() {
        assert_eq!(first_diverging_index("1234", "1254"), Some(2));
        assert_eq!(first_diverging_index("1234", "1234"), None);
        assert_eq!(first_diverging_index("0", "9"), Some(0));
        assert_eq!(first_diverging_index("1200", "1299"), Some(2));
    }

    #[test]
    fn test_leading_run() {
        assert_eq!(leading_run('0', "10005", 1), 3);
        assert_eq!(leading_run('0', "10005", 0), 0);
        assert_eq!(leading_run('9', "1999", 1), 3);
        assert_eq!(leading_run('0', "000", 0), 3);
        // Out of bounds is an empty run, not a panic.
        assert_eq!(leading_run('0', "000", 7), 0);
    }

    #[test]
    fn test_trailing_run() {
        assert_eq!(trailing_run('9', "1999", 3), 3);
        assert_eq!(trailing_run('9', "1990", 3), 0);
        assert_eq!(trailing_run('9', "1990", 2), 2);
        assert_eq!(trailing_run('9', "99", 1), 2);
        assert_eq!(trailing_run('9', "99", 5), 0);
    }
}
