//! Numeric range to regular expression compilation
//!
//! Turns an inclusive range of dial strings into a pattern that matches
//! exactly the numbers in the range and nothing else, in two phases:
//!
//! 1. **Divide**: decompose `[start, end]` into ordered, non-overlapping,
//!    same-length sub-ranges whose union reconstructs the input exactly.
//!    Each sub-range shares a literal digit prefix, varies in one digit
//!    position, and is completely free in the remaining suffix; full
//!    power-of-ten blocks are tagged big.
//! 2. **Build**: render each sub-range as literal digits, one character
//!    class, and a `[0-9]` suffix, then chain adjacent sub-ranges that
//!    differ only in suffix width into a single `{min,max}` quantifier.
//!
//! The compiler stays in the string domain throughout, so range width is
//! unbounded by native integer size.

use crate::compare::{first_diverging_index, leading_run, numeric_cmp, trailing_run};
use crate::error::{RangeError, Result};
use crate::types::{DigitString, Range, SubRange};
use std::cmp::Ordering;

/// Compile the pattern for the inclusive range `[start, end]`.
///
/// Endpoints given in reverse order are swapped before compilation. A
/// leading-zero prefix common to both endpoints is preserved as literal
/// digits in front of the pattern.
///
/// # Errors
///
/// - [`RangeError::EmptyInput`] / [`RangeError::NotDigits`] on malformed
///   endpoints
/// - [`RangeError::InconsistentOrder`] when endpoint order flips again once
///   insignificant zeros are stripped (e.g. `"599"` vs `"0500"`)
pub fn generate(start: &str, end: &str) -> Result<String> {
    let range = Range::parse(start, end)?;
    let (zeros, lo, hi) = strip_common_zeros(range.start().as_str(), range.end().as_str());

    let sub_ranges = divide(lo, hi)?;
    let pieces = merge_pieces(sub_ranges.iter().map(piece_for).collect());
    let branches: Vec<String> = pieces.iter().map(render_piece).collect();

    tracing::debug!(
        start,
        end,
        sub_ranges = sub_ranges.len(),
        branches = branches.len(),
        "compiled range pattern"
    );

    let body = match branches.as_slice() {
        [single] => single.clone(),
        many => format!("({})", many.join("|")),
    };
    Ok(format!("{}{}", "0".repeat(zeros), body))
}

/// Divide phase: decompose `[lo, hi]` into same-length sub-ranges.
///
/// The union of the result is exactly `[lo, hi]`, the sub-ranges are
/// ascending and non-overlapping, and every full power-of-ten block is
/// tagged big.
pub fn divide(lo: &str, hi: &str) -> Result<Vec<SubRange>> {
    let (lo, hi) = if numeric_cmp(lo, hi) == Ordering::Greater {
        (hi, lo)
    } else {
        (lo, hi)
    };
    let raw = if lo.len() == hi.len() {
        divide_flat(lo, hi)
    } else {
        divide_banded(lo, hi)?
    };
    raw.into_iter()
        .map(|(l, h, big)| Ok(SubRange::new(DigitString::parse(&l)?, DigitString::parse(&h)?, big)))
        .collect()
}

/// A divided-but-unrendered sub-range: bounds plus the big-block tag.
type RawSubRange = (String, String, bool);

/// Same-length decomposition; positional, so leading zeros need no care.
fn divide_flat(lo: &str, hi: &str) -> Vec<RawSubRange> {
    if lo == block_start(lo.len()) && hi == nines(hi.len()) {
        return vec![(lo.to_string(), hi.to_string(), true)];
    }
    let mut out = Vec::new();
    split_flat("", lo, hi, &mut out);
    out
}

/// Differing-length decomposition: one maximal block per digit length,
/// with the two boundary bands flat-split where they are partial.
fn divide_banded(lo: &str, hi: &str) -> Result<Vec<RawSubRange>> {
    let lo_n = strip_insignificant_zeros(lo);
    let hi_n = strip_insignificant_zeros(hi);
    match numeric_cmp(lo_n, hi_n) {
        Ordering::Greater => {
            return Err(RangeError::InconsistentOrder {
                start: lo.to_string(),
                end: hi.to_string(),
            })
        }
        Ordering::Equal => return Ok(vec![(lo_n.to_string(), lo_n.to_string(), false)]),
        Ordering::Less => {}
    }
    if lo_n.len() == hi_n.len() {
        return Ok(divide_flat(lo_n, hi_n));
    }

    let (ls, le) = (lo_n.len(), hi_n.len());
    let mut out = Vec::new();

    let top = nines(ls);
    if lo_n == block_start(ls) {
        out.push((lo_n.to_string(), top, true));
    } else {
        split_flat("", lo_n, &top, &mut out);
    }

    for len in (ls + 1)..le {
        out.push((block_start(len), nines(len), true));
    }

    let base = block_start(le);
    if hi_n == nines(le) {
        out.push((base, hi_n.to_string(), true));
    } else {
        split_flat("", &base, hi_n, &mut out);
    }
    Ok(out)
}

/// Recursive flat split of same-length `[lo, hi]` with a shared `prefix`.
///
/// Emits leaves in ascending order. Every leaf satisfies the build-phase
/// invariant: shared prefix, one varying digit, then all-`0`s on the low
/// side and all-`9`s on the high side.
fn split_flat(prefix: &str, lo: &str, hi: &str, out: &mut Vec<RawSubRange>) {
    if lo == hi {
        out.push((format!("{prefix}{lo}"), format!("{prefix}{hi}"), false));
        return;
    }
    let Some(i) = first_diverging_index(lo, hi) else {
        return;
    };
    let prefix = format!("{prefix}{}", &lo[..i]);
    let (lo, hi) = (&lo[i..], &hi[i..]);
    let a = lo.as_bytes()[0];
    let b = hi.as_bytes()[0];
    let rest = lo.len() - 1;

    if rest == 0 {
        out.push((
            format!("{prefix}{}", a as char),
            format!("{prefix}{}", b as char),
            false,
        ));
        return;
    }

    let lo_rest = &lo[1..];
    let hi_rest = &hi[1..];
    let lo_all_zero = leading_run('0', lo_rest, 0) == rest;
    let hi_all_nine = trailing_run('9', hi_rest, rest - 1) == rest;

    let mut class_lo = a;
    let mut class_hi = b;
    if !lo_all_zero {
        // Ragged low boundary: [lo, a99..9] under the extended prefix.
        split_flat(&format!("{prefix}{}", a as char), lo_rest, &nines(rest), out);
        class_lo = a + 1;
    }
    if !hi_all_nine {
        class_hi = b - 1;
    }
    if class_lo <= class_hi {
        out.push((
            format!("{prefix}{}{}", class_lo as char, "0".repeat(rest)),
            format!("{prefix}{}{}", class_hi as char, "9".repeat(rest)),
            false,
        ));
    }
    if !hi_all_nine {
        // Ragged high boundary: [b00..0, hi] under the extended prefix.
        split_flat(&format!("{prefix}{}", b as char), &"0".repeat(rest), hi_rest, out);
    }
}

/// Lowest number with `len` digits; length one starts at zero.
fn block_start(len: usize) -> String {
    if len == 1 {
        "0".to_string()
    } else {
        format!("1{}", "0".repeat(len - 1))
    }
}

fn nines(len: usize) -> String {
    "9".repeat(len)
}

/// Drop numerically insignificant leading zeros, keeping at least one digit.
fn strip_insignificant_zeros(s: &str) -> &str {
    let stripped = s.trim_start_matches('0');
    if stripped.is_empty() {
        "0"
    } else {
        stripped
    }
}

/// Leading-zero prefix shared by both endpoints, as literal digits.
///
/// At least one digit of the shorter endpoint always remains.
fn strip_common_zeros<'a>(lo: &'a str, hi: &'a str) -> (usize, &'a str, &'a str) {
    let limit = lo.len().min(hi.len()).saturating_sub(1);
    let n = lo
        .bytes()
        .zip(hi.bytes())
        .take(limit)
        .take_while(|&(a, b)| a == b'0' && b == b'0')
        .count();
    (n, &lo[n..], &hi[n..])
}

/// One rendered branch in the making: literal stem, optional class at the
/// varying position, and the width range of the free `[0-9]` suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Piece {
    stem: String,
    class: Option<(u8, u8)>,
    free_min: usize,
    free_max: usize,
}

/// Build phase for one sub-range: digit-by-digit comparison.
///
/// Positions where both endpoints agree become stem literals; the first
/// divergence becomes the class. A maximal `[0-9]` class folds into the
/// free suffix so the quantifier can absorb it.
fn piece_for(sub: &SubRange) -> Piece {
    let lo = sub.lo.as_str();
    let hi = sub.hi.as_str();
    match first_diverging_index(lo, hi) {
        None => Piece {
            stem: lo.to_string(),
            class: None,
            free_min: 0,
            free_max: 0,
        },
        Some(i) => {
            let a = lo.as_bytes()[i];
            let b = hi.as_bytes()[i];
            let free = lo.len() - i - 1;
            debug_assert_eq!(
                leading_run('0', lo, i + 1),
                free,
                "divide leaves an all-zero low suffix"
            );
            debug_assert_eq!(
                trailing_run('9', hi, hi.len() - 1).min(free),
                free,
                "divide leaves an all-nine high suffix"
            );
            if (a, b) == (b'0', b'9') {
                Piece {
                    stem: lo[..i].to_string(),
                    class: None,
                    free_min: free + 1,
                    free_max: free + 1,
                }
            } else {
                Piece {
                    stem: lo[..i].to_string(),
                    class: Some((a, b)),
                    free_min: free,
                    free_max: free,
                }
            }
        }
    }
}

/// Look-ahead merge across adjacent sub-ranges: equal stem and class with
/// consecutive suffix widths collapse into one `{min,max}` branch. The big
/// block chains produced by the divide phase are exactly this shape.
fn merge_pieces(pieces: Vec<Piece>) -> Vec<Piece> {
    let mut out: Vec<Piece> = Vec::new();
    for piece in pieces {
        if let Some(last) = out.last_mut() {
            if last.stem == piece.stem
                && last.class == piece.class
                && piece.free_min == piece.free_max
                && piece.free_min == last.free_max + 1
            {
                last.free_max = piece.free_max;
                continue;
            }
        }
        out.push(piece);
    }
    out
}

fn render_piece(piece: &Piece) -> String {
    let mut s = piece.stem.clone();
    if let Some((a, b)) = piece.class {
        s.push_str(&render_class(a, b));
    }
    s.push_str(&render_free(piece.free_min, piece.free_max));
    s
}

fn render_class(a: u8, b: u8) -> String {
    if a == b {
        (a as char).to_string()
    } else if b == a + 1 {
        format!("[{}{}]", a as char, b as char)
    } else {
        format!("[{}-{}]", a as char, b as char)
    }
}

fn render_free(min: usize, max: usize) -> String {
    match (min, max) {
        (0, 0) => String::new(),
        (1, 1) => "[0-9]".to_string(),
        (n, m) if n == m => format!("[0-9]{{{n}}}"),
        (n, m) => format!("[0-9]{{{n},{m}}}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_single_value_is_literal() {
        assert_eq!(generate("42", "42").unwrap(), "42");
        assert_eq!(generate("007", "007").unwrap(), "007");
    }

    #[test]
    fn test_full_single_digit_block() {
        assert_eq!(generate("0", "9").unwrap(), "[0-9]");
    }

    #[test]
    fn test_full_thousands_block() {
        assert_eq!(generate("1000", "1999").unwrap(), "1[0-9]{3}");
    }

    #[test]
    fn test_simple_class() {
        assert_eq!(generate("2", "7").unwrap(), "[2-7]");
        // Adjacent digits drop the dash.
        assert_eq!(generate("5", "6").unwrap(), "[56]");
    }

    #[test]
    fn test_reversed_endpoints_are_swapped() {
        assert_eq!(
            generate("1999", "1000").unwrap(),
            generate("1000", "1999").unwrap()
        );
    }

    #[test]
    fn test_flat_split_branches() {
        assert_eq!(generate("100", "200").unwrap(), "(1[0-9]{2}|200)");
        assert_eq!(
            generate("1234", "1267").unwrap(),
            "(123[4-9]|12[45][0-9]|126[0-7])"
        );
    }

    #[test]
    fn test_leading_zero_prefix_is_preserved() {
        assert_eq!(generate("0500", "0599").unwrap(), "05[0-9]{2}");
        assert_eq!(generate("0050", "0099").unwrap(), "00[5-9][0-9]");
    }

    #[test]
    fn test_big_block_chain_merges_into_quantifier() {
        assert_eq!(generate("1", "999").unwrap(), "[1-9][0-9]{0,2}");
        assert_eq!(
            generate("5", "999").unwrap(),
            "([5-9]|[1-9][0-9]{1,2})"
        );
        assert_eq!(
            generate("1", "1000000").unwrap(),
            "([1-9][0-9]{0,5}|1000000)"
        );
    }

    #[test]
    fn test_all_nines_endpoint() {
        assert_eq!(generate("10", "99").unwrap(), "[1-9][0-9]");
        assert_eq!(generate("0", "999").unwrap(), "([0-9]|[1-9][0-9]{1,2})");
    }

    #[test]
    fn test_divide_reconstructs_exactly() {
        let subs = divide("1234", "1267").unwrap();
        // Ascending, non-overlapping, same-length, exact union.
        let mut expect = 1234i64;
        for sub in &subs {
            assert_eq!(sub.lo.digit_count(), sub.hi.digit_count());
            assert_eq!(sub.lo.as_str().parse::<i64>().unwrap(), expect);
            expect = sub.hi.as_str().parse::<i64>().unwrap() + 1;
        }
        assert_eq!(expect, 1268);
    }

    #[test]
    fn test_divide_tags_full_blocks_big() {
        let subs = divide("1", "99999").unwrap();
        let big: Vec<bool> = subs.iter().map(|s| s.is_big).collect();
        // [1,9] is not the full one-digit block (misses 0); all later bands are.
        assert_eq!(big, vec![false, true, true, true, true]);
    }

    #[test]
    fn test_inconsistent_order_is_rejected() {
        // Digit-count order says "0500" is the upper endpoint, numeric order
        // disagrees once the zeros are stripped.
        assert!(matches!(
            generate("599", "0500"),
            Err(RangeError::InconsistentOrder { .. })
        ));
    }

    #[test]
    fn test_invalid_input() {
        assert!(matches!(generate("", "9"), Err(RangeError::EmptyInput)));
        assert!(matches!(
            generate("12", "1x"),
            Err(RangeError::NotDigits { .. })
        ));
    }
}
