//! Integer-domain overlap arithmetic
//!
//! The overlap resolver works on true integers, but dial strings carry
//! significant leading zeros that plain parsing would destroy. Every digit
//! string is therefore encoded with the fixed [`PAD_PREFIX`] in front before
//! any arithmetic, and decoded by stripping the prefix again, so `"0050"`
//! survives the round trip intact. Encoded order equals dial-string order
//! (digit count first), and strings of different widths land in disjoint
//! value bands, so two ranges overlap exactly when their dial strings do.
//!
//! Set results are materialized element lists, as the callers consume them;
//! cost is proportional to the width of the ranges involved.

use crate::config::{MAX_OVERLAP_DIGITS, PAD_PREFIX};
use crate::error::{RangeError, Result};
use crate::types::{DigitString, IntRange, Range, RangeSource};

/// Encode a dial string as a pad-prefixed integer.
///
/// # Errors
///
/// [`RangeError::TooManyDigits`] when the padded value would not fit `i64`.
pub fn encode_padded(digits: &DigitString) -> Result<i64> {
    if digits.digit_count() > MAX_OVERLAP_DIGITS {
        return Err(RangeError::TooManyDigits {
            len: digits.digit_count(),
            max: MAX_OVERLAP_DIGITS,
        });
    }
    let mut value: i64 = 0;
    for b in PAD_PREFIX.bytes().chain(digits.as_str().bytes()) {
        value = value * 10 + i64::from(b - b'0');
    }
    Ok(value)
}

/// Decode a pad-prefixed integer back into a dial string.
///
/// # Errors
///
/// [`RangeError::UnpaddedValue`] when the value was not produced by
/// [`encode_padded`] (its decimal form does not start with the prefix).
pub fn decode_padded(value: i64) -> Result<DigitString> {
    let rendered = value.to_string();
    let digits = rendered
        .strip_prefix(PAD_PREFIX)
        .filter(|rest| !rest.is_empty())
        .ok_or(RangeError::UnpaddedValue { value })?;
    DigitString::parse(digits)
}

/// Encode both endpoints of a range.
pub fn encode_range(range: &Range) -> Result<IntRange> {
    Ok(IntRange::new(
        encode_padded(range.start())?,
        encode_padded(range.end())?,
    ))
}

/// Decode an encoded run back into an ordered dial-string range.
pub fn decode_range(run: IntRange) -> Result<Range> {
    Ok(Range::new(decode_padded(run.begin)?, decode_padded(run.end)?))
}

/// Integers present in both runs, ascending.
///
/// Disjoint runs yield an empty vector; that is the documented no-op
/// short-circuit, not an error.
pub fn overlap(r1: IntRange, r2: IntRange) -> Vec<i64> {
    let begin = r1.begin.max(r2.begin);
    let end = r1.end.min(r2.end);
    if begin > end {
        return Vec::new();
    }
    (begin..=end).collect()
}

/// Symmetric difference, ascending, each element tagged with the run that
/// contributed it. The untagged form of this operation is the same list
/// with the tags dropped by the caller.
pub fn overlap_inverse(r1: IntRange, r2: IntRange) -> Vec<(i64, RangeSource)> {
    let mut out = Vec::new();
    for value in r1.begin..=r1.end {
        if !r2.contains(value) {
            out.push((value, RangeSource::First));
        }
    }
    for value in r2.begin..=r2.end {
        if !r1.contains(value) {
            out.push((value, RangeSource::Second));
        }
    }
    out.sort_by_key(|&(value, _)| value);
    out
}

/// Group a sorted, de-duplicated sequence into maximal consecutive runs.
///
/// A new run starts whenever `next - prev != 1`.
pub fn contiguous_runs(values: &[i64]) -> Vec<IntRange> {
    debug_assert!(
        values.windows(2).all(|w| w[0] < w[1]),
        "input must be sorted and de-duplicated"
    );
    let mut runs: Vec<IntRange> = Vec::new();
    for &value in values {
        match runs.last_mut() {
            Some(run) if value - run.end == 1 => run.end = value,
            _ => runs.push(IntRange::new(value, value)),
        }
    }
    runs
}
