//! Configuration constants for the dialrange engine
//!
//! Centralized limits used throughout the engine for:
//! - Integer-conversion safety (padded values must fit `i64`)
//! - Resource constraints (set materialization, input size)
//! - Fixed-point iteration bounds
//!
//! These are compile-time constants; every algorithm parameter a caller can
//! legitimately vary (digit count, range kinds) is an explicit function
//! argument instead, so the core never reads ambient state.

/// Prefix prepended to every digit string before integer conversion.
///
/// Digit strings carry significant leading zeros ("0500" and "500" are
/// different dial strings). Prepending a fixed marker before parsing keeps
/// those zeros inside the integer value, and stripping it on the way back
/// restores the original width. Must not start with '0'.
pub const PAD_PREFIX: &str = "11";

/// Maximum digit-string length accepted by the overlap/splitter path.
///
/// E.164 caps international numbers at 15 digits; with the two pad digits in
/// front, a 15-digit string still parses comfortably inside `i64`. The regex
/// compiler has no such limit because it never leaves the string domain.
pub const MAX_OVERLAP_DIGITS: usize = 15;

/// Maximum number of labeled ranges in a single resolution run.
///
/// Dial plans seen in practice have tens of ranges per site; 1000 leaves
/// ample headroom while bounding the pairwise scan.
pub const MAX_INPUT_RANGES: usize = 1_000;

/// Maximum number of splitter passes before giving up.
///
/// Each conflicting pair is resolved at most once, so the pass count is
/// bounded by the number of conflicts a plan can produce. A plan within
/// [`MAX_INPUT_RANGES`] cannot legitimately reach this bound; hitting it is
/// reported as [`crate::error::RangeError::PassLimitExceeded`] rather than
/// looping forever.
pub const MAX_SPLIT_PASSES: usize = 100_000;
